use std::path::PathBuf;

use crate::DeclarationRecord;
use crate::MemberRecord;

pub const CONTROLLER_SOURCE: &str = r#"<?php

declare(strict_types=1);

namespace Vendor\Skeleton\Controller;

use Psr\Http\Message\ResponseInterface;

/**
 * Example controller.
 *
 * Shows a list of items.
 *
 * @author Jane Doe <jane@example.com>
 * @see https://example.com/docs
 */
final class ExampleController extends ActionController
{
    /**
     * @var string
     */
    private string $title = 'class';

    /**
     * Render the list view.
     *
     * @param int $page The page number
     * @param string $sort
     * @return ResponseInterface
     * @throws \RuntimeException when the view is missing
     */
    public function listAction(int $page = 1, string $sort = 'asc'): ResponseInterface
    {
        $callback = function ($item) {
            return $item;
        };

        return $this->htmlResponse(self::class);
    }

    public function showAction(): ResponseInterface
    {
        return $this->htmlResponse();
    }
}
"#;

pub const MIDDLEWARE_SOURCE: &str = r"<?php

namespace Vendor\Skeleton\Middleware;

/**
 * Adds a header to every response.
 */
class ExampleMiddleware implements MiddlewareInterface
{
    /**
     * Process an incoming request.
     *
     * @param ServerRequestInterface $request
     * @param RequestHandlerInterface $handler
     * @return ResponseInterface
     */
    public function process(ServerRequestInterface $request, RequestHandlerInterface $handler): ResponseInterface
    {
        return $handler->handle($request);
    }
}
";

pub const GLOBAL_SOURCE: &str = r"<?php

/** A helper without a namespace. */
class Helper
{
    /** Say hello. */
    public static function greet(): string
    {
        return 'hello';
    }
}
";

pub fn declaration(namespace: &str, type_name: &str) -> DeclarationRecord {
	DeclarationRecord {
		namespace: namespace.to_string(),
		type_name: type_name.to_string(),
		documentation: None,
		members: vec![],
		source_path: PathBuf::from(format!("{type_name}.php")),
	}
}

pub fn member(name: &str, documentation: Option<&str>) -> MemberRecord {
	MemberRecord {
		name: name.to_string(),
		documentation: documentation.map(ToString::to_string),
	}
}
