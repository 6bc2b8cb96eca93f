use std::path::PathBuf;
use std::process;

use clap::Parser;
use docmd_cli::DocmdCli;
use docmd_core::AnyEmptyResult;
use docmd_core::DocmdError;
use docmd_core::project::GenerateEvent;
use docmd_core::project::GenerateOptions;
use docmd_core::project::generate;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,bold) => {
		if color_enabled() {
			format!("{}", $text.bold())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = DocmdCli::parse();

	// Respect NO_COLOR env var, --no-color flag and non-color terminals.
	let use_color = !args.no_color
		&& std::env::var_os("NO_COLOR").is_none()
		&& supports_color::on(supports_color::Stream::Stdout).is_some();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	init_logging(args.verbose, use_color);

	if let Err(e) = run(&args) {
		match e.downcast::<DocmdError>() {
			Ok(docmd_err) => {
				let report: miette::Report = (*docmd_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(1);
	}
}

/// Logs go to stderr so stdout only carries progress lines. `DOCMD_LOG`
/// takes precedence over `--verbose`.
fn init_logging(verbose: bool, use_color: bool) {
	let default_level = if verbose { "debug" } else { "warn" };
	let filter =
		EnvFilter::try_from_env("DOCMD_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.with_target(false)
		.try_init()
		.ok();
}

fn resolve_root(args: &DocmdCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn resolve_options(args: &DocmdCli) -> Result<GenerateOptions, DocmdError> {
	let root = resolve_root(args);
	let mut options = GenerateOptions::load(&root)?;

	if let Some(source) = &args.source {
		options.source_dir = root.join(source);
	}
	if let Some(output) = &args.output {
		options.output_dir = root.join(output);
	}

	Ok(options)
}

fn print_banner() {
	println!();
	println!("{}", colored!("docmd: documentation blocks to markdown", bold));
	println!();
}

fn run(args: &DocmdCli) -> AnyEmptyResult {
	print_banner();

	let options = resolve_options(args)?;
	let verbose = args.verbose;

	let report = generate(&options, |event| {
		match event {
			GenerateEvent::ScanStarted { extension } => {
				println!("Scanning {extension} files...");
			}
			GenerateEvent::ScanFinished { declarations } => {
				println!("   Found {declarations} classes");
			}
			GenerateEvent::GenerateStarted => {
				println!("Generating documentation...");
			}
			GenerateEvent::DocumentWritten { path } if verbose => {
				println!("   Wrote {}", path.display());
			}
			_ => {}
		}
	})?;

	println!(
		"{} {}",
		colored!("Documentation generated successfully in", green),
		report.output_dir.display()
	);
	println!();
	println!("{}", colored!("Done!", bold));

	Ok(())
}
