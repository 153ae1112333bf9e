mod cli;

use cli::Args;
use std::process;
use tgf_deps::adapters::outbound::console::StderrProgressReporter;
use tgf_deps::adapters::outbound::filesystem::FileSystemReader;
use tgf_deps::application::dto::QueryRequest;
use tgf_deps::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use tgf_deps::application::use_cases::QueryGraphUseCase;
use tgf_deps::config::{self, ConfigFile};
use tgf_deps::ports::outbound::ProgressReporter;
use tgf_deps::shared::error::ExitCode;
use tgf_deps::shared::Result;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse_args();
    init_tracing(args.verbose);
    let quiet = args.quiet;

    if let Err(e) = run(args) {
        progress_reporter(quiet).report_failure(&e);
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "tgf_deps=debug"
    } else {
        "tgf_deps=warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn progress_reporter(quiet: bool) -> StderrProgressReporter {
    if quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    }
}

fn load_config(args: &Args) -> Result<ConfigFile> {
    if let Some(path) = args.config.as_deref() {
        return config::load_config_from_path(path);
    }
    let current_dir = std::env::current_dir()?;
    Ok(config::discover_config(&current_dir)?.unwrap_or_default())
}

fn run(args: Args) -> Result<()> {
    // CLI flags take precedence over the config file
    let config = load_config(&args)?;
    let format = match args.format {
        Some(format) => format,
        None => config.output_format()?.unwrap_or_default(),
    };
    let output = args.output.clone().or(config.output);
    let max_depth = args.max_depth.or(config.max_depth);

    let mut use_case = QueryGraphUseCase::new(FileSystemReader::new(), progress_reporter(args.quiet));
    if let Some(max_depth) = max_depth {
        use_case = use_case.with_max_depth(max_depth);
    }

    let request = QueryRequest::new(args.file.clone(), args.query());
    let response = use_case.execute(request)?;

    let reporter = progress_reporter(args.quiet);
    reporter.report(FormatterFactory::progress_message(format));

    let formatter = FormatterFactory::create(format);
    let formatted_output = response.render(formatter.as_ref())?;

    let presenter = PresenterFactory::create(PresenterType::from_output(output.clone()));
    presenter.present(&formatted_output)?;

    if let Some(path) = output {
        reporter.report_completion(&format!("✅ Output complete: {}", path.display()));
    }

    Ok(())
}
