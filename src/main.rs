// src/main.rs
use std::process::ExitCode;
use userpermutation::cli::parse_args;
use userpermutation::error::AppError;
use userpermutation::{Config, app, logging};

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if !e.is_user_error() {
                tracing::error!("{e}");
            }
            eprintln!("{}", e.diagnostic());
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> Result<(), AppError> {
    // Usage errors are reported before any file is touched
    let args = parse_args(std::env::args_os())?;

    // A missing input is reported before the optional config is consulted
    let input_path = app::resolve_input(&args.names_file)?;

    let (config, config_error) = Config::load_or_default();

    // The guard must be kept alive for the duration of the program
    // to ensure logs are flushed properly
    let _guard = logging::setup_logging(&args, &config)?;

    if let Some(e) = config_error {
        tracing::warn!("Ignoring config file {}: {e}", Config::get_config_path().display());
    }

    let summary = app::process_names_file(&input_path)?;
    println!("{}", summary.message());
    Ok(())
}
