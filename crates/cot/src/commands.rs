use std::path::PathBuf;

use clap::ArgMatches;
use clap::error::ErrorKind;
use tracing::{info, warn};

use cot_core::config::CotConfig;
use cot_core::events;
use cot_core::files::{self, FileError};
use cot_core::open_ops;
use cot_core::remote::{application_display_name, application_version, locate_application};
use cot_core::{
    LaunchMode, LocationRequest, OpenRequest, OpenTarget, OsaScriptRunner, PollingMonitor,
    RemoteApplication,
};

use crate::input;

/// Load configuration with warning on errors.
///
/// Falls back to defaults if config loading fails, but notifies the user via:
/// - stderr message for immediate visibility
/// - structured log event `cli.config.load_failed` for debugging
fn load_config_with_warning() -> CotConfig {
    match CotConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.cot/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            CotConfig::default()
        }
    }
}

/// Print a usage error for a bad file argument and exit non-zero.
fn exit_with_usage_error(error: FileError) -> ! {
    events::log_core_error("arguments", &error);
    crate::app::build_cli()
        .error(ErrorKind::ValueValidation, error)
        .exit()
}

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    let config = load_config_with_warning();

    if matches.get_flag("version") {
        print_version(&config);
        return Ok(());
    }

    let target = match resolve_target(matches)? {
        Ok(target) => target,
        Err(e) => exit_with_usage_error(e),
    };

    let request = OpenRequest {
        target,
        location: LocationRequest::new(
            matches.get_one::<i64>("line").copied(),
            matches.get_one::<i64>("column").copied(),
        ),
        wait: matches.get_flag("wait"),
        launch_mode: if matches.get_flag("background") {
            LaunchMode::Background
        } else {
            LaunchMode::Foreground
        },
    };

    let application = locate_application(&config);
    let runner = OsaScriptRunner::new(config.script.interpreter.clone());
    let mut app = RemoteApplication::connect(application, runner)
        .inspect_err(|e| events::log_core_error("connect", e))?;
    let monitor = PollingMonitor::new(config.wait.poll_interval());

    let outcome = open_ops::open_in_editor(&mut app, &request, &monitor)
        .inspect_err(|e| events::log_core_error("open", e))?;

    info!(
        event = "cli.open_completed",
        caret_offset = ?outcome.caret_offset,
        wait = ?outcome.wait
    );

    Ok(())
}

/// Decide what to open.
///
/// The outer error is an I/O failure reading stdin; the inner one is a bad
/// file argument, which is reported as a usage error.
fn resolve_target(
    matches: &ArgMatches,
) -> Result<Result<OpenTarget, FileError>, Box<dyn std::error::Error>> {
    let paths: Vec<PathBuf> = matches
        .get_many::<PathBuf>("files")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    let new = matches.get_flag("new");

    if !paths.is_empty() {
        let cwd = match std::env::current_dir() {
            Ok(cwd) => cwd,
            Err(source) => return Ok(Err(FileError::CurrentDirUnavailable { source })),
        };
        return Ok(files::resolve_file_requests(&paths, new, &cwd).map(OpenTarget::Files));
    }

    if new {
        return Ok(Ok(OpenTarget::NewDocument));
    }

    Ok(Ok(match input::read_piped_stdin()? {
        Some(text) => OpenTarget::Pipe(text),
        None => OpenTarget::Nothing,
    }))
}

/// Print the CLI version, plus the editor's version when it can be queried.
fn print_version(config: &CotConfig) {
    let application = locate_application(config);
    let runner = OsaScriptRunner::new(config.script.interpreter.clone());

    match application_version(&runner, &application) {
        Ok(version) if !version.is_empty() => println!(
            "cot {} ({} {})",
            env!("CARGO_PKG_VERSION"),
            application_display_name(&application),
            version
        ),
        Ok(_) => println!("cot {}", env!("CARGO_PKG_VERSION")),
        Err(e) => {
            warn!(event = "cli.version.application_query_failed", error = %e);
            println!("cot {}", env!("CARGO_PKG_VERSION"));
        }
    }
}
