//! Main startup logic
//!
//! Declares the option set, parses the argument vector, and resolves the
//! compiler configuration. Compilation itself happens downstream; this
//! module only gets the process from argv to a validated [`Config`].

use tracing::{debug, trace};

use crate::args::ArgRegistry;
use crate::config::Config;
use crate::errors::Result;
use crate::logging;
use crate::status::ExitStatus;

/// The nvmc option set.
fn declare_options() -> Result<ArgRegistry> {
    let mut args = ArgRegistry::new();
    args.flag("-h", "print help", false, false)?;
    args.option("-i", "input file", "", true)?;
    args.option("-I", "include directories (';' delim)", "", true)?;
    args.option("-o", "output file name", "out.nvm", false)?;
    args.option("-l", "log level [trace debug info warn error fatal]", "fatal", false)?;
    args.flag("-r", "build in release mode", false, false)?;
    Ok(args)
}

/// Main entry point for the CLI.
///
/// Errors are printed to stderr and mapped to [`ExitStatus::Error`]; the
/// caller decides nothing beyond the process exit code.
pub fn run(argv: &[String]) -> ExitStatus {
    match try_run(argv) {
        Ok(status) => status,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitStatus::Error
        }
    }
}

fn try_run(argv: &[String]) -> Result<ExitStatus> {
    let mut args = declare_options()?;
    args.parse(argv)?;

    if args.get::<bool>("-h")?.unwrap_or(false) {
        print!("{}", args.render_help());
        return Ok(ExitStatus::Success);
    }

    let level: String = args.get("-l")?.unwrap_or_else(|| "fatal".to_string());
    logging::init(&level)?;
    trace!("parsed arguments:\n{}", args.dump_resolved());

    args.validate_required()?;

    let config = Config::resolve(&args)?;
    debug!(
        input = %config.target_path.display(),
        output = %config.output_path.display(),
        build_type = ?config.build_type,
        "configuration resolved"
    );

    // Compilation stages attach here once the front-end grows them.
    Ok(ExitStatus::Success)
}
