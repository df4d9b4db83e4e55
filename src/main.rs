use clap::Parser;
use tracing::debug;

use valid::cli::Cli;
use valid::logging;
use valid::{APP_NAME, EXIT_INVALID, EXIT_SUCCESS};

fn main() {
    let cli = Cli::parse();
    let args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    let debug = logging::debug_enabled(std::env::var(logging::DEBUG_ENV).ok().as_deref());
    if let Err(e) = logging::init(debug) {
        eprintln!("{e}");
    }

    let _span = tracing::debug_span!("run", app = APP_NAME).entered();
    let orchestrator = cli.into_orchestrator();
    let format = orchestrator.formatter.output_format();
    // Raw flags may contain a masked value.
    if orchestrator.value.is_masked() {
        debug!(args = args.len(), %format, "Start");
    } else {
        debug!(?args, %format, "Start");
    }

    let exit_code = match orchestrator.orchestrate() {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            debug!(kind = e.error_type(), "Run failed");
            eprintln!("{e}");
            EXIT_INVALID
        }
    };

    debug!(exit_code, "Finish");
    std::process::exit(exit_code);
}
