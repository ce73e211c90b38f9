use std::io::Write;
use std::process::ExitCode;

use clap::Parser;

use electrovault_cli::{run, Cli};
use electrovault_observability::LogFormat;

fn main() -> ExitCode {
    let cli = Cli::parse();

    electrovault_observability::init(if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Compact
    });

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match run(&cli, &mut out) {
        Ok(()) => {
            let _ = out.flush();
            ExitCode::SUCCESS
        }
        Err(err) => {
            let _ = out.flush();
            tracing::debug!("command failed: {err:?}");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
