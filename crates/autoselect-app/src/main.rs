// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// printer-autoselect — set the default printer for the room you log into.
//
// Entry point. Parses the command line, initialises logging, runs the
// selection once and turns the outcome into an exit status.

mod cli;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use autoselect_core::config::AutoselectConfig;
use autoselect_core::error::Result;
use autoselect_core::exit_status::{ExitStatus, classify};
use autoselect_core::types::Selection;
use autoselect_cups::hostname::local_hostname;
use autoselect_cups::{CupsDirectory, DryRunSetter, LpoptionsSetter, run};

use cli::Cli;

/// Filter used with `--debug`: everything from this tool, only warnings from
/// the HTTP stack underneath the IPP client.
const DEBUG_FILTER: &str = "warn,autoselect_core=debug,autoselect_cups=debug,printer_autoselect=debug";

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too, on stdout and with status 0.
            let status = if e.use_stderr() {
                ExitStatus::Usage
            } else {
                ExitStatus::Success
            };
            let _ = e.print();
            return status.into();
        }
    };

    let hostname = cli.hostname.clone().unwrap_or_else(local_hostname);
    let config = cli.into_config();
    init_logging(config.debug);

    tracing::debug!(?config, hostname = %hostname, "printer-autoselect starting");

    match execute(&config, &hostname).await {
        Ok(selection) => {
            tracing::info!(
                printer = %selection.chosen.identifier,
                room = %selection.room,
                "done"
            );
            ExitStatus::Success.into()
        }
        Err(e) => {
            let status = classify(&e);
            tracing::error!(error = %e, code = status.code(), "printer-autoselect failed");
            status.into()
        }
    }
}

/// Wire the real collaborators into the pipeline.
async fn execute(config: &AutoselectConfig, hostname: &str) -> Result<Selection> {
    let directory = CupsDirectory::new(config.cups_uri.as_str());

    if config.dry_run {
        run(hostname, config.preference, &directory, &DryRunSetter).await
    } else {
        let setter = LpoptionsSetter::new(&config.lpoptions_program);
        run(hostname, config.preference, &directory, &setter).await
    }
}

/// Without `--debug` the tool prints nothing at all, whatever `RUST_LOG` says.
fn init_logging(debug: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(debug))
        .with_writer(std::io::stderr)
        .init();
}

fn log_filter(debug: bool) -> EnvFilter {
    if debug {
        EnvFilter::new(DEBUG_FILTER)
    } else {
        EnvFilter::new("off")
    }
}
