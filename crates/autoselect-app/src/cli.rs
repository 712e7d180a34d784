// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command-line surface.

use clap::Parser;

use autoselect_core::config::{AutoselectConfig, DEFAULT_LPOPTIONS};
use autoselect_core::types::PrinterType;
use autoselect_cups::directory::resolve_server;

const LONG_ABOUT: &str = "\
Sets the default printer depending on the room you log into.

The room number is taken from the machine's hostname (pc<room>-<seat>).
Printers whose CUPS description is printer<room>[-<n>...]_schwarz or
printer<room>[-<n>...]_color are candidates; the preferred type wins, and
the first match is made the default with `lpoptions -d`.

Run without options to set the printer silently; nothing is printed, even
on failure, unless --debug is given.

Exit status: 0 printer set, 1 hostname not recognised, 2 no matching
printer or lpoptions failed, 3 CUPS not reachable, 64 bad arguments.";

#[derive(Debug, Parser)]
#[command(
    name = "printer-autoselect",
    version,
    about = "Set the default printer for the room you log into",
    long_about = LONG_ABOUT
)]
pub struct Cli {
    /// Print diagnostics for each step to stderr
    #[arg(short, long)]
    pub debug: bool,

    /// Printer type to prefer when a room has several printers
    #[arg(short, long, value_name = "TYPE", default_value_t = PrinterType::Schwarz)]
    pub prefer: PrinterType,

    /// Use this hostname instead of the machine's own
    #[arg(long, value_name = "NAME")]
    pub hostname: Option<String>,

    /// CUPS scheduler: URI, host[:port] or socket path (default: client.conf ServerName, else localhost)
    #[arg(long, value_name = "SERVER", env = "CUPS_SERVER")]
    pub server: Option<String>,

    /// Program used to set the default printer
    #[arg(long, value_name = "PATH", default_value = DEFAULT_LPOPTIONS)]
    pub lpoptions: String,

    /// Select a printer but leave the default unchanged
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}

impl Cli {
    pub fn into_config(self) -> AutoselectConfig {
        AutoselectConfig {
            preference: self.prefer,
            debug: self.debug,
            cups_uri: resolve_server(self.server.as_deref()),
            lpoptions_program: self.lpoptions,
            dry_run: self.dry_run,
        }
    }
}
