// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The selection run: hostname → room → printer list → ranked candidates →
// default printer. Each stage either hands its result to the next or ends the
// run with an error; nothing is retried.

use tracing::{debug, error, info, instrument};

use autoselect_core::error::Result;
use autoselect_core::types::{PrinterType, Selection};

use crate::directory::PrinterDirectory;
use crate::hostname::decode_room;
use crate::selection::rank_candidates;
use crate::setter::DefaultPrinterSetter;

/// Select the printer for `hostname`'s room and make it the default.
///
/// The directory is not queried when the hostname cannot be decoded, and the
/// setter is not called when no printer matches.
#[instrument(skip(directory, setter, preference), fields(preference = %preference))]
pub async fn run<D, S>(
    hostname: &str,
    preference: PrinterType,
    directory: &D,
    setter: &S,
) -> Result<Selection>
where
    D: PrinterDirectory,
    S: DefaultPrinterSetter,
{
    let room =
        decode_room(hostname).inspect_err(|e| error!(error = %e, "hostname not recognised"))?;
    info!(room = %room, "room resolved from hostname");

    let printers = directory
        .list_printers()
        .await
        .inspect_err(|e| error!(error = %e, "could not list printers"))?;
    debug!(count = printers.len(), "printers found");
    for printer in &printers {
        debug!(name = %printer.identifier, info = %printer.display_name, "printer");
    }

    let candidates = rank_candidates(&printers, room, preference)
        .inspect_err(|e| error!(error = %e, hostname, "no matching printer"))?;
    let chosen = candidates[0].clone();
    info!(printer = %chosen.identifier, info = %chosen.display_name, "setting default printer");

    setter
        .set_default(&chosen.identifier)
        .await
        .inspect_err(|e| {
            error!(error = %e, printer = %chosen.identifier, "default printer not set")
        })?;
    info!(printer = %chosen.identifier, "default printer applied");

    Ok(Selection {
        room,
        chosen,
        candidates,
    })
}
