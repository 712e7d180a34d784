// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Run configuration, built once from the command line and passed to each stage.

use crate::types::PrinterType;

/// Default CUPS scheduler address.
pub const DEFAULT_CUPS_URI: &str = "ipp://localhost:631/";

/// Default tool used to persist the default printer.
pub const DEFAULT_LPOPTIONS: &str = "lpoptions";

/// Settings for a single selection run.
#[derive(Debug, Clone)]
pub struct AutoselectConfig {
    /// Printer type that wins ties between candidates.
    pub preference: PrinterType,
    /// Emit diagnostics for each stage.
    pub debug: bool,
    /// IPP URI of the CUPS scheduler to query.
    pub cups_uri: String,
    /// Program invoked as `<program> -d <printer>`.
    pub lpoptions_program: String,
    /// Select a printer but do not apply it.
    pub dry_run: bool,
}

impl Default for AutoselectConfig {
    fn default() -> Self {
        Self {
            preference: PrinterType::Schwarz,
            debug: false,
            cups_uri: DEFAULT_CUPS_URI.into(),
            lpoptions_program: DEFAULT_LPOPTIONS.into(),
            dry_run: false,
        }
    }
}
