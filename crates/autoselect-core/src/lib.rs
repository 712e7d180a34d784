// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// printer-autoselect — core types, configuration and error definitions shared
// by the CUPS crate and the binary.

pub mod config;
pub mod error;
pub mod exit_status;
pub mod types;

pub use config::AutoselectConfig;
pub use error::AutoselectError;
pub use exit_status::ExitStatus;
pub use types::*;
