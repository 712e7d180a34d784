// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for printer-autoselect.

use thiserror::Error;

use crate::types::RoomNumber;

/// Top-level error type for every stage of the selection run.
#[derive(Debug, Error)]
pub enum AutoselectError {
    // -- Hostname decoding --
    #[error("hostname '{hostname}' does not follow the pc<room>-<seat> convention")]
    HostnameFormat { hostname: String },

    // -- Printer directory --
    #[error("printer directory query failed: {0}")]
    Directory(String),

    #[error("invalid CUPS server URI: {0}")]
    InvalidServerUri(String),

    // -- Candidate selection --
    #[error("no printer matches room {room}")]
    NoCandidate { room: RoomNumber },

    // -- Default printer setter --
    #[error("could not set default printer to '{printer}': {detail}")]
    SetDefault { printer: String, detail: String },
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, AutoselectError>;
