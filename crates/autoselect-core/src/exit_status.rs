// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Mapping from errors to process exit statuses.
//
// Login scripts only see the exit status, so every failure kind gets a stable
// code. Hostname problems are 1, selection and apply problems are 2.

use crate::error::AutoselectError;

/// Process exit status for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Default printer set (or selected, in a dry run).
    Success,
    /// Hostname does not match `pc<room>-<seat>`.
    UnrecognizedHostname,
    /// No matching printer, or the setter failed.
    SelectionFailed,
    /// CUPS could not be queried.
    DirectoryUnavailable,
    /// Bad command-line arguments (sysexits `EX_USAGE`).
    Usage,
}

impl ExitStatus {
    pub fn code(&self) -> u8 {
        match self {
            Self::Success => 0,
            Self::UnrecognizedHostname => 1,
            Self::SelectionFailed => 2,
            Self::DirectoryUnavailable => 3,
            Self::Usage => 64,
        }
    }
}

impl From<ExitStatus> for std::process::ExitCode {
    fn from(status: ExitStatus) -> Self {
        std::process::ExitCode::from(status.code())
    }
}

/// Classify an error into the exit status the process should report.
pub fn classify(err: &AutoselectError) -> ExitStatus {
    match err {
        AutoselectError::HostnameFormat { .. } => ExitStatus::UnrecognizedHostname,
        AutoselectError::NoCandidate { .. } | AutoselectError::SetDefault { .. } => {
            ExitStatus::SelectionFailed
        }
        AutoselectError::Directory(_) | AutoselectError::InvalidServerUri(_) => {
            ExitStatus::DirectoryUnavailable
        }
    }
}
