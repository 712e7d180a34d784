// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Applying the chosen printer as the user's default.
//
// The work is delegated to `lpoptions -d <printer>`, which writes the user's
// CUPS options file. Nothing is rolled back on failure; the file is left as
// lpoptions left it.

use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, error, info, instrument};

use autoselect_core::config::DEFAULT_LPOPTIONS;
use autoselect_core::error::{AutoselectError, Result};

/// Persists a printer as the default.
#[allow(async_fn_in_trait)]
pub trait DefaultPrinterSetter {
    /// Make `identifier` the default printer.
    async fn set_default(&self, identifier: &str) -> Result<()>;
}

/// Runs `<program> -d <printer>` and waits for it to exit.
#[derive(Debug, Clone)]
pub struct LpoptionsSetter {
    program: String,
}

impl LpoptionsSetter {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for LpoptionsSetter {
    fn default() -> Self {
        Self::new(DEFAULT_LPOPTIONS)
    }
}

impl DefaultPrinterSetter for LpoptionsSetter {
    #[instrument(skip(self), fields(program = %self.program))]
    async fn set_default(&self, identifier: &str) -> Result<()> {
        debug!("running {} -d {identifier}", self.program);

        let output = Command::new(&self.program)
            .arg("-d")
            .arg(identifier)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                error!(printer = identifier, error = %e, "could not start default printer tool");
                AutoselectError::SetDefault {
                    printer: identifier.to_string(),
                    detail: format!("failed to run {}: {e}", self.program),
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            error!(
                printer = identifier,
                status = %output.status,
                stderr,
                "could not set default printer"
            );
            return Err(AutoselectError::SetDefault {
                printer: identifier.to_string(),
                detail: if stderr.is_empty() {
                    format!("{} {}", self.program, output.status)
                } else {
                    format!("{} {}: {stderr}", self.program, output.status)
                },
            });
        }

        info!(printer = identifier, "default printer set");
        Ok(())
    }
}

/// Accepts every printer without touching the system.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunSetter;

impl DefaultPrinterSetter for DryRunSetter {
    async fn set_default(&self, identifier: &str) -> Result<()> {
        info!(printer = identifier, "dry run, default printer left unchanged");
        Ok(())
    }
}
