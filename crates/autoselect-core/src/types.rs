// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for room-based printer selection.

use std::fmt;
use std::str::FromStr;

/// Room number decoded from a `pc<room>-<seat>` hostname.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomNumber(pub u32);

impl RoomNumber {
    /// The room as it appears in printer names: zero-padded to two digits.
    pub fn padded(&self) -> String {
        format!("{:02}", self.0)
    }
}

impl fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Printer type suffix used in printer names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrinterType {
    /// Black-and-white printers (`_schwarz`).
    #[default]
    Schwarz,
    /// Colour printers (`_color`).
    Color,
}

impl PrinterType {
    /// Substring that identifies this type in a printer's display name.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Schwarz => "schwarz",
            Self::Color => "color",
        }
    }
}

impl fmt::Display for PrinterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for PrinterType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "schwarz" => Ok(Self::Schwarz),
            "color" => Ok(Self::Color),
            other => Err(format!(
                "unknown printer type '{other}' (expected 'schwarz' or 'color')"
            )),
        }
    }
}

/// A printer as reported by the printing subsystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrinterRecord {
    /// Queue name (CUPS `printer-name`), passed to `lpoptions -d`.
    pub identifier: String,
    /// Human-readable label (CUPS `printer-info`), matched against the room pattern.
    pub display_name: String,
}

impl PrinterRecord {
    pub fn new(identifier: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            display_name: display_name.into(),
        }
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub room: RoomNumber,
    /// The printer that became (or in a dry run, would become) the default.
    pub chosen: PrinterRecord,
    /// All candidates in ranked order; `chosen` is the first.
    pub candidates: Vec<PrinterRecord>,
}
