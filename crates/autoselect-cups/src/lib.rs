// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// printer-autoselect CUPS layer — hostname decoding, the CUPS printer
// directory, room-based candidate selection and the `lpoptions` setter, tied
// together by the single-pass pipeline in `pipeline`.

pub mod directory;
pub mod hostname;
pub mod pipeline;
pub mod selection;
pub mod setter;

pub use directory::{CupsDirectory, PrinterDirectory};
pub use pipeline::run;
pub use setter::{DefaultPrinterSetter, DryRunSetter, LpoptionsSetter};
