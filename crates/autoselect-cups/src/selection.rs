// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Room-based candidate selection.
//
// A printer belongs to room NN when its display name is
// `printer<NN>(-<digits>)*_(schwarz|color)`, NN zero-padded to two digits.
// Candidates are ranked by whether they carry the preferred type; ties keep
// the order CUPS reported them in.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use autoselect_core::error::{AutoselectError, Result};
use autoselect_core::types::{PrinterRecord, PrinterType, RoomNumber};

// The room digits are captured as one maximal run, so comparing the capture
// with the padded room is the same as embedding the room in the pattern.
static PRINTER_NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^printer([0-9]+)(?:-[0-9]+)*_(?:schwarz|color)$")
        .expect("printer name pattern compiles")
});

/// Whether `display_name` names a printer in `room`.
pub fn matches_room(display_name: &str, room: RoomNumber) -> bool {
    PRINTER_NAME_REGEX
        .captures(display_name)
        .is_some_and(|caps| caps[1] == room.padded())
}

/// Sort key for a candidate: preferred type first, everything else after.
pub fn rank(record: &PrinterRecord, preference: PrinterType) -> u8 {
    if record.display_name.contains(preference.keyword()) {
        0
    } else {
        1
    }
}

/// Filter `printers` down to the candidates for `room`, best first.
///
/// Returns [`AutoselectError::NoCandidate`] when nothing matches.
pub fn rank_candidates(
    printers: &[PrinterRecord],
    room: RoomNumber,
    preference: PrinterType,
) -> Result<Vec<PrinterRecord>> {
    let mut candidates: Vec<PrinterRecord> = printers
        .iter()
        .filter(|p| matches_room(&p.display_name, room))
        .cloned()
        .collect();

    if candidates.is_empty() {
        return Err(AutoselectError::NoCandidate { room });
    }

    // sort_by_key is stable: equal ranks keep discovery order.
    candidates.sort_by_key(|p| rank(p, preference));

    debug!(
        room = %room,
        count = candidates.len(),
        first = %candidates[0].identifier,
        "ranked candidates"
    );
    Ok(candidates)
}
