// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Hostname decoding.
//
// Lab machines are named `pc<room>-<seat>`; the room number scopes which
// printers are eligible.

use once_cell::sync::Lazy;
use regex::Regex;
use sysinfo::System;
use tracing::{debug, warn};

use autoselect_core::error::{AutoselectError, Result};
use autoselect_core::types::RoomNumber;

static HOSTNAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^pc([0-9]+)-[0-9]+$").expect("hostname pattern compiles"));

/// Hostname of this machine as reported by the operating system.
///
/// Returns an empty string when the OS does not report one, which then fails
/// decoding like any other unrecognised name.
pub fn local_hostname() -> String {
    match System::host_name() {
        Some(name) => name,
        None => {
            warn!("operating system did not report a hostname");
            String::new()
        }
    }
}

/// Extract the room number from a `pc<room>-<seat>` hostname.
pub fn decode_room(hostname: &str) -> Result<RoomNumber> {
    let format_error = || AutoselectError::HostnameFormat {
        hostname: hostname.to_string(),
    };

    let caps = HOSTNAME_REGEX.captures(hostname).ok_or_else(format_error)?;
    // A room group too large for u32 is not a name we know how to map.
    let room: u32 = caps[1].parse().map_err(|_| format_error())?;

    debug!(hostname, room, "decoded room number");
    Ok(RoomNumber(room))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_room_from_lab_hostname() {
        assert_eq!(decode_room("pc12-3").unwrap(), RoomNumber(12));
        assert_eq!(decode_room("pc5-17").unwrap(), RoomNumber(5));
    }

    #[test]
    fn leading_zeros_do_not_change_the_room() {
        assert_eq!(decode_room("pc05-01").unwrap(), RoomNumber(5));
        assert_eq!(decode_room("pc7-007").unwrap(), RoomNumber(7));
    }

    #[test]
    fn rejects_unknown_naming_schemes() {
        for name in ["workstation1", "pc-5", "pc12_3", "pc12-", "PC12-3", ""] {
            let err = decode_room(name).unwrap_err();
            assert!(
                matches!(err, AutoselectError::HostnameFormat { ref hostname } if hostname == name),
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_partial_matches() {
        assert!(decode_room("xpc12-3").is_err());
        assert!(decode_room("pc12-3.lab.example.org").is_err());
        assert!(decode_room("pc12-3a").is_err());
    }

    #[test]
    fn rejects_room_numbers_that_overflow() {
        assert!(decode_room("pc99999999999-1").is_err());
    }
}
