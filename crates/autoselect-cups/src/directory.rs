// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Printer directory backed by the local CUPS scheduler.
//
// Sends a single CUPS-Get-Printers operation with the `ipp` crate's async
// client and keeps each printer's queue name (`printer-name`) and label
// (`printer-info`), in the order CUPS returns them.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use ipp::attribute::IppAttribute;
use ipp::prelude::*;
use tracing::{debug, error, instrument};

use autoselect_core::config::DEFAULT_CUPS_URI;
use autoselect_core::error::{AutoselectError, Result};
use autoselect_core::types::PrinterRecord;

/// Port the CUPS scheduler listens on.
pub const CUPS_PORT: u16 = 631;

/// Source of the printers known to the printing subsystem.
#[allow(async_fn_in_trait)]
pub trait PrinterDirectory {
    /// List every printer, in discovery order.
    async fn list_printers(&self) -> Result<Vec<PrinterRecord>>;
}

/// CUPS scheduler reached over IPP.
///
/// The server address is only resolved when the directory is queried, so a
/// bad address fails the query stage rather than startup.
#[derive(Debug, Clone)]
pub struct CupsDirectory {
    server: String,
}

impl CupsDirectory {
    /// Create a directory for the scheduler at `server`.
    ///
    /// Accepts a full `ipp://`/`ipps://`/`http://` URI, `host:port`, or a
    /// bare host (port 631 is assumed), matching what `CUPS_SERVER` usually
    /// holds.
    pub fn new(server: impl Into<String>) -> Self {
        Self {
            server: server.into(),
        }
    }

    /// Resolve the configured server to the URI the query is sent to.
    pub fn uri(&self) -> Result<Uri> {
        let normalized = normalize_server_uri(&self.server)?;
        normalized
            .parse()
            .map_err(|e| AutoselectError::InvalidServerUri(format!("'{}': {e}", self.server)))
    }
}

impl PrinterDirectory for CupsDirectory {
    #[instrument(skip(self), fields(server = %self.server))]
    async fn list_printers(&self) -> Result<Vec<PrinterRecord>> {
        let uri = self.uri()?;
        let operation = IppOperationBuilder::cups().get_printers();
        let client = AsyncIppClient::new(uri);

        debug!("sending CUPS-Get-Printers");
        let response = client
            .send(operation)
            .await
            .map_err(|e| AutoselectError::Directory(format!("CUPS-Get-Printers: {e}")))?;

        if !response.header().status_code().is_success() {
            let code = response.header().status_code();
            error!(status = ?code, "CUPS-Get-Printers failed");
            return Err(AutoselectError::Directory(format!(
                "CUPS-Get-Printers returned status {code:?}"
            )));
        }

        let printers: Vec<PrinterRecord> = response
            .attributes()
            .groups_of(DelimiterTag::PrinterAttributes)
            .filter_map(|group| record_from_attributes(group.attributes()))
            .collect();

        debug!(count = printers.len(), "received printer list");
        Ok(printers)
    }
}

/// Pick the scheduler to query, the way libcups does.
///
/// An explicit setting (`--server` or `CUPS_SERVER`) wins, then `ServerName`
/// from `~/.cups/client.conf` and `/etc/cups/client.conf`, then the local
/// scheduler.
pub fn resolve_server(explicit: Option<&str>) -> String {
    resolve_server_from(explicit, &client_conf_paths())
}

fn client_conf_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(home) = home::home_dir() {
        paths.push(home.join(".cups").join("client.conf"));
    }
    paths.push(PathBuf::from("/etc/cups/client.conf"));
    paths
}

fn resolve_server_from(explicit: Option<&str>, conf_paths: &[PathBuf]) -> String {
    if let Some(server) = explicit.map(str::trim).filter(|s| !s.is_empty()) {
        return server.to_string();
    }
    for path in conf_paths {
        if let Some(server) = read_server_name(path) {
            debug!(path = %path.display(), server = %server, "using ServerName from client.conf");
            return server;
        }
    }
    DEFAULT_CUPS_URI.to_string()
}

fn read_server_name(path: &Path) -> Option<String> {
    let contents = fs::read_to_string(path).ok()?;
    parse_server_name(&contents)
}

/// First `ServerName` directive in a client.conf body.
pub fn parse_server_name(contents: &str) -> Option<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('#'))
        .find_map(|line| {
            let (directive, value) = line.split_once(char::is_whitespace)?;
            let value = value.trim();
            (directive.eq_ignore_ascii_case("ServerName") && !value.is_empty())
                .then(|| value.to_string())
        })
}

/// Turn a CUPS server setting into an IPP URI string.
///
/// A domain socket path names the local scheduler, which also listens on
/// port 631 of localhost.
pub fn normalize_server_uri(server: &str) -> Result<String> {
    let server = server.trim();
    if server.is_empty() {
        return Err(AutoselectError::InvalidServerUri("empty server address".into()));
    }
    if server.starts_with('/') {
        debug!(socket = server, "domain socket configured, using local scheduler");
        return Ok(DEFAULT_CUPS_URI.to_string());
    }
    if server.contains("://") {
        return Ok(server.to_string());
    }

    let authority = if has_port(server) {
        server.to_string()
    } else {
        format!("{server}:{CUPS_PORT}")
    };
    Ok(format!("ipp://{authority}/"))
}

fn has_port(authority: &str) -> bool {
    // Bracketed IPv6 literals carry their own colons.
    let host_end = authority.rfind(']').map_or(0, |i| i + 1);
    authority[host_end..].contains(':')
}

/// Build a record from one Printer Attributes group.
///
/// Groups without a `printer-name` are skipped; a missing `printer-info`
/// becomes an empty label, which never matches a room.
fn record_from_attributes(attributes: &HashMap<String, IppAttribute>) -> Option<PrinterRecord> {
    let identifier = attributes.get("printer-name").map(|a| value_text(a.value()))?;

    let display_name = attributes
        .get("printer-info")
        .map(|a| value_text(a.value()))
        .unwrap_or_default();

    Some(PrinterRecord {
        identifier,
        display_name,
    })
}

/// Bare text of a name or text value; the language tag is dropped.
fn value_text(value: &IppValue) -> String {
    match value {
        IppValue::TextWithoutLanguage(text) | IppValue::NameWithoutLanguage(text) => text.clone(),
        IppValue::TextWithLanguage { text, .. } => text.clone(),
        IppValue::NameWithLanguage { name, .. } => name.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attributes(pairs: &[(&str, &str)]) -> HashMap<String, IppAttribute> {
        pairs
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    IppAttribute::new(*name, IppValue::TextWithoutLanguage(value.to_string())),
                )
            })
            .collect()
    }

    #[test]
    fn normalizes_bare_host() {
        assert_eq!(
            normalize_server_uri("printhost").unwrap(),
            "ipp://printhost:631/"
        );
    }

    #[test]
    fn keeps_explicit_port() {
        assert_eq!(
            normalize_server_uri("localhost:8631").unwrap(),
            "ipp://localhost:8631/"
        );
        assert_eq!(normalize_server_uri("[::1]:631").unwrap(), "ipp://[::1]:631/");
        assert_eq!(normalize_server_uri("[::1]").unwrap(), "ipp://[::1]:631/");
    }

    #[test]
    fn passes_full_uris_through() {
        assert_eq!(
            normalize_server_uri("ipp://cups.lab:631/").unwrap(),
            "ipp://cups.lab:631/"
        );
    }

    #[test]
    fn socket_path_means_local_scheduler() {
        assert_eq!(
            normalize_server_uri("/run/cups/cups.sock").unwrap(),
            "ipp://localhost:631/"
        );
        assert_eq!(
            normalize_server_uri("/var/run/cups/cups.sock").unwrap(),
            DEFAULT_CUPS_URI
        );
    }

    #[test]
    fn rejects_empty_input() {
        assert!(normalize_server_uri("   ").is_err());
    }

    #[test]
    fn parses_server_name_directive() {
        let conf = "# lab client config\n\nEncryption IfRequested\nServerName cups.lab:631\n";
        assert_eq!(parse_server_name(conf).as_deref(), Some("cups.lab:631"));
        assert_eq!(
            parse_server_name("servername /run/cups/cups.sock").as_deref(),
            Some("/run/cups/cups.sock")
        );
        assert_eq!(parse_server_name("#ServerName old.lab\n"), None);
        assert_eq!(parse_server_name("ServerName\n"), None);
    }

    #[test]
    fn explicit_server_beats_client_conf() {
        let dir = tempfile::tempdir().unwrap();
        let conf = dir.path().join("client.conf");
        std::fs::write(&conf, "ServerName cups.lab\n").unwrap();

        assert_eq!(resolve_server_from(Some("other.lab"), &[conf.clone()]), "other.lab");
        assert_eq!(resolve_server_from(Some("  "), &[conf.clone()]), "cups.lab");
        assert_eq!(resolve_server_from(None, &[conf]), "cups.lab");
    }

    #[test]
    fn first_client_conf_with_server_name_wins() {
        let dir = tempfile::tempdir().unwrap();
        let user = dir.path().join("user.conf");
        let system = dir.path().join("system.conf");
        std::fs::write(&user, "Encryption Never\n").unwrap();
        std::fs::write(&system, "ServerName /run/cups/cups.sock\n").unwrap();

        let server = resolve_server_from(None, &[dir.path().join("missing.conf"), user, system]);
        assert_eq!(server, "/run/cups/cups.sock");
        assert_eq!(normalize_server_uri(&server).unwrap(), DEFAULT_CUPS_URI);
    }

    #[test]
    fn no_configuration_falls_back_to_localhost() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            resolve_server_from(None, &[dir.path().join("client.conf")]),
            DEFAULT_CUPS_URI
        );
    }

    #[test]
    fn resolves_default_server() {
        let dir = CupsDirectory::new("ipp://localhost:631/");
        assert_eq!(dir.uri().unwrap().port_u16(), Some(631));
    }

    #[test]
    fn socket_server_queries_localhost() {
        let dir = CupsDirectory::new("/run/cups/cups.sock");
        let uri = dir.uri().unwrap();
        assert_eq!(uri.host(), Some("localhost"));
        assert_eq!(uri.port_u16(), Some(631));
    }

    #[test]
    fn bad_server_fails_only_on_resolve() {
        let dir = CupsDirectory::new("");
        assert!(matches!(
            dir.uri(),
            Err(AutoselectError::InvalidServerUri(_))
        ));
    }

    #[test]
    fn record_uses_name_and_info() {
        let attrs = attributes(&[
            ("printer-name", "r05_sw"),
            ("printer-info", "printer05_schwarz"),
        ]);
        let record = record_from_attributes(&attrs).unwrap();
        assert_eq!(record, PrinterRecord::new("r05_sw", "printer05_schwarz"));
    }

    #[test]
    fn language_tagged_values_use_bare_text() {
        let attrs: HashMap<String, IppAttribute> = [
            (
                "printer-name".to_string(),
                IppAttribute::new(
                    "printer-name",
                    IppValue::NameWithLanguage {
                        language: "de".into(),
                        name: "r05_sw".into(),
                    },
                ),
            ),
            (
                "printer-info".to_string(),
                IppAttribute::new(
                    "printer-info",
                    IppValue::TextWithLanguage {
                        language: "de".into(),
                        text: "printer05_schwarz".into(),
                    },
                ),
            ),
        ]
        .into_iter()
        .collect();

        let record = record_from_attributes(&attrs).unwrap();
        assert_eq!(record, PrinterRecord::new("r05_sw", "printer05_schwarz"));
        assert!(crate::selection::matches_room(
            &record.display_name,
            autoselect_core::types::RoomNumber(5)
        ));
    }

    #[test]
    fn missing_info_gives_empty_label() {
        let attrs = attributes(&[("printer-name", "plotter")]);
        let record = record_from_attributes(&attrs).unwrap();
        assert_eq!(record.display_name, "");
    }

    #[test]
    fn missing_name_is_skipped() {
        let attrs = attributes(&[("printer-info", "printer05_color")]);
        assert!(record_from_attributes(&attrs).is_none());
    }
}
