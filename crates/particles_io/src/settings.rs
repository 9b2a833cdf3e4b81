//! Text codec for the settings exchange payload.

use crate::error::{IoError, Result};
use crate::serialization::{from_json, read_json_file, to_json, write_json_file};
use particles_data::Settings;
use std::path::Path;

/// Parses a settings payload supplied by a host.
///
/// `None` (no payload at all), blank text, invalid JSON and structurally wrong
/// payloads are all errors; nothing is applied on error.
pub fn parse_settings(raw: Option<&str>) -> Result<Settings> {
    let raw = raw.ok_or_else(|| IoError::missing("settings payload"))?;
    from_json(raw).map_err(|e| e.with_context("parsing settings"))
}

/// Serializes settings to canonical compact JSON.
pub fn settings_to_json(settings: &Settings) -> Result<String> {
    to_json(settings)
}

pub fn read_settings_file(path: impl AsRef<Path>) -> Result<Settings> {
    read_json_file(path)
}

pub fn write_settings_file(settings: &Settings, path: impl AsRef<Path>) -> Result<()> {
    write_json_file(settings, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_payload_is_missing() {
        assert!(matches!(parse_settings(None), Err(IoError::Missing(_))));
    }

    #[test]
    fn test_malformed_payloads_rejected() {
        for raw in ["", "not json", "[1,2,3]", r#"{"populations": {"a": "many"}}"#] {
            assert!(parse_settings(Some(raw)).is_err(), "accepted {raw:?}");
        }
    }

    #[test]
    fn test_compact_payload_parses() {
        let raw = r##"{"c":{"#FF0000":20,"#0000FF":30},"r":[{"c1":"#0000FF","c2":"#0000FF","f":-0.1,"r":400}]}"##;
        let settings = parse_settings(Some(raw)).unwrap();
        assert_eq!(settings.total_entities(), 50);
        assert_eq!(settings.rules.len(), 1);
    }

    #[test]
    fn test_export_is_canonical_and_reparses() {
        let settings = Settings::default_for_width(640.0);
        let json = settings_to_json(&settings).unwrap();
        assert!(json.starts_with("{\"populations\""));
        assert_eq!(parse_settings(Some(&json)).unwrap(), settings);
    }

    #[test]
    fn test_settings_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = Settings::default_for_width(800.0);
        write_settings_file(&settings, &path).unwrap();
        assert_eq!(read_settings_file(&path).unwrap(), settings);
    }
}
