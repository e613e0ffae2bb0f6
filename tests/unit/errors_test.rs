use tabdesk::types::errors::*;

// === DashboardError Tests ===

#[test]
fn dashboard_error_display_variants() {
    assert_eq!(
        DashboardError::Storage("disk full".to_string()).to_string(),
        "Storage error: disk full"
    );
    assert_eq!(
        DashboardError::not_found(EntityKind::Folder, "f-1").to_string(),
        "Folder not found: f-1"
    );
    assert_eq!(
        DashboardError::not_found(EntityKind::Shortcut, "s-9").to_string(),
        "Shortcut not found: s-9"
    );
    assert_eq!(
        DashboardError::Validation("Name cannot be empty".to_string()).to_string(),
        "Validation error: Name cannot be empty"
    );
    assert_eq!(
        DashboardError::Serialization("eof".to_string()).to_string(),
        "Serialization error: eof"
    );
    assert_eq!(
        DashboardError::Io("denied".to_string()).to_string(),
        "IO error: denied"
    );
}

#[test]
fn dashboard_error_from_rusqlite_is_storage() {
    let err: DashboardError = rusqlite::Error::QueryReturnedNoRows.into();
    assert!(matches!(err, DashboardError::Storage(_)));
}

#[test]
fn dashboard_error_from_serde_json_is_serialization() {
    let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: DashboardError = parse_err.into();
    assert!(matches!(err, DashboardError::Serialization(_)));
}

#[test]
fn dashboard_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> =
        Box::new(DashboardError::not_found(EntityKind::Link, "id"));
    assert!(err.source().is_none());
}

// === SettingsError Tests ===

#[test]
fn settings_error_display_variants() {
    assert_eq!(
        SettingsError::IoError("read failed".to_string()).to_string(),
        "Settings IO error: read failed"
    );
    assert_eq!(
        SettingsError::SerializationError("bad json".to_string()).to_string(),
        "Settings serialization error: bad json"
    );
    assert_eq!(
        SettingsError::InvalidKey("nope".to_string()).to_string(),
        "Invalid settings key: nope"
    );
    assert_eq!(
        SettingsError::InvalidValue("wrong type".to_string()).to_string(),
        "Invalid settings value: wrong type"
    );
}
