use phi_core::errors::{ConfigError, CorpusError, PhiError, StorageError};

#[test]
fn subsystem_errors_convert_into_phi_error() {
    let err: PhiError = StorageError::SqliteError {
        message: "disk I/O error".to_string(),
    }
    .into();
    assert!(matches!(err, PhiError::Storage(_)));
    assert_eq!(err.to_string(), "SQLite error: disk I/O error");

    let err: PhiError = CorpusError::HttpStatus {
        source_id: "rows".to_string(),
        status: 503,
    }
    .into();
    assert!(matches!(err, PhiError::Corpus(_)));
    assert!(err.to_string().contains("503"));

    let err: PhiError = ConfigError::FileNotFound {
        path: "phi.toml".to_string(),
    }
    .into();
    assert!(matches!(err, PhiError::Config(_)));
}

#[test]
fn serde_errors_convert_into_phi_error() {
    let parse: Result<serde_json::Value, _> = serde_json::from_str("{not json");
    let err: PhiError = parse.unwrap_err().into();
    assert!(matches!(err, PhiError::Serialization(_)));
}

#[test]
fn not_confirmed_names_the_operation() {
    let err = PhiError::NotConfirmed {
        operation: "reset".to_string(),
    };
    assert_eq!(err.to_string(), "reset requires explicit confirmation");
}
