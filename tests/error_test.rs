use std::io;
use std::path::PathBuf;

use appseed::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::ValidationError("bad name".to_string());
    assert_eq!(err.to_string(), "Validation error: bad name.");

    let err = Error::DestinationExistsError { path: "my_app".to_string() };
    assert_eq!(err.to_string(), "Destination directory 'my_app' already exists.");

    let err = Error::MaterializeError {
        path: PathBuf::from("my_app/README.md"),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    };
    assert_eq!(err.to_string(), "Failed to materialize 'my_app/README.md': denied.");
}

#[test]
fn test_answers_error_from_json() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: Error = json_err.into();
    assert!(matches!(err, Error::AnswersError(_)));
}
