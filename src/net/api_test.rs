use super::*;

#[test]
fn network_error_display_includes_cause() {
    let err = LoadError::Network("timed out".to_owned());
    assert_eq!(err.to_string(), "projects request failed: timed out");
}

#[test]
fn status_error_display_includes_code() {
    let err = LoadError::Status(404);
    assert_eq!(err.to_string(), "failed to load projects: 404");
}

#[test]
fn parse_error_display_includes_cause() {
    let err = LoadError::Parse("expected an array".to_owned());
    assert_eq!(err.to_string(), "malformed projects.json: expected an array");
}

#[test]
fn load_failure_message_carries_the_local_server_hint() {
    assert!(LOAD_FAILURE_MESSAGE.starts_with("Unable to load projects.json"));
    assert!(LOAD_FAILURE_MESSAGE.contains("local server"));
}
