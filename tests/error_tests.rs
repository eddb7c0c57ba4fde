// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use interview_client::error::{ClientError, LOGIN_EXPIRED_MESSAGE};

#[test]
fn test_unauthorized_helpers() {
    let err = ClientError::Unauthorized;
    assert!(err.is_unauthorized());
    assert!(!err.is_transport());
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.to_string(), LOGIN_EXPIRED_MESSAGE);
}

#[test]
fn test_status_only_for_http_responses() {
    let err = ClientError::Api {
        status: 404,
        message: "not found".to_string(),
    };
    assert_eq!(err.status(), Some(404));
    assert!(!err.is_unauthorized());
    assert_eq!(err.to_string(), "API error (HTTP 404): not found");

    let err = ClientError::Transport("connection refused".to_string());
    assert!(err.is_transport());
    assert_eq!(err.status(), None);

    let err = ClientError::Storage("disk full".to_string());
    assert_eq!(err.status(), None);
}

#[test]
fn test_json_errors_are_decode_errors() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: ClientError = json_err.into();
    assert!(matches!(err, ClientError::Decode(_)));
}
