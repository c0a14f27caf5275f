use axum::http::StatusCode;

/// 400..=499
pub fn is_client_error(status: i32) -> bool {
    (400..500).contains(&status)
}

/// 500..=599
pub fn is_server_error(status: i32) -> bool {
    (500..600).contains(&status)
}

/// Get the HTTP status code for a raw status, if it is one.
///
/// Anything outside 100..=999 has no representation on the wire.
pub fn to_status_code(status: i32) -> Option<StatusCode> {
    u16::try_from(status)
        .ok()
        .and_then(|code| StatusCode::from_u16(code).ok())
}
