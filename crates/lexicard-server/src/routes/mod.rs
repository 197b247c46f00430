//! Lexicard API Routes
//!
//! - /lexicard/vocab - Vocabulary entries (add, list by subject)
//! - /lexicard/vocab/live - Live entry grid (WebSocket)
//! - /lexicard/lookup/:word - Definition suggestions from public dictionaries

use axum::http::StatusCode;

use lexicard::DomainError;

pub mod live;
pub mod lookup;
pub mod swagger;
pub mod vocab;

/// Map a domain failure onto an HTTP status with the error text as body
pub(crate) fn domain_error(err: DomainError) -> (StatusCode, String) {
    let status = match &err {
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        _ => {
            tracing::error!(error = %err, "Request failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_status() {
        assert_eq!(
            domain_error(DomainError::validation("word must not be empty")).0,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            domain_error(DomainError::Repository("connection reset".into())).0,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
