//! Live Vocab Route - WebSocket entry grid
//!
//! The client sends `{"subject": "<tag|all>"}` to switch filters; the server
//! pushes a `{subject, count, entries}` snapshot on every change.

use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Query, State,
    },
    http::StatusCode,
    response::Response,
    routing::get,
    Router,
};

use lexicard::{SubjectFilter, VocabFeed, VocabView};

use super::domain_error;
use crate::models::{SelectSubjectMessage, VocabListResponse, VocabQuery};
use crate::AppState;

/// Open a live entry grid
#[utoipa::path(
    get,
    path = "/lexicard/vocab/live",
    params(VocabQuery),
    responses(
        (status = 101, description = "Switching to WebSocket; pushes VocabListResponse snapshots"),
        (status = 400, description = "Invalid subject")
    ),
    tag = "Vocab"
)]
pub async fn live_vocab(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
    Query(query): Query<VocabQuery>,
) -> Result<Response, (StatusCode, String)> {
    let filter: SubjectFilter = query
        .subject
        .as_deref()
        .unwrap_or_default()
        .parse()
        .map_err(domain_error)?;

    let feed = state.vocab_service.feed();
    Ok(ws.on_upgrade(move |socket| run_live_view(socket, feed, filter)))
}

async fn run_live_view(mut socket: WebSocket, feed: Arc<dyn VocabFeed>, initial: SubjectFilter) {
    let mut view = VocabView::new(feed);

    if let Err(e) = view.select(initial).await {
        let _ = send_error(&mut socket, &e.to_string()).await;
        return;
    }
    let subject = view.filter().map(|f| f.as_str()).unwrap_or("all");
    tracing::debug!(subject = %subject, "Live view opened");

    loop {
        tokio::select! {
            incoming = socket.recv() => match incoming {
                Some(Ok(Message::Text(text))) => {
                    let selected = match parse_selection(&text) {
                        Ok(filter) => view.select(filter).await.map_err(|e| e.to_string()),
                        Err(reason) => Err(reason),
                    };
                    if let Err(reason) = selected {
                        if send_error(&mut socket, &reason).await.is_err() {
                            break;
                        }
                    }
                }
                Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                Some(Ok(_)) => {}
            },
            snapshot = view.next_snapshot() => match snapshot {
                Some(snapshot) => {
                    let payload = match serde_json::to_string(&VocabListResponse::from(snapshot)) {
                        Ok(payload) => payload,
                        Err(e) => {
                            tracing::error!(error = %e, "Failed to encode snapshot");
                            break;
                        }
                    };
                    if socket.send(Message::Text(payload)).await.is_err() {
                        break;
                    }
                }
                None => break,
            },
        }
    }

    view.clear();
    tracing::debug!("Live view closed");
}

/// Parse a `{"subject": ...}` message into a filter
fn parse_selection(text: &str) -> Result<SubjectFilter, String> {
    let message: SelectSubjectMessage =
        serde_json::from_str(text).map_err(|e| format!("Invalid message: {}", e))?;
    message.subject.parse().map_err(|e: lexicard::DomainError| e.to_string())
}

async fn send_error(socket: &mut WebSocket, reason: &str) -> Result<(), axum::Error> {
    let body = serde_json::json!({ "error": reason }).to_string();
    socket.send(Message::Text(body)).await
}

pub fn router() -> Router<AppState> {
    Router::new().route("/lexicard/vocab/live", get(live_vocab))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selection() {
        assert_eq!(
            parse_selection(r#"{"subject": "Biology"}"#).unwrap(),
            "biology".parse::<SubjectFilter>().unwrap()
        );
        assert_eq!(parse_selection(r#"{"subject": "all"}"#).unwrap(), SubjectFilter::All);
        assert_eq!(parse_selection(r#"{"subject": ""}"#).unwrap(), SubjectFilter::All);
    }

    #[test]
    fn test_parse_selection_rejects_bad_input() {
        assert!(parse_selection("biology").is_err());
        assert!(parse_selection(r#"{"topic": "biology"}"#).is_err());
        assert!(parse_selection(r#"{"subject": "no spaces allowed"}"#).is_err());
    }
}
