//! Tests for HTTP request/response types.

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

fn events_url() -> url::Url {
    url::Url::parse("https://events.example.com/v2/enqueue").unwrap()
}

mod http_request {
    use super::*;

    #[test]
    fn new_creates_request_with_method_and_url() {
        let req = HttpRequest::new(http::Method::PUT, events_url());

        assert_eq!(req.method, http::Method::PUT);
        assert_eq!(req.url, events_url());
        assert!(req.headers.is_empty());
        assert!(req.body.is_none());
    }

    #[test]
    fn json_post_sets_method_headers_and_body() {
        let req = HttpRequest::json_post(events_url(), br#"{"a":1}"#.to_vec());

        assert_eq!(req.method, http::Method::POST);
        assert_eq!(
            req.headers.get(http::header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(
            req.headers.get(http::header::ACCEPT).unwrap(),
            "application/json"
        );
        assert_eq!(req.body.as_deref(), Some(br#"{"a":1}"#.as_slice()));
    }

    #[test]
    fn json_post_sets_each_header_once() {
        let req = HttpRequest::json_post(events_url(), Vec::new());

        assert_eq!(req.headers.len(), 2);
        assert_eq!(
            req.headers.get_all(http::header::ACCEPT).iter().count(),
            1
        );
    }

    #[test]
    fn with_header_appends_multiple_values_for_same_name() {
        let req = HttpRequest::new(http::Method::GET, events_url())
            .with_header(
                http::header::ACCEPT,
                http::HeaderValue::from_static("text/html"),
            )
            .with_header(
                http::header::ACCEPT,
                http::HeaderValue::from_static("application/json"),
            );

        assert_eq!(req.headers.get_all(http::header::ACCEPT).iter().count(), 2);
    }

    #[test]
    fn clone_creates_independent_copy() {
        let req1 = HttpRequest::json_post(events_url(), b"original".to_vec());
        let mut req2 = req1.clone();
        req2.body = Some(b"changed".to_vec());

        assert_eq!(req1.body.as_deref(), Some(b"original".as_slice()));
    }
}

mod http_response {
    use super::*;

    fn response(status: http::StatusCode, body: &[u8]) -> HttpResponse {
        HttpResponse::new(status, http::HeaderMap::new(), body.to_vec())
    }

    #[test]
    fn new_creates_response_with_all_fields() {
        let resp = response(http::StatusCode::ACCEPTED, b"body");

        assert_eq!(resp.status, http::StatusCode::ACCEPTED);
        assert!(resp.headers.is_empty());
        assert_eq!(resp.body, b"body".to_vec());
    }

    #[test]
    fn body_lossy_returns_text() {
        let resp = response(http::StatusCode::OK, b"Hello, World!");
        assert_eq!(resp.body_lossy(), "Hello, World!");
    }

    #[test]
    fn body_lossy_replaces_invalid_utf8() {
        let resp = response(http::StatusCode::OK, &[b'o', b'k', 0xFF]);
        assert_eq!(resp.body_lossy(), "ok\u{FFFD}");
    }

    #[test]
    fn json_parses_body() {
        let resp = response(http::StatusCode::OK, br#"{"status":"success"}"#);
        let value: serde_json::Value = resp.json().unwrap();

        assert_eq!(value["status"], "success");
    }

    #[test]
    fn json_rejects_empty_body() {
        let resp = response(http::StatusCode::ACCEPTED, b"");
        assert!(resp.json::<serde_json::Value>().is_err());
    }

    #[test]
    fn json_rejects_html() {
        let resp = response(http::StatusCode::OK, b"<html>maintenance</html>");
        assert!(resp.json::<serde_json::Value>().is_err());
    }
}

mod http_error {
    use super::*;
    use std::error::Error;

    #[test]
    fn connection_error_preserves_source() {
        let source = std::io::Error::other("network unavailable");
        let error = HttpError::Connection(Box::new(source));

        assert!(error.to_string().contains("Connection error"));
        assert!(
            error
                .source()
                .unwrap()
                .to_string()
                .contains("network unavailable")
        );
    }

    #[test]
    fn timeout_displays_message() {
        assert_eq!(HttpError::Timeout.to_string(), "Request timed out");
        assert!(HttpError::Timeout.source().is_none());
    }

    #[test]
    fn client_build_displays_reason() {
        let error = HttpError::ClientBuild("bad proxy".to_string());
        assert!(error.to_string().contains("bad proxy"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpError>();
    }
}

mod http_client_trait {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingClient {
        calls: AtomicUsize,
    }

    impl HttpClient for CountingClient {
        async fn request(&self, _req: HttpRequest) -> Result<HttpResponse, HttpError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(HttpResponse::new(
                http::StatusCode::ACCEPTED,
                http::HeaderMap::new(),
                Vec::new(),
            ))
        }
    }

    #[tokio::test]
    async fn arc_client_delegates_to_inner() {
        let client = Arc::new(CountingClient {
            calls: AtomicUsize::new(0),
        });
        let shared = Arc::clone(&client);

        let response = shared
            .request(HttpRequest::json_post(events_url(), Vec::new()))
            .await
            .unwrap();

        assert_eq!(response.status, http::StatusCode::ACCEPTED);
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
    }
}
