//! Slack Web API client.
//!
//! Issues the two authenticated HTTP calls this server needs. The client is
//! blocking (reqwest::blocking creates its own runtime) and is always driven
//! from a dedicated thread spawned by the tool routes.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use tracing::{debug, info};

use crate::core::config::CredentialsConfig;

use super::error::SlackError;
use super::types::{PostMessageRequest, PostMessageResponse, User, UsersListResponse, filter_members};

/// Client for the Slack Web API, holding the bearer credential for the
/// process lifetime.
#[derive(Debug, Clone)]
pub struct SlackClient {
    api_base: String,
    token: String,
}

impl SlackClient {
    /// Create a client from the configured credentials.
    ///
    /// A missing token is not an error here: the request goes out with an
    /// empty bearer and Slack answers `ok: false` (`invalid_auth`).
    pub fn new(credentials: &CredentialsConfig) -> Self {
        Self {
            api_base: credentials.api_base.trim_end_matches('/').to_string(),
            token: credentials.slack_bot_token.clone().unwrap_or_default(),
        }
    }

    /// Send a direct message to a user via `chat.postMessage`.
    ///
    /// Returns Slack's raw acknowledgment as data; only a transport failure
    /// is an `Err`.
    pub fn post_message(&self, channel: &str, text: &str) -> Result<PostMessageResponse, SlackError> {
        info!("Posting message to {}", channel);

        let body = serde_json::to_vec(&PostMessageRequest { channel, text })?;

        let raw = reqwest::blocking::Client::new()
            .post(format!("{}/chat.postMessage", self.api_base))
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(CONTENT_TYPE, "application/json; charset=utf-8")
            .body(body)
            .send()?
            .text()?;

        let response: PostMessageResponse = serde_json::from_str(&raw)?;
        debug!("chat.postMessage ok: {}", response.ok);
        Ok(response)
    }

    /// List the workspace's human, active users via `users.list`.
    ///
    /// An `ok: false` answer becomes a typed `SlackError::Api` instead of
    /// the raw payload.
    pub fn list_users(&self) -> Result<Vec<User>, SlackError> {
        info!("Fetching workspace member list");

        let raw = reqwest::blocking::Client::new()
            .get(format!("{}/users.list", self.api_base))
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .send()?
            .text()?;

        let response: UsersListResponse = serde_json::from_str(&raw)?;
        if !response.ok {
            let code = response.error.unwrap_or_else(|| "unknown_error".to_string());
            return Err(SlackError::api(code));
        }

        let users = filter_members(response.members);
        debug!("users.list returned {} user(s) after filtering", users.len());
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_credentials(api_base: &str) -> CredentialsConfig {
        CredentialsConfig {
            slack_bot_token: Some("xoxb-test".to_string()),
            api_base: api_base.to_string(),
        }
    }

    // The client is blocking, so drive it off the test runtime.
    async fn on_thread<T: Send + 'static>(
        f: impl FnOnce() -> T + Send + 'static,
    ) -> T {
        tokio::task::spawn_blocking(f).await.unwrap()
    }

    #[tokio::test]
    async fn test_post_message_sends_channel_and_text_verbatim() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat.postMessage"))
            .and(header("Authorization", "Bearer xoxb-test"))
            .and(header("Content-Type", "application/json; charset=utf-8"))
            .and(body_json(json!({"channel": "U123", "text": "안녕하세요"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;

        let client = SlackClient::new(&test_credentials(&server.uri()));
        let response = on_thread(move || client.post_message("U123", "안녕하세요"))
            .await
            .unwrap();
        assert!(response.ok);
    }

    #[tokio::test]
    async fn test_post_message_returns_api_failure_as_data() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat.postMessage"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"ok": false, "error": "invalid_auth"})),
            )
            .mount(&server)
            .await;

        let client = SlackClient::new(&test_credentials(&server.uri()));
        let response = on_thread(move || client.post_message("U123", "hi"))
            .await
            .unwrap();
        assert!(!response.ok);
        assert_eq!(response.error.as_deref(), Some("invalid_auth"));
    }

    #[tokio::test]
    async fn test_list_users_filters_members() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users.list"))
            .and(header("Authorization", "Bearer xoxb-test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ok": true,
                "members": [
                    {"id": "U111", "name": "alice", "real_name": "Alice Kim"},
                    {"id": "U222", "name": "botty", "is_bot": true},
                    {"id": "U333", "name": "gone", "deleted": true},
                    {"id": "USLACKBOT", "name": "slackbot"},
                    {"id": "U444", "name": "bob"}
                ]
            })))
            .mount(&server)
            .await;

        let client = SlackClient::new(&test_credentials(&server.uri()));
        let users = on_thread(move || client.list_users()).await.unwrap();

        let ids: Vec<_> = users.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["U111", "U444"]);
        assert_eq!(users[0].real_name, "Alice Kim");
        assert_eq!(users[1].real_name, "bob");
    }

    #[tokio::test]
    async fn test_list_users_api_failure_is_typed() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users.list"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"ok": false, "error": "invalid_auth"})),
            )
            .mount(&server)
            .await;

        let client = SlackClient::new(&test_credentials(&server.uri()));
        let err = on_thread(move || client.list_users()).await.unwrap_err();
        match err {
            SlackError::Api { code } => assert_eq!(code, "invalid_auth"),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_token_sends_empty_bearer() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat.postMessage"))
            .and(header("Authorization", "Bearer "))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"ok": false, "error": "not_authed"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let credentials = CredentialsConfig {
            slack_bot_token: None,
            api_base: server.uri(),
        };
        let client = SlackClient::new(&credentials);
        let response = on_thread(move || client.post_message("U123", "hi"))
            .await
            .unwrap();
        assert!(!response.ok);
    }

    #[tokio::test]
    async fn test_connection_failure_is_an_error() {
        // Nothing listens on this port.
        let credentials = test_credentials("http://127.0.0.1:1");
        let client = SlackClient::new(&credentials);
        let err = on_thread(move || client.post_message("U123", "hi"))
            .await
            .unwrap_err();
        assert!(matches!(err, SlackError::Http(_)));
    }
}
