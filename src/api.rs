// API client module: a small blocking HTTP client for the Talkium service.
//
// Every endpoint answers with an HTTP status *and* a JSON envelope of the
// form `{ "status": 200, "message": ... }`. A call only counts as a success
// when both read 200; `RawResponse::into_message` enforces that in one place.
//
// The actual HTTP work sits behind the `Transport` trait so the REPL and the
// login flow can be exercised with a scripted fake.

use anyhow::{Context, Result};
use reqwest::blocking::{Client, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::config::Config;
use crate::error::ApiError;

/// HTTP status plus the decoded JSON body (or `Value::Null` if the body was
/// not JSON).
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Value,
}

/// Minimal HTTP surface needed by the client. `path` is relative to the base
/// URL and always starts with `/`.
pub trait Transport {
    fn get(&self, path: &str, bearer: Option<&str>) -> Result<RawResponse, ApiError>;
    fn post_json(&self, path: &str, body: &Value) -> Result<RawResponse, ApiError>;
}

/// The response envelope shared by all endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub status: Option<i64>,
    #[serde(default)]
    pub message: Value,
}

impl RawResponse {
    /// Check both status layers and hand back the envelope's `message`.
    pub fn into_message(self) -> Result<Value, ApiError> {
        if self.status != 200 {
            return Err(ApiError::HttpStatus(self.status));
        }
        let envelope = match self.body {
            Value::Object(_) => serde_json::from_value::<Envelope>(self.body)?,
            _ => Envelope::default(),
        };
        match envelope.status {
            Some(200) => Ok(envelope.message),
            other => Err(ApiError::Status {
                status: other.unwrap_or_default(),
                message: message_text(&envelope.message),
            }),
        }
    }
}

fn message_text(message: &Value) -> String {
    match message {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// A Talkium user as returned by `/users` and `/auth/user`. Extra fields are
/// ignored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
}

/// Sign in request payload.
#[derive(Serialize, Deserialize, Debug)]
pub struct SignInRequest {
    pub username: String,
    pub password: String,
}

/// `Transport` backed by a reqwest blocking client.
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(HttpTransport {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn finish(path: &str, res: reqwest::Result<Response>) -> Result<RawResponse, ApiError> {
        let res = res.map_err(|e| transport_error(path, e))?;
        let status = res.status().as_u16();
        let text = res.text().map_err(|e| transport_error(path, e))?;
        // The server sometimes answers errors with plain text or HTML.
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);
        debug!(path, status, "received response");
        Ok(RawResponse { status, body })
    }
}

fn transport_error(path: &str, err: reqwest::Error) -> ApiError {
    ApiError::Transport {
        path: path.to_string(),
        reason: err.to_string(),
    }
}

impl Transport for HttpTransport {
    fn get(&self, path: &str, bearer: Option<&str>) -> Result<RawResponse, ApiError> {
        debug!(path, authenticated = bearer.is_some(), "GET");
        let mut req = self.client.get(self.url(path));
        if let Some(token) = bearer {
            req = req.bearer_auth(token);
        }
        Self::finish(path, req.send())
    }

    fn post_json(&self, path: &str, body: &Value) -> Result<RawResponse, ApiError> {
        debug!(path, "POST");
        Self::finish(path, self.client.post(self.url(path)).json(body).send())
    }
}

/// Typed access to the four endpoints the CLI uses.
pub struct ApiClient {
    transport: Box<dyn Transport>,
}

impl ApiClient {
    pub fn new(transport: impl Transport + 'static) -> Self {
        ApiClient {
            transport: Box::new(transport),
        }
    }

    /// Create an ApiClient talking HTTP to `config.api_url`.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(HttpTransport::new(&config.api_url)?))
    }

    /// Liveness probe on `GET /`. Transport failures are errors; a reachable
    /// server that reports a non-200 status is simply "not online".
    pub fn is_server_online(&self) -> Result<bool, ApiError> {
        let res = self.transport.get("/", None)?;
        Ok(res.into_message().is_ok())
    }

    /// Fetch every registered user from `GET /users`.
    pub fn users(&self) -> Result<Vec<User>, ApiError> {
        let message = self.transport.get("/users", None)?.into_message()?;
        Ok(serde_json::from_value(message)?)
    }

    /// `POST /auth/signin`, returning the issued bearer token.
    pub fn sign_in(&self, req: &SignInRequest) -> Result<String, ApiError> {
        let body = serde_json::to_value(req)?;
        let message = self.transport.post_json("/auth/signin", &body)?.into_message()?;
        Ok(serde_json::from_value(message)?)
    }

    /// `GET /auth/user` with the session token.
    pub fn current_user(&self, token: &str) -> Result<User, ApiError> {
        let message = self.transport.get("/auth/user", Some(token))?.into_message()?;
        Ok(serde_json::from_value(message)?)
    }
}
