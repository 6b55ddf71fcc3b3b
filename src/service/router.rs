use std::collections::BTreeMap;

use rand::Rng;
use serde::Serialize;

use crate::effects::{Effect, pipeline::Renderer};

/// Text rendered when a request has no `text` parameter.
pub const DEFAULT_TEXT: &str = "Hello, World!";

const API_NAME: &str = "TextFX API";
const API_VERSION: &str = "1.0.0";

/// Transport-independent HTTP response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceResponse {
    /// HTTP status code.
    pub status: u16,
    /// `Content-Type` value.
    pub content_type: &'static str,
    /// Response body.
    pub body: Vec<u8>,
    /// Download name for image responses.
    pub filename: Option<String>,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

#[derive(Serialize)]
struct EndpointInfo {
    path: &'static str,
    description: &'static str,
    method: &'static str,
    params: BTreeMap<&'static str, &'static str>,
}

#[derive(Serialize)]
struct ApiIndex {
    name: &'static str,
    version: &'static str,
    endpoints: Vec<EndpointInfo>,
}

impl ServiceResponse {
    fn json(status: u16, value: &impl Serialize) -> Self {
        let body = serde_json::to_vec(value).unwrap_or_else(|_| b"{}".to_vec());
        Self {
            status,
            content_type: "application/json",
            body,
            filename: None,
        }
    }

    /// `{"error": message}` with `status`.
    pub fn error(status: u16, message: &str) -> Self {
        Self::json(status, &ErrorBody { error: message })
    }

    /// Headers to send besides the status line.
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = vec![
            ("Content-Type", self.content_type.to_owned()),
            ("Access-Control-Allow-Origin", "*".to_owned()),
        ];
        if let Some(name) = &self.filename {
            headers.push((
                "Content-Disposition",
                format!("inline; filename=\"{}\"", header_safe(name)),
            ));
        }
        headers
    }
}

// Header values must be visible ASCII without quotes.
fn header_safe(name: &str) -> String {
    name.chars()
        .map(|c| {
            if (c.is_ascii_graphic() || c == ' ') && c != '"' && c != '\\' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Value of the `text` query parameter, or [`DEFAULT_TEXT`].
pub fn text_param(query: &str) -> String {
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "text")
        .map(|(_, value)| value.into_owned())
        .unwrap_or_else(|| DEFAULT_TEXT.to_owned())
}

/// Endpoint index served at `/`.
pub fn index() -> ServiceResponse {
    let endpoints = Effect::ALL
        .into_iter()
        .map(|effect| EndpointInfo {
            path: effect.route(),
            description: effect.description(),
            method: "GET",
            params: BTreeMap::from([("text", "Text to render")]),
        })
        .collect();
    ServiceResponse::json(
        200,
        &ApiIndex {
            name: API_NAME,
            version: API_VERSION,
            endpoints,
        },
    )
}

/// Answer `method url` with the thread-local random generator.
pub fn route(renderer: &Renderer, method: &str, url: &str) -> ServiceResponse {
    route_with_rng(renderer, method, url, &mut rand::rng())
}

/// Answer `method url`, where `url` is the request target (`/path?query`).
pub fn route_with_rng<R: Rng>(
    renderer: &Renderer,
    method: &str,
    url: &str,
    rng: &mut R,
) -> ServiceResponse {
    let (path, query) = url.split_once('?').unwrap_or((url, ""));

    if path == "/" {
        return if method == "GET" {
            index()
        } else {
            ServiceResponse::error(405, "method not allowed")
        };
    }
    let Some(effect) = Effect::from_route(path) else {
        return ServiceResponse::error(404, "not found");
    };
    if method != "GET" {
        return ServiceResponse::error(405, "method not allowed");
    }

    let text = text_param(query);
    match renderer.render_with_rng(effect, &text, rng) {
        Ok(image) => ServiceResponse {
            status: 200,
            content_type: image.mime(),
            body: image.bytes,
            filename: Some(image.filename),
        },
        Err(err) => {
            tracing::warn!(?effect, %err, "render failed");
            ServiceResponse::error(400, &err.to_string())
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/service/router.rs"]
mod tests;
