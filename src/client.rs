use std::env;

use reqwest::{
    header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Method, Request as HttpRequest, Response,
};
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

use crate::{
    paging::{PagedResource, Paged},
    path,
    request::{Request, RequestBody},
};

const BASE_URL_ENV: &str = "CANVAS_BASE_URL";
const ACCESS_TOKEN_ENV: &str = "CANVAS_ACCESS_TOKEN";
const RATE_LIMIT_REMAINING: &str = "x-rate-limit-remaining";

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP Client error")]
    HttpClient(#[from] reqwest::Error),
    #[error("Invalid token received")]
    InvalidTokenValue,
    #[error("Invalid URL")]
    InvalidURL(#[from] url::ParseError),
    #[error("Failed to parse json")]
    ParseError(#[from] serde_json::Error),
    #[error("Invalid request: {}", .0.join(", "))]
    InvalidRequest(Vec<String>),
    #[error("Missing configuration: {0}")]
    MissingConfig(&'static str),
    #[error("Error response: [{0}] {1}")]
    ErrorResponse(u16, String),
    #[error("Pagination link points to another origin: {0}")]
    ForeignPageLink(Url),
}

/// Root client for the Canvas REST API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct Client {
    base_url: Url,
    token: Option<String>,
    http_client: reqwest::Client,
}

impl Client {
    /// Creates a client for the Canvas instance at `base_url`,
    /// e.g. `https://canvas.instructure.com`.
    ///
    /// When `token` is `None`, requests are sent without an `Authorization` header.
    pub async fn new(base_url: &str, token: Option<&str>) -> Result<Self, Error> {
        let url = Url::parse(base_url)?;

        Ok(Client {
            base_url: url,
            token: token.map(str::to_owned),
            http_client: reqwest::Client::new(),
        })
    }

    /// Creates a client from `CANVAS_BASE_URL` and `CANVAS_ACCESS_TOKEN`.
    pub async fn from_env() -> Result<Self, Error> {
        let base_url = env::var(BASE_URL_ENV).map_err(|_| Error::MissingConfig(BASE_URL_ENV))?;
        let token = env::var(ACCESS_TOKEN_ENV).ok();

        Self::new(&base_url, token.as_deref()).await
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn request(&self, req: HttpRequest) -> Result<Response, Error> {
        log::debug!("{} {}", req.method(), req.url());
        let resp = self.http_client.execute(req).await?;

        if let Some(remaining) = resp.headers().get(RATE_LIMIT_REMAINING) {
            log::debug!("Rate limit remaining: {:?}", remaining);
        }

        Ok(resp)
    }

    /// Validates `req`, sends it and returns the raw successful response.
    pub async fn send_request<R>(&self, req: &R) -> Result<Response, Error>
    where
        R: Request + ?Sized,
    {
        req.has_errors()?;
        let http_req = self.build_request(req)?;
        let resp = self.request(http_req).await?;

        status_unwrap(resp).await
    }

    /// Sends `req` and deserializes the response body into its output type.
    pub async fn send<R>(&self, req: &R) -> Result<R::Output, Error>
    where
        R: Request + ?Sized,
    {
        let resp = self.send_request(req).await?;

        parse_body(resp).await
    }

    /// Sends `req` and keeps the pagination links of the response alongside the data.
    pub async fn send_paged<R>(&self, req: &R) -> Result<Paged<R::Output>, Error>
    where
        R: Request + ?Sized,
    {
        let resp = self.send_request(req).await?;
        let links = PagedResource::from_headers(resp.headers());
        let data = parse_body(resp).await?;

        Ok(Paged { data, links })
    }

    pub(crate) fn build_request<R>(&self, req: &R) -> Result<HttpRequest, Error>
    where
        R: Request + ?Sized,
    {
        let mut url = path::api_url(&self.base_url, &req.url_path())?;
        let query = req.query();
        if !query.is_empty() {
            url.set_query(Some(&query.encode()));
        }

        let mut http_req = self.new_request(req.method(), url)?;

        match req.body()? {
            Some(RequestBody::Form(params)) => {
                http_req.headers_mut().insert(
                    CONTENT_TYPE,
                    HeaderValue::from_static("application/x-www-form-urlencoded"),
                );
                *http_req.body_mut() = Some(params.encode().into());
            }
            Some(RequestBody::Json(value)) => {
                http_req
                    .headers_mut()
                    .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
                *http_req.body_mut() = Some(serde_json::to_vec(&value)?.into());
            }
            None => {}
        }

        Ok(http_req)
    }

    /// Creates an authorized request without a body.
    pub(crate) fn new_request(&self, method: Method, url: Url) -> Result<HttpRequest, Error> {
        let mut req = HttpRequest::new(method, url);

        if let Some(token) = &self.token {
            let mut header_value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| Error::InvalidTokenValue)?;
            header_value.set_sensitive(true);

            req.headers_mut().insert(AUTHORIZATION, header_value);
        }

        Ok(req)
    }
}

/// Deserializes a response body, treating an empty body as JSON `null`.
pub(crate) async fn parse_body<D: DeserializeOwned>(resp: Response) -> Result<D, Error> {
    let body = resp.bytes().await?;
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(serde_json::from_slice(b"null")?);
    }

    Ok(serde_json::from_slice(&body)?)
}

/// Extracts a human readable message from a Canvas error body.
///
/// Canvas answers with one of
/// `{"errors":[{"message":".."}]}`, `{"errors":{"field":[{"message":".."}]}}`
/// or `{"message":".."}`.
fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;

    if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
        return Some(message.to_owned());
    }

    let mut messages = Vec::new();
    match value.get("errors")? {
        serde_json::Value::Array(errors) => {
            messages.extend(errors.iter().filter_map(entry_message));
        }
        serde_json::Value::Object(fields) => {
            for (field, errors) in fields {
                let errors = errors.as_array().map(Vec::as_slice).unwrap_or_default();
                for msg in errors.iter().filter_map(entry_message) {
                    messages.push(format!("{}: {}", field, msg));
                }
            }
        }
        serde_json::Value::String(s) => messages.push(s.clone()),
        _ => {}
    }

    if messages.is_empty() {
        None
    } else {
        Some(messages.join(", "))
    }
}

fn entry_message(entry: &serde_json::Value) -> Option<String> {
    match entry {
        serde_json::Value::String(s) => Some(s.clone()),
        other => other
            .get("message")
            .and_then(|m| m.as_str())
            .map(str::to_owned),
    }
}

/// convert HTTP Response with status < 200 and > 300 to Error
pub(crate) async fn status_unwrap(resp: Response) -> Result<Response, Error> {
    match resp.status().as_u16() {
        code if !(200..300).contains(&code) => {
            let err_body = resp.text().await?;
            let message = error_message(&err_body).unwrap_or(err_body);
            log::debug!("Error response: [{}] {}", code, message);

            Err(Error::ErrorResponse(code, message))
        }
        _ => Ok(resp),
    }
}
