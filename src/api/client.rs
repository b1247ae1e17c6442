use isahc::http::{method::Method, request::Builder, StatusCode};
use isahc::{AsyncReadResponseExt, HttpClient, Request};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use serde_json::from_str;
use std::marker::PhantomData;
use thiserror::Error;

pub use super::api_models::*;
use crate::app::models::FetchFailure;
use crate::settings::ApiSettings;

const USER_AGENT: &str = concat!("gh-followers/", env!("CARGO_PKG_VERSION"));
const ACCEPT: &str = "application/vnd.github+json";

// https://url.spec.whatwg.org/#path-percent-encode-set, plus '/' as usernames are a single segment
const PATH_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/');

pub(crate) struct GitHubRequest<'a, Response> {
    client: &'a GitHubClient,
    request: Builder,
    _type: PhantomData<Response>,
}

impl<'a, R> GitHubRequest<'a, R> {
    fn method(mut self, method: Method) -> Self {
        self.request = self.request.method(method);
        self
    }

    // Invalid uris are reported when the request is sent
    fn uri(mut self, path: String, query: Option<&str>) -> Self {
        let ApiSettings { scheme, host } = &self.client.settings;
        let path_and_query = match query {
            None => path,
            Some(query) => format!("{path}?{query}"),
        };
        self.request = self
            .request
            .uri(format!("{scheme}://{host}{path_and_query}"));
        self
    }

    pub(crate) async fn send(self) -> Result<R, GitHubApiError>
    where
        R: DeserializeOwned,
    {
        let Self {
            client, request, ..
        } = self;
        client.send_req(request.body(())?).await
    }
}

#[derive(Error, Debug)]
pub enum GitHubApiError {
    #[error("Request failed ({0}): {1}")]
    BadStatus(u16, String),
    #[error(transparent)]
    InvalidRequest(#[from] isahc::http::Error),
    #[error(transparent)]
    ClientError(#[from] isahc::Error),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error(transparent)]
    ParseError(#[from] serde_json::Error),
}

impl From<GitHubApiError> for FetchFailure {
    fn from(_: GitHubApiError) -> Self {
        FetchFailure
    }
}

pub(crate) struct GitHubClient {
    settings: ApiSettings,
    client: HttpClient,
}

impl GitHubClient {
    pub(crate) fn new(settings: ApiSettings) -> Result<Self, GitHubApiError> {
        let client = HttpClient::new()?;
        Ok(Self { settings, client })
    }

    pub(crate) fn request<T>(&self) -> GitHubRequest<'_, T> {
        GitHubRequest {
            client: self,
            request: Builder::new()
                .header("Accept", ACCEPT)
                .header("User-Agent", USER_AGENT),
            _type: PhantomData,
        }
    }

    async fn send_req<T>(&self, request: Request<()>) -> Result<T, GitHubApiError>
    where
        T: DeserializeOwned,
    {
        let mut result = self.client.send_async(request).await?;

        match result.status() {
            s if s.is_success() => Ok(from_str(&result.text().await?)?),
            StatusCode::NOT_FOUND => Err(GitHubApiError::BadStatus(
                404,
                "(no such user)".to_string(),
            )),
            s => Err(GitHubApiError::BadStatus(
                s.as_u16(),
                result
                    .text()
                    .await
                    .unwrap_or_else(|_| "(no details available)".to_string()),
            )),
        }
    }
}

impl GitHubClient {
    pub(crate) fn get_followers(
        &self,
        username: &str,
        page: u32,
        per_page: u32,
    ) -> GitHubRequest<'_, Vec<User>> {
        let username = utf8_percent_encode(username, PATH_ENCODE_SET);
        let query = FollowersQuery { page, per_page }.into_query_string();

        self.request()
            .method(Method::GET)
            .uri(format!("/users/{username}/followers"), Some(&query))
    }
}
