//! HTTP client for The Movie Database REST API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::config::{ApiConfig, SecureString};

use super::error::TmdbError;
use super::shape::{filter_by_genre, shape};
use super::types::{
    ListingResponse, Movie, MoviePage, NewSession, RequestTokenResponse, SessionResponse,
    ValidateWithLogin,
};
use super::{Authenticator, MovieCatalog};

/// Client for the read endpoints and the login handshake.
///
/// Never retries: every failure is returned to the caller as-is.
#[derive(Clone)]
pub struct TmdbClient {
    http: Client,
    base_url: String,
    api_key: Option<SecureString>,
}

impl TmdbClient {
    /// Build a client, resolving the API key from config, environment or
    /// build-time value.
    pub fn from_config(api: &ApiConfig) -> Result<Self, TmdbError> {
        let api_key = api.resolve_credential().into_key();
        if api_key.is_none() {
            tracing::warn!("No API key configured; every catalogue request will fail");
        }
        Self::new(api, api_key)
    }

    /// Build a client with an explicit key. `None` is accepted here and
    /// reported by each operation instead.
    pub fn new(api: &ApiConfig, api_key: Option<SecureString>) -> Result<Self, TmdbError> {
        let base_url = api.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)
            .map_err(|e| TmdbError::InvalidInput(format!("invalid API base URL '{}': {}", base_url, e)))?;

        let http = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(api.connect_timeout_seconds)))
            .timeout(Duration::from_secs(u64::from(api.timeout_seconds)))
            .build()
            .map_err(TmdbError::Transport)?;

        Ok(Self {
            http,
            base_url,
            api_key,
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn require_key(&self) -> Result<&SecureString, TmdbError> {
        self.api_key.as_ref().ok_or(TmdbError::MissingCredential)
    }

    fn endpoint(
        &self,
        path: &str,
        key: &SecureString,
        params: &[(&str, String)],
    ) -> Result<Url, TmdbError> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, path))
            .map_err(|e| TmdbError::InvalidInput(format!("invalid endpoint '{}': {}", path, e)))?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("api_key", key.expose());
            for (name, value) in params {
                query.append_pair(name, value);
            }
        }
        Ok(url)
    }

    /// GET a listing endpoint and return its raw results and page count.
    async fn fetch_listing(
        &self,
        key: &SecureString,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<(Vec<Movie>, u32), TmdbError> {
        let url = self.endpoint(path, key, params)?;
        tracing::debug!(endpoint = path, "Fetching listing");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(TmdbError::Transport)?;
        let response = ensure_success(response, path).await?;
        let body: ListingResponse = decode(response).await?;

        let results = body.results.ok_or_else(|| {
            TmdbError::MalformedResponse("No results found in the response".to_string())
        })?;
        let total_pages = body.total_pages.filter(|&n| n > 0).unwrap_or(1);

        tracing::debug!(
            endpoint = path,
            raw_count = results.len(),
            total_pages,
            "Listing fetched"
        );
        Ok((results, total_pages))
    }
}

#[async_trait]
impl MovieCatalog for TmdbClient {
    async fn popular(&self, page: u32, limit: usize) -> Result<MoviePage, TmdbError> {
        let key = self.require_key()?;
        validate_paging(page, limit)?;

        let (raw, total_pages) = self
            .fetch_listing(key, "/movie/popular", &[("page", page.to_string())])
            .await?;
        let results = shape(raw, limit, &mut rand::thread_rng());
        Ok(MoviePage {
            results,
            total_pages,
        })
    }

    async fn search_by_name(
        &self,
        query: &str,
        page: u32,
        limit: usize,
    ) -> Result<MoviePage, TmdbError> {
        let key = self.require_key()?;
        validate_query(query)?;
        validate_paging(page, limit)?;

        let (raw, total_pages) = self
            .fetch_listing(
                key,
                "/search/movie",
                &[("query", query.to_string()), ("page", page.to_string())],
            )
            .await?;
        let results = shape(raw, limit, &mut rand::thread_rng());
        Ok(MoviePage {
            results,
            total_pages,
        })
    }

    async fn search_by_genre(
        &self,
        genre_id: u32,
        page: u32,
        limit: usize,
    ) -> Result<MoviePage, TmdbError> {
        let key = self.require_key()?;
        validate_genre(genre_id)?;
        validate_paging(page, limit)?;

        let (raw, total_pages) = self
            .fetch_listing(
                key,
                "/discover/movie",
                &[
                    ("with_genres", genre_id.to_string()),
                    ("page", page.to_string()),
                ],
            )
            .await?;
        let results = shape(raw, limit, &mut rand::thread_rng());
        Ok(MoviePage {
            results,
            total_pages,
        })
    }

    async fn search_by_name_and_genre(
        &self,
        query: &str,
        genre_id: u32,
        page: u32,
        limit: usize,
    ) -> Result<MoviePage, TmdbError> {
        let key = self.require_key()?;
        validate_query(query)?;
        validate_genre(genre_id)?;
        validate_paging(page, limit)?;

        // total_pages stays the unfiltered search's count.
        let (raw, total_pages) = self
            .fetch_listing(
                key,
                "/search/movie",
                &[("query", query.to_string()), ("page", page.to_string())],
            )
            .await?;
        let filtered = filter_by_genre(raw, genre_id);
        let results = shape(filtered, limit, &mut rand::thread_rng());
        Ok(MoviePage {
            results,
            total_pages,
        })
    }
}

#[async_trait]
impl Authenticator for TmdbClient {
    async fn authenticate(&self, username: &str, password: &str) -> Result<String, TmdbError> {
        let key = self.require_key()?;
        if username.is_empty() {
            return Err(TmdbError::InvalidInput(
                "Invalid or missing username".to_string(),
            ));
        }
        if password.is_empty() {
            return Err(TmdbError::InvalidInput(
                "Invalid or missing password".to_string(),
            ));
        }

        // 1. Request token
        let path = "/authentication/token/new";
        let response = self
            .http
            .get(self.endpoint(path, key, &[])?)
            .send()
            .await
            .map_err(TmdbError::Transport)?;
        let response = ensure_success(response, path).await?;
        let token: RequestTokenResponse = decode(response).await?;
        let request_token = match token {
            RequestTokenResponse {
                success: true,
                request_token: Some(t),
            } if !t.is_empty() => t,
            _ => {
                return Err(TmdbError::MalformedResponse(
                    "Invalid request token response".to_string(),
                ))
            }
        };

        // 2. Validate with login
        let path = "/authentication/token/validate_with_login";
        let response = self
            .http
            .post(self.endpoint(path, key, &[])?)
            .json(&ValidateWithLogin {
                username,
                password,
                request_token: &request_token,
            })
            .send()
            .await
            .map_err(TmdbError::Transport)?;
        if response.status() == StatusCode::UNAUTHORIZED {
            tracing::info!(username = %username, "Login refused by movie service");
            return Err(TmdbError::InvalidCredentials);
        }
        let response = ensure_success(response, path).await?;
        let validated: RequestTokenResponse = decode(response).await?;
        let validated_token = match validated {
            RequestTokenResponse {
                success: true,
                request_token: Some(t),
            } if !t.is_empty() => t,
            _ => {
                return Err(TmdbError::MalformedResponse(
                    "Invalid login validation response".to_string(),
                ))
            }
        };

        // 3. Exchange for a session
        let path = "/authentication/session/new";
        let response = self
            .http
            .post(self.endpoint(path, key, &[])?)
            .json(&NewSession {
                request_token: &validated_token,
            })
            .send()
            .await
            .map_err(TmdbError::Transport)?;
        let response = ensure_success(response, path).await?;
        let session: SessionResponse = decode(response).await?;
        match session {
            SessionResponse {
                success: true,
                session_id: Some(id),
            } if !id.is_empty() => {
                tracing::info!(username = %username, "Session created");
                Ok(id)
            }
            _ => Err(TmdbError::MalformedResponse(
                "Invalid session creation response".to_string(),
            )),
        }
    }
}

fn validate_paging(page: u32, limit: usize) -> Result<(), TmdbError> {
    if page < 1 {
        return Err(TmdbError::InvalidInput("Invalid page number".to_string()));
    }
    if limit < 1 {
        return Err(TmdbError::InvalidInput("Invalid limit value".to_string()));
    }
    Ok(())
}

fn validate_query(query: &str) -> Result<(), TmdbError> {
    if query.is_empty() {
        return Err(TmdbError::InvalidInput(
            "Invalid or missing query parameter".to_string(),
        ));
    }
    Ok(())
}

fn validate_genre(genre_id: u32) -> Result<(), TmdbError> {
    if genre_id == 0 {
        return Err(TmdbError::InvalidInput(
            "Invalid or missing genreId parameter".to_string(),
        ));
    }
    Ok(())
}

/// Turn a non-success response into [`TmdbError::Remote`].
async fn ensure_success(response: Response, path: &str) -> Result<Response, TmdbError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    tracing::warn!(endpoint = path, status = status.as_u16(), body = %body, "Movie service error");
    Err(TmdbError::Remote {
        status: status.as_u16(),
        body,
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, TmdbError> {
    let bytes = response.bytes().await.map_err(TmdbError::Transport)?;
    serde_json::from_slice(&bytes).map_err(|e| TmdbError::MalformedResponse(e.to_string()))
}
