use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::constants::{
    ALL_MOVIES_V1, MOVIE_BY_NAME_V1, MOVIE_BY_YEAR_V1, MOVIE_NAME_QUERY_PARAM, MOVIE_V1,
    YEAR_QUERY_PARAM,
};
use crate::movie::Movie;
use crate::movies_client::movies_client_error::MoviesClientError;

/// Blocking client for the movie catalog service.
///
/// Holds one transport handle and the service base URL, both fixed at
/// construction. Every operation performs exactly one HTTP exchange and
/// blocks the calling thread until a response or a failure is available;
/// nothing is retried, and the client stays reusable after a failure.
#[derive(Debug, Clone)]
pub struct MoviesClient {
    client: Client,
    base_url: String,
}

impl MoviesClient {
    /// Creates a client with a default transport (30 second request timeout).
    pub fn new(base_url: &str) -> Self {
        Self::with_client(
            Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .expect("Failed to build reqwest client"),
            base_url,
        )
    }

    /// Creates a client over a caller-configured transport. Timeouts and TLS
    /// behavior belong to the transport, not to this client.
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn retrieve_all_movies(&self) -> Result<Vec<Movie>, MoviesClientError> {
        let url = self.url(ALL_MOVIES_V1);
        debug!(url = %url, "retrieving all movies");

        self.resolve_json(self.client.get(&url))
    }

    pub fn retrieve_movie_by_id(&self, movie_id: i64) -> Result<Movie, MoviesClientError> {
        let url = self.movie_url(movie_id);
        debug!(url = %url, "retrieving movie by id");

        self.resolve_json(self.client.get(&url))
    }

    pub fn retrieve_movie_by_name(&self, name: &str) -> Result<Vec<Movie>, MoviesClientError> {
        let url = self.url(MOVIE_BY_NAME_V1);
        debug!(url = %url, movie_name = %name, "retrieving movies by name");

        self.resolve_json(
            self.client
                .get(&url)
                .query(&[(MOVIE_NAME_QUERY_PARAM, name)]),
        )
    }

    pub fn retrieve_movie_by_year(&self, year: i32) -> Result<Vec<Movie>, MoviesClientError> {
        let url = self.url(MOVIE_BY_YEAR_V1);
        debug!(url = %url, year = year, "retrieving movies by year");

        self.resolve_json(self.client.get(&url).query(&[(YEAR_QUERY_PARAM, year)]))
    }

    /// Creates a movie. `movie_id` must be absent; the server assigns it.
    pub fn add_movie(&self, new_movie: &Movie) -> Result<Movie, MoviesClientError> {
        let url = self.url(MOVIE_V1);
        debug!(url = %url, "adding movie");

        self.resolve_json(self.client.post(&url).json(new_movie))
    }

    /// Updates a movie. Fields absent from `movie_with_updates` are left
    /// unchanged by the server.
    pub fn update_movie(
        &self,
        movie_id: i64,
        movie_with_updates: &Movie,
    ) -> Result<Movie, MoviesClientError> {
        let url = self.movie_url(movie_id);
        debug!(url = %url, "updating movie");

        self.resolve_json(self.client.put(&url).json(movie_with_updates))
    }

    /// Deletes a movie and returns the server's confirmation message. The
    /// response body is a bare string, not JSON.
    pub fn delete_movie(&self, movie_id: i64) -> Result<String, MoviesClientError> {
        let url = self.movie_url(movie_id);
        debug!(url = %url, "deleting movie");

        let response = self.resolve(self.client.delete(&url))?;

        response.text().map_err(|cause| {
            error!("Reading response body failed: {cause}");
            MoviesClientError::from(cause)
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn movie_url(&self, movie_id: i64) -> String {
        format!("{}{}/{}", self.base_url, MOVIE_V1, movie_id)
    }

    /// Sends the request and rejects any response outside the 2xx range.
    fn resolve(&self, request: RequestBuilder) -> Result<Response, MoviesClientError> {
        let response = request.send().map_err(|cause| {
            error!("Request failed: {cause}");
            MoviesClientError::from(cause)
        })?;

        match response.error_for_status_ref() {
            Ok(_) => Ok(response),
            Err(cause) => {
                let status = response.status();
                let body = response.text().unwrap_or_default();
                error!(status = status.as_u16(), body = %body, "Server rejected the request");

                Err(MoviesClientError::server_rejected(status, body, cause))
            }
        }
    }

    fn resolve_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, MoviesClientError> {
        let response = self.resolve(request)?;

        response.json().map_err(|cause| {
            error!("Decoding response body failed: {cause}");
            MoviesClientError::from(cause)
        })
    }
}
