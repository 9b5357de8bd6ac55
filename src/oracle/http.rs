//! HTTP implementation of the oracle traits
//!
//! Blocking requests against the game backend. The event loop is
//! single-threaded, so the in-flight request is the session's only
//! suspension point; a finite timeout keeps a hung oracle from wedging the
//! session forever.

use super::protocol::{Guess, GuessResult, RawPuzzle, SpellingParams, SpellingPuzzle};
use super::{GenedleOracle, OracleError, SpellingOracle};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::debug;

/// Default backend address, matching the server's own default bind
pub const DEFAULT_SERVER: &str = "http://localhost:3000";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Oracle client over the backend's REST API
pub struct HttpOracle {
    http: Client,
    base_url: String,
}

impl HttpOracle {
    /// Build a client for a backend base URL
    ///
    /// # Errors
    /// Returns `OracleError::Client` if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(base_url: impl Into<String>) -> Result<Self, OracleError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(OracleError::Client)?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, url: String) -> Result<T, OracleError> {
        debug!(%url, "oracle GET");
        let response = self
            .http
            .get(&url)
            .send()
            .map_err(|source| OracleError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(OracleError::Status { url, status });
        }

        response
            .json()
            .map_err(|err| OracleError::Malformed(err.to_string()))
    }
}

impl GenedleOracle for HttpOracle {
    fn word_length(&self, seed: u64) -> Result<usize, OracleError> {
        let length: i64 = self.get_json(letters_url(&self.base_url, seed))?;

        // The backend answers -1 when it could not pick a word
        if length <= 0 {
            return Err(OracleError::Unavailable { seed });
        }

        Ok(length as usize)
    }

    fn validate(&self, guess: &Guess) -> Result<GuessResult, OracleError> {
        let url = guess_url(&self.base_url);
        debug!(%url, session = guess.session, "oracle POST guess");

        let response = self
            .http
            .post(&url)
            .json(guess)
            .send()
            .map_err(|source| OracleError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(OracleError::Status { url, status });
        }

        response
            .json()
            .map_err(|err| OracleError::Malformed(err.to_string()))
    }
}

impl SpellingOracle for HttpOracle {
    fn fetch_puzzle(&self, params: &SpellingParams) -> Result<SpellingPuzzle, OracleError> {
        let raw: RawPuzzle = self.get_json(puzzle_url(&self.base_url, params))?;

        SpellingPuzzle::try_from(raw).map_err(|_| OracleError::Unavailable { seed: params.seed })
    }

    fn check_symbol(&self, params: &SpellingParams, symbol: &str) -> Result<bool, OracleError> {
        self.get_json(check_url(&self.base_url, params, symbol))
    }
}

fn letters_url(base: &str, seed: u64) -> String {
    format!("{base}/api/v1/genedle-letters/{seed}")
}

fn guess_url(base: &str) -> String {
    format!("{base}/api/v1/genedle-guess")
}

fn puzzle_url(base: &str, params: &SpellingParams) -> String {
    format!(
        "{base}/api/v1/spelling-gene/{}/{}/{}/{}",
        params.seed, params.min_length, params.min_symbols, params.num_letters
    )
}

fn check_url(base: &str, params: &SpellingParams, symbol: &str) -> String {
    format!(
        "{base}/api/v1/spelling-gene-guess/{}/{}/{}/{}/{symbol}",
        params.seed, params.min_length, params.min_symbols, params.num_letters
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_paths_match_the_backend_router() {
        assert_eq!(
            letters_url("http://localhost:3000", 739_000),
            "http://localhost:3000/api/v1/genedle-letters/739000"
        );
        assert_eq!(
            guess_url("http://localhost:3000"),
            "http://localhost:3000/api/v1/genedle-guess"
        );

        let params = SpellingParams::for_seed(20_277);
        assert_eq!(
            puzzle_url("http://localhost:3000", &params),
            "http://localhost:3000/api/v1/spelling-gene/20277/4/10/7"
        );
        assert_eq!(
            check_url("http://localhost:3000", &params, "BRCA"),
            "http://localhost:3000/api/v1/spelling-gene-guess/20277/4/10/7/BRCA"
        );
    }

    #[test]
    fn trailing_slash_is_normalized() {
        let oracle = HttpOracle::new("http://localhost:3000/").unwrap();
        assert_eq!(oracle.base_url, "http://localhost:3000");
    }
}
