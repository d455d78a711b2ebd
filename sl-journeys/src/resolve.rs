//! Stop resolution.
//!
//! Turns a free-text place name into the single location the trip search
//! should use, with one stop-finder round trip and no retries.

use crate::domain::{Location, pick_best_location};
use crate::sl::{SlClient, SlError};

/// Error from stop resolution.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The stop finder returned no candidates
    #[error("no matching stop found")]
    NotFound,

    /// The stop finder call failed
    #[error(transparent)]
    Upstream(#[from] SlError),
}

/// Trait for searching stops by name.
///
/// This abstraction allows resolution to be tested with mock data.
#[allow(async_fn_in_trait)]
pub trait StopProvider {
    /// Candidate locations for `query`, in upstream order.
    async fn search_stops(&self, query: &str) -> Result<Vec<Location>, SlError>;
}

impl StopProvider for SlClient {
    async fn search_stops(&self, query: &str) -> Result<Vec<Location>, SlError> {
        self.find_stops(query).await
    }
}

/// Resolve `query` to the best-matching location.
pub async fn resolve_stop<P: StopProvider>(
    provider: &P,
    query: &str,
) -> Result<Location, ResolveError> {
    let candidates = provider.search_stops(query).await?;

    let best = pick_best_location(&candidates)
        .cloned()
        .ok_or(ResolveError::NotFound)?;

    tracing::debug!(
        query,
        id = %best.id,
        name = %best.name,
        candidates = candidates.len(),
        "resolved stop"
    );

    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mock stop finder returning canned candidates.
    struct MockStops {
        result: Mutex<Option<Result<Vec<Location>, SlError>>>,
        queries: Mutex<Vec<String>>,
    }

    impl MockStops {
        fn new(result: Result<Vec<Location>, SlError>) -> Self {
            Self {
                result: Mutex::new(Some(result)),
                queries: Mutex::new(Vec::new()),
            }
        }

        fn queries(&self) -> Vec<String> {
            self.queries.lock().unwrap().clone()
        }
    }

    impl StopProvider for MockStops {
        async fn search_stops(&self, query: &str) -> Result<Vec<Location>, SlError> {
            self.queries.lock().unwrap().push(query.to_string());
            self.result
                .lock()
                .unwrap()
                .take()
                .expect("stop finder called more than once")
        }
    }

    fn loc(id: &str, quality: i64, is_best: bool) -> Location {
        let mut l = Location::stop(id, format!("Stop {id}, Stockholm"));
        l.match_quality = quality;
        l.is_best = is_best;
        l
    }

    #[tokio::test]
    async fn resolves_best_candidate() {
        let provider = MockStops::new(Ok(vec![
            loc("1", 700, false),
            loc("2", 900, false),
            loc("3", 800, false),
        ]));

        let location = resolve_stop(&provider, "Slussen").await.unwrap();

        assert_eq!(location.id, "2");
        assert_eq!(provider.queries(), vec!["Slussen".to_string()]);
    }

    #[tokio::test]
    async fn best_flag_wins() {
        let provider = MockStops::new(Ok(vec![loc("1", 999, false), loc("2", 1, true)]));

        let location = resolve_stop(&provider, "Odenplan").await.unwrap();
        assert_eq!(location.id, "2");
    }

    #[tokio::test]
    async fn empty_candidates_not_found() {
        let provider = MockStops::new(Ok(vec![]));

        let err = resolve_stop(&provider, "Nowhere").await.unwrap_err();
        assert!(matches!(err, ResolveError::NotFound));
        assert_eq!(err.to_string(), "no matching stop found");
    }

    #[tokio::test]
    async fn upstream_error_propagates() {
        let provider = MockStops::new(Err(SlError::Status {
            status: 500,
            body: "oops".into(),
        }));

        let err = resolve_stop(&provider, "Slussen").await.unwrap_err();
        assert!(matches!(err, ResolveError::Upstream(SlError::Status { .. })));
        assert_eq!(err.to_string(), "unexpected HTTP status 500: oops");
    }
}
