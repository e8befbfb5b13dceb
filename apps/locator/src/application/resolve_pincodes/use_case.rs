use super::dto::{PincodeResolution, ResolutionTier};
use super::filter::{SelectionFilter, candidates_from_backend};
use crate::domain::catalog::{is_local_override_state, is_union_territory, local_candidates};
use crate::domain::location::{
    alias::{RetryQuery, normalize, retry_query},
    value_objects::PostalCandidate,
};
use crate::infrastructure::{
    backend::GeoBackend,
    postal::{PostOffice, PostalDirectory},
};
use futures_util::future::join_all;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Produces the candidate pincodes for a (state, district) selection.
///
/// Sources are tried in priority order and the first non-empty, validated
/// list wins:
/// 1. the local override table (Puducherry), with no network call
/// 2. the owning backend's geo endpoint, when one is configured
/// 3. an India Post locality search on the district name, filtered to the
///    selection
/// 4. for union territories only, a second search on a per-state term
///
/// Transport failures never escape; a failing tier counts as empty.
#[derive(Clone)]
pub struct PostalCodeResolver {
    directory: Arc<dyn PostalDirectory>,
    backend: Option<Arc<dyn GeoBackend>>,
}

impl PostalCodeResolver {
    pub fn new(directory: Arc<dyn PostalDirectory>, backend: Option<Arc<dyn GeoBackend>>) -> Self {
        Self { directory, backend }
    }

    /// Resolver for the server side, which is itself the backend.
    pub fn without_backend(directory: Arc<dyn PostalDirectory>) -> Self {
        Self::new(directory, None)
    }

    pub async fn resolve(&self, state: &str, district: &str) -> Vec<PostalCandidate> {
        self.execute(state, district).await.candidates
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, state: &str, district: &str) -> PincodeResolution {
        let state = state.trim();
        let district = district.trim();
        if district.is_empty() {
            return PincodeResolution::exhausted();
        }

        if is_local_override_state(&normalize(state)) {
            debug!("serving local override table");
            return PincodeResolution {
                tier: ResolutionTier::LocalOverride,
                candidates: local_candidates(district),
            };
        }

        if let Some(candidates) = self.from_backend(state, district).await {
            return PincodeResolution {
                tier: ResolutionTier::Backend,
                candidates,
            };
        }

        let filter = SelectionFilter::new(state, district);

        let candidates = filter.candidates(self.search(district).await);
        if !candidates.is_empty() {
            return PincodeResolution {
                tier: ResolutionTier::Locality,
                candidates,
            };
        }

        let retry = if is_union_territory(state) {
            retry_query(state, district)
        } else {
            None
        };
        let offices = match retry {
            Some(RetryQuery::Single(term)) => {
                debug!(term = %term, "retrying with state-level term");
                self.search(&term).await
            }
            Some(RetryQuery::Each(terms)) => {
                debug!(queries = terms.len(), "retrying per island");
                join_all(terms.iter().map(|term| self.search(term)))
                    .await
                    .into_iter()
                    .flatten()
                    .collect()
            }
            None => return PincodeResolution::exhausted(),
        };

        let candidates = filter.candidates(offices);
        if candidates.is_empty() {
            debug!("no source produced candidates");
            return PincodeResolution::exhausted();
        }
        PincodeResolution {
            tier: ResolutionTier::StateRetry,
            candidates,
        }
    }

    async fn from_backend(&self, state: &str, district: &str) -> Option<Vec<PostalCandidate>> {
        let backend = self.backend.as_ref()?;
        match backend.pincodes_for(state, district).await {
            Ok(list) => {
                let candidates = candidates_from_backend(list);
                if candidates.is_empty() {
                    debug!("backend returned no usable pincodes");
                    None
                } else {
                    Some(candidates)
                }
            }
            Err(e) => {
                warn!(error = %e, "backend geo lookup failed, falling back to India Post");
                None
            }
        }
    }

    async fn search(&self, query: &str) -> Vec<PostOffice> {
        match self.directory.search_locality(query).await {
            Ok(offices) => offices,
            Err(e) => {
                warn!(query, error = %e, "locality search failed");
                Vec::new()
            }
        }
    }
}
