use serde::Serialize;
use tracing::{info, warn};

use crate::cosmic::{CountClient, CountRecord, unique_keywords};
use crate::domain::VariantRecord;
use crate::error::KiraError;
use crate::merge::{ResolvedCollection, concat_resolved};

/// Outcome of the gate. `Skipped` is distinct from a fetch that came back empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Enrichment {
    Skipped,
    Fetched {
        keywords: Vec<String>,
        counts: Vec<CountRecord>,
    },
}

impl Enrichment {
    pub fn counts(&self) -> Option<&[CountRecord]> {
        match self {
            Enrichment::Skipped => None,
            Enrichment::Fetched { counts, .. } => Some(counts),
        }
    }

    pub fn was_attempted(&self) -> bool {
        matches!(self, Enrichment::Fetched { .. })
    }
}

/// Asks `client` for counts only when the merged records carry a keyword.
///
/// The client is called at most once. Its errors are returned as-is.
pub fn maybe_fetch_enrichment<C: CountClient + ?Sized>(
    called: &ResolvedCollection<VariantRecord>,
    uncalled: &ResolvedCollection<VariantRecord>,
    client: &C,
) -> Result<Enrichment, KiraError> {
    let merged = concat_resolved(called, uncalled);
    let keywords = unique_keywords(&merged);
    if keywords.is_empty() {
        info!(
            records = merged.len(),
            "no keyword-bearing records; skipping count fetch"
        );
        return Ok(Enrichment::Skipped);
    }

    info!(keywords = keywords.len(), "fetching counts");
    let counts = client.fetch_counts(&keywords).inspect_err(|err| {
        warn!(error = %err, "count fetch failed");
    })?;
    Ok(Enrichment::Fetched { keywords, counts })
}
