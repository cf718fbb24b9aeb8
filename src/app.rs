use std::collections::BTreeMap;

use chrono::Utc;
use serde::Serialize;
use tracing::debug;

use crate::config::Inputs;
use crate::cosmic::{CountClient, CountRecord, index_by_keyword};
use crate::domain::VariantRecord;
use crate::enrichment::{Enrichment, maybe_fetch_enrichment};
use crate::error::KiraError;
use crate::identity::{EventId, GeneScopedId};
use crate::input::{load_collection, load_studies};
use crate::merge::{ResolvedCollection, merge_including_uncalled_keyed};
use crate::study::make_study_to_cancer_type_map;

#[derive(Debug, Clone, Serialize)]
pub struct MergeResult {
    pub record_count: usize,
    pub group_count: usize,
    pub groups: Vec<GroupEntry>,
    pub generated_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupEntry {
    pub key: String,
    pub gene_scoped_id: GeneScopedId,
    pub event_id: EventId,
    pub size: usize,
    pub records: Vec<VariantRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnrichResult {
    pub attempted: bool,
    pub keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counts: Option<Vec<CountRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by_keyword: Option<BTreeMap<String, Vec<CountRecord>>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StudiesResult {
    pub study_to_cancer_type: BTreeMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct LoadedInputs {
    pub called: ResolvedCollection<VariantRecord>,
    pub uncalled: ResolvedCollection<VariantRecord>,
}

impl LoadedInputs {
    pub fn load(inputs: &Inputs) -> Result<Self, KiraError> {
        let called = load_collection(inputs.called.as_deref())?;
        let uncalled = load_collection(inputs.uncalled.as_deref())?;
        debug!(
            called = called.len(),
            uncalled = uncalled.len(),
            "loaded variant collections"
        );
        Ok(Self { called, uncalled })
    }
}

#[derive(Clone)]
pub struct App<C: CountClient> {
    counts: C,
}

impl<C: CountClient> App<C> {
    pub fn new(counts: C) -> Self {
        Self { counts }
    }

    pub fn merge(&self, inputs: &LoadedInputs) -> Result<MergeResult, KiraError> {
        let groups = merge_including_uncalled_keyed(&inputs.called, &inputs.uncalled)?;
        let groups = groups
            .into_iter()
            .map(|group| GroupEntry {
                key: group.key.to_string(),
                event_id: group.key.event.clone(),
                size: group.len(),
                gene_scoped_id: group.key,
                records: group.records,
            })
            .collect::<Vec<_>>();

        Ok(MergeResult {
            record_count: inputs.called.len() + inputs.uncalled.len(),
            group_count: groups.len(),
            groups,
            generated_at: Utc::now().to_rfc3339(),
        })
    }

    pub fn enrich(&self, inputs: &LoadedInputs) -> Result<EnrichResult, KiraError> {
        let enrichment = maybe_fetch_enrichment(&inputs.called, &inputs.uncalled, &self.counts)?;
        Ok(match enrichment {
            Enrichment::Skipped => EnrichResult {
                attempted: false,
                keywords: Vec::new(),
                counts: None,
                by_keyword: None,
            },
            Enrichment::Fetched { keywords, counts } => {
                let by_keyword = index_by_keyword(&counts).into_iter().collect();
                EnrichResult {
                    attempted: true,
                    keywords,
                    counts: Some(counts),
                    by_keyword: Some(by_keyword),
                }
            }
        })
    }

    pub fn studies(&self, inputs: &Inputs) -> Result<StudiesResult, KiraError> {
        let path = inputs
            .studies
            .as_deref()
            .ok_or(KiraError::MissingInput("studies"))?;
        let studies = load_studies(path)?;
        let study_to_cancer_type = make_study_to_cancer_type_map(&studies)
            .into_iter()
            .collect();
        Ok(StudiesResult {
            study_to_cancer_type,
        })
    }
}
