use std::collections::{HashMap, HashSet};
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde::{Deserialize, Serialize};

use crate::domain::VariantRecord;
use crate::error::KiraError;

pub const DEFAULT_COUNTS_ENDPOINT: &str = "https://www.cbioportal.org/api/cosmic-counts/fetch";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountRecord {
    pub keyword: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cosmic_mutation_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein_change: Option<String>,
}

pub trait CountClient: Send + Sync {
    fn fetch_counts(&self, keywords: &[String]) -> Result<Vec<CountRecord>, KiraError>;
}

#[derive(Clone)]
pub struct CountHttpClient {
    client: Client,
    endpoint: String,
}

impl CountHttpClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, KiraError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&format!("kira-vm/{}", env!("CARGO_PKG_VERSION")))
                .map_err(|err| KiraError::EnrichmentHttp(err.to_string()))?,
        );
        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|err| KiraError::EnrichmentHttp(err.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl CountClient for CountHttpClient {
    fn fetch_counts(&self, keywords: &[String]) -> Result<Vec<CountRecord>, KiraError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(keywords)
            .send()
            .map_err(|err| KiraError::EnrichmentHttp(err.to_string()))?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .unwrap_or_else(|_| "enrichment request failed".to_string());
            return Err(KiraError::EnrichmentStatus { status, message });
        }
        response
            .json()
            .map_err(|err| KiraError::EnrichmentHttp(err.to_string()))
    }
}

/// Distinct non-empty keywords, first occurrence wins.
pub fn unique_keywords<'a>(records: impl IntoIterator<Item = &'a VariantRecord>) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter_map(VariantRecord::keyword)
        .filter(|keyword| seen.insert(*keyword))
        .map(str::to_string)
        .collect()
}

pub fn index_by_keyword(counts: &[CountRecord]) -> HashMap<String, Vec<CountRecord>> {
    let mut index = HashMap::<String, Vec<CountRecord>>::new();
    for count in counts {
        index
            .entry(count.keyword.clone())
            .or_default()
            .push(count.clone());
    }
    index
}
