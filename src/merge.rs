use serde::{Deserialize, Serialize};

use crate::domain::VariantRecord;
use crate::error::KiraError;
use crate::grouping::{VariantGroup, group, group_keyed};

/// A collection whose fetch has already completed.
///
/// Pending and failed states are settled by whoever produced the collection;
/// nothing here waits or polls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolvedCollection<T> {
    pub result: Vec<T>,
}

impl<T> ResolvedCollection<T> {
    pub fn new(result: Vec<T>) -> Self {
        Self { result }
    }

    pub fn empty() -> Self {
        Self { result: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.result.len()
    }

    pub fn is_empty(&self) -> bool {
        self.result.is_empty()
    }
}

impl<T> From<Vec<T>> for ResolvedCollection<T> {
    fn from(result: Vec<T>) -> Self {
        Self::new(result)
    }
}

/// Called records first, then uncalled, each in original order.
pub fn concat_resolved<T: Clone>(
    called: &ResolvedCollection<T>,
    uncalled: &ResolvedCollection<T>,
) -> Vec<T> {
    called
        .result
        .iter()
        .chain(&uncalled.result)
        .cloned()
        .collect()
}

pub fn merge_including_uncalled(
    called: &ResolvedCollection<VariantRecord>,
    uncalled: &ResolvedCollection<VariantRecord>,
) -> Result<Vec<Vec<VariantRecord>>, KiraError> {
    group(&concat_resolved(called, uncalled))
}

pub fn merge_including_uncalled_keyed(
    called: &ResolvedCollection<VariantRecord>,
    uncalled: &ResolvedCollection<VariantRecord>,
) -> Result<Vec<VariantGroup>, KiraError> {
    group_keyed(&concat_resolved(called, uncalled))
}
