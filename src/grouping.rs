use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::domain::VariantRecord;
use crate::error::KiraError;
use crate::identity::{GeneScopedId, gene_scoped_id_at};

/// Records sharing one gene-scoped identity, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariantGroup {
    pub key: GeneScopedId,
    pub records: Vec<VariantRecord>,
}

impl VariantGroup {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Buckets records by gene-scoped identity.
///
/// Groups come out in the order their key is first seen; members keep their
/// relative input order. Any invalid record fails the whole call.
pub fn group_keyed(records: &[VariantRecord]) -> Result<Vec<VariantGroup>, KiraError> {
    let keys = records
        .iter()
        .enumerate()
        .map(|(index, record)| gene_scoped_id_at(record, Some(index)))
        .collect::<Result<Vec<_>, KiraError>>()?;

    let mut positions = HashMap::<GeneScopedId, usize>::new();
    let mut groups = Vec::<VariantGroup>::new();
    for (key, record) in keys.into_iter().zip(records) {
        match positions.get(&key) {
            Some(&position) => groups[position].records.push(record.clone()),
            None => {
                positions.insert(key.clone(), groups.len());
                groups.push(VariantGroup {
                    key,
                    records: vec![record.clone()],
                });
            }
        }
    }

    debug!(
        records = records.len(),
        groups = groups.len(),
        "grouped variant records"
    );
    Ok(groups)
}

pub fn group(records: &[VariantRecord]) -> Result<Vec<Vec<VariantRecord>>, KiraError> {
    Ok(group_keyed(records)?
        .into_iter()
        .map(|group| group.records)
        .collect())
}
