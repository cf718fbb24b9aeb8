//! Identity keys for variant records.
//!
//! Keys are structured values rather than joined strings, so no field value
//! can collide with a delimiter. They serialize as tagged JSON objects.
//! `Display` joins components with `_` after escaping `\` and `_` inside each
//! component, so distinct keys always render to distinct strings.

use std::fmt;

use serde::Serialize;

use crate::domain::{VariantRecord, VariantShape};
use crate::error::KiraError;

/// Same physical event, regardless of the gene the record was filed under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventId {
    Positional {
        chromosome: String,
        start: i64,
        end: i64,
        reference_allele: String,
        variant_allele: String,
        protein_change: String,
    },
    Descriptive {
        protein_change: String,
    },
}

/// Gene symbol plus event; the key records are grouped under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct GeneScopedId {
    pub gene_symbol: String,
    pub event: EventId,
}

impl EventId {
    pub fn protein_change(&self) -> &str {
        match self {
            EventId::Positional { protein_change, .. }
            | EventId::Descriptive { protein_change } => protein_change,
        }
    }

    pub fn is_positional(&self) -> bool {
        matches!(self, EventId::Positional { .. })
    }
}

pub fn event_id(record: &VariantRecord) -> Result<EventId, KiraError> {
    event_id_at(record, None)
}

pub fn gene_scoped_id(record: &VariantRecord) -> Result<GeneScopedId, KiraError> {
    gene_scoped_id_at(record, None)
}

pub(crate) fn event_id_at(
    record: &VariantRecord,
    index: Option<usize>,
) -> Result<EventId, KiraError> {
    let protein_change = record
        .protein_change()
        .ok_or(KiraError::InvalidRecord {
            index,
            field: "proteinChange",
        })?
        .to_string();
    Ok(match record.shape() {
        VariantShape::Positional(position) => EventId::Positional {
            chromosome: position.chromosome.to_string(),
            start: position.start,
            end: position.end,
            reference_allele: position.reference_allele.to_string(),
            variant_allele: position.variant_allele.to_string(),
            protein_change,
        },
        VariantShape::Descriptive => EventId::Descriptive { protein_change },
    })
}

pub(crate) fn gene_scoped_id_at(
    record: &VariantRecord,
    index: Option<usize>,
) -> Result<GeneScopedId, KiraError> {
    let gene_symbol = record
        .gene_symbol()
        .ok_or(KiraError::InvalidRecord {
            index,
            field: "geneSymbol",
        })?
        .to_string();
    Ok(GeneScopedId {
        gene_symbol,
        event: event_id_at(record, index)?,
    })
}

/// Writes a key component with `\` and `_` backslash-escaped.
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.0.chars() {
            if matches!(ch, '\\' | '_') {
                f.write_str("\\")?;
            }
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventId::Positional {
                chromosome,
                start,
                end,
                reference_allele,
                variant_allele,
                protein_change,
            } => write!(
                f,
                "{}_{start}_{end}_{}_{}_{}",
                Escaped(chromosome),
                Escaped(reference_allele),
                Escaped(variant_allele),
                Escaped(protein_change)
            ),
            EventId::Descriptive { protein_change } => write!(f, "{}", Escaped(protein_change)),
        }
    }
}

impl fmt::Display for GeneScopedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", Escaped(&self.gene_symbol), self.event)
    }
}
