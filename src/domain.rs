use serde::{Deserialize, Serialize};

/// One reported mutation or fusion call.
///
/// Every field is optional on the wire. Absence of positional fields marks a
/// descriptive (fusion-like) record; absence of `gene_symbol` or
/// `protein_change` is only rejected once an identity is requested.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "MutationWire", rename_all = "camelCase")]
pub struct VariantRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gene_symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chromosome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_position: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_position: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_allele: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_allele: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein_change: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
}

impl VariantRecord {
    pub fn new(gene_symbol: impl Into<String>, protein_change: impl Into<String>) -> Self {
        Self {
            gene_symbol: Some(gene_symbol.into()),
            protein_change: Some(protein_change.into()),
            ..Self::default()
        }
    }

    pub fn with_position(
        mut self,
        chromosome: impl Into<String>,
        start_position: i64,
        end_position: i64,
        reference_allele: impl Into<String>,
        variant_allele: impl Into<String>,
    ) -> Self {
        self.chromosome = Some(chromosome.into());
        self.start_position = Some(start_position);
        self.end_position = Some(end_position);
        self.reference_allele = Some(reference_allele.into());
        self.variant_allele = Some(variant_allele.into());
        self
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    pub fn gene_symbol(&self) -> Option<&str> {
        non_blank(self.gene_symbol.as_deref())
    }

    pub fn protein_change(&self) -> Option<&str> {
        non_blank(self.protein_change.as_deref())
    }

    /// Any non-empty keyword counts, whitespace included.
    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref().filter(|keyword| !keyword.is_empty())
    }

    /// Positional only when all five coordinate fields are present; a partial
    /// set falls back to the descriptive rule.
    pub fn shape(&self) -> VariantShape<'_> {
        match self.position() {
            Some(position) => VariantShape::Positional(position),
            None => VariantShape::Descriptive,
        }
    }

    fn position(&self) -> Option<Position<'_>> {
        Some(Position {
            chromosome: non_blank(self.chromosome.as_deref())?,
            start: self.start_position?,
            end: self.end_position?,
            reference_allele: non_blank(self.reference_allele.as_deref())?,
            variant_allele: non_blank(self.variant_allele.as_deref())?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantShape<'a> {
    Positional(Position<'a>),
    Descriptive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position<'a> {
    pub chromosome: &'a str,
    pub start: i64,
    pub end: i64,
    pub reference_allele: &'a str,
    pub variant_allele: &'a str,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.trim().is_empty())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MutationWire {
    #[serde(alias = "hugoGeneSymbol")]
    gene_symbol: Option<String>,
    gene: Option<GeneWire>,
    chromosome: Option<String>,
    start_position: Option<i64>,
    end_position: Option<i64>,
    reference_allele: Option<String>,
    variant_allele: Option<String>,
    protein_change: Option<String>,
    keyword: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeneWire {
    hugo_gene_symbol: Option<String>,
    chromosome: Option<String>,
}

impl From<MutationWire> for VariantRecord {
    fn from(wire: MutationWire) -> Self {
        let (nested_symbol, nested_chromosome) = match wire.gene {
            Some(gene) => (gene.hugo_gene_symbol, gene.chromosome),
            None => (None, None),
        };
        Self {
            gene_symbol: wire.gene_symbol.or(nested_symbol),
            chromosome: wire.chromosome.or(nested_chromosome),
            start_position: wire.start_position,
            end_position: wire.end_position,
            reference_allele: wire.reference_allele,
            variant_allele: wire.variant_allele,
            protein_change: wire.protein_change,
            keyword: wire.keyword,
        }
    }
}
