use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum KiraError {
    #[error(
        "invalid variant record{}: missing {field}",
        .index.map(|index| format!(" at index {index}")).unwrap_or_default()
    )]
    #[diagnostic(help("every record needs a non-blank geneSymbol and proteinChange"))]
    InvalidRecord {
        index: Option<usize>,
        field: &'static str,
    },

    #[error("enrichment request failed: {0}")]
    EnrichmentHttp(String),

    #[error("enrichment service returned status {status}: {message}")]
    EnrichmentStatus { status: u16, message: String },

    #[error("no {0} file given")]
    #[diagnostic(help("pass it on the command line or set it in kira-vm.json"))]
    MissingInput(&'static str),

    #[error("missing config file kira-vm.json in current directory")]
    MissingConfig,

    #[error("failed to read config file at {0}")]
    ConfigRead(PathBuf),

    #[error("failed to parse JSON config: {0}")]
    ConfigParse(String),

    #[error("failed to read input file at {0}")]
    InputRead(PathBuf),

    #[error("failed to parse input file {path}: {message}")]
    InputParse { path: PathBuf, message: String },

    #[error("filesystem error: {0}")]
    Filesystem(String),
}

impl KiraError {
    /// Process exit code for the `kira-vm` binary.
    pub fn exit_code(&self) -> u8 {
        match self {
            KiraError::MissingInput(_) | KiraError::InvalidRecord { .. } => 2,
            error if error.is_enrichment_failure() => 3,
            _ => 1,
        }
    }

    pub fn is_enrichment_failure(&self) -> bool {
        matches!(
            self,
            KiraError::EnrichmentHttp(_) | KiraError::EnrichmentStatus { .. }
        )
    }
}
