use std::io::{self, Write};

use serde::Serialize;

use crate::app::{EnrichResult, MergeResult, StudiesResult};

/// Pretty JSON, one document per call.
pub struct JsonOutput;

impl JsonOutput {
    pub fn print_merge(result: &MergeResult) -> io::Result<()> {
        Self::write_json(&mut io::stdout().lock(), result)
    }

    pub fn print_enrich(result: &EnrichResult) -> io::Result<()> {
        Self::write_json(&mut io::stdout().lock(), result)
    }

    pub fn print_studies(result: &StudiesResult) -> io::Result<()> {
        Self::write_json(&mut io::stdout().lock(), result)
    }

    pub fn write_json<W: Write, T: Serialize>(writer: &mut W, value: &T) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, value).map_err(io::Error::other)?;
        writer.write_all(b"\n")?;
        writer.flush()
    }
}
