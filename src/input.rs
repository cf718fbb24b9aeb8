use std::fs::File;
use std::io::{BufReader, Read};

use camino::Utf8Path;
use flate2::read::GzDecoder;
use serde::de::DeserializeOwned;

use crate::domain::VariantRecord;
use crate::error::KiraError;
use crate::merge::ResolvedCollection;
use crate::study::CancerStudy;

pub fn read_json_array<T: DeserializeOwned>(path: &Utf8Path) -> Result<Vec<T>, KiraError> {
    let file =
        File::open(path).map_err(|_| KiraError::InputRead(path.as_std_path().to_path_buf()))?;
    let reader: Box<dyn Read> = if path.extension() == Some("gz") {
        Box::new(GzDecoder::new(BufReader::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };
    serde_json::from_reader(reader).map_err(|err| KiraError::InputParse {
        path: path.as_std_path().to_path_buf(),
        message: err.to_string(),
    })
}

/// Missing path means nothing was fetched for that source.
pub fn load_collection(
    path: Option<&Utf8Path>,
) -> Result<ResolvedCollection<VariantRecord>, KiraError> {
    match path {
        Some(path) => Ok(ResolvedCollection::new(read_json_array(path)?)),
        None => Ok(ResolvedCollection::empty()),
    }
}

pub fn load_studies(path: &Utf8Path) -> Result<Vec<CancerStudy>, KiraError> {
    read_json_array(path)
}
