use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancerStudy {
    pub study_id: String,
    pub cancer_type: CancerType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancerType {
    pub name: String,
}

impl CancerStudy {
    pub fn new(study_id: impl Into<String>, cancer_type: impl Into<String>) -> Self {
        Self {
            study_id: study_id.into(),
            cancer_type: CancerType {
                name: cancer_type.into(),
            },
        }
    }
}

/// Later entries for the same study id overwrite earlier ones.
pub fn make_study_to_cancer_type_map(studies: &[CancerStudy]) -> HashMap<String, String> {
    studies
        .iter()
        .map(|study| (study.study_id.clone(), study.cancer_type.name.clone()))
        .collect()
}
