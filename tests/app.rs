use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use assert_matches::assert_matches;
use camino::Utf8PathBuf;

use kira_variant_merge::app::{App, LoadedInputs};
use kira_variant_merge::config::Inputs;
use kira_variant_merge::cosmic::{CountClient, CountRecord};
use kira_variant_merge::domain::VariantRecord;
use kira_variant_merge::error::KiraError;
use kira_variant_merge::merge::ResolvedCollection;

#[derive(Default)]
struct DummyCounts {
    calls: AtomicUsize,
}

impl CountClient for DummyCounts {
    fn fetch_counts(&self, keywords: &[String]) -> Result<Vec<CountRecord>, KiraError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(keywords
            .iter()
            .map(|keyword| CountRecord {
                keyword: keyword.clone(),
                count: 7,
                cosmic_mutation_id: None,
                protein_change: None,
            })
            .collect())
    }
}

fn fixture(name: &str) -> Utf8PathBuf {
    Utf8PathBuf::from("tests/fixtures").join(name)
}

fn fixture_inputs() -> Inputs {
    Inputs {
        called: Some(fixture("called.json")),
        uncalled: Some(fixture("uncalled.json")),
        studies: Some(fixture("studies.json")),
    }
}

#[test]
fn merge_fixtures() {
    let app = App::new(DummyCounts::default());
    let inputs = LoadedInputs::load(&fixture_inputs()).unwrap();
    let result = app.merge(&inputs).unwrap();

    assert_eq!(result.record_count, 5);
    assert_eq!(result.group_count, 4);
    assert_eq!(result.groups[0].size, 2);
    assert_eq!(result.groups[0].records[0].gene_symbol(), Some("TP53"));
    assert!(result.groups[0].records[0].keyword().is_some());
    assert!(result.groups[0].records[1].keyword().is_none());
    assert_eq!(
        result.groups[0].event_id.to_string(),
        "17_7577120_7577120_C_T_R273H"
    );
    assert_eq!(
        result.groups[1].gene_scoped_id.to_string(),
        "ERG_TMPRSS2-ERG fusion"
    );
    assert_eq!(result.groups[3].records[0].gene_symbol(), Some("PIK3CA"));
}

#[test]
fn enrich_fixtures() {
    let app = App::new(DummyCounts::default());
    let inputs = LoadedInputs::load(&fixture_inputs()).unwrap();
    let result = app.enrich(&inputs).unwrap();

    assert!(result.attempted);
    assert_eq!(
        result.keywords,
        vec!["TP53 R273 missense", "PIK3CA H1047 missense"]
    );
    let by_keyword = result.by_keyword.unwrap();
    assert_eq!(by_keyword["PIK3CA H1047 missense"][0].count, 7);
}

#[test]
fn enrich_without_inputs_is_skipped() {
    let counts = DummyCounts::default();
    let app = App::new(counts);
    let inputs = LoadedInputs::load(&Inputs::default()).unwrap();
    let result = app.enrich(&inputs).unwrap();

    assert!(!result.attempted);
    assert!(result.counts.is_none());
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["attempted"], false);
    assert!(json.get("counts").is_none());
}

#[test]
fn studies_fixture_keeps_last_duplicate() {
    let app = App::new(DummyCounts::default());
    let result = app.studies(&fixture_inputs()).unwrap();

    assert_eq!(result.study_to_cancer_type.len(), 2);
    assert_eq!(result.study_to_cancer_type["brca_tcga"], "Breast Cancer");
}

#[test]
fn underscore_bearing_fields_keep_distinct_keys() {
    let app = App::new(DummyCounts::default());
    let inputs = LoadedInputs {
        called: ResolvedCollection::new(vec![
            VariantRecord::new("A_B", "C"),
            VariantRecord::new("A", "B_C"),
            VariantRecord::new("TP53", "mutated").with_position("X", 1, 1, "A", "T"),
        ]),
        uncalled: ResolvedCollection::new(vec![VariantRecord::new("TP53", "X_1_1_A_T_mutated")]),
    };
    let result = app.merge(&inputs).unwrap();
    assert_eq!(result.group_count, 4);

    let keys = result
        .groups
        .iter()
        .map(|group| group.key.clone())
        .collect::<HashSet<_>>();
    assert_eq!(keys.len(), 4);

    let json = serde_json::to_value(&result).unwrap();
    let scoped = json["groups"]
        .as_array()
        .unwrap()
        .iter()
        .map(|group| group["gene_scoped_id"].to_string())
        .collect::<HashSet<_>>();
    assert_eq!(scoped.len(), 4);
    assert_eq!(json["groups"][0]["gene_scoped_id"]["gene_symbol"], "A_B");
    assert_eq!(json["groups"][2]["event_id"]["kind"], "positional");
    assert_eq!(json["groups"][3]["event_id"]["kind"], "descriptive");
}

#[test]
fn studies_without_path_is_missing_input() {
    let app = App::new(DummyCounts::default());
    let err = app.studies(&Inputs::default()).unwrap_err();

    assert_matches!(&err, KiraError::MissingInput("studies"));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn exit_codes_by_error_kind() {
    let invalid = KiraError::InvalidRecord {
        index: Some(0),
        field: "geneSymbol",
    };
    let unavailable = KiraError::EnrichmentStatus {
        status: 503,
        message: "unavailable".to_string(),
    };
    assert_eq!(invalid.exit_code(), 2);
    assert_eq!(unavailable.exit_code(), 3);
    assert_eq!(KiraError::ConfigParse("bad".to_string()).exit_code(), 1);
}
