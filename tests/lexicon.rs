use std::{collections::BTreeSet, io::Write};

use regnews::{
    config::DEFAULT_DRUG_COLUMNS,
    lexicon::{self, drugs, CountrySpec, KeywordGroup, LexiconSet},
    LexiconError,
};
use tempfile::NamedTempFile;

fn columns() -> Vec<String> {
    DEFAULT_DRUG_COLUMNS.iter().map(|c| c.to_string()).collect()
}

const TABLE: &str = "DRUG_NAME\tGENE\tSWISSPROT\tACTION_TYPE\tTARGET_CLASS\tTARGET_NAME\tNOTES\n\
Imatinib\tABL1\tP00519\tINHIBITOR\tKinase\tTyrosine-protein kinase ABL1\tignored note\n\
  PARACETAMOL  \tPTGS2\t\t\tEnzyme\tProstaglandin G/H synthase 2\tother\n\
asa\tPTGS1\tP23219\tINHIBITOR\tEnzyme\tProstaglandin G/H synthase 1\t\n";

#[test]
fn terms_are_trimmed_lowercased_and_length_filtered() {
    let terms = drugs::parse_terms(TABLE.as_bytes(), &columns()).unwrap();
    assert!(terms.contains("imatinib"));
    assert!(terms.contains("paracetamol"));
    assert!(terms.contains("ptgs2"));
    assert!(terms.contains("inhibitor"));
    assert!(terms.contains("tyrosine-protein kinase abl1"));
    assert!(!terms.contains("asa"));
    assert!(!terms.contains("ignored note"));
}

#[test]
fn latin1_table_is_decoded() {
    let mut bytes = b"DRUG_NAME\tGENE\n".to_vec();
    bytes.extend_from_slice(b"Acide acetylsalicylique \xe9quivalent\tPTGS1\n");
    let terms = drugs::parse_terms(&bytes, &columns()).unwrap();
    assert!(terms.contains("acide acetylsalicylique équivalent"));
    assert!(terms.contains("ptgs1"));
}

#[test]
fn primary_column_is_required() {
    let err = drugs::parse_terms(b"GENE\tTARGET_NAME\nABL1\tkinase\n", &columns()).unwrap_err();
    assert!(matches!(err, LexiconError::MissingPrimaryColumn("DRUG_NAME")));

    let err = drugs::parse_terms(TABLE.as_bytes(), &["GENE".to_string()]).unwrap_err();
    assert!(matches!(err, LexiconError::PrimaryColumnNotAllowed(_)));
}

#[test]
fn allow_list_restricts_columns() {
    let terms = drugs::parse_terms(
        TABLE.as_bytes(),
        &["DRUG_NAME".to_string(), "NOTES".to_string()],
    )
    .unwrap();
    assert!(terms.contains("ignored note"));
    assert!(!terms.contains("ptgs2"));
}

#[tokio::test]
async fn load_reads_table_from_disk() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(TABLE.as_bytes()).unwrap();
    let path = file.path().to_string_lossy().into_owned();

    let lexicon = lexicon::load(&path, &columns()).await.unwrap();
    assert!(lexicon.drug_terms().contains("imatinib"));
    assert_eq!(lexicon.document_types()[0].label, "Announcement");
    assert_eq!(lexicon.product_types()[0].label, "Biological");
    assert_eq!(lexicon.region_of("Germany"), Some("Central Europe"));
}

#[tokio::test]
async fn load_fails_on_missing_or_empty_table() {
    let err = lexicon::load("/definitely/not/here.tsv", &columns())
        .await
        .unwrap_err();
    assert!(matches!(err, LexiconError::Io { .. }));

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"DRUG_NAME\nabc\n\n").unwrap();
    let path = file.path().to_string_lossy().into_owned();
    let err = lexicon::load(&path, &columns()).await.unwrap_err();
    assert!(matches!(err, LexiconError::Empty));
}

#[test]
fn static_tables_are_consistent() {
    let lexicon = LexiconSet::new(BTreeSet::new()).unwrap();
    for country in lexicon.country_patterns().keys() {
        assert!(
            lexicon.region_of(country).is_some(),
            "{country} has no region"
        );
    }
    assert!(lexicon
        .product_types()
        .iter()
        .all(|g| g.label != regnews::lexicon::DRUG_PRODUCT));

    let stats = lexicon.stats();
    assert_eq!(stats.document_types, 41);
    assert_eq!(stats.drug_terms, 0);
    assert!(stats.regions > 10);
}

#[test]
fn custom_tables_keep_declared_order() {
    let lexicon = LexiconSet::from_parts(
        vec![
            KeywordGroup::new("Letter", &["letter"]),
            KeywordGroup::new("Directive", &["guideline"]),
        ],
        vec![KeywordGroup::new("Vaccine", &["vaccine"])],
        vec![CountrySpec {
            name: "Atlantis".to_string(),
            region: None,
            aliases: vec!["atlantis".to_string()],
            acronyms: vec![],
        }],
        BTreeSet::from(["  Aspirin ".to_string()]),
    )
    .unwrap();
    assert_eq!(lexicon.document_types()[1].label, "Directive");
    assert_eq!(lexicon.region_of("Atlantis"), None);
    assert!(lexicon.drug_terms().contains("aspirin"));
}
