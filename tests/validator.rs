//! Validator Integration Tests
//!
//! End-to-end checks of the claim-matching engine through the public API:
//! status classification, ordering, option handling, and error behavior.

use claimcheck::{validate, Claim, Document, MatchStatus, ValidateError, ValidationOptions};

#[test]
fn test_audit_scenario() {
    let doc = Document::from_text("The Annual Report confirms Revenue of $10M in FY2023.");
    let claims = vec![
        Claim::new("c1", "Annual Report"),
        Claim::new("c2", "Loss"),
    ];

    let results = validate(&doc, &claims, &ValidationOptions::default()).unwrap();

    assert_eq!(results[0].status, MatchStatus::Match);
    assert_eq!(results[0].count, 1);
    assert_eq!(results[0].hits[0].offset, 4);

    assert_eq!(results[1].status, MatchStatus::NoMatch);
    assert_eq!(results[1].count, 0);
    assert!(results[1].hits.is_empty());
}

#[test]
fn test_results_preserve_claim_order() {
    let doc = Document::from_text("z comes first, then a, then m");
    let claims = vec![
        Claim::new("a", "a"),
        Claim::new("b", "m"),
        Claim::new("c", "z"),
    ];

    let results = validate(&doc, &claims, &ValidationOptions::default()).unwrap();
    let ids: Vec<&str> = results.iter().map(|r| r.claim_id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[test]
fn test_whole_word_versus_substring() {
    let doc = Document::from_text("a cat sat near the category listing");
    let claims = vec![Claim::new("c", "cat")];

    let whole = validate(&doc, &claims, &ValidationOptions::default()).unwrap();
    assert_eq!(whole[0].count, 1);

    let substring = validate(
        &doc,
        &claims,
        &ValidationOptions {
            whole_word: false,
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(substring[0].count, 2);
}

#[test]
fn test_case_sensitivity_options() {
    let doc = Document::from_text("Cat cat CAT");
    let claims = vec![Claim::new("c", "Cat")];

    let insensitive = validate(&doc, &claims, &ValidationOptions::default()).unwrap();
    assert_eq!(insensitive[0].count, 3);

    let sensitive = validate(
        &doc,
        &claims,
        &ValidationOptions {
            case_insensitive: false,
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(sensitive[0].count, 1);
    assert_eq!(sensitive[0].hits[0].offset, 0);
}

#[test]
fn test_context_width_is_respected() {
    let doc = Document::from_text("0123456789 target 9876543210");
    let claims = vec![Claim::new("c", "target")];

    let results = validate(
        &doc,
        &claims,
        &ValidationOptions {
            context: 3,
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(results[0].hits[0].context, "89 target 98");
}

#[test]
fn test_normalization_bridges_document_and_term() {
    // Fullwidth digits in the document, ASCII digits in the term
    let doc = Document::from_text("total: \u{FF11}\u{FF10}\u{FF10} units");
    let claims = vec![Claim::new("c", "100")];

    let results = validate(&doc, &claims, &ValidationOptions::default()).unwrap();
    assert_eq!(results[0].status, MatchStatus::Match);
}

#[test]
fn test_blank_term_aborts_without_partial_results() {
    let doc = Document::from_text("plenty of matchable text");
    let claims = vec![
        Claim::new("good", "matchable"),
        Claim::new("blank", "\u{00A0} "),
        Claim::new("later", "text"),
    ];

    let err = validate(&doc, &claims, &ValidationOptions::default());
    assert!(matches!(err, Err(ValidateError::InvalidTerm { id, .. }) if id == "blank"));
}

#[test]
fn test_claims_roundtrip_through_json() {
    let json = r#"[{"id": "c1", "text": "Annual Report"}, {"id": "c2", "text": "Loss"}]"#;
    let claims: Vec<Claim> = serde_json::from_str(json).unwrap();

    let doc = Document::from_text("The Annual Report confirms.");
    let results = validate(&doc, &claims, &ValidationOptions::default()).unwrap();

    let serialized = serde_json::to_value(&results).unwrap();
    assert_eq!(serialized[0]["claim_id"], "c1");
    assert_eq!(serialized[0]["status"], "match");
    assert_eq!(serialized[1]["status"], "no_match");
    assert_eq!(serialized[0]["hits"][0]["page"], serde_json::Value::Null);
}
