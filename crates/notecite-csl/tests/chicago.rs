//! Tests for the built-in Chicago full-note bibliography style.
//!
//! These tests go through the public `StyleProcessor` interface with
//! CSL-JSON input, the way the citation pipeline uses it.

use notecite_csl::{Bibliography, CslProcessor, Error, Reference, StyleProcessor};

fn reference(json: &str) -> Reference {
    serde_json::from_str(json).expect("valid CSL-JSON")
}

fn format_one(json: &str) -> String {
    let processor = CslProcessor::default();
    let mut entries = processor
        .make_bibliography(&[reference(json)])
        .expect("formatting succeeds");
    assert_eq!(entries.len(), 1);
    entries.remove(0)
}

// ============================================================================
// Entry types
// ============================================================================

#[test]
fn test_book() {
    let entry = format_one(
        r#"{
            "id": "doe2020",
            "type": "book",
            "author": [{"family": "Doe", "given": "Jane"}],
            "title": "A Book & More",
            "publisher": "Academic Press",
            "publisher-place": "New York",
            "issued": {"date-parts": [[2020]]}
        }"#,
    );
    insta::assert_snapshot!(entry, @"Doe, Jane. <i>A Book &amp; More</i>. New York: Academic Press, 2020.");
}

#[test]
fn test_journal_article_with_doi() {
    let entry = format_one(
        r#"{
            "id": "smith2019",
            "type": "article-journal",
            "author": [
                {"family": "Smith", "given": "John"},
                {"family": "Roe", "given": "Ann"}
            ],
            "title": "A Great Paper",
            "container-title": "Journal of Examples",
            "volume": 12,
            "issue": "3",
            "page": "1-10",
            "issued": {"date-parts": [[2019, 4]]},
            "DOI": "10.1000/xyz"
        }"#,
    );
    insta::assert_snapshot!(entry, @"Smith, John, and Ann Roe. “A Great Paper.” <i>Journal of Examples</i> 12, no. 3 (2019): 1–10. https://doi.org/10.1000/xyz.");
}

#[test]
fn test_chapter_in_edited_volume() {
    let entry = format_one(
        r#"{
            "id": "ch",
            "type": "chapter",
            "author": [{"family": "Poe", "given": "Ed"}],
            "editor": [{"family": "Lee", "given": "Kim"}],
            "title": "On Ravens",
            "container-title": "Bird Essays",
            "page": "5-9",
            "publisher": "Nest",
            "issued": {"date-parts": [[1845]]}
        }"#,
    );
    assert_eq!(
        entry,
        "Poe, Ed. “On Ravens.” In <i>Bird Essays</i>, edited by Kim Lee, 5–9. Nest, 1845."
    );
}

#[test]
fn test_edited_book_without_authors() {
    let entry = format_one(
        r#"{
            "id": "ed",
            "type": "book",
            "editor": [
                {"family": "Lee", "given": "Kim"},
                {"family": "Park", "given": "Jo"}
            ],
            "title": "Collected",
            "edition": 2,
            "issued": {"date-parts": [[2001]]}
        }"#,
    );
    assert_eq!(entry, "Lee, Kim, and Jo Park, eds. <i>Collected</i>. 2nd ed. 2001.");
}

#[test]
fn test_webpage_with_access_date_ends_with_url() {
    let entry = format_one(
        r#"{
            "id": "web",
            "type": "webpage",
            "title": "Guide",
            "container-title": "Example Site",
            "URL": "http://example.com/page",
            "accessed": {"date-parts": [[2021, 5, 3]]}
        }"#,
    );
    assert_eq!(
        entry,
        "“Guide.” <i>Example Site</i>, n.d. Accessed May 3, 2021. http://example.com/page."
    );
}

#[test]
fn test_url_and_doi_are_escaped() {
    let entry = format_one(
        r#"{
            "id": "u",
            "type": "webpage",
            "title": "T",
            "URL": "http://e.com/?a=1\"><script>alert(1)</script>"
        }"#,
    );
    assert!(!entry.contains("<script>"), "Got: {}", entry);
    assert!(!entry.contains('"'), "Got: {}", entry);
    assert_eq!(
        entry,
        "“T.” n.d. http://e.com/?a=1&quot;&gt;&lt;script&gt;alert(1)&lt;/script&gt;."
    );

    let entry = format_one(r#"{"id": "d", "type": "article", "DOI": "10.1/a<b>"}"#);
    assert_eq!(entry, "n.d. https://doi.org/10.1/a&lt;b&gt;.");
}

#[test]
fn test_placeholder_renders_without_failing() {
    let processor = CslProcessor::default();
    let entries = processor
        .make_bibliography(&[Reference::placeholder("missing")])
        .unwrap();
    assert_eq!(entries, vec!["n.d.".to_string()]);
}

// ============================================================================
// Batch behavior
// ============================================================================

#[test]
fn test_batch_preserves_input_order() {
    let processor = CslProcessor::default();
    let refs = vec![
        reference(r#"{"id": "z", "type": "book", "title": "Zebra"}"#),
        reference(r#"{"id": "a", "type": "book", "title": "Aardvark"}"#),
    ];
    let entries = processor.make_bibliography(&refs).unwrap();
    assert_eq!(
        entries,
        vec!["<i>Zebra</i>. n.d.".to_string(), "<i>Aardvark</i>. n.d.".to_string()]
    );
}

#[test]
fn test_invalid_date_fails_whole_batch() {
    let processor = CslProcessor::default();
    let refs = vec![
        reference(r#"{"id": "ok", "type": "book", "title": "Fine"}"#),
        reference(r#"{"id": "bad", "type": "book", "issued": {"date-parts": [[2020, 13, 40]]}}"#),
    ];
    let err = processor.make_bibliography(&refs).unwrap_err();
    match err {
        Error::InvalidDate { id, field, value } => {
            assert_eq!(id, "bad");
            assert_eq!(field, "issued");
            assert_eq!(value, "2020-13-40");
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_formatting_is_deterministic() {
    let processor = CslProcessor::default();
    let refs = vec![reference(
        r#"{"id": "a", "type": "article", "title": "T", "issued": {"date-parts": [[2000, 1, 2]]}}"#,
    )];
    let first = processor.make_bibliography(&refs).unwrap();
    let second = processor.make_bibliography(&refs).unwrap();
    assert_eq!(first, second);
    assert_eq!(first[0], "“T.” January 2, 2000.");
}

// ============================================================================
// Loading
// ============================================================================

#[test]
fn test_load_bibliography_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("refs.json");
    std::fs::write(&path, r#"[{"id": "a", "type": "book", "title": "A"}]"#).unwrap();

    let bibliography = Bibliography::load(&path).unwrap();
    assert_eq!(bibliography.len(), 1);
    assert!(bibliography.get("a").is_some());
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Bibliography::load(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }), "Got: {}", err);
}

#[test]
fn test_load_malformed_json_is_json_error() {
    let err = Bibliography::from_json_str("{not json").unwrap_err();
    assert!(matches!(err, Error::Json(_)), "Got: {}", err);
}
