//! Duplicate detection integration tests
//!
//! Covers normalization equivalences, the exact-over-fuzzy scan rule,
//! and property-based checks for determinism and confidence bounds.

use proptest::prelude::*;
use relate_domain::Contact;
use relate_resolve::deduplication::{
    name_similarity, normalize_email, normalize_phone, DetectorConfig, DuplicateDetector,
    MatchKind, MatchedField,
};

fn contact(first: &str, last: &str, email: &str) -> Contact {
    Contact::new(first.to_string(), last.to_string(), email.to_string())
}

// === Normalization Equivalences ===

#[test]
fn test_gmail_addresses_normalize_to_same_value() {
    let aliases = DetectorConfig::default().domain_aliases;
    assert_eq!(
        normalize_email("A.B+test@gmail.com", &aliases),
        "ab@gmail.com"
    );
    assert_eq!(
        normalize_email("ab@googlemail.com", &aliases),
        "ab@gmail.com"
    );
}

#[test]
fn test_phone_normalization() {
    assert_eq!(normalize_phone("+1 (555) 123-4567"), "15551234567");
}

// === Similarity ===

#[test]
fn test_levenshtein_distance_kitten_sitting() {
    assert_eq!(strsim::levenshtein("kitten", "sitting"), 3);
}

#[test]
fn test_name_similarity_john_jon() {
    let sim = name_similarity("john smith", "jon smith");
    assert!((sim - 0.9).abs() < 1e-9);
    assert!(sim >= 0.85);
}

#[test]
fn test_name_similarity_unrelated_names() {
    assert!(name_similarity("john smith", "maria garcia") < 0.85);
}

// === Scan Rules ===

#[test]
fn test_equal_emails_produce_exact_match_only() {
    let detector = DuplicateDetector::new();
    let candidate = contact("John", "Smith", "john.smith@gmail.com");

    let existing = vec![
        contact("Jonathan", "Smith", "JohnSmith@googlemail.com"),
        // Near-duplicate by name that would match the fuzzy pass
        contact("Jon", "Smith", "jon@elsewhere.com"),
    ];

    let matches = detector.find_duplicates(&candidate, &existing);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].kind, MatchKind::Exact);
    assert_eq!(matches[0].field, MatchedField::Email);
    assert_eq!(matches[0].confidence, 1.0);
    assert!(matches.iter().all(|m| m.kind != MatchKind::Fuzzy));
}

#[test]
fn test_pair_matching_on_email_and_phone_yields_two_matches() {
    let detector = DuplicateDetector::new();

    let mut candidate = contact("John", "Smith", "john@example.com");
    candidate.phone = Some("555-1234".to_string());
    let mut existing = contact("J", "Smith", "john@example.com");
    existing.phone = Some("(555) 1234".to_string());

    let matches = detector.find_duplicates(&candidate, &[existing]);
    assert_eq!(matches.len(), 2);
    assert!(matches.iter().all(|m| m.confidence == 1.0));
}

#[test]
fn test_fuzzy_fallback_ranks_by_confidence() {
    let detector = DuplicateDetector::with_config(DetectorConfig {
        threshold: 0.6,
        ..DetectorConfig::default()
    });
    let candidate = contact("John", "Smith", "john@a.com");

    let exact_name = contact("John", "Smith", "x@b.com");
    let near_name = contact("Jon", "Smith", "y@c.com");
    let existing = vec![near_name.clone(), exact_name.clone()];

    let matches = detector.find_duplicates(&candidate, &existing);
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].existing.id, exact_name.id);
    assert_eq!(matches[1].existing.id, near_name.id);
}

#[test]
fn test_no_matches_for_unrelated_contact() {
    let detector = DuplicateDetector::new();
    let candidate = contact("John", "Smith", "john@a.com");
    let existing = vec![contact("Maria", "Garcia", "maria@b.com")];
    assert!(detector.find_duplicates(&candidate, &existing).is_empty());
}

#[test]
fn test_malformed_input_never_panics() {
    let detector = DuplicateDetector::new();

    let mut weird = contact("", "", "not-an-email");
    weird.phone = Some("no digits here".to_string());
    let existing = vec![contact("", "", ""), weird.clone()];

    // Both sides empty-named: similarity is defined as 1.0, so the
    // scan still answers rather than failing
    let matches = detector.find_duplicates(&contact("", "", ""), &existing);
    assert!(matches.iter().all(|m| (0.0..=1.0).contains(&m.confidence)));
}

// === Property-Based Tests ===

proptest! {
    #[test]
    fn test_find_duplicates_is_deterministic(
        first in "[a-zA-Z]{2,10}",
        last in "[a-zA-Z]{2,10}",
        others in prop::collection::vec(("[a-zA-Z]{2,10}", "[a-zA-Z]{2,10}"), 0..8)
    ) {
        let detector = DuplicateDetector::new();
        let candidate = contact(&first, &last, "cand@example.com");
        let existing: Vec<Contact> = others
            .iter()
            .map(|(f, l)| contact(f, l, "other@example.com"))
            .collect();

        let run1 = detector.find_duplicates(&candidate, &existing);
        let run2 = detector.find_duplicates(&candidate, &existing);
        prop_assert_eq!(run1, run2);
    }

    #[test]
    fn test_confidence_always_bounded(
        a in "[a-zA-Z .'-]{0,30}",
        b in "[a-zA-Z .'-]{0,30}"
    ) {
        let detector = DuplicateDetector::with_config(DetectorConfig {
            threshold: 0.0,
            ..DetectorConfig::default()
        });
        let candidate = contact(&a, &b, "cand@example.com");
        let existing = vec![contact(&b, &a, "other@example.com")];

        for m in detector.find_duplicates(&candidate, &existing) {
            prop_assert!((0.0..=1.0).contains(&m.confidence));
        }
    }

    #[test]
    fn test_name_similarity_symmetric(
        a in "[a-zA-Z ]{1,20}",
        b in "[a-zA-Z ]{1,20}"
    ) {
        let ab = name_similarity(&a, &b);
        let ba = name_similarity(&b, &a);
        prop_assert!((ab - ba).abs() < 1e-12);
    }

    #[test]
    fn test_exact_match_confidence_is_one(local in "[a-z]{1,12}") {
        let detector = DuplicateDetector::new();
        let email = format!("{local}@example.com");
        let candidate = contact("Any", "Name", &email);
        let existing = vec![contact("Other", "Person", &email)];

        let matches = detector.find_duplicates(&candidate, &existing);
        prop_assert_eq!(matches.len(), 1);
        prop_assert_eq!(matches[0].confidence, 1.0);
    }

    #[test]
    fn test_normalize_phone_is_digits_only(phone in "[0-9()+ .-]{0,25}") {
        let normalized = normalize_phone(&phone);
        prop_assert!(normalized.chars().all(|c| c.is_ascii_digit()));
    }
}
