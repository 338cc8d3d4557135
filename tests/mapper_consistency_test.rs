//! Consistency properties of the identity mapper across identifier types

use maskera::anonymization::{AliasGenerator, IdentityMapper, MappingFile};
use regex::Regex;

fn mapper() -> IdentityMapper {
    IdentityMapper::with_generator(AliasGenerator::from_seed(1234))
}

#[test]
fn full_name_anonymization_is_idempotent() {
    let mut mapper = mapper();
    let first = mapper.anonymize_full_name("anna svensson");
    let second = mapper.anonymize_full_name("anna svensson");
    assert_eq!(first, second);
}

#[test]
fn email_after_name_uses_the_same_pair() {
    let mut mapper = mapper();
    let extracted =
        IdentityMapper::extract_name_from_identifier("anna.svensson@example.com").unwrap();
    assert_eq!(extracted, "anna svensson");

    let name_alias = mapper.anonymize_full_name(&extracted);
    let email_alias = mapper.anonymize_email("anna.svensson@example.com");

    assert_eq!(
        email_alias,
        format!("{}@example.com", name_alias.replace(' ', "."))
    );
}

#[test]
fn anonymized_email_keeps_domain_verbatim() {
    let mut mapper = mapper();
    for email in [
        "anna.svensson@example.com",
        "bo-berg@sub.example.co.uk",
        "x@example.com",
    ] {
        let domain = email.split('@').nth(1).unwrap();
        let anonymized = mapper.anonymize_email(email);
        assert!(anonymized.ends_with(&format!("@{domain}")));
    }
}

#[test]
fn anonymized_email_matches_alias_shape() {
    let mut mapper = mapper();
    let anonymized = mapper.anonymize_email("anna.svensson@example.com");
    let pattern = Regex::new(r"^[A-Za-z]{8}\.[A-Za-z]{8}@example\.com$").unwrap();
    assert!(
        pattern.is_match(&anonymized),
        "unexpected alias shape: {anonymized}"
    );
}

#[test]
fn dotted_username_synthesis_feeds_a_later_email() {
    let mut mapper = mapper();
    let username_alias = mapper.anonymize_username("anna.svensson", None);

    let pattern = Regex::new(r"^[A-Za-z]{8}\.[A-Za-z]{8}$").unwrap();
    assert!(pattern.is_match(&username_alias));

    // The synthesized "anna svensson" mapping carries the same pair into the
    // email derivation.
    let email_alias = mapper.anonymize_email("anna.svensson@example.com");
    assert_eq!(email_alias, format!("{username_alias}@example.com"));

    let name_alias = mapper.anonymize_full_name("anna svensson");
    assert_eq!(name_alias.replace(' ', "."), username_alias);
}

#[test]
fn mapping_file_reverse_lookup_inverts_all_aliases() {
    let mut mapper = mapper();
    let name_alias = mapper.anonymize_full_name("anna svensson");
    let username_alias = mapper.anonymize_username("bo.berg", None);
    let email_alias = mapper.anonymize_email("eva-lind@example.com");

    let mapping = MappingFile::from_mapper(&mapper);
    let reverse = mapping.reverse_lookup();

    assert_eq!(reverse.get(&name_alias).unwrap(), "anna svensson");
    assert_eq!(reverse.get(&username_alias).unwrap(), "bo.berg");
    assert_eq!(reverse.get(&email_alias).unwrap(), "eva-lind@example.com");
}

#[test]
fn unrelated_identities_get_distinct_aliases() {
    let mut mapper = mapper();
    let a = mapper.anonymize_full_name("anna svensson");
    let b = mapper.anonymize_full_name("bo berg");
    assert_ne!(a, b);
}
