//! Mapping-consistent identity anonymization
//!
//! This module provides [`IdentityMapper`], the core of Maskera. It owns five
//! monotonic mappings (full name, first name, last name, username, email) and
//! the rules for deriving one identifier's alias from another when they
//! co-occur, so that `anna svensson`, `anna.svensson` and
//! `anna.svensson@example.com` all resolve to the same alias pair within a
//! run.
//!
//! All state is explicit in the struct; callers own one mapper per
//! anonymization run and pass it mutably into every operation. Entries are
//! inserted once and never mutated, so repeated lookups of the same original
//! value always return the identical alias.
//!
//! # Examples
//!
//! ```
//! use maskera::anonymization::IdentityMapper;
//!
//! let mut mapper = IdentityMapper::new();
//!
//! let alias_name = mapper.anonymize_full_name("anna svensson");
//! let alias_email = mapper.anonymize_email("anna.svensson@example.com");
//!
//! // The email reuses the name's alias pair and keeps the domain verbatim.
//! let expected_local = alias_name.replace(' ', ".");
//! assert_eq!(alias_email, format!("{expected_local}@example.com"));
//! ```

use crate::anonymization::alias::AliasGenerator;
use std::collections::HashMap;

/// Anonymizer for full names, usernames and email addresses
///
/// Aliases are minted lazily the first time an identity is seen and reused
/// verbatim on every recurrence of the same key. First-name and last-name
/// fragment mappings are recorded as a side effect of name anonymization;
/// fragments shared between different full names overwrite silently (last
/// write wins, no uniqueness check).
pub struct IdentityMapper {
    generator: AliasGenerator,
    /// Full name -> (first alias, last alias)
    name_mapping: HashMap<String, (String, String)>,
    /// First-name token -> first alias
    first_name_mapping: HashMap<String, String>,
    /// Last-name token (may contain spaces) -> last alias
    last_name_mapping: HashMap<String, String>,
    /// Username -> "first.last" alias
    username_mapping: HashMap<String, String>,
    /// Email -> "first.last@domain" alias
    email_mapping: HashMap<String, String>,
}

impl IdentityMapper {
    /// Create a mapper with an entropy-seeded alias generator
    pub fn new() -> Self {
        Self::with_generator(AliasGenerator::new())
    }

    /// Create a mapper with a caller-supplied alias generator
    pub fn with_generator(generator: AliasGenerator) -> Self {
        Self {
            generator,
            name_mapping: HashMap::new(),
            first_name_mapping: HashMap::new(),
            last_name_mapping: HashMap::new(),
            username_mapping: HashMap::new(),
            email_mapping: HashMap::new(),
        }
    }

    /// Derive a candidate full name from an email-shaped identifier
    ///
    /// Splits the local part (before `@`) on `.` or `-`; two or more parts
    /// yield `"part0 part1"`. Identifiers without `@` yield `None`.
    pub fn extract_name_from_identifier(identifier: &str) -> Option<String> {
        let (local_part, _domain) = identifier.split_once('@')?;
        let mut parts = local_part.split(['.', '-']);
        let first = parts.next()?;
        let second = parts.next()?;
        Some(format!("{first} {second}"))
    }

    /// Anonymize a full name, keeping the mapping
    ///
    /// Names with fewer than two whitespace-separated tokens cannot be split
    /// into first/last and are returned unchanged. The first token is the
    /// first name; the remaining tokens joined by a space form the last name.
    pub fn anonymize_full_name(&mut self, full_name: &str) -> String {
        if let Some((first_alias, last_alias)) = self.name_mapping.get(full_name) {
            return format!("{first_alias} {last_alias}");
        }

        let parts: Vec<&str> = full_name.split_whitespace().collect();
        if parts.len() < 2 {
            return full_name.to_string();
        }
        let first_name = parts[0].to_string();
        let last_name = parts[1..].join(" ");

        let first_alias = self.generator.generate();
        let last_alias = self.generator.generate();

        self.name_mapping.insert(
            full_name.to_string(),
            (first_alias.clone(), last_alias.clone()),
        );
        self.first_name_mapping.insert(first_name, first_alias.clone());
        self.last_name_mapping.insert(last_name, last_alias.clone());

        format!("{first_alias} {last_alias}")
    }

    /// Anonymize a username, optionally reusing an accompanying full name's pair
    ///
    /// A dotted username with no known full name synthesizes a candidate name
    /// (`"anna.svensson"` -> `"anna svensson"`) and registers it with the
    /// freshly minted pair, so a later name or email for the same person
    /// resolves to the same aliases.
    pub fn anonymize_username(&mut self, username: &str, full_name: Option<&str>) -> String {
        if let Some(cached) = self.username_mapping.get(username) {
            return cached.clone();
        }

        let known_pair = full_name.and_then(|name| self.name_mapping.get(name)).cloned();
        let new_username = match known_pair {
            Some((first_alias, last_alias)) => format!("{first_alias}.{last_alias}"),
            None => {
                let first_alias = self.generator.generate();
                let last_alias = self.generator.generate();

                if username.contains('.') {
                    let mut parts = username.split('.');
                    if let (Some(first), Some(second)) = (parts.next(), parts.next()) {
                        // Insert-if-absent: a pair minted earlier for this
                        // name must never be displaced.
                        self.name_mapping
                            .entry(format!("{first} {second}"))
                            .or_insert_with(|| (first_alias.clone(), last_alias.clone()));
                    }
                }

                format!("{first_alias}.{last_alias}")
            }
        };

        self.username_mapping
            .insert(username.to_string(), new_username.clone());
        new_username
    }

    /// Anonymize an email address, preserving the domain verbatim
    ///
    /// The alias pair is resolved by priority: a name derived from the local
    /// part that is already mapped, then an already-mapped username matching
    /// the local part, then a fresh mint (registering the derived name if
    /// there was one). Inputs without `@` are returned unchanged; an internal
    /// failure logs a warning and returns the original, never aborting the
    /// run.
    pub fn anonymize_email(&mut self, email: &str) -> String {
        if !email.contains('@') {
            return email.to_string();
        }
        if let Some(cached) = self.email_mapping.get(email) {
            return cached.clone();
        }

        match self.derive_email_alias(email) {
            Some(new_email) => {
                self.email_mapping
                    .insert(email.to_string(), new_email.clone());
                new_email
            }
            None => {
                tracing::warn!(email = %email, "Could not anonymize email address");
                email.to_string()
            }
        }
    }

    fn derive_email_alias(&mut self, email: &str) -> Option<String> {
        let (local_part, domain) = email.split_once('@')?;
        let extracted_name = Self::extract_name_from_identifier(email);

        let (first_alias, last_alias) = if let Some(pair) = extracted_name
            .as_deref()
            .and_then(|name| self.name_mapping.get(name))
        {
            pair.clone()
        } else if let Some(username_alias) = self.username_mapping.get(local_part) {
            // The cached alias is always "first.last"; anything else is a
            // corrupted mapping and falls through to the warning path.
            let (first, last) = username_alias.split_once('.')?;
            (first.to_string(), last.to_string())
        } else {
            let first_alias = self.generator.generate();
            let last_alias = self.generator.generate();
            if let Some(name) = extracted_name {
                self.name_mapping
                    .insert(name, (first_alias.clone(), last_alias.clone()));
            }
            (first_alias, last_alias)
        };

        Some(format!("{first_alias}.{last_alias}@{domain}"))
    }

    /// Scrub free text by replacing every recorded identifier with its alias
    ///
    /// Replacement runs in fixed precedence: emails, then usernames, then
    /// full names (both the space-joined original and its dot-joined
    /// variant). Longer identifiers embedding shorter ones are therefore
    /// replaced before a coarser pass can corrupt them. Every literal
    /// occurrence is replaced.
    ///
    /// This is a linear scan per mapping entry, O(entries × text length).
    /// Fine at the cardinality of one spreadsheet; an aho-corasick pass could
    /// replace it without changing the observable contract.
    pub fn anonymize_text(&self, text: &str) -> String {
        let mut result = text.to_string();

        for (original, anonymized) in &self.email_mapping {
            result = result.replace(original, anonymized);
        }
        for (original, anonymized) in &self.username_mapping {
            result = result.replace(original, anonymized);
        }
        for (original, (first_alias, last_alias)) in &self.name_mapping {
            result = result.replace(original, &format!("{first_alias} {last_alias}"));
            let dotted = original.replace(' ', ".");
            result = result.replace(&dotted, &format!("{first_alias}.{last_alias}"));
        }

        result
    }

    /// Full-name mapping (original -> alias pair)
    pub fn name_mapping(&self) -> &HashMap<String, (String, String)> {
        &self.name_mapping
    }

    /// Username mapping (original -> "first.last")
    pub fn username_mapping(&self) -> &HashMap<String, String> {
        &self.username_mapping
    }

    /// Email mapping (original -> "first.last@domain")
    pub fn email_mapping(&self) -> &HashMap<String, String> {
        &self.email_mapping
    }

    /// Total count of distinct mapped identities across the three public maps
    pub fn mapped_identity_count(&self) -> usize {
        self.name_mapping.len() + self.email_mapping.len() + self.username_mapping.len()
    }
}

impl Default for IdentityMapper {
    fn default() -> Self {
        Self::new()
    }
}
