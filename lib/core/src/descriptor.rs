//! Flavor descriptor sets
//!
//! A descriptor set is the normalized vocabulary of one ingredient: lowercase,
//! trimmed, non-empty tokens. The backing set is ordered, so every list derived
//! from it (shared notes, unique notes, top notes) comes out sorted.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Separators used by the `flavors` field (runs of `@` and `,`)
const FLAVOR_SEPARATORS: [char; 2] = ['@', ','];

/// Normalized set of flavor descriptor tokens.
///
/// Serialized as a sorted list; deserialized tokens are normalized like any
/// other insert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct DescriptorSet {
    tokens: BTreeSet<String>,
}

impl From<Vec<String>> for DescriptorSet {
    fn from(tokens: Vec<String>) -> Self {
        tokens.into_iter().collect()
    }
}

impl From<DescriptorSet> for Vec<String> {
    fn from(set: DescriptorSet) -> Self {
        set.tokens.into_iter().collect()
    }
}

impl DescriptorSet {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from the two raw text fields of a row.
    ///
    /// `flavor_profiles` is comma-delimited; `flavors` is delimited by any mix
    /// of `@` and `,`. The result is the union of both parses.
    pub fn from_fields(flavor_profiles: Option<&str>, flavors: Option<&str>) -> Self {
        let mut set = parse_flavor_profiles(flavor_profiles.unwrap_or(""));
        set.extend(parse_flavors(flavors.unwrap_or("")).tokens);
        set
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    /// Insert a raw token, normalizing it first. Blank tokens are ignored.
    pub fn insert(&mut self, token: &str) -> bool {
        match normalize_token(token) {
            Some(t) => self.tokens.insert(t),
            None => false,
        }
    }

    /// Iterate descriptors in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn intersection_count(&self, other: &DescriptorSet) -> usize {
        // Walk the smaller side
        let (small, large) = if self.len() <= other.len() { (self, other) } else { (other, self) };
        small.tokens.iter().filter(|t| large.tokens.contains(*t)).count()
    }

    pub fn union_count(&self, other: &DescriptorSet) -> usize {
        self.len() + other.len() - self.intersection_count(other)
    }

    /// Number of descriptors in `self` that are absent from `other`
    pub fn difference_count(&self, other: &DescriptorSet) -> usize {
        self.len() - self.intersection_count(other)
    }

    /// Sorted descriptors present in both sets
    pub fn intersection(&self, other: &DescriptorSet) -> Vec<String> {
        self.tokens.intersection(&other.tokens).cloned().collect()
    }

    /// Sorted descriptors present in `self` but not in `other`
    pub fn difference(&self, other: &DescriptorSet) -> Vec<String> {
        self.tokens.difference(&other.tokens).cloned().collect()
    }

    pub fn union(&self, other: &DescriptorSet) -> DescriptorSet {
        DescriptorSet {
            tokens: self.tokens.union(&other.tokens).cloned().collect(),
        }
    }

    /// First `n` descriptors in sorted order
    pub fn top(&self, n: usize) -> Vec<&str> {
        self.iter().take(n).collect()
    }

    fn extend<I: IntoIterator<Item = String>>(&mut self, tokens: I) {
        self.tokens.extend(tokens);
    }
}

impl<S: AsRef<str>> FromIterator<S> for DescriptorSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = DescriptorSet::new();
        for token in iter {
            set.insert(token.as_ref());
        }
        set
    }
}

/// Lowercase and trim a token; `None` when nothing is left
fn normalize_token(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Missing values exported from spreadsheets arrive as blank or `nan`
fn is_missing(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.is_empty() || trimmed == "nan"
}

/// Parse a comma-delimited `flavor_profiles` field
pub fn parse_flavor_profiles(text: &str) -> DescriptorSet {
    if is_missing(text) {
        return DescriptorSet::new();
    }
    text.split(',').collect()
}

/// Parse a `flavors` field delimited by runs of `@` and `,`
pub fn parse_flavors(text: &str) -> DescriptorSet {
    if is_missing(text) {
        return DescriptorSet::new();
    }
    text.split(FLAVOR_SEPARATORS.as_slice()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(tokens: &[&str]) -> DescriptorSet {
        tokens.iter().collect()
    }

    #[test]
    fn test_parse_flavor_profiles() {
        let parsed = parse_flavor_profiles(" Sweet, fruity ,,CITRUS ");
        assert_eq!(parsed.iter().collect::<Vec<_>>(), vec!["citrus", "fruity", "sweet"]);
    }

    #[test]
    fn test_parse_flavors_mixed_separators() {
        let parsed = parse_flavors("green@@grassy,@ woody@");
        assert_eq!(parsed.iter().collect::<Vec<_>>(), vec!["grassy", "green", "woody"]);
    }

    #[test]
    fn test_missing_values() {
        assert!(parse_flavor_profiles("").is_empty());
        assert!(parse_flavor_profiles("   ").is_empty());
        assert!(parse_flavors("nan").is_empty());
        assert!(DescriptorSet::from_fields(None, None).is_empty());
    }

    #[test]
    fn test_from_fields_is_union() {
        let merged = DescriptorSet::from_fields(Some("sweet,fruity"), Some("Fruity@citrus"));
        assert_eq!(merged.len(), 3);
        assert!(merged.contains("fruity"));
        assert!(merged.contains("citrus"));
    }

    #[test]
    fn test_set_algebra() {
        let a = set(&["sweet", "fruity", "citrus"]);
        let b = set(&["sweet", "fruity", "woody", "smoky"]);

        assert_eq!(a.intersection_count(&b), 2);
        assert_eq!(a.union_count(&b), 5);
        assert_eq!(b.difference_count(&a), 2);
        assert_eq!(a.intersection(&b), vec!["fruity", "sweet"]);
        assert_eq!(b.difference(&a), vec!["smoky", "woody"]);
        assert_eq!(a.union(&b).len(), 5);
    }

    #[test]
    fn test_top_is_sorted_prefix() {
        let s = set(&["woody", "apple", "malt"]);
        assert_eq!(s.top(2), vec!["apple", "malt"]);
        assert_eq!(s.top(10).len(), 3);
    }

    #[test]
    fn test_deserialize_normalizes_tokens() {
        let s: DescriptorSet = serde_json::from_str(r#"[" Sweet", "sweet", "", "WOODY "]"#).unwrap();
        assert_eq!(s.iter().collect::<Vec<_>>(), vec!["sweet", "woody"]);
    }

    #[test]
    fn test_serializes_as_sorted_list() {
        let s = set(&["b", "a"]);
        assert_eq!(serde_json::to_string(&s).unwrap(), r#"["a","b"]"#);
    }
}
