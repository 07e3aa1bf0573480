use std::fmt;

use super::domain::Symptom;

/// Canonicalize a free-text symptom label into the knowledge-base key space.
///
/// Trims surrounding whitespace, lowercases, collapses inner whitespace runs into
/// `_`, and drops anything outside `[a-z_]`. " chest pain" yields `chest_pain`,
/// never `_chest_pain`. A result without a single letter is returned as the empty string,
/// which never matches a knowledge-base key.
pub fn normalize(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    let mut key = String::with_capacity(lowered.len());
    let mut in_whitespace = false;

    for ch in lowered.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                key.push('_');
                in_whitespace = true;
            }
            continue;
        }
        in_whitespace = false;
        if ch.is_ascii_lowercase() || ch == '_' {
            key.push(ch);
        }
    }

    if key.chars().any(|ch| ch.is_ascii_lowercase()) {
        key
    } else {
        String::new()
    }
}

/// Decides whether a reported (normalized) symptom satisfies a knowledge-base key.
pub trait SymptomMatcher: Send + Sync + fmt::Debug {
    fn matches(&self, reported: &str, key: &str) -> bool;

    fn any_reported(&self, symptoms: &[Symptom], key: &str) -> bool {
        symptoms
            .iter()
            .any(|symptom| self.matches(&symptom.key, key))
    }
}

/// Substring containment in either direction. Permissive on purpose: "severe_headache"
/// satisfies `headache`, and so does "headache" for `severe_headache`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContainmentMatcher;

impl SymptomMatcher for ContainmentMatcher {
    fn matches(&self, reported: &str, key: &str) -> bool {
        if reported.is_empty() || key.is_empty() {
            return false;
        }
        reported.contains(key) || key.contains(reported)
    }
}
