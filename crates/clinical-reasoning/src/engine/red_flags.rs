use serde::{Deserialize, Serialize};
use tracing::warn;

use super::domain::{RedFlagSeverity, Symptom};
use super::knowledge::RedFlagPattern;
use super::matching::SymptomMatcher;

/// Pattern id carried by the blanket extreme-severity alert.
pub const SEVERE_SYMPTOMS_ALERT: &str = "severe_symptoms";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedFlagAlert {
    pub pattern_id: String,
    pub severity: RedFlagSeverity,
    pub condition: String,
    pub reason: String,
    pub action: String,
    pub call_emergency: bool,
    /// Pattern keys (or, for the severity alert, symptom names) that triggered it.
    pub matched_symptoms: Vec<String>,
}

/// Scan symptoms against the curated patterns, then apply the extreme-severity net.
///
/// Runs independently of condition scoring. Output keeps pattern-table order with
/// the severity alert, if any, last.
pub fn detect_red_flags(
    patterns: &[RedFlagPattern],
    symptoms: &[Symptom],
    matcher: &dyn SymptomMatcher,
) -> Vec<RedFlagAlert> {
    let mut alerts = Vec::new();

    for pattern in patterns {
        let matched: Vec<String> = pattern
            .symptoms
            .iter()
            .filter(|key| matcher.any_reported(symptoms, key))
            .cloned()
            .collect();

        if matched.is_empty() || matched.len() < pattern.required_matches() {
            continue;
        }

        warn!(
            pattern = %pattern.id,
            severity = pattern.severity.label(),
            matched = matched.len(),
            "red flag pattern fired"
        );
        alerts.push(RedFlagAlert {
            pattern_id: pattern.id.clone(),
            severity: pattern.severity,
            condition: pattern.condition.clone(),
            reason: pattern.reason.clone(),
            action: pattern.action.clone(),
            call_emergency: pattern.call_emergency,
            matched_symptoms: matched,
        });
    }

    let extreme: Vec<String> = symptoms
        .iter()
        .filter(|symptom| symptom.severity.is_extreme())
        .map(|symptom| symptom.name.clone())
        .collect();
    if !extreme.is_empty() {
        warn!(count = extreme.len(), "extreme severity symptoms reported");
        alerts.push(RedFlagAlert {
            pattern_id: SEVERE_SYMPTOMS_ALERT.to_string(),
            severity: RedFlagSeverity::Danger,
            condition: "Severe symptoms detected".to_string(),
            reason: format!("Reported at extreme severity: {}.", extreme.join(", ")),
            action: "Seek medical attention promptly. Call emergency services if the symptoms become unbearable or keep getting worse.".to_string(),
            call_emergency: false,
            matched_symptoms: extreme,
        });
    }

    alerts
}
