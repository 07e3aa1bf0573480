use super::common::*;
use crate::engine::domain::RedFlagSeverity;
use crate::engine::red_flags::SEVERE_SYMPTOMS_ALERT;

fn pattern_ids(alerts: &[crate::engine::RedFlagAlert]) -> Vec<&str> {
    alerts.iter().map(|alert| alert.pattern_id.as_str()).collect()
}

#[test]
fn cardiac_pattern_fires_with_severity_net_last() {
    let alerts = engine().detect_red_flags(&cardiac_symptoms());

    assert_eq!(pattern_ids(&alerts), vec!["cardiac", SEVERE_SYMPTOMS_ALERT]);
    let cardiac = &alerts[0];
    assert_eq!(cardiac.severity, RedFlagSeverity::Critical);
    assert!(cardiac.call_emergency);
    assert_eq!(
        cardiac.matched_symptoms,
        vec!["chest_pain", "shortness_of_breath"]
    );
}

#[test]
fn single_symptom_pattern_needs_one_match() {
    let alerts = engine().detect_red_flags(&[symptom("Difficulty Breathing", 3)]);

    assert_eq!(pattern_ids(&alerts), vec!["respiratory_distress"]);
}

#[test]
fn multi_symptom_pattern_needs_two_matches() {
    let alerts = engine().detect_red_flags(&[symptom("Stiff Neck", 3)]);

    assert!(alerts.is_empty());
}

#[test]
fn extreme_severity_raises_danger_alert_without_emergency_call() {
    let alerts = engine().detect_red_flags(&[symptom("Toothache", 5)]);

    assert_eq!(alerts.len(), 1);
    let alert = &alerts[0];
    assert_eq!(alert.pattern_id, SEVERE_SYMPTOMS_ALERT);
    assert_eq!(alert.severity, RedFlagSeverity::Danger);
    assert!(!alert.call_emergency);
    assert_eq!(alert.matched_symptoms, vec!["Toothache"]);
}

#[test]
fn alerts_follow_pattern_table_order() {
    let symptoms = vec![
        symptom("Severe Headache", 4),
        symptom("Stiff Neck", 4),
        symptom("Chest Pain", 3),
        symptom("Shortness of Breath", 3),
    ];
    let alerts = engine().detect_red_flags(&symptoms);

    assert_eq!(pattern_ids(&alerts), vec!["cardiac", "meningitis"]);
}

#[test]
fn no_symptoms_no_alerts() {
    assert!(engine().detect_red_flags(&[]).is_empty());
}
