use std::sync::Arc;

use clinical_reasoning::engine::{
    intake, ClinicalReasoningEngine, FollowUpAnswer, FollowUpResponse, KnowledgeBase,
    OverallUrgency, PatientContext, RedFlagSeverity, SymptomInput, MAX_FOLLOW_UPS,
};
use serde_json::json;

fn engine() -> ClinicalReasoningEngine {
    let knowledge = KnowledgeBase::builtin().expect("builtin knowledge base validates");
    ClinicalReasoningEngine::new(Arc::new(knowledge))
}

fn intake_from(payload: serde_json::Value) -> Vec<SymptomInput> {
    serde_json::from_value(payload).expect("symptom records deserialize")
}

#[test]
fn chest_pain_intake_escalates_to_emergency() {
    let engine = engine();
    let inputs = intake_from(json!([
        { "name": "Chest Pain", "severity": 5, "duration": { "value": 1, "unit": "hours" },
          "progression": "worsening", "onset": "sudden" },
        { "name": "Shortness of Breath", "severity": 4, "duration": { "value": 1, "unit": "hours" },
          "progression": "worsening", "onset": "sudden" }
    ]));

    let assessment = engine.assess_inputs(inputs, None);

    assert_eq!(assessment.overall_urgency, OverallUrgency::Emergency);
    assert!(assessment.requires_emergency_call());
    assert!(assessment
        .red_flag_alerts
        .iter()
        .any(|alert| alert.severity == RedFlagSeverity::Critical && alert.pattern_id == "cardiac"));
    assert_eq!(
        assessment.top_condition().map(|condition| condition.id.as_str()),
        Some("heart_attack")
    );
    assert!(assessment.follow_up_questions.len() <= MAX_FOLLOW_UPS);
    assert_eq!(
        assessment.follow_up_questions.first().map(|q| q.id.as_str()),
        Some("chest_pain_radiation")
    );
}

#[test]
fn mild_cold_intake_recommends_self_care() {
    let engine = engine();
    let inputs = intake_from(json!([
        { "name": "Runny Nose", "severity": 2, "duration": { "value": 3, "unit": "days" } },
        { "name": "Sore Throat", "severity": 2, "duration": { "value": 3, "unit": "days" } },
        { "name": "Sneezing", "severity": 1, "duration": { "value": 3, "unit": "days" } }
    ]));

    let assessment = engine.assess_inputs(inputs, None);

    assert!(assessment.red_flag_alerts.is_empty());
    assert_eq!(assessment.overall_urgency, OverallUrgency::SelfCare);
    let top = assessment.top_condition().expect("cold is ranked");
    assert_eq!(top.name, "Common Cold");
    assert!(top.confidence > 50 && top.confidence <= 95);
    assert!(!top.description.is_empty());
    assert!(!top.differential_factors.is_empty());
}

#[test]
fn meningitis_triad_escalates_to_emergency() {
    let engine = engine();
    let inputs = intake_from(json!([
        { "name": "Severe Headache", "severity": 5, "onset": "sudden", "progression": "worsening" },
        { "name": "Stiff Neck", "severity": 4 },
        { "name": "Fever", "severity": 4 }
    ]));

    let assessment = engine.assess_inputs(inputs, None);

    assert_eq!(assessment.overall_urgency, OverallUrgency::Emergency);
    let alert = assessment
        .red_flag_alerts
        .iter()
        .find(|alert| alert.pattern_id == "meningitis")
        .expect("meningitis pattern fires");
    assert_eq!(alert.matched_symptoms.len(), 3);
}

#[test]
fn answers_in_context_do_not_change_results() {
    let engine = engine();
    let symptoms = intake::sanitize(intake_from(json!([
        { "name": "Chest Pain", "severity": 3 },
        { "name": "Heartburn", "severity": 3 }
    ])));
    let context = PatientContext {
        age: Some(54),
        history: vec!["hypertension".to_string()],
        answers: vec![FollowUpResponse {
            question_id: "chest_pain_radiation".to_string(),
            answer: FollowUpAnswer::YesNo(true),
        }],
        ..PatientContext::default()
    };
    let timestamp = chrono::DateTime::parse_from_rfc3339("2025-06-01T12:00:00Z")
        .expect("valid timestamp")
        .with_timezone(&chrono::Utc);

    let without = engine.assess_at(&symptoms, None, timestamp);
    let with = engine.assess_at(&symptoms, Some(&context), timestamp);

    assert_eq!(without, with);
}

#[test]
fn assessment_serializes_kebab_case_urgency() {
    let engine = engine();
    let assessment = engine.assess_inputs(intake_from(json!([{ "name": "Painful urination" }])), None);
    let value = serde_json::to_value(&assessment).expect("assessment serializes");

    assert_eq!(value["overall_urgency"], "schedule-visit");
    assert_eq!(value["possible_conditions"][0]["urgency"], "soon");
    assert_eq!(value["follow_up_questions"][0]["type"], "yes_no");
}
