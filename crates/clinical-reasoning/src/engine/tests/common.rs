use std::sync::Arc;

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::engine::domain::{DurationUnit, Onset, Progression, Symptom};
use crate::engine::knowledge::KnowledgeBase;
use crate::engine::ClinicalReasoningEngine;

pub(super) fn knowledge() -> Arc<KnowledgeBase> {
    Arc::new(KnowledgeBase::builtin().expect("builtin tables validate"))
}

pub(super) fn engine() -> ClinicalReasoningEngine {
    ClinicalReasoningEngine::new(knowledge())
}

pub(super) fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn symptom(name: &str, severity: u8) -> Symptom {
    Symptom::new(name, severity).with_duration(2, DurationUnit::Days)
}

pub(super) fn acute(name: &str, severity: u8) -> Symptom {
    Symptom::new(name, severity)
        .with_duration(1, DurationUnit::Hours)
        .with_progression(Progression::Worsening)
        .with_onset(Onset::Sudden)
}

/// Chest pain with breathlessness, both sudden and worsening.
pub(super) fn cardiac_symptoms() -> Vec<Symptom> {
    vec![acute("Chest Pain", 5), acute("Shortness of Breath", 4)]
}

/// Mild upper-respiratory complaints.
pub(super) fn cold_symptoms() -> Vec<Symptom> {
    vec![
        symptom("Runny Nose", 2),
        symptom("Sore Throat", 2),
        symptom("Sneezing", 1),
    ]
}

/// Severe headache, stiff neck and fever.
pub(super) fn meningitis_symptoms() -> Vec<Symptom> {
    vec![
        acute("Severe Headache", 5),
        acute("Stiff Neck", 4),
        acute("Fever", 4),
    ]
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
