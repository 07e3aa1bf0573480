use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{
    lenient_context, lenient_symptom_list, ConditionUrgency, FollowUpResponse, PatientContext,
    SymptomInput,
};
use super::knowledge::ConditionCategory;
use super::ClinicalReasoningEngine;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssessmentRequest {
    #[serde(default, deserialize_with = "lenient_symptom_list")]
    pub symptoms: Vec<SymptomInput>,
    #[serde(default, deserialize_with = "lenient_context")]
    pub context: Option<PatientContext>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnswerBatch {
    #[serde(default)]
    pub responses: Vec<FollowUpResponse>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionSummary {
    pub id: String,
    pub name: String,
    pub category: ConditionCategory,
    pub urgency: ConditionUrgency,
    pub description: String,
}

/// Router exposing assessment, knowledge listing and answer validation.
pub fn assessment_router(engine: Arc<ClinicalReasoningEngine>) -> Router {
    Router::new()
        .route("/api/v1/assessments", post(assess_handler))
        .route("/api/v1/knowledge/conditions", get(conditions_handler))
        .route("/api/v1/follow-ups/answers", post(answers_handler))
        .with_state(engine)
}

pub(crate) async fn assess_handler(
    State(engine): State<Arc<ClinicalReasoningEngine>>,
    Json(request): Json<AssessmentRequest>,
) -> Response {
    let AssessmentRequest { symptoms, context } = request;
    let assessment = engine.assess_inputs(symptoms, context.as_ref());
    (StatusCode::OK, Json(assessment)).into_response()
}

pub(crate) async fn conditions_handler(
    State(engine): State<Arc<ClinicalReasoningEngine>>,
) -> Json<Vec<ConditionSummary>> {
    let summaries = engine
        .knowledge()
        .conditions()
        .iter()
        .map(|condition| ConditionSummary {
            id: condition.id.clone(),
            name: condition.name.clone(),
            category: condition.category,
            urgency: condition.urgency,
            description: condition.description.clone(),
        })
        .collect();
    Json(summaries)
}

pub(crate) async fn answers_handler(
    State(engine): State<Arc<ClinicalReasoningEngine>>,
    Json(batch): Json<AnswerBatch>,
) -> Response {
    match engine.validate_answers(&batch.responses) {
        Ok(()) => {
            let payload = json!({
                "accepted": batch.responses.len(),
                "note": "answers are recorded for display and do not change scoring",
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}
