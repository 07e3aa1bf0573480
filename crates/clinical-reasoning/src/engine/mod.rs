//! Clinical reasoning engine: ranked differential, red flags, follow-ups and urgency.
//!
//! The engine is a pure function of the symptom list and an injected, read-only
//! [`KnowledgeBase`]. It gives decision support only; nothing here asserts a
//! diagnosis.

mod advice;
pub mod assessment;
pub mod domain;
pub mod follow_up;
pub mod intake;
pub mod knowledge;
pub mod matching;
pub mod red_flags;
pub mod router;
pub mod scoring;
mod urgency;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

pub use assessment::{ClinicalAssessment, ClinicalCondition, MAX_CONDITIONS};
pub use domain::{
    ConditionUrgency, DurationInput, DurationUnit, FollowUpAnswer, FollowUpResponse, Onset,
    OverallUrgency, PatientContext, Progression, RedFlagSeverity, Severity, Symptom,
    SymptomDuration, SymptomInput,
};
pub use domain::{lenient_context, lenient_symptom_list, symptom_inputs};
pub use follow_up::{AnswerError, FollowUpQuestion, MAX_FOLLOW_UPS};
pub use knowledge::{
    ConditionCategory, ConditionDefinition, FollowUpTemplate, KnowledgeBase, KnowledgeBaseError,
    KnowledgeTables, QuestionKind, RedFlagPattern,
};
pub use matching::{normalize, ContainmentMatcher, SymptomMatcher};
pub use red_flags::RedFlagAlert;
pub use router::assessment_router;
pub use scoring::{ConditionScore, ScoreComponent, ScoreFactor, INCLUSION_THRESHOLD, SCORE_CEILING};

/// Stateless engine over a shared knowledge base. Safe to call from many threads.
#[derive(Debug, Clone)]
pub struct ClinicalReasoningEngine {
    knowledge: Arc<KnowledgeBase>,
    matcher: Arc<dyn SymptomMatcher>,
}

impl ClinicalReasoningEngine {
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self::with_matcher(knowledge, Arc::new(ContainmentMatcher))
    }

    pub fn with_matcher(knowledge: Arc<KnowledgeBase>, matcher: Arc<dyn SymptomMatcher>) -> Self {
        Self { knowledge, matcher }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Assess an already sanitized, de-duplicated symptom list.
    pub fn assess(
        &self,
        symptoms: &[Symptom],
        context: Option<&PatientContext>,
    ) -> ClinicalAssessment {
        self.assess_at(symptoms, context, Utc::now())
    }

    /// Same as [`assess`](Self::assess) with a caller-chosen timestamp, so repeated
    /// calls produce identical values.
    pub fn assess_at(
        &self,
        symptoms: &[Symptom],
        context: Option<&PatientContext>,
        timestamp: DateTime<Utc>,
    ) -> ClinicalAssessment {
        if let Some(context) = context {
            // Answers and context are informational; scoring does not consume them.
            debug!(
                answers = context.answers.len(),
                history = context.history.len(),
                "patient context received"
            );
        }
        assessment::assemble(&self.knowledge, self.matcher.as_ref(), symptoms, timestamp)
    }

    /// Sanitize raw intake records, then assess them.
    pub fn assess_inputs(
        &self,
        inputs: Vec<SymptomInput>,
        context: Option<&PatientContext>,
    ) -> ClinicalAssessment {
        let symptoms = intake::sanitize(inputs);
        self.assess(&symptoms, context)
    }

    /// Score a single condition by id, or `None` if the id is unknown.
    pub fn score(&self, condition_id: &str, symptoms: &[Symptom]) -> Option<ConditionScore> {
        self.knowledge.condition(condition_id).map(|condition| {
            scoring::score_condition(
                condition,
                self.knowledge.weights(),
                symptoms,
                self.matcher.as_ref(),
            )
        })
    }

    pub fn detect_red_flags(&self, symptoms: &[Symptom]) -> Vec<RedFlagAlert> {
        red_flags::detect_red_flags(
            self.knowledge.red_flag_patterns(),
            symptoms,
            self.matcher.as_ref(),
        )
    }

    pub fn follow_ups(&self, symptoms: &[Symptom]) -> Vec<FollowUpQuestion> {
        follow_up::generate_follow_ups(
            self.knowledge.follow_up_templates(),
            symptoms,
            self.matcher.as_ref(),
        )
    }

    pub fn validate_answers(&self, responses: &[FollowUpResponse]) -> Result<(), AnswerError> {
        follow_up::validate_responses(&self.knowledge, responses)
    }
}
