use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::advice;
use super::domain::{ConditionUrgency, OverallUrgency, Symptom};
use super::follow_up::{generate_follow_ups, FollowUpQuestion};
use super::knowledge::{ConditionCategory, ConditionDefinition, KnowledgeBase};
use super::matching::SymptomMatcher;
use super::red_flags::{detect_red_flags, RedFlagAlert};
use super::scoring::{score_condition, ConditionScore};
use super::urgency::determine_urgency;

pub const MAX_CONDITIONS: usize = 5;

/// Ranked possibility as presented to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicalCondition {
    pub id: String,
    pub name: String,
    pub category: ConditionCategory,
    /// Rounded score, 0-95.
    pub confidence: u8,
    pub matching_symptoms: Vec<String>,
    pub missing_symptoms: Vec<String>,
    pub supporting_symptoms: Vec<String>,
    pub differential_factors: Vec<String>,
    pub red_flags: Vec<String>,
    pub urgency: ConditionUrgency,
    pub description: String,
    pub reasoning: Vec<String>,
}

/// Result of one analysis call. A new call always produces a new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicalAssessment {
    pub timestamp: DateTime<Utc>,
    pub symptoms: Vec<Symptom>,
    pub possible_conditions: Vec<ClinicalCondition>,
    pub follow_up_questions: Vec<FollowUpQuestion>,
    pub red_flag_alerts: Vec<RedFlagAlert>,
    pub overall_urgency: OverallUrgency,
    pub urgency_reason: String,
    pub confidence_explanation: String,
    pub differential_explanation: String,
    pub next_steps: Vec<String>,
    pub self_care_advice: Vec<String>,
    pub when_to_seek_help: Vec<String>,
}

impl ClinicalAssessment {
    pub fn top_condition(&self) -> Option<&ClinicalCondition> {
        self.possible_conditions.first()
    }

    pub fn requires_emergency_call(&self) -> bool {
        self.red_flag_alerts.iter().any(|alert| alert.call_emergency)
    }
}

pub(crate) fn assemble(
    knowledge: &KnowledgeBase,
    matcher: &dyn SymptomMatcher,
    symptoms: &[Symptom],
    timestamp: DateTime<Utc>,
) -> ClinicalAssessment {
    let red_flag_alerts = detect_red_flags(knowledge.red_flag_patterns(), symptoms, matcher);

    let ranked = rank_conditions(knowledge, matcher, symptoms);
    let top = ranked.first().map(|(condition, _)| *condition);
    let possible_conditions: Vec<ClinicalCondition> = ranked
        .iter()
        .map(|(condition, score)| clinical_condition(condition, score, symptoms))
        .collect();

    let (overall_urgency, urgency_reason) = determine_urgency(&red_flag_alerts, top);
    let follow_up_questions =
        generate_follow_ups(knowledge.follow_up_templates(), symptoms, matcher);

    info!(
        symptoms = symptoms.len(),
        conditions = possible_conditions.len(),
        red_flags = red_flag_alerts.len(),
        follow_ups = follow_up_questions.len(),
        urgency = overall_urgency.label(),
        "clinical assessment complete"
    );

    ClinicalAssessment {
        timestamp,
        symptoms: symptoms.to_vec(),
        confidence_explanation: advice::confidence_explanation(
            &possible_conditions,
            symptoms.len(),
        ),
        differential_explanation: advice::differential_explanation(&possible_conditions),
        next_steps: advice::next_steps(overall_urgency),
        self_care_advice: advice::self_care_advice(top.map(|condition| condition.category)),
        when_to_seek_help: advice::when_to_seek_help(overall_urgency),
        possible_conditions,
        follow_up_questions,
        red_flag_alerts,
        overall_urgency,
        urgency_reason,
    }
}

/// Candidates above the inclusion threshold, best first, at most [`MAX_CONDITIONS`].
/// The sort is stable so ties keep knowledge-base order.
fn rank_conditions<'k>(
    knowledge: &'k KnowledgeBase,
    matcher: &dyn SymptomMatcher,
    symptoms: &[Symptom],
) -> Vec<(&'k ConditionDefinition, ConditionScore)> {
    let mut candidates: Vec<(&ConditionDefinition, ConditionScore)> = knowledge
        .conditions()
        .iter()
        .map(|condition| {
            let score = score_condition(condition, knowledge.weights(), symptoms, matcher);
            (condition, score)
        })
        .filter(|(_, score)| score.is_candidate())
        .collect();

    candidates.sort_by(|(_, a), (_, b)| b.score.total_cmp(&a.score));
    candidates.truncate(MAX_CONDITIONS);
    candidates
}

fn clinical_condition(
    condition: &ConditionDefinition,
    score: &ConditionScore,
    symptoms: &[Symptom],
) -> ClinicalCondition {
    ClinicalCondition {
        id: condition.id.clone(),
        name: condition.name.clone(),
        category: condition.category,
        confidence: score.score.round() as u8,
        matching_symptoms: score.matched_required.clone(),
        missing_symptoms: score.missing_required.clone(),
        supporting_symptoms: score.matched_supportive.clone(),
        differential_factors: condition.differential_factors.clone(),
        red_flags: condition.red_flags.clone(),
        urgency: condition.urgency,
        description: condition.description.clone(),
        reasoning: reasoning(score, symptoms),
    }
}

fn reasoning(score: &ConditionScore, symptoms: &[Symptom]) -> Vec<String> {
    let mut reasons = Vec::new();

    if !score.matched_required.is_empty() {
        reasons.push(format!(
            "Matches key symptoms: {}",
            humanize(&score.matched_required)
        ));
    }
    if !score.matched_supportive.is_empty() {
        reasons.push(format!(
            "Supporting symptoms present: {}",
            humanize(&score.matched_supportive)
        ));
    }
    if symptoms.iter().any(|symptom| symptom.severity.is_high()) {
        reasons.push("High severity symptoms reported".to_string());
    }
    if symptoms.iter().any(Symptom::is_worsening) {
        reasons.push("Symptoms are getting worse".to_string());
    }
    if reasons.is_empty() {
        reasons.push("Reported symptoms are associated with this condition".to_string());
    }

    reasons
}

fn humanize(keys: &[String]) -> String {
    keys.iter()
        .map(|key| key.replace('_', " "))
        .collect::<Vec<_>>()
        .join(", ")
}
