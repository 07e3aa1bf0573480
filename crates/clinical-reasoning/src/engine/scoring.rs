use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::{ConditionUrgency, Onset, Symptom};
use super::knowledge::{ConditionDefinition, SymptomWeightMatrix};
use super::matching::SymptomMatcher;

/// No condition may ever read as near-certain.
pub const SCORE_CEILING: f64 = 95.0;
/// Candidates must score strictly above this to be ranked.
pub const INCLUSION_THRESHOLD: f64 = 5.0;

const REQUIRED_POINTS: f64 = 20.0;
const SUPPORTIVE_POINTS: f64 = 10.0;
const EXCLUSION_PENALTY: f64 = 15.0;
const WEIGHT_SCALE: f64 = 15.0;
const BASELINE_SEVERITY: f64 = 3.0;
const SUDDEN_ONSET_BONUS: f64 = 10.0;
const WORSENING_EMERGENCY_BONUS: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    Prevalence,
    RequiredSymptom,
    SupportiveSymptom,
    ExcludingSymptom,
    WeightedSymptom,
    SuddenOnset,
    WorseningEmergency,
}

/// Discrete contribution to a condition score, kept for audit and explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub points: f64,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionScore {
    pub condition_id: String,
    /// Clamped to `[0, SCORE_CEILING]`.
    pub score: f64,
    pub matched_required: Vec<String>,
    pub missing_required: Vec<String>,
    pub matched_supportive: Vec<String>,
    pub matched_exclusions: Vec<String>,
    pub weighted_symptoms: Vec<String>,
    pub components: Vec<ScoreComponent>,
}

impl ConditionScore {
    /// True when at least one required, supportive or weighted symptom matched.
    pub fn has_evidence(&self) -> bool {
        !self.matched_required.is_empty()
            || !self.matched_supportive.is_empty()
            || !self.weighted_symptoms.is_empty()
    }

    pub fn is_candidate(&self) -> bool {
        self.has_evidence() && self.score > INCLUSION_THRESHOLD
    }
}

/// Additive heuristic score for one condition against a symptom set.
pub fn score_condition(
    condition: &ConditionDefinition,
    weights: &SymptomWeightMatrix,
    symptoms: &[Symptom],
    matcher: &dyn SymptomMatcher,
) -> ConditionScore {
    let mut components = Vec::new();
    let mut total = condition.prevalence * 100.0;
    components.push(ScoreComponent {
        factor: ScoreFactor::Prevalence,
        points: total,
        notes: format!("base rate {:.3}", condition.prevalence),
    });

    let (matched_required, missing_required): (Vec<String>, Vec<String>) = condition
        .symptoms
        .required
        .iter()
        .cloned()
        .partition(|key| matcher.any_reported(symptoms, key));
    for key in &matched_required {
        total += REQUIRED_POINTS;
        components.push(ScoreComponent {
            factor: ScoreFactor::RequiredSymptom,
            points: REQUIRED_POINTS,
            notes: format!("required symptom '{key}' reported"),
        });
    }

    let matched_supportive = matching_keys(&condition.symptoms.supportive, symptoms, matcher);
    for key in &matched_supportive {
        total += SUPPORTIVE_POINTS;
        components.push(ScoreComponent {
            factor: ScoreFactor::SupportiveSymptom,
            points: SUPPORTIVE_POINTS,
            notes: format!("supportive symptom '{key}' reported"),
        });
    }

    let matched_exclusions = matching_keys(&condition.symptoms.excludes, symptoms, matcher);
    for key in &matched_exclusions {
        total -= EXCLUSION_PENALTY;
        components.push(ScoreComponent {
            factor: ScoreFactor::ExcludingSymptom,
            points: -EXCLUSION_PENALTY,
            notes: format!("excluding symptom '{key}' reported"),
        });
    }

    let mut weighted_symptoms = Vec::new();
    for symptom in symptoms {
        let Some(weight) = weights.weight(&symptom.key, &condition.id) else {
            continue;
        };
        let severity = f64::from(symptom.severity.value());
        let points = weight * WEIGHT_SCALE * (severity / BASELINE_SEVERITY);
        total += points;
        weighted_symptoms.push(symptom.key.clone());
        components.push(ScoreComponent {
            factor: ScoreFactor::WeightedSymptom,
            points,
            notes: format!(
                "'{}' weight {:.2} at severity {}",
                symptom.key,
                weight,
                symptom.severity.value()
            ),
        });
    }

    if condition.temporal_pattern.onset == Onset::Sudden && symptoms.iter().any(Symptom::is_sudden)
    {
        total += SUDDEN_ONSET_BONUS;
        components.push(ScoreComponent {
            factor: ScoreFactor::SuddenOnset,
            points: SUDDEN_ONSET_BONUS,
            notes: "sudden onset matches the condition's pattern".to_string(),
        });
    }

    if condition.urgency == ConditionUrgency::Emergency
        && symptoms.iter().any(Symptom::is_worsening)
    {
        total += WORSENING_EMERGENCY_BONUS;
        components.push(ScoreComponent {
            factor: ScoreFactor::WorseningEmergency,
            points: WORSENING_EMERGENCY_BONUS,
            notes: "worsening symptoms with an emergency-tier condition".to_string(),
        });
    }

    let score = total.clamp(0.0, SCORE_CEILING);
    debug!(
        condition = %condition.id,
        raw = total,
        score,
        required = matched_required.len(),
        supportive = matched_supportive.len(),
        exclusions = matched_exclusions.len(),
        "scored condition"
    );

    ConditionScore {
        condition_id: condition.id.clone(),
        score,
        matched_required,
        missing_required,
        matched_supportive,
        matched_exclusions,
        weighted_symptoms,
        components,
    }
}

fn matching_keys(
    keys: &[String],
    symptoms: &[Symptom],
    matcher: &dyn SymptomMatcher,
) -> Vec<String> {
    keys.iter()
        .filter(|key| matcher.any_reported(symptoms, key))
        .cloned()
        .collect()
}
