//! Static medical knowledge consumed by the reasoning engine.
//!
//! Tables are plain data. [`KnowledgeBase`] owns a validated copy and is never
//! mutated after construction; callers share it behind an `Arc`.

mod conditions;
mod patterns;
mod questions;
mod weights;

use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use super::domain::{ConditionUrgency, Onset, RedFlagSeverity};
use super::matching::normalize;

/// Upper bound (exclusive) on condition base rates.
pub const MAX_PREVALENCE: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionCategory {
    Respiratory,
    Digestive,
    Neurological,
    Infectious,
    Cardiac,
    Surgical,
    Urological,
    Musculoskeletal,
    #[serde(other)]
    Other,
}

impl ConditionCategory {
    pub const fn label(self) -> &'static str {
        match self {
            ConditionCategory::Respiratory => "respiratory",
            ConditionCategory::Digestive => "digestive",
            ConditionCategory::Neurological => "neurological",
            ConditionCategory::Infectious => "infectious",
            ConditionCategory::Cardiac => "cardiac",
            ConditionCategory::Surgical => "surgical",
            ConditionCategory::Urological => "urological",
            ConditionCategory::Musculoskeletal => "musculoskeletal",
            ConditionCategory::Other => "other",
        }
    }
}

/// Expected symptom keys for a condition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomProfile {
    #[serde(default)]
    pub required: Vec<String>,
    #[serde(default)]
    pub supportive: Vec<String>,
    #[serde(default)]
    pub excludes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemporalPattern {
    pub onset: Onset,
    /// Display-only descriptor, e.g. "7-10 days".
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionDefinition {
    pub id: String,
    pub name: String,
    pub category: ConditionCategory,
    pub symptoms: SymptomProfile,
    pub temporal_pattern: TemporalPattern,
    pub prevalence: f64,
    pub urgency: ConditionUrgency,
    #[serde(default)]
    pub red_flags: Vec<String>,
    pub description: String,
    #[serde(default)]
    pub differential_factors: Vec<String>,
}

/// Sparse symptom key -> condition id -> weight in `(0, 1]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymptomWeightMatrix(pub BTreeMap<String, BTreeMap<String, f64>>);

impl SymptomWeightMatrix {
    pub fn weight(&self, symptom_key: &str, condition_id: &str) -> Option<f64> {
        self.0
            .get(symptom_key)
            .and_then(|row| row.get(condition_id))
            .copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = (&String, &BTreeMap<String, f64>)> {
        self.0.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedFlagPattern {
    pub id: String,
    pub symptoms: Vec<String>,
    pub severity: RedFlagSeverity,
    pub condition: String,
    pub reason: String,
    pub action: String,
    pub call_emergency: bool,
}

impl RedFlagPattern {
    /// Single-symptom patterns fire on one match; larger patterns need two.
    pub fn required_matches(&self) -> usize {
        self.symptoms.len().min(2)
    }
}

/// Expected answer shape for a follow-up question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionKind {
    YesNo,
    Select { options: Vec<String> },
    Scale { min: u8, max: u8 },
}

impl QuestionKind {
    pub const fn label(&self) -> &'static str {
        match self {
            QuestionKind::YesNo => "yes_no",
            QuestionKind::Select { .. } => "select",
            QuestionKind::Scale { .. } => "scale",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowUpTemplate {
    pub id: String,
    pub trigger: String,
    pub question: String,
    #[serde(flatten)]
    pub kind: QuestionKind,
    pub purpose: String,
    pub reduces_uncertainty_for: Vec<String>,
    pub priority: i32,
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// Raw table set, the unit of (de)serialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeTables {
    pub conditions: Vec<ConditionDefinition>,
    #[serde(default)]
    pub symptom_weights: SymptomWeightMatrix,
    #[serde(default)]
    pub red_flag_patterns: Vec<RedFlagPattern>,
    #[serde(default)]
    pub follow_up_templates: Vec<FollowUpTemplate>,
}

impl KnowledgeTables {
    /// The curated tables shipped with the engine.
    pub fn builtin() -> Self {
        Self {
            conditions: conditions::builtin_conditions(),
            symptom_weights: weights::builtin_weights(),
            red_flag_patterns: patterns::builtin_patterns(),
            follow_up_templates: questions::builtin_templates(),
        }
    }
}

/// Integrity defects in a table set. These are programmer errors surfaced at startup.
#[derive(Debug, thiserror::Error)]
pub enum KnowledgeBaseError {
    #[error("knowledge base defines no conditions")]
    NoConditions,
    #[error("{table} entry has an empty id")]
    EmptyId { table: &'static str },
    #[error("duplicate {table} id '{id}'")]
    DuplicateId { table: &'static str, id: String },
    #[error("{owner} references key '{key}' which is not a normalized symptom key")]
    UnnormalizedKey { owner: String, key: String },
    #[error("condition '{condition}' has prevalence {prevalence}, expected [0, 0.2)")]
    PrevalenceOutOfRange { condition: String, prevalence: f64 },
    #[error("weight {weight} for '{symptom}' -> '{condition}' is outside (0, 1]")]
    WeightOutOfRange {
        symptom: String,
        condition: String,
        weight: f64,
    },
    #[error("{owner} references unknown condition '{condition}'")]
    UnknownCondition { owner: String, condition: String },
    #[error("red-flag pattern '{0}' lists no trigger symptoms")]
    EmptyPattern(String),
    #[error("follow-up trigger '{trigger}' is used by both '{first}' and '{second}'")]
    DuplicateTrigger {
        trigger: String,
        first: String,
        second: String,
    },
    #[error("follow-up '{question}' has an invalid answer shape: {detail}")]
    InvalidQuestionKind { question: String, detail: String },
    #[error("failed to read knowledge tables from {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse knowledge tables: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Validated, read-only knowledge base.
#[derive(Debug, Clone, PartialEq)]
pub struct KnowledgeBase {
    tables: KnowledgeTables,
}

impl KnowledgeBase {
    pub fn new(tables: KnowledgeTables) -> Result<Self, KnowledgeBaseError> {
        validate(&tables)?;
        info!(
            conditions = tables.conditions.len(),
            weighted_symptoms = tables.symptom_weights.0.len(),
            red_flag_patterns = tables.red_flag_patterns.len(),
            follow_up_templates = tables.follow_up_templates.len(),
            "knowledge base validated"
        );
        Ok(Self { tables })
    }

    pub fn builtin() -> Result<Self, KnowledgeBaseError> {
        Self::new(KnowledgeTables::builtin())
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, KnowledgeBaseError> {
        let tables: KnowledgeTables = serde_json::from_reader(reader)?;
        Self::new(tables)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, KnowledgeBaseError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| KnowledgeBaseError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn conditions(&self) -> &[ConditionDefinition] {
        &self.tables.conditions
    }

    pub fn condition(&self, id: &str) -> Option<&ConditionDefinition> {
        self.tables
            .conditions
            .iter()
            .find(|condition| condition.id == id)
    }

    pub fn weights(&self) -> &SymptomWeightMatrix {
        &self.tables.symptom_weights
    }

    pub fn red_flag_patterns(&self) -> &[RedFlagPattern] {
        &self.tables.red_flag_patterns
    }

    pub fn follow_up_templates(&self) -> &[FollowUpTemplate] {
        &self.tables.follow_up_templates
    }

    pub fn follow_up_template(&self, id: &str) -> Option<&FollowUpTemplate> {
        self.tables
            .follow_up_templates
            .iter()
            .find(|template| template.id == id)
    }

    pub fn tables(&self) -> &KnowledgeTables {
        &self.tables
    }
}

fn validate(tables: &KnowledgeTables) -> Result<(), KnowledgeBaseError> {
    if tables.conditions.is_empty() {
        return Err(KnowledgeBaseError::NoConditions);
    }

    let mut condition_ids = BTreeSet::new();
    for condition in &tables.conditions {
        check_id("condition", &condition.id, &mut condition_ids)?;

        if !(0.0..MAX_PREVALENCE).contains(&condition.prevalence) {
            return Err(KnowledgeBaseError::PrevalenceOutOfRange {
                condition: condition.id.clone(),
                prevalence: condition.prevalence,
            });
        }

        let owner = format!("condition '{}'", condition.id);
        let profile = &condition.symptoms;
        for key in profile
            .required
            .iter()
            .chain(&profile.supportive)
            .chain(&profile.excludes)
            .chain(&condition.red_flags)
        {
            check_key(&owner, key)?;
        }
    }

    for (symptom, row) in tables.symptom_weights.rows() {
        check_key("symptom weight matrix", symptom)?;
        for (condition, weight) in row {
            if !condition_ids.contains(condition.as_str()) {
                return Err(KnowledgeBaseError::UnknownCondition {
                    owner: format!("weight row '{symptom}'"),
                    condition: condition.clone(),
                });
            }
            if !(*weight > 0.0 && *weight <= 1.0) {
                return Err(KnowledgeBaseError::WeightOutOfRange {
                    symptom: symptom.clone(),
                    condition: condition.clone(),
                    weight: *weight,
                });
            }
        }
    }

    let mut pattern_ids = BTreeSet::new();
    for pattern in &tables.red_flag_patterns {
        check_id("red-flag pattern", &pattern.id, &mut pattern_ids)?;
        if pattern.symptoms.is_empty() {
            return Err(KnowledgeBaseError::EmptyPattern(pattern.id.clone()));
        }
        let owner = format!("red-flag pattern '{}'", pattern.id);
        for key in &pattern.symptoms {
            check_key(&owner, key)?;
        }
    }

    let mut question_ids = BTreeSet::new();
    let mut triggers: BTreeMap<&str, &str> = BTreeMap::new();
    for template in &tables.follow_up_templates {
        check_id("follow-up", &template.id, &mut question_ids)?;
        let owner = format!("follow-up '{}'", template.id);
        check_key(&owner, &template.trigger)?;

        if let Some(first) = triggers.insert(&template.trigger, &template.id) {
            return Err(KnowledgeBaseError::DuplicateTrigger {
                trigger: template.trigger.clone(),
                first: first.to_string(),
                second: template.id.clone(),
            });
        }

        for condition in &template.reduces_uncertainty_for {
            if !condition_ids.contains(condition.as_str()) {
                return Err(KnowledgeBaseError::UnknownCondition {
                    owner: owner.clone(),
                    condition: condition.clone(),
                });
            }
        }

        match &template.kind {
            QuestionKind::YesNo => {}
            QuestionKind::Select { options } if options.is_empty() => {
                return Err(KnowledgeBaseError::InvalidQuestionKind {
                    question: template.id.clone(),
                    detail: "select question has no options".to_string(),
                });
            }
            QuestionKind::Select { .. } => {}
            QuestionKind::Scale { min, max } if min >= max => {
                return Err(KnowledgeBaseError::InvalidQuestionKind {
                    question: template.id.clone(),
                    detail: format!("scale bounds {min}..={max} are inverted"),
                });
            }
            QuestionKind::Scale { .. } => {}
        }
    }

    Ok(())
}

fn check_id<'a>(
    table: &'static str,
    id: &'a str,
    seen: &mut BTreeSet<&'a str>,
) -> Result<(), KnowledgeBaseError> {
    if id.trim().is_empty() {
        return Err(KnowledgeBaseError::EmptyId { table });
    }
    if !seen.insert(id) {
        return Err(KnowledgeBaseError::DuplicateId {
            table,
            id: id.to_string(),
        });
    }
    Ok(())
}

fn check_key(owner: &str, key: &str) -> Result<(), KnowledgeBaseError> {
    if key.is_empty() || normalize(key) != key {
        return Err(KnowledgeBaseError::UnnormalizedKey {
            owner: owner.to_string(),
            key: key.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_pass_validation() {
        let knowledge = KnowledgeBase::builtin().expect("builtin tables are consistent");
        assert!(knowledge.conditions().len() >= 10);
        assert!(knowledge.condition("common_cold").is_some());
        assert!(knowledge
            .red_flag_patterns()
            .iter()
            .any(|pattern| pattern.id == "cardiac"));
    }

    #[test]
    fn builtin_prevalence_stays_small() {
        let tables = KnowledgeTables::builtin();
        assert!(tables
            .conditions
            .iter()
            .all(|condition| condition.prevalence < MAX_PREVALENCE));
    }

    #[test]
    fn rejects_weight_for_unknown_condition() {
        let mut tables = KnowledgeTables::builtin();
        tables
            .symptom_weights
            .0
            .entry("cough".to_string())
            .or_default()
            .insert("scurvy".to_string(), 0.4);

        match KnowledgeBase::new(tables) {
            Err(KnowledgeBaseError::UnknownCondition { condition, .. }) => {
                assert_eq!(condition, "scurvy")
            }
            other => panic!("expected unknown condition, got {other:?}"),
        }
    }

    #[test]
    fn rejects_out_of_range_weight() {
        let mut tables = KnowledgeTables::builtin();
        tables
            .symptom_weights
            .0
            .entry("cough".to_string())
            .or_default()
            .insert("common_cold".to_string(), 1.5);

        assert!(matches!(
            KnowledgeBase::new(tables),
            Err(KnowledgeBaseError::WeightOutOfRange { .. })
        ));
    }

    #[test]
    fn rejects_unnormalized_condition_keys() {
        let mut tables = KnowledgeTables::builtin();
        tables.conditions[0]
            .symptoms
            .supportive
            .push("Runny Nose".to_string());

        match KnowledgeBase::new(tables) {
            Err(KnowledgeBaseError::UnnormalizedKey { key, .. }) => assert_eq!(key, "Runny Nose"),
            other => panic!("expected unnormalized key, got {other:?}"),
        }
    }

    #[test]
    fn rejects_dominating_prevalence() {
        let mut tables = KnowledgeTables::builtin();
        tables.conditions[0].prevalence = 0.45;

        assert!(matches!(
            KnowledgeBase::new(tables),
            Err(KnowledgeBaseError::PrevalenceOutOfRange { .. })
        ));
    }

    #[test]
    fn rejects_duplicate_condition_ids() {
        let mut tables = KnowledgeTables::builtin();
        let copy = tables.conditions[0].clone();
        tables.conditions.push(copy);

        assert!(matches!(
            KnowledgeBase::new(tables),
            Err(KnowledgeBaseError::DuplicateId {
                table: "condition",
                ..
            })
        ));
    }

    #[test]
    fn rejects_select_without_options() {
        let mut tables = KnowledgeTables::builtin();
        let template = tables
            .follow_up_templates
            .iter_mut()
            .find(|template| matches!(template.kind, QuestionKind::Select { .. }))
            .expect("builtin has a select question");
        template.kind = QuestionKind::Select {
            options: Vec::new(),
        };

        assert!(matches!(
            KnowledgeBase::new(tables),
            Err(KnowledgeBaseError::InvalidQuestionKind { .. })
        ));
    }

    #[test]
    fn rejects_empty_tables() {
        assert!(matches!(
            KnowledgeBase::new(KnowledgeTables::default()),
            Err(KnowledgeBaseError::NoConditions)
        ));
    }

    #[test]
    fn loads_tables_from_json() {
        let json = serde_json::to_vec(&KnowledgeTables::builtin()).expect("tables serialize");
        let knowledge = KnowledgeBase::from_reader(json.as_slice()).expect("tables load");
        assert_eq!(knowledge.tables(), &KnowledgeTables::builtin());
    }

    #[test]
    fn reports_unreadable_path() {
        match KnowledgeBase::from_path("/nonexistent/triage/tables.json") {
            Err(KnowledgeBaseError::Read { path, .. }) => {
                assert_eq!(path, PathBuf::from("/nonexistent/triage/tables.json"))
            }
            other => panic!("expected read error, got {other:?}"),
        }
    }
}
