use std::io::Cursor;
use std::sync::Arc;

use clinical_reasoning::engine::{
    ClinicalReasoningEngine, KnowledgeBase, KnowledgeBaseError, KnowledgeTables, OverallUrgency,
    Symptom,
};

#[test]
fn builtin_tables_round_trip_through_json() {
    let tables = KnowledgeTables::builtin();
    let encoded = serde_json::to_vec(&tables).expect("tables serialize");

    let loaded = KnowledgeBase::from_reader(Cursor::new(encoded)).expect("tables reload");

    let ids = |knowledge: &[clinical_reasoning::engine::ConditionDefinition]| {
        knowledge
            .iter()
            .map(|condition| condition.id.clone())
            .collect::<Vec<_>>()
    };
    assert_eq!(ids(loaded.conditions()), ids(&tables.conditions));
    assert_eq!(loaded.red_flag_patterns(), tables.red_flag_patterns.as_slice());
    assert_eq!(loaded.follow_up_templates(), tables.follow_up_templates.as_slice());
    assert_eq!(
        loaded.weights().rows().count(),
        tables.symptom_weights.rows().count()
    );
}

#[test]
fn tables_load_from_disk() {
    let path = std::env::temp_dir().join(format!(
        "clinical-reasoning-tables-{}.json",
        std::process::id()
    ));
    let encoded = serde_json::to_vec_pretty(&KnowledgeTables::builtin()).expect("serialize");
    std::fs::write(&path, encoded).expect("write tables");

    let loaded = KnowledgeBase::from_path(&path);
    std::fs::remove_file(&path).ok();

    let knowledge = loaded.expect("tables load from disk");
    assert!(knowledge.condition("meningitis").is_some());
}

#[test]
fn custom_tables_drive_the_engine() {
    let raw = r#"{
        "conditions": [{
            "id": "hay_fever",
            "name": "Hay Fever",
            "category": "respiratory",
            "symptoms": { "required": ["itchy_eyes"], "supportive": ["sneezing"], "excludes": [] },
            "temporal_pattern": { "onset": "gradual", "duration": "seasonal" },
            "prevalence": 0.1,
            "urgency": "self-care",
            "red_flags": [],
            "description": "Seasonal allergy."
        }],
        "symptom_weights": { "itchy_eyes": { "hay_fever": 0.9 } }
    }"#;
    let knowledge = KnowledgeBase::from_reader(Cursor::new(raw)).expect("custom tables validate");
    let engine = ClinicalReasoningEngine::new(Arc::new(knowledge));

    let assessment = engine.assess(&[Symptom::new("Itchy Eyes", 3), Symptom::new("Sneezing", 2)], None);

    assert_eq!(assessment.possible_conditions.len(), 1);
    assert_eq!(assessment.possible_conditions[0].id, "hay_fever");
    assert!(assessment.follow_up_questions.is_empty());
    assert_eq!(assessment.overall_urgency, OverallUrgency::SelfCare);
}

#[test]
fn malformed_tables_are_rejected() {
    let result = KnowledgeBase::from_reader(Cursor::new("{ \"conditions\": 7 }"));
    assert!(matches!(result, Err(KnowledgeBaseError::Parse(_))));

    let result = KnowledgeBase::from_reader(Cursor::new("{ \"conditions\": [] }"));
    assert!(matches!(result, Err(KnowledgeBaseError::NoConditions)));
}
