use crate::engine::domain::{
    DurationInput, DurationUnit, Onset, Progression, Severity, SymptomDuration, SymptomInput,
};
use crate::engine::intake::sanitize;

fn named(name: &str) -> SymptomInput {
    SymptomInput {
        name: name.to_string(),
        ..SymptomInput::default()
    }
}

fn with_severity(name: &str, severity: f64) -> SymptomInput {
    SymptomInput {
        severity: Some(severity),
        ..named(name)
    }
}

#[test]
fn missing_fields_take_intake_defaults() {
    let symptoms = sanitize(vec![named("  Headache ")]);

    assert_eq!(symptoms.len(), 1);
    let headache = &symptoms[0];
    assert_eq!(headache.name, "Headache");
    assert_eq!(headache.key, "headache");
    assert_eq!(headache.severity, Severity::MODAL);
    assert_eq!(headache.duration, SymptomDuration::new(1, DurationUnit::Days));
    assert_eq!(headache.progression, Progression::Stable);
    assert_eq!(headache.onset, Onset::Gradual);
    assert_eq!(headache.frequency, None);
}

#[test]
fn severity_is_rounded_and_clamped() {
    let symptoms = sanitize(vec![
        with_severity("Fever", 9.0),
        with_severity("Cough", -2.0),
        with_severity("Nausea", 3.6),
        with_severity("Rash", f64::NAN),
    ]);
    let severities: Vec<u8> = symptoms.iter().map(|s| s.severity.value()).collect();

    assert_eq!(severities, vec![5, 1, 4, 3]);
}

#[test]
fn letterless_names_are_dropped() {
    let symptoms = sanitize(vec![named(""), named("???"), named("42"), named("Cough")]);

    assert_eq!(symptoms.len(), 1);
    assert_eq!(symptoms[0].key, "cough");
}

#[test]
fn duplicates_keep_first_occurrence() {
    let symptoms = sanitize(vec![
        with_severity("Fever", 2.0),
        with_severity("fever ", 5.0),
        with_severity("FEVER", 4.0),
    ]);

    assert_eq!(symptoms.len(), 1);
    assert_eq!(symptoms[0].name, "Fever");
    assert_eq!(symptoms[0].severity.value(), 2);
}

#[test]
fn lenient_json_records_are_parsed() {
    let raw = r#"{"name":"Chest Pain","severity":4,"duration":{"value":2,"unit":"hours"},"progression":"worse","onset":"sudden","frequency":" constant "}"#;
    let input: SymptomInput = serde_json::from_str(raw).expect("valid record");
    let symptoms = sanitize(vec![input]);

    let chest = &symptoms[0];
    assert_eq!(chest.key, "chest_pain");
    assert_eq!(chest.severity.value(), 4);
    assert_eq!(chest.duration, SymptomDuration::new(2, DurationUnit::Hours));
    assert!(chest.is_worsening());
    assert!(chest.is_sudden());
    assert_eq!(chest.frequency.as_deref(), Some("constant"));
}

#[test]
fn unusable_durations_fall_back() {
    let symptoms = sanitize(vec![SymptomInput {
        duration: Some(DurationInput {
            value: Some(0.0),
            unit: Some("fortnights".to_string()),
        }),
        progression: Some("sideways".to_string()),
        ..named("Back Pain")
    }]);

    assert_eq!(symptoms[0].duration, SymptomDuration::new(1, DurationUnit::Days));
    assert_eq!(symptoms[0].progression, Progression::Stable);
}

fn parse(raw: &str) -> Vec<SymptomInput> {
    serde_json::from_str::<crate::engine::router::AssessmentRequest>(raw)
        .expect("request parses")
        .symptoms
}

#[test]
fn numeric_strings_are_accepted_as_severity() {
    let symptoms = sanitize(parse(
        r#"{"symptoms":[{"name":"Chest Pain","severity":"5"},{"name":"Cough","severity":" 2.4 "}]}"#,
    ));

    assert_eq!(symptoms[0].severity.value(), 5);
    assert_eq!(symptoms[1].severity.value(), 2);
}

#[test]
fn wrongly_typed_severity_falls_back_to_modal() {
    let symptoms = sanitize(parse(
        r#"{"symptoms":[{"name":"Fever","severity":"high"},{"name":"Rash","severity":[4]}]}"#,
    ));

    assert!(symptoms
        .iter()
        .all(|symptom| symptom.severity == Severity::MODAL));
}

#[test]
fn free_text_durations_are_parsed() {
    let symptoms = sanitize(parse(
        r#"{"symptoms":[
            {"name":"Chest Pain","duration":"1 hour"},
            {"name":"Cough","duration":"2days"},
            {"name":"Rash","duration":3},
            {"name":"Fatigue","duration":"a while"},
            {"name":"Nausea","duration":true}
        ]}"#,
    ));
    let durations: Vec<SymptomDuration> = symptoms.iter().map(|s| s.duration).collect();

    assert_eq!(
        durations,
        vec![
            SymptomDuration::new(1, DurationUnit::Hours),
            SymptomDuration::new(2, DurationUnit::Days),
            SymptomDuration::new(3, DurationUnit::Days),
            SymptomDuration::new(1, DurationUnit::Days),
            SymptomDuration::new(1, DurationUnit::Days),
        ]
    );
}

#[test]
fn null_or_non_text_names_are_dropped_without_failing_the_list() {
    let symptoms = sanitize(parse(
        r#"{"symptoms":[{"name":null,"severity":4},{"name":17},{"severity":3},{"name":"Headache","onset":5,"progression":null}]}"#,
    ));

    assert_eq!(symptoms.len(), 1);
    assert_eq!(symptoms[0].key, "headache");
    assert_eq!(symptoms[0].onset, Onset::Gradual);
    assert_eq!(symptoms[0].progression, Progression::Stable);
}

#[test]
fn bare_names_and_junk_entries_in_the_list() {
    let symptoms = sanitize(parse(r#"{"symptoms":["Sore Throat", null, 12, ["x"], {"name":"Fever"}]}"#));
    let keys: Vec<&str> = symptoms.iter().map(|s| s.key.as_str()).collect();

    assert_eq!(keys, vec!["sore_throat", "fever"]);
}

#[test]
fn malformed_context_is_dropped() {
    let request: crate::engine::router::AssessmentRequest = serde_json::from_str(
        r#"{"symptoms":[{"name":"Cough"}],"context":{"age":"fifty","history":"none"}}"#,
    )
    .expect("request parses");

    assert_eq!(request.symptoms.len(), 1);
    assert!(request.context.is_none());
}

#[test]
fn severity_labels_distinguish_every_level() {
    let labels: Vec<&str> = (1..=5u8)
        .map(|value| Severity::from_reported(Some(f64::from(value))).label())
        .collect();

    assert_eq!(
        labels,
        vec!["mild", "moderate", "severe", "very severe", "extreme"]
    );
}
