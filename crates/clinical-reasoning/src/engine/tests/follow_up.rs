use super::common::*;
use crate::engine::domain::{FollowUpAnswer, FollowUpResponse};
use crate::engine::follow_up::{validate_answer, AnswerError, MAX_FOLLOW_UPS};

fn ids(questions: &[crate::engine::FollowUpQuestion]) -> Vec<&str> {
    questions.iter().map(|question| question.id.as_str()).collect()
}

#[test]
fn follow_ups_are_capped_and_sorted_by_priority() {
    let symptoms = vec![
        symptom("Cough", 2),
        symptom("Fever", 3),
        symptom("Headache", 3),
        symptom("Chest Pain", 3),
    ];
    let questions = engine().follow_ups(&symptoms);

    assert_eq!(questions.len(), MAX_FOLLOW_UPS);
    assert_eq!(
        ids(&questions),
        vec!["chest_pain_radiation", "headache_worst_ever", "fever_temperature"]
    );
}

#[test]
fn equal_priorities_keep_table_order() {
    let symptoms = vec![symptom("Rash", 2), symptom("Chest Pain", 2)];
    let questions = engine().follow_ups(&symptoms);

    assert_eq!(ids(&questions), vec!["chest_pain_radiation", "rash_glass_test"]);
    assert!(questions.iter().all(|question| question.priority == 10));
}

#[test]
fn unrelated_symptoms_trigger_no_questions() {
    assert!(engine().follow_ups(&[symptom("Toothache", 2)]).is_empty());
}

#[test]
fn select_answers_must_name_an_option() {
    let knowledge = knowledge();
    let template = knowledge
        .follow_up_template("cough_sputum")
        .expect("builtin template");

    assert_eq!(
        validate_answer(template, &FollowUpAnswer::Select("Clear or white".to_string())),
        Ok(())
    );
    assert_eq!(
        validate_answer(template, &FollowUpAnswer::Select("Purple".to_string())),
        Err(AnswerError::UnknownOption {
            question: "cough_sputum".to_string(),
            option: "Purple".to_string(),
        })
    );
}

#[test]
fn scale_answers_must_fall_within_bounds() {
    let knowledge = knowledge();
    let template = knowledge
        .follow_up_template("breathing_difficulty_scale")
        .expect("builtin template");

    assert!(validate_answer(template, &FollowUpAnswer::Scale(10)).is_ok());
    assert!(matches!(
        validate_answer(template, &FollowUpAnswer::Scale(11)),
        Err(AnswerError::OutOfRange { min: 1, max: 10, .. })
    ));
}

#[test]
fn answer_shape_must_match_question_kind() {
    let knowledge = knowledge();
    let template = knowledge
        .follow_up_template("chest_pain_radiation")
        .expect("builtin template");

    assert_eq!(
        validate_answer(template, &FollowUpAnswer::Scale(3)),
        Err(AnswerError::ShapeMismatch {
            question: "chest_pain_radiation".to_string(),
            expected: "yes_no",
            found: "scale",
        })
    );
}

#[test]
fn batch_validation_rejects_unknown_questions() {
    let responses = vec![
        FollowUpResponse {
            question_id: "chest_pain_radiation".to_string(),
            answer: FollowUpAnswer::YesNo(true),
        },
        FollowUpResponse {
            question_id: "favourite_colour".to_string(),
            answer: FollowUpAnswer::Select("blue".to_string()),
        },
    ];

    assert_eq!(
        engine().validate_answers(&responses),
        Err(AnswerError::UnknownQuestion("favourite_colour".to_string()))
    );
    assert_eq!(engine().validate_answers(&responses[..1]), Ok(()));
}
