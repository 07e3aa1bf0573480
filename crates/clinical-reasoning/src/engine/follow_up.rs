use serde::{Deserialize, Serialize};

use super::domain::{FollowUpAnswer, FollowUpResponse, Symptom};
use super::knowledge::{FollowUpTemplate, KnowledgeBase, QuestionKind};
use super::matching::SymptomMatcher;

pub const MAX_FOLLOW_UPS: usize = 3;

/// Clarifying question selected for the current symptom set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowUpQuestion {
    pub id: String,
    pub question: String,
    #[serde(flatten)]
    pub kind: QuestionKind,
    pub purpose: String,
    pub reduces_uncertainty_for: Vec<String>,
    pub priority: i32,
}

impl From<&FollowUpTemplate> for FollowUpQuestion {
    fn from(template: &FollowUpTemplate) -> Self {
        Self {
            id: template.id.clone(),
            question: template.question.clone(),
            kind: template.kind.clone(),
            purpose: template.purpose.clone(),
            reduces_uncertainty_for: template.reduces_uncertainty_for.clone(),
            priority: template.priority,
        }
    }
}

/// Every template whose trigger is reported, highest priority first, capped at
/// [`MAX_FOLLOW_UPS`]. Equal priorities keep table order.
pub fn generate_follow_ups(
    templates: &[FollowUpTemplate],
    symptoms: &[Symptom],
    matcher: &dyn SymptomMatcher,
) -> Vec<FollowUpQuestion> {
    let mut selected: Vec<&FollowUpTemplate> = templates
        .iter()
        .filter(|template| matcher.any_reported(symptoms, &template.trigger))
        .collect();
    selected.sort_by(|a, b| b.priority.cmp(&a.priority));

    selected
        .into_iter()
        .take(MAX_FOLLOW_UPS)
        .map(FollowUpQuestion::from)
        .collect()
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnswerError {
    #[error("no follow-up question with id '{0}'")]
    UnknownQuestion(String),
    #[error("question '{question}' expects a {expected} answer, got {found}")]
    ShapeMismatch {
        question: String,
        expected: &'static str,
        found: &'static str,
    },
    #[error("'{option}' is not one of the options for question '{question}'")]
    UnknownOption { question: String, option: String },
    #[error("answer {value} for question '{question}' is outside {min}..={max}")]
    OutOfRange {
        question: String,
        value: u8,
        min: u8,
        max: u8,
    },
}

fn answer_label(answer: &FollowUpAnswer) -> &'static str {
    match answer {
        FollowUpAnswer::YesNo(_) => "yes_no",
        FollowUpAnswer::Select(_) => "select",
        FollowUpAnswer::Scale(_) => "scale",
    }
}

/// Check that an answer has the shape its question asks for.
pub fn validate_answer(
    template: &FollowUpTemplate,
    answer: &FollowUpAnswer,
) -> Result<(), AnswerError> {
    match (&template.kind, answer) {
        (QuestionKind::YesNo, FollowUpAnswer::YesNo(_)) => Ok(()),
        (QuestionKind::Select { options }, FollowUpAnswer::Select(choice)) => {
            if options.iter().any(|option| option == choice) {
                Ok(())
            } else {
                Err(AnswerError::UnknownOption {
                    question: template.id.clone(),
                    option: choice.clone(),
                })
            }
        }
        (QuestionKind::Scale { min, max }, FollowUpAnswer::Scale(value)) => {
            if (*min..=*max).contains(value) {
                Ok(())
            } else {
                Err(AnswerError::OutOfRange {
                    question: template.id.clone(),
                    value: *value,
                    min: *min,
                    max: *max,
                })
            }
        }
        (kind, answer) => Err(AnswerError::ShapeMismatch {
            question: template.id.clone(),
            expected: kind.label(),
            found: answer_label(answer),
        }),
    }
}

/// Validate a batch of responses, stopping at the first defect.
pub fn validate_responses(
    knowledge: &KnowledgeBase,
    responses: &[FollowUpResponse],
) -> Result<(), AnswerError> {
    for response in responses {
        let template = knowledge
            .follow_up_template(&response.question_id)
            .ok_or_else(|| AnswerError::UnknownQuestion(response.question_id.clone()))?;
        validate_answer(template, &response.answer)?;
    }
    Ok(())
}
