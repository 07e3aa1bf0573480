use super::assessment::ClinicalCondition;
use super::domain::OverallUrgency;
use super::knowledge::ConditionCategory;

const WEAK_MATCH_CONFIDENCE: u8 = 40;

fn lines(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub(crate) fn next_steps(urgency: OverallUrgency) -> Vec<String> {
    match urgency {
        OverallUrgency::Emergency => lines(&[
            "Call your local emergency number (such as 911) now",
            "Go to the nearest emergency room if someone can take you safely",
            "Do not drive yourself",
            "Bring a list of your symptoms and current medications",
        ]),
        OverallUrgency::UrgentCare => lines(&[
            "Get seen by a doctor or urgent-care clinic today",
            "Call your doctor's office and ask for a same-day appointment",
            "Keep monitoring your symptoms while you wait",
        ]),
        OverallUrgency::ScheduleVisit => lines(&[
            "Book an appointment with your doctor within the next 2-3 days",
            "Keep a short log of how your symptoms change",
            "Rest and stay hydrated in the meantime",
        ]),
        OverallUrgency::SelfCare => lines(&[
            "Rest and give your body time to recover",
            "Drink plenty of fluids",
            "Monitor your symptoms for any change",
            "Use over-the-counter remedies only as directed on the label",
        ]),
    }
}

pub(crate) fn when_to_seek_help(urgency: OverallUrgency) -> Vec<String> {
    match urgency {
        OverallUrgency::Emergency => lines(&[
            "Now: these symptoms need emergency care",
            "Even if the symptoms ease, get checked today",
        ]),
        OverallUrgency::UrgentCare => lines(&[
            "Call emergency services if you develop chest pain, trouble breathing, confusion or fainting",
            "Get care today even if the symptoms seem to improve",
        ]),
        OverallUrgency::ScheduleVisit => lines(&[
            "Symptoms get significantly worse",
            "New symptoms such as a high fever or difficulty breathing appear",
            "There is no improvement after 2-3 days",
        ]),
        OverallUrgency::SelfCare => lines(&[
            "Symptoms last longer than 7-10 days",
            "You develop a high fever, difficulty breathing or severe pain",
            "Symptoms improve and then come back worse",
        ]),
    }
}

/// Category-keyed home care, falling back to generic advice.
pub(crate) fn self_care_advice(category: Option<ConditionCategory>) -> Vec<String> {
    match category {
        Some(ConditionCategory::Respiratory) => lines(&[
            "Breathe in steam from a bowl of hot water or a warm shower",
            "Gargle with warm salt water to soothe your throat",
            "Rest and drink warm fluids",
        ]),
        Some(ConditionCategory::Digestive) => lines(&[
            "Eat bland foods such as bananas, rice, applesauce and toast",
            "Take small, frequent sips of water or an oral rehydration solution",
            "Avoid dairy, fatty food, alcohol and caffeine until you feel better",
        ]),
        _ => lines(&[
            "Get plenty of rest",
            "Stay well hydrated",
            "Avoid strenuous activity until you feel better",
        ]),
    }
}

pub(crate) fn confidence_explanation(
    conditions: &[ClinicalCondition],
    symptom_count: usize,
) -> String {
    let Some(top) = conditions.first() else {
        return "There is insufficient information to suggest likely conditions. Adding more detail about your symptoms, or speaking with a healthcare provider, will give a clearer picture."
            .to_string();
    };

    let noun = if symptom_count == 1 { "symptom" } else { "symptoms" };
    let mut explanation = format!(
        "Based on the {symptom_count} reported {noun}, {} is the strongest match at {}% confidence.",
        top.name, top.confidence
    );
    if let Some(second) = conditions.get(1) {
        explanation.push_str(&format!(
            " {} follows at {}%.",
            second.name, second.confidence
        ));
    }
    if top.confidence < WEAK_MATCH_CONFIDENCE {
        explanation.push_str(" The match is weak, so treat it as a starting point only.");
    }
    explanation.push_str(
        " Confidence reflects how closely your symptoms overlap known patterns; it is not a diagnosis.",
    );
    explanation
}

pub(crate) fn differential_explanation(conditions: &[ClinicalCondition]) -> String {
    match conditions {
        [] => "No conditions cleared the matching threshold, so a differential could not be formed from the information given."
            .to_string(),
        [only] => format!(
            "{} is the only condition that matched the reported symptoms closely enough to list. Other causes are still possible.",
            only.name
        ),
        [top, second, ..] => {
            let because = if top.matching_symptoms.len() > second.matching_symptoms.len() {
                "more of its key symptoms are present"
            } else {
                "the reported symptoms are more strongly associated with it at their current severity"
            };
            format!(
                "{} conditions share features with your symptoms. {} ranks above {} because {}. Only a clinician can tell these possibilities apart with confidence.",
                conditions.len(),
                top.name,
                second.name,
                because
            )
        }
    }
}
