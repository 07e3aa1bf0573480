use super::{owned, FollowUpTemplate, QuestionKind};

pub(super) fn builtin_templates() -> Vec<FollowUpTemplate> {
    vec![
        FollowUpTemplate {
            id: "chest_pain_radiation".to_string(),
            trigger: "chest_pain".to_string(),
            question: "Does the pain spread to your arm, jaw, neck or back?".to_string(),
            kind: QuestionKind::YesNo,
            purpose: "Radiating pain is a key sign that separates heart problems from reflux or muscle pain.".to_string(),
            reduces_uncertainty_for: owned(&["heart_attack", "gerd", "pneumonia"]),
            priority: 10,
        },
        FollowUpTemplate {
            id: "rash_glass_test".to_string(),
            trigger: "rash".to_string(),
            question: "Does the rash stay visible when you press a clear glass against it?".to_string(),
            kind: QuestionKind::YesNo,
            purpose: "A rash that does not fade under pressure can be a sign of meningitis.".to_string(),
            reduces_uncertainty_for: owned(&["meningitis"]),
            priority: 10,
        },
        FollowUpTemplate {
            id: "headache_worst_ever".to_string(),
            trigger: "headache".to_string(),
            question: "Is this the worst headache you have ever had, or did it start within seconds?".to_string(),
            kind: QuestionKind::YesNo,
            purpose: "A sudden, extreme headache needs a different response than a typical migraine.".to_string(),
            reduces_uncertainty_for: owned(&["meningitis", "migraine", "tension_headache"]),
            priority: 9,
        },
        FollowUpTemplate {
            id: "breathing_difficulty_scale".to_string(),
            trigger: "shortness_of_breath".to_string(),
            question: "How hard is it to breathe right now, from 1 (barely noticeable) to 10 (cannot speak)?".to_string(),
            kind: QuestionKind::Scale { min: 1, max: 10 },
            purpose: "The degree of breathlessness separates mild infections from lung or heart emergencies.".to_string(),
            reduces_uncertainty_for: owned(&["pneumonia", "heart_attack", "covid_19"]),
            priority: 9,
        },
        FollowUpTemplate {
            id: "fever_temperature".to_string(),
            trigger: "fever".to_string(),
            question: "What is the highest temperature you have measured?".to_string(),
            kind: QuestionKind::Select {
                options: owned(&[
                    "Below 38°C (100.4°F)",
                    "38-39°C (100.4-102.2°F)",
                    "Above 39°C (102.2°F)",
                    "Not measured",
                ]),
            },
            purpose: "Fever height helps separate colds from influenza and bacterial infections.".to_string(),
            reduces_uncertainty_for: owned(&["influenza", "covid_19", "common_cold", "meningitis"]),
            priority: 8,
        },
        FollowUpTemplate {
            id: "abdominal_pain_location".to_string(),
            trigger: "abdominal_pain".to_string(),
            question: "Where is the pain strongest?".to_string(),
            kind: QuestionKind::Select {
                options: owned(&[
                    "Upper abdomen",
                    "Lower right",
                    "Lower left",
                    "Around the belly button",
                    "All over",
                ]),
            },
            purpose: "Pain settling in the lower right abdomen is characteristic of appendicitis.".to_string(),
            reduces_uncertainty_for: owned(&["appendicitis", "gastroenteritis"]),
            priority: 8,
        },
        FollowUpTemplate {
            id: "cough_sputum".to_string(),
            trigger: "cough".to_string(),
            question: "Are you coughing anything up?".to_string(),
            kind: QuestionKind::Select {
                options: owned(&["Nothing", "Clear or white", "Yellow or green", "Blood-tinged"]),
            },
            purpose: "Colored or bloody sputum points toward a bacterial chest infection.".to_string(),
            reduces_uncertainty_for: owned(&["pneumonia", "common_cold", "covid_19"]),
            priority: 7,
        },
        FollowUpTemplate {
            id: "urination_back_pain".to_string(),
            trigger: "painful_urination".to_string(),
            question: "Do you also have pain in your back or side?".to_string(),
            kind: QuestionKind::YesNo,
            purpose: "Back or side pain suggests the infection may have reached the kidneys.".to_string(),
            reduces_uncertainty_for: owned(&["uti", "kidney_stones"]),
            priority: 7,
        },
        FollowUpTemplate {
            id: "nausea_fluids".to_string(),
            trigger: "nausea".to_string(),
            question: "Have you been able to keep fluids down for the last 12 hours?".to_string(),
            kind: QuestionKind::YesNo,
            purpose: "Being unable to keep fluids down raises the risk of dehydration.".to_string(),
            reduces_uncertainty_for: owned(&["gastroenteritis", "appendicitis"]),
            priority: 6,
        },
        FollowUpTemplate {
            id: "diarrhea_blood".to_string(),
            trigger: "diarrhea".to_string(),
            question: "Have you noticed any blood in your stool?".to_string(),
            kind: QuestionKind::YesNo,
            purpose: "Bloody diarrhea changes the likely cause and the urgency of care.".to_string(),
            reduces_uncertainty_for: owned(&["gastroenteritis"]),
            priority: 6,
        },
        FollowUpTemplate {
            id: "sore_throat_patches".to_string(),
            trigger: "sore_throat".to_string(),
            question: "Can you see white patches or pus on your tonsils?".to_string(),
            kind: QuestionKind::YesNo,
            purpose: "White patches without a cough favor strep throat over a viral cold.".to_string(),
            reduces_uncertainty_for: owned(&["strep_throat", "common_cold"]),
            priority: 5,
        },
        FollowUpTemplate {
            id: "runny_nose_triggers".to_string(),
            trigger: "runny_nose".to_string(),
            question: "Are your symptoms worse around pollen, dust or pets?".to_string(),
            kind: QuestionKind::YesNo,
            purpose: "Symptoms that follow exposure point toward allergies rather than a cold.".to_string(),
            reduces_uncertainty_for: owned(&["allergic_rhinitis", "common_cold"]),
            priority: 4,
        },
    ]
}
