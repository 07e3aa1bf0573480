use super::{owned, ConditionCategory, ConditionDefinition, SymptomProfile, TemporalPattern};
use crate::engine::domain::{ConditionUrgency, Onset};

pub(super) fn builtin_conditions() -> Vec<ConditionDefinition> {
    vec![
        ConditionDefinition {
            id: "common_cold".to_string(),
            name: "Common Cold".to_string(),
            category: ConditionCategory::Respiratory,
            symptoms: SymptomProfile {
                required: owned(&["runny_nose", "sore_throat"]),
                supportive: owned(&["sneezing", "cough", "congestion", "mild_fever", "headache"]),
                excludes: owned(&["high_fever", "shortness_of_breath"]),
            },
            temporal_pattern: TemporalPattern {
                onset: Onset::Gradual,
                duration: "7-10 days".to_string(),
            },
            prevalence: 0.15,
            urgency: ConditionUrgency::SelfCare,
            red_flags: owned(&["high_fever", "difficulty_breathing"]),
            description: "A viral infection of the nose and throat that usually clears on its own."
                .to_string(),
            differential_factors: owned(&[
                "Fever is usually absent or mild, unlike influenza",
                "Itchy eyes point toward allergies rather than infection",
            ]),
        },
        ConditionDefinition {
            id: "influenza".to_string(),
            name: "Influenza".to_string(),
            category: ConditionCategory::Infectious,
            symptoms: SymptomProfile {
                required: owned(&["fever", "body_aches"]),
                supportive: owned(&["fatigue", "cough", "headache", "chills", "sore_throat"]),
                excludes: Vec::new(),
            },
            temporal_pattern: TemporalPattern {
                onset: Onset::Sudden,
                duration: "1-2 weeks".to_string(),
            },
            prevalence: 0.08,
            urgency: ConditionUrgency::Soon,
            red_flags: owned(&["difficulty_breathing", "chest_pain", "confusion"]),
            description: "A contagious respiratory illness with abrupt fever and body aches."
                .to_string(),
            differential_factors: owned(&[
                "Abrupt onset distinguishes it from a cold",
                "Loss of taste or smell suggests COVID-19 instead",
            ]),
        },
        ConditionDefinition {
            id: "covid_19".to_string(),
            name: "COVID-19".to_string(),
            category: ConditionCategory::Infectious,
            symptoms: SymptomProfile {
                required: owned(&["fever", "cough"]),
                supportive: owned(&[
                    "fatigue",
                    "loss_of_taste",
                    "loss_of_smell",
                    "body_aches",
                    "shortness_of_breath",
                    "sore_throat",
                ]),
                excludes: Vec::new(),
            },
            temporal_pattern: TemporalPattern {
                onset: Onset::Gradual,
                duration: "1-3 weeks".to_string(),
            },
            prevalence: 0.05,
            urgency: ConditionUrgency::Soon,
            red_flags: owned(&["shortness_of_breath", "chest_pain", "confusion", "blue_lips"]),
            description: "A coronavirus infection ranging from mild cold-like illness to pneumonia."
                .to_string(),
            differential_factors: owned(&[
                "Loss of taste or smell is a distinctive feature",
                "A home or clinic test is needed to confirm",
            ]),
        },
        ConditionDefinition {
            id: "strep_throat".to_string(),
            name: "Strep Throat".to_string(),
            category: ConditionCategory::Infectious,
            symptoms: SymptomProfile {
                required: owned(&["sore_throat", "fever"]),
                supportive: owned(&["swollen_lymph_nodes", "headache", "difficulty_swallowing"]),
                excludes: owned(&["cough", "runny_nose"]),
            },
            temporal_pattern: TemporalPattern {
                onset: Onset::Sudden,
                duration: "3-7 days".to_string(),
            },
            prevalence: 0.03,
            urgency: ConditionUrgency::Soon,
            red_flags: owned(&["difficulty_breathing", "drooling"]),
            description: "A bacterial throat infection that typically needs antibiotics.".to_string(),
            differential_factors: owned(&[
                "Absence of cough and runny nose favors strep over a virus",
                "White patches on the tonsils are common",
            ]),
        },
        ConditionDefinition {
            id: "allergic_rhinitis".to_string(),
            name: "Allergic Rhinitis".to_string(),
            category: ConditionCategory::Respiratory,
            symptoms: SymptomProfile {
                required: owned(&["sneezing", "runny_nose"]),
                supportive: owned(&["itchy_eyes", "congestion", "watery_eyes"]),
                excludes: owned(&["fever"]),
            },
            temporal_pattern: TemporalPattern {
                onset: Onset::Gradual,
                duration: "while exposed to the allergen".to_string(),
            },
            prevalence: 0.1,
            urgency: ConditionUrgency::SelfCare,
            red_flags: owned(&["difficulty_breathing", "throat_swelling"]),
            description: "An allergic reaction of the nasal passages to pollen, dust or dander."
                .to_string(),
            differential_factors: owned(&[
                "Itchy, watery eyes and no fever distinguish it from a cold",
                "Symptoms track exposure to triggers",
            ]),
        },
        ConditionDefinition {
            id: "pneumonia".to_string(),
            name: "Pneumonia".to_string(),
            category: ConditionCategory::Respiratory,
            symptoms: SymptomProfile {
                required: owned(&["cough", "fever"]),
                supportive: owned(&["shortness_of_breath", "chest_pain", "fatigue", "chills"]),
                excludes: Vec::new(),
            },
            temporal_pattern: TemporalPattern {
                onset: Onset::Gradual,
                duration: "2-3 weeks".to_string(),
            },
            prevalence: 0.02,
            urgency: ConditionUrgency::Urgent,
            red_flags: owned(&["shortness_of_breath", "confusion", "blue_lips"]),
            description: "An infection that inflames the air sacs of one or both lungs.".to_string(),
            differential_factors: owned(&[
                "Breathlessness and chest pain on breathing suggest lung involvement",
                "A chest examination or X-ray is needed to confirm",
            ]),
        },
        ConditionDefinition {
            id: "migraine".to_string(),
            name: "Migraine".to_string(),
            category: ConditionCategory::Neurological,
            symptoms: SymptomProfile {
                required: owned(&["headache"]),
                supportive: owned(&[
                    "nausea",
                    "light_sensitivity",
                    "sound_sensitivity",
                    "visual_disturbance",
                ]),
                excludes: owned(&["fever", "stiff_neck"]),
            },
            temporal_pattern: TemporalPattern {
                onset: Onset::Gradual,
                duration: "4-72 hours".to_string(),
            },
            prevalence: 0.12,
            urgency: ConditionUrgency::Soon,
            red_flags: owned(&["sudden_severe_headache", "confusion", "weakness"]),
            description: "A recurring headache disorder with throbbing pain and sensory sensitivity."
                .to_string(),
            differential_factors: owned(&[
                "Light and sound sensitivity favor migraine over tension headache",
                "Fever with a stiff neck points away from migraine",
            ]),
        },
        ConditionDefinition {
            id: "tension_headache".to_string(),
            name: "Tension Headache".to_string(),
            category: ConditionCategory::Neurological,
            symptoms: SymptomProfile {
                required: owned(&["headache"]),
                supportive: owned(&["neck_pain", "fatigue", "stress"]),
                excludes: owned(&["fever", "vomiting"]),
            },
            temporal_pattern: TemporalPattern {
                onset: Onset::Gradual,
                duration: "30 minutes to several days".to_string(),
            },
            prevalence: 0.15,
            urgency: ConditionUrgency::SelfCare,
            red_flags: owned(&["sudden_severe_headache", "confusion"]),
            description: "A band-like headache often linked to stress, posture or poor sleep."
                .to_string(),
            differential_factors: owned(&[
                "Pressure on both sides without nausea favors tension headache",
            ]),
        },
        ConditionDefinition {
            id: "meningitis".to_string(),
            name: "Meningitis".to_string(),
            category: ConditionCategory::Neurological,
            symptoms: SymptomProfile {
                required: owned(&["headache", "stiff_neck", "fever"]),
                supportive: owned(&["confusion", "light_sensitivity", "nausea", "vomiting", "rash"]),
                excludes: Vec::new(),
            },
            temporal_pattern: TemporalPattern {
                onset: Onset::Sudden,
                duration: "hours to days".to_string(),
            },
            prevalence: 0.001,
            urgency: ConditionUrgency::Emergency,
            red_flags: owned(&["stiff_neck", "confusion", "rash"]),
            description: "Inflammation of the membranes around the brain and spinal cord."
                .to_string(),
            differential_factors: owned(&[
                "The triad of fever, headache and stiff neck is the hallmark",
                "A rash that does not fade under pressure is an emergency sign",
            ]),
        },
        ConditionDefinition {
            id: "gastroenteritis".to_string(),
            name: "Gastroenteritis".to_string(),
            category: ConditionCategory::Digestive,
            symptoms: SymptomProfile {
                required: owned(&["nausea", "diarrhea"]),
                supportive: owned(&["vomiting", "abdominal_pain", "fever", "cramps"]),
                excludes: Vec::new(),
            },
            temporal_pattern: TemporalPattern {
                onset: Onset::Sudden,
                duration: "1-3 days".to_string(),
            },
            prevalence: 0.1,
            urgency: ConditionUrgency::SelfCare,
            red_flags: owned(&["blood_in_stool", "dehydration", "high_fever"]),
            description: "An infection of the stomach and intestines, often called stomach flu."
                .to_string(),
            differential_factors: owned(&[
                "Diarrhea alongside nausea favors gastroenteritis over appendicitis",
            ]),
        },
        ConditionDefinition {
            id: "appendicitis".to_string(),
            name: "Appendicitis".to_string(),
            category: ConditionCategory::Surgical,
            symptoms: SymptomProfile {
                required: owned(&["abdominal_pain"]),
                supportive: owned(&["nausea", "vomiting", "fever", "loss_of_appetite"]),
                excludes: owned(&["diarrhea"]),
            },
            temporal_pattern: TemporalPattern {
                onset: Onset::Gradual,
                duration: "24-48 hours".to_string(),
            },
            prevalence: 0.01,
            urgency: ConditionUrgency::Emergency,
            red_flags: owned(&["severe_abdominal_pain", "rigid_abdomen"]),
            description: "Inflammation of the appendix that may require surgery.".to_string(),
            differential_factors: owned(&[
                "Pain that moves to the lower right abdomen is characteristic",
                "Pain that worsens with movement or coughing",
            ]),
        },
        ConditionDefinition {
            id: "heart_attack".to_string(),
            name: "Heart Attack".to_string(),
            category: ConditionCategory::Cardiac,
            symptoms: SymptomProfile {
                required: owned(&["chest_pain"]),
                supportive: owned(&[
                    "shortness_of_breath",
                    "sweating",
                    "nausea",
                    "arm_pain",
                    "jaw_pain",
                    "dizziness",
                ]),
                excludes: Vec::new(),
            },
            temporal_pattern: TemporalPattern {
                onset: Onset::Sudden,
                duration: "minutes to hours".to_string(),
            },
            prevalence: 0.005,
            urgency: ConditionUrgency::Emergency,
            red_flags: owned(&["chest_pain", "shortness_of_breath", "arm_pain"]),
            description: "Blocked blood flow to the heart muscle, a medical emergency.".to_string(),
            differential_factors: owned(&[
                "Pressure-like pain spreading to the arm or jaw is typical",
                "Pain linked to meals or lying down points toward reflux",
            ]),
        },
        ConditionDefinition {
            id: "gerd".to_string(),
            name: "Acid Reflux (GERD)".to_string(),
            category: ConditionCategory::Digestive,
            symptoms: SymptomProfile {
                required: owned(&["heartburn"]),
                supportive: owned(&["chest_pain", "sore_throat", "cough", "regurgitation"]),
                excludes: Vec::new(),
            },
            temporal_pattern: TemporalPattern {
                onset: Onset::Gradual,
                duration: "recurring".to_string(),
            },
            prevalence: 0.1,
            urgency: ConditionUrgency::SelfCare,
            red_flags: owned(&["difficulty_swallowing", "blood_in_vomit"]),
            description: "Stomach acid flowing back into the esophagus, causing burning pain."
                .to_string(),
            differential_factors: owned(&[
                "Burning after meals or when lying down favors reflux",
            ]),
        },
        ConditionDefinition {
            id: "uti".to_string(),
            name: "Urinary Tract Infection".to_string(),
            category: ConditionCategory::Urological,
            symptoms: SymptomProfile {
                required: owned(&["painful_urination"]),
                supportive: owned(&[
                    "frequent_urination",
                    "lower_abdominal_pain",
                    "cloudy_urine",
                    "fever",
                ]),
                excludes: Vec::new(),
            },
            temporal_pattern: TemporalPattern {
                onset: Onset::Gradual,
                duration: "days".to_string(),
            },
            prevalence: 0.08,
            urgency: ConditionUrgency::Soon,
            red_flags: owned(&["back_pain", "high_fever"]),
            description: "A bacterial infection of the bladder or urethra.".to_string(),
            differential_factors: owned(&[
                "Fever with back or side pain suggests the kidneys are involved",
            ]),
        },
        ConditionDefinition {
            id: "kidney_stones".to_string(),
            name: "Kidney Stones".to_string(),
            category: ConditionCategory::Urological,
            symptoms: SymptomProfile {
                required: owned(&["flank_pain"]),
                supportive: owned(&["blood_in_urine", "nausea", "vomiting", "painful_urination"]),
                excludes: Vec::new(),
            },
            temporal_pattern: TemporalPattern {
                onset: Onset::Sudden,
                duration: "hours to weeks".to_string(),
            },
            prevalence: 0.01,
            urgency: ConditionUrgency::Urgent,
            red_flags: owned(&["high_fever", "no_urination"]),
            description: "Hard mineral deposits passing through the urinary tract.".to_string(),
            differential_factors: owned(&[
                "Severe colicky pain in the side that comes in waves",
            ]),
        },
        ConditionDefinition {
            id: "muscle_strain".to_string(),
            name: "Muscle Strain".to_string(),
            category: ConditionCategory::Musculoskeletal,
            symptoms: SymptomProfile {
                required: owned(&["muscle_pain"]),
                supportive: owned(&["stiffness", "swelling", "back_pain"]),
                excludes: owned(&["fever"]),
            },
            temporal_pattern: TemporalPattern {
                onset: Onset::Sudden,
                duration: "days to weeks".to_string(),
            },
            prevalence: 0.1,
            urgency: ConditionUrgency::SelfCare,
            red_flags: owned(&["numbness", "weakness"]),
            description: "Overstretched or torn muscle fibers after exertion or injury.".to_string(),
            differential_factors: owned(&["Pain follows a clear strain or injury"]),
        },
    ]
}
