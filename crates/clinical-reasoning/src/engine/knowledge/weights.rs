use std::collections::BTreeMap;

use super::SymptomWeightMatrix;

const WEIGHTS: &[(&str, &[(&str, f64)])] = &[
    ("runny_nose", &[("common_cold", 0.8), ("allergic_rhinitis", 0.7)]),
    ("sneezing", &[("allergic_rhinitis", 0.8), ("common_cold", 0.6)]),
    ("sore_throat", &[("strep_throat", 0.8), ("common_cold", 0.6)]),
    (
        "cough",
        &[
            ("pneumonia", 0.7),
            ("covid_19", 0.6),
            ("common_cold", 0.5),
            ("influenza", 0.4),
        ],
    ),
    (
        "fever",
        &[
            ("influenza", 0.6),
            ("covid_19", 0.5),
            ("pneumonia", 0.5),
            ("meningitis", 0.4),
            ("strep_throat", 0.4),
        ],
    ),
    ("body_aches", &[("influenza", 0.8), ("covid_19", 0.4)]),
    ("loss_of_taste", &[("covid_19", 0.9)]),
    ("loss_of_smell", &[("covid_19", 0.9)]),
    (
        "shortness_of_breath",
        &[("pneumonia", 0.7), ("heart_attack", 0.6), ("covid_19", 0.5)],
    ),
    (
        "chest_pain",
        &[("heart_attack", 0.9), ("gerd", 0.4), ("pneumonia", 0.3)],
    ),
    (
        "headache",
        &[("migraine", 0.7), ("tension_headache", 0.7), ("meningitis", 0.3)],
    ),
    ("severe_headache", &[("meningitis", 0.7), ("migraine", 0.6)]),
    ("stiff_neck", &[("meningitis", 0.9)]),
    ("light_sensitivity", &[("migraine", 0.7), ("meningitis", 0.5)]),
    (
        "nausea",
        &[("gastroenteritis", 0.6), ("appendicitis", 0.4), ("migraine", 0.3)],
    ),
    ("diarrhea", &[("gastroenteritis", 0.9)]),
    ("vomiting", &[("gastroenteritis", 0.6), ("appendicitis", 0.4)]),
    ("abdominal_pain", &[("appendicitis", 0.7), ("gastroenteritis", 0.5)]),
    ("heartburn", &[("gerd", 0.9)]),
    ("painful_urination", &[("uti", 0.9), ("kidney_stones", 0.3)]),
    ("frequent_urination", &[("uti", 0.7)]),
    ("flank_pain", &[("kidney_stones", 0.9)]),
    ("blood_in_urine", &[("kidney_stones", 0.6), ("uti", 0.4)]),
    ("itchy_eyes", &[("allergic_rhinitis", 0.8)]),
    ("muscle_pain", &[("muscle_strain", 0.7), ("influenza", 0.3)]),
    ("sweating", &[("heart_attack", 0.5)]),
    ("arm_pain", &[("heart_attack", 0.7)]),
];

pub(super) fn builtin_weights() -> SymptomWeightMatrix {
    let matrix = WEIGHTS
        .iter()
        .map(|(symptom, row)| {
            let row: BTreeMap<String, f64> = row
                .iter()
                .map(|(condition, weight)| (condition.to_string(), *weight))
                .collect();
            (symptom.to_string(), row)
        })
        .collect();
    SymptomWeightMatrix(matrix)
}
