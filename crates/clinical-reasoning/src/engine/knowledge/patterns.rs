use super::{owned, RedFlagPattern};
use crate::engine::domain::RedFlagSeverity;

pub(super) fn builtin_patterns() -> Vec<RedFlagPattern> {
    vec![
        RedFlagPattern {
            id: "cardiac".to_string(),
            symptoms: owned(&[
                "chest_pain",
                "shortness_of_breath",
                "arm_pain",
                "jaw_pain",
                "sweating",
            ]),
            severity: RedFlagSeverity::Critical,
            condition: "Possible heart attack".to_string(),
            reason: "Chest pain together with breathlessness, sweating or pain spreading to the arm or jaw can signal a heart attack.".to_string(),
            action: "Call emergency services now. Do not drive yourself to the hospital.".to_string(),
            call_emergency: true,
        },
        RedFlagPattern {
            id: "stroke".to_string(),
            symptoms: owned(&[
                "face_drooping",
                "arm_weakness",
                "slurred_speech",
                "sudden_numbness",
                "sudden_confusion",
            ]),
            severity: RedFlagSeverity::Critical,
            condition: "Possible stroke".to_string(),
            reason: "Facial drooping, one-sided weakness or slurred speech are warning signs of a stroke.".to_string(),
            action: "Call emergency services immediately and note the time symptoms started.".to_string(),
            call_emergency: true,
        },
        RedFlagPattern {
            id: "meningitis".to_string(),
            symptoms: owned(&["severe_headache", "stiff_neck", "fever"]),
            severity: RedFlagSeverity::Critical,
            condition: "Possible meningitis".to_string(),
            reason: "Severe headache with a stiff neck and fever can indicate meningitis, which progresses quickly.".to_string(),
            action: "Seek emergency care immediately.".to_string(),
            call_emergency: true,
        },
        RedFlagPattern {
            id: "respiratory_distress".to_string(),
            symptoms: owned(&["difficulty_breathing"]),
            severity: RedFlagSeverity::Critical,
            condition: "Severe breathing difficulty".to_string(),
            reason: "Struggling to breathe needs immediate assessment.".to_string(),
            action: "Call emergency services. Sit upright and stay calm while you wait.".to_string(),
            call_emergency: true,
        },
        RedFlagPattern {
            id: "anaphylaxis".to_string(),
            symptoms: owned(&[
                "throat_swelling",
                "facial_swelling",
                "hives",
                "difficulty_breathing",
            ]),
            severity: RedFlagSeverity::Critical,
            condition: "Possible severe allergic reaction".to_string(),
            reason: "Swelling of the face or throat with hives or breathing trouble can be anaphylaxis.".to_string(),
            action: "Use an epinephrine auto-injector if you have one and call emergency services.".to_string(),
            call_emergency: true,
        },
        RedFlagPattern {
            id: "loss_of_consciousness".to_string(),
            symptoms: owned(&["loss_of_consciousness"]),
            severity: RedFlagSeverity::Critical,
            condition: "Loss of consciousness".to_string(),
            reason: "Passing out can be caused by heart rhythm problems, bleeding or other serious conditions.".to_string(),
            action: "Call emergency services, especially if it happened without warning.".to_string(),
            call_emergency: true,
        },
        RedFlagPattern {
            id: "mental_health_crisis".to_string(),
            symptoms: owned(&["suicidal_thoughts"]),
            severity: RedFlagSeverity::Critical,
            condition: "Mental health crisis".to_string(),
            reason: "Thoughts of ending your life need immediate support.".to_string(),
            action: "Call your local emergency number or a crisis line now. You do not have to face this alone.".to_string(),
            call_emergency: true,
        },
        RedFlagPattern {
            id: "acute_abdomen".to_string(),
            symptoms: owned(&["severe_abdominal_pain", "rigid_abdomen", "blood_in_vomit"]),
            severity: RedFlagSeverity::Danger,
            condition: "Possible acute abdominal emergency".to_string(),
            reason: "Severe abdominal pain with a hard, tender belly or bloody vomit may need surgery.".to_string(),
            action: "Get same-day medical care. Do not eat or drink until assessed.".to_string(),
            call_emergency: false,
        },
        RedFlagPattern {
            id: "gastrointestinal_bleeding".to_string(),
            symptoms: owned(&["blood_in_stool", "black_stool", "blood_in_vomit"]),
            severity: RedFlagSeverity::Danger,
            condition: "Possible gastrointestinal bleeding".to_string(),
            reason: "Blood in stool or vomit, or black tarry stool, can signal internal bleeding.".to_string(),
            action: "Get medical care today. Call emergency services if you feel faint.".to_string(),
            call_emergency: false,
        },
        RedFlagPattern {
            id: "fever_with_confusion".to_string(),
            symptoms: owned(&["high_fever", "confusion"]),
            severity: RedFlagSeverity::Danger,
            condition: "High fever with confusion".to_string(),
            reason: "Confusion alongside a high fever can mean a serious infection is spreading.".to_string(),
            action: "Get urgent medical care today.".to_string(),
            call_emergency: false,
        },
    ]
}
