use super::domain::{ConditionUrgency, OverallUrgency, RedFlagSeverity};
use super::knowledge::ConditionDefinition;
use super::red_flags::RedFlagAlert;

/// Overall urgency and the sentence justifying it. First match wins:
/// critical flag, danger flag, then the top-ranked condition's tier.
pub(crate) fn determine_urgency(
    alerts: &[RedFlagAlert],
    top: Option<&ConditionDefinition>,
) -> (OverallUrgency, String) {
    if let Some(alert) = first_with(alerts, RedFlagSeverity::Critical) {
        return (
            OverallUrgency::Emergency,
            format!("Critical warning sign: {}. {}", alert.condition, alert.reason),
        );
    }

    if let Some(alert) = first_with(alerts, RedFlagSeverity::Danger) {
        return (
            OverallUrgency::UrgentCare,
            format!("Warning sign detected: {}. {}", alert.condition, alert.reason),
        );
    }

    let Some(condition) = top else {
        return (
            OverallUrgency::SelfCare,
            "No warning signs were detected and no condition matched strongly enough to raise urgency."
                .to_string(),
        );
    };

    let reason = match condition.urgency {
        ConditionUrgency::Emergency => format!(
            "{} ranks highest among the possibilities and can be a medical emergency.",
            condition.name
        ),
        ConditionUrgency::Urgent => format!(
            "{} ranks highest among the possibilities and usually needs same-day care.",
            condition.name
        ),
        ConditionUrgency::Soon => format!(
            "{} ranks highest among the possibilities and is best checked by a provider within a few days.",
            condition.name
        ),
        ConditionUrgency::SelfCare => format!(
            "{} ranks highest among the possibilities and can usually be managed at home.",
            condition.name
        ),
    };

    (OverallUrgency::from(condition.urgency), reason)
}

fn first_with(alerts: &[RedFlagAlert], severity: RedFlagSeverity) -> Option<&RedFlagAlert> {
    alerts.iter().find(|alert| alert.severity == severity)
}
