use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

use super::matching::normalize;

/// Symptom as posted by the intake UI. Everything except the name is optional and
/// defaulted during sanitation. Fields of the wrong JSON type deserialize as absent
/// so one bad field never rejects the whole list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SymptomInput {
    #[serde(default, deserialize_with = "lenient_name")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub severity: Option<f64>,
    #[serde(default, deserialize_with = "lenient_duration")]
    pub duration: Option<DurationInput>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub progression: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub onset: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub frequency: Option<String>,
}

impl SymptomInput {
    /// A record from an object or a bare name. Other JSON shapes yield `None`.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::String(name) => Some(Self {
                name,
                ..Self::default()
            }),
            object @ Value::Object(_) => serde_json::from_value(object).ok(),
            _ => None,
        }
    }
}

/// `deserialize_with` helper for symptom lists: unusable entries are skipped
/// instead of failing the list.
pub fn lenient_symptom_list<'de, D>(deserializer: D) -> Result<Vec<SymptomInput>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = match Value::deserialize(deserializer)? {
        Value::Array(entries) => entries,
        Value::Null => Vec::new(),
        other => vec![other],
    };
    Ok(symptom_inputs(entries))
}

pub fn symptom_inputs(entries: Vec<Value>) -> Vec<SymptomInput> {
    entries
        .into_iter()
        .filter_map(|entry| {
            let kind = json_kind(&entry);
            let input = SymptomInput::from_value(entry);
            if input.is_none() {
                warn!(kind, "skipping symptom entry that is not an object or name");
            }
            input
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DurationInput {
    #[serde(default, deserialize_with = "lenient_number")]
    pub value: Option<f64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub unit: Option<String>,
}

impl DurationInput {
    /// Parse free text such as "2 days", "1 hour" or "3wks".
    fn from_text(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let split = raw
            .find(|ch: char| !(ch.is_ascii_digit() || ch == '.'))
            .unwrap_or(raw.len());
        let (number, unit) = raw.split_at(split);
        let value = number.parse::<f64>().ok();
        let unit = Some(unit.trim().to_string()).filter(|unit| !unit.is_empty());
        if value.is_none() && unit.is_none() {
            return None;
        }
        Some(Self { value, unit })
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    })
}

fn lenient_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_text(deserializer).map(Option::unwrap_or_default)
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|value| value.is_finite()))
}

fn lenient_duration<'de, D>(deserializer: D) -> Result<Option<DurationInput>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        object @ Value::Object(_) => serde_json::from_value(object).ok(),
        Value::Number(number) => Some(DurationInput {
            value: number.as_f64(),
            unit: None,
        }),
        Value::String(text) => DurationInput::from_text(&text),
        _ => None,
    })
}

/// Sanitized symptom record consumed by scoring, red-flag detection and follow-ups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Symptom {
    pub name: String,
    pub key: String,
    pub severity: Severity,
    pub duration: SymptomDuration,
    pub progression: Progression,
    pub onset: Onset,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
}

impl Symptom {
    /// Build a symptom with the intake defaults for everything but name and severity.
    pub fn new(name: impl Into<String>, severity: u8) -> Self {
        let name = name.into();
        let key = normalize(&name);
        Self {
            name,
            key,
            severity: Severity::from(severity),
            duration: SymptomDuration::default(),
            progression: Progression::default(),
            onset: Onset::default(),
            frequency: None,
        }
    }

    pub fn with_duration(mut self, value: u32, unit: DurationUnit) -> Self {
        self.duration = SymptomDuration::new(value, unit);
        self
    }

    pub fn with_progression(mut self, progression: Progression) -> Self {
        self.progression = progression;
        self
    }

    pub fn with_onset(mut self, onset: Onset) -> Self {
        self.onset = onset;
        self
    }

    pub fn with_frequency(mut self, frequency: impl Into<String>) -> Self {
        self.frequency = Some(frequency.into());
        self
    }

    pub fn is_worsening(&self) -> bool {
        self.progression == Progression::Worsening
    }

    pub fn is_sudden(&self) -> bool {
        self.onset == Onset::Sudden
    }
}

/// Ordinal severity, always within `[1, 5]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct Severity(u8);

impl Severity {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;
    /// Used whenever a report omits severity entirely.
    pub const MODAL: Severity = Severity(3);

    /// Missing or non-finite values fall back to the modal severity; everything
    /// else is rounded and clamped into range.
    pub fn from_reported(raw: Option<f64>) -> Self {
        match raw {
            Some(value) if value.is_finite() => {
                let clamped = value.round().clamp(Self::MIN as f64, Self::MAX as f64);
                Severity(clamped as u8)
            }
            _ => Self::MODAL,
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub fn is_high(self) -> bool {
        self.0 >= 4
    }

    pub fn is_extreme(self) -> bool {
        self.0 == Self::MAX
    }

    pub const fn label(self) -> &'static str {
        match self.0 {
            1 => "mild",
            2 => "moderate",
            3 => "severe",
            4 => "very severe",
            _ => "extreme",
        }
    }
}

impl Default for Severity {
    fn default() -> Self {
        Self::MODAL
    }
}

impl From<u8> for Severity {
    fn from(value: u8) -> Self {
        Severity(value.clamp(Self::MIN, Self::MAX))
    }
}

impl From<Severity> for u8 {
    fn from(value: Severity) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomDuration {
    pub value: u32,
    pub unit: DurationUnit,
}

impl SymptomDuration {
    pub fn new(value: u32, unit: DurationUnit) -> Self {
        Self {
            value: value.max(1),
            unit,
        }
    }

    pub(crate) fn from_reported(input: Option<&DurationInput>) -> Self {
        let Some(input) = input else {
            return Self::default();
        };

        let value = input
            .value
            .filter(|value| value.is_finite() && *value >= 1.0)
            .map(|value| value.round().min(u32::MAX as f64) as u32)
            .unwrap_or(1);
        let unit = input
            .unit
            .as_deref()
            .and_then(DurationUnit::parse)
            .unwrap_or_default();

        Self::new(value, unit)
    }
}

impl Default for SymptomDuration {
    fn default() -> Self {
        Self::new(1, DurationUnit::Days)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationUnit {
    Hours,
    #[default]
    Days,
    Weeks,
}

impl DurationUnit {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "h" | "hr" | "hrs" | "hour" | "hours" => Some(Self::Hours),
            "d" | "day" | "days" => Some(Self::Days),
            "w" | "wk" | "wks" | "week" | "weeks" => Some(Self::Weeks),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Progression {
    Improving,
    #[default]
    Stable,
    Worsening,
}

impl Progression {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "improving" | "better" => Some(Self::Improving),
            "stable" | "same" | "unchanged" => Some(Self::Stable),
            "worsening" | "worse" => Some(Self::Worsening),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Onset {
    Sudden,
    #[default]
    Gradual,
}

impl Onset {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "sudden" | "acute" => Some(Self::Sudden),
            "gradual" => Some(Self::Gradual),
            _ => None,
        }
    }
}

/// Optional caller-supplied context. Carried through to the caller; scoring does
/// not read it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientContext {
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(default)]
    pub sex: Option<String>,
    #[serde(default)]
    pub history: Vec<String>,
    #[serde(default)]
    pub answers: Vec<FollowUpResponse>,
}

/// `deserialize_with` helper: a malformed context is dropped, never fatal.
pub fn lenient_context<'de, D>(deserializer: D) -> Result<Option<PatientContext>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    match serde_json::from_value(value) {
        Ok(context) => Ok(Some(context)),
        Err(err) => {
            warn!(error = %err, "ignoring malformed patient context");
            Ok(None)
        }
    }
}

/// Answer shape per follow-up question type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FollowUpAnswer {
    YesNo(bool),
    Select(String),
    Scale(u8),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowUpResponse {
    pub question_id: String,
    pub answer: FollowUpAnswer,
}

/// Intrinsic ceiling urgency of a knowledge-base condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConditionUrgency {
    SelfCare,
    Soon,
    Urgent,
    Emergency,
}

impl ConditionUrgency {
    pub const fn label(self) -> &'static str {
        match self {
            ConditionUrgency::SelfCare => "self-care",
            ConditionUrgency::Soon => "soon",
            ConditionUrgency::Urgent => "urgent",
            ConditionUrgency::Emergency => "emergency",
        }
    }
}

/// Urgency tier reported to the user, ordered by required speed of care.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverallUrgency {
    SelfCare,
    ScheduleVisit,
    UrgentCare,
    Emergency,
}

impl OverallUrgency {
    pub const fn label(self) -> &'static str {
        match self {
            OverallUrgency::SelfCare => "self-care",
            OverallUrgency::ScheduleVisit => "schedule-visit",
            OverallUrgency::UrgentCare => "urgent-care",
            OverallUrgency::Emergency => "emergency",
        }
    }
}

impl From<ConditionUrgency> for OverallUrgency {
    fn from(value: ConditionUrgency) -> Self {
        match value {
            ConditionUrgency::Emergency => OverallUrgency::Emergency,
            ConditionUrgency::Urgent => OverallUrgency::UrgentCare,
            ConditionUrgency::Soon => OverallUrgency::ScheduleVisit,
            ConditionUrgency::SelfCare => OverallUrgency::SelfCare,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedFlagSeverity {
    Warning,
    Danger,
    Critical,
}

impl RedFlagSeverity {
    pub const fn label(self) -> &'static str {
        match self {
            RedFlagSeverity::Warning => "warning",
            RedFlagSeverity::Danger => "danger",
            RedFlagSeverity::Critical => "critical",
        }
    }
}
