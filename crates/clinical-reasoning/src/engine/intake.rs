use std::collections::BTreeSet;

use tracing::{debug, warn};

use super::domain::{Onset, Progression, Severity, Symptom, SymptomDuration, SymptomInput};
use super::matching::normalize;

/// Turn raw intake records into scoreable symptoms.
///
/// Defaults: severity 3 when missing (clamped to `[1, 5]` otherwise), duration
/// 1 day, progression stable, onset gradual. Entries whose name has no letters
/// are dropped. Duplicates by normalized key keep the first occurrence.
pub fn sanitize(inputs: Vec<SymptomInput>) -> Vec<Symptom> {
    let mut seen = BTreeSet::new();
    let mut symptoms = Vec::with_capacity(inputs.len());

    for input in inputs {
        let key = normalize(&input.name);
        if key.is_empty() {
            warn!(name = %input.name, "dropping symptom without a usable name");
            continue;
        }
        if !seen.insert(key.clone()) {
            debug!(%key, "dropping duplicate symptom");
            continue;
        }

        if input.severity.is_none() {
            debug!(%key, "severity missing, using modal value");
        }

        symptoms.push(Symptom {
            name: input.name.trim().to_string(),
            key,
            severity: Severity::from_reported(input.severity),
            duration: SymptomDuration::from_reported(input.duration.as_ref()),
            progression: input
                .progression
                .as_deref()
                .and_then(Progression::parse)
                .unwrap_or_default(),
            onset: input
                .onset
                .as_deref()
                .and_then(Onset::parse)
                .unwrap_or_default(),
            frequency: input
                .frequency
                .map(|frequency| frequency.trim().to_string())
                .filter(|frequency| !frequency.is_empty()),
        });
    }

    symptoms
}
