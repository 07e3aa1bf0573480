use clinical_reasoning::engine::router::AssessmentRequest;
use clinical_reasoning::engine::{symptom_inputs, KnowledgeBase};
use clinical_reasoning::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Builtin tables unless a path is configured.
pub(crate) fn load_knowledge(path: Option<&Path>) -> Result<Arc<KnowledgeBase>, AppError> {
    let knowledge = match path {
        Some(path) => {
            info!(path = %path.display(), "loading knowledge tables from file");
            KnowledgeBase::from_path(path)?
        }
        None => KnowledgeBase::builtin()?,
    };
    Ok(Arc::new(knowledge))
}

/// Intake files are either a bare symptom array or a full assessment request.
/// Entries with unusable fields are defaulted by the engine, not rejected here.
pub(crate) fn read_intake<R: Read>(reader: R) -> Result<AssessmentRequest, serde_json::Error> {
    match serde_json::from_reader::<_, Value>(reader)? {
        Value::Array(entries) => Ok(AssessmentRequest {
            symptoms: symptom_inputs(entries),
            context: None,
        }),
        request @ Value::Object(_) => serde_json::from_value(request),
        _ => Err(serde::de::Error::custom(
            "expected a list of symptoms or an object with a `symptoms` list",
        )),
    }
}

pub(crate) fn read_intake_file(path: &Path) -> Result<AssessmentRequest, AppError> {
    let file = File::open(path).map_err(|source| AppError::intake_read(path, source))?;
    read_intake(BufReader::new(file)).map_err(|source| AppError::intake_parse(path, source))
}
