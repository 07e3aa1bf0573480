use crate::infra::{load_knowledge, read_intake_file};
use clap::{Args, ValueEnum};
use clinical_reasoning::config::AppConfig;
use clinical_reasoning::engine::{
    ClinicalAssessment, ClinicalReasoningEngine, DurationUnit, KnowledgeBase, Onset, Progression,
    Symptom,
};
use clinical_reasoning::error::AppError;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// JSON file holding a symptom array or a `{ "symptoms": [...], "context": {...} }` request
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Print the assessment as JSON instead of a readable summary
    #[arg(long)]
    pub(crate) json: bool,
    /// Knowledge tables to use instead of the configured or builtin set
    #[arg(long)]
    pub(crate) knowledge: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Run a single scenario instead of all of them
    #[arg(long, value_enum)]
    pub(crate) scenario: Option<DemoScenario>,
    /// Print each assessment as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ValidateArgs {
    /// Table file to validate. Defaults to the builtin tables.
    #[arg(long)]
    pub(crate) path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum DemoScenario {
    /// Sudden, worsening chest pain with breathlessness
    Cardiac,
    /// Mild runny nose, sore throat and sneezing
    Cold,
    /// Severe headache, stiff neck and fever
    Meningitis,
}

impl DemoScenario {
    const ALL: [DemoScenario; 3] = [
        DemoScenario::Cardiac,
        DemoScenario::Cold,
        DemoScenario::Meningitis,
    ];

    fn title(self) -> &'static str {
        match self {
            DemoScenario::Cardiac => "Chest pain with shortness of breath",
            DemoScenario::Cold => "Mild cold symptoms",
            DemoScenario::Meningitis => "Headache, stiff neck and fever",
        }
    }

    pub(crate) fn symptoms(self) -> Vec<Symptom> {
        match self {
            DemoScenario::Cardiac => vec![
                Symptom::new("Chest Pain", 5)
                    .with_duration(1, DurationUnit::Hours)
                    .with_progression(Progression::Worsening)
                    .with_onset(Onset::Sudden),
                Symptom::new("Shortness of Breath", 4)
                    .with_duration(1, DurationUnit::Hours)
                    .with_progression(Progression::Worsening)
                    .with_onset(Onset::Sudden),
            ],
            DemoScenario::Cold => vec![
                Symptom::new("Runny Nose", 2).with_duration(3, DurationUnit::Days),
                Symptom::new("Sore Throat", 2).with_duration(3, DurationUnit::Days),
                Symptom::new("Sneezing", 1).with_duration(3, DurationUnit::Days),
            ],
            DemoScenario::Meningitis => vec![
                Symptom::new("Severe Headache", 5)
                    .with_duration(12, DurationUnit::Hours)
                    .with_progression(Progression::Worsening)
                    .with_onset(Onset::Sudden),
                Symptom::new("Stiff Neck", 4).with_duration(12, DurationUnit::Hours),
                Symptom::new("Fever", 4).with_duration(12, DurationUnit::Hours),
            ],
        }
    }
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        input,
        json,
        knowledge,
    } = args;

    let config = AppConfig::load()?;
    let tables = knowledge.or(config.knowledge.tables);
    let engine = ClinicalReasoningEngine::new(load_knowledge(tables.as_deref())?);

    let request = read_intake_file(&input)?;
    let assessment = engine.assess_inputs(request.symptoms, request.context.as_ref());
    print_assessment(&assessment, json)
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { scenario, json } = args;
    let engine = ClinicalReasoningEngine::new(load_knowledge(None)?);

    let scenarios = match scenario {
        Some(scenario) => vec![scenario],
        None => DemoScenario::ALL.to_vec(),
    };

    println!("Clinical reasoning demo (decision support only, not a diagnosis)");
    for scenario in scenarios {
        println!("\n=== {} ===", scenario.title());
        let assessment = engine.assess(&scenario.symptoms(), None);
        print_assessment(&assessment, json)?;
    }
    Ok(())
}

pub(crate) fn run_knowledge_validate(args: ValidateArgs) -> Result<(), AppError> {
    let knowledge = load_knowledge(args.path.as_deref())?;
    for line in summarize_knowledge(&knowledge) {
        println!("{line}");
    }
    Ok(())
}

pub(crate) fn summarize_knowledge(knowledge: &KnowledgeBase) -> Vec<String> {
    vec![
        "Knowledge tables are valid".to_string(),
        format!("  Conditions: {}", knowledge.conditions().len()),
        format!("  Weighted symptoms: {}", knowledge.weights().rows().count()),
        format!("  Red-flag patterns: {}", knowledge.red_flag_patterns().len()),
        format!("  Follow-up questions: {}", knowledge.follow_up_templates().len()),
    ]
}

fn print_assessment(assessment: &ClinicalAssessment, json: bool) -> Result<(), AppError> {
    if json {
        let rendered = serde_json::to_string_pretty(assessment).map_err(AppError::Render)?;
        println!("{rendered}");
    } else {
        for line in render_assessment(assessment) {
            println!("{line}");
        }
    }
    Ok(())
}

pub(crate) fn render_assessment(assessment: &ClinicalAssessment) -> Vec<String> {
    let mut lines = Vec::new();

    let reported: Vec<String> = assessment
        .symptoms
        .iter()
        .map(|symptom| format!("{} ({})", symptom.name, symptom.severity.label()))
        .collect();
    lines.push(format!("Symptoms: {}", reported.join(", ")));
    lines.push(format!(
        "Urgency: {} - {}",
        assessment.overall_urgency.label(),
        assessment.urgency_reason
    ));

    if assessment.red_flag_alerts.is_empty() {
        lines.push("Red flags: none".to_string());
    } else {
        lines.push("Red flags:".to_string());
        for alert in &assessment.red_flag_alerts {
            let call = if alert.call_emergency {
                " [call emergency services]"
            } else {
                ""
            };
            lines.push(format!(
                "  [{}] {}{}: {}",
                alert.severity.label(),
                alert.condition,
                call,
                alert.action
            ));
        }
    }

    if assessment.possible_conditions.is_empty() {
        lines.push("Possible conditions: none matched".to_string());
    } else {
        lines.push("Possible conditions:".to_string());
        for condition in &assessment.possible_conditions {
            lines.push(format!(
                "  {:>3}%  {} ({})",
                condition.confidence,
                condition.name,
                condition.category.label()
            ));
            for reason in &condition.reasoning {
                lines.push(format!("         - {reason}"));
            }
        }
    }

    if !assessment.follow_up_questions.is_empty() {
        lines.push("Follow-up questions:".to_string());
        for question in &assessment.follow_up_questions {
            lines.push(format!("  ? {} [{}]", question.question, question.kind.label()));
        }
    }

    lines.push(assessment.confidence_explanation.clone());
    lines.push(assessment.differential_explanation.clone());

    lines.push("Next steps:".to_string());
    lines.extend(assessment.next_steps.iter().map(|step| format!("  - {step}")));
    lines.push("Self-care:".to_string());
    lines.extend(assessment.self_care_advice.iter().map(|tip| format!("  - {tip}")));
    lines.push("Seek help if:".to_string());
    lines.extend(assessment.when_to_seek_help.iter().map(|when| format!("  - {when}")));

    lines
}
