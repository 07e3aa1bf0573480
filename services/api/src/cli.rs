use crate::demo::{run_assess, run_demo, run_knowledge_validate, AssessArgs, DemoArgs, ValidateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use clinical_reasoning::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Clinical Reasoning Triage",
    about = "Run the symptom triage service or assess symptoms from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Assess a JSON symptom file and print the result
    Assess(AssessArgs),
    /// Walk through the reference triage scenarios
    Demo(DemoArgs),
    /// Inspect knowledge-base tables
    Knowledge {
        #[command(subcommand)]
        command: KnowledgeCommand,
    },
}

#[derive(Subcommand, Debug)]
enum KnowledgeCommand {
    /// Validate a table set and print a summary
    Validate(ValidateArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Assess(args) => run_assess(args),
        Command::Demo(args) => run_demo(args),
        Command::Knowledge {
            command: KnowledgeCommand::Validate(args),
        } => run_knowledge_validate(args),
    }
}
