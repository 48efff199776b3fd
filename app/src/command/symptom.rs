use medassist_core::Error;
use tracing::info;

use crate::render;

/// Input parameters for the Symptom command strategy.
#[derive(Debug, Clone)]
pub struct SymptomInput {
    /// Free-text symptom description
    pub text: String,
    pub json: bool,
}

/// Strategy for the symptom check flow.
///
/// Prints a quick reference from the web, rule-based precautions and a web
/// search link. Blank input only produces a warning.
#[derive(Debug, Clone, Copy)]
pub struct SymptomStrategy;

impl super::CommandStrategy for SymptomStrategy {
    type Input = SymptomInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let assistant = super::init_assistant()?;

        let report = match assistant.check_symptom(&input.text).await {
            Ok(report) => report,
            Err(e @ Error::EmptyInput(_)) => {
                super::warn_user(&e);
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };
        info!("Symptom check returned {} precautions", report.precautions.len());

        if input.json {
            render::print_json(&report)?;
        } else {
            print!("{}", render::symptom(&report));
            println!("\nWould you like to book an appointment? Run 'medassist book --specialty <name>'.");
            print!("{}", render::footer());
        }
        Ok(())
    }
}
