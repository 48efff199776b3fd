use medassist_core::Error;

use crate::render;

/// Input parameters for the Tips command strategy.
#[derive(Debug, Clone)]
pub struct TipsInput {
    /// Wellness focus area, e.g. "sleep" or "cholesterol"
    pub topic: String,
    pub json: bool,
}

/// Strategy for the health tips flow.
#[derive(Debug, Clone, Copy)]
pub struct TipsStrategy;

impl super::CommandStrategy for TipsStrategy {
    type Input = TipsInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let assistant = super::init_assistant()?;

        let report = match assistant.health_tips(&input.topic).await {
            Ok(report) => report,
            Err(e @ Error::EmptyInput(_)) => {
                super::warn_user(&e);
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        if input.json {
            render::print_json(&report)?;
        } else {
            print!("{}", render::tips(&report));
            print!("{}", render::footer());
        }
        Ok(())
    }
}
