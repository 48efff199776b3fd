use crate::render;

/// Input parameters for the Meds command strategy.
#[derive(Debug, Clone, Copy)]
pub struct MedsInput {
    pub json: bool,
}

/// Strategy for the medicine ordering redirect.
///
/// Nothing is ordered here; the user is pointed at the partner pharmacy.
#[derive(Debug, Clone, Copy)]
pub struct MedsStrategy;

impl super::CommandStrategy for MedsStrategy {
    type Input = MedsInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let assistant = super::init_assistant()?;
        let redirect = assistant.order_medicines();

        if input.json {
            render::print_json(&redirect)?;
        } else {
            print!("{}", render::medicines(&redirect));
        }
        Ok(())
    }
}
