use medassist_core::Specialty;

use crate::render;

/// Input parameters for the Book command strategy.
#[derive(Debug, Clone, Copy)]
pub struct BookInput {
    pub specialty: Specialty,
    pub json: bool,
}

/// Strategy for booking a (mock) appointment with a specialist.
#[derive(Debug, Clone, Copy)]
pub struct BookStrategy;

impl super::CommandStrategy for BookStrategy {
    type Input = BookInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let assistant = super::init_assistant()?;
        let booking = assistant.book(input.specialty)?;

        if input.json {
            render::print_json(&booking)?;
        } else {
            print!("{}", render::booking(&booking));
        }
        Ok(())
    }
}
