//! Menu-driven session reproducing the four-screen assistant.

use medassist_core::{Assistant, Error, Event, Screen, SessionState, Specialty, SummarySource};
use std::io::{BufRead, Write};
use tracing::{debug, info};
use uuid::Uuid;

use crate::render;

/// Strategy for the interactive assistant session on stdin/stdout.
#[derive(Debug, Clone, Copy)]
pub struct InteractiveStrategy;

impl super::CommandStrategy for InteractiveStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let assistant = super::init_assistant()?;
        let stdin = std::io::stdin();
        let mut session = Session::new(&assistant, stdin.lock(), std::io::stdout());
        session.run().await
    }
}

/// One interactive session: owns the UI state and the terminal streams.
pub struct Session<'a, S, R, W> {
    assistant: &'a Assistant<S>,
    input: R,
    output: W,
    state: SessionState,
    id: Uuid,
}

impl<'a, S, R, W> Session<'a, S, R, W>
where
    S: SummarySource,
    R: BufRead,
    W: Write,
{
    pub fn new(assistant: &'a Assistant<S>, input: R, output: W) -> Self {
        Self {
            assistant,
            input,
            output,
            state: SessionState::new(),
            id: Uuid::now_v7(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        info!("Starting assistant session {}", self.id);
        write!(self.output, "{}\n{}", render::greeting(), render::main_menu())?;

        loop {
            let Some(line) = self.prompt("> ")? else {
                break;
            };
            let choice = line.trim();

            if matches!(choice, "exit" | "quit" | "q") {
                break;
            }
            if choice.is_empty() {
                continue;
            }
            if matches!(choice, "menu" | "help") {
                write!(self.output, "{}", render::main_menu())?;
                continue;
            }

            let Some(event) = Event::from_menu(choice) else {
                writeln!(self.output, "Unknown option '{choice}'. Pick 1-4 or q.")?;
                continue;
            };

            self.state = self.state.apply(event);
            debug!("Session {} moved to {:?}", self.id, self.state.screen);
            self.show_screen().await?;
            write!(self.output, "\n{}", render::main_menu())?;
        }

        write!(self.output, "\n{}", render::footer())?;
        info!("Assistant session {} ended", self.id);
        Ok(())
    }

    /// Read one line; `None` at end of input. Only the line terminator is stripped.
    fn prompt(&mut self, label: &str) -> std::io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn warn(&mut self, message: &impl std::fmt::Display) -> std::io::Result<()> {
        writeln!(self.output, "⚠️  {message}")
    }

    async fn show_screen(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "\n### {}", self.state.screen.title())?;
        match self.state.screen {
            Screen::Home => {}
            Screen::Book => self.book()?,
            Screen::Symptom => self.symptom().await?,
            Screen::Meds => {
                let redirect = self.assistant.order_medicines();
                write!(self.output, "{}", render::medicines(&redirect))?;
            }
            Screen::Tips => self.tips().await?,
        }
        Ok(())
    }

    fn book(&mut self) -> anyhow::Result<()> {
        write!(self.output, "{}", render::specialty_menu())?;
        let Some(choice) = self.prompt("Speciality: ")? else {
            return Ok(());
        };

        let specialty = match choice.parse::<Specialty>() {
            Ok(specialty) => specialty,
            Err(e) => {
                self.warn(&e)?;
                return Ok(());
            }
        };

        self.state = self.state.apply(Event::ChooseSpecialty(specialty));
        if let Some(specialty) = self.state.specialty {
            let booking = self.assistant.book(specialty)?;
            write!(self.output, "{}", render::booking(&booking))?;
        }
        Ok(())
    }

    async fn symptom(&mut self) -> anyhow::Result<()> {
        let Some(text) =
            self.prompt("Type your symptom (e.g., fever, chest pain, rash, headache): ")?
        else {
            return Ok(());
        };

        let report = match self.assistant.check_symptom(&text).await {
            Ok(report) => report,
            Err(e @ Error::EmptyInput(_)) => {
                self.warn(&e)?;
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };
        write!(self.output, "{}", render::symptom(&report))?;

        let answer = self.prompt("\nWould you like to book an appointment? [y/N] ")?;
        if answer.is_some_and(|a| matches!(a.trim().to_lowercase().as_str(), "y" | "yes")) {
            self.state = self.state.apply(Event::BookFromSymptom);
            writeln!(self.output, "\n### {}", self.state.screen.title())?;
            self.book()?;
        }
        Ok(())
    }

    async fn tips(&mut self) -> anyhow::Result<()> {
        let Some(topic) = self.prompt(
            "Tell me your focus area (e.g., sleep, diabetes, cholesterol, weight loss): ",
        )?
        else {
            return Ok(());
        };

        match self.assistant.health_tips(&topic).await {
            Ok(report) => write!(self.output, "{}", render::tips(&report))?,
            Err(e @ Error::EmptyInput(_)) => self.warn(&e)?,
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }
}
