#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use clap::{Parser, Subcommand};
use medassist_config::Config;
use medassist_core::Specialty;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod command;
mod render;

use command::{
    BookInput, BookStrategy, CommandStrategy, InfoStrategy, InitStrategy, InteractiveStrategy,
    MedsInput, MedsStrategy, SymptomInput, SymptomStrategy, TipsInput, TipsStrategy,
    VersionStrategy,
};

#[derive(Parser)]
#[command(name = "medassist")]
#[command(about = "Healthcare assistant: appointments, symptom checks, medicines and health tips", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Book an appointment with a specialist
    Book {
        /// cardiologist, dermatologist, neurologist or physician (or 1-4)
        #[arg(short, long)]
        specialty: Specialty,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Look up a symptom and get general precautions
    Symptom {
        /// Symptom description, e.g. "fever" or "chest pain"
        text: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Get a link to order medicines from our partner
    Meds {
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Get practical tips for a health topic
    Tips {
        /// Focus area, e.g. "sleep", "diabetes" or "weight loss"
        topic: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run the assistant interactively
    Interactive,
    /// Initialize configuration
    Init,
    /// Show configuration and check the summary endpoint
    Info,
    /// Show version
    Version,
}

/// Filter used when neither `RUST_LOG` nor the config gives a usable one.
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Build the filter from `RUST_LOG`, else from `level`, else [`DEFAULT_LOG_LEVEL`].
/// A bad directive never stops the CLI, so `init` and `info` stay usable.
fn log_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Install the global subscriber. Logs go to stderr so stdout only carries
/// assistant output.
fn init_tracing() -> anyhow::Result<()> {
    let level = Config::load_or_default()
        .map_or_else(|_| DEFAULT_LOG_LEVEL.to_string(), |config| config.logging.level);
    let filter = log_filter(&level);

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Book { specialty, json } => {
            BookStrategy.execute(BookInput { specialty, json }).await
        }
        Commands::Symptom { text, json } => {
            SymptomStrategy.execute(SymptomInput { text, json }).await
        }
        Commands::Meds { json } => MedsStrategy.execute(MedsInput { json }).await,
        Commands::Tips { topic, json } => TipsStrategy.execute(TipsInput { topic, json }).await,
        Commands::Interactive => InteractiveStrategy.execute(()).await,
        Commands::Init => InitStrategy.execute(()).await,
        Commands::Info => InfoStrategy.execute(()).await,
        Commands::Version => VersionStrategy.execute(()).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_cli_parses_specialty_by_name_and_number() {
        let Ok(cli) = Cli::try_parse_from(["medassist", "book", "--specialty", "cardiologist"])
        else {
            panic!("book by name rejected");
        };
        assert!(matches!(
            cli.command,
            Commands::Book {
                specialty: Specialty::Cardiologist,
                json: false
            }
        ));

        let Ok(cli) = Cli::try_parse_from(["medassist", "book", "-s", "2", "--json"]) else {
            panic!("book by number rejected");
        };
        assert!(matches!(
            cli.command,
            Commands::Book {
                specialty: Specialty::Dermatologist,
                json: true
            }
        ));
    }

    #[test]
    fn test_bad_log_level_falls_back_to_default() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        assert_eq!(
            log_filter("medassist=loud").max_level_hint(),
            Some(LevelFilter::WARN)
        );
        assert_eq!(log_filter("debug").max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_cli_rejects_unknown_specialty() {
        assert!(Cli::try_parse_from(["medassist", "book", "--specialty", "dentist"]).is_err());
    }

    #[test]
    fn test_cli_symptom_text() {
        let Ok(cli) = Cli::try_parse_from(["medassist", "symptom", "sore throat"]) else {
            panic!("symptom rejected");
        };
        assert!(matches!(cli.command, Commands::Symptom { ref text, .. } if text == "sore throat"));
    }
}
