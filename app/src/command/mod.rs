//! Static strategy pattern for CLI commands.
//!
//! Each subcommand is a separate zero-sized strategy type with its own input
//! type, dispatched statically from `main`.

use medassist_config::Config;
use medassist_core::{Assistant, NoSummary, SummarySource};
use medassist_providers::{CachedSummary, WikipediaSummary};
use std::sync::Arc;
use tracing::info;

mod book;
mod info;
mod init;
mod interactive;
mod meds;
mod symptom;
mod tips;
mod version;

pub use book::{BookInput, BookStrategy};
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use interactive::InteractiveStrategy;
pub use meds::{MedsInput, MedsStrategy};
pub use symptom::{SymptomInput, SymptomStrategy};
pub use tips::{TipsInput, TipsStrategy};
pub use version::VersionStrategy;

/// The assistant as every command uses it: summary lookups go through the
/// TTL cache, or nowhere when lookups are disabled.
pub type SharedAssistant = Assistant<Arc<dyn SummarySource>>;

/// Build the summary source described by `config.summary`.
fn summary_source(config: &Config) -> anyhow::Result<Arc<dyn SummarySource>> {
    if !config.summary.enabled {
        info!("Summary lookups disabled");
        return Ok(Arc::new(NoSummary));
    }

    let client = WikipediaSummary::new(&config.summary)?;
    info!(
        "Summary cache: ttl={}s, capacity={}",
        config.summary.cache_ttl_secs, config.summary.cache_capacity
    );
    Ok(Arc::new(CachedSummary::from_config(client, &config.summary)))
}

/// Load the config (or defaults) and build the assistant from it.
fn init_assistant() -> anyhow::Result<SharedAssistant> {
    let config = Config::load_or_default()?;
    build_assistant(&config)
}

fn build_assistant(config: &Config) -> anyhow::Result<SharedAssistant> {
    let source = summary_source(config)?;
    Ok(Assistant::new(source, &config.assistant)?)
}

/// Print a user input warning the way the front-end shows it.
fn warn_user(message: &impl std::fmt::Display) {
    eprintln!("⚠️  {message}");
}

/// Core trait defining the contract for all command strategies.
///
/// # Design Principles
/// - **Static dispatch**: All calls are monomorphized at compile time
/// - **Type safety**: Each strategy defines its own input type via associated type
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
