use medassist_config::Config;
use medassist_core::rules::{PRECAUTIONS, TIPS};
use medassist_providers::WikipediaSummary;
use tracing::info;

/// Page looked up to check that the summary endpoint answers.
const PROBE_QUERY: &str = "Health";

/// Strategy for displaying configuration information.
///
/// This strategy outputs:
/// - Config file location and whether it exists
/// - Assistant settings (advice limit, dedup, booking window, links)
/// - Summary lookup settings and endpoint reachability
/// - Rule table sizes
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config_path = Config::config_path()?;
        let config = Config::load_or_default()?;

        println!("=== medassist Configuration ===\n");

        println!("Config File:");
        println!("  Path: {}", config_path.display());
        if config_path.exists() {
            println!("  Status: Loaded");
        } else {
            println!("  Status: Not found (using defaults, run 'medassist init')");
        }
        println!();

        println!("Assistant:");
        println!("  Max Advice: {}", config.assistant.max_advice);
        println!("  Tips Dedup: {}", config.assistant.tips_dedup);
        println!(
            "  Booking Window: {}-{} hours ahead",
            config.assistant.booking.min_hours_ahead, config.assistant.booking.max_hours_ahead
        );
        println!("  Search URL: {}", config.assistant.search_url);
        println!(
            "  Medicine Partner: {} ({})",
            config.assistant.medicine_partner, config.assistant.medicine_url
        );
        println!();

        println!("Rules:");
        println!("  Precaution Rules: {}", PRECAUTIONS.rules.len());
        println!("  Tip Rules: {}", TIPS.rules.len());
        println!();

        println!("Summary Lookup:");
        println!("  Enabled: {}", config.summary.enabled);
        println!("  Base URL: {}", config.summary.base_url);
        println!("  Timeout: {}s", config.summary.timeout_secs);
        println!("  Cache TTL: {}s", config.summary.cache_ttl_secs);
        println!("  Cache Capacity: {}", config.summary.cache_capacity);

        if config.summary.enabled {
            info!("Probing summary endpoint");
            let client = WikipediaSummary::new(&config.summary)?;
            match client.try_fetch(PROBE_QUERY).await {
                Ok(Some(_)) => println!("  Status: Reachable"),
                Ok(None) => println!("  Status: Reachable (empty extract)"),
                Err(e) => {
                    println!("  Status: Unavailable");
                    println!("  Error: {e}");
                }
            }
        }
        println!();

        println!("Logging:");
        println!("  Level: {} (RUST_LOG overrides)", config.logging.level);

        Ok(())
    }
}
