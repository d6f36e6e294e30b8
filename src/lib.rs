//! domain_records library: DNS record lookup and aggregation.
//!
//! Resolves A/NS/MX/TXT records for one or more domains against a configured
//! set of nameservers and assembles the answers into a deterministic nested
//! [`LookupReport`] suitable for plain-text or JSON rendering.
//!
//! # Example
//!
//! ```no_run
//! use clap::Parser;
//! use domain_records::{render_text, run_lookup, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::parse_from(["domain_records", "example.com", "-q", "a,ns"]);
//! let report = run_lookup(&config).await?;
//! print!("{}", render_text(&report));
//! # Ok(())
//! # }
//! ```
//!
//! Queries run strictly sequentially, one blocking round-trip at a time, with
//! a fixed per-query timeout and no retries or caching. Per-query failures
//! never abort a run; they appear in the report as fixed sentinel strings.

#![warn(missing_docs)]

pub mod aggregate;
pub mod config;
pub mod error_handling;
pub mod initialization;
pub mod lookup;
pub mod models;
pub mod render;
pub mod resolver;

// Re-export public API
pub use aggregate::{aggregate, resolve_qtypes, DnsBackend, QueryBackend};
pub use config::{Config, OutputFormat, Settings};
pub use lookup::RecordType;
pub use models::{DomainRecords, LookupReport, NameserverRecords, RecordSet};
pub use render::{render_json, render_text};
pub use run::run_lookup;

// Internal run module (ties settings loading to the aggregation engine)
mod run {
    use anyhow::{Context, Result};
    use log::debug;

    use crate::aggregate::{aggregate, resolve_qtypes, DnsBackend};
    use crate::config::{load_or_init_settings, Config};
    use crate::models::LookupReport;

    /// Runs the full lookup pipeline for one invocation.
    ///
    /// Loads the settings file (bootstrapping it on first run), resolves the
    /// effective record-type list from the `--qtype` override, and aggregates
    /// every (domain, nameserver, type) triple into a [`LookupReport`].
    ///
    /// # Errors
    ///
    /// Fails only on settings-file problems. Lookup failures are absorbed into
    /// the report as sentinel values and never fail the run.
    pub async fn run_lookup(config: &Config) -> Result<LookupReport> {
        let settings = load_or_init_settings(config.settings_file.as_deref())
            .context("Failed to load settings")?;
        let qtypes = resolve_qtypes(config.qtype.as_deref(), &settings.qtypes);

        debug!(
            "Looking up {} domain(s) against {} nameserver(s), types {:?}",
            config.domains.len(),
            settings.nameservers.len(),
            qtypes
        );

        let backend = DnsBackend::new();
        Ok(aggregate(&backend, &config.domains, &settings.nameservers, &qtypes).await)
    }
}
