//! `sidenav inject` command implementation.

use std::borrow::Cow;
use std::path::PathBuf;

use clap::Args;
use sidenav_analytics::{Snippet, is_dev_host};
use sidenav_config::Config;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the inject command.
#[derive(Args)]
pub(crate) struct InjectArgs {
    /// HTML file to inject into.
    input: PathBuf,

    /// Hostname the page is served from (decides whether to inject).
    #[arg(long)]
    hostname: String,

    /// Path to configuration file (default: auto-discover sidenav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output file (default: rewrite the input file in place).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl InjectArgs {
    /// Execute the inject command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the input cannot be read,
    /// or the document has no body to inject into.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = Config::load(self.config.as_deref(), None)?;
        let analytics = config.require_analytics()?;
        let snippet = Snippet::new(&analytics.script_url, &analytics.website_id);

        let html = std::fs::read_to_string(&self.input)?;
        let injected = snippet.inject(&html, &self.hostname)?;

        let changed = matches!(injected, Cow::Owned(_));
        let target = self.output.as_ref().unwrap_or(&self.input);

        if changed {
            std::fs::write(target, injected.as_ref())?;
            output.success(&format!(
                "Injected analytics snippet into {}",
                target.display()
            ));
        } else {
            if is_dev_host(&self.hostname) {
                output.info(&format!(
                    "Development host '{}', nothing to inject",
                    self.hostname
                ));
            } else {
                output.info("Snippet already present, nothing to inject");
            }
            // Still materialize the output file when one was requested
            if let Some(out_path) = &self.output {
                std::fs::write(out_path, injected.as_ref())?;
            }
        }

        Ok(())
    }
}
