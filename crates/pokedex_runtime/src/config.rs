//! Command-line configuration for the Pokedex runtime.

use pokedex_storage::{ConceptConfig, IdAllocation};

use crate::error::{Error, Result};

/// Default `tracing` filter directive when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Runtime configuration parsed from arguments.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    /// Populate both concepts with the demo records.
    pub seed_demo_data: bool,
    /// Filter directive for the log subscriber.
    pub log_filter: String,
    /// Skip the demo walkthrough and only report the final state.
    pub quiet: bool,
    /// Print usage and exit.
    pub show_help: bool,
    /// Print version and exit.
    pub show_version: bool,
    /// Configuration shared by both concept services.
    pub concepts: ConceptConfig,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            seed_demo_data: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            quiet: false,
            show_help: false,
            show_version: false,
            concepts: ConceptConfig::default(),
        }
    }
}

impl RuntimeConfig {
    /// Parses command-line arguments. The first argument is the program name.
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter().map(Into::into).skip(1);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => config.show_help = true,
                "-V" | "--version" => config.show_version = true,
                "-q" | "--quiet" => config.quiet = true,
                "--no-seed" => config.seed_demo_data = false,
                "--sequential-ids" => {
                    config.concepts = config
                        .concepts
                        .with_id_allocation(IdAllocation::Sequential);
                }
                "--log" => {
                    config.log_filter = args
                        .next()
                        .ok_or_else(|| Error::config("--log requires a value"))?;
                }
                other => return Err(Error::config(format!("unknown option: {other}"))),
            }
        }

        Ok(config)
    }

    /// Builder method to enable or disable demo seeding.
    #[must_use]
    pub fn with_seed_demo_data(mut self, seed: bool) -> Self {
        self.seed_demo_data = seed;
        self
    }

    /// Builder method to set the concept configuration.
    #[must_use]
    pub fn with_concepts(mut self, concepts: ConceptConfig) -> Self {
        self.concepts = concepts;
        self
    }
}
