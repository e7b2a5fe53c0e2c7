//! Runtime configuration.
//!
//! Defaults are compiled in. An optional `dealership.{toml,json,yaml}` file in
//! the working directory and `DEALERSHIP_*` environment variables override
//! them, in that order:
//!
//! ```bash
//! DEALERSHIP_RECOMMENDATION_DEPTH=3 RUST_LOG=info cargo run
//! ```

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DealershipConfig {
    /// Capacity of the actor's request channel.
    pub channel_buffer: usize,
    /// How many recommendations to show by default.
    pub recommendation_depth: usize,
    /// Catalog file with one `Brand_Model` name per entry.
    pub names_path: String,
    /// Catalog file with one price per entry, parallel to `names_path`.
    pub prices_path: String,
    /// Seed the demo cars, customers and test drives on startup.
    pub seed_sample_data: bool,
}

impl Default for DealershipConfig {
    fn default() -> Self {
        Self {
            channel_buffer: 32,
            recommendation_depth: crate::recommender::DEFAULT_DEPTH,
            names_path: "Text Files/Cars_Name.txt".to_string(),
            prices_path: "Text Files/Cars_Price.txt".to_string(),
            seed_sample_data: true,
        }
    }
}

impl DealershipConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name("dealership").required(false))
            .add_source(config::Environment::with_prefix("DEALERSHIP").try_parsing(true))
            .build()?
            .try_deserialize()
    }
}
