use std::sync::OnceLock;

use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    // find-notes fallbacks
    #[serde(default = "default_list_window_days")]
    pub list_window_days: i64,
    #[serde(default = "default_list_limit")]
    pub list_limit: usize,

    // build
    pub app_version: Option<String>,
    #[serde(default = "default_local")]
    pub source: String,
    #[serde(default = "default_local")]
    pub git_commit: String,
    #[serde(default = "default_local")]
    pub pipeline_id: String,
    #[serde(default = "default_local")]
    pub version: String,
}

// Keeps `now - Duration::days(window)` representable for chrono.
const MAX_LIST_WINDOW_DAYS: i64 = 36_500;

fn default_port() -> u16 {
    4000
}

fn default_list_window_days() -> i64 {
    30
}

fn default_list_limit() -> usize {
    100
}

fn default_local() -> String {
    "local".into()
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let config = envy::from_env::<Self>().unwrap();

        config.validated()
    }

    fn validated(self) -> Self {
        assert!(
            (0..=MAX_LIST_WINDOW_DAYS).contains(&self.list_window_days),
            "LIST_WINDOW_DAYS must be within 0..={MAX_LIST_WINDOW_DAYS}, got {}",
            self.list_window_days
        );
        self
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

pub fn config() -> &'static Config {
    CONFIG.get_or_init(|| Config::from_env())
}

#[cfg(test)]
pub fn config_override<F>(override_config: F) -> &'static Config
where
    F: FnOnce(Config) -> Config,
{
    CONFIG.get_or_init(|| override_config(Config::from_env()))
}
