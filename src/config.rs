use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub directions: DirectionsSettings,
    #[serde(default)]
    pub sheet: SheetSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}

#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsSettings {
    #[serde(default = "default_directions_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub api_key: String,
}

impl Default for DirectionsSettings {
    fn default() -> Self {
        Self {
            endpoint: default_directions_endpoint(),
            api_key: String::new(),
        }
    }
}

fn default_directions_endpoint() -> String {
    "https://apis-navi.kakaomobility.com/v1/waypoints/directions".to_string()
}

/// Bottom-sheet geometry; snap points default to `[min, default, max]`
#[derive(Debug, Clone, Deserialize)]
pub struct SheetSettings {
    #[serde(default = "default_min_height")]
    pub min_height: f64,
    #[serde(default = "default_sheet_height")]
    pub default_height: f64,
    #[serde(default = "default_max_height")]
    pub max_height: f64,
    #[serde(default)]
    pub snap_points: Option<Vec<f64>>,
}

impl Default for SheetSettings {
    fn default() -> Self {
        Self {
            min_height: default_min_height(),
            default_height: default_sheet_height(),
            max_height: default_max_height(),
            snap_points: None,
        }
    }
}

fn default_min_height() -> f64 {
    100.0
}
fn default_sheet_height() -> f64 {
    320.0
}
fn default_max_height() -> f64 {
    680.0
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Later sources override earlier ones:
    /// 1. Defaults baked into the structs
    /// 2. config/default.toml, then config/local.toml
    /// 3. Environment variables prefixed with MATZIP__
    ///    (e.g. MATZIP__SERVER__PORT -> server.port)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::with_prefix("MATZIP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = substitute_env_vars(settings)?;

        let settings: Self = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("MATZIP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Self = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject geometry the panel controller cannot work with
    fn validate(&self) -> Result<(), ConfigError> {
        let sheet = &self.sheet;
        let finite = sheet.min_height.is_finite()
            && sheet.default_height.is_finite()
            && sheet.max_height.is_finite();
        if !finite
            || sheet.min_height >= sheet.max_height
            || sheet.default_height < sheet.min_height
            || sheet.default_height > sheet.max_height
        {
            return Err(ConfigError::Message(format!(
                "invalid sheet geometry: min {} / default {} / max {}",
                sheet.min_height, sheet.default_height, sheet.max_height
            )));
        }
        if let Some(points) = &sheet.snap_points {
            if points.iter().any(|p| !p.is_finite()) {
                return Err(ConfigError::Message(
                    "sheet snap_points must be finite".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Pick up the directions API key from common environment spellings
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let api_key = env::var("DIRECTIONS_API_KEY")
        .or_else(|_| env::var("MATZIP__DIRECTIONS__API_KEY"))
        .ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(key) = api_key {
        builder = builder.set_override("directions.api_key", key)?;
    }

    builder.build()
}
