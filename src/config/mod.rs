use std::env;
use std::fmt;
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the assessment service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub reference: ReferenceConfig,
    pub comparator: ComparatorConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let survey_path = env::var("HIES_DATA_PATH")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let agreement_threshold = threshold_var("AGREEMENT_THRESHOLD", 5.0)?;
        let low_confidence_threshold = threshold_var("LOW_CONFIDENCE_THRESHOLD", 0.5)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            reference: ReferenceConfig { survey_path },
            comparator: ComparatorConfig {
                agreement_threshold,
                low_confidence_threshold,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn threshold_var(key: &'static str, default: f64) -> Result<f64, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<f64>()
            .map_err(|source| ConfigError::InvalidThreshold { key, source }),
        Err(_) => Ok(default),
    }
}

/// Location of the HIES survey extract backing the reference store.
#[derive(Debug, Clone)]
pub struct ReferenceConfig {
    pub survey_path: Option<PathBuf>,
}

/// Thresholds applied by the dual-method comparator.
#[derive(Debug, Clone)]
pub struct ComparatorConfig {
    pub agreement_threshold: f64,
    pub low_confidence_threshold: f64,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidThreshold {
        key: &'static str,
        source: std::num::ParseFloatError,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidThreshold { key, .. } => {
                write!(f, "{key} must be a decimal number")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidThreshold { source, .. } => Some(source),
        }
    }
}
