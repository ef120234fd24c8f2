//! Deterministic subsidy-eligibility assessment for Malaysian households.
//!
//! The crate pairs a burden-based scoring engine, driven by DOSM household
//! income reference tables, with a comparator that reconciles the
//! deterministic score against an externally produced contextual assessment.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;

use config::AppConfig;
use error::AppError;
use workflows::eligibility::EligibilityAssessmentService;

/// Load configuration, install telemetry, and build the assessment service.
pub fn bootstrap() -> Result<EligibilityAssessmentService, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    tracing::info!(
        environment = ?config.environment,
        "starting eligibility assessment service"
    );
    Ok(EligibilityAssessmentService::from_config(&config))
}
