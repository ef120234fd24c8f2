pub mod eligibility;
pub mod hies;
