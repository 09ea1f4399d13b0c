//! Change Validators
//!
//! Deployment-time validation of proposed configuration changes.
//!
//! This library provides:
//! - A minimal element and change model for the validators to read
//! - Pure change validators, such as the default support address rule
//! - A registry that runs enabled validators and aggregates their errors
//! - Configuration management

pub mod change;
pub mod config;
pub mod element;
pub mod validation;

// Re-exports for clean public API
pub use change::{Change, ChangeAction};
pub use config::Config;
pub use element::{ElemId, InstanceElement};
pub use validation::{
    ChangeError, ChangeValidator, Severity, ValidationReport, ValidatorRegistry,
    default_support_address_validator,
};
