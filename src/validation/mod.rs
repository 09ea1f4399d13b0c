//! Change Validation
//!
//! Validators inspect proposed changes and report policy violations before deployment.

pub mod engine;
pub mod registry;
pub mod rules;

pub use engine::{ChangeError, ChangeValidator, Severity, ValidationReport};
pub use registry::ValidatorRegistry;
pub use rules::default_support_address_validator;
