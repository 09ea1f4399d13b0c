//! Built-in change validators.

pub mod default_support_address;

pub use default_support_address::{SUPPORT_ADDRESS_TYPE_NAME, default_support_address_validator};

use crate::validation::engine::ChangeValidator;

/// Every built-in rule, in the order it runs
pub const BUILTIN_VALIDATORS: &[(&str, ChangeValidator)] = &[(
    "default_support_address",
    default_support_address_validator as ChangeValidator,
)];
