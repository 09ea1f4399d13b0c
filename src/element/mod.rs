//! Configuration Elements
//!
//! The minimal element model the validators read: identifiers and instance snapshots.

pub mod elem_id;
pub mod instance;

pub use elem_id::{ElemId, IdType};
pub use instance::InstanceElement;
