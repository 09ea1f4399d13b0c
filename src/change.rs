//! Proposed changes to configuration elements.
//!
//! A change carries the element snapshot before and/or after the proposed
//! deployment. Changes are produced by an external differ; this crate only
//! reads them.

use serde::{Deserialize, Serialize};

use crate::element::InstanceElement;

/// Kind of change, without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeAction {
    Add,
    Modify,
    Remove,
}

/// A proposed addition, modification or removal of an element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action")]
pub enum Change {
    #[serde(rename = "add")]
    Addition { after: InstanceElement },
    #[serde(rename = "modify")]
    Modification {
        before: InstanceElement,
        after: InstanceElement,
    },
    #[serde(rename = "remove")]
    Removal { before: InstanceElement },
}

impl Change {
    /// Build the change matching the given snapshots, `None` if both are absent
    pub fn from_snapshots(
        before: Option<InstanceElement>,
        after: Option<InstanceElement>,
    ) -> Option<Self> {
        match (before, after) {
            (None, Some(after)) => Some(Change::Addition { after }),
            (Some(before), Some(after)) => Some(Change::Modification { before, after }),
            (Some(before), None) => Some(Change::Removal { before }),
            (None, None) => None,
        }
    }

    pub fn addition(after: InstanceElement) -> Self {
        Change::Addition { after }
    }

    pub fn action(&self) -> ChangeAction {
        match self {
            Change::Addition { .. } => ChangeAction::Add,
            Change::Modification { .. } => ChangeAction::Modify,
            Change::Removal { .. } => ChangeAction::Remove,
        }
    }

    pub fn before(&self) -> Option<&InstanceElement> {
        match self {
            Change::Addition { .. } => None,
            Change::Modification { before, .. } | Change::Removal { before } => Some(before),
        }
    }

    pub fn after(&self) -> Option<&InstanceElement> {
        match self {
            Change::Addition { after } | Change::Modification { after, .. } => Some(after),
            Change::Removal { .. } => None,
        }
    }

    /// The element this change is about: the after snapshot, or before for removals
    pub fn data(&self) -> &InstanceElement {
        match self {
            Change::Addition { after } | Change::Modification { after, .. } => after,
            Change::Removal { before } => before,
        }
    }

    pub fn is_addition_or_modification(&self) -> bool {
        self.after().is_some()
    }
}
