//! Element Identifiers
//!
//! Fully-qualified, dot-separated names for configuration elements.

use std::fmt;
use std::str::FromStr;

use anyhow::{Result, bail};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const SEPARATOR: char = '.';

/// Kind of element an identifier points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdType {
    Type,
    Instance,
}

impl IdType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdType::Type => "type",
            IdType::Instance => "instance",
        }
    }
}

/// Fully-qualified element identifier, e.g. `zendesk.support_address.instance.inst`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElemId {
    adapter: String,
    type_name: String,
    id_type: IdType,
    name: Option<String>,
}

impl ElemId {
    /// Identifier of a type, e.g. `zendesk.support_address`
    pub fn for_type(adapter: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            adapter: adapter.into(),
            type_name: type_name.into(),
            id_type: IdType::Type,
            name: None,
        }
    }

    /// Identifier of a named instance of `type_name`
    pub fn for_instance(
        adapter: impl Into<String>,
        type_name: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            adapter: adapter.into(),
            type_name: type_name.into(),
            id_type: IdType::Instance,
            name: Some(name.into()),
        }
    }

    /// Parse an identifier from its full name
    pub fn from_full_name(full_name: &str) -> Result<Self> {
        let parts: Vec<&str> = full_name.split(SEPARATOR).collect();
        if parts.iter().any(|part| part.is_empty()) {
            bail!("invalid element id '{}': empty name segment", full_name);
        }

        match parts.as_slice() {
            [adapter, type_name] => Ok(Self::for_type(*adapter, *type_name)),
            [_, _, "instance"] => bail!("invalid element id '{}': missing instance name", full_name),
            [adapter, type_name, "instance", name @ ..] => {
                Ok(Self::for_instance(*adapter, *type_name, name.join(".")))
            }
            [_, _, id_type, ..] => bail!(
                "invalid element id '{}': unsupported id type '{}'",
                full_name,
                id_type
            ),
            _ => bail!(
                "invalid element id '{}': expected at least adapter and type name",
                full_name
            ),
        }
    }

    pub fn adapter(&self) -> &str {
        &self.adapter
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn id_type(&self) -> IdType {
        self.id_type
    }

    /// Instance name, `None` for type identifiers
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Dot-joined full name
    pub fn full_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ElemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SEPARATOR}{}", self.adapter, self.type_name)?;
        if let Some(name) = &self.name {
            write!(f, "{SEPARATOR}{}{SEPARATOR}{}", self.id_type.as_str(), name)?;
        }
        Ok(())
    }
}

impl FromStr for ElemId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_full_name(s)
    }
}

impl Serialize for ElemId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ElemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let full_name = String::deserialize(deserializer)?;
        Self::from_full_name(&full_name).map_err(serde::de::Error::custom)
    }
}
