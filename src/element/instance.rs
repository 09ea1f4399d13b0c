//! Instance Elements
//!
//! A configuration element is an identifier plus an opaque bag of named field values.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::elem_id::{ElemId, IdType};

/// A single configuration instance (e.g. one support address)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceElement {
    #[serde(deserialize_with = "instance_elem_id")]
    pub elem_id: ElemId,
    #[serde(default)]
    pub value: Map<String, Value>,
}

impl InstanceElement {
    pub fn new(elem_id: ElemId, value: Map<String, Value>) -> Self {
        Self { elem_id, value }
    }

    /// Convenience constructor for `adapter.type_name.instance.name`
    pub fn with_name(
        adapter: &str,
        type_name: &str,
        name: &str,
        value: Map<String, Value>,
    ) -> Self {
        Self::new(ElemId::for_instance(adapter, type_name, name), value)
    }

    pub fn type_name(&self) -> &str {
        self.elem_id.type_name()
    }

    /// Raw field value, `None` when the field is absent
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.value.get(name)
    }

    /// Boolean field value; absent or non-boolean yields `None`
    pub fn bool_field(&self, name: &str) -> Option<bool> {
        self.field(name).and_then(Value::as_bool)
    }

    /// String field value; absent or non-string yields `None`
    pub fn str_field(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(Value::as_str)
    }
}

fn instance_elem_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ElemId, D::Error> {
    let elem_id = ElemId::deserialize(deserializer)?;
    if elem_id.id_type() != IdType::Instance {
        return Err(serde::de::Error::custom(format!(
            "element id '{}' does not name an instance",
            elem_id
        )));
    }
    Ok(elem_id)
}
