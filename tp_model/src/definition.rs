//! A serialisable description of a component model.

use crate::{Condition, Effect};
use serde::{Deserialize, Serialize};
use tp_domain::*;

#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDefinition {
    pub component_types: Vec<ComponentTypeDefinition>,
}

#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct ComponentTypeDefinition {
    pub name: String,
    #[serde(default)]
    pub entry: Option<EntryComponent>,
    #[serde(default)]
    pub actions: Vec<ActionSpec>,
}

#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct ActionSpec {
    pub name: String,
    #[serde(default)]
    pub guard: Condition,
    #[serde(default)]
    pub effects: Vec<Effect>,
}
