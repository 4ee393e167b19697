use super::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies an action by the component type that owns it and the action name.
///
/// The textual form is `componentType.actionName`. The two parts are stored
/// separately so that nothing has to split strings to find the component.
/// Component type names may not contain a `.` and neither part may be empty,
/// so the textual form always reads back as the same pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ActionId {
    component: String,
    action: String,
}

impl ActionId {
    pub fn new(component: &str, action: &str) -> TPResult<Self> {
        ActionId::check_component_name(component)?;
        if action.is_empty() {
            return Err(TPError::InvalidActionId(format!("{component}.{action}")));
        }
        Ok(ActionId {
            component: component.to_owned(),
            action: action.to_owned(),
        })
    }

    /// Component type names must be non-empty and free of `.`.
    pub fn check_component_name(component: &str) -> TPResult<()> {
        if component.is_empty() || component.contains('.') {
            return Err(TPError::InvalidComponentName(component.to_owned()));
        }
        Ok(())
    }

    pub fn component(&self) -> &str {
        &self.component
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn same_component(&self, other: &ActionId) -> bool {
        self.component == other.component
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, fmtr: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmtr, "{}.{}", self.component, self.action)
    }
}

impl FromStr for ActionId {
    type Err = TPError;

    fn from_str(s: &str) -> TPResult<Self> {
        match s.split_once('.') {
            Some((component, action)) => ActionId::new(component, action)
                .map_err(|_| TPError::InvalidActionId(s.to_owned())),
            None => Err(TPError::InvalidActionId(s.to_owned())),
        }
    }
}

impl TryFrom<String> for ActionId {
    type Error = TPError;

    fn try_from(s: String) -> TPResult<Self> {
        s.parse()
    }
}

impl From<ActionId> for String {
    fn from(id: ActionId) -> String {
        id.to_string()
    }
}
