use super::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Marks a component type as a place where plans can start.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct EntryComponent {
    pub name: String,
    #[serde(default)]
    pub state: Value,
    #[serde(default)]
    pub options: Value,
}

impl EntryComponent {
    pub fn new(name: &str) -> Self {
        EntryComponent {
            name: name.to_owned(),
            state: Value::Null,
            options: Value::Null,
        }
    }

    pub fn with_state(mut self, state: Value) -> Self {
        self.state = state;
        self
    }

    pub fn with_options(mut self, options: Value) -> Self {
        self.options = options;
        self
    }
}

#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct ComponentType {
    pub name: String,
    pub actions: Vec<String>,
    #[serde(default)]
    pub entry: Option<EntryComponent>,
}

impl ComponentType {
    pub fn new(name: &str) -> Self {
        ComponentType {
            name: name.to_owned(),
            actions: vec![],
            entry: None,
        }
    }

    pub fn with_entry(mut self, entry: EntryComponent) -> Self {
        self.entry = Some(entry);
        self
    }

    pub fn is_entry(&self) -> bool {
        self.entry.is_some()
    }

    pub fn action_ids(&self) -> impl Iterator<Item = TPResult<ActionId>> + '_ {
        self.actions.iter().map(move |a| ActionId::new(&self.name, a))
    }
}

/// Component types keyed by name, in the order the model provides them.
pub type ComponentTypes = IndexMap<String, ComponentType>;

/// A concrete component living in a model state.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct ComponentInstance {
    pub component_type: String,
    pub name: String,
    #[serde(default)]
    pub state: Value,
    #[serde(default)]
    pub options: Value,
}

impl ComponentInstance {
    pub fn new(component_type: &str, name: &str, state: Value) -> Self {
        ComponentInstance {
            component_type: component_type.to_owned(),
            name: name.to_owned(),
            state,
            options: Value::Null,
        }
    }

    pub fn from_entry(component_type: &str, entry: &EntryComponent) -> Self {
        ComponentInstance {
            component_type: component_type.to_owned(),
            name: entry.name.clone(),
            state: entry.state.clone(),
            options: entry.options.clone(),
        }
    }

    /// A field of the instance state, `Null` when missing.
    pub fn field(&self, field: &str) -> &Value {
        self.state.get(field).unwrap_or(&Value::Null)
    }
}

/// Finds the component type plans start from.
///
/// This is the first entry-designated type in the order of `types`, so the
/// result depends on the order the model provider returns.
pub fn find_entry_component(types: &ComponentTypes) -> TPResult<ComponentInstance> {
    let mut entries = types.values().filter_map(|t| t.entry.as_ref().map(|e| (t, e)));
    let (component_type, entry) = entries.next().ok_or(TPError::NoEntryComponent)?;
    for (ignored, _) in entries {
        log_debug!(
            "ignoring entry component type '{}', using '{}'",
            ignored.name,
            component_type.name
        );
    }
    Ok(ComponentInstance::from_entry(&component_type.name, entry))
}

#[cfg(test)]
mod component_tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn first_entry_component_wins() {
        let mut types = ComponentTypes::new();
        types.insert("Menu".into(), ComponentType::new("Menu"));
        types.insert(
            "Login".into(),
            ComponentType::new("Login")
                .with_entry(EntryComponent::new("login").with_state(json!({"user": null}))),
        );
        types.insert(
            "Home".into(),
            ComponentType::new("Home").with_entry(EntryComponent::new("home")),
        );

        let entry = find_entry_component(&types).unwrap();
        assert_eq!(entry.component_type, "Login");
        assert_eq!(entry.name, "login");
        assert_eq!(entry.field("user"), &Value::Null);
    }

    #[test]
    fn missing_entry_component() {
        let mut types = ComponentTypes::new();
        types.insert("Menu".into(), ComponentType::new("Menu"));
        assert_eq!(find_entry_component(&types), Err(TPError::NoEntryComponent));
    }

    #[test]
    fn action_ids_carry_the_component() {
        let mut t = ComponentType::new("Cart");
        t.actions.push("add".into());
        t.actions.push("checkout".into());
        let ids: Vec<_> = t.action_ids().collect::<TPResult<_>>().unwrap();
        assert_eq!(
            ids,
            vec![
                ActionId::new("Cart", "add").unwrap(),
                ActionId::new("Cart", "checkout").unwrap()
            ]
        );

        t.actions.push("".into());
        assert!(t.action_ids().collect::<TPResult<Vec<_>>>().is_err());
    }
}
