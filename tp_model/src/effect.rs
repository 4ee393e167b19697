use crate::ModelState;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tp_domain::*;

/// What happens to the state when an action is taken.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub enum Effect {
    /// Sets a field of the acting component.
    Assign(String, Value),
    /// Adds a new component instance.
    Create(ComponentInstance),
    /// Removes the acting component.
    RemoveSelf,
}

impl Effect {
    pub fn assign(field: &str, value: Value) -> Self {
        Effect::Assign(field.to_owned(), value)
    }

    pub fn create(component_type: &str, name: &str, state: Value) -> Self {
        Effect::Create(ComponentInstance::new(component_type, name, state))
    }

    pub fn apply(
        &self,
        acting: &str,
        state: &mut ModelState,
        types: &ComponentTypes,
    ) -> TPResult<()> {
        match self {
            Effect::Assign(field, value) => {
                let component = state.component_mut(acting).ok_or_else(|| {
                    TPError::Model(format!("component '{acting}' no longer exists"))
                })?;
                if component.state.is_null() {
                    component.state = Value::Object(Map::new());
                }
                match component.state.as_object_mut() {
                    Some(fields) => {
                        fields.insert(field.clone(), value.clone());
                        Ok(())
                    }
                    None => Err(TPError::Model(format!(
                        "cannot assign '{field}' on '{acting}', its state is not an object"
                    ))),
                }
            }
            Effect::Create(component) => {
                if !types.contains_key(&component.component_type) {
                    return Err(TPError::UnknownComponentType(
                        component.component_type.clone(),
                    ));
                }
                state.add_component(component.clone())
            }
            Effect::RemoveSelf => {
                state.remove_component(acting);
                Ok(())
            }
        }
    }
}
