use serde::{Deserialize, Serialize};
use std::fmt;
use tp_domain::*;

/// The component instances that exist at some point of a plan, in creation order.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct ModelState {
    pub components: IndexMap<String, ComponentInstance>,
}

impl ModelState {
    pub fn new() -> Self {
        ModelState::default()
    }

    pub fn add_component(&mut self, component: ComponentInstance) -> TPResult<()> {
        if self.components.contains_key(&component.name) {
            return Err(TPError::Model(format!(
                "a component named '{}' already exists",
                component.name
            )));
        }
        self.components.insert(component.name.clone(), component);
        Ok(())
    }

    pub fn remove_component(&mut self, name: &str) -> Option<ComponentInstance> {
        self.components.shift_remove(name)
    }

    pub fn component(&self, name: &str) -> Option<&ComponentInstance> {
        self.components.get(name)
    }

    pub fn component_mut(&mut self, name: &str) -> Option<&mut ComponentInstance> {
        self.components.get_mut(name)
    }

    pub fn of_type<'a>(
        &'a self,
        component_type: &'a str,
    ) -> impl Iterator<Item = &'a ComponentInstance> + 'a {
        self.components
            .values()
            .filter(move |c| c.component_type == component_type)
    }
}

impl fmt::Display for ModelState {
    fn fmt(&self, fmtr: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: Vec<_> = self
            .components
            .values()
            .map(|c| format!("{} ({}): {}", c.name, c.component_type, c.state))
            .collect();
        write!(fmtr, "{}", s.join("\n"))
    }
}
