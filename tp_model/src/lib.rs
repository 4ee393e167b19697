//! An in-memory component model.
//!
//! Component types own actions. An action is possible when some instance of
//! its component type satisfies the action's guard; taking it applies the
//! effects on behalf of the first such instance.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tp_domain::*;

pub mod condition;
pub use condition::*;

pub mod effect;
pub use effect::*;

pub mod state;
pub use state::*;

pub mod definition;
pub use definition::*;

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ActionDefinition {
    pub id: ActionId,
    pub guard: Condition,
    pub effects: Vec<Effect>,
}

#[derive(Debug, PartialEq, Clone, Default)]
pub struct ComponentModel {
    types: ComponentTypes,
    actions: IndexMap<ActionId, ActionDefinition>,
}

impl ComponentModel {
    pub fn new() -> Self {
        ComponentModel::default()
    }

    pub fn from_definition(definition: ModelDefinition) -> TPResult<Self> {
        let mut model = ComponentModel::new();
        for t in &definition.component_types {
            model.add_component_type(&t.name, t.entry.clone())?;
        }
        for t in definition.component_types {
            for a in t.actions {
                model.add_action(&t.name, &a.name, a.guard, a.effects)?;
            }
        }
        Ok(model)
    }

    pub fn from_json_str(s: &str) -> TPResult<Self> {
        let definition: ModelDefinition = serde_json::from_str(s)?;
        ComponentModel::from_definition(definition)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> TPResult<Self> {
        let s = std::fs::read_to_string(path)?;
        ComponentModel::from_json_str(&s)
    }

    /// Adds a component type, replacing the entry designation if it exists.
    pub fn add_component_type(
        &mut self,
        name: &str,
        entry: Option<EntryComponent>,
    ) -> TPResult<()> {
        ActionId::check_component_name(name)?;
        self.types
            .entry(name.to_owned())
            .or_insert_with(|| ComponentType::new(name))
            .entry = entry;
        Ok(())
    }

    pub fn add_action(
        &mut self,
        component_type: &str,
        name: &str,
        guard: Condition,
        effects: Vec<Effect>,
    ) -> TPResult<ActionId> {
        let t = self
            .types
            .get_mut(component_type)
            .ok_or_else(|| TPError::UnknownComponentType(component_type.to_owned()))?;
        let id = ActionId::new(component_type, name)?;
        if !t.actions.iter().any(|a| a == name) {
            t.actions.push(name.to_owned());
        }
        self.actions.insert(
            id.clone(),
            ActionDefinition {
                id: id.clone(),
                guard,
                effects,
            },
        );
        Ok(id)
    }

    pub fn action(&self, id: &ActionId) -> Option<&ActionDefinition> {
        self.actions.get(id)
    }

    /// The first instance that may perform the action.
    fn acting_component<'a>(
        &self,
        action: &ActionDefinition,
        state: &'a ModelState,
    ) -> Option<&'a ComponentInstance> {
        state.components.values().find(|c| {
            c.component_type == action.id.component() && action.guard.eval(c, state)
        })
    }
}

impl ModelProvider for ComponentModel {
    type State = ModelState;

    fn component_types(&self) -> TPResult<ComponentTypes> {
        Ok(self.types.clone())
    }

    fn new_state(&self) -> ModelState {
        ModelState::new()
    }

    fn create_component(
        &self,
        state: &mut ModelState,
        component: &ComponentInstance,
    ) -> TPResult<()> {
        if !self.types.contains_key(&component.component_type) {
            return Err(TPError::UnknownComponentType(
                component.component_type.clone(),
            ));
        }
        state.add_component(component.clone())
    }

    fn possible_actions(&self, node: &SearchNode<ModelState>) -> TPResult<IndexSet<ActionId>> {
        Ok(self
            .actions
            .values()
            .filter(|a| self.acting_component(a, &node.state).is_some())
            .map(|a| a.id.clone())
            .collect())
    }

    fn apply_effects(&self, action: &ActionId, node: &mut SearchNode<ModelState>) -> TPResult<()> {
        let definition = self
            .actions
            .get(action)
            .ok_or_else(|| TPError::UnknownAction(action.clone()))?;
        let acting = self
            .acting_component(definition, &node.state)
            .map(|c| c.name.clone())
            .ok_or_else(|| TPError::Model(format!("'{action}' is not possible in this state")))?;

        for effect in &definition.effects {
            effect.apply(&acting, &mut node.state, &self.types)?;
        }
        node.test_case.push(TestCaseEntry::Action {
            action: action.clone(),
            component: acting,
        });
        Ok(())
    }
}

#[cfg(test)]
mod model_tests {
    use super::*;
    use serde_json::json;

    fn door_model() -> ComponentModel {
        let mut m = ComponentModel::new();
        m.add_component_type(
            "Door",
            Some(EntryComponent::new("front").with_state(json!({"open": false}))),
        )
        .unwrap();
        m.add_action(
            "Door",
            "open",
            Condition::equals("open", json!(false)),
            vec![Effect::assign("open", json!(true))],
        )
        .unwrap();
        m.add_action(
            "Door",
            "close",
            Condition::equals("open", json!(true)),
            vec![Effect::assign("open", json!(false))],
        )
        .unwrap();
        m
    }

    fn seeded(m: &ComponentModel) -> SearchNode<ModelState> {
        let entry = find_entry_component(&m.component_types().unwrap()).unwrap();
        let mut node = SearchNode::new(m.new_state());
        m.create_component(&mut node.state, &entry).unwrap();
        node.actions = m.possible_actions(&node).unwrap();
        node
    }

    #[test]
    fn guards_decide_what_is_possible() {
        let m = door_model();
        let mut node = seeded(&m);
        assert_eq!(node.actions.iter().collect::<Vec<_>>(), vec![&ActionId::new("Door", "open").unwrap()]);

        let open = ActionId::new("Door", "open").unwrap();
        node.push_action(open.clone());
        m.apply_effects(&open, &mut node).unwrap();
        node.actions = m.possible_actions(&node).unwrap();
        assert_eq!(node.actions.iter().collect::<Vec<_>>(), vec![&ActionId::new("Door", "close").unwrap()]);
        assert_eq!(
            node.test_case,
            vec![TestCaseEntry::Action {
                action: open,
                component: "front".into()
            }]
        );
    }

    #[test]
    fn applying_an_impossible_or_unknown_action_fails() {
        let m = door_model();
        let mut node = seeded(&m);
        let close = ActionId::new("Door", "close").unwrap();
        assert!(matches!(m.apply_effects(&close, &mut node), Err(TPError::Model(_))));

        let kick = ActionId::new("Door", "kick").unwrap();
        assert_eq!(
            m.apply_effects(&kick, &mut node),
            Err(TPError::UnknownAction(kick.clone()))
        );
    }

    #[test]
    fn actions_need_a_known_component_type() {
        let mut m = ComponentModel::new();
        let e = m.add_action("Ghost", "boo", Condition::TRUE, vec![]);
        assert_eq!(e, Err(TPError::UnknownComponentType("Ghost".into())));

        let mut state = ModelState::new();
        let e = m.create_component(&mut state, &ComponentInstance::new("Ghost", "g", json!(null)));
        assert_eq!(e, Err(TPError::UnknownComponentType("Ghost".into())));
    }

    #[test]
    fn names_must_read_back_from_action_ids() {
        let mut m = ComponentModel::new();
        assert_eq!(
            m.add_component_type("Shop.Cart", None),
            Err(TPError::InvalidComponentName("Shop.Cart".into()))
        );
        assert!(m.component_types().unwrap().is_empty());

        m.add_component_type("Shop", None).unwrap();
        assert!(m.add_action("Shop", "", Condition::TRUE, vec![]).is_err());
        assert!(m.discovered_actions().unwrap().is_empty());

        let json = r#"{"componentTypes": [{"name": "", "actions": [{"name": "a"}]}]}"#;
        assert_eq!(
            ComponentModel::from_json_str(json),
            Err(TPError::InvalidComponentName("".into()))
        );
    }

    #[test]
    fn discovered_actions_follow_definition_order() {
        let m = door_model();
        let discovered: Vec<_> = m
            .discovered_actions()
            .unwrap()
            .into_iter()
            .map(|a| a.to_string())
            .collect();
        assert_eq!(discovered, vec!["Door.open", "Door.close"]);
    }
}
