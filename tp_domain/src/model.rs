use super::*;

/// The component model the planner searches over.
///
/// The planner never looks inside `State`; it only asks the model which
/// actions are possible and to apply their effects.
pub trait ModelProvider {
    type State: Clone;

    /// Component types in the order the model defines them.
    fn component_types(&self) -> TPResult<ComponentTypes>;

    /// A state with no components in it.
    fn new_state(&self) -> Self::State;

    /// Adds a component instance to the state.
    fn create_component(
        &self,
        state: &mut Self::State,
        component: &ComponentInstance,
    ) -> TPResult<()>;

    /// Actions enabled in the node's state, in a stable order.
    fn possible_actions(&self, node: &SearchNode<Self::State>) -> TPResult<IndexSet<ActionId>>;

    /// Applies the effects of `action` to the node's state and records it in
    /// the node's test case.
    fn apply_effects(&self, action: &ActionId, node: &mut SearchNode<Self::State>)
        -> TPResult<()>;

    /// Every action the model defines.
    fn discovered_actions(&self) -> TPResult<IndexSet<ActionId>> {
        let types = self.component_types()?;
        types.values().flat_map(|t| t.action_ids()).collect()
    }
}
