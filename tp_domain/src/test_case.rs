use super::*;
use serde::{Deserialize, Serialize};

/// One record of the replay log kept alongside a plan.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TestCaseEntry {
    /// A component was created with this name, state and options.
    Component(ComponentInstance),
    /// An action was taken on the named component instance.
    Action { action: ActionId, component: String },
}

pub type TestCase = Vec<TestCaseEntry>;
