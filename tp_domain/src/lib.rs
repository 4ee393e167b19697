//! The test planner domain

#[macro_use]
pub mod logging;

pub mod action_id;
pub use action_id::*;

pub mod set_relations;

pub mod component;
pub use component::*;

pub mod test_case;
pub use test_case::*;

pub mod node;
pub use node::*;

pub mod model;
pub use model::*;

pub mod config;
pub use config::*;

pub use indexmap::{IndexMap, IndexSet};
pub use rustc_hash::{FxHashMap, FxHashSet};

use std::fmt::Display;
use thiserror::Error;

pub type TPResult<T> = std::result::Result<T, TPError>;

#[derive(Debug, PartialEq, Clone, Error)]
pub enum TPError {
    #[error("no component type is marked as an entry component")]
    NoEntryComponent,
    #[error("no possible actions in the starting state of '{component}' (plan {plan_index})")]
    NoActionsInStartingState { component: String, plan_index: usize },
    #[error("generated a duplicate plan: plan {plan_index} covers the same actions as plan {duplicate_of}")]
    DuplicatePlan {
        plan_index: usize,
        duplicate_of: usize,
    },
    #[error("unknown component type '{0}'")]
    UnknownComponentType(String),
    #[error("unknown action '{0}'")]
    UnknownAction(ActionId),
    #[error("invalid action identifier '{0}', expected 'componentType.actionName'")]
    InvalidActionId(String),
    #[error("invalid component type name '{0}', it must be non-empty and contain no '.'")]
    InvalidComponentName(String),
    #[error("model error: {0}")]
    Model(String),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("planning was cancelled")]
    Cancelled,
    #[error("planning deadline exceeded")]
    DeadlineExceeded,
}

impl std::convert::From<serde_json::Error> for TPError {
    fn from(e: serde_json::Error) -> Self {
        TPError::Config(e.to_string())
    }
}

impl std::convert::From<std::io::Error> for TPError {
    fn from(e: std::io::Error) -> Self {
        TPError::Config(e.to_string())
    }
}

impl TPError {
    pub fn from_any<T: Display>(x: T) -> TPError {
        TPError::Model(format!("{}", x))
    }
}

#[cfg(test)]
mod tests_domain {
    use super::*;

    #[test]
    fn fatal_errors_name_component_and_plan() {
        let e = TPError::NoActionsInStartingState {
            component: "Login".into(),
            plan_index: 3,
        };
        let msg = e.to_string();
        assert!(msg.contains("Login"));
        assert!(msg.contains("plan 3"));

        let e = TPError::DuplicatePlan {
            plan_index: 4,
            duplicate_of: 1,
        };
        assert_eq!(
            e.to_string(),
            "generated a duplicate plan: plan 4 covers the same actions as plan 1"
        );
    }

    #[test]
    fn json_errors_become_config_errors() {
        let err: TPError = serde_json::from_str::<u32>("not a number").unwrap_err().into();
        assert!(matches!(err, TPError::Config(_)));
    }
}
