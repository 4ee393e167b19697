//! Preconditions of actions.
//!
//! A condition is evaluated for one component instance (the one that would
//! perform the action) within a model state.
use crate::ModelState;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use tp_domain::*;

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub enum Condition {
    AND(Vec<Condition>),
    OR(Vec<Condition>),
    NOT(Box<Condition>),
    TRUE,
    FALSE,
    /// A field of the acting component equals the value. Missing fields are null.
    EQ(String, Value),
    NEQ(String, Value),
    /// Some component of the given type exists in the state.
    EXISTS(String),
}

impl Default for Condition {
    fn default() -> Self {
        Condition::TRUE
    }
}

impl Condition {
    pub fn equals(field: &str, value: Value) -> Self {
        Condition::EQ(field.to_owned(), value)
    }

    pub fn not_equals(field: &str, value: Value) -> Self {
        Condition::NEQ(field.to_owned(), value)
    }

    pub fn exists(component_type: &str) -> Self {
        Condition::EXISTS(component_type.to_owned())
    }

    pub fn eval(&self, component: &ComponentInstance, state: &ModelState) -> bool {
        match self {
            Condition::AND(x) => x.iter().all(|c| c.eval(component, state)),
            Condition::OR(x) => x.iter().any(|c| c.eval(component, state)),
            Condition::NOT(x) => !x.eval(component, state),
            Condition::TRUE => true,
            Condition::FALSE => false,
            Condition::EQ(field, value) => component.field(field) == value,
            Condition::NEQ(field, value) => component.field(field) != value,
            Condition::EXISTS(t) => state.of_type(t).next().is_some(),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, fmtr: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: String = match &self {
            Condition::AND(x) => {
                let children: Vec<_> = x.iter().map(|c| format!("{c}")).collect();
                format!("({})", children.join(" && "))
            }
            Condition::OR(x) => {
                let children: Vec<_> = x.iter().map(|c| format!("{c}")).collect();
                format!("({})", children.join(" || "))
            }
            Condition::NOT(c) => format!("!({c})"),
            Condition::TRUE => "TRUE".into(),
            Condition::FALSE => "FALSE".into(),
            Condition::EQ(f, v) => format!("{f} = {v}"),
            Condition::NEQ(f, v) => format!("{f} != {v}"),
            Condition::EXISTS(t) => format!("exists {t}"),
        };

        write!(fmtr, "{}", &s)
    }
}
