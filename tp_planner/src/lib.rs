pub mod bookkeeping;
pub use bookkeeping::*;

pub mod selector;
pub use selector::*;

pub mod loop_detector;
pub use loop_detector::*;

pub mod backtrack;
pub use backtrack::*;

pub mod duplicate;
pub use duplicate::*;

pub mod reduce;
pub use reduce::*;

pub mod hill_climbing;
pub use hill_climbing::*;
