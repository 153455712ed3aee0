//! Multi-step form layer
//!
//! Static field/step descriptions, the step-by-step controller that walks a
//! user through them, and the keyboard session that wraps a controller.

mod controller;
mod field;
mod schema;
mod session;

pub use controller::{Advance, FieldValues, FormPhase, StepFormController};
pub use field::{ChoiceOption, FieldKind, FieldRule, FieldSpec, ValidationRule};
pub use schema::{FormSchema, SchemaError, StepSpec};
pub use session::{FormKind, FormSession};
