//! Ordered step layout of a form

use super::field::FieldSpec;
use std::collections::HashSet;
use thiserror::Error;

/// Default notification shown when a submission fails
pub const DEFAULT_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Problems detected while assembling a schema
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("form has no steps")]
    NoSteps,
    #[error("step '{0}' has no fields")]
    EmptyStep(&'static str),
    #[error("field '{0}' is declared more than once")]
    DuplicateField(&'static str),
}

/// One screen of a multi-step form
#[derive(Debug, Clone)]
pub struct StepSpec {
    pub id: &'static str,
    pub title: &'static str,
    pub fields: Vec<FieldSpec>,
}

impl StepSpec {
    pub fn new(id: &'static str, title: &'static str, fields: Vec<FieldSpec>) -> Self {
        Self { id, title, fields }
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Immutable, validated sequence of steps plus the form's notification copy
#[derive(Debug, Clone)]
pub struct FormSchema {
    steps: Vec<StepSpec>,
    success_message: &'static str,
    failure_message: &'static str,
}

impl FormSchema {
    /// Build a schema; every step needs a field and field names must be unique
    pub fn new(steps: Vec<StepSpec>) -> Result<Self, SchemaError> {
        if steps.is_empty() {
            return Err(SchemaError::NoSteps);
        }

        let mut seen = HashSet::new();
        for step in &steps {
            if step.fields.is_empty() {
                return Err(SchemaError::EmptyStep(step.id));
            }
            for field in &step.fields {
                if !seen.insert(field.name) {
                    return Err(SchemaError::DuplicateField(field.name));
                }
            }
        }

        Ok(Self {
            steps,
            success_message: "Submitted successfully!",
            failure_message: DEFAULT_FAILURE_MESSAGE,
        })
    }

    pub fn with_success_message(mut self, message: &'static str) -> Self {
        self.success_message = message;
        self
    }

    pub fn steps(&self) -> &[StepSpec] {
        &self.steps
    }

    pub fn step(&self, index: usize) -> Option<&StepSpec> {
        self.steps.get(index)
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn last_step(&self) -> usize {
        self.steps.len() - 1
    }

    /// Look up a field in any step
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.steps.iter().find_map(|step| step.field(name))
    }

    pub fn success_message(&self) -> &'static str {
        self.success_message
    }

    pub fn failure_message(&self) -> &'static str {
        self.failure_message
    }
}
