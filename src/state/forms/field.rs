//! Form field specs and validation rules

use regex::Regex;
use std::sync::OnceLock;

/// One entry of an enumerated choice field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceOption {
    pub value: &'static str,
    pub label: &'static str,
}

impl ChoiceOption {
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }
}

/// How a field is edited and rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line free text
    Text,
    /// Multi-line free text
    Multiline,
    /// Single selection from a closed option set
    Choice(&'static [ChoiceOption]),
}

/// Predicate part of a validation rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// At least `n` characters
    MinLength(usize),
    /// Matches the email-address grammar
    Email,
    /// Non-empty selection that belongs to the option set
    OneOf(&'static [ChoiceOption]),
}

/// A static predicate plus the message shown when it fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRule {
    pub rule: Rule,
    pub message: &'static str,
}

fn email_regex() -> Option<&'static Regex> {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL
        .get_or_init(|| {
            Regex::new(
                r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$",
            )
            .ok()
        })
        .as_ref()
}

/// Local part may not start with a dot and no dots may repeat
fn is_email(value: &str) -> bool {
    !value.starts_with('.')
        && !value.contains("..")
        && email_regex().is_some_and(|re| re.is_match(value))
}

impl ValidationRule {
    pub const fn min_length(len: usize, message: &'static str) -> Self {
        Self {
            rule: Rule::MinLength(len),
            message,
        }
    }

    pub const fn email(message: &'static str) -> Self {
        Self {
            rule: Rule::Email,
            message,
        }
    }

    pub const fn one_of(options: &'static [ChoiceOption], message: &'static str) -> Self {
        Self {
            rule: Rule::OneOf(options),
            message,
        }
    }

    /// Check a value, returning the failure message on mismatch
    pub fn check(&self, value: &str) -> Result<(), &'static str> {
        let passes = match self.rule {
            Rule::MinLength(len) => value.chars().count() >= len,
            Rule::Email => is_email(value),
            Rule::OneOf(options) => {
                !value.is_empty() && options.iter().any(|option| option.value == value)
            }
        };
        if passes {
            Ok(())
        } else {
            Err(self.message)
        }
    }
}

/// Whether a field takes part in validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    Required(ValidationRule),
    /// Never validated; never blocks navigation
    Exempt,
}

/// Static description of one named field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
    pub rule: FieldRule,
}

impl FieldSpec {
    /// Create a single-line text field
    pub const fn text(name: &'static str, label: &'static str, rule: FieldRule) -> Self {
        Self {
            name,
            label,
            placeholder: "",
            kind: FieldKind::Text,
            rule,
        }
    }

    /// Create a multi-line text field
    pub const fn multiline(name: &'static str, label: &'static str, rule: FieldRule) -> Self {
        Self {
            name,
            label,
            placeholder: "",
            kind: FieldKind::Multiline,
            rule,
        }
    }

    /// Create a choice field validated against its own option set
    pub const fn choice(
        name: &'static str,
        label: &'static str,
        options: &'static [ChoiceOption],
        message: &'static str,
    ) -> Self {
        Self {
            name,
            label,
            placeholder: "",
            kind: FieldKind::Choice(options),
            rule: FieldRule::Required(ValidationRule::one_of(options, message)),
        }
    }

    pub const fn with_placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self.kind, FieldKind::Multiline)
    }

    pub fn options(&self) -> &'static [ChoiceOption] {
        match self.kind {
            FieldKind::Choice(options) => options,
            FieldKind::Text | FieldKind::Multiline => &[],
        }
    }

    /// Run this field's rule; exempt fields always pass
    pub fn check(&self, value: &str) -> Result<(), &'static str> {
        match &self.rule {
            FieldRule::Required(rule) => rule.check(value),
            FieldRule::Exempt => Ok(()),
        }
    }

    /// Label of the option matching `value`, or the raw value for free text
    pub fn display_value<'a>(&self, value: &'a str) -> &'a str {
        self.options()
            .iter()
            .find(|option| option.value == value)
            .map_or(value, |option| option.label)
    }

    /// The option after (or before) `current`, wrapping around
    pub fn cycle_option(&self, current: &str, forward: bool) -> Option<&'static str> {
        let options = self.options();
        if options.is_empty() {
            return None;
        }
        let next = match options.iter().position(|option| option.value == current) {
            None if forward => 0,
            None => options.len() - 1,
            Some(idx) if forward => (idx + 1) % options.len(),
            Some(0) => options.len() - 1,
            Some(idx) => idx - 1,
        };
        Some(options[next].value)
    }
}
