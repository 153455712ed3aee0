//! Assessment form: option sets, schema and the completed record

use super::forms::{
    ChoiceOption, FieldRule, FieldSpec, FieldValues, FormSchema, SchemaError, StepSpec,
    ValidationRule,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Current PM experience level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Experience {
    CompleteBeginner,
    SomeExposure,
    JuniorRole,
    SomePmTasks,
}

impl Experience {
    pub const ALL: [Self; 4] = [
        Self::CompleteBeginner,
        Self::SomeExposure,
        Self::JuniorRole,
        Self::SomePmTasks,
    ];

    pub const fn value(self) -> &'static str {
        match self {
            Self::CompleteBeginner => "complete-beginner",
            Self::SomeExposure => "some-exposure",
            Self::JuniorRole => "junior-role",
            Self::SomePmTasks => "some-pm-tasks",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::CompleteBeginner => "Complete beginner - No PM experience",
            Self::SomeExposure => "Some exposure - Worked with PMs before",
            Self::JuniorRole => "In a junior role - Want to transition to PM",
            Self::SomePmTasks => "Doing some PM tasks - Want to formalize it",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.value() == value)
    }
}

/// Professional background
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Background {
    Engineering,
    Design,
    Business,
    Marketing,
    Consulting,
    Other,
}

impl Background {
    pub const ALL: [Self; 6] = [
        Self::Engineering,
        Self::Design,
        Self::Business,
        Self::Marketing,
        Self::Consulting,
        Self::Other,
    ];

    pub const fn value(self) -> &'static str {
        match self {
            Self::Engineering => "engineering",
            Self::Design => "design",
            Self::Business => "business",
            Self::Marketing => "marketing",
            Self::Consulting => "consulting",
            Self::Other => "other",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Engineering => "Engineering/Technical",
            Self::Design => "Design/UX",
            Self::Business => "Business/Strategy",
            Self::Marketing => "Marketing/Growth",
            Self::Consulting => "Consulting",
            Self::Other => "Other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.value() == value)
    }
}

/// Primary PM goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Goal {
    FirstPmJob,
    TransitionInternally,
    BetterPmJob,
    PmSkills,
}

impl Goal {
    pub const ALL: [Self; 4] = [
        Self::FirstPmJob,
        Self::TransitionInternally,
        Self::BetterPmJob,
        Self::PmSkills,
    ];

    pub const fn value(self) -> &'static str {
        match self {
            Self::FirstPmJob => "first-pm-job",
            Self::TransitionInternally => "transition-internally",
            Self::BetterPmJob => "better-pm-job",
            Self::PmSkills => "pm-skills",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstPmJob => "Land my first PM job",
            Self::TransitionInternally => "Transition to PM within my current company",
            Self::BetterPmJob => "Get a better PM job at a top company",
            Self::PmSkills => "Develop stronger PM skills and confidence",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.value() == value)
    }
}

/// How soon the user wants to make the move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeline {
    #[serde(rename = "asap")]
    Asap,
    #[serde(rename = "3-months")]
    ThreeMonths,
    #[serde(rename = "6-months")]
    SixMonths,
    #[serde(rename = "1-year")]
    OneYear,
}

impl Timeline {
    pub const ALL: [Self; 4] = [
        Self::Asap,
        Self::ThreeMonths,
        Self::SixMonths,
        Self::OneYear,
    ];

    pub const fn value(self) -> &'static str {
        match self {
            Self::Asap => "asap",
            Self::ThreeMonths => "3-months",
            Self::SixMonths => "6-months",
            Self::OneYear => "1-year",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Asap => "ASAP - I need to make this transition now",
            Self::ThreeMonths => "Within 3 months",
            Self::SixMonths => "Within 6 months",
            Self::OneYear => "Within a year",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.value() == value)
    }
}

const fn option_of_experience(e: Experience) -> ChoiceOption {
    ChoiceOption::new(e.value(), e.label())
}

const fn option_of_background(b: Background) -> ChoiceOption {
    ChoiceOption::new(b.value(), b.label())
}

const fn option_of_goal(g: Goal) -> ChoiceOption {
    ChoiceOption::new(g.value(), g.label())
}

const fn option_of_timeline(t: Timeline) -> ChoiceOption {
    ChoiceOption::new(t.value(), t.label())
}

pub const EXPERIENCE_OPTIONS: &[ChoiceOption] = &[
    option_of_experience(Experience::CompleteBeginner),
    option_of_experience(Experience::SomeExposure),
    option_of_experience(Experience::JuniorRole),
    option_of_experience(Experience::SomePmTasks),
];

pub const BACKGROUND_OPTIONS: &[ChoiceOption] = &[
    option_of_background(Background::Engineering),
    option_of_background(Background::Design),
    option_of_background(Background::Business),
    option_of_background(Background::Marketing),
    option_of_background(Background::Consulting),
    option_of_background(Background::Other),
];

pub const GOAL_OPTIONS: &[ChoiceOption] = &[
    option_of_goal(Goal::FirstPmJob),
    option_of_goal(Goal::TransitionInternally),
    option_of_goal(Goal::BetterPmJob),
    option_of_goal(Goal::PmSkills),
];

pub const TIMELINE_OPTIONS: &[ChoiceOption] = &[
    option_of_timeline(Timeline::Asap),
    option_of_timeline(Timeline::ThreeMonths),
    option_of_timeline(Timeline::SixMonths),
    option_of_timeline(Timeline::OneYear),
];

/// The four-step lead-qualification form
pub fn assessment_schema() -> Result<FormSchema, SchemaError> {
    let schema = FormSchema::new(vec![
        StepSpec::new(
            "basics",
            "Let's Start With The Basics",
            vec![
                FieldSpec::text(
                    "name",
                    "What's your name?",
                    FieldRule::Required(ValidationRule::min_length(
                        2,
                        "Name must be at least 2 characters",
                    )),
                )
                .with_placeholder("Enter your full name"),
                FieldSpec::text(
                    "email",
                    "What's your email address?",
                    FieldRule::Required(ValidationRule::email("Invalid email address")),
                )
                .with_placeholder("Enter your email address"),
            ],
        ),
        StepSpec::new(
            "experience",
            "What's Your Current Experience?",
            vec![
                FieldSpec::choice(
                    "experience",
                    "What's your current experience level?",
                    EXPERIENCE_OPTIONS,
                    "Please select your experience level",
                ),
                FieldSpec::choice(
                    "background",
                    "What's your professional background?",
                    BACKGROUND_OPTIONS,
                    "Please select your background",
                ),
            ],
        ),
        StepSpec::new(
            "goals",
            "What Are Your PM Goals?",
            vec![
                FieldSpec::choice(
                    "goal",
                    "What's your primary PM goal?",
                    GOAL_OPTIONS,
                    "Please select your goal",
                ),
                FieldSpec::choice(
                    "timeline",
                    "What's your timeline?",
                    TIMELINE_OPTIONS,
                    "Please select your timeline",
                ),
            ],
        ),
        StepSpec::new(
            "challenges",
            "What's Your Biggest Challenge?",
            vec![FieldSpec::multiline(
                "challenge",
                "What's your biggest challenge in becoming a PM?",
                FieldRule::Required(ValidationRule::min_length(
                    10,
                    "Please describe your biggest challenge",
                )),
            )
            .with_placeholder(
                "Describe what's holding you back from landing your ideal PM role...",
            )],
        ),
    ])?;

    Ok(schema.with_success_message("Assessment completed successfully!"))
}

/// Completed values could not be read as an assessment
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("missing field '{0}'")]
    Missing(&'static str),
    #[error("'{value}' is not a valid {field}")]
    Invalid { field: &'static str, value: String },
}

/// Typed view of a completed assessment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub name: String,
    pub email: String,
    pub experience: Experience,
    pub background: Background,
    pub goal: Goal,
    pub challenge: String,
    pub timeline: Timeline,
}

pub(crate) fn take_field(
    values: &mut FieldValues,
    field: &'static str,
) -> Result<String, RecordError> {
    values.remove(field).ok_or(RecordError::Missing(field))
}

fn parse_field<T>(
    values: &mut FieldValues,
    field: &'static str,
    parse: fn(&str) -> Option<T>,
) -> Result<T, RecordError> {
    let value = take_field(values, field)?;
    parse(&value).ok_or(RecordError::Invalid { field, value })
}

impl TryFrom<FieldValues> for AssessmentRecord {
    type Error = RecordError;

    fn try_from(mut values: FieldValues) -> Result<Self, Self::Error> {
        Ok(Self {
            name: take_field(&mut values, "name")?,
            email: take_field(&mut values, "email")?,
            experience: parse_field(&mut values, "experience", Experience::parse)?,
            background: parse_field(&mut values, "background", Background::parse)?,
            goal: parse_field(&mut values, "goal", Goal::parse)?,
            challenge: take_field(&mut values, "challenge")?,
            timeline: parse_field(&mut values, "timeline", Timeline::parse)?,
        })
    }
}

impl AssessmentRecord {
    /// "Engineering/Technical • Complete beginner - No PM experience"
    pub fn background_summary(&self) -> String {
        format!("{} • {}", self.background.label(), self.experience.label())
    }

    pub fn goal_summary(&self) -> String {
        format!("{} • {}", self.goal.label(), self.timeline.label())
    }
}
