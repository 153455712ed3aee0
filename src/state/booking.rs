//! Strategy-call booking form and its confirmation

use super::assessment::{take_field, RecordError};
use super::forms::{
    ChoiceOption, FieldRule, FieldSpec, FieldValues, FormSchema, SchemaError, StepSpec,
    ValidationRule,
};
use chrono::{DateTime, Local};
use serde::Serialize;
use uuid::Uuid;

pub const TIME_SLOT_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption::new("tomorrow-10am", "Tomorrow 10:00 AM EST"),
    ChoiceOption::new("tomorrow-2pm", "Tomorrow 2:00 PM EST"),
    ChoiceOption::new("tomorrow-4pm", "Tomorrow 4:00 PM EST"),
    ChoiceOption::new("day-after-10am", "Day After Tomorrow 10:00 AM EST"),
    ChoiceOption::new("day-after-2pm", "Day After Tomorrow 2:00 PM EST"),
    ChoiceOption::new("day-after-4pm", "Day After Tomorrow 4:00 PM EST"),
    ChoiceOption::new("friday-10am", "This Friday 10:00 AM EST"),
    ChoiceOption::new("friday-2pm", "This Friday 2:00 PM EST"),
    ChoiceOption::new("friday-4pm", "This Friday 4:00 PM EST"),
];

pub const CALL_TYPE_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption::new("video", "Video Call (Zoom)"),
    ChoiceOption::new("phone", "Phone Call"),
];

/// What the user gets out of the call
pub const BOOKING_BENEFITS: [&str; 6] = [
    "Personalized PM career roadmap",
    "Identify your unique value proposition",
    "Overcome your specific challenges",
    "Learn about program options",
    "Get answers to all your questions",
    "No pressure, just valuable insights",
];

/// Single-step booking form
pub fn booking_schema() -> Result<FormSchema, SchemaError> {
    let schema = FormSchema::new(vec![StepSpec::new(
        "booking",
        "Schedule Your Call",
        vec![
            FieldSpec::text(
                "name",
                "Full Name",
                FieldRule::Required(ValidationRule::min_length(2, "Name is required")),
            )
            .with_placeholder("Your full name"),
            FieldSpec::text(
                "email",
                "Email Address",
                FieldRule::Required(ValidationRule::email("Invalid email address")),
            )
            .with_placeholder("your@email.com"),
            FieldSpec::text(
                "phone",
                "Phone Number",
                FieldRule::Required(ValidationRule::min_length(10, "Phone number is required")),
            )
            .with_placeholder("(555) 123-4567"),
            FieldSpec::choice(
                "time_slot",
                "Preferred Time",
                TIME_SLOT_OPTIONS,
                "Please select a time slot",
            ),
            FieldSpec::choice(
                "call_type",
                "Call Type",
                CALL_TYPE_OPTIONS,
                "Please select call type",
            ),
            FieldSpec::multiline("additional_info", "Anything else?", FieldRule::Exempt)
                .with_placeholder("Tell us anything that would help us prepare for your call"),
        ],
    )])?;

    Ok(schema.with_success_message("Your strategy call has been booked successfully!"))
}

fn label_of(options: &[ChoiceOption], value: &str) -> Option<&'static str> {
    options.iter().find(|o| o.value == value).map(|o| o.label)
}

/// A booked call as shown on the confirmation screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingConfirmation {
    pub reference: Uuid,
    pub booked_at: DateTime<Local>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub time_slot: &'static str,
    pub call_type: &'static str,
    pub additional_info: Option<String>,
}

impl BookingConfirmation {
    /// Read completed booking values; the slot and call type become their labels
    pub fn from_values(mut values: FieldValues) -> Result<Self, RecordError> {
        let time_slot = take_field(&mut values, "time_slot")?;
        let time_slot = label_of(TIME_SLOT_OPTIONS, &time_slot).ok_or(RecordError::Invalid {
            field: "time_slot",
            value: time_slot,
        })?;
        let call_type = take_field(&mut values, "call_type")?;
        let call_type = label_of(CALL_TYPE_OPTIONS, &call_type).ok_or(RecordError::Invalid {
            field: "call_type",
            value: call_type,
        })?;

        Ok(Self {
            reference: Uuid::new_v4(),
            booked_at: Local::now(),
            name: take_field(&mut values, "name")?,
            email: take_field(&mut values, "email")?,
            phone: take_field(&mut values, "phone")?,
            time_slot,
            call_type,
            additional_info: values
                .remove("additional_info")
                .filter(|info| !info.trim().is_empty()),
        })
    }

    /// First block of the reference, enough to quote on the phone
    pub fn short_reference(&self) -> String {
        self.reference.simple().to_string()[..8].to_uppercase()
    }
}
