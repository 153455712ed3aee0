//! Maps a completed assessment to a personalized roadmap

use crate::state::{AssessmentRecord, Background, Experience, Timeline};

/// Items every plan starts with, in order
pub const BASE_PLAN: [&str; 5] = [
    "Complete PM Fundamentals Bootcamp",
    "Build 2-3 Portfolio Projects",
    "Practice Case Study Interviews",
    "Optimize LinkedIn & Resume",
    "Network with Industry Professionals",
];

/// Shown when the timeline is not one we know
pub const DEFAULT_TIMELINE_MESSAGE: &str = "We'll create a custom timeline that works for you.";

fn experience_bonus(experience: Experience) -> &'static [&'static str] {
    match experience {
        Experience::CompleteBeginner => &["PM 101: Core Concepts Workshop"],
        Experience::SomeExposure => &["Transition Strategy Session"],
        Experience::JuniorRole => &["Internal Mobility Playbook"],
        Experience::SomePmTasks => &["Role Formalization Guide"],
    }
}

fn background_bonus(background: Background) -> &'static [&'static str] {
    match background {
        Background::Engineering => &["Technical PM Specialization"],
        Background::Design => &["Design-to-PM Transition Guide"],
        Background::Business => &["Strategic PM Focus Track"],
        Background::Marketing => &["Growth PM Specialization"],
        Background::Consulting => &["Consulting-to-PM Playbook"],
        Background::Other => &["Custom Career Mapping"],
    }
}

impl Timeline {
    pub const fn message(self) -> &'static str {
        match self {
            Self::Asap => {
                "With your urgent timeline, we recommend our intensive 6-week accelerated program."
            }
            Self::ThreeMonths => {
                "Perfect! Our standard 12-week program aligns perfectly with your 3-month timeline."
            }
            Self::SixMonths => {
                "Great timeline! You'll have time for our comprehensive program plus additional specialization."
            }
            Self::OneYear => {
                "Excellent! Your timeline allows for our full program plus advanced certifications."
            }
        }
    }
}

/// Base list, then the experience bonus, then the background bonus
pub fn personalized_plan(experience: Experience, background: Background) -> Vec<&'static str> {
    BASE_PLAN
        .iter()
        .chain(experience_bonus(experience))
        .chain(background_bonus(background))
        .copied()
        .collect()
}

/// Timeline message for a raw form value; unknown values get the default
pub fn timeline_message(timeline: &str) -> &'static str {
    Timeline::parse(timeline).map_or(DEFAULT_TIMELINE_MESSAGE, Timeline::message)
}

/// Everything the results screen shows for one assessment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub plan: Vec<&'static str>,
    pub timeline_message: &'static str,
}

impl Recommendation {
    pub fn for_record(record: &AssessmentRecord) -> Self {
        Self {
            plan: personalized_plan(record.experience, record.background),
            timeline_message: record.timeline.message(),
        }
    }

    /// Plain-text roadmap for the clipboard
    pub fn to_plain_text(&self, record: &AssessmentRecord) -> String {
        let mut out = format!("{}'s PM Roadmap\n\n", record.name);
        out.push_str(&format!("Background: {}\n", record.background_summary()));
        out.push_str(&format!("Goal: {}\n", record.goal_summary()));
        out.push_str(&format!("Timeline: {}\n\n", self.timeline_message));
        for (i, item) in self.plan.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, item));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(experience: Experience, background: Background, timeline: Timeline) -> AssessmentRecord {
        AssessmentRecord {
            name: "Jon".into(),
            email: "a@b.com".into(),
            experience,
            background,
            goal: crate::state::Goal::FirstPmJob,
            challenge: "I don't know how to start".into(),
            timeline,
        }
    }

    #[test]
    fn test_plan_order_is_base_then_experience_then_background() {
        let plan = personalized_plan(Experience::CompleteBeginner, Background::Engineering);
        assert_eq!(
            plan,
            vec![
                "Complete PM Fundamentals Bootcamp",
                "Build 2-3 Portfolio Projects",
                "Practice Case Study Interviews",
                "Optimize LinkedIn & Resume",
                "Network with Industry Professionals",
                "PM 101: Core Concepts Workshop",
                "Technical PM Specialization",
            ]
        );
    }

    #[test]
    fn test_every_combination_extends_base_plan() {
        for experience in Experience::ALL {
            for background in Background::ALL {
                let plan = personalized_plan(experience, background);
                assert!(plan.len() > BASE_PLAN.len());
                assert_eq!(&plan[..BASE_PLAN.len()], &BASE_PLAN[..]);
                assert_eq!(plan, personalized_plan(experience, background));
            }
        }
    }

    #[test]
    fn test_every_timeline_has_its_own_message() {
        for timeline in Timeline::ALL {
            let message = timeline_message(timeline.value());
            assert_eq!(message, timeline.message());
            assert_ne!(message, DEFAULT_TIMELINE_MESSAGE);
        }
    }

    #[test]
    fn test_asap_recommends_accelerated_program() {
        let message = timeline_message("asap");
        assert!(message.contains("intensive"));
        assert!(message.contains("accelerated"));
    }

    #[test]
    fn test_unknown_timeline_falls_back() {
        assert_eq!(timeline_message("next-decade"), DEFAULT_TIMELINE_MESSAGE);
        assert_eq!(timeline_message(""), DEFAULT_TIMELINE_MESSAGE);
    }

    #[test]
    fn test_recommendation_for_record() {
        let r = record(Experience::SomePmTasks, Background::Other, Timeline::OneYear);
        let rec = Recommendation::for_record(&r);
        assert_eq!(rec.plan.len(), 7);
        assert_eq!(rec.plan[5], "Role Formalization Guide");
        assert_eq!(rec.plan[6], "Custom Career Mapping");
        assert!(rec.timeline_message.contains("advanced certifications"));
    }

    #[test]
    fn test_plain_text_numbers_items() {
        let r = record(Experience::SomeExposure, Background::Design, Timeline::Asap);
        let text = Recommendation::for_record(&r).to_plain_text(&r);
        assert!(text.starts_with("Jon's PM Roadmap\n"));
        assert!(text.contains("1. Complete PM Fundamentals Bootcamp\n"));
        assert!(text.contains("7. Design-to-PM Transition Guide\n"));
    }
}
