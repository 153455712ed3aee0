//! Static promotional copy for the landing page

pub const BRAND: &str = "The Natural PM";

/// A titled paragraph
#[derive(Debug, Clone, Copy)]
pub struct Card {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub previous_role: &'static str,
    pub content: &'static str,
    pub outcome: &'static str,
}

pub const PROBLEM_HEADLINE: &str = "The PM Career Trap";
pub const PROBLEM_INTRO: &str =
    "Most aspiring PMs get stuck in an endless cycle of learning without landing. Sound familiar?";

pub const PROBLEMS: [Card; 4] = [
    Card {
        title: "No Clear Path Forward",
        description: "You want to become a PM but don't know where to start or what skills you actually need.",
    },
    Card {
        title: "Wasting Time on Wrong Things",
        description: "Spending months learning irrelevant skills while missing the fundamentals that actually matter.",
    },
    Card {
        title: "Lack of PM Experience",
        description: "Every PM job requires experience, but how do you get experience without a PM job?",
    },
    Card {
        title: "Information Overload",
        description: "Drowning in blog posts, courses, and advice that contradicts each other and leads nowhere.",
    },
];

pub const SOLUTION_HEADLINE: &str = "The Proven System for Becoming a PM";

pub const SOLUTION_FEATURES: [Card; 6] = [
    Card {
        title: "Clear Roadmap",
        description: "Step-by-step path from where you are to your first PM role",
    },
    Card {
        title: "Real PM Projects",
        description: "Build actual PM experience through guided real-world projects",
    },
    Card {
        title: "Industry Mentorship",
        description: "Direct access to senior PMs who've hired hundreds of product managers",
    },
    Card {
        title: "Interview Mastery",
        description: "Master the PM interview process with insider knowledge and practice",
    },
    Card {
        title: "Portfolio Building",
        description: "Create a compelling PM portfolio that stands out to hiring managers",
    },
    Card {
        title: "Job Placement Support",
        description: "Active job search support until you land your first PM role",
    },
];

pub const SOLUTION_BENEFITS: [&str; 6] = [
    "Skip years of trial and error",
    "Build confidence through real experience",
    "Network with industry professionals",
    "Land interviews at top companies",
    "Negotiate better offers",
    "Start with a competitive advantage",
];

pub const TESTIMONIALS: [Testimonial; 6] = [
    Testimonial {
        name: "Sarah Chen",
        role: "Product Manager at Spotify",
        previous_role: "Software Engineer",
        content: "The Natural PM completely transformed my career. I went from a confused engineer to landing a PM role at Spotify in just 8 weeks. The mentorship and real projects made all the difference.",
        outcome: "Landed PM role in 8 weeks",
    },
    Testimonial {
        name: "Marcus Rodriguez",
        role: "Senior Product Manager at Airbnb",
        previous_role: "Business Analyst",
        content: "I tried everything - bootcamps, online courses, books. Nothing worked until I found The Natural PM. The system is incredible and the support is unmatched. Now I'm at my dream company.",
        outcome: "$40k salary increase",
    },
    Testimonial {
        name: "Emily Johnson",
        role: "Product Manager at Slack",
        previous_role: "Marketing Manager",
        content: "The portfolio projects and interview prep were game-changers. I felt confident in every interview and had multiple offers to choose from. Best investment I've ever made in my career.",
        outcome: "Multiple job offers",
    },
    Testimonial {
        name: "David Kim",
        role: "Product Manager at Notion",
        previous_role: "UX Designer",
        content: "What I loved most was how practical everything was. No theory - just real PM work that I could immediately apply. The mentors helped me avoid all the common mistakes.",
        outcome: "First PM role at Series A startup",
    },
    Testimonial {
        name: "Lisa Thompson",
        role: "Product Manager at Figma",
        previous_role: "Project Manager",
        content: "The Natural PM gave me the confidence and skills I needed to make the transition. The community support was incredible - I still stay in touch with my cohort members.",
        outcome: "Transitioned from PM to Product",
    },
    Testimonial {
        name: "Alex Patel",
        role: "Product Manager at Stripe",
        previous_role: "Data Analyst",
        content: "I was stuck in analysis paralysis for months. The Natural PM gave me a clear path forward and the accountability I needed. Now I'm building products used by millions.",
        outcome: "Joined top fintech company",
    },
];

/// (value, label) pairs shown under the testimonials
pub const STATS: [(&str, &str); 4] = [
    ("94%", "Success Rate"),
    ("$65k", "Avg Starting Salary"),
    ("6 weeks", "Average Time to Hire"),
    ("2,500+", "Alumni Network"),
];

pub const CHALLENGE_RESPONSE: &str = "This is actually one of the most common challenges we see, and we have specific strategies to help you overcome it. In your strategy call, we'll dive deep into this and create a personalized action plan.";
