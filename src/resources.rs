//! Fixed resource catalogs served by the dashboard endpoints.
//!
//! These are deliberately static: the catalogs never vary with store
//! state, and the handlers serve them as-is.

use once_cell::sync::Lazy;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SkillLink {
    pub name: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResourceLink {
    pub title: &'static str,
    pub url: &'static str,
}

/// Pricing page for the hosted product tier.
pub const PRICING_URL: &str = "https://www.example.com/pricing";

/// Curated YouTube searches for interview-skill practice.
pub static YOUTUBE_SKILLS: Lazy<Vec<SkillLink>> = Lazy::new(|| {
    vec![
        SkillLink {
            name: "Spoken English Guru – Top 10 Interview Questions in Hindi & English",
            url: "https://www.youtube.com/results?search_query=Spoken+English+Guru+Top+10+Interview+Questions",
        },
        SkillLink {
            name: "Invisible BABA – How to Introduce Yourself in a Job Interview (Hindi)",
            url: "https://www.youtube.com/results?search_query=Invisible+BABA+How+to+Introduce+Yourself",
        },
        SkillLink {
            name: "Dheeru Talks – Top 13 Common Interview Questions in Hindi",
            url: "https://www.youtube.com/results?search_query=Dheeru+Talks+Top+13+Common+Interview+Questions",
        },
        SkillLink {
            name: "Cine_vibestudio – Job Interview English Conversation with Hindi Explanation",
            url: "https://www.youtube.com/results?search_query=Cine_vibestudio+Job+Interview+English+Conversation",
        },
        SkillLink {
            name: "Harihar Sir English Wale – Spoken English for Interviews",
            url: "https://www.youtube.com/results?search_query=Harihar+Sir+English+Wale+Spoken+English",
        },
        SkillLink {
            name: "Dr Shiv Knowledge Hub – Self Introduction in Interview (Hindi + English)",
            url: "https://www.youtube.com/results?search_query=Dr+Shiv+Knowledge+Hub+Self+Introduction",
        },
        SkillLink {
            name: "English Connection – Interview Tips and Practice",
            url: "https://www.youtube.com/results?search_query=English+Connection+Interview+Tips",
        },
        SkillLink {
            name: "Dear Sir – Interview Preparation for Freshers",
            url: "https://www.youtube.com/results?search_query=Dear+Sir+Interview+Preparation",
        },
        SkillLink {
            name: "Fluenta Institute – Spoken English & Interview Skills",
            url: "https://www.youtube.com/results?search_query=Fluenta+Institute+Spoken+English",
        },
        SkillLink {
            name: "TS Madaan – Interview Skills & Personality Development",
            url: "https://www.youtube.com/results?search_query=TS+Madaan+Interview+Skills",
        },
    ]
});

/// Self-serve material linked from the performance panel.
pub static PERFORMANCE_RESOURCES: Lazy<Vec<ResourceLink>> = Lazy::new(|| {
    vec![
        ResourceLink {
            title: "Article: Mastering Behavioral Interviews",
            url: "https://www.example.com/behavioral-interviews",
        },
        ResourceLink {
            title: "E-book: The Complete Guide to Job Interviews",
            url: "https://www.example.com/interview-guide",
        },
        ResourceLink {
            title: "Webinar: Acing Technical Interviews",
            url: "https://www.example.com/technical-webinar",
        },
    ]
});
