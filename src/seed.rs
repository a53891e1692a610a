//! Demo dataset installed at process start.
//!
//! The dashboard is a demonstration with no real analysis pipeline
//! behind it, so the store boots with one finished "current" interview
//! and one archived history entry to light up every part of the UI.

use crate::record::{InterviewRecord, Sentiment};

/// The current interview the dashboard shows on first load.
pub fn demo_current() -> InterviewRecord {
    InterviewRecord {
        id: None,
        title: "Interview with Sarah Johnson".into(),
        position: "Software Engineer Position".into(),
        date: "June 15, 2023".into(),
        duration: "32 minutes".into(),
        sentiment: Sentiment {
            positive: 75,
            neutral: 15,
            negative: 10,
        },
        improvement_areas: vec![
            "Reduce filler words (\"um\", \"uh\") - detected 23 times".into(),
            "Use more quantifiable metrics in answers (only 3/8 responses included numbers)"
                .into(),
            "Practice STAR method for behavioral questions".into(),
        ],
        common_questions: vec![
            "Tell me about yourself.".into(),
            "Why are you interested in this position?".into(),
            "What are your strengths and weaknesses?".into(),
        ],
        transcript: "This is a simulated transcript for the current interview. It would \
                     contain the full text of the interview."
            .into(),
        image_path: None,
    }
}

/// Pre-archived history entries, most-recent-first.
pub fn demo_history() -> Vec<InterviewRecord> {
    vec![InterviewRecord {
        id: Some("history12".into()),
        title: "Interview with John Doe".into(),
        position: "Project Manager".into(),
        date: "May 10, 2023".into(),
        duration: "45 minutes".into(),
        sentiment: Sentiment {
            positive: 60,
            neutral: 25,
            negative: 15,
        },
        improvement_areas: vec![
            "Improve clarity in explanations".into(),
            "Work on time management during responses".into(),
        ],
        common_questions: vec![
            "Describe a challenging project.".into(),
            "How do you handle conflict?".into(),
        ],
        transcript: "Transcript for John Doe's interview.".into(),
        image_path: Some("/images/HISTORY12.jpg".into()),
    }]
}
