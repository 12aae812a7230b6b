//! Canned artifact content served when the completion chain is exhausted.
//! Interview openers are grouped into role families so the degraded
//! experience still feels tailored to the requested position.

use rand::seq::IndexedRandom;
use serde_json::{json, Value};

/// Degraded resume analysis. A fixed, plausible report object; the model
/// path returns free text instead, so callers must accept both shapes.
pub fn default_analysis() -> Value {
    json!({
        "score": 85,
        "strengths": ["Clear structure", "Relevant experience", "Good technical skills"],
        "weaknesses": ["Missing quantitative achievements", "Skill section could be more specific"],
        "suggestions": "Add more numbers to your achievements (e.g. 'Improved speed by 20%')."
    })
}

const SOFTWARE_QUESTIONS: &[&str] = &[
    "I see you're interested in the Software role. Let's delve deep: How would you design a system to handle 1 million concurrent requests while maintaining low latency?",
    "Interesting. Regarding your technical stack, how do you manage state in large-scale applications, and what trade-offs do you consider?",
    "Let's talk architecture. Can you explain the difference between microservices and monolithic design in the context of a high-growth startup?",
    "How do you approach unit testing and quality assurance for mission-critical code?",
    "Tell me about a time you had to optimize an algorithm that was performing poorly. What was the Big O before and after?",
];

const DESIGN_QUESTIONS: &[&str] = &[
    "Walk me through your design process. How do you balance aesthetic 'wow' factor with strict accessibility requirements?",
    "When a stakeholder disagrees with a data-driven UX decision, how do you defend your design while maintaining a collaborative relationship?",
    "How do you stay current with evolving design systems and component-based UI architectures?",
    "Describe a project where you had to simplify a complex user flow. What was the measurable impact on conversion?",
    "What is your philosophy on 'Mobile First' vs 'Responsive' design in 2026?",
];

const GENERAL_QUESTIONS: &[&str] = &[
    "As we consider you for the {position} role, tell me: what is the single most misunderstood aspect of this industry, and how do you navigate it?",
    "I want to hear about your strategic approach. If you were given a $1M budget to improve our operations, where would you start and why?",
    "Describe a high-stakes situation where you had to make a decision with incomplete data. What was the outcome?",
    "How do you define 'excellence' in this field, and how does your past experience demonstrate it?",
    "What is the most innovative solution you've implemented recently that challenged the status quo?",
];

/// Picks a degraded interview opener for the position. Software roles are
/// matched before design roles, so "design engineer" lands in the software
/// family.
pub fn interview_opener(position: &str) -> String {
    let pos = position.to_lowercase();
    let bank = if pos.contains("soft") || pos.contains("dev") || pos.contains("eng") {
        SOFTWARE_QUESTIONS
    } else if pos.contains("design") || pos.contains("ui") || pos.contains("ux") {
        DESIGN_QUESTIONS
    } else {
        GENERAL_QUESTIONS
    };

    bank.choose(&mut rand::rng())
        .copied()
        .unwrap_or("")
        .replace("{position}", position)
}

/// Degraded cover letter.
pub const DEFAULT_COVER_LETTER: &str = "Dear Hiring Manager,\n\nI am excited to apply for the position. With my background in technology and passion for innovation, I am confident I would be a great fit for your team.\n\nThank you for your consideration.\n\nBest regards,\n[Your Name]";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_analysis_has_report_keys() {
        let analysis = default_analysis();
        for key in ["score", "strengths", "weaknesses", "suggestions"] {
            assert!(analysis.get(key).is_some(), "missing key {key}");
        }
        assert_eq!(analysis["score"], 85);
    }

    #[test]
    fn test_software_roles_get_software_questions() {
        for position in ["Software Engineer", "Backend Developer", "design engineer"] {
            let opener = interview_opener(position);
            assert!(
                SOFTWARE_QUESTIONS.contains(&opener.as_str()),
                "unexpected opener for {position}: {opener}"
            );
        }
    }

    #[test]
    fn test_design_roles_get_design_questions() {
        for position in ["Product Designer", "UI Specialist", "UX Researcher"] {
            let opener = interview_opener(position);
            assert!(
                DESIGN_QUESTIONS.contains(&opener.as_str()),
                "unexpected opener for {position}: {opener}"
            );
        }
    }

    #[test]
    fn test_other_roles_get_general_questions_with_position_inlined() {
        let opener = interview_opener("Product Manager");
        assert!(!opener.contains("{position}"));
        let matches_bank = GENERAL_QUESTIONS
            .iter()
            .any(|q| q.replace("{position}", "Product Manager") == opener);
        assert!(matches_bank, "unexpected opener: {opener}");
    }
}
