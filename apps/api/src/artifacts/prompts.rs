// Prompt constants for artifact generation.

/// Resume analysis prompt template. Replace `{bio_context}` and
/// `{resume_text}` before sending.
pub const ANALYZE_RESUME_TEMPLATE: &str = r#"Analyze the following resume and provide:
1. A score from 1-100.
2. Strengths.
3. Weaknesses/Areas for improvement.
4. Suggestions for better wording or missing keywords.

{bio_context}Resume:
{resume_text}

Format the response as JSON with keys: 'score', 'strengths', 'weaknesses', 'suggestions'."#;

/// Interview question prompt template. Replace `{position}`,
/// `{experience_level}`, `{resume_context}` and `{language}` before sending.
pub const INTERVIEW_PROMPT_TEMPLATE: &str = r#"You are a Senior Hiring Manager from a Tier-1 Tech Company (like Google, Amazon, or Meta).
You are conducting a rigorous interview for a {position} position.
Target seniority: {experience_level}.

Candidate Context (CV/Background):
{resume_context}

Your Objective:
1. AVOID 'DUMB' OR GENERIC QUESTIONS (e.g., 'What are your strengths?', 'Tell me about yourself').
2. Ask SHARP, TECHNICAL, or STRATEGIC questions that reveal the candidate's TRUE depth.
3. Dig into SPECIFIC details of their mentioned projects or the role's core challenges.
4. Respond BRIEFLY to their last answer (e.g., 'That's a sound architectural choice' or 'I see your point about X') and then MOVE DIRECTLY to the next challenging question.
5. ASK ONLY ONE QUESTION AT A TIME.

The language for the response must be: {language}

Provide ONLY the spoken text of the interviewer. Be elite, professional, and intellectually demanding."#;

/// Cover letter prompt template. Replace `{bio_context}`, `{resume_text}`
/// and `{job_description}` before sending.
pub const COVER_LETTER_TEMPLATE: &str = r#"Generate a personalized cover letter using this resume and job description.

{bio_context}Resume:
{resume_text}

Job Description:
{job_description}

Make it professional, engaging, and highlight specific achievements from the resume that match the job."#;

/// Formats the optional bio preamble spliced into artifact prompts.
/// Empty bios contribute nothing rather than an empty labelled block.
pub fn bio_context(bio: &str) -> String {
    if bio.trim().is_empty() {
        String::new()
    } else {
        format!("User Bio: {bio}\n\n")
    }
}

/// Pulls an explicit `Language: <value>` directive out of the interview
/// context. Voice clients splice one in when the session must run in a
/// particular language; the last directive wins. Without a usable directive
/// the model is told to mirror the candidate.
pub fn response_language(resume_context: &str) -> &str {
    resume_context
        .rsplit_once("Language: ")
        .map(|(_, rest)| rest.lines().next().unwrap_or("").trim())
        .filter(|l| !l.is_empty())
        .unwrap_or("Match the candidate")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bio_context_labels_non_empty_bio() {
        assert_eq!(
            bio_context("Final year CS student"),
            "User Bio: Final year CS student\n\n"
        );
    }

    #[test]
    fn test_bio_context_empty_for_blank_bio() {
        assert_eq!(bio_context(""), "");
        assert_eq!(bio_context("   "), "");
    }

    #[test]
    fn test_templates_carry_their_placeholders() {
        assert!(ANALYZE_RESUME_TEMPLATE.contains("{bio_context}"));
        assert!(ANALYZE_RESUME_TEMPLATE.contains("{resume_text}"));
        assert!(INTERVIEW_PROMPT_TEMPLATE.contains("{position}"));
        assert!(INTERVIEW_PROMPT_TEMPLATE.contains("{experience_level}"));
        assert!(INTERVIEW_PROMPT_TEMPLATE.contains("{resume_context}"));
        assert!(INTERVIEW_PROMPT_TEMPLATE.contains("{language}"));
        assert!(COVER_LETTER_TEMPLATE.contains("{job_description}"));
    }

    #[test]
    fn test_response_language_reads_directive() {
        let context = "The candidate is speaking in: en-US.\nLanguage: ru-RU\nHistory: ...";
        assert_eq!(response_language(context), "ru-RU");
    }

    #[test]
    fn test_response_language_last_directive_wins() {
        let context = "Language: en-US\nsome history\nLanguage: kk-KZ";
        assert_eq!(response_language(context), "kk-KZ");
    }

    #[test]
    fn test_response_language_defaults_without_directive() {
        assert_eq!(response_language("plain CV text"), "Match the candidate");
        assert_eq!(response_language(""), "Match the candidate");
    }

    #[test]
    fn test_response_language_blank_directive_falls_back() {
        assert_eq!(response_language("Language: \nmore"), "Match the candidate");
    }
}
