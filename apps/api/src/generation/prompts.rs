//! Prompt templates for the three writing tasks.
//!
//! Each builder is a pure function of its request: same input, same prompt.
//! Optional fields only contribute a line when they are non-blank.

use std::fmt::Write as _;

use crate::generation::models::{
    present, ColdEmailRequest, CoverLetterRequest, JobDescriptionRequest,
};
use crate::generation::tone::Tone;
use crate::llm_client::prompts::OUTPUT_RULES;

/// Appends a labelled bullet list, or nothing when the list is empty.
fn push_list(prompt: &mut String, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(prompt, "{heading}:");
    for item in items {
        let _ = writeln!(prompt, "- {item}");
    }
}

/// Appends `label: value` when the value is present.
fn push_field(prompt: &mut String, label: &str, value: &Option<String>) {
    if let Some(value) = present(value) {
        let _ = writeln!(prompt, "{label}: {value}");
    }
}

/// Closing block shared by every template: tone, language, output rules.
fn push_closing(prompt: &mut String, tone: &Option<String>, language: &Option<String>) {
    prompt.push('\n');
    let _ = writeln!(prompt, "{}", Tone::from_label(present(tone)).guidance());
    if let Some(language) = present(language) {
        let _ = writeln!(prompt, "Write the entire response in {language}.");
    }
    prompt.push('\n');
    prompt.push_str(OUTPUT_RULES);
}

pub fn cover_letter_prompt(req: &CoverLetterRequest) -> String {
    let title = present(&req.job_title).unwrap_or("the role");
    let company = present(&req.company_name).unwrap_or("the company");

    let mut prompt =
        format!("Write a tailored cover letter for the position of {title} at {company}");
    if let Some(location) = present(&req.location) {
        let _ = write!(prompt, " ({location})");
    }
    prompt.push_str(".\n");

    let greeting = present(&req.hiring_manager).unwrap_or("the hiring manager");
    let _ = writeln!(prompt, "Address the letter to {greeting}.");
    if let Some(name) = present(&req.applicant_name) {
        let _ = writeln!(prompt, "Sign the letter as {name}.");
    }
    prompt.push('\n');

    push_list(&mut prompt, "Candidate highlights", &req.highlights);
    push_list(&mut prompt, "Relevant skills", &req.skills);
    push_field(&mut prompt, "Job description", &req.job_description);

    prompt.push_str(
        "\nKeep it to three or four short paragraphs. Connect the candidate's experience \
         to the needs of the role with specific examples.\n",
    );
    push_closing(&mut prompt, &req.tone, &req.language);
    prompt
}

pub fn job_description_prompt(req: &JobDescriptionRequest) -> String {
    let title = present(&req.job_title).unwrap_or("the role");

    let mut prompt = format!("Write a compelling job description for a {title}");
    if let Some(company) = present(&req.company_name) {
        let _ = write!(prompt, " at {company}");
    }
    prompt.push_str(".\n");

    push_field(&mut prompt, "Location", &req.location);
    push_field(&mut prompt, "Employment type", &req.employment_type);
    push_field(&mut prompt, "Experience level", &req.experience_level);
    push_field(&mut prompt, "About the company", &req.company_overview);
    prompt.push('\n');

    push_list(&mut prompt, "Key responsibilities", &req.responsibilities);
    push_list(&mut prompt, "Requirements", &req.requirements);
    push_list(&mut prompt, "Benefits", &req.benefits);

    prompt.push_str(
        "\nStructure it as: a short overview, responsibilities, requirements, \
         and what we offer. Use inclusive language and avoid unnecessary jargon. \
         Make it easy for applicant tracking systems to parse.\n",
    );
    push_closing(&mut prompt, &req.tone, &req.language);
    prompt
}

pub fn cold_email_prompt(req: &ColdEmailRequest) -> String {
    let company = present(&req.company_name).unwrap_or("the company");
    let goal = present(&req.goal).unwrap_or("start a conversation");

    let mut prompt = format!("Write a short cold outreach email to someone at {company}.\n");
    let _ = writeln!(prompt, "Goal of the email: {goal}");

    match (present(&req.recipient_name), present(&req.recipient_role)) {
        (Some(name), Some(role)) => {
            let _ = writeln!(prompt, "Recipient: {name}, {role}");
        }
        (Some(name), None) => {
            let _ = writeln!(prompt, "Recipient: {name}");
        }
        (None, Some(role)) => {
            let _ = writeln!(prompt, "Recipient role: {role}");
        }
        (None, None) => {}
    }
    push_field(&mut prompt, "Sender", &req.sender_name);
    push_field(&mut prompt, "Sender background", &req.sender_background);
    prompt.push('\n');

    push_list(&mut prompt, "Points worth mentioning", &req.highlights);

    let ask = present(&req.call_to_action).unwrap_or("a brief call");
    let _ = writeln!(
        prompt,
        "\nInclude a subject line. Keep the body under 150 words and close by asking for {ask}."
    );
    push_closing(&mut prompt, &req.tone, &req.language);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cover_letter() -> CoverLetterRequest {
        CoverLetterRequest {
            job_title: Some("Platform Engineer".to_string()),
            company_name: Some("Acme".to_string()),
            location: Some("Berlin".to_string()),
            applicant_name: Some("Sam Lee".to_string()),
            highlights: vec!["Led migration to Kubernetes".to_string()],
            skills: vec!["Rust".to_string(), "Terraform".to_string()],
            tone: Some("confident".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_cover_letter_is_deterministic() {
        let req = cover_letter();
        assert_eq!(cover_letter_prompt(&req), cover_letter_prompt(&req));
    }

    #[test]
    fn test_cover_letter_includes_location_parenthetical() {
        let prompt = cover_letter_prompt(&cover_letter());
        assert!(prompt.starts_with(
            "Write a tailored cover letter for the position of \
             Platform Engineer at Acme (Berlin).\n"
        ));
        assert!(prompt.contains("- Led migration to Kubernetes"));
        assert!(prompt.contains("Relevant skills:\n- Rust\n- Terraform"));
        assert!(prompt.contains("Sign the letter as Sam Lee."));
        assert!(prompt.contains(&Tone::Confident.guidance()));
    }

    #[test]
    fn test_cover_letter_without_location_omits_parenthetical() {
        let req = CoverLetterRequest {
            location: None,
            ..cover_letter()
        };
        let prompt = cover_letter_prompt(&req);
        assert!(prompt.starts_with(
            "Write a tailored cover letter for the position of Platform Engineer at Acme.\n"
        ));
        assert!(!prompt.contains('('));
    }

    #[test]
    fn test_cover_letter_blank_location_treated_as_absent() {
        let req = CoverLetterRequest {
            location: Some("   ".to_string()),
            ..cover_letter()
        };
        assert!(!cover_letter_prompt(&req).contains("()"));
    }

    #[test]
    fn test_cover_letter_empty_request_uses_placeholders() {
        let prompt = cover_letter_prompt(&CoverLetterRequest::default());
        assert!(prompt.contains("position of the role at the company."));
        assert!(prompt.contains("Address the letter to the hiring manager."));
        assert!(!prompt.contains("Candidate highlights"));
        assert!(!prompt.contains("Sign the letter"));
        assert!(prompt.contains(&Tone::Professional.guidance()));
        assert!(prompt.ends_with(OUTPUT_RULES));
    }

    #[test]
    fn test_job_description_optional_lines() {
        let req = JobDescriptionRequest {
            job_title: Some("Data Analyst".to_string()),
            employment_type: Some("Full-time".to_string()),
            requirements: vec!["SQL".to_string()],
            ..Default::default()
        };
        let prompt = job_description_prompt(&req);
        assert!(prompt.starts_with("Write a compelling job description for a Data Analyst.\n"));
        assert!(prompt.contains("Employment type: Full-time"));
        assert!(prompt.contains("Requirements:\n- SQL"));
        assert!(!prompt.contains("Location:"));
        assert!(!prompt.contains("Benefits:"));
        assert!(!prompt.contains("Key responsibilities:"));
    }

    #[test]
    fn test_job_description_with_company() {
        let req = JobDescriptionRequest {
            job_title: Some("Designer".to_string()),
            company_name: Some("Globex".to_string()),
            ..Default::default()
        };
        assert!(job_description_prompt(&req)
            .starts_with("Write a compelling job description for a Designer at Globex.\n"));
    }

    #[test]
    fn test_cold_email_recipient_variants() {
        let base = ColdEmailRequest {
            company_name: Some("Initech".to_string()),
            goal: Some("ask about open backend roles".to_string()),
            ..Default::default()
        };

        let prompt = cold_email_prompt(&base);
        assert!(prompt.contains("someone at Initech"));
        assert!(prompt.contains("Goal of the email: ask about open backend roles"));
        assert!(!prompt.contains("Recipient"));
        assert!(prompt.contains("asking for a brief call"));

        let with_both = ColdEmailRequest {
            recipient_name: Some("Ana".to_string()),
            recipient_role: Some("CTO".to_string()),
            call_to_action: Some("a 15 minute chat".to_string()),
            ..base.clone()
        };
        let prompt = cold_email_prompt(&with_both);
        assert!(prompt.contains("Recipient: Ana, CTO"));
        assert!(prompt.contains("asking for a 15 minute chat"));

        let role_only = ColdEmailRequest {
            recipient_role: Some("Head of Talent".to_string()),
            ..base
        };
        assert!(cold_email_prompt(&role_only).contains("Recipient role: Head of Talent"));
    }

    #[test]
    fn test_language_line_only_when_requested() {
        let mut req = ColdEmailRequest {
            company_name: Some("Initech".to_string()),
            goal: Some("referral".to_string()),
            ..Default::default()
        };
        assert!(!cold_email_prompt(&req).contains("Write the entire response in"));

        req.language = Some("Chinese".to_string());
        assert!(cold_email_prompt(&req).contains("Write the entire response in Chinese."));
    }
}
