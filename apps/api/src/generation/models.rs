//! Request / response bodies for the writing endpoints.
//!
//! Bodies arrive from the web app and the browser extension as loosely typed
//! JSON: list fields may be sent as an array or as one newline-separated
//! string, and `null` means the same as an absent field.

use serde::{Deserialize, Deserializer, Serialize};

/// Accepts `["a", "b"]`, `"a\nb"`, or `null` for a list field.
fn string_or_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    let items = match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(text)) => text.lines().map(str::to_string).collect(),
        Some(OneOrMany::Many(items)) => items,
    };

    Ok(items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect())
}

/// Returns the trimmed value when present and non-blank.
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterRequest {
    pub job_title: Option<String>,
    pub company_name: Option<String>,
    pub location: Option<String>,
    pub applicant_name: Option<String>,
    pub hiring_manager: Option<String>,
    #[serde(default, deserialize_with = "string_or_list")]
    pub highlights: Vec<String>,
    #[serde(default, deserialize_with = "string_or_list")]
    pub skills: Vec<String>,
    pub job_description: Option<String>,
    pub tone: Option<String>,
    pub language: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDescriptionRequest {
    pub job_title: Option<String>,
    pub company_name: Option<String>,
    pub location: Option<String>,
    pub employment_type: Option<String>,
    pub experience_level: Option<String>,
    pub company_overview: Option<String>,
    #[serde(default, deserialize_with = "string_or_list")]
    pub responsibilities: Vec<String>,
    #[serde(default, deserialize_with = "string_or_list")]
    pub requirements: Vec<String>,
    #[serde(default, deserialize_with = "string_or_list")]
    pub benefits: Vec<String>,
    pub tone: Option<String>,
    pub language: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColdEmailRequest {
    pub company_name: Option<String>,
    pub goal: Option<String>,
    pub recipient_name: Option<String>,
    pub recipient_role: Option<String>,
    pub sender_name: Option<String>,
    pub sender_background: Option<String>,
    #[serde(default, deserialize_with = "string_or_list")]
    pub highlights: Vec<String>,
    pub call_to_action: Option<String>,
    pub tone: Option<String>,
    pub language: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CoverLetterResponse {
    pub ok: bool,
    pub letter: String,
}

#[derive(Debug, Serialize)]
pub struct JobDescriptionResponse {
    pub ok: bool,
    pub jd: String,
}

#[derive(Debug, Serialize)]
pub struct ColdEmailResponse {
    pub ok: bool,
    pub email: String,
}
