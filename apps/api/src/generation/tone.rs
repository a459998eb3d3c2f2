//! Tone labels — maps the tone picked in the web form to writing guidance.
//!
//! Unknown labels are not rejected: the form allows free text, so anything we
//! do not recognise is passed through to the model verbatim.

/// Writing tone requested for a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Professional,
    Friendly,
    Enthusiastic,
    Formal,
    Confident,
    Concise,
    Persuasive,
    Custom(String),
}

impl Tone {
    /// Parses a tone label. Absent or blank labels fall back to `Professional`.
    pub fn from_label(label: Option<&str>) -> Self {
        let Some(label) = label.map(str::trim).filter(|l| !l.is_empty()) else {
            return Tone::default();
        };

        match label.to_lowercase().as_str() {
            "professional" => Tone::Professional,
            "friendly" | "warm" => Tone::Friendly,
            "enthusiastic" | "energetic" => Tone::Enthusiastic,
            "formal" => Tone::Formal,
            "confident" | "bold" => Tone::Confident,
            "concise" | "brief" => Tone::Concise,
            "persuasive" => Tone::Persuasive,
            _ => Tone::Custom(label.to_string()),
        }
    }

    /// One-line instruction describing how the text should sound.
    pub fn guidance(&self) -> String {
        let text = match self {
            Tone::Professional => {
                "Use a professional tone: clear, courteous, and focused on concrete results."
            }
            Tone::Friendly => {
                "Use a friendly tone: warm and approachable while staying respectful."
            }
            Tone::Enthusiastic => {
                "Use an enthusiastic tone: show genuine energy and excitement without exaggeration."
            }
            Tone::Formal => "Use a formal tone: polished, traditional business language.",
            Tone::Confident => {
                "Use a confident tone: assertive statements backed by specific achievements."
            }
            Tone::Concise => {
                "Use a concise tone: short sentences, no filler, every line earns its place."
            }
            Tone::Persuasive => {
                "Use a persuasive tone: lead with the reader's benefit \
                 and build toward a clear ask."
            }
            Tone::Custom(label) => return format!("Tone: {label}."),
        };
        text.to_string()
    }
}
