use crate::shared::date_utils::format_date;

/// Colour hint for badges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Info,
    Success,
    Danger,
}

/// One table cell, already resolved and formatted except for money
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    /// Main line with a muted second line
    Titled { title: String, subtitle: String },
    Money(f64),
    /// Display-formatted date
    Date(String),
    Badges(Vec<(String, Tone)>),
    Lines(Vec<String>),
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Formats a raw backend date for display
    pub fn date(raw: &str) -> Self {
        Self::Date(format_date(raw))
    }

    /// Plain text rendering, used for tooltips and tests
    pub fn plain_text(&self) -> String {
        match self {
            Self::Text(s) | Self::Date(s) => s.clone(),
            Self::Titled { title, subtitle } => format!("{} {}", title, subtitle),
            Self::Money(v) => crate::shared::number_format::format_currency(*v),
            Self::Badges(badges) => badges
                .iter()
                .map(|(text, _)| text.as_str())
                .collect::<Vec<_>>()
                .join(" "),
            Self::Lines(lines) => lines.join(" "),
        }
    }
}
