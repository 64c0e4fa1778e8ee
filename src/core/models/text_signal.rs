use serde::Serialize;

/// Raw output of a text recognition engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextResult {
    pub text: String,
}

impl TextResult {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Recognized text with surrounding whitespace removed.
///
/// Trimming only decides whether any text is present. `length` counts the
/// chars of the raw engine output, trailing newline included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextSignal {
    pub recognized_text: String,
    pub length: usize,
}

impl TextSignal {
    pub fn from_recognized_text(raw_text: &str) -> Option<Self> {
        let recognized_text = raw_text.trim();
        if recognized_text.is_empty() {
            return None;
        }

        Some(Self {
            recognized_text: recognized_text.to_string(),
            length: raw_text.chars().count(),
        })
    }
}

/// What the text check contributes to a decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TextObservation {
    Detected(TextSignal),
    NoText,
    Unavailable { reason: String },
}

impl TextObservation {
    pub fn from_text_result(result: &TextResult) -> Self {
        match TextSignal::from_recognized_text(&result.text) {
            Some(signal) => TextObservation::Detected(signal),
            None => TextObservation::NoText,
        }
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        TextObservation::Unavailable {
            reason: reason.into(),
        }
    }
}
