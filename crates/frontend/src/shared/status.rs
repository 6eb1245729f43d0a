//! Status line shown in the sidebar panels, with its CSS tone class.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusTone {
    /// No class attribute
    #[default]
    Neutral,
    Success,
    Error,
}

impl StatusTone {
    pub fn css_class(self) -> &'static str {
        match self {
            StatusTone::Neutral => "",
            StatusTone::Success => "success",
            StatusTone::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub tone: StatusTone,
}

impl StatusLine {
    pub fn neutral(text: impl Into<String>) -> Self {
        Self { text: text.into(), tone: StatusTone::Neutral }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), tone: StatusTone::Success }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), tone: StatusTone::Error }
    }
}
