use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub const READ_FALLBACK_TEXT: &str = "Summary currently unavailable.";
pub const CREATION_FALLBACK_TEXT: &str =
    "Summary generation pending. Please refresh or edit later.";

/// State of a post's summary. On the wire this is the plain summary string;
/// in memory the placeholder states stay distinguishable from generated text.
#[derive(Clone, Eq, PartialEq, Debug, Default, Hash)]
pub enum Summary {
    #[default]
    Missing,
    Generated(String),
    Fallback(SummaryFallback),
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum SummaryFallback {
    /// Summarization failed while serving a read.
    ReadUnavailable,
    /// Summarization failed while the post was being created.
    CreationPending,
}

impl SummaryFallback {
    #[must_use]
    pub fn text(self) -> &'static str {
        match self {
            SummaryFallback::ReadUnavailable => READ_FALLBACK_TEXT,
            SummaryFallback::CreationPending => CREATION_FALLBACK_TEXT,
        }
    }
}

impl Summary {
    #[must_use]
    pub fn from_text(text: String) -> Self {
        if text.is_empty() {
            Summary::Missing
        } else if text == READ_FALLBACK_TEXT {
            Summary::Fallback(SummaryFallback::ReadUnavailable)
        } else if text == CREATION_FALLBACK_TEXT {
            Summary::Fallback(SummaryFallback::CreationPending)
        } else {
            Summary::Generated(text)
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Summary::Missing => "",
            Summary::Generated(summary) => summary,
            Summary::Fallback(fallback) => fallback.text(),
        }
    }

    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Summary::Missing)
    }

    #[must_use]
    pub fn is_generated(&self) -> bool {
        matches!(self, Summary::Generated(_))
    }
}

impl Serialize for Summary {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.text())
    }
}

impl<'de> Deserialize<'de> for Summary {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Ok(Summary::from_text(text))
    }
}
