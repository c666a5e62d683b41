/// Data structures for Leads Tracker
use serde::{Deserialize, Serialize};

/// Category tag attached to a lead
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Category {
    #[default]
    Uncategorized,
    Work,
    Personal,
    Research,
    Reading,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Uncategorized,
        Category::Work,
        Category::Personal,
        Category::Research,
        Category::Reading,
    ];

    /// Stable identifier used in storage and as the selector value
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Uncategorized => "uncategorized",
            Category::Work => "work",
            Category::Personal => "personal",
            Category::Research => "research",
            Category::Reading => "reading",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Uncategorized => "Uncategorized",
            Category::Work => "Work",
            Category::Personal => "Personal",
            Category::Research => "Research",
            Category::Reading => "Reading",
        }
    }

    /// Parse a stored or selected value, falling back to the default
    pub fn parse(value: &str) -> Category {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(value.trim()))
            .unwrap_or_default()
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        Category::parse(&value)
    }
}

/// A saved bookmark
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub url: String,
    #[serde(default)]
    pub category: Category,
}

impl Lead {
    pub fn new(url: impl Into<String>, category: Category) -> Lead {
        Lead {
            url: url.into(),
            category,
        }
    }
}

/// One element of a persisted snapshot.
///
/// Older snapshots hold bare URL strings; those load with the default category.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum StoredLead {
    Bare(String),
    Record(Lead),
}

impl From<StoredLead> for Lead {
    fn from(stored: StoredLead) -> Self {
        match stored {
            StoredLead::Bare(url) => Lead::new(url, Category::default()),
            StoredLead::Record(lead) => lead,
        }
    }
}
