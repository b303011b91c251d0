use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ReleaseNotesError;

/// Release-notes section a commit is sorted into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Features,
    Fixes,
    UiImprovements,
    Infrastructure,
    Performance,
    Docs,
    Other,
}

impl Category {
    /// Order in which pattern groups are tried by the classifier.
    pub const MATCH_ORDER: [Category; 6] = [
        Category::Features,
        Category::Fixes,
        Category::UiImprovements,
        Category::Infrastructure,
        Category::Performance,
        Category::Docs,
    ];

    /// Order in which sections appear in the rendered document.
    ///
    /// `Other` is rendered separately after these, with plain bullets.
    pub const DISPLAY_ORDER: [Category; 6] = [
        Category::Features,
        Category::Fixes,
        Category::UiImprovements,
        Category::Performance,
        Category::Infrastructure,
        Category::Docs,
    ];

    /// Every category, `Other` last.
    pub const ALL: [Category; 7] = [
        Category::Features,
        Category::Fixes,
        Category::UiImprovements,
        Category::Infrastructure,
        Category::Performance,
        Category::Docs,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Features => "features",
            Category::Fixes => "fixes",
            Category::UiImprovements => "ui_improvements",
            Category::Infrastructure => "infrastructure",
            Category::Performance => "performance",
            Category::Docs => "docs",
            Category::Other => "other",
        }
    }

    /// Section heading text, without the leading `### `
    pub fn heading(&self) -> &'static str {
        match self {
            Category::Features => "✨ New Features",
            Category::Fixes => "🔧 Bug Fixes",
            Category::UiImprovements => "🎨 UI/UX Improvements",
            Category::Performance => "⚡ Performance",
            Category::Infrastructure => "🐳 Infrastructure",
            Category::Docs => "📚 Documentation",
            Category::Other => "📝 Other Changes",
        }
    }

    /// Position of this category within [`Category::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Category::Features => 0,
            Category::Fixes => 1,
            Category::UiImprovements => 2,
            Category::Infrastructure => 3,
            Category::Performance => 4,
            Category::Docs => 5,
            Category::Other => 6,
        }
    }

    /// Rewrite an already humanized description with category context.
    ///
    /// Keyword checks are case-insensitive; rewritten text is lowercased.
    pub fn enrich(&self, text: &str) -> String {
        let lower = text.to_lowercase();
        match self {
            Category::Features | Category::Infrastructure | Category::Other => text.to_string(),
            Category::Fixes => {
                if lower.contains("fix") || lower.contains("error") {
                    text.to_string()
                } else {
                    format!("Fixed issue with {}", lower)
                }
            }
            Category::UiImprovements => {
                let keywords = ["ui", "interface", "design", "styling"];
                if keywords.iter().any(|k| lower.contains(k)) {
                    text.to_string()
                } else {
                    format!("Improved {}", lower)
                }
            }
            Category::Performance => {
                if lower.contains("performance") {
                    text.to_string()
                } else {
                    format!("Improved performance of {}", lower)
                }
            }
            Category::Docs => {
                if lower.contains("documentation") {
                    text.to_string()
                } else {
                    format!("Updated documentation for {}", lower)
                }
            }
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ReleaseNotesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ReleaseNotesError::config(format!("Unknown category: '{}'", s)))
    }
}
