//! Commit subject classification.
//!
//! A [`PatternTable`] holds an ordered list of case-insensitive regular
//! expressions per category. The [`Classifier`] walks the table in
//! [`Category::MATCH_ORDER`] and stops at the first pattern that matches
//! anywhere in the subject. The matched text is then humanized: conventional
//! prefixes are stripped, the first letter is capitalized, and the category's
//! enrichment rule is applied.

use regex::{Regex, RegexBuilder};

use crate::config::Config;
use crate::domain::{Category, ClassifiedItem};
use crate::error::Result;

/// Built-in patterns for one category, tried in order.
fn builtin_patterns(category: Category) -> &'static [&'static str] {
    match category {
        Category::Features => &[
            r"^feat(?:\([^)]+\))?: (.+)",
            r"^add(?:\([^)]+\))?: (.+)",
            r"^implement(?:\([^)]+\))?: (.+)",
            r"[Aa]dd .* functionality",
            r"[Ii]mplement .* feature",
            r"[Nn]ew .* feature",
        ],
        Category::Fixes => &[
            r"^fix(?:\([^)]+\))?: (.+)",
            r"^bugfix(?:\([^)]+\))?: (.+)",
            r"[Ff]ix .* (bug|issue|error|problem)",
            r"[Rr]esolve .* (bug|issue|error)",
            r"[Cc]orrect .* (issue|problem)",
        ],
        Category::UiImprovements => &[
            r"^ui(?:\([^)]+\))?: (.+)",
            r"^ux(?:\([^)]+\))?: (.+)",
            r"[Uu]pdate .* (UI|interface|design)",
            r"[Ii]mprove .* (UI|UX|interface)",
            r"[Ee]nhance .* (appearance|styling|layout)",
        ],
        Category::Infrastructure => &[
            r"^docker(?:\([^)]+\))?: (.+)",
            r"^ci(?:\([^)]+\))?: (.+)",
            r"^build(?:\([^)]+\))?: (.+)",
            r"[Uu]pdate .* (Docker|CI|build)",
            r"[Ii]mprove .* (deployment|infrastructure)",
        ],
        Category::Performance => &[
            r"^perf(?:\([^)]+\))?: (.+)",
            r"[Oo]ptimize .+",
            r"[Ii]mprove .* performance",
            r"[Ss]peed up .+",
        ],
        Category::Docs => &[
            r"^docs(?:\([^)]+\))?: (.+)",
            r"[Uu]pdate .* (documentation|README|docs)",
            r"[Aa]dd .* documentation",
        ],
        Category::Other => &[],
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Ok(RegexBuilder::new(pattern).case_insensitive(true).build()?)
}

/// Ordered, compiled pattern groups. Immutable once built.
#[derive(Debug, Clone)]
pub struct PatternTable {
    groups: Vec<(Category, Vec<Regex>)>,
}

impl PatternTable {
    /// The built-in table.
    pub fn builtin() -> Result<Self> {
        Self::with_overrides(&[])
    }

    /// The built-in table with some categories' pattern lists replaced.
    pub fn with_overrides(overrides: &[(Category, Vec<String>)]) -> Result<Self> {
        let mut groups = Vec::with_capacity(Category::MATCH_ORDER.len());

        for category in Category::MATCH_ORDER {
            let regexes = match overrides.iter().find(|(c, _)| *c == category) {
                Some((_, patterns)) => patterns
                    .iter()
                    .map(|p| compile(p))
                    .collect::<Result<Vec<_>>>()?,
                None => builtin_patterns(category)
                    .iter()
                    .map(|p| compile(p))
                    .collect::<Result<Vec<_>>>()?,
            };
            groups.push((category, regexes));
        }

        Ok(PatternTable { groups })
    }

    /// The table described by a loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::with_overrides(&config.pattern_overrides()?)
    }

    /// Patterns for `category`, in the order they are tried.
    pub fn patterns(&self, category: Category) -> &[Regex] {
        self.groups
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, regexes)| regexes.as_slice())
            .unwrap_or(&[])
    }

    /// First category whose patterns match, with the extracted raw description.
    fn first_match<'s>(&self, subject: &'s str) -> Option<(Category, &'s str)> {
        for (category, regexes) in &self.groups {
            for regex in regexes {
                if let Some(captures) = regex.captures(subject) {
                    let extracted = captures
                        .get(1)
                        .map(|m| m.as_str())
                        .unwrap_or(subject);
                    return Some((*category, extracted.trim()));
                }
            }
        }
        None
    }
}

/// Maps commit subjects to categories and user-facing descriptions.
#[derive(Debug, Clone)]
pub struct Classifier {
    table: PatternTable,
    verb_prefix: Regex,
    scope_prefix: Regex,
}

impl Classifier {
    pub fn new(table: PatternTable) -> Result<Self> {
        Ok(Classifier {
            table,
            verb_prefix: RegexBuilder::new(
                r"^(feat|fix|add|update|improve|enhance|implement):\s*",
            )
            .case_insensitive(true)
            .build()?,
            scope_prefix: Regex::new(r"^\w+\([^)]+\):\s*")?,
        })
    }

    /// Classify one commit subject. Every subject lands in exactly one category.
    pub fn classify(&self, subject: &str) -> ClassifiedItem {
        let (category, raw) = self
            .table
            .first_match(subject)
            .unwrap_or((Category::Other, subject));

        let description = self.humanize(raw, category);
        tracing::trace!(%category, subject, %description, "classified commit");
        ClassifiedItem::new(category, description, subject)
    }

    pub fn classify_all<S: AsRef<str>>(&self, subjects: &[S]) -> Vec<ClassifiedItem> {
        subjects.iter().map(|s| self.classify(s.as_ref())).collect()
    }

    /// Turn an extracted description into release-notes wording.
    pub fn humanize(&self, description: &str, category: Category) -> String {
        let without_verb = self.verb_prefix.replace(description, "");
        let without_scope = self.scope_prefix.replace(&without_verb, "");
        category.enrich(&capitalize_first(&without_scope))
    }
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
