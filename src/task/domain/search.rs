//! Case-insensitive substring filter over title and description.

use super::{Task, sanitize_markup};

/// Non-empty search text matched against task titles and descriptions.
///
/// The term is escaped the same way stored text is, so searching for
/// `<b>` finds tasks whose stored title contains `&lt;b&gt;`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchTerm {
    text: String,
    folded: String,
}

impl SearchTerm {
    /// Builds a term from raw query input. Empty input means "no filter".
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        let value = raw?;
        if value.is_empty() {
            return None;
        }
        let text = sanitize_markup(value);
        let folded = text.to_lowercase();
        Some(Self { text, folded })
    }

    /// The sanitised search text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns `true` when the title or description contains the term,
    /// ignoring case.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        task.title().as_str().to_lowercase().contains(&self.folded)
            || task
                .description()
                .as_str()
                .to_lowercase()
                .contains(&self.folded)
    }
}
