/// A normalized, non-blank free-text query.
///
/// Matching is a case-insensitive substring test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    needle: String,
}

impl SearchTerm {
    /// Returns `None` for empty or whitespace-only input.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            return None;
        }

        Some(Self {
            needle: raw.to_lowercase(),
        })
    }

    pub fn matches(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.needle)
    }

    pub fn matches_any<'a, I>(&self, texts: I) -> bool
    where
        I: IntoIterator<Item = &'a String>,
    {
        texts.into_iter().any(|text| self.matches(text))
    }
}
