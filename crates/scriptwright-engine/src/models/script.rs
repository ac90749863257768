use crate::classify::{ElementCategory, classify};

/// A single classified screenplay line.
///
/// The text is trimmed and non-empty; the category is fixed at construction
/// and re-deriving it from the same text always yields the same result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    text: String,
    category: ElementCategory,
}

impl ScriptLine {
    /// Classifies a trimmed, non-empty line.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let category = classify(&text);
        Self { text, category }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn category(&self) -> ElementCategory {
        self.category
    }
}

/// A screenplay snapshot: a title plus its classified lines, in order.
///
/// Built fresh from the editor's current text for each export; it has no
/// identity beyond the file the caller eventually writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    title: String,
    lines: Vec<ScriptLine>,
}

impl Script {
    /// Builds a script from raw multi-line text.
    ///
    /// Lines are trimmed, blank lines are dropped (including lines that are
    /// only non-breaking spaces), and each survivor is classified.
    pub fn from_text(title: impl Into<String>, text: &str) -> Self {
        let lines = text
            .lines()
            // U+00A0 carries the White_Space property, so trim() covers
            // editors that pad blank lines with non-breaking spaces.
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(ScriptLine::new)
            .collect();

        Self {
            title: title.into(),
            lines,
        }
    }

    /// Builds a script from lines that are already split but not yet
    /// filtered or classified.
    pub fn from_lines<I, S>(title: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let text = lines
            .into_iter()
            .map(|l| l.as_ref().to_string())
            .collect::<Vec<_>>()
            .join("\n");
        Self::from_text(title, &text)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn lines(&self) -> &[ScriptLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
