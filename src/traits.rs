use unicode_segmentation::UnicodeSegmentation;

/// The host's committed-text store.
///
/// The engine only ever appends, removes the last character, or peeks at
/// the last character; earlier text is never inspected or mutated.
pub trait TextBuffer {
    /// Append one character.
    fn append(&mut self, ch: char);

    /// Remove the last character. No-op on an empty buffer.
    fn remove_last(&mut self);

    /// The last character, or `None` when the buffer is empty.
    fn peek_last(&self) -> Option<char>;
}

/// Reference [`TextBuffer`] backed by a `String`.
///
/// `remove_last` drops the final grapheme cluster, so host-seeded text
/// containing combining marks or emoji backspaces as one unit. `peek_last`
/// yields a `char` only when the final cluster is a single scalar, which
/// makes transforms identity on multi-scalar clusters.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StringBuffer {
    text: String,
}

impl StringBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_text(text: &str) -> Self {
        StringBuffer {
            text: text.to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    fn last_grapheme(&self) -> Option<&str> {
        self.text.graphemes(true).next_back()
    }
}

impl TextBuffer for StringBuffer {
    fn append(&mut self, ch: char) {
        self.text.push(ch);
    }

    fn remove_last(&mut self) {
        if let Some(g) = self.last_grapheme() {
            let new_len = self.text.len() - g.len();
            self.text.truncate(new_len);
        }
    }

    fn peek_last(&self) -> Option<char> {
        let g = self.last_grapheme()?;
        let mut chars = g.chars();
        let ch = chars.next()?;
        if chars.next().is_some() { None } else { Some(ch) }
    }
}
