use kana_air::traits::TextBuffer;

/// Text buffer that records every operation the engine performs on it,
/// so tests can assert on the mutation sequence as well as the result.
#[derive(Debug, Default, Clone)]
pub struct RecordBuffer {
    chars: Vec<char>,
    pub ops: Vec<Op>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Append(char),
    RemoveLast,
}

impl RecordBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_text(text: &str) -> Self {
        RecordBuffer {
            chars: text.chars().collect(),
            ops: Vec::new(),
        }
    }

    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }
}

impl TextBuffer for RecordBuffer {
    fn append(&mut self, ch: char) {
        self.chars.push(ch);
        self.ops.push(Op::Append(ch));
    }

    fn remove_last(&mut self) {
        self.chars.pop();
        self.ops.push(Op::RemoveLast);
    }

    fn peek_last(&self) -> Option<char> {
        self.chars.last().copied()
    }
}
