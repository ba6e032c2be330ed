//! ComposeBuffer: owned in-progress text for the translation modes.
//!
//! A small value type so buffer state never aliases across components; all
//! operations are char-correct for non-ASCII input.

#[derive(Debug, Default)]
pub(crate) struct ComposeBuffer {
    text: String,
}

impl ComposeBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Empty or whitespace only.
    pub fn trimmed_is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn push(&mut self, ch: char) {
        self.text.push(ch);
    }

    pub fn push_str(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Remove and return the last character.
    pub fn pop(&mut self) -> Option<char> {
        self.text.pop()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn set(&mut self, text: String) {
        self.text = text;
    }

    /// The word fragment after the last space. A trailing space (or an empty
    /// buffer) yields an empty fragment, which callers treat as "suggest the
    /// next word" rather than "complete this one".
    pub fn trailing_fragment(&self) -> &str {
        match self.text.rfind(' ') {
            Some(idx) => &self.text[idx + 1..],
            None => &self.text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop() {
        let mut buf = ComposeBuffer::new();
        buf.push('h');
        buf.push('i');
        assert_eq!(buf.text(), "hi");
        assert_eq!(buf.pop(), Some('i'));
        assert_eq!(buf.text(), "h");
    }

    #[test]
    fn test_pop_multibyte_char() {
        let mut buf = ComposeBuffer::new();
        buf.push_str("añ");
        assert_eq!(buf.pop(), Some('ñ'));
        assert_eq!(buf.text(), "a");
    }

    #[test]
    fn test_trailing_fragment() {
        let mut buf = ComposeBuffer::new();
        assert_eq!(buf.trailing_fragment(), "");

        buf.push_str("hello");
        assert_eq!(buf.trailing_fragment(), "hello");

        buf.push_str(" wor");
        assert_eq!(buf.trailing_fragment(), "wor");

        buf.push_str("ld ");
        assert_eq!(buf.trailing_fragment(), "");
    }

    #[test]
    fn test_trimmed_is_empty() {
        let mut buf = ComposeBuffer::new();
        assert!(buf.trimmed_is_empty());
        buf.push(' ');
        assert!(buf.trimmed_is_empty());
        assert!(!buf.is_empty());
        buf.push('a');
        assert!(!buf.trimmed_is_empty());
    }
}
