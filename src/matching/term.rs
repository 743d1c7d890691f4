//! The user supplied search term.

use std::fmt;

/// A search term, decoded once into characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    text: String,
    chars: Vec<char>,
}

impl SearchTerm {
    /// Create a new search term.
    pub fn new<S: Into<String>>(text: S) -> Self {
        let text = text.into();
        let chars = text.chars().collect();
        SearchTerm { text, chars }
    }

    /// The term as typed.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The term's characters in order.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of characters in the term.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// An empty term never matches anything.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl From<&str> for SearchTerm {
    fn from(text: &str) -> Self {
        SearchTerm::new(text)
    }
}

impl fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
