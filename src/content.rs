//! Accumulation of the mixed text content of an element.

use std::fmt;

/// A sink for the text and CDATA fragments found directly inside an element.
///
/// The dispatcher feeds fragments in document order. Implement this trait to
/// route content somewhere else than a [`ContentCollector`].
pub trait CollectContent {
    /// Receives a text fragment, with references already resolved.
    fn add_text(&mut self, text: &str);

    /// Receives the content of a CDATA section.
    fn add_cdata(&mut self, cdata: &str);
}

/// Concatenates all text and CDATA fragments of an element into one string.
///
/// Besides the text it remembers whether anything was appended at all, which
/// tells `<e/>` (no content) from `<e></e>` (empty content). Both stringify
/// to `""`, but only the first one reports [`null_content`].
///
/// [`null_content`]: ContentCollector::null_content
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ContentCollector {
    content: String,
    has_content: bool,
}

impl ContentCollector {
    /// Creates a collector which has not seen any content yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if nothing, not even an empty fragment, was appended.
    #[inline]
    pub fn null_content(&self) -> bool {
        !self.has_content
    }

    /// Returns the content accumulated so far.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Returns `None` if no content was ever appended, and the accumulated
    /// content otherwise.
    pub fn into_content(self) -> Option<String> {
        if self.has_content {
            Some(self.content)
        } else {
            None
        }
    }
}

impl CollectContent for ContentCollector {
    fn add_text(&mut self, text: &str) {
        self.has_content = true;
        self.content.push_str(text);
    }

    fn add_cdata(&mut self, cdata: &str) {
        self.has_content = true;
        self.content.push_str(cdata);
    }
}

impl fmt::Display for ContentCollector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.content)
    }
}
