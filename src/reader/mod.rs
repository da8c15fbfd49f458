//! Contains the node cursor contract and its `quick-xml` based implementation.

mod cursor;

pub use cursor::XmlCursor;

use crate::errors::{Result, SyntaxError};
use crate::node::NodeKind;

/// A forward-only pointer into a stream of XML nodes.
///
/// Exactly one node is current at any time, and advancing is the only way to
/// change it. While the cursor is on a start tag, its attributes can be visited
/// one by one with [`move_to_next_attribute`]; they then become the current
/// node. [`advance`] from an attribute moves to the node after the start tag.
///
/// Every parse function of this crate borrows a single cursor mutably for the
/// duration of the call and hands the same cursor down to nested calls.
///
/// [`move_to_next_attribute`]: NodeCursor::move_to_next_attribute
/// [`advance`]: NodeCursor::advance
pub trait NodeCursor {
    /// Kind of the current node.
    fn kind(&self) -> NodeKind;

    /// Qualified name of the current element or attribute. Empty for nodes
    /// without a name.
    fn name(&self) -> &str;

    /// Value of the current attribute, text, CDATA, whitespace or comment.
    /// Empty for elements.
    fn value(&self) -> &str;

    /// Returns `true` if the cursor is on a self-closing start tag, like
    /// `<tag/>`. Always `false` while positioned on one of its attributes.
    fn is_empty_element(&self) -> bool;

    /// Returns `true` if the current start tag, or the start tag owning the
    /// current attribute, has attributes.
    fn has_attributes(&self) -> bool;

    /// Moves to the next node of the stream. Returns `false` once the end of
    /// the stream is reached.
    fn advance(&mut self) -> Result<bool>;

    /// Moves to the first attribute when on a start tag, or to the next one
    /// when on an attribute. Returns `false`, leaving the position unchanged,
    /// if there is no such attribute.
    fn move_to_next_attribute(&mut self) -> bool;

    /// Moves from an attribute back to the start tag which owns it. Returns
    /// `false` if the cursor was not on an attribute.
    fn move_to_element(&mut self) -> bool;

    /// Leaves attribute iteration and skips comments, whitespace, processing
    /// instructions, the XML declaration and DOCTYPE. Returns the kind of the
    /// node the cursor stopped on.
    fn move_to_content(&mut self) -> Result<NodeKind> {
        self.move_to_element();
        loop {
            match self.kind() {
                NodeKind::Initial
                | NodeKind::Whitespace
                | NodeKind::SignificantWhitespace
                | NodeKind::Comment
                | NodeKind::ProcessingInstruction
                | NodeKind::Declaration
                | NodeKind::DocumentType => {
                    self.advance()?;
                }
                kind => return Ok(kind),
            }
        }
    }

    /// Consumes the start tag at (or after) the current position, ignoring its
    /// attributes.
    fn read_start_element(&mut self) -> Result<()> {
        match self.move_to_content()? {
            NodeKind::StartElement => {
                self.advance()?;
                Ok(())
            }
            found => Err(SyntaxError::UnexpectedNode {
                expected: NodeKind::StartElement,
                found,
            }
            .into()),
        }
    }

    /// Consumes the end tag at (or after) the current position.
    ///
    /// Whether the end tag matches its start tag is verified by the cursor
    /// when the end tag is read.
    fn read_end_element(&mut self) -> Result<()> {
        match self.move_to_content()? {
            NodeKind::EndElement => {
                self.advance()?;
                Ok(())
            }
            found => Err(SyntaxError::UnexpectedNode {
                expected: NodeKind::EndElement,
                found,
            }
            .into()),
        }
    }

    /// Reads the content of a simple element as one string and consumes the
    /// element including its end tag. The cursor is left on the node right
    /// after the element.
    ///
    /// Text, CDATA and whitespace are concatenated, comments and processing
    /// instructions are skipped. A self-closing element yields an empty string.
    /// A child element is an error.
    fn read_element_content_as_string(&mut self) -> Result<String> {
        let kind = self.move_to_content()?;
        if kind != NodeKind::StartElement {
            return Err(SyntaxError::UnexpectedNode {
                expected: NodeKind::StartElement,
                found: kind,
            }
            .into());
        }
        if self.is_empty_element() {
            self.advance()?;
            return Ok(String::new());
        }

        let element = self.name().to_owned();
        let mut content = String::new();
        loop {
            self.advance()?;
            match self.kind() {
                NodeKind::Text
                | NodeKind::CData
                | NodeKind::Whitespace
                | NodeKind::SignificantWhitespace => content.push_str(self.value()),
                NodeKind::Comment | NodeKind::ProcessingInstruction => {}
                NodeKind::EndElement => {
                    self.advance()?;
                    return Ok(content);
                }
                NodeKind::StartElement => {
                    return Err(SyntaxError::ElementInTextContent {
                        element,
                        child: self.name().to_owned(),
                    }
                    .into())
                }
                NodeKind::EndOfStream => {
                    return Err(SyntaxError::UnexpectedEof(format!("<{}>", element)).into())
                }
                found => {
                    return Err(SyntaxError::UnexpectedNode {
                        expected: NodeKind::Text,
                        found,
                    }
                    .into())
                }
            }
        }
    }
}

/// A struct that holds a cursor configuration.
///
/// Current cursor configuration can be retrieved by calling [`XmlCursor::config()`]
/// and changed by changing properties of the object returned by a call to
/// [`XmlCursor::config_mut()`].
///
/// [`XmlCursor::config()`]: crate::reader::XmlCursor::config
/// [`XmlCursor::config_mut()`]: crate::reader::XmlCursor::config_mut
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Config {
    /// Whether line breaks in text should be normalized.
    ///
    /// When set to `true`, every `\r\n` pair and every lone `\r` in text, CDATA
    /// and whitespace nodes is replaced by a single `\n`, as required by
    /// section 2.11 of the XML specification.
    ///
    /// Default: `true`
    pub normalize_line_endings: bool,

    /// Whether attribute values should be normalized.
    ///
    /// When set to `true`, each tab, carriage return and line feed in a raw
    /// attribute value is replaced by a space before character and entity
    /// references are resolved.
    ///
    /// Default: `true`
    pub normalize_attribute_values: bool,

    /// Whether `xml:space` attributes are honoured.
    ///
    /// When set to `true`, whitespace-only text inside an element with
    /// `xml:space="preserve"` (or inside its descendants, until overridden by
    /// `xml:space="default"`) is reported as [`NodeKind::SignificantWhitespace`]
    /// instead of [`NodeKind::Whitespace`].
    ///
    /// Default: `true`
    pub track_xml_space: bool,

    /// Whether comments should be validated. If enabled, in case of invalid
    /// comment a syntax error is returned.
    ///
    /// When set to `true`, every comment will be checked for not containing
    /// `--`, which is not allowed in XML comments.
    ///
    /// Default: `false`
    pub check_comments: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            normalize_line_endings: true,
            normalize_attribute_values: true,
            track_xml_space: true,
            check_comments: false,
        }
    }
}
