//! Error management module

use crate::node::NodeKind;
use quick_xml::escape::EscapeError;
use quick_xml::events::attributes::AttrError;
use std::fmt;

/// Coarse classification of an [`Error`].
///
/// Lets callers react to a class of failures (for example, clamp on
/// [`Overflow`] but reject on [`Format`]) without matching every variant.
///
/// [`Overflow`]: ErrorKind::Overflow
/// [`Format`]: ErrorKind::Format
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// Malformed markup, detected by the node cursor.
    Syntax,
    /// A structural rule of the caller-declared schema was violated.
    Schema,
    /// Text is not a valid literal for the requested type.
    Format,
    /// A numeric literal is valid but does not fit into the requested type.
    Overflow,
    /// The dispatcher observed a node it has no handling for.
    InternalParserFailure,
}

/// Errors reported by the node cursor while reading markup.
#[derive(Debug)]
pub enum SyntaxError {
    /// Error reported by the tokenizer: I/O failure, malformed markup,
    /// mismatched end tag or an undecodable document.
    Xml(quick_xml::Error),
    /// Malformed attribute list in a start tag.
    InvalidAttr(AttrError),
    /// Unknown or malformed entity or character reference.
    Escape(EscapeError),
    /// The stream ended before the construct was complete.
    UnexpectedEof(String),
    /// A read operation expected the cursor on a specific kind of node.
    UnexpectedNode {
        /// The kind of node the operation requires
        expected: NodeKind,
        /// The kind of node the cursor was on
        found: NodeKind,
    },
    /// A start tag appeared inside an element read as a plain string.
    ElementInTextContent {
        /// Element which content was read
        element: String,
        /// Name of the offending child element
        child: String,
    },
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SyntaxError::Xml(e) => write!(f, "{}", e),
            SyntaxError::InvalidAttr(e) => write!(f, "invalid attribute: {}", e),
            SyntaxError::Escape(e) => write!(f, "{}", e),
            SyntaxError::UnexpectedEof(what) => {
                write!(f, "unexpected end of stream while reading {}", what)
            }
            SyntaxError::UnexpectedNode { expected, found } => {
                write!(f, "expected {}, found {}", expected, found)
            }
            SyntaxError::ElementInTextContent { element, child } => write!(
                f,
                "element <{}> cannot be read as text: it contains child element <{}>",
                element, child
            ),
        }
    }
}

impl std::error::Error for SyntaxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SyntaxError::Xml(e) => Some(e),
            SyntaxError::InvalidAttr(e) => Some(e),
            SyntaxError::Escape(e) => Some(e),
            _ => None,
        }
    }
}

/// Violations of the structure declared by the caller's callbacks.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SchemaError {
    /// Parsing of an element was requested, but the cursor is somewhere else.
    NotAtElement {
        /// Element the caller wanted to parse
        expected: String,
        /// Kind of the node the cursor was on
        kind: NodeKind,
        /// Name of the node the cursor was on, empty for unnamed nodes
        found: String,
    },
    /// The attribute callback did not recognize an attribute, or the element
    /// accepts no attributes at all.
    UnknownAttribute {
        /// Element which owns the attribute
        element: String,
        /// Name of the rejected attribute
        attribute: String,
    },
    /// A child element appeared where it is not allowed.
    UnknownElement {
        /// Element which contains the child
        parent: String,
        /// Name of the rejected child
        element: String,
    },
    /// The end tag does not close the element being parsed.
    MismatchedEnd {
        /// Element being parsed
        expected: String,
        /// Name found in the end tag
        found: String,
    },
    /// Text or CDATA appeared, but the caller supplied no content collector.
    ContentWithoutCollector {
        /// Element which contains the content
        element: String,
        /// The content itself
        content: String,
    },
    /// A node appeared that the element's schema does not allow at that
    /// place, for example text inside an attribute-only record.
    UnexpectedContent {
        /// Element being parsed
        element: String,
        /// Kind of the offending node
        kind: NodeKind,
    },
}

impl SchemaError {
    /// Creates an [`UnknownElement`] error for child `element` of `parent`.
    ///
    /// Child callbacks of [`read_element`] return it for children they do not
    /// know.
    ///
    /// [`UnknownElement`]: SchemaError::UnknownElement
    /// [`read_element`]: crate::dispatch::read_element
    pub fn unknown_element(parent: &str, element: &str) -> Self {
        SchemaError::UnknownElement {
            parent: parent.to_owned(),
            element: element.to_owned(),
        }
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SchemaError::NotAtElement {
                expected,
                kind,
                found,
            } => write!(
                f,
                "parsing <{}> without <{}>: cursor is on {} `{}`",
                expected, expected, kind, found
            ),
            SchemaError::UnknownAttribute { element, attribute } => {
                write!(f, "unknown attribute `{}` on <{}>", attribute, element)
            }
            SchemaError::UnknownElement { parent, element } => {
                write!(f, "unknown element <{}> under <{}>", element, parent)
            }
            SchemaError::MismatchedEnd { expected, found } => write!(
                f,
                "open element <{}> does not match close element </{}>",
                expected, found
            ),
            SchemaError::ContentWithoutCollector { element, content } => write!(
                f,
                "content encountered in <{}> without a collector: {:?}",
                element, content
            ),
            SchemaError::UnexpectedContent { element, kind } => {
                write!(f, "unexpected {} in <{}>", kind, element)
            }
        }
    }
}

impl std::error::Error for SchemaError {}

/// The error type used by this crate.
#[derive(Debug)]
pub enum Error {
    /// Malformed markup detected by the node cursor. Always fatal.
    Syntax(SyntaxError),
    /// A structural rule was violated. Always fatal to the current parse.
    Schema(SchemaError),
    /// Text is not a valid literal for the requested type.
    Format {
        /// The offending text
        value: String,
        /// Name of the requested type
        ty: &'static str,
    },
    /// A numeric literal is out of the representable range of the type.
    Overflow {
        /// The offending text
        value: String,
        /// Name of the requested type
        ty: &'static str,
    },
    /// The dispatcher met a node kind it has no defined handling for.
    /// This is a defect rather than an input error.
    InternalParserFailure(NodeKind),
}

impl Error {
    /// Returns the class this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Syntax(_) => ErrorKind::Syntax,
            Error::Schema(_) => ErrorKind::Schema,
            Error::Format { .. } => ErrorKind::Format,
            Error::Overflow { .. } => ErrorKind::Overflow,
            Error::InternalParserFailure(_) => ErrorKind::InternalParserFailure,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Syntax(e) => write!(f, "syntax error: {}", e),
            Error::Schema(e) => write!(f, "schema error: {}", e),
            Error::Format { value, ty } => write!(f, "`{}` is not a valid {} value", value, ty),
            Error::Overflow { value, ty } => {
                write!(f, "`{}` is out of the range of {}", value, ty)
            }
            Error::InternalParserFailure(kind) => {
                write!(f, "internal parser failure: unhandled node kind: {}", kind)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Syntax(e) => Some(e),
            Error::Schema(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SyntaxError> for Error {
    /// Creates a new `Error::Syntax` from the given error
    #[inline]
    fn from(error: SyntaxError) -> Error {
        Error::Syntax(error)
    }
}

impl From<SchemaError> for Error {
    /// Creates a new `Error::Schema` from the given error
    #[inline]
    fn from(error: SchemaError) -> Error {
        Error::Schema(error)
    }
}

impl From<quick_xml::Error> for Error {
    #[inline]
    fn from(error: quick_xml::Error) -> Error {
        Error::Syntax(SyntaxError::Xml(error))
    }
}

impl From<AttrError> for Error {
    #[inline]
    fn from(error: AttrError) -> Error {
        Error::Syntax(SyntaxError::InvalidAttr(error))
    }
}

impl From<EscapeError> for Error {
    #[inline]
    fn from(error: EscapeError) -> Error {
        Error::Syntax(SyntaxError::Escape(error))
    }
}

/// A specialized `Result` type where the error is hard-wired to [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
