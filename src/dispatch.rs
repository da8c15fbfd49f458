//! The element dispatcher: reads one element under a caller-declared schema.
//!
//! The schema is given as callbacks. The attribute callback decides which
//! attributes are legal, the child callback parses legal child elements, and
//! a [`CollectContent`] receives text. Anything the callbacks do not accept is
//! a [`SchemaError`], so unrecognized markup is never silently ignored.
//!
//! The callbacks record their results into a *target*: a caller-owned value
//! which the dispatcher hands to every callback but never looks at.
//!
//! # Cursor contract
//!
//! [`read_element`] starts with the cursor on the start tag of the element and
//! returns with the cursor on the first content-bearing node after the
//! element (see [`skip_non_content`]), or at the end of the stream. A child
//! callback must leave the cursor the same way after the child it consumed,
//! usually by calling [`read_element`] recursively. A callback that stops
//! anywhere else corrupts the walk of the parent element; the dispatcher
//! cannot detect that.
//!
//! # Example
//!
//! ```
//! # use pretty_assertions::assert_eq;
//! use xmlio::dispatch::read_element;
//! use xmlio::reader::{NodeCursor, XmlCursor};
//! use xmlio::errors::SchemaError;
//! use xmlio::{ContentCollector, Result};
//!
//! #[derive(Default)]
//! struct Message {
//!     id: Option<String>,
//!     body: Option<String>,
//! }
//!
//! fn attribute(name: &str, value: &str, message: &mut Message) -> bool {
//!     match name {
//!         "id" => message.id = Some(value.to_owned()),
//!         _ => return false,
//!     }
//!     true
//! }
//!
//! fn child(cursor: &mut XmlCursor<&[u8]>, name: &str, message: &mut Message) -> Result<bool> {
//!     match name {
//!         "body" => {
//!             let mut text = ContentCollector::new();
//!             read_element(cursor, &mut (), "body", None, None, Some(&mut text))?;
//!             message.body = text.into_content();
//!         }
//!         _ => return Err(SchemaError::unknown_element("message", name).into()),
//!     }
//!     Ok(true)
//! }
//!
//! let mut cursor = XmlCursor::from_str(r#"<message id="7"><body>Hi!</body></message>"#);
//! cursor.advance()?;
//!
//! let mut message = Message::default();
//! read_element(&mut cursor, &mut message, "message", Some(&mut attribute), Some(&mut child), None)?;
//!
//! assert_eq!(message.id.as_deref(), Some("7"));
//! assert_eq!(message.body.as_deref(), Some("Hi!"));
//! # Ok::<(), xmlio::Error>(())
//! ```
//!
//! [`skip_non_content`]: crate::skip::skip_non_content

use crate::content::CollectContent;
use crate::errors::{Error, Result, SchemaError, SyntaxError};
use crate::node::NodeKind;
use crate::reader::NodeCursor;
use crate::skip::{skip_non_content, step};

/// Callback which accepts an attribute `(name, value)` by recording it into
/// the target and returning `true`, or rejects it by returning `false`.
pub type AttributeFn<'a, T> = dyn FnMut(&str, &str, &mut T) -> bool + 'a;

/// Callback which parses a child element `name` the cursor is on.
///
/// The callback must consume the whole child, end tag included, and leave
/// the cursor as [`read_element`] does. It rejects a child it does not know by
/// returning an error, usually [`SchemaError::UnknownElement`]. The returned
/// flag is what [`read_element`] returns for the child; the dispatcher does
/// not look at it.
pub type ElementFn<'a, C, T> = dyn FnMut(&mut C, &str, &mut T) -> Result<bool> + 'a;

/// Reads the element `element` the cursor is on.
///
/// - every attribute except namespace declarations is passed to `attributes`.
///   It is an error if the callback is missing or rejects the attribute;
/// - every child element is passed to `children`. It is an error if the
///   callback is missing. The callback rejects a child by returning an error;
/// - text and CDATA are appended to `content`. It is an error if no
///   collector is given. If the element is not self-closing, the collector
///   is also told about the (possibly empty) content between its tags.
///
/// Returns `false` only for a self-closing element without attributes, that is,
/// an element with no content at all, and `true` otherwise.
///
/// # Errors
///
/// - [`SchemaError::NotAtElement`] if the cursor is not on a start tag named `element`;
/// - [`SchemaError::UnknownAttribute`], [`SchemaError::UnknownElement`] or
///   [`SchemaError::ContentWithoutCollector`] for markup the schema does not allow;
/// - [`SchemaError::MismatchedEnd`] if the end tag has a different name;
/// - [`Error::InternalParserFailure`] for a content node the dispatcher has no
///   handling for, for example significant whitespace;
/// - any error of the cursor or of the callbacks, unchanged.
///
/// After an error the cursor position is unspecified.
pub fn read_element<C, T>(
    cursor: &mut C,
    target: &mut T,
    element: &str,
    mut attributes: Option<&mut AttributeFn<T>>,
    mut children: Option<&mut ElementFn<C, T>>,
    mut content: Option<&mut dyn CollectContent>,
) -> Result<bool>
where
    C: NodeCursor + ?Sized,
    T: ?Sized,
{
    expect_element(cursor, element)?;

    let was_empty = cursor.is_empty_element();
    if was_empty && !cursor.has_attributes() {
        cursor.advance()?;
        skip_non_content(cursor)?;
        trace!("<{}/> has no content", element);
        return Ok(false);
    }
    trace!("reading <{}>", element);

    if !was_empty {
        // An open/close tag pair is content, even with nothing in between
        if let Some(content) = content.as_deref_mut() {
            content.add_text("");
        }
    }

    if !step(cursor)? {
        return Err(SyntaxError::UnexpectedEof(format!("<{}>", element)).into());
    }
    skip_non_content(cursor)?;

    loop {
        match cursor.kind() {
            NodeKind::Attribute => {
                if !is_namespace_declaration(cursor.name()) {
                    let accepted = match attributes.as_deref_mut() {
                        Some(f) => f(cursor.name(), cursor.value(), target),
                        None => false,
                    };
                    if !accepted {
                        debug!("<{}>: rejected attribute `{}`", element, cursor.name());
                        return Err(SchemaError::UnknownAttribute {
                            element: element.to_owned(),
                            attribute: cursor.name().to_owned(),
                        }
                        .into());
                    }
                }

                step(cursor)?;
                skip_non_content(cursor)?;
                if was_empty && cursor.kind() != NodeKind::Attribute {
                    trace!("<{}/> consumed", element);
                    return Ok(true);
                }
            }
            // A self-closing tag can only have attributes
            kind if was_empty => return Err(Error::InternalParserFailure(kind)),
            NodeKind::StartElement => {
                let child = cursor.name().to_owned();
                match children.as_deref_mut() {
                    // `false` only says that the child was self-closing
                    Some(f) => {
                        f(cursor, &child, target)?;
                    }
                    None => {
                        debug!("<{}>: child element <{}> without a handler", element, child);
                        return Err(SchemaError::unknown_element(element, &child).into());
                    }
                }
            }
            NodeKind::EndElement => {
                if cursor.name() != element {
                    return Err(SchemaError::MismatchedEnd {
                        expected: element.to_owned(),
                        found: cursor.name().to_owned(),
                    }
                    .into());
                }
                step(cursor)?;
                skip_non_content(cursor)?;
                break;
            }
            kind @ (NodeKind::Text | NodeKind::CData) => {
                match content.as_deref_mut() {
                    Some(content) if kind == NodeKind::Text => content.add_text(cursor.value()),
                    Some(content) => content.add_cdata(cursor.value()),
                    None => {
                        debug!("<{}>: content without a collector", element);
                        return Err(SchemaError::ContentWithoutCollector {
                            element: element.to_owned(),
                            content: cursor.value().to_owned(),
                        }
                        .into());
                    }
                }
                step(cursor)?;
                skip_non_content(cursor)?;
            }
            NodeKind::EndOfStream => {
                return Err(SyntaxError::UnexpectedEof(format!("<{}>", element)).into())
            }
            kind => return Err(Error::InternalParserFailure(kind)),
        }
    }

    trace!("</{}> consumed", element);
    Ok(true)
}

/// Checks that the cursor is on the start tag of `element`.
pub(crate) fn expect_element<C>(cursor: &C, element: &str) -> Result<()>
where
    C: NodeCursor + ?Sized,
{
    if cursor.kind() == NodeKind::StartElement && cursor.name() == element {
        return Ok(());
    }
    Err(SchemaError::NotAtElement {
        expected: element.to_owned(),
        kind: cursor.kind(),
        found: cursor.name().to_owned(),
    }
    .into())
}

/// Returns `true` for `xmlns` and `xmlns:prefix` attributes.
#[inline]
pub(crate) fn is_namespace_declaration(name: &str) -> bool {
    match name.strip_prefix("xmlns") {
        Some(rest) => rest.is_empty() || rest.starts_with(':'),
        None => false,
    }
}
