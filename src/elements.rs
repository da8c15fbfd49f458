//! Readers for leaf elements which hold a single value as text.
//!
//! Values in the documents this crate reads often come in either of two
//! spellings, `<item count="3"/>` or `<item><count>3</count></item>`. The
//! `read_generic_*` functions accept both: on an attribute with the expected
//! name they return the attribute value, and on a start tag they read the
//! text of the element.
//!
//! Unlike [`read_element`], these readers do not skip the non-content nodes
//! following the element: the cursor is left on the node right after the end
//! tag, which may be whitespace. When used from a child callback, call
//! [`skip_non_content`] before returning.
//!
//! [`read_element`]: crate::dispatch::read_element
//! [`skip_non_content`]: crate::skip::skip_non_content

use crate::convert::{to_bool, to_i32, to_u64, NULL_SENTINEL};
use crate::dispatch::expect_element;
use crate::errors::{Result, SchemaError, SyntaxError};
use crate::node::NodeKind;
use crate::reader::NodeCursor;
use crate::skip::skip_non_content;

/// Reads the text of element `name`, with leading and trailing whitespace
/// trimmed.
///
/// If the cursor is on an attribute called `name`, returns its value
/// untrimmed and leaves the cursor where it is. Otherwise the cursor must be
/// on the start tag of `name`. A self-closing element, or one containing only
/// whitespace, yields `None`.
///
/// ```
/// # use pretty_assertions::assert_eq;
/// use xmlio::elements::read_generic_string_element;
/// use xmlio::reader::{NodeCursor, XmlCursor};
///
/// let mut cursor = XmlCursor::from_str("<name> Ann </name>");
/// cursor.advance()?;
/// assert_eq!(read_generic_string_element(&mut cursor, "name")?.as_deref(), Some("Ann"));
/// # Ok::<(), xmlio::Error>(())
/// ```
pub fn read_generic_string_element<C>(cursor: &mut C, name: &str) -> Result<Option<String>>
where
    C: NodeCursor + ?Sized,
{
    if cursor.kind() == NodeKind::Attribute && cursor.name() == name {
        return Ok(Some(cursor.value().to_owned()));
    }
    expect_element(cursor, name)?;

    if cursor.is_empty_element() {
        cursor.read_start_element()?;
        return Ok(None);
    }

    let content = cursor.read_element_content_as_string()?;
    let content = content.trim();
    if content.is_empty() {
        Ok(None)
    } else {
        Ok(Some(content.to_owned()))
    }
}

/// Like [`read_generic_string_element`], but the text `null` also yields `None`.
pub fn read_generic_nullable_string_element<C>(cursor: &mut C, name: &str) -> Result<Option<String>>
where
    C: NodeCursor + ?Sized,
{
    Ok(read_generic_string_element(cursor, name)?.filter(|s| s != NULL_SENTINEL))
}

/// Reads element `name` as [`read_generic_string_element`] does and converts
/// the text with [`to_i32`].
pub fn read_generic_int_element<C>(cursor: &mut C, name: &str) -> Result<Option<i32>>
where
    C: NodeCursor + ?Sized,
{
    to_i32(read_generic_string_element(cursor, name)?.as_deref())
}

/// Reads element `name` as [`read_generic_string_element`] does and converts
/// the text with [`to_u64`].
pub fn read_generic_uint64_element<C>(cursor: &mut C, name: &str) -> Result<Option<u64>>
where
    C: NodeCursor + ?Sized,
{
    to_u64(read_generic_string_element(cursor, name)?.as_deref())
}

/// Reads element `name` as [`read_generic_string_element`] does and converts
/// the text with [`to_bool`].
pub fn read_generic_bool_element<C>(cursor: &mut C, name: &str) -> Result<Option<bool>>
where
    C: NodeCursor + ?Sized,
{
    to_bool(read_generic_string_element(cursor, name)?.as_deref())
}

/// Reads a `<string>` element and returns its text as is, without trimming.
/// A self-closing `<string/>` yields an empty string.
pub fn read_string_element<C>(cursor: &mut C) -> Result<String>
where
    C: NodeCursor + ?Sized,
{
    cursor.move_to_content()?;
    expect_element(cursor, "string")?;
    cursor.read_element_content_as_string()
}

/// Reads element `root` whose children are all `array_element` elements with
/// text content, and returns the trimmed texts in document order.
///
/// Returns `None` if `root` is self-closing or has no `array_element`
/// children. Like the other readers of this module, the cursor is left right
/// after the end tag of `root`.
///
/// ```
/// # use pretty_assertions::assert_eq;
/// use xmlio::elements::read_element_with_children_element_array;
/// use xmlio::reader::{NodeCursor, XmlCursor};
///
/// let mut cursor = XmlCursor::from_str(r#"
///     <recipients>
///         <string>ann@example.com</string>
///         <string> bob@example.com </string>
///     </recipients>"#);
/// cursor.move_to_content()?;
///
/// assert_eq!(
///     read_element_with_children_element_array(&mut cursor, "recipients", "string")?,
///     Some(vec!["ann@example.com".to_owned(), "bob@example.com".to_owned()]),
/// );
/// # Ok::<(), xmlio::Error>(())
/// ```
pub fn read_element_with_children_element_array<C>(
    cursor: &mut C,
    root: &str,
    array_element: &str,
) -> Result<Option<Vec<String>>>
where
    C: NodeCursor + ?Sized,
{
    expect_element(cursor, root)?;

    if cursor.is_empty_element() {
        cursor.read_start_element()?;
        return Ok(None);
    }
    cursor.read_start_element()?;

    let mut items = Vec::new();
    loop {
        skip_non_content(cursor)?;
        match cursor.kind() {
            NodeKind::StartElement if cursor.name() == array_element => {
                let item = cursor.read_element_content_as_string()?;
                items.push(item.trim().to_owned());
            }
            NodeKind::StartElement => {
                debug!("<{}>: rejected array item <{}>", root, cursor.name());
                return Err(SchemaError::UnknownElement {
                    parent: root.to_owned(),
                    element: cursor.name().to_owned(),
                }
                .into());
            }
            NodeKind::EndElement if cursor.name() == root => {
                cursor.read_end_element()?;
                break;
            }
            NodeKind::EndElement => {
                return Err(SchemaError::MismatchedEnd {
                    expected: root.to_owned(),
                    found: cursor.name().to_owned(),
                }
                .into())
            }
            NodeKind::EndOfStream => {
                return Err(SyntaxError::UnexpectedEof(format!("<{}>", root)).into())
            }
            kind => {
                debug!("<{}>: array with {} content", root, kind);
                return Err(SchemaError::UnexpectedContent {
                    element: root.to_owned(),
                    kind,
                }
                .into());
            }
        }
    }

    Ok(if items.is_empty() { None } else { Some(items) })
}
