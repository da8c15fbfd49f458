//! Readers for two common element shapes: records and lists.
//!
//! A *record* is an element whose data lives entirely in its attributes, for
//! example `<contact name="Ann" mail="ann@example.com"/>`. A *list* is an
//! element whose children are all the same element, for example
//! `<contacts><contact .../><contact .../></contacts>`.
//!
//! Both readers follow the cursor contract of [`read_element`]: they start on
//! the start tag and return with the cursor on the first content-bearing node
//! after the element.
//!
//! [`read_element`]: crate::dispatch::read_element

use crate::dispatch::{expect_element, is_namespace_declaration};
use crate::errors::{Result, SchemaError, SyntaxError};
use crate::node::NodeKind;
use crate::reader::NodeCursor;
use crate::skip::{skip_non_content, step};

/// Reads an element which carries data only in its attributes.
///
/// A fresh `T::default()` is passed to `parse_attribute` together with every
/// attribute, except namespace declarations. The callback returns `false` for
/// an attribute it does not know, which fails the read. The element may be
/// self-closing or have an end tag, but nothing except whitespace, comments
/// and processing instructions may appear between the tags.
///
/// # Errors
///
/// - [`SchemaError::NotAtElement`] if the cursor is not on a start tag named `element`;
/// - [`SchemaError::UnknownAttribute`] if the callback rejects an attribute;
/// - [`SchemaError::UnknownElement`] for any child element;
/// - [`SchemaError::UnexpectedContent`] for text and other content;
/// - any error of the cursor.
///
/// # Example
///
/// ```
/// # use pretty_assertions::assert_eq;
/// use xmlio::reader::{NodeCursor, XmlCursor};
/// use xmlio::record::read_record;
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let mut cursor = XmlCursor::from_str(r#"<point x="1" y="-2"/>"#);
/// cursor.advance()?;
///
/// let point: Point = read_record(&mut cursor, "point", |name, value, point: &mut Point| {
///     let slot = match name {
///         "x" => &mut point.x,
///         "y" => &mut point.y,
///         _ => return false,
///     };
///     value.parse().map(|v| *slot = v).is_ok()
/// })?;
/// assert_eq!(point, Point { x: 1, y: -2 });
/// # Ok::<(), xmlio::Error>(())
/// ```
pub fn read_record<C, T, F>(cursor: &mut C, element: &str, mut parse_attribute: F) -> Result<T>
where
    C: NodeCursor + ?Sized,
    T: Default,
    F: FnMut(&str, &str, &mut T) -> bool,
{
    expect_element(cursor, element)?;

    let mut record = T::default();
    let was_empty = cursor.is_empty_element();
    if was_empty && !cursor.has_attributes() {
        cursor.advance()?;
        skip_non_content(cursor)?;
        return Ok(record);
    }
    trace!("reading record <{}>", element);

    step(cursor)?;
    loop {
        skip_non_content(cursor)?;
        match cursor.kind() {
            NodeKind::Attribute => {
                if !is_namespace_declaration(cursor.name())
                    && !parse_attribute(cursor.name(), cursor.value(), &mut record)
                {
                    debug!("<{}>: rejected attribute `{}`", element, cursor.name());
                    return Err(SchemaError::UnknownAttribute {
                        element: element.to_owned(),
                        attribute: cursor.name().to_owned(),
                    }
                    .into());
                }
                step(cursor)?;
                if was_empty && cursor.kind() != NodeKind::Attribute {
                    skip_non_content(cursor)?;
                    return Ok(record);
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
                cursor.advance()?;
                skip_non_content(cursor)?;
                return Ok(record);
            }
            NodeKind::StartElement => {
                debug!("<{}>: record with child <{}>", element, cursor.name());
                return Err(SchemaError::UnknownElement {
                    parent: element.to_owned(),
                    element: cursor.name().to_owned(),
                }
                .into());
            }
            NodeKind::EndOfStream => {
                return Err(SyntaxError::UnexpectedEof(format!("<{}>", element)).into())
            }
            kind => {
                debug!("<{}>: record with {} content", element, kind);
                return Err(SchemaError::UnexpectedContent {
                    element: element.to_owned(),
                    kind,
                }
                .into());
            }
        }
    }
}

/// Reads an element `parent` whose children are all elements named `child`.
///
/// `create` is called with the cursor on the start tag of each child and
/// must consume the child entirely, usually with [`read_record`] or
/// [`read_element`]. Attributes of `parent` are ignored.
///
/// Returns `None` if `parent` is self-closing or contains no `child`
/// elements, and the items in document order otherwise.
///
/// # Errors
///
/// - [`SchemaError::NotAtElement`] if the cursor is not on a start tag named `parent`;
/// - [`SchemaError::UnknownElement`] for a child with another name;
/// - [`SchemaError::UnexpectedContent`] for text and other content in `parent`;
/// - any error of the cursor or of `create`.
///
/// [`read_element`]: crate::dispatch::read_element
pub fn read_list<C, T, F>(
    cursor: &mut C,
    parent: &str,
    child: &str,
    mut create: F,
) -> Result<Option<Vec<T>>>
where
    C: NodeCursor + ?Sized,
    F: FnMut(&mut C) -> Result<T>,
{
    expect_element(cursor, parent)?;

    if cursor.is_empty_element() {
        cursor.advance()?;
        skip_non_content(cursor)?;
        return Ok(None);
    }
    trace!("reading list <{}> of <{}>", parent, child);

    cursor.advance()?;
    let mut items = Vec::new();
    loop {
        skip_non_content(cursor)?;
        match cursor.kind() {
            NodeKind::StartElement if cursor.name() == child => items.push(create(cursor)?),
            NodeKind::StartElement => {
                debug!("<{}>: rejected list item <{}>", parent, cursor.name());
                return Err(SchemaError::UnknownElement {
                    parent: parent.to_owned(),
                    element: cursor.name().to_owned(),
                }
                .into());
            }
            NodeKind::EndElement if cursor.name() == parent => {
                cursor.advance()?;
                skip_non_content(cursor)?;
                break;
            }
            NodeKind::EndElement => {
                return Err(SchemaError::MismatchedEnd {
                    expected: parent.to_owned(),
                    found: cursor.name().to_owned(),
                }
                .into())
            }
            NodeKind::EndOfStream => {
                return Err(SyntaxError::UnexpectedEof(format!("<{}>", parent)).into())
            }
            kind => {
                debug!("<{}>: list with {} content", parent, kind);
                return Err(SchemaError::UnexpectedContent {
                    element: parent.to_owned(),
                    kind,
                }
                .into());
            }
        }
    }

    trace!("</{}> consumed with {} items", parent, items.len());
    Ok(if items.is_empty() { None } else { Some(items) })
}
