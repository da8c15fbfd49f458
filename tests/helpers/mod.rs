//! Utility functions for integration tests
#![allow(dead_code)]

use std::collections::HashMap;

use xmlio::errors::SchemaError;
use xmlio::reader::{NodeCursor, XmlCursor};
use xmlio::{read_element, NodeKind, Result};

/// Creates a cursor over `xml` positioned on the first start tag named `name`.
pub fn cursor_at<'a>(xml: &'a str, name: &str) -> XmlCursor<&'a [u8]> {
    let mut cursor = XmlCursor::from_str(xml);
    advance_to(&mut cursor, name);
    cursor
}

/// Advances the cursor to the next start tag named `name`.
pub fn advance_to<C: NodeCursor>(cursor: &mut C, name: &str) {
    while cursor.kind() != NodeKind::StartElement || cursor.name() != name {
        assert!(
            cursor.advance().unwrap(),
            "could not advance to requested element <{}>",
            name
        );
    }
}

/// Asserts that the cursor is on a node of the given kind and name.
#[macro_export]
macro_rules! assert_at {
    ($cursor:expr, $kind:ident) => {
        assert_eq!(
            ($cursor.kind(), $cursor.name()),
            (::xmlio::NodeKind::$kind, "")
        )
    };
    ($cursor:expr, $kind:ident, $name:expr) => {
        assert_eq!(
            ($cursor.kind(), $cursor.name()),
            (::xmlio::NodeKind::$kind, $name)
        )
    };
}

/// Asserts that the result is an error of the given kind.
#[macro_export]
macro_rules! assert_err {
    ($result:expr, $kind:ident) => {
        match $result {
            Err(e) => assert_eq!(e.kind(), ::xmlio::ErrorKind::$kind, "{}", e),
            Ok(v) => panic!("expected {} error, got {:?}", stringify!($kind), v),
        }
    };
}

/// Records everything a document contains, keyed by the element it was seen in.
///
/// Only attributes and children with `known` in their name are accepted.
#[derive(Debug)]
pub struct Recorder {
    /// `{element}_{attribute}` => value
    pub attributes: HashMap<String, String>,
    /// Elements currently open, the outermost first
    pub stack: Vec<String>,
}

impl Default for Recorder {
    fn default() -> Self {
        Self {
            attributes: HashMap::new(),
            stack: vec!["root".to_owned()],
        }
    }
}

impl Recorder {
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// Attribute callback accepting every attribute with `known` in its name.
pub fn known_attribute(name: &str, value: &str, recorder: &mut Recorder) -> bool {
    if !name.contains("known") {
        return false;
    }
    let key = format!("{}_{}", recorder.stack.last().unwrap(), name);
    recorder.attributes.insert(key, value.to_owned());
    true
}

/// Child callback accepting every element with `known` in its name, read
/// recursively with the same callbacks. Returns what `read_element` returned
/// for the child.
pub fn known_child(
    cursor: &mut XmlCursor<&[u8]>,
    name: &str,
    recorder: &mut Recorder,
) -> Result<bool> {
    if !name.contains("known") {
        let parent = recorder.stack.last().map_or("", String::as_str);
        return Err(SchemaError::unknown_element(parent, name).into());
    }
    recorder.stack.push(name.to_owned());
    let has_content = read_element(
        cursor,
        recorder,
        name,
        Some(&mut known_attribute),
        Some(&mut known_child),
        None,
    )?;
    assert_eq!(recorder.stack.pop().as_deref(), Some(name));
    Ok(has_content)
}
