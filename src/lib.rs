//! Schema-checked reading of XML documents into your own types.
//!
//! The crate is a thin layer over a forward-only [node cursor]. You declare,
//! per element, which attributes and child elements are legal and what to do
//! with them. The readers then walk the element, hand everything to your
//! callbacks and reject anything you did not declare. Nothing is silently
//! skipped except whitespace, comments and processing instructions.
//!
//! ## Building blocks
//!
//! - [`read_element`]: reads one element with optional attribute, child
//!   element and text handlers. Child handlers usually call it recursively;
//! - [`read_record`]: reads an element that carries data only in attributes;
//! - [`read_list`]: reads an element whose children all have the same name;
//! - the [`elements`] module: reads leaf elements as strings, integers and
//!   booleans, with the conversions of the [`convert`] module.
//!
//! All of them take the cursor on the start tag of the element and leave it
//! after the end tag, so they compose freely.
//!
//! ## Example
//!
//! ```rust
//! # use pretty_assertions::assert_eq;
//! use xmlio::elements::{read_generic_bool_element, read_generic_string_element};
//! use xmlio::errors::SchemaError;
//! use xmlio::reader::{NodeCursor, XmlCursor};
//! use xmlio::{read_element, read_list, read_record, skip_non_content, Result};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Contact {
//!     name: String,
//!     mail: Option<String>,
//! }
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Book {
//!     title: Option<String>,
//!     shared: Option<bool>,
//!     contacts: Option<Vec<Contact>>,
//! }
//!
//! fn contact(name: &str, value: &str, contact: &mut Contact) -> bool {
//!     match name {
//!         "name" => contact.name = value.to_owned(),
//!         "mail" => contact.mail = Some(value.to_owned()),
//!         _ => return false,
//!     }
//!     true
//! }
//!
//! fn book_child(cursor: &mut XmlCursor<&[u8]>, name: &str, book: &mut Book) -> Result<bool> {
//!     match name {
//!         "title" => book.title = read_generic_string_element(cursor, name)?,
//!         "shared" => book.shared = read_generic_bool_element(cursor, name)?,
//!         "contacts" => {
//!             book.contacts = read_list(cursor, "contacts", "contact", |cursor| {
//!                 read_record(cursor, "contact", contact)
//!             })?;
//!             return Ok(true);
//!         }
//!         _ => return Err(SchemaError::unknown_element("book", name).into()),
//!     }
//!     skip_non_content(cursor)?;
//!     Ok(true)
//! }
//!
//! let xml = r#"<?xml version="1.0"?>
//! <book>
//!     <!-- shared with the team -->
//!     <title>Addresses</title>
//!     <shared>true</shared>
//!     <contacts>
//!         <contact name="Ann" mail="ann@example.com"/>
//!         <contact name="Bob"/>
//!     </contacts>
//! </book>"#;
//!
//! let mut cursor = XmlCursor::from_str(xml);
//! cursor.move_to_content()?;
//!
//! let mut book = Book::default();
//! read_element(&mut cursor, &mut book, "book", None, Some(&mut book_child), None)?;
//!
//! assert_eq!(book, Book {
//!     title: Some("Addresses".to_owned()),
//!     shared: Some(true),
//!     contacts: Some(vec![
//!         Contact { name: "Ann".to_owned(), mail: Some("ann@example.com".to_owned()) },
//!         Contact { name: "Bob".to_owned(), mail: None },
//!     ]),
//! });
//! # Ok::<(), xmlio::Error>(())
//! ```
//!
//! ## Features
//!
//! `xmlio` supports the following features:
//!
//! [node cursor]: reader::NodeCursor
#![cfg_attr(
    feature = "document-features",
    cfg_attr(doc, doc = ::document_features::document_features!(
        feature_label = "<a id=\"{feature}\" href=\"#{feature}\"><strong><code>{feature}</code></strong></a>"
    ))
)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

#[macro_use]
extern crate log;

pub mod content;
pub mod convert;
pub mod dispatch;
pub mod elements;
pub mod errors;
mod node;
pub mod reader;
pub mod record;
pub mod skip;

// reexports
pub use crate::content::{CollectContent, ContentCollector};
pub use crate::dispatch::read_element;
pub use crate::errors::{Error, ErrorKind, Result};
pub use crate::node::NodeKind;
pub use crate::reader::{Config, NodeCursor, XmlCursor};
pub use crate::record::{read_list, read_record};
pub use crate::skip::skip_non_content;
