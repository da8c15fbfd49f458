//! Node cursor on top of the `quick-xml` pull reader.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use memchr::{memchr, memchr3};
use quick_xml::encoding::Decoder;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::errors::Result;
use crate::node::NodeKind;
use crate::reader::{Config, NodeCursor};

/// Decoded attribute of the current start tag.
#[derive(Clone, Debug)]
struct Attribute {
    name: String,
    value: String,
}

/// A [`NodeCursor`] over any [`BufRead`] source.
///
/// The events of the underlying `quick-xml` reader are turned into nodes one
/// at a time: nothing is buffered beyond the current start tag and its
/// attributes. Text is decoded, line endings are normalized and references
/// are resolved before a node becomes current, so the cursor never stops on
/// [`NodeKind::EntityReference`].
///
/// # Examples
///
/// ```
/// use pretty_assertions::assert_eq;
/// use xmlio::reader::{NodeCursor, XmlCursor};
/// use xmlio::NodeKind;
///
/// let mut cursor = XmlCursor::from_str(r#"<tag attr="value">text</tag>"#);
/// assert_eq!(cursor.kind(), NodeKind::Initial);
///
/// assert!(cursor.advance().unwrap());
/// assert_eq!(cursor.kind(), NodeKind::StartElement);
/// assert_eq!(cursor.name(), "tag");
///
/// assert!(cursor.move_to_next_attribute());
/// assert_eq!(cursor.kind(), NodeKind::Attribute);
/// assert_eq!((cursor.name(), cursor.value()), ("attr", "value"));
///
/// assert!(cursor.advance().unwrap());
/// assert_eq!((cursor.kind(), cursor.value()), (NodeKind::Text, "text"));
///
/// assert!(cursor.advance().unwrap());
/// assert_eq!(cursor.kind(), NodeKind::EndElement);
///
/// assert!(!cursor.advance().unwrap());
/// assert_eq!(cursor.kind(), NodeKind::EndOfStream);
/// ```
pub struct XmlCursor<R: BufRead> {
    reader: Reader<R>,
    /// Buffer for the events of `reader`, reused between reads
    buf: Vec<u8>,
    config: Config,

    kind: NodeKind,
    name: String,
    value: String,
    /// Whether the current start tag is self-closing
    empty: bool,
    /// Attributes of the current start tag
    attributes: Vec<Attribute>,
    /// Index into `attributes` if the cursor is on an attribute
    attribute: Option<usize>,
    /// One entry per open element: `true` if whitespace in it is significant
    /// because of an `xml:space="preserve"` in scope
    space: Vec<bool>,
}

/// Builder methods
impl<R: BufRead> XmlCursor<R> {
    /// Creates a cursor that reads from a reader implementing `BufRead`.
    ///
    /// The cursor is positioned before the first node; call [`advance`] to
    /// move to it.
    ///
    /// [`advance`]: NodeCursor::advance
    pub fn from_reader(reader: R) -> Self {
        let mut reader = Reader::from_reader(reader);
        let config = reader.config_mut();
        config.trim_text(false);
        config.expand_empty_elements = false;
        config.check_end_names = true;

        Self {
            reader,
            buf: Vec::new(),
            config: Config::default(),
            kind: NodeKind::Initial,
            name: String::new(),
            value: String::new(),
            empty: false,
            attributes: Vec::new(),
            attribute: None,
            space: Vec::new(),
        }
    }

    /// Returns reference to the cursor configuration.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Returns mutable reference to the cursor configuration. Changes take
    /// effect from the next node read.
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }
}

/// Getters
impl<R: BufRead> XmlCursor<R> {
    /// Gets the current byte position in the input data.
    ///
    /// Useful when debugging errors.
    pub fn buffer_position(&self) -> u64 {
        self.reader.buffer_position()
    }

    /// Number of elements opened and not closed yet. A non-empty start tag
    /// counts itself once it is current; an end tag no longer counts.
    pub fn depth(&self) -> usize {
        self.space.len()
    }

    /// Consumes the cursor returning the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader.into_inner()
    }
}

impl XmlCursor<BufReader<File>> {
    /// Creates a cursor over the content of the file at `path`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path).map_err(quick_xml::Error::from)?;
        Ok(Self::from_reader(BufReader::new(file)))
    }
}

impl<'a> XmlCursor<&'a [u8]> {
    /// Creates a cursor over the XML in a string slice.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &'a str) -> Self {
        Self::from_reader(s.as_bytes())
    }
}

impl<R: BufRead> NodeCursor for XmlCursor<R> {
    #[inline]
    fn kind(&self) -> NodeKind {
        match self.attribute {
            Some(_) => NodeKind::Attribute,
            None => self.kind,
        }
    }

    #[inline]
    fn name(&self) -> &str {
        match self.attribute {
            Some(i) => &self.attributes[i].name,
            None => &self.name,
        }
    }

    #[inline]
    fn value(&self) -> &str {
        match self.attribute {
            Some(i) => &self.attributes[i].value,
            None => &self.value,
        }
    }

    #[inline]
    fn is_empty_element(&self) -> bool {
        self.attribute.is_none() && self.kind == NodeKind::StartElement && self.empty
    }

    #[inline]
    fn has_attributes(&self) -> bool {
        self.kind == NodeKind::StartElement && !self.attributes.is_empty()
    }

    fn advance(&mut self) -> Result<bool> {
        self.attribute = None;
        if self.kind == NodeKind::EndOfStream {
            return Ok(false);
        }
        self.reader.config_mut().check_comments = self.config.check_comments;

        loop {
            self.buf.clear();
            let event = self.reader.read_event_into(&mut self.buf)?;
            let decoder = self.reader.decoder();
            let next = match event {
                Event::Start(e) => Next::Start {
                    name: decode(decoder, e.name().as_ref())?.into_owned(),
                    attributes: read_attributes(&e, decoder, &self.config)?,
                    empty: false,
                },
                Event::Empty(e) => Next::Start {
                    name: decode(decoder, e.name().as_ref())?.into_owned(),
                    attributes: read_attributes(&e, decoder, &self.config)?,
                    empty: true,
                },
                Event::End(e) => Next::End(decode(decoder, e.name().as_ref())?.into_owned()),
                Event::Text(e) if e.is_empty() => continue,
                Event::Text(e) => {
                    let kind = if !e.iter().all(|&b| is_whitespace(b)) {
                        NodeKind::Text
                    } else if self.space.last().copied().unwrap_or(false) {
                        NodeKind::SignificantWhitespace
                    } else {
                        NodeKind::Whitespace
                    };
                    let text = normalize_line_endings(decode(decoder, &e)?, &self.config);
                    Next::Node {
                        kind,
                        name: String::new(),
                        value: unescape(&text)?.into_owned(),
                    }
                }
                Event::CData(e) => Next::Node {
                    kind: NodeKind::CData,
                    name: String::new(),
                    value: normalize_line_endings(decode(decoder, &e)?, &self.config).into_owned(),
                },
                Event::Comment(e) => Next::Node {
                    kind: NodeKind::Comment,
                    name: String::new(),
                    value: decode(decoder, &e)?.into_owned(),
                },
                Event::PI(e) => Next::Node {
                    kind: NodeKind::ProcessingInstruction,
                    name: decode(decoder, e.target())?.into_owned(),
                    value: decode(decoder, e.content())?.trim_start().to_owned(),
                },
                Event::Decl(_) => Next::Node {
                    kind: NodeKind::Declaration,
                    name: "xml".to_owned(),
                    value: String::new(),
                },
                Event::DocType(e) => {
                    let value = decode(decoder, &e)?.into_owned();
                    Next::Node {
                        kind: NodeKind::DocumentType,
                        name: value.split_whitespace().next().unwrap_or("").to_owned(),
                        value,
                    }
                }
                Event::Eof => Next::Node {
                    kind: NodeKind::EndOfStream,
                    name: String::new(),
                    value: String::new(),
                },
            };

            self.value.clear();
            self.empty = false;
            match next {
                Next::Start {
                    name,
                    attributes,
                    empty,
                } => {
                    if !empty {
                        let inherited = self.space.last().copied().unwrap_or(false);
                        let preserve = self.config.track_xml_space
                            && xml_space(&attributes).unwrap_or(inherited);
                        self.space.push(preserve);
                    }
                    self.kind = NodeKind::StartElement;
                    self.name = name;
                    self.attributes = attributes;
                    self.empty = empty;
                }
                Next::End(name) => {
                    self.space.pop();
                    self.kind = NodeKind::EndElement;
                    self.name = name;
                    self.attributes.clear();
                }
                Next::Node { kind, name, value } => {
                    self.kind = kind;
                    self.name = name;
                    self.value = value;
                    self.attributes.clear();
                }
            }
            return Ok(self.kind != NodeKind::EndOfStream);
        }
    }

    fn move_to_next_attribute(&mut self) -> bool {
        if self.kind != NodeKind::StartElement {
            return false;
        }
        let next = self.attribute.map_or(0, |i| i + 1);
        if next < self.attributes.len() {
            self.attribute = Some(next);
            true
        } else {
            false
        }
    }

    fn move_to_element(&mut self) -> bool {
        self.attribute.take().is_some()
    }
}

/// Owned data of the node read from the tokenizer, before it becomes current.
enum Next {
    Start {
        name: String,
        attributes: Vec<Attribute>,
        empty: bool,
    },
    End(String),
    Node {
        kind: NodeKind,
        name: String,
        value: String,
    },
}

/// Decodes and unescapes all attributes of a start tag.
fn read_attributes(e: &BytesStart, decoder: Decoder, config: &Config) -> Result<Vec<Attribute>> {
    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr?;
        let name = decode(decoder, attr.key.as_ref())?.into_owned();
        let raw = decode(decoder, &attr.value)?;
        let raw = if config.normalize_attribute_values {
            normalize_attribute_value(raw)
        } else {
            raw
        };
        let value = unescape(&raw)?.into_owned();
        attributes.push(Attribute { name, value });
    }
    Ok(attributes)
}

/// Returns the `xml:space` setting declared in `attributes`, if any.
fn xml_space(attributes: &[Attribute]) -> Option<bool> {
    attributes
        .iter()
        .find(|a| a.name == "xml:space")
        .and_then(|a| match a.value.as_str() {
            "preserve" => Some(true),
            "default" => Some(false),
            _ => None,
        })
}

#[inline]
fn decode<'b>(decoder: Decoder, bytes: &'b [u8]) -> Result<Cow<'b, str>> {
    Ok(decoder.decode(bytes).map_err(quick_xml::Error::from)?)
}

/// Replaces `\r\n` and lone `\r` by `\n` if configured to do so.
fn normalize_line_endings<'b>(text: Cow<'b, str>, config: &Config) -> Cow<'b, str> {
    if !config.normalize_line_endings || memchr(b'\r', text.as_bytes()).is_none() {
        return text;
    }
    let mut normalized = String::with_capacity(text.len());
    let mut rest: &str = &text;
    while let Some(i) = memchr(b'\r', rest.as_bytes()) {
        normalized.push_str(&rest[..i]);
        normalized.push('\n');
        rest = &rest[i + 1..];
        if rest.starts_with('\n') {
            rest = &rest[1..];
        }
    }
    normalized.push_str(rest);
    Cow::Owned(normalized)
}

/// Replaces each tab, line feed, carriage return and `\r\n` pair by a space.
fn normalize_attribute_value(value: Cow<str>) -> Cow<str> {
    if memchr3(b'\t', b'\n', b'\r', value.as_bytes()).is_none() {
        return value;
    }
    let mut normalized = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                chars.next_if_eq(&'\n');
                normalized.push(' ');
            }
            '\t' | '\n' => normalized.push(' '),
            c => normalized.push(c),
        }
    }
    Cow::Owned(normalized)
}

/// Whitespace characters as defined by the `S` production of the XML grammar.
#[inline]
pub(crate) const fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\r' | b'\n' | b'\t')
}
