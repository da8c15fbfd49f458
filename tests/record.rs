//! Tests for the record and list readers.

use xmlio::errors::{Error, SchemaError};
use xmlio::reader::{NodeCursor, XmlCursor};
use xmlio::{read_list, read_record, NodeKind, Result};

#[macro_use]
mod helpers;
use helpers::cursor_at;

#[derive(Debug, Default, PartialEq)]
struct Contact {
    name: String,
    mail: Option<String>,
}

fn contact_attribute(name: &str, value: &str, contact: &mut Contact) -> bool {
    match name {
        "name" => contact.name = value.to_owned(),
        "mail" => contact.mail = Some(value.to_owned()),
        _ => return false,
    }
    true
}

fn contact(cursor: &mut XmlCursor<&[u8]>) -> Result<Contact> {
    read_record(cursor, "contact", contact_attribute)
}

fn ann() -> Contact {
    Contact {
        name: "Ann".to_owned(),
        mail: Some("ann@example.com".to_owned()),
    }
}

fn bob() -> Contact {
    Contact {
        name: "Bob".to_owned(),
        mail: None,
    }
}

mod record {
    use super::*;
    use pretty_assertions::assert_eq;

    macro_rules! record {
        ($name:ident: $xml:literal => $expected:expr, $kind:ident $(, $next:literal)?) => {
            #[test]
            fn $name() {
                let mut cursor = cursor_at($xml, "contact");
                assert_eq!(contact(&mut cursor).unwrap(), $expected);
                assert_at!(cursor, $kind $(, $next)?);
            }
        };
    }

    record!(self_closing:
        "<contact name='Ann' mail='ann@example.com'/>"
        => ann(), EndOfStream
    );
    record!(with_end_tag:
        "<contact name='Ann' mail='ann@example.com'></contact>"
        => ann(), EndOfStream
    );
    record!(formatted:
        "<contact\n  name='Bob'\n>\n  <!-- no children -->\n</contact>"
        => bob(), EndOfStream
    );
    record!(sibling:
        "<list><contact name='Bob'/>\n<next/></list>"
        => bob(), StartElement, "next"
    );
    record!(last_child:
        "<list><contact name='Bob'></contact> </list>"
        => bob(), EndElement, "list"
    );
    record!(no_attributes:
        "<list><contact/><next/></list>"
        => Contact::default(), StartElement, "next"
    );
    record!(no_attributes_with_end_tag:
        "<list><contact></contact><next/></list>"
        => Contact::default(), StartElement, "next"
    );
    record!(namespace_declaration:
        "<contact xmlns='urn:contacts' name='Bob'/>"
        => bob(), EndOfStream
    );

    #[test]
    fn wrong_element() {
        let mut cursor = cursor_at("<person name='Ann'/>", "person");
        assert_err!(contact(&mut cursor), Schema);
    }

    #[test]
    fn unknown_attribute() {
        let mut cursor = cursor_at("<contact name='Ann' phone='555'/>", "contact");
        match contact(&mut cursor) {
            Err(Error::Schema(SchemaError::UnknownAttribute { element, attribute })) => {
                assert_eq!(element, "contact");
                assert_eq!(attribute, "phone");
            }
            x => panic!("expected an unknown attribute error, got {:?}", x),
        }
    }

    #[test]
    fn child_element() {
        let mut cursor = cursor_at("<contact name='Ann'><mail/></contact>", "contact");
        match contact(&mut cursor) {
            Err(Error::Schema(SchemaError::UnknownElement { parent, element })) => {
                assert_eq!(parent, "contact");
                assert_eq!(element, "mail");
            }
            x => panic!("expected an unknown element error, got {:?}", x),
        }
    }

    #[test]
    fn text() {
        let mut cursor = cursor_at("<contact name='Ann'>text</contact>", "contact");
        match contact(&mut cursor) {
            Err(Error::Schema(SchemaError::UnexpectedContent { element, kind })) => {
                assert_eq!(element, "contact");
                assert_eq!(kind, NodeKind::Text);
            }
            x => panic!("expected an unexpected content error, got {:?}", x),
        }
    }

    #[test]
    fn cdata() {
        let mut cursor = cursor_at("<contact><![CDATA[x]]></contact>", "contact");
        assert_err!(contact(&mut cursor), Schema);
    }

    #[test]
    fn truncated() {
        let mut cursor = cursor_at("<contact name='Ann'>", "contact");
        assert_err!(contact(&mut cursor), Syntax);
    }

    /// Attribute values arrive decoded and in document order.
    #[test]
    fn attribute_order() {
        let mut cursor = cursor_at("<r a='1' b='&amp;' c='3'/>", "r");
        let seen: Vec<String> = read_record(&mut cursor, "r", |name, value, seen: &mut Vec<String>| {
            seen.push(format!("{}={}", name, value));
            true
        })
        .unwrap();
        assert_eq!(seen, vec!["a=1", "b=&", "c=3"]);
    }
}

mod list {
    use super::*;
    use pretty_assertions::assert_eq;

    fn contacts(xml: &str) -> (Result<Option<Vec<Contact>>>, XmlCursor<&[u8]>) {
        let mut cursor = cursor_at(xml, "contacts");
        let result = read_list(&mut cursor, "contacts", "contact", contact);
        (result, cursor)
    }

    #[test]
    fn items_in_document_order() {
        let (result, cursor) = contacts(
            r#"<contacts>
                <contact name="Ann" mail="ann@example.com"/>
                <!-- Bob has no mail -->
                <contact name="Bob"></contact>
            </contacts>"#,
        );
        assert_eq!(result.unwrap(), Some(vec![ann(), bob()]));
        assert_at!(cursor, EndOfStream);
    }

    #[test]
    fn single_item() {
        let (result, cursor) = contacts("<book><contacts><contact name='Bob'/></contacts><next/></book>");
        assert_eq!(result.unwrap(), Some(vec![bob()]));
        assert_at!(cursor, StartElement, "next");
    }

    #[test]
    fn self_closing() {
        let (result, cursor) = contacts("<book><contacts/>\n<next/></book>");
        assert_eq!(result.unwrap(), None);
        assert_at!(cursor, StartElement, "next");
    }

    #[test]
    fn no_items() {
        let (result, cursor) = contacts("<book><contacts>\n  <!-- none -->\n</contacts></book>");
        assert_eq!(result.unwrap(), None);
        assert_at!(cursor, EndElement, "book");
    }

    #[test]
    fn parent_attributes_are_ignored() {
        let (result, _) = contacts("<contacts count='1' xmlns='urn:contacts'><contact name='Bob'/></contacts>");
        assert_eq!(result.unwrap(), Some(vec![bob()]));
    }

    #[test]
    fn wrong_element() {
        let mut cursor = cursor_at("<people/>", "people");
        assert_err!(read_list(&mut cursor, "contacts", "contact", contact), Schema);
    }

    #[test]
    fn foreign_item() {
        let (result, _) = contacts("<contacts><contact name='Bob'/><person name='Eve'/></contacts>");
        match result {
            Err(Error::Schema(SchemaError::UnknownElement { parent, element })) => {
                assert_eq!(parent, "contacts");
                assert_eq!(element, "person");
            }
            x => panic!("expected an unknown element error, got {:?}", x),
        }
    }

    #[test]
    fn text() {
        let (result, _) = contacts("<contacts>Bob</contacts>");
        assert_err!(result, Schema);
    }

    #[test]
    fn item_error_is_propagated() {
        let (result, _) = contacts("<contacts><contact name='Bob' phone='555'/></contacts>");
        assert_err!(result, Schema);
    }

    #[test]
    fn truncated() {
        let (result, _) = contacts("<contacts><contact name='Bob'/>");
        assert_err!(result, Syntax);
    }

    #[test]
    fn nested() {
        let mut cursor = cursor_at(
            "<groups><group><contact name='Ann'/></group><group/><group><contact name='Bob'/></group></groups>",
            "groups",
        );
        let groups = read_list(&mut cursor, "groups", "group", |cursor| {
            read_list(cursor, "group", "contact", contact)
        })
        .unwrap();

        assert_eq!(
            groups,
            Some(vec![
                Some(vec![Contact {
                    name: "Ann".to_owned(),
                    mail: None,
                }]),
                None,
                Some(vec![bob()]),
            ])
        );
    }
}
