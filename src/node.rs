//! Kinds of nodes a [`NodeCursor`] can be positioned on.
//!
//! A node cursor exposes exactly one current node at a time. Unlike raw
//! tokenizer events, attributes are nodes as well: the cursor steps onto them
//! with [`NodeCursor::move_to_next_attribute`] while positioned on a start tag.
//!
//! [`NodeCursor`]: crate::reader::NodeCursor
//! [`NodeCursor::move_to_next_attribute`]: crate::reader::NodeCursor::move_to_next_attribute

use std::fmt;

/// The kind of the node a cursor currently observes.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum NodeKind {
    /// The cursor was created but not advanced yet.
    Initial,
    /// Start tag `<name ...>` or a self-closing tag `<name .../>`.
    StartElement,
    /// End tag `</name>`. Self-closing tags have no end tag node.
    EndElement,
    /// An attribute of the start tag the cursor is iterating.
    Attribute,
    /// Character data with at least one non-whitespace character.
    Text,
    /// `<![CDATA[...]]>` section.
    CData,
    /// Whitespace-only character data inside an `xml:space="preserve"` scope.
    SignificantWhitespace,
    /// Whitespace-only character data that may be ignored.
    Whitespace,
    /// `<!-- ... -->`
    Comment,
    /// `<?target ...?>`, other than the XML declaration.
    ProcessingInstruction,
    /// The `<?xml ...?>` declaration.
    Declaration,
    /// `<!DOCTYPE ...>`
    DocumentType,
    /// An unresolved entity reference. Cursors which resolve references into
    /// text never produce it.
    EntityReference,
    /// No more nodes are available.
    EndOfStream,
}

impl NodeKind {
    /// Returns `true` for the nodes that carry structure or content: elements,
    /// attributes, text, CDATA, entity references and significant whitespace.
    ///
    /// Everything else is skipped by [`skip_non_content`].
    ///
    /// [`skip_non_content`]: crate::skip::skip_non_content
    #[inline]
    pub fn is_content(self) -> bool {
        matches!(
            self,
            NodeKind::Attribute
                | NodeKind::StartElement
                | NodeKind::EndElement
                | NodeKind::EntityReference
                | NodeKind::CData
                | NodeKind::SignificantWhitespace
                | NodeKind::Text
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            NodeKind::Initial => "initial position",
            NodeKind::StartElement => "start tag",
            NodeKind::EndElement => "end tag",
            NodeKind::Attribute => "attribute",
            NodeKind::Text => "text",
            NodeKind::CData => "CDATA",
            NodeKind::SignificantWhitespace => "significant whitespace",
            NodeKind::Whitespace => "whitespace",
            NodeKind::Comment => "comment",
            NodeKind::ProcessingInstruction => "processing instruction",
            NodeKind::Declaration => "XML declaration",
            NodeKind::DocumentType => "DOCTYPE",
            NodeKind::EntityReference => "entity reference",
            NodeKind::EndOfStream => "end of stream",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::NodeKind;

    #[test]
    fn content_kinds() {
        assert!(NodeKind::StartElement.is_content());
        assert!(NodeKind::EndElement.is_content());
        assert!(NodeKind::Attribute.is_content());
        assert!(NodeKind::Text.is_content());
        assert!(NodeKind::CData.is_content());
        assert!(NodeKind::SignificantWhitespace.is_content());
        assert!(NodeKind::EntityReference.is_content());

        assert!(!NodeKind::Initial.is_content());
        assert!(!NodeKind::Whitespace.is_content());
        assert!(!NodeKind::Comment.is_content());
        assert!(!NodeKind::ProcessingInstruction.is_content());
        assert!(!NodeKind::Declaration.is_content());
        assert!(!NodeKind::DocumentType.is_content());
        assert!(!NodeKind::EndOfStream.is_content());
    }
}
