//! Moving the cursor over nodes which are irrelevant for structure.

use crate::errors::Result;
use crate::reader::NodeCursor;

/// Advances the cursor until it is on a content-bearing node (see
/// [`NodeKind::is_content`]) or the stream is exhausted.
///
/// On every step the next attribute is tried first, and only then the next
/// node. The function is idempotent: calling it again without moving the
/// cursor in between does nothing.
///
/// [`NodeKind::is_content`]: crate::NodeKind::is_content
pub fn skip_non_content<C: NodeCursor + ?Sized>(cursor: &mut C) -> Result<()> {
    while !cursor.kind().is_content() {
        if !step(cursor)? {
            break;
        }
    }
    Ok(())
}

/// Moves to the next attribute of the current start tag if there is one,
/// otherwise to the next node. Returns `false` at the end of the stream.
///
/// This is how the dispatcher walks an element: first through the attributes
/// of its start tag, then into its content.
#[inline]
pub fn step<C: NodeCursor + ?Sized>(cursor: &mut C) -> Result<bool> {
    if cursor.move_to_next_attribute() {
        return Ok(true);
    }
    cursor.advance()
}
