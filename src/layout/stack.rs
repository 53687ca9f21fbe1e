//! Table stacking: relative offsets along one axis

use crate::config::TablePlacement;
use crate::content::ElementId;
use crate::types::{Dimensions, Position, Px};

/// Relative stacking plan for the table strip
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableArrangement {
    entries: Vec<(ElementId, Position)>,
    size: Dimensions,
}

impl TableArrangement {
    /// Tables in stacking order with their offset from the strip origin
    pub fn entries(&self) -> &[(ElementId, Position)] {
        &self.entries
    }

    /// Aggregate size of the whole stack
    pub fn size(&self) -> Dimensions {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn offset_of(&self, id: ElementId) -> Option<Position> {
        self.entries.iter().find(|(e, _)| *e == id).map(|(_, p)| *p)
    }
}

/// Stack tables top-to-bottom (`Right`/`Left`) or left-to-right (`Below`),
/// with `gap` between consecutive entries. Vertical stacks are left-aligned,
/// horizontal stacks top-aligned.
pub fn stack_tables(
    tables: &[(ElementId, Dimensions)],
    placement: TablePlacement,
    gap: Px,
) -> TableArrangement {
    let vertical = placement.stacks_vertically();
    let mut entries = Vec::with_capacity(tables.len());
    let mut cursor = Px::ZERO;
    let mut along = Px::ZERO;
    let mut across = Px::ZERO;

    for (i, (id, size)) in tables.iter().enumerate() {
        if i > 0 {
            cursor += gap;
        }
        let (offset, extent, breadth) = if vertical {
            (Position::new(Px::ZERO, cursor), size.height, size.width)
        } else {
            (Position::new(cursor, Px::ZERO), size.width, size.height)
        };
        entries.push((*id, offset));
        cursor += extent;
        along = cursor;
        across = across.max(breadth);
    }

    let size = if vertical {
        Dimensions::new(across, along)
    } else {
        Dimensions::new(along, across)
    };
    TableArrangement { entries, size }
}
