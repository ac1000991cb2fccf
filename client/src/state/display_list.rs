//! Ordered slots rendered in the board's poster grid.
//!
//! DESIGN
//! ======
//! Catalog ids repeat across pages, so every slot gets its own key from a
//! board-local counter. Keys double as the render key and as the handle the
//! viewport trigger observes.

#[cfg(test)]
#[path = "display_list_test.rs"]
mod display_list_test;

use catalog::DisplayItem;

/// Board-unique handle for one rendered slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotKey(pub u64);

/// What a slot currently shows.
#[derive(Clone, Debug, PartialEq)]
pub enum SlotContent {
    /// Skeleton stand-in while a page is in flight.
    Placeholder,
    /// A real poster.
    Poster(DisplayItem),
}

/// One entry of the grid.
#[derive(Clone, Debug, PartialEq)]
pub struct Slot {
    pub key: SlotKey,
    pub content: SlotContent,
}

impl Slot {
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self.content, SlotContent::Placeholder)
    }
}

/// The board's display sequence.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisplayList {
    slots: Vec<Slot>,
    next_key: u64,
}

impl DisplayList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Append `count` placeholders to the tail.
    pub fn push_placeholders(&mut self, count: usize) {
        for _ in 0..count {
            let key = self.allocate_key();
            self.slots.push(Slot { key, content: SlotContent::Placeholder });
        }
    }

    /// Remove up to `count` slots from the tail, returning how many went.
    pub fn remove_tail(&mut self, count: usize) -> usize {
        let removed = count.min(self.slots.len());
        self.slots.truncate(self.slots.len() - removed);
        removed
    }

    /// Append real posters to the tail.
    pub fn append(&mut self, items: Vec<DisplayItem>) {
        self.slots.reserve(items.len());
        for item in items {
            let key = self.allocate_key();
            self.slots.push(Slot { key, content: SlotContent::Poster(item) });
        }
    }

    /// Drop every slot. Keys keep counting so stale handles never match.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// The tail slot when it is a real poster.
    #[must_use]
    pub fn last_item(&self) -> Option<(SlotKey, &DisplayItem)> {
        match self.slots.last() {
            Some(Slot { key, content: SlotContent::Poster(item) }) => Some((*key, item)),
            _ => None,
        }
    }

    /// Real posters in display order.
    pub fn posters(&self) -> impl Iterator<Item = &DisplayItem> {
        self.slots.iter().filter_map(|slot| match &slot.content {
            SlotContent::Poster(item) => Some(item),
            SlotContent::Placeholder => None,
        })
    }

    #[must_use]
    pub fn poster_count(&self) -> usize {
        self.posters().count()
    }

    #[must_use]
    pub fn placeholder_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_placeholder()).count()
    }

    fn allocate_key(&mut self) -> SlotKey {
        let key = SlotKey(self.next_key);
        self.next_key += 1;
        key
    }
}
