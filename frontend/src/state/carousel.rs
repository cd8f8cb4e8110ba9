//! Phone showcase positioning.
//!
//! The carousel pages through the showcase apps `items_per_view` at a time.
//! Each phone is drawn in one of five named slots whose transforms come from
//! a fixed table.

/// Viewports wider than this show three phones per page, others show one.
pub const BREAKPOINT_PX: f64 = 768.0;

const WIDE_ITEMS_PER_VIEW: usize = 3;
const NARROW_ITEMS_PER_VIEW: usize = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    fn step(self) -> isize {
        match self {
            Direction::Prev => -1,
            Direction::Next => 1,
        }
    }
}

pub fn items_per_view(viewport_width: f64) -> usize {
    if viewport_width > BREAKPOINT_PX {
        WIDE_ITEMS_PER_VIEW
    } else {
        NARROW_ITEMS_PER_VIEW
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Carousel {
    item_count: usize,
    items_per_view: usize,
    current: usize,
}

impl Carousel {
    pub fn new(item_count: usize, viewport_width: f64) -> Self {
        Self {
            item_count,
            items_per_view: items_per_view(viewport_width),
            current: 0,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total_slides(&self) -> usize {
        self.item_count.div_ceil(self.items_per_view)
    }

    /// Moves one page in `direction`, wrapping at both ends.
    pub fn advance(&mut self, direction: Direction) -> usize {
        let total = self.total_slides() as isize;
        if total == 0 {
            return 0;
        }
        let next = (self.current as isize + direction.step() + total) % total;
        self.current = next as usize;
        self.current
    }

    /// Jumps to `index`. Indices past the last page clamp to the last page.
    pub fn jump_to(&mut self, index: usize) -> usize {
        self.current = index.min(self.last_index());
        self.current
    }

    /// Re-derives the page size from the viewport and clamps the current
    /// index into the new range before anything scrolls.
    pub fn recompute_slide_count(&mut self, viewport_width: f64) -> usize {
        self.items_per_view = items_per_view(viewport_width);
        self.current = self.current.min(self.last_index());
        self.total_slides()
    }

    /// Horizontal scroll position of the current page for a container that
    /// is `slide_width` pixels wide.
    pub fn scroll_offset(&self, slide_width: f64) -> f64 {
        self.current as f64 * slide_width
    }

    pub fn slot_for(&self, item_index: usize) -> Slot {
        let page = item_index / self.items_per_view;
        if page < self.current {
            return Slot::LeftOuter;
        }
        if page > self.current {
            return Slot::RightOuter;
        }
        if self.items_per_view == 1 {
            return Slot::Center;
        }
        match item_index % self.items_per_view {
            0 => Slot::LeftInner,
            1 => Slot::Center,
            _ => Slot::RightInner,
        }
    }

    fn last_index(&self) -> usize {
        self.total_slides().saturating_sub(1)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    LeftOuter,
    LeftInner,
    Center,
    RightInner,
    RightOuter,
}

impl Slot {
    pub fn label(&self) -> &'static str {
        match self {
            Slot::LeftOuter => "left-outer",
            Slot::LeftInner => "left-inner",
            Slot::Center => "center",
            Slot::RightInner => "right-inner",
            Slot::RightOuter => "right-outer",
        }
    }

    pub fn transform(&self) -> &'static SlotTransform {
        SLOT_TABLE
            .iter()
            .find(|(slot, _)| slot == self)
            .map(|(_, transform)| transform)
            .unwrap_or(&SLOT_TABLE[2].1)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SlotTransform {
    pub offset_px: f64,
    pub scale: f64,
    pub rotation_deg: f64,
    pub delay_ms: u32,
    pub opacity: f64,
}

impl SlotTransform {
    pub fn style(&self) -> String {
        format!(
            "transform: translateX({}px) scale({}) rotate({}deg); transition-delay: {}ms; opacity: {};",
            self.offset_px, self.scale, self.rotation_deg, self.delay_ms, self.opacity
        )
    }
}

pub static SLOT_TABLE: [(Slot, SlotTransform); 5] = [
    (
        Slot::LeftOuter,
        SlotTransform { offset_px: -60.0, scale: 0.75, rotation_deg: -12.0, delay_ms: 0, opacity: 0.0 },
    ),
    (
        Slot::LeftInner,
        SlotTransform { offset_px: 24.0, scale: 0.88, rotation_deg: -6.0, delay_ms: 120, opacity: 0.85 },
    ),
    (
        Slot::Center,
        SlotTransform { offset_px: 0.0, scale: 1.0, rotation_deg: 0.0, delay_ms: 0, opacity: 1.0 },
    ),
    (
        Slot::RightInner,
        SlotTransform { offset_px: -24.0, scale: 0.88, rotation_deg: 6.0, delay_ms: 120, opacity: 0.85 },
    ),
    (
        Slot::RightOuter,
        SlotTransform { offset_px: 60.0, scale: 0.75, rotation_deg: 12.0, delay_ms: 0, opacity: 0.0 },
    ),
];
