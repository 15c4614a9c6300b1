// Event Chip Geometry
//
// Maps one day-segment of a calendar event onto the rectangle it is drawn
// into and answers pointer hit-tests against that rectangle. The layout
// engine owns rectangle computation; this module owns the per-chip state
// that makes recomputation skippable and pointer routing cheap.

use egui::{Pos2, Rect};

use crate::models::event::Event;

/// One drawable slice of a calendar event.
///
/// A single-day event gets exactly one chip. A multi-day event gets one chip
/// per visible day, each wrapping the single-day projection in `event` while
/// `original_event` stays the full source event. Both borrows point into the
/// host widget's active event list and are fixed for the chip's lifetime.
///
/// `rect` is `None` until the layout engine has computed it, and again after
/// [`clear_cache`](Self::clear_cache). A `None` rect is the "not laid out
/// yet" state, distinct from a zero-size rectangle.
///
/// # Examples
/// ```
/// use chrono::{Duration, Local};
/// use egui::{Pos2, Rect};
/// use rust_weekview::models::event::Event;
/// use rust_weekview::models::ui::ChipInsets;
/// use rust_weekview::ui_egui::chip::EventChip;
///
/// let start = Local::now();
/// let event = Event::new("Standup", start, start + Duration::minutes(30)).unwrap();
/// let mut chip = EventChip::new(&event, &event);
///
/// // One layout pass: recompute only when the column size changed.
/// let column = Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(120.0, 600.0));
/// let insets = ChipInsets::default();
/// if chip.did_available_area_change(column, insets.horizontal, insets.vertical) {
///     chip.rect = Some(column.shrink(2.0));
///     chip.update_available_area(118, 598);
/// }
///
/// assert!(!chip.did_available_area_change(column, insets.horizontal, insets.vertical));
/// assert!(chip.is_hit(Pos2::new(60.0, 300.0)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EventChip<'a> {
    /// The day-segment this chip draws. Differs from `original_event` only
    /// for multi-day events.
    pub event: &'a Event,
    /// The full source event, possibly spanning multiple days.
    pub original_event: &'a Event,
    /// The rectangle the chip is drawn into, in absolute screen coordinates.
    /// Written by the layout engine, read by the renderer and by hit-testing.
    pub rect: Option<Rect>,
    /// Fractional horizontal offset within the day column, from overlap
    /// resolution. With four concurrent columns: 0.0, 0.25, 0.5 or 0.75.
    pub relative_start: f32,
    /// Fractional horizontal width within the day column. With four
    /// concurrent columns, 0.25 spans one column and 1.0 spans all four.
    pub relative_width: f32,
    /// Minute offset from the grid's first displayed hour. Stored for the
    /// layout engine's vertical placement, never interpreted here.
    pub minutes_from_start_hour: i32,
    available_width_cache: i32,
    available_height_cache: i32,
}

impl<'a> EventChip<'a> {
    pub fn new(event: &'a Event, original_event: &'a Event) -> Self {
        Self {
            event,
            original_event,
            rect: None,
            relative_start: 0.0,
            relative_width: 0.0,
            minutes_from_start_hour: 0,
            available_width_cache: 0,
            available_height_cache: 0,
        }
    }

    /// Whether `area` minus the paddings differs from the dimensions the
    /// current `rect` was computed for.
    ///
    /// Coordinates are truncated toward zero before comparison, matching the
    /// integer pixel granularity the cache stores. Degenerate areas yield
    /// negative values; those are compared like any other. Does not touch
    /// the cache, so the layout engine can probe freely before deciding to
    /// recompute.
    pub fn did_available_area_change(
        &self,
        area: Rect,
        horizontal_padding: i32,
        vertical_padding: i32,
    ) -> bool {
        let available_width = (area.right() - area.left()) as i32 - horizontal_padding;
        let available_height = (area.bottom() - area.top()) as i32 - vertical_padding;
        available_width != self.available_width_cache
            || available_height != self.available_height_cache
    }

    /// Record the dimensions a freshly computed `rect` was laid out for.
    ///
    /// Call right after assigning `rect` so the next
    /// [`did_available_area_change`](Self::did_available_area_change) compares
    /// against the area actually used.
    pub fn update_available_area(&mut self, width: i32, height: i32) {
        self.available_width_cache = width;
        self.available_height_cache = height;
    }

    /// Drop the computed rectangle and forget the cached dimensions.
    ///
    /// Forces the next layout pass to recompute regardless of whether the
    /// available area changed. Used when the chip is recycled for different
    /// event data or the event set itself changed.
    pub fn clear_cache(&mut self) {
        self.rect = None;
        self.available_width_cache = 0;
        self.available_height_cache = 0;
    }

    /// Whether a pointer position lands on this chip.
    ///
    /// Always false while `rect` is absent. Bounds are exclusive: a point
    /// exactly on an edge or corner is a miss, so two chips sharing an edge
    /// never both claim the same pointer position.
    pub fn is_hit(&self, pos: Pos2) -> bool {
        self.rect.map_or(false, |rect| {
            pos.x > rect.left() && pos.x < rect.right() && pos.y > rect.top() && pos.y < rect.bottom()
        })
    }
}

/// The active chips for the currently visible date range, in draw order.
///
/// The layout engine rebuilds or mutates this set each pass; the input
/// pipeline resolves pointer positions against it. Later chips are treated
/// as drawn on top of earlier ones, so hit resolution walks the set in
/// reverse.
#[derive(Debug, Default, PartialEq)]
pub struct ChipSet<'a> {
    chips: Vec<EventChip<'a>>,
}

impl<'a> ChipSet<'a> {
    pub fn new() -> Self {
        Self { chips: Vec::new() }
    }

    pub fn push(&mut self, chip: EventChip<'a>) {
        self.chips.push(chip);
    }

    pub fn len(&self) -> usize {
        self.chips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chips.is_empty()
    }

    pub fn chips(&self) -> &[EventChip<'a>] {
        &self.chips
    }

    /// Mutable access for the layout engine to write rectangles and
    /// relative placement.
    pub fn chips_mut(&mut self) -> &mut [EventChip<'a>] {
        &mut self.chips
    }

    /// All chips derived from the event with the given id, one per visible
    /// day-segment.
    pub fn chips_for_event(&self, event_id: i64) -> impl Iterator<Item = &EventChip<'a>> {
        self.chips
            .iter()
            .filter(move |chip| chip.original_event.id == Some(event_id))
    }

    /// The topmost chip under the pointer, if any.
    ///
    /// Chips may overlap during transient layout states; the last one pushed
    /// wins, matching draw order.
    pub fn find_hit_chip(&self, pos: Pos2) -> Option<&EventChip<'a>> {
        self.chips.iter().rev().find(|chip| chip.is_hit(pos))
    }

    /// Invalidate every chip's rectangle and dimension cache.
    ///
    /// Called when the visible event set changes and stale geometry would
    /// misroute hits.
    pub fn clear_caches(&mut self) {
        log::debug!("Clearing cached geometry for {} chips", self.chips.len());
        for chip in &mut self.chips {
            chip.clear_cache();
        }
    }
}
