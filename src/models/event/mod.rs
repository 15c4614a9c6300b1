// Event module
// Calendar event model referenced by the week-view chip layer

use chrono::{DateTime, Local};
use thiserror::Error;

/// Validation errors raised when constructing or checking an [`Event`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    #[error("Event title cannot be empty")]
    EmptyTitle,
    #[error("Event end time must be after start time")]
    EndNotAfterStart,
    #[error("Color must be in hex format (#RRGGBB or #RGB)")]
    InvalidColor,
    #[error("Event {0} is required")]
    MissingField(&'static str),
}

/// Calendar event as seen by the view layer.
///
/// Ownership of events stays with the host widget's active event list; chips
/// only borrow them. A multi-day event keeps its full time range here and is
/// split into single-day projections by the producer that feeds the layout
/// engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
    pub all_day: bool,
    pub category: Option<String>,
    pub color: Option<String>,
}

impl Event {
    /// Create a new event with required fields
    ///
    /// # Arguments
    /// * `title` - Event title (required, non-empty)
    /// * `start` - Event start time
    /// * `end` - Event end time
    ///
    /// # Returns
    /// Returns `Result<Event, EventError>` with validation
    ///
    /// # Examples
    /// ```
    /// use rust_weekview::models::event::Event;
    /// use chrono::Local;
    ///
    /// let start = Local::now();
    /// let end = start + chrono::Duration::hours(1);
    /// let event = Event::new("Team Meeting", start, end).unwrap();
    /// ```
    pub fn new(
        title: impl Into<String>,
        start: DateTime<Local>,
        end: DateTime<Local>,
    ) -> Result<Self, EventError> {
        let title = title.into();

        if title.trim().is_empty() {
            return Err(EventError::EmptyTitle);
        }

        if end <= start {
            return Err(EventError::EndNotAfterStart);
        }

        Ok(Self {
            id: None,
            title,
            description: None,
            location: None,
            start,
            end,
            all_day: false,
            category: None,
            color: None,
        })
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Validate the event
    pub fn validate(&self) -> Result<(), EventError> {
        if self.title.trim().is_empty() {
            return Err(EventError::EmptyTitle);
        }

        if self.end <= self.start {
            return Err(EventError::EndNotAfterStart);
        }

        // Validate color format if present (should be hex color)
        if let Some(ref color) = self.color {
            if !color.starts_with('#') || (color.len() != 7 && color.len() != 4) {
                return Err(EventError::InvalidColor);
            }
        }

        Ok(())
    }

    /// Get the duration of the event
    pub fn duration(&self) -> chrono::Duration {
        self.end - self.start
    }

    /// Check whether the event crosses a calendar-day boundary.
    ///
    /// Multi-day events are drawn with one chip per day-segment.
    pub fn is_multi_day(&self) -> bool {
        self.start.date_naive() != self.end.date_naive()
    }
}

/// Builder for creating events with optional fields
pub struct EventBuilder {
    id: Option<i64>,
    title: Option<String>,
    description: Option<String>,
    location: Option<String>,
    start: Option<DateTime<Local>>,
    end: Option<DateTime<Local>>,
    all_day: bool,
    category: Option<String>,
    color: Option<String>,
}

impl EventBuilder {
    /// Create a new event builder
    pub fn new() -> Self {
        Self {
            id: None,
            title: None,
            description: None,
            location: None,
            start: None,
            end: None,
            all_day: false,
            category: None,
            color: None,
        }
    }

    /// Set the event id
    pub fn id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the event title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the event description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the event location
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the start time
    pub fn start(mut self, start: DateTime<Local>) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the end time
    pub fn end(mut self, end: DateTime<Local>) -> Self {
        self.end = Some(end);
        self
    }

    /// Set as all-day event
    pub fn all_day(mut self, all_day: bool) -> Self {
        self.all_day = all_day;
        self
    }

    /// Set the event category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the event color (hex format)
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Build the event
    pub fn build(self) -> Result<Event, EventError> {
        let title = self.title.ok_or(EventError::MissingField("title"))?;
        let start = self.start.ok_or(EventError::MissingField("start time"))?;
        let end = self.end.ok_or(EventError::MissingField("end time"))?;

        let event = Event {
            id: self.id,
            title,
            description: self.description,
            location: self.location,
            start,
            end,
            all_day: self.all_day,
            category: self.category,
            color: self.color,
        };

        event.validate()?;
        Ok(event)
    }
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}
