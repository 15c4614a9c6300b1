// Test fixtures - reusable test data
// Provides consistent test data across all test files

use chrono::{DateTime, Local, TimeZone};

use rust_weekview::models::event::Event;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Returns Jan 1, 2025 at 09:00
    pub fn jan_1_2025_9am() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap()
    }

    /// Returns Jan 1, 2025 at 22:00
    pub fn jan_1_2025_10pm() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 1, 1, 22, 0, 0).unwrap()
    }

    /// Returns Jan 2, 2025 at midnight
    pub fn jan_2_2025_midnight() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 1, 2, 0, 0, 0).unwrap()
    }

    /// Returns Jan 3, 2025 at 10:00
    pub fn jan_3_2025_10am() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 1, 3, 10, 0, 0).unwrap()
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    /// A half-hour single-day event
    pub fn standup() -> Event {
        Event::builder()
            .id(1)
            .title("Standup")
            .start(dates::jan_1_2025_9am())
            .end(dates::jan_1_2025_9am() + chrono::Duration::minutes(30))
            .color("#4A90D9")
            .build()
            .unwrap()
    }

    /// A one-hour single-day event overlapping nothing
    pub fn review() -> Event {
        Event::builder()
            .id(2)
            .title("Review")
            .start(dates::jan_1_2025_9am() + chrono::Duration::hours(2))
            .end(dates::jan_1_2025_9am() + chrono::Duration::hours(3))
            .build()
            .unwrap()
    }

    /// An event spanning Jan 1 22:00 through Jan 3 10:00
    pub fn offsite() -> Event {
        Event::builder()
            .id(7)
            .title("Offsite")
            .start(dates::jan_1_2025_10pm())
            .end(dates::jan_3_2025_10am())
            .location("Mountain Lodge")
            .build()
            .unwrap()
    }

    /// The single-day projections of [`offsite`], as the external splitter
    /// would hand them to the layout engine: one per calendar day touched.
    pub fn offsite_segments() -> Vec<Event> {
        let source = offsite();
        vec![
            Event {
                end: dates::jan_2_2025_midnight(),
                ..source.clone()
            },
            Event {
                start: dates::jan_2_2025_midnight(),
                end: dates::jan_2_2025_midnight() + chrono::Duration::days(1),
                ..source.clone()
            },
            Event {
                start: dates::jan_2_2025_midnight() + chrono::Duration::days(1),
                ..source
            },
        ]
    }
}
