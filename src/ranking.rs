//! Ranking queries over a time window: most popular book, most active reader.
//!
//! Both queries work on fully loaded record lists and run in two steps: count
//! qualifying events per entity id, then scan the entities in a fixed order
//! applying the tie-break. Nothing depends on hash-map iteration order.

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::models::{Book, Event, EventType, Reader};

/// Open time interval `(start, end)`; both bounds are excluded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Window {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, at: NaiveDateTime) -> bool {
        self.start < at && at < self.end
    }
}

/// Count window events per book, every event type included
fn count_by_book(events: &[Event], window: Window) -> HashMap<i32, u64> {
    let mut counts = HashMap::new();
    for event in events.iter().filter(|e| window.contains(e.event_datetime)) {
        *counts.entry(event.book_id).or_insert(0) += 1;
    }
    counts
}

/// Count window RETURN_BOOK events per reader
fn count_returns_by_reader(events: &[Event], window: Window) -> HashMap<i32, u64> {
    let mut counts = HashMap::new();
    for event in events
        .iter()
        .filter(|e| e.event_type == EventType::ReturnBook && window.contains(e.event_datetime))
    {
        *counts.entry(event.reader_id).or_insert(0) += 1;
    }
    counts
}

/// Ordering of two (book, count) candidates, greater is better.
///
/// Higher count first, then the smaller author name, then the smaller id.
fn compare_candidates(a: (&Book, u64), b: (&Book, u64)) -> Ordering {
    a.1.cmp(&b.1)
        .then_with(|| b.0.author.cmp(&a.0.author))
        .then_with(|| b.0.id.cmp(&a.0.id))
}

/// Book with the most events inside the window.
///
/// Returns `None` when no event of a known book falls inside the window.
pub fn most_popular_book<'a>(
    books: &'a [Book],
    events: &[Event],
    window: Window,
) -> Option<&'a Book> {
    let counts = count_by_book(events, window);

    let mut best: Option<(&Book, u64)> = None;
    for book in books {
        let Some(&count) = counts.get(&book.id) else {
            continue;
        };
        best = match best {
            Some(current) if compare_candidates((book, count), current) != Ordering::Greater => {
                Some(current)
            }
            _ => Some((book, count)),
        };
    }
    best.map(|(book, _)| book)
}

/// Reader with the most returns inside the window.
///
/// Readers are scanned in the given order and a later reader only takes over
/// with a strictly greater count, so the earliest reader wins ties (including
/// the all-zero case). Returns `None` only when `readers` is empty.
pub fn most_active_reader<'a>(
    readers: &'a [Reader],
    events: &[Event],
    window: Window,
) -> Option<&'a Reader> {
    let counts = count_returns_by_reader(events, window);

    let mut best: Option<(&Reader, u64)> = None;
    for reader in readers {
        let count = counts.get(&reader.id).copied().unwrap_or(0);
        if best.map_or(true, |(_, max)| count > max) {
            best = Some((reader, count));
        }
    }
    best.map(|(reader, _)| reader)
}
