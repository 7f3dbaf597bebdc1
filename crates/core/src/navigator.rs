//! Jump-to-reference with a transient highlight.
//!
//! A navigation sets the highlighted anchor and schedules two deferred
//! actions: scroll the anchor into view, then clear the highlight. Each new
//! navigation replaces both pending actions, so a clear scheduled by an older
//! navigation can never blank out a newer highlight.

use chrono::{DateTime, Duration, Utc};

use crate::model::{AnchorId, SessionSettings};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigatorEvent {
    ScrollIntoView(AnchorId),
    HighlightCleared(AnchorId),
}

/// What a single `navigate_to` call scheduled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTicket {
    pub anchor: AnchorId,
    pub generation: u64,
    pub issued_at: DateTime<Utc>,
    pub scroll_at: DateTime<Utc>,
    pub clear_at: DateTime<Utc>,
}

impl NavigationTicket {
    /// Delay from issue until the scroll is due.
    #[must_use]
    pub fn scroll_after(&self) -> std::time::Duration {
        (self.scroll_at - self.issued_at).to_std().unwrap_or_default()
    }

    /// Delay from the scroll until the highlight clears.
    #[must_use]
    pub fn clear_after_scroll(&self) -> std::time::Duration {
        (self.clear_at - self.scroll_at).to_std().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pending {
    at: DateTime<Utc>,
    generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceNavigator {
    highlighted: Option<AnchorId>,
    generation: u64,
    scroll: Option<Pending>,
    clear: Option<Pending>,
    scroll_delay: Duration,
    highlight_duration: Duration,
}

impl ReferenceNavigator {
    #[must_use]
    pub fn new(scroll_delay_ms: u32, highlight_ms: u32) -> Self {
        Self {
            highlighted: None,
            generation: 0,
            scroll: None,
            clear: None,
            scroll_delay: Duration::milliseconds(i64::from(scroll_delay_ms)),
            highlight_duration: Duration::milliseconds(i64::from(highlight_ms)),
        }
    }

    #[must_use]
    pub fn from_settings(settings: &SessionSettings) -> Self {
        Self::new(settings.scroll_delay_ms(), settings.highlight_ms())
    }

    #[must_use]
    pub fn highlighted(&self) -> Option<&AnchorId> {
        self.highlighted.as_ref()
    }

    #[must_use]
    pub fn is_highlighted(&self, anchor: &AnchorId) -> bool {
        self.highlighted.as_ref() == Some(anchor)
    }

    /// Generation of the most recent navigation (0 before the first one).
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Highlight `anchor` and reschedule the scroll and clear, cancelling any
    /// actions still pending from an earlier navigation.
    pub fn navigate_to(&mut self, anchor: AnchorId, now: DateTime<Utc>) -> NavigationTicket {
        self.generation = self.generation.wrapping_add(1);
        let generation = self.generation;
        let scroll_at = now + self.scroll_delay;
        let clear_at = now + self.highlight_duration;

        self.highlighted = Some(anchor.clone());
        self.scroll = Some(Pending {
            at: scroll_at,
            generation,
        });
        self.clear = Some(Pending {
            at: clear_at,
            generation,
        });

        NavigationTicket {
            anchor,
            generation,
            issued_at: now,
            scroll_at,
            clear_at,
        }
    }

    /// Fire every pending action due at `now`, scroll before clear.
    pub fn poll(&mut self, now: DateTime<Utc>) -> Vec<NavigatorEvent> {
        let mut events = Vec::new();

        if self.scroll.is_some_and(|pending| pending.at <= now) {
            self.scroll = None;
            if let Some(anchor) = self.highlighted.clone() {
                events.push(NavigatorEvent::ScrollIntoView(anchor));
            }
        }

        if self.clear.is_some_and(|pending| pending.at <= now) {
            self.clear = None;
            if let Some(anchor) = self.highlighted.take() {
                events.push(NavigatorEvent::HighlightCleared(anchor));
            }
        }

        events
    }

    /// Fire the scroll scheduled by `ticket` without consulting a clock.
    ///
    /// For callers that time the delay themselves. A superseded ticket, or one
    /// whose scroll already fired, yields nothing.
    pub fn fire_scroll(&mut self, ticket: &NavigationTicket) -> Option<NavigatorEvent> {
        let pending = self.scroll?;
        if pending.generation != ticket.generation {
            return None;
        }
        self.scroll = None;
        self.highlighted
            .clone()
            .map(NavigatorEvent::ScrollIntoView)
    }

    /// Clear the highlight set by `ticket` without consulting a clock.
    ///
    /// Any scroll still pending for the same ticket is dropped. A superseded
    /// ticket leaves the newer highlight alone.
    pub fn fire_clear(&mut self, ticket: &NavigationTicket) -> Option<NavigatorEvent> {
        let pending = self.clear?;
        if pending.generation != ticket.generation {
            return None;
        }
        self.clear = None;
        self.scroll = None;
        self.highlighted.take().map(NavigatorEvent::HighlightCleared)
    }

    /// True if `ticket` still describes the live navigation.
    #[must_use]
    pub fn is_current(&self, ticket: &NavigationTicket) -> bool {
        ticket.generation == self.generation
            && self
                .clear
                .is_some_and(|pending| pending.generation == ticket.generation)
    }

    /// Earliest instant at which `poll` will have something to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<DateTime<Utc>> {
        match (self.scroll, self.clear) {
            (Some(scroll), Some(clear)) => Some(scroll.at.min(clear.at)),
            (Some(pending), None) | (None, Some(pending)) => Some(pending.at),
            (None, None) => None,
        }
    }
}

impl Default for ReferenceNavigator {
    fn default() -> Self {
        Self::from_settings(&SessionSettings::default())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    fn at(offset_ms: i64) -> DateTime<Utc> {
        fixed_now() + Duration::milliseconds(offset_ms)
    }

    #[test]
    fn navigate_highlights_then_scrolls_then_clears() {
        let mut nav = ReferenceNavigator::default();
        let ticket = nav.navigate_to(AnchorId::new("para-a-1"), at(0));
        assert!(nav.is_highlighted(&AnchorId::new("para-a-1")));
        assert_eq!(ticket.scroll_after(), std::time::Duration::from_millis(100));
        assert_eq!(
            ticket.clear_after_scroll(),
            std::time::Duration::from_millis(1900)
        );

        assert!(nav.poll(at(50)).is_empty());
        assert_eq!(
            nav.poll(at(100)),
            vec![NavigatorEvent::ScrollIntoView(AnchorId::new("para-a-1"))]
        );
        assert!(nav.poll(at(1999)).is_empty());
        assert_eq!(
            nav.poll(at(2000)),
            vec![NavigatorEvent::HighlightCleared(AnchorId::new("para-a-1"))]
        );
        assert!(nav.highlighted().is_none());
        assert!(nav.next_deadline().is_none());
    }

    #[test]
    fn stale_clear_does_not_blank_newer_highlight() {
        let mut nav = ReferenceNavigator::default();
        let first = nav.navigate_to(AnchorId::new("para-c-1"), at(0));
        nav.poll(at(100));
        let second = nav.navigate_to(AnchorId::new("para-d-1"), at(500));

        assert!(!nav.is_current(&first));
        assert!(nav.is_current(&second));

        let events = nav.poll(at(2000));
        assert_eq!(
            events,
            vec![NavigatorEvent::ScrollIntoView(AnchorId::new("para-d-1"))]
        );
        assert_eq!(nav.highlighted(), Some(&AnchorId::new("para-d-1")));

        let events = nav.poll(at(2500));
        assert_eq!(
            events,
            vec![NavigatorEvent::HighlightCleared(AnchorId::new("para-d-1"))]
        );
        assert!(nav.highlighted().is_none());
    }

    #[test]
    fn late_poll_fires_scroll_and_clear_together() {
        let mut nav = ReferenceNavigator::new(100, 2000);
        nav.navigate_to(AnchorId::new("para-e-1"), at(0));
        let events = nav.poll(at(5000));
        assert_eq!(
            events,
            vec![
                NavigatorEvent::ScrollIntoView(AnchorId::new("para-e-1")),
                NavigatorEvent::HighlightCleared(AnchorId::new("para-e-1")),
            ]
        );
        assert!(nav.poll(at(6000)).is_empty());
    }

    #[test]
    fn same_anchor_twice_extends_highlight() {
        let mut nav = ReferenceNavigator::default();
        nav.navigate_to(AnchorId::new("para-b-1"), at(0));
        nav.navigate_to(AnchorId::new("para-b-1"), at(1500));
        nav.poll(at(2000));
        assert!(nav.is_highlighted(&AnchorId::new("para-b-1")));
        nav.poll(at(3500));
        assert!(nav.highlighted().is_none());
    }

    #[test]
    fn fired_ticket_ignores_clock() {
        let mut nav = ReferenceNavigator::default();
        let ticket = nav.navigate_to(AnchorId::new("para-c-3"), at(0));

        assert_eq!(
            nav.fire_scroll(&ticket),
            Some(NavigatorEvent::ScrollIntoView(AnchorId::new("para-c-3")))
        );
        assert!(nav.fire_scroll(&ticket).is_none());
        assert_eq!(
            nav.fire_clear(&ticket),
            Some(NavigatorEvent::HighlightCleared(AnchorId::new("para-c-3")))
        );
        assert!(nav.highlighted().is_none());
        assert!(nav.next_deadline().is_none());
        assert!(nav.poll(at(-60_000)).is_empty());
    }

    #[test]
    fn superseded_ticket_fires_nothing() {
        let mut nav = ReferenceNavigator::default();
        let first = nav.navigate_to(AnchorId::new("para-c-1"), at(0));
        let second = nav.navigate_to(AnchorId::new("para-d-1"), at(500));

        assert!(nav.fire_scroll(&first).is_none());
        assert!(nav.fire_clear(&first).is_none());
        assert_eq!(nav.highlighted(), Some(&AnchorId::new("para-d-1")));

        assert_eq!(
            nav.fire_clear(&second),
            Some(NavigatorEvent::HighlightCleared(AnchorId::new("para-d-1")))
        );
        assert!(nav.fire_scroll(&second).is_none());
    }

    #[test]
    fn next_deadline_tracks_earliest_pending() {
        let mut nav = ReferenceNavigator::default();
        assert!(nav.next_deadline().is_none());
        nav.navigate_to(AnchorId::new("para-a-1"), at(0));
        assert_eq!(nav.next_deadline(), Some(at(100)));
        nav.poll(at(100));
        assert_eq!(nav.next_deadline(), Some(at(2000)));
        assert_eq!(nav.generation(), 1);
    }
}
