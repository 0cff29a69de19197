use std::collections::HashMap;

pub const COPY_FEEDBACK_MS: f64 = 2_000.0;
pub const COPYING_CLASS: &str = "copying";

const NOTIFICATION_SHOWN_STYLE: &str = "opacity: 1; transform: translateX(0);";
const NOTIFICATION_HIDDEN_STYLE: &str = "opacity: 0; transform: translateX(400px);";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyFailure {
    Unavailable,
    Rejected,
}

impl CopyFailure {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unavailable => "clipboard_unavailable",
            Self::Rejected => "clipboard_write_rejected",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CopyTicket {
    item: usize,
    generation: u64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CopyFeedback {
    generation: u64,
    notification_generation: Option<u64>,
    pulsing: HashMap<usize, u64>,
}

impl CopyFeedback {
    pub fn notification_visible(&self) -> bool {
        self.notification_generation.is_some()
    }

    pub fn notification_style(&self) -> &'static str {
        if self.notification_visible() {
            NOTIFICATION_SHOWN_STYLE
        } else {
            NOTIFICATION_HIDDEN_STYLE
        }
    }

    pub fn is_pulsing(&self, item: usize) -> bool {
        self.pulsing.contains_key(&item)
    }

    pub fn item_class(&self, item: usize) -> Option<&'static str> {
        self.is_pulsing(item).then_some(COPYING_CLASS)
    }

    pub fn copied(&mut self, item: usize) -> CopyTicket {
        self.generation += 1;
        let generation = self.generation;
        self.notification_generation = Some(generation);
        self.pulsing.insert(item, generation);
        CopyTicket { item, generation }
    }

    /// Reverts the feedback owned by `ticket`; state refreshed by a later
    /// copy is left alone.
    pub fn expire(&mut self, ticket: CopyTicket) {
        if self.notification_generation == Some(ticket.generation) {
            self.notification_generation = None;
        }
        if self.pulsing.get(&ticket.item) == Some(&ticket.generation) {
            self.pulsing.remove(&ticket.item);
        }
    }

    pub fn record(&mut self, item: usize, result: Result<(), CopyFailure>) -> Option<CopyTicket> {
        result.ok().map(|()| self.copied(item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::Scheduler;

    #[test]
    fn successful_copy_shows_then_hides_after_two_seconds() {
        let mut feedback = CopyFeedback::default();
        let mut scheduler = Scheduler::new();
        assert_eq!(feedback.notification_style(), NOTIFICATION_HIDDEN_STYLE);

        let ticket = feedback.record(0, Ok(())).expect("success should yield a ticket");
        scheduler.schedule(COPY_FEEDBACK_MS, ticket);
        assert!(feedback.notification_visible());
        assert_eq!(feedback.notification_style(), NOTIFICATION_SHOWN_STYLE);
        assert_eq!(feedback.item_class(0), Some("copying"));

        assert!(scheduler.advance_to(1_999.0).is_empty());
        assert!(feedback.notification_visible());

        for ticket in scheduler.advance_to(2_000.0) {
            feedback.expire(ticket);
        }
        assert!(!feedback.notification_visible());
        assert_eq!(feedback.item_class(0), None);
    }

    #[test]
    fn failed_copy_changes_nothing() {
        let mut feedback = CopyFeedback::default();

        assert_eq!(feedback.record(1, Err(CopyFailure::Rejected)), None);
        assert_eq!(feedback.record(1, Err(CopyFailure::Unavailable)), None);
        assert!(!feedback.notification_visible());
        assert!(!feedback.is_pulsing(1));
        assert_eq!(feedback, CopyFeedback::default());
    }

    #[test]
    fn newer_copy_keeps_notification_until_its_own_expiry() {
        let mut feedback = CopyFeedback::default();
        let mut scheduler = Scheduler::new();

        let first = feedback.copied(0);
        scheduler.schedule(COPY_FEEDBACK_MS, first);
        scheduler.advance_to(1_500.0);
        let second = feedback.copied(1);
        scheduler.schedule(COPY_FEEDBACK_MS, second);

        for ticket in scheduler.advance_to(2_000.0) {
            feedback.expire(ticket);
        }
        assert!(feedback.notification_visible());
        assert!(!feedback.is_pulsing(0));
        assert!(feedback.is_pulsing(1));

        for ticket in scheduler.advance_to(3_500.0) {
            feedback.expire(ticket);
        }
        assert!(!feedback.notification_visible());
        assert!(!feedback.is_pulsing(1));
    }

    #[test]
    fn failure_classes_are_stable() {
        assert_eq!(CopyFailure::Unavailable.as_str(), "clipboard_unavailable");
        assert_eq!(CopyFailure::Rejected.as_str(), "clipboard_write_rejected");
    }
}
