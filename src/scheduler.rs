use std::{cmp::Ordering, collections::BinaryHeap};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TimerId(u64);

struct Timer<T> {
    due_ms: f64,
    seq: u64,
    task: T,
}

impl<T> PartialEq for Timer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl<T> Eq for Timer<T> {}

impl<T> PartialOrd for Timer<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Timer<T> {
    // Reversed so the max-heap yields the earliest deadline first, FIFO on ties.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due_ms
            .total_cmp(&self.due_ms)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

pub struct Scheduler<T> {
    now_ms: f64,
    next_seq: u64,
    timers: BinaryHeap<Timer<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            now_ms: 0.0,
            next_seq: 0,
            timers: BinaryHeap::new(),
        }
    }

    pub fn now(&self) -> f64 {
        self.now_ms
    }

    pub fn schedule(&mut self, delay_ms: f64, task: T) -> TimerId {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.timers.push(Timer {
            due_ms: self.now_ms + delay_ms.max(0.0),
            seq,
            task,
        });
        TimerId(seq)
    }

    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|timer| timer.seq != id.0);
        self.timers.len() != before
    }

    /// Returns every task due at `now_ms`, earliest first. The clock never
    /// moves backwards.
    pub fn advance_to(&mut self, now_ms: f64) -> Vec<T> {
        if now_ms > self.now_ms {
            self.now_ms = now_ms;
        }

        let mut due = Vec::new();
        while self
            .timers
            .peek()
            .is_some_and(|timer| timer.due_ms <= self.now_ms)
        {
            if let Some(timer) = self.timers.pop() {
                due.push(timer.task);
            }
        }
        due
    }
}

#[cfg(test)]
impl<T> Scheduler<T> {
    pub(crate) fn pending(&self) -> usize {
        self.timers.len()
    }

    pub(crate) fn advance_by(&mut self, delta_ms: f64) -> Vec<T> {
        let target = self.now_ms + delta_ms.max(0.0);
        self.advance_to(target)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct SubscriptionId(u64);

/// Changes made between `begin_frame` and `end_frame` apply when the frame ends.
pub struct FrameBus<S> {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, S)>,
    in_frame: bool,
    removed_in_frame: Vec<SubscriptionId>,
}

impl<S> Default for FrameBus<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> FrameBus<S> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            subscribers: Vec::new(),
            in_frame: false,
            removed_in_frame: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, subscriber: S) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, subscriber));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        if self.in_frame {
            self.removed_in_frame.push(id);
        }
        self.subscribers.retain(|(existing, _)| *existing != id);
    }

    pub fn begin_frame(&mut self) -> Vec<(SubscriptionId, S)> {
        self.in_frame = true;
        std::mem::take(&mut self.subscribers)
    }

    pub fn end_frame(&mut self, mut batch: Vec<(SubscriptionId, S)>) {
        let removed = std::mem::take(&mut self.removed_in_frame);
        batch.retain(|(id, _)| !removed.contains(id));
        // Subscriptions added during the frame go after the existing ones.
        batch.append(&mut self.subscribers);
        self.subscribers = batch;
        self.in_frame = false;
    }
}

#[cfg(test)]
impl<S> FrameBus<S> {
    fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn due_tasks_fire_in_deadline_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(300.0, "late");
        scheduler.schedule(100.0, "early");
        scheduler.schedule(200.0, "middle");

        assert!(scheduler.advance_to(99.0).is_empty());
        assert_eq!(scheduler.advance_to(250.0), vec!["early", "middle"]);
        assert_eq!(scheduler.advance_to(300.0), vec!["late"]);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn equal_deadlines_fire_in_insertion_order() {
        let mut scheduler = Scheduler::new();
        for label in ["a", "b", "c"] {
            scheduler.schedule(50.0, label);
        }

        assert_eq!(scheduler.advance_by(50.0), vec!["a", "b", "c"]);
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut scheduler = Scheduler::new();
        let keep = scheduler.schedule(10.0, 1);
        let dropped = scheduler.schedule(10.0, 2);

        assert!(scheduler.cancel(dropped));
        assert!(!scheduler.cancel(dropped));
        assert_eq!(scheduler.advance_by(10.0), vec![1]);
        assert!(!scheduler.cancel(keep));
    }

    #[test]
    fn clock_never_moves_backwards() {
        let mut scheduler = Scheduler::new();
        scheduler.advance_to(1_000.0);
        scheduler.schedule(10.0, ());

        assert!(scheduler.advance_to(500.0).is_empty());
        assert_eq!(scheduler.now(), 1_000.0);
        assert_eq!(scheduler.advance_to(1_010.0).len(), 1);
    }

    #[test]
    fn delay_is_relative_to_current_clock() {
        let mut scheduler = Scheduler::new();
        scheduler.advance_to(400.0);
        scheduler.schedule(100.0, "tick");

        assert!(scheduler.advance_to(499.0).is_empty());
        assert_eq!(scheduler.advance_to(500.0), vec!["tick"]);
    }

    #[test]
    fn negative_delay_fires_on_next_advance() {
        let mut scheduler = Scheduler::new();
        scheduler.advance_to(2_000.0);
        scheduler.schedule(-500.0, "overdue");
        scheduler.schedule(500.0, "future");

        assert_eq!(scheduler.advance_by(0.0), vec!["overdue"]);
        assert_eq!(scheduler.advance_to(2_500.0), vec!["future"]);
    }

    #[test]
    fn frame_bus_applies_changes_made_during_a_frame() {
        let mut bus = FrameBus::new();
        let first = bus.subscribe("first");
        let second = bus.subscribe("second");

        let batch = bus.begin_frame();
        assert_eq!(batch.len(), 2);
        bus.unsubscribe(second);
        let third = bus.subscribe("third");
        bus.end_frame(batch);

        let ids: Vec<_> = bus.begin_frame().into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![first, third]);
    }

    #[test]
    fn unsubscribe_outside_frame_removes_immediately() {
        let mut bus = FrameBus::new();
        let id = bus.subscribe(());
        bus.unsubscribe(id);

        assert!(bus.is_empty());
    }
}
