use super::event::Event;
use super::queue::EventQueue;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

struct ScheduledEvent {
	emit_at: Instant,
	event: Event,
}

impl PartialEq for ScheduledEvent {
	fn eq(&self, other: &Self) -> bool {
		self.emit_at == other.emit_at
	}
}

impl Eq for ScheduledEvent {}

impl PartialOrd for ScheduledEvent {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for ScheduledEvent {
	// Reversed so the heap pops the earliest deadline first
	fn cmp(&self, other: &Self) -> Ordering {
		other.emit_at.cmp(&self.emit_at)
	}
}

pub struct Scheduler {
	pending: BinaryHeap<ScheduledEvent>,
}

impl Scheduler {
	pub fn new() -> Self {
		Self {
			pending: BinaryHeap::new(),
		}
	}

	/// Schedule an event to fire after `delay`
	pub fn schedule(&mut self, event: Event, delay: Duration) {
		self.pending.push(ScheduledEvent {
			emit_at: Instant::now() + delay,
			event,
		});
	}

	/// Move every due event into the queue
	pub fn tick(&mut self, queue: &mut EventQueue) {
		self.drain_until(Instant::now(), queue);
	}

	fn drain_until(&mut self, now: Instant, queue: &mut EventQueue) {
		while self
			.pending
			.peek()
			.is_some_and(|scheduled| scheduled.emit_at <= now)
		{
			if let Some(scheduled) = self.pending.pop() {
				queue.push(scheduled.event);
			}
		}
	}

	/// Time until the next scheduled event, for repaint requests
	pub fn next_deadline(&self) -> Option<Duration> {
		self.pending
			.peek()
			.map(|scheduled| scheduled.emit_at.saturating_duration_since(Instant::now()))
	}

	pub fn len(&self) -> usize {
		self.pending.len()
	}

	pub fn is_empty(&self) -> bool {
		self.pending.is_empty()
	}
}

impl Default for Scheduler {
	fn default() -> Self {
		Self::new()
	}
}
