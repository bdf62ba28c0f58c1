//! A single-owner queue of delayed tasks.
//!
//! Tasks fire in due-time order; tasks due at the same instant fire in
//! the order they were scheduled. Each scheduled task gets a `TaskId`
//! that can cancel it until it fires.
//!
//! Deadlines saturate at `Duration::MAX` instead of overflowing.

use std::collections::BTreeMap;
use std::time::Duration;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Handle to a scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TaskId(pub u64);

impl TaskId {
    /// Create a new task ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Task({})", self.0)
    }
}

/// Work a session can defer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Task {
    /// One period of the elapsed-time timer.
    Tick,
    /// Compare the two selected cards.
    EvaluateMatch,
    /// Turn a revealed mismatched pair face-down again.
    FlipBack,
}

/// Queue key: due time first, then scheduling order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Slot {
    due: Duration,
    id: TaskId,
}

/// Delayed-task queue driven by a logical clock.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    now: Duration,
    queue: BTreeMap<Slot, Task>,
    /// Due time of every pending task, for lookup by id.
    due: FxHashMap<TaskId, Duration>,
    next_id: u64,
}

impl Scheduler {
    /// Create an empty scheduler at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current logical time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of tasks waiting to fire.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    /// Due time of the earliest pending task.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.queue.keys().next().map(|slot| slot.due)
    }

    /// Is the task still waiting to fire?
    #[must_use]
    pub fn is_pending(&self, id: TaskId) -> bool {
        self.due.contains_key(&id)
    }

    /// Due time of a pending task.
    #[must_use]
    pub fn due(&self, id: TaskId) -> Option<Duration> {
        self.due.get(&id).copied()
    }

    /// Schedule `task` to fire `delay` after the current time.
    pub fn schedule(&mut self, delay: Duration, task: Task) -> TaskId {
        self.schedule_at(self.now.saturating_add(delay), task)
    }

    /// Schedule `task` to fire at the absolute time `due`. A time in the
    /// past fires on the next `pop_due`.
    pub fn schedule_at(&mut self, due: Duration, task: Task) -> TaskId {
        let id = TaskId::new(self.next_id);
        self.next_id += 1;

        self.queue.insert(Slot { due, id }, task);
        self.due.insert(id, due);
        id
    }

    /// Cancel a pending task.
    ///
    /// Returns `false` if the task already fired or was cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        match self.due.remove(&id) {
            Some(due) => self.queue.remove(&Slot { due, id }).is_some(),
            None => false,
        }
    }

    /// Pop the earliest task due at or before `until`, moving the clock to
    /// its due time.
    ///
    /// Returns `None` once nothing else is due; the clock is then left at
    /// `until`.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TaskId, Task)> {
        let slot = match self.queue.keys().next() {
            Some(slot) if slot.due <= until => *slot,
            _ => {
                self.now = self.now.max(until);
                return None;
            }
        };

        let task = self.queue.remove(&slot)?;
        self.due.remove(&slot.id);
        self.now = self.now.max(slot.due);
        Some((slot.id, task))
    }

    /// Drop every pending task.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.due.clear();
    }
}
