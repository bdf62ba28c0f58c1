//! Logical-clock task scheduling.
//!
//! Every delayed behaviour of a session (match evaluation, mismatch
//! flip-back, the elapsed-time timer) is a `Task` queued on the session's
//! own `Scheduler`. Nothing sleeps and nothing runs on another thread:
//! the host advances the clock and the session fires whatever fell due.

pub mod scheduler;

pub use scheduler::{Scheduler, Task, TaskId};
