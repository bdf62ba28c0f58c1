//! The game session state machine.
//!
//! ```text
//! Idle ──setup──▶ Ready ──start──▶ Active ──last pair──▶ Won
//!   ▲               ▲                 │                   │
//!   │               └────setup/reset──┴───────────────────┘
//! ```
//!
//! All mutation happens through `&mut self`; delayed work is queued on a
//! session-owned `Scheduler` and fires from `advance`. The session holds
//! explicit handles for everything it may need to cancel: the recurring
//! timer, a pending match evaluation, and a pending flip-back.

use std::time::Duration;

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::cards::{symbol_counts, Card, DeckGenerator};
use crate::core::{GameConfig, GameRng, GameRngState, MemoryError, Result, TICK_INTERVAL};
use crate::timing::{Scheduler, Task, TaskId};

use super::event::SessionEvent;
use super::selection::Selection;
use super::snapshot::{self, SessionSnapshot};

/// Where a session is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// No deck yet.
    #[default]
    Idle,
    /// Deck dealt, timer not running.
    Ready,
    /// Timer running, accepting selections.
    Active,
    /// All pairs found. Terminal until the next setup/reset.
    Won,
}

/// One playthrough of the memory game.
///
/// `is_active` and `is_won` are derived from the phase, so a won session
/// is never active.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    generator: DeckGenerator,
    rng: GameRng,

    pair_count: Option<usize>,
    cards: Vector<Card>,
    selection: Selection,
    /// Mismatched pair still shown face-up until its flip-back fires.
    revealed: Option<(usize, usize)>,
    elapsed_seconds: u64,
    phase: SessionPhase,

    scheduler: Scheduler,
    timer: Option<TaskId>,
    pending_evaluation: Option<TaskId>,
    pending_flip_back: Option<TaskId>,

    events: Vec<SessionEvent>,
}

impl GameSession {
    /// Create an idle session. Fails if the configuration is invalid.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            generator: DeckGenerator::new(&config),
            config,
            rng: GameRng::new(seed),
            pair_count: None,
            cards: Vector::new(),
            selection: Selection::new(),
            revealed: None,
            elapsed_seconds: 0,
            phase: SessionPhase::Idle,
            scheduler: Scheduler::new(),
            timer: None,
            pending_evaluation: None,
            pending_flip_back: None,
            events: Vec::new(),
        })
    }

    /// Create a session around a prepared deck, skipping the generator.
    ///
    /// The deck must hold a supported number of pairs, pair up every
    /// symbol, and have no matched cards, so that a later `reset` can deal
    /// a generated deck of the same size. The session is `Ready`, or
    /// `Idle` for an empty deck.
    pub fn from_deck(config: GameConfig, seed: u64, cards: Vec<Card>) -> Result<Self> {
        let mut session = Self::new(config, seed)?;
        if cards.is_empty() {
            return Ok(session);
        }

        if cards.len() % 2 != 0 {
            return Err(MemoryError::config(
                "cards",
                format!("a deck of {} cards cannot be split into pairs", cards.len()),
            ));
        }
        let pair_count = cards.len() / 2;
        session.config.check_pair_count(pair_count)?;
        if cards.iter().any(|card| card.matched) {
            return Err(MemoryError::config("cards", "prepared deck has matched cards"));
        }
        if symbol_counts(&cards).values().any(|count| count % 2 != 0) {
            return Err(MemoryError::config("cards", "every symbol needs a partner"));
        }

        session.pair_count = Some(pair_count);
        session.cards = cards.into_iter().collect();
        session.phase = SessionPhase::Ready;
        Ok(session)
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase == SessionPhase::Active
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.phase == SessionPhase::Won
    }

    #[must_use]
    pub fn pair_count(&self) -> Option<usize> {
        self.pair_count
    }

    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Mismatched pair awaiting flip-back.
    #[must_use]
    pub fn revealed(&self) -> Option<(usize, usize)> {
        self.revealed
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    /// Current logical time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// Is the elapsed-time timer scheduled?
    #[must_use]
    pub fn timer_running(&self) -> bool {
        self.timer.is_some_and(|id| self.scheduler.is_pending(id))
    }

    /// Is a match evaluation waiting to fire?
    #[must_use]
    pub fn evaluation_pending(&self) -> bool {
        self.pending_evaluation.is_some()
    }

    /// Time until the next scheduled task, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduler
            .next_due()
            .map(|due| due.saturating_sub(self.scheduler.now()))
    }

    /// RNG state, enough to replay the decks this session will deal next.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Derive an independent RNG stream, e.g. for a random autoplayer.
    /// The decks this session deals are unaffected.
    pub fn fork_rng(&mut self) -> GameRng {
        self.rng.fork()
    }

    /// Is the card at `index` face-up (matched, selected, or revealed)?
    #[must_use]
    pub fn is_face_up(&self, index: usize) -> bool {
        let matched = self.cards.get(index).is_some_and(|c| c.matched);
        let revealed = self
            .revealed
            .is_some_and(|(a, b)| a == index || b == index);
        matched || revealed || self.selection.contains(index)
    }

    /// Render-facing projection of the current state.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        snapshot::project(self)
    }

    /// Drain the events recorded since the last call.
    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    // === Operations ===

    /// Deal a fresh deck of `pair_count` pairs and return to `Ready`.
    ///
    /// Discards all progress. Fails with `InvalidConfiguration` for an
    /// unsupported pair count, leaving the session untouched.
    pub fn setup(&mut self, pair_count: usize) -> Result<()> {
        let cards = self.generator.generate(pair_count, &mut self.rng)?;

        self.cancel_all();
        self.cards = cards.into_iter().collect();
        self.pair_count = Some(pair_count);
        self.selection.clear();
        self.revealed = None;
        self.elapsed_seconds = 0;
        self.phase = SessionPhase::Ready;

        info!(pair_count, cards = self.cards.len(), "session configured");
        self.events.push(SessionEvent::Configured { pair_count });
        Ok(())
    }

    /// UI-facing name for `setup`.
    pub fn configure(&mut self, pair_count: usize) -> Result<()> {
        self.setup(pair_count)
    }

    /// Deal again with the previous pair count. No-op while idle.
    pub fn reset(&mut self) -> Result<()> {
        match self.pair_count {
            Some(pair_count) => self.setup(pair_count),
            None => {
                debug!("reset ignored: session was never configured");
                Ok(())
            }
        }
    }

    /// Start (or restart) the timer and accept selections.
    ///
    /// Ignored with an empty deck or after a win.
    pub fn start(&mut self) {
        match self.phase {
            SessionPhase::Idle => {
                debug!("start ignored: no deck");
                return;
            }
            SessionPhase::Won => {
                debug!("start ignored: session already won");
                return;
            }
            SessionPhase::Ready | SessionPhase::Active => {}
        }

        self.cancel_timer();
        self.elapsed_seconds = 0;
        self.phase = SessionPhase::Active;
        self.timer = self.schedule_tick();

        info!(cards = self.cards.len(), "session started");
        self.events.push(SessionEvent::Started);
    }

    /// Count one elapsed second. No-op unless active.
    pub fn tick(&mut self) {
        if !self.is_active() {
            trace!(phase = ?self.phase, "tick ignored");
            return;
        }
        self.elapsed_seconds = self.elapsed_seconds.saturating_add(1);
        trace!(elapsed_seconds = self.elapsed_seconds, "tick");
        self.events.push(SessionEvent::Ticked {
            elapsed_seconds: self.elapsed_seconds,
        });
    }

    /// Tick driven by an external once-per-second scheduler.
    ///
    /// Hosts that call `advance` already get ticks from the internal
    /// timer and should not call this as well.
    pub fn on_tick(&mut self) {
        self.tick();
    }

    /// Turn the card at `index` face-up.
    ///
    /// Ignored when the session is not active, two cards are already
    /// selected, the card is already selected or matched, or `index` is
    /// out of range. The second selection schedules match evaluation
    /// after `timing.match_delay`.
    pub fn select_card(&mut self, index: usize) {
        if !self.is_active() {
            debug!(index, phase = ?self.phase, "selection ignored: session not active");
            return;
        }
        let card = match self.cards.get(index) {
            Some(card) => *card,
            None => {
                debug!(index, "selection ignored: no such card");
                return;
            }
        };
        if card.matched {
            debug!(index, "selection ignored: card already matched");
            return;
        }
        if !self.selection.push(index) {
            debug!(index, selection = ?self.selection.as_slice(), "selection ignored");
            return;
        }

        debug!(index, card = %card.id, "card selected");
        self.events.push(SessionEvent::CardSelected {
            index,
            card: card.id,
        });

        if self.selection.is_full() {
            let id = self
                .scheduler
                .schedule(self.config.timing.match_delay(), Task::EvaluateMatch);
            self.pending_evaluation = Some(id);
        }
    }

    /// Compare the two selected cards.
    ///
    /// Normally fired by the scheduler; calling it directly evaluates
    /// immediately and cancels the scheduled evaluation. Does nothing
    /// unless exactly two cards are selected. The selection is always
    /// empty afterwards.
    pub fn evaluate_match(&mut self) {
        if let Some(id) = self.pending_evaluation.take() {
            self.scheduler.cancel(id);
        }
        let Some((first, second)) = self.selection.pair() else {
            trace!("evaluation skipped: selection not full");
            return;
        };
        self.selection.clear();

        let (Some(&a), Some(&b)) = (self.cards.get(first), self.cards.get(second)) else {
            return;
        };

        if a.pairs_with(&b) {
            for index in [first, second] {
                if let Some(card) = self.cards.get_mut(index) {
                    card.matched = true;
                }
            }
            debug!(first, second, "pair matched");
            self.events.push(SessionEvent::Matched { first, second });

            if self.cards.iter().all(|c| c.matched) {
                self.win();
            }
        } else {
            debug!(first, second, "pair mismatched");
            self.events.push(SessionEvent::Mismatched { first, second });

            // A newer mismatch supersedes one still on display
            if let Some(id) = self.pending_flip_back.take() {
                self.scheduler.cancel(id);
            }
            self.revealed = Some((first, second));
            self.pending_flip_back = Some(
                self.scheduler
                    .schedule(self.config.timing.flip_back_delay(), Task::FlipBack),
            );
        }
    }

    /// Move the logical clock forward by `elapsed`, firing every task that
    /// falls due along the way in order.
    ///
    /// The clock saturates at `Duration::MAX`. While the timer is the only
    /// pending task, a run of ticks is counted in one step and reported by
    /// a single `Ticked` event.
    pub fn advance(&mut self, elapsed: Duration) {
        let until = self.scheduler.now().saturating_add(elapsed);
        loop {
            self.skip_idle_ticks(until);
            let Some((id, task)) = self.scheduler.pop_due(until) else {
                break;
            };
            trace!(%id, ?task, now = ?self.scheduler.now(), "task fired");
            self.run(id, task);
        }
    }

    /// Advance straight to the next scheduled task and fire it.
    ///
    /// Returns `false` if nothing is scheduled.
    pub fn advance_to_next(&mut self) -> bool {
        match self.next_deadline() {
            Some(delay) => {
                self.advance(delay);
                true
            }
            None => false,
        }
    }

    // === Internals ===

    fn run(&mut self, id: TaskId, task: Task) {
        match task {
            Task::Tick => {
                if self.timer != Some(id) {
                    return;
                }
                self.tick();
                self.timer = if self.is_active() {
                    self.schedule_tick()
                } else {
                    None
                };
            }
            Task::EvaluateMatch => {
                if self.pending_evaluation == Some(id) {
                    self.pending_evaluation = None;
                    self.evaluate_match();
                }
            }
            Task::FlipBack => {
                if self.pending_flip_back == Some(id) {
                    self.pending_flip_back = None;
                    self.flip_back();
                }
            }
        }
    }

    /// Next timer tick, unless the logical clock has run out.
    fn schedule_tick(&mut self) -> Option<TaskId> {
        if self.scheduler.now().checked_add(TICK_INTERVAL).is_none() {
            debug!("timer stopped: logical clock exhausted");
            return None;
        }
        Some(self.scheduler.schedule(TICK_INTERVAL, Task::Tick))
    }

    /// Count every tick due before `until` except the last, which is left
    /// to fire normally. Only applies when nothing but the timer is pending.
    fn skip_idle_ticks(&mut self, until: Duration) {
        let Some(timer) = self.timer else {
            return;
        };
        if self.scheduler.pending_count() != 1 {
            return;
        }
        let Some(due) = self.scheduler.due(timer) else {
            return;
        };
        if due >= until {
            return;
        }

        let skipped = (until - due).as_secs() / TICK_INTERVAL.as_secs();
        if skipped == 0 {
            return;
        }
        let next = due.saturating_add(Duration::from_secs(skipped * TICK_INTERVAL.as_secs()));

        self.scheduler.cancel(timer);
        self.timer = Some(self.scheduler.schedule_at(next, Task::Tick));
        self.elapsed_seconds = self.elapsed_seconds.saturating_add(skipped);
        trace!(skipped, elapsed_seconds = self.elapsed_seconds, "idle ticks counted");
    }

    fn flip_back(&mut self) {
        if let Some((first, second)) = self.revealed.take() {
            debug!(first, second, "mismatched pair flipped back");
            self.events.push(SessionEvent::FlippedBack { first, second });
        }
    }

    fn win(&mut self) {
        self.cancel_timer();
        self.phase = SessionPhase::Won;
        info!(elapsed_seconds = self.elapsed_seconds, "all pairs found");
        self.events.push(SessionEvent::Won {
            elapsed_seconds: self.elapsed_seconds,
        });
    }

    fn cancel_timer(&mut self) {
        if let Some(id) = self.timer.take() {
            self.scheduler.cancel(id);
        }
    }

    fn cancel_all(&mut self) {
        self.cancel_timer();
        self.pending_evaluation = None;
        self.pending_flip_back = None;
        self.scheduler.clear();
    }
}
