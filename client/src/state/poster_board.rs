//! Poster board controller: the incremental-loading state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `PosterBoardState` lives per rendered board. It owns the page cursor,
//! the display list and the viewport trigger, and is the only thing that
//! mutates them. Components call into it from click handlers, the
//! intersection observer and the settle timer; the async fetch itself runs in
//! [`run_cycle`] between [`PosterBoardState::begin_cycle`] and
//! [`PosterBoardState::complete_cycle`].
//!
//! DESIGN
//! ======
//! `LoadPhase` is the single-flight guard. Every trigger path goes through
//! `begin_cycle`, which refuses unless the board is `Idle`, so a double click
//! or a duplicate intersection cannot start a second fetch. Each terminal
//! reason is one-way for the lifetime of the board.

#[cfg(test)]
#[path = "poster_board_test.rs"]
mod poster_board_test;

use std::cell::RefCell;
use std::time::Duration;

use catalog::{BoardMode, CatalogError, MoviePage, PageRequest};
use leptos::prelude::*;

use super::cursor::{PageCursor, fetch_page};
use super::display_list::{DisplayList, SlotKey};
use super::viewport::{ArmTicket, ViewportTrigger};
use crate::net::api::CatalogClient;

/// Skeleton posters inserted per cycle.
pub const PLACEHOLDER_COUNT: usize = 20;

/// Layout settle time before the trigger measures the new tail.
pub const SETTLE_DELAY: Duration = Duration::from_secs(1);

/// Per-board tuning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardConfig {
    pub placeholder_count: usize,
    /// `None` re-arms as soon as a cycle completes (no layout pass to wait for).
    pub settle_delay: Option<Duration>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self { placeholder_count: PLACEHOLDER_COUNT, settle_delay: Some(SETTLE_DELAY) }
    }
}

/// Why a board stopped loading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TerminalReason {
    /// The catalog reported the last fetched page as its final one.
    LastPage,
    /// A cycle succeeded with zero results.
    NoResults,
    /// A fetch failed; the board is replaced by the network fallback.
    FetchFailed,
}

/// Single-flight load phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Terminal(TerminalReason),
}

/// What started a cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CycleSource {
    /// First load when the board mounts.
    Initial,
    /// The "see more" button.
    Manual,
    /// The tail poster scrolled near the viewport.
    Viewport,
}

/// Result of finishing a cycle.
#[derive(Clone, Debug, PartialEq)]
pub enum CycleOutcome {
    /// Posters were appended. `rearm` is set when more pages remain.
    Appended { count: usize, rearm: Option<ArmTicket> },
    /// Zero results; the headline now shows the not-found message.
    NotFound,
    /// The fetch failed and the board content was discarded.
    Failed(CatalogError),
    /// No cycle was in flight.
    Ignored,
}

/// Controller state for one poster board.
#[derive(Clone, Debug)]
pub struct PosterBoardState {
    mode: BoardMode,
    config: BoardConfig,
    cursor: PageCursor,
    list: DisplayList,
    trigger: ViewportTrigger,
    phase: LoadPhase,
    in_flight_placeholders: usize,
    failure: Option<CatalogError>,
}

impl PosterBoardState {
    #[must_use]
    pub fn new(mode: BoardMode, config: BoardConfig) -> Self {
        Self {
            mode,
            config,
            cursor: PageCursor::new(),
            list: DisplayList::new(),
            trigger: ViewportTrigger::default(),
            phase: LoadPhase::Idle,
            in_flight_placeholders: 0,
            failure: None,
        }
    }

    #[must_use]
    pub fn mode(&self) -> &BoardMode {
        &self.mode
    }

    #[must_use]
    pub fn config(&self) -> BoardConfig {
        self.config
    }

    #[must_use]
    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    #[must_use]
    pub fn cursor(&self) -> &PageCursor {
        &self.cursor
    }

    #[must_use]
    pub fn list(&self) -> &DisplayList {
        &self.list
    }

    #[must_use]
    pub fn trigger(&self) -> &ViewportTrigger {
        &self.trigger
    }

    /// The error that ended this board, if a fetch failed.
    #[must_use]
    pub fn failure(&self) -> Option<&CatalogError> {
        self.failure.as_ref()
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.phase == LoadPhase::Terminal(TerminalReason::FetchFailed)
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self.phase, LoadPhase::Terminal(_))
    }

    /// Text for the board's description area.
    #[must_use]
    pub fn headline(&self) -> String {
        if self.phase == LoadPhase::Terminal(TerminalReason::NoResults) {
            self.mode.not_found_message()
        } else {
            self.mode.description()
        }
    }

    /// The "see more" button is hidden for good once the board is terminal.
    #[must_use]
    pub fn manual_control_visible(&self) -> bool {
        !self.is_terminal()
    }

    /// The button only accepts clicks while no cycle is in flight.
    #[must_use]
    pub fn manual_control_enabled(&self) -> bool {
        self.phase == LoadPhase::Idle
    }

    /// Start a cycle: insert placeholders and hand back the page to fetch.
    ///
    /// Returns `None` while a cycle is in flight or once the board is terminal.
    pub fn begin_cycle(&mut self, source: CycleSource) -> Option<PageRequest> {
        if self.phase != LoadPhase::Idle {
            log::debug!("poster board: {source:?} trigger ignored while {:?}", self.phase);
            return None;
        }
        self.trigger.disarm();
        self.list.push_placeholders(self.config.placeholder_count);
        self.in_flight_placeholders = self.config.placeholder_count;
        self.phase = LoadPhase::Loading;

        let request = self.cursor.request(&self.mode);
        log::debug!("poster board: {source:?} cycle for page {}", request.page);
        Some(request)
    }

    /// Finish the in-flight cycle with the catalog's answer.
    ///
    /// Placeholders always come off before any final content goes in.
    pub fn complete_cycle(&mut self, result: Result<MoviePage, CatalogError>) -> CycleOutcome {
        if self.phase != LoadPhase::Loading {
            log::warn!("poster board: completion without a cycle in flight ({:?})", self.phase);
            return CycleOutcome::Ignored;
        }
        self.list.remove_tail(self.in_flight_placeholders);
        self.in_flight_placeholders = 0;

        let page = match result {
            Ok(page) => page,
            Err(err) => {
                log::warn!("poster board: page {} failed: {err}", self.cursor.current_page());
                self.list.clear();
                self.trigger.disarm();
                self.phase = LoadPhase::Terminal(TerminalReason::FetchFailed);
                self.failure = Some(err.clone());
                return CycleOutcome::Failed(err);
            }
        };

        let items = self.cursor.record(&page);
        if items.is_empty() {
            self.phase = LoadPhase::Terminal(TerminalReason::NoResults);
            return CycleOutcome::NotFound;
        }

        let count = items.len();
        self.list.append(items);
        if self.cursor.is_last_page() {
            self.phase = LoadPhase::Terminal(TerminalReason::LastPage);
            return CycleOutcome::Appended { count, rearm: None };
        }

        self.phase = LoadPhase::Idle;
        CycleOutcome::Appended { count, rearm: Some(self.trigger.schedule()) }
    }

    /// Redeem a deferred re-arm on the current tail poster.
    ///
    /// Skipped when the board is not idle or the ticket went stale.
    pub fn arm_viewport(&mut self, ticket: ArmTicket) -> Option<SlotKey> {
        if self.phase != LoadPhase::Idle {
            return None;
        }
        let (key, _) = self.list.last_item()?;
        self.trigger.arm(ticket, key).then_some(key)
    }

    /// Handle the observed tail poster entering the viewport.
    pub fn on_intersect(&mut self, key: SlotKey) -> Option<PageRequest> {
        if !self.trigger.fire(key) {
            return None;
        }
        self.begin_cycle(CycleSource::Viewport)
    }
}

// =============================================================================
// ASYNC DRIVER
// =============================================================================

/// Shared, mutable home of a board's state.
///
/// The driver only touches the board through short synchronous updates so no
/// borrow is held across the fetch.
pub trait BoardStore {
    /// Run `f` against the board, or return `None` if the board is gone.
    fn with_board<R>(&self, f: impl FnOnce(&mut PosterBoardState) -> R) -> Option<R>;
}

impl BoardStore for RwSignal<PosterBoardState> {
    fn with_board<R>(&self, f: impl FnOnce(&mut PosterBoardState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl BoardStore for RefCell<PosterBoardState> {
    fn with_board<R>(&self, f: impl FnOnce(&mut PosterBoardState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Run one full cycle: begin, fetch, complete.
///
/// Returns `None` when the board refused to start (in flight or terminal),
/// in which case no fetch is made.
pub async fn run_cycle<S, C>(store: &S, client: &C, source: CycleSource) -> Option<CycleOutcome>
where
    S: BoardStore,
    C: CatalogClient,
{
    let request = store.with_board(|board| board.begin_cycle(source)).flatten()?;
    fetch_and_complete(store, client, request).await
}

/// Run the cycle started by the tail poster `key` entering the viewport.
///
/// Duplicate or stale intersections return `None` without fetching.
pub async fn run_intersect<S, C>(store: &S, client: &C, key: SlotKey) -> Option<CycleOutcome>
where
    S: BoardStore,
    C: CatalogClient,
{
    let request = store.with_board(|board| board.on_intersect(key)).flatten()?;
    fetch_and_complete(store, client, request).await
}

async fn fetch_and_complete<S, C>(store: &S, client: &C, request: PageRequest) -> Option<CycleOutcome>
where
    S: BoardStore,
    C: CatalogClient,
{
    let result = fetch_page(client, &request).await;
    store.with_board(|board| board.complete_cycle(result))
}
