//! One-shot "load more" trigger bound to the board's tail poster.
//!
//! DESIGN
//! ======
//! Re-arming is two-step. Completing a cycle hands out an [`ArmTicket`]; the
//! caller waits for layout to settle and then redeems it. Any state change in
//! between (another schedule, a disarm) invalidates the ticket, so a late
//! timer can never arm a board that moved on.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use super::display_list::SlotKey;

/// Token for one deferred re-arm.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArmTicket(u64);

/// Arm state of the viewport trigger.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewportTrigger {
    armed: Option<SlotKey>,
    generation: u64,
}

impl ViewportTrigger {
    /// Slot currently observed, if any.
    #[must_use]
    pub fn armed(&self) -> Option<SlotKey> {
        self.armed
    }

    /// Start a deferred re-arm, invalidating earlier tickets.
    pub fn schedule(&mut self) -> ArmTicket {
        self.armed = None;
        self.generation += 1;
        ArmTicket(self.generation)
    }

    /// Observe `key` if `ticket` is still the latest one.
    pub fn arm(&mut self, ticket: ArmTicket, key: SlotKey) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.armed = Some(key);
        // Spend the ticket.
        self.generation += 1;
        true
    }

    /// Consume an intersection on `key`. Returns true at most once per arm.
    pub fn fire(&mut self, key: SlotKey) -> bool {
        if self.armed != Some(key) {
            return false;
        }
        self.armed = None;
        true
    }

    /// Stop observing and invalidate outstanding tickets.
    pub fn disarm(&mut self) {
        self.armed = None;
        self.generation += 1;
    }
}
