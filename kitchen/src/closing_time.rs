//! Cleanup that ends the day, whatever happened to the order

use crate::kitchen_state::{Journal, KitchenState};
use crate::status_board::{announce, StatusBoard};

pub const DAY_ENDED: &str = "Day ended, shop is closed";

/// Holds the board and the journal while an order is prepared.
/// Dropping it shows the end of the day exactly once and leaves the journal in `Done`.
pub struct ClosingTime<'a, B: StatusBoard + ?Sized> {
    board: &'a mut B,
    journal: &'a mut Journal,
}

impl<'a, B: StatusBoard + ?Sized> ClosingTime<'a, B> {
    pub fn new(board: &'a mut B, journal: &'a mut Journal) -> Self {
        ClosingTime { board, journal }
    }

    pub fn board(&mut self) -> &mut B {
        &mut *self.board
    }

    pub fn journal(&mut self) -> &mut Journal {
        &mut *self.journal
    }
}

impl<'a, B: StatusBoard + ?Sized> Drop for ClosingTime<'a, B> {
    fn drop(&mut self) {
        // dropped in the middle of a step
        if let KitchenState::Running(_) = self.journal.current() {
            self.journal.enter(KitchenState::Failed);
        }
        announce(&mut *self.board, DAY_ENDED);
        self.journal.enter(KitchenState::Done);
    }
}
