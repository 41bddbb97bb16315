//! Wait-or-fail primitive that paces every step of an order

use std::time::Duration;
use tracing::debug;

use crate::clock::Clock;
use crate::shop_error::ShopError;
use crate::status_board::{announce, StatusBoard};

/// Lets the kitchen wait between steps while the shop is open.
/// A closed shop refuses every wait right away, without touching the clock.
pub struct Gate<C> {
    open: bool,
    clock: C,
}

impl<C: Clock> Gate<C> {
    pub fn new(open: bool, clock: C) -> Self {
        Gate { open, clock }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Waits `duration_ms` milliseconds if the shop is open.
    /// If it is closed, shows the closed notice on `board` and fails with `ShopError::Closed`.
    pub async fn time<B: StatusBoard + ?Sized>(
        &self,
        board: &mut B,
        duration_ms: u64,
    ) -> Result<(), ShopError> {
        if !self.open {
            debug!(duration_ms, "gate refused the wait");
            announce(board, &ShopError::Closed.to_string());
            return Err(ShopError::Closed);
        }
        debug!(duration_ms, "waiting");
        self.clock.sleep(Duration::from_millis(duration_ms)).await;
        Ok(())
    }
}
