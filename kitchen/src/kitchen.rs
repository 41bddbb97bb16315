//! Prepares one order by running the recipe step by step

use stocks::Stock;
use tracing::{info, info_span, Instrument};

use crate::clock::Clock;
use crate::closing_time::ClosingTime;
use crate::config::ShopConfig;
use crate::gate::Gate;
use crate::kitchen_state::{Journal, KitchenState};
use crate::recipe::{Step, RECIPE};
use crate::shop_error::ShopError;
use crate::status_board::{announce, StatusBoard};

pub const CUSTOMER_LEFT: &str = "Customer left, error";

/// How the order of the day ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// `step` is the 1-based number of the step that could not be done
    Failed { step: usize, error: ShopError },
}

impl Outcome {
    pub fn is_completed(&self) -> bool {
        *self == Outcome::Completed
    }
}

/// The kitchen of the shop. It prepares the order of the day with the
/// items in `stock`, waiting on the gate before every step and showing
/// each finished step on the board.
pub struct Kitchen<C, B> {
    stock: Stock,
    gate: Gate<C>,
    board: B,
    journal: Journal,
}

impl<C: Clock, B: StatusBoard> Kitchen<C, B> {
    pub fn new(config: ShopConfig, stock: Stock, clock: C, board: B) -> Self {
        Kitchen {
            stock,
            gate: Gate::new(config.open, clock),
            board,
            journal: Journal::new(RECIPE.len()),
        }
    }

    pub fn state(&self) -> KitchenState {
        self.journal.current()
    }

    /// States of the last day, oldest first
    pub fn history(&self) -> &[KitchenState] {
        self.journal.history()
    }

    pub fn board(&self) -> &B {
        &self.board
    }

    pub fn into_board(self) -> B {
        self.board
    }

    /// Runs the recipe in order until it is served or a step fails.
    /// A failure skips the remaining steps and is reported on the board.
    /// The end of the day is shown last, exactly once, in every case.
    pub async fn open_day(&mut self) -> Outcome {
        self.journal = Journal::new(RECIPE.len());
        let span = info_span!("day", open = self.gate.is_open());
        let Kitchen {
            stock,
            gate,
            board,
            journal,
        } = self;
        let mut closing = ClosingTime::new(board, journal);

        let outcome = match prepare_order(stock, gate, &mut closing)
            .instrument(span)
            .await
        {
            Ok(()) => {
                closing.journal().enter(KitchenState::Completed);
                Outcome::Completed
            }
            Err((step, error)) => {
                info!(step, %error, "order abandoned");
                closing.journal().enter(KitchenState::Failed);
                announce(closing.board(), CUSTOMER_LEFT);
                Outcome::Failed { step, error }
            }
        };
        drop(closing);
        outcome
    }
}

async fn prepare_order<C: Clock, B: StatusBoard>(
    stock: &Stock,
    gate: &Gate<C>,
    closing: &mut ClosingTime<'_, B>,
) -> Result<(), (usize, ShopError)> {
    for (index, step) in RECIPE.iter().enumerate() {
        let number = index + 1;
        closing.journal().enter(KitchenState::Running(number));
        run_step(stock, gate, closing.board(), step)
            .await
            .map_err(|error| (number, error))?;
    }
    Ok(())
}

async fn run_step<C: Clock, B: StatusBoard + ?Sized>(
    stock: &Stock,
    gate: &Gate<C>,
    board: &mut B,
    step: &Step,
) -> Result<(), ShopError> {
    gate.time(board, step.delay_ms()).await?;
    let line = step.message().render(stock)?;
    announce(board, &line);
    Ok(())
}
