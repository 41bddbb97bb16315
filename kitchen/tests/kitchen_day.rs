use std::time::Duration;

use kitchen::clock::TokioClock;
use kitchen::closing_time::DAY_ENDED;
use kitchen::config::ShopConfig;
use kitchen::kitchen::{Kitchen, Outcome, CUSTOMER_LEFT};
use kitchen::kitchen_state::KitchenState;
use kitchen::recipe::{preparation_time, RECIPE};
use kitchen::shop_error::ShopError;
use kitchen::status_board::StatusBoard;
use stocks::{Category, Stock};
use tokio::time::Instant;

/// Records every line with the virtual time it was shown at
struct TimedBoard {
    start: Instant,
    lines: Vec<(Duration, String)>,
}

impl TimedBoard {
    fn new() -> Self {
        TimedBoard {
            start: Instant::now(),
            lines: Vec::new(),
        }
    }

    fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|(_, line)| line.as_str()).collect()
    }
}

impl StatusBoard for TimedBoard {
    fn show(&mut self, line: &str) {
        self.lines.push((self.start.elapsed(), line.to_owned()));
    }
}

fn new_kitchen(config: ShopConfig, stock: Stock) -> Kitchen<TokioClock, TimedBoard> {
    Kitchen::new(config, stock, TokioClock, TimedBoard::new())
}

#[tokio::test(start_paused = true)]
async fn closed_shop_sends_the_customer_away() {
    let mut kitchen = new_kitchen(ShopConfig::closed(), Stock::default());

    let outcome = kitchen.open_day().await;

    assert_eq!(
        outcome,
        Outcome::Failed {
            step: 1,
            error: ShopError::Closed
        }
    );
    assert_eq!(
        kitchen.board().texts(),
        vec!["Shop is closed", CUSTOMER_LEFT, DAY_ENDED]
    );
}

#[tokio::test(start_paused = true)]
async fn closed_shop_does_not_wait() {
    let mut kitchen = new_kitchen(ShopConfig::closed(), Stock::default());

    kitchen.open_day().await;

    assert!(kitchen
        .board()
        .lines
        .iter()
        .all(|(at, _)| *at < Duration::from_millis(1)));
}

#[tokio::test(start_paused = true)]
async fn open_shop_serves_the_order() {
    let mut kitchen = new_kitchen(ShopConfig::open(), Stock::default());

    let outcome = kitchen.open_day().await;

    assert_eq!(outcome, Outcome::Completed);
    assert_eq!(
        kitchen.board().texts(),
        vec![
            "strawberry",
            "Start the production",
            "Cut the fruit",
            "water and ice added",
            "Start the machine",
            "Ice cream placed on cone",
            "chocolate was selected",
            "Serve ice cream",
            DAY_ENDED,
        ]
    );
    assert_eq!(kitchen.state(), KitchenState::Done);
}

#[tokio::test(start_paused = true)]
async fn no_step_is_shown_before_its_delay_elapsed() {
    let mut kitchen = new_kitchen(ShopConfig::open(), Stock::default());

    kitchen.open_day().await;

    let lines = &kitchen.board().lines;
    let mut due = Duration::ZERO;
    for (step, (at, line)) in RECIPE.iter().zip(lines.iter()) {
        due += step.delay();
        assert!(*at >= due, "{} shown at {:?}, before {:?}", line, at, due);
    }
    assert!(lines.windows(2).all(|pair| pair[0].0 <= pair[1].0));
    let (ended_at, _) = &lines[lines.len() - 1];
    assert!(*ended_at >= preparation_time());
}

#[tokio::test(start_paused = true)]
async fn day_ends_once_when_a_step_fails_midway() {
    let stock = Stock::new([
        (Category::Fruits, vec!["grapes"]),
        (Category::Holder, vec!["stick"]),
        (Category::Toppings, vec!["peanuts"]),
    ]);
    let mut kitchen = new_kitchen(ShopConfig::open(), stock);

    let outcome = kitchen.open_day().await;

    assert!(matches!(
        outcome,
        Outcome::Failed {
            step: 4,
            error: ShopError::OutOfStock(_)
        }
    ));
    assert_eq!(
        kitchen.board().texts(),
        vec![
            "grapes",
            "Start the production",
            "Cut the fruit",
            CUSTOMER_LEFT,
            DAY_ENDED
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn day_ends_when_the_order_is_dropped_midway() {
    let mut kitchen = new_kitchen(ShopConfig::open(), Stock::default());

    let result = tokio::time::timeout(Duration::from_millis(3000), kitchen.open_day()).await;

    assert!(result.is_err());
    assert_eq!(
        kitchen.board().texts(),
        vec!["strawberry", "Start the production", DAY_ENDED]
    );
    assert_eq!(
        kitchen.history()[kitchen.history().len() - 2..],
        [KitchenState::Failed, KitchenState::Done]
    );
}
