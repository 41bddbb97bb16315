//! The fixed list of steps to prepare one ice cream

use std::time::Duration;
use stocks::{Category, Stock, StockError};

/// What the kitchen shows once a step is done
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    FirstFruit,
    StartProduction,
    CutFruit,
    LiquidsAdded,
    StartMachine,
    PlacedOnHolder,
    ToppingSelected,
    Serve,
}

impl Message {
    /// Builds the text of the message with the items picked from `stock`
    pub fn render(&self, stock: &Stock) -> Result<String, StockError> {
        let line = match self {
            Message::FirstFruit => stock.first(Category::Fruits)?.to_owned(),
            Message::StartProduction => "Start the production".to_owned(),
            Message::CutFruit => "Cut the fruit".to_owned(),
            Message::LiquidsAdded => format!(
                "{} and {} added",
                stock.item(Category::Liquid, 0)?,
                stock.item(Category::Liquid, 1)?
            ),
            Message::StartMachine => "Start the machine".to_owned(),
            Message::PlacedOnHolder => {
                format!("Ice cream placed on {}", stock.first(Category::Holder)?)
            }
            Message::ToppingSelected => {
                format!("{} was selected", stock.first(Category::Toppings)?)
            }
            Message::Serve => "Serve ice cream".to_owned(),
        };
        Ok(line)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    delay_ms: u64,
    message: Message,
}

impl Step {
    pub const fn new(delay_ms: u64, message: Message) -> Self {
        Step { delay_ms, message }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn message(&self) -> Message {
        self.message
    }
}

pub const RECIPE: [Step; 8] = [
    Step::new(2000, Message::FirstFruit),
    Step::new(0, Message::StartProduction),
    Step::new(2000, Message::CutFruit),
    Step::new(1000, Message::LiquidsAdded),
    Step::new(1000, Message::StartMachine),
    Step::new(2000, Message::PlacedOnHolder),
    Step::new(3000, Message::ToppingSelected),
    Step::new(2000, Message::Serve),
];

/// Total time an order takes when the shop is open
pub fn preparation_time() -> Duration {
    RECIPE.iter().map(Step::delay).sum()
}
