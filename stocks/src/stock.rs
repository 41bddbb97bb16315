//! Represents the ingredients an ice cream shop has available for the day
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::category::Category;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StockError {
    #[error("no {category} item at position {index}")]
    Missing { category: Category, index: usize },
}

/// Read-only mapping from each category to its items, in the order they are picked
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stock {
    items: BTreeMap<Category, Vec<String>>,
}

impl Stock {
    /// Creates a stock from the given items per category
    /// # Arguments
    /// * `items` - pairs of category and the ordered names of its items
    /// # Returns
    /// * A Stock. Categories left out have no items.
    pub fn new<I, S>(items: I) -> Stock
    where
        I: IntoIterator<Item = (Category, Vec<S>)>,
        S: Into<String>,
    {
        Stock {
            items: items
                .into_iter()
                .map(|(category, names)| (category, names.into_iter().map(Into::into).collect()))
                .collect(),
        }
    }

    /// To obtain every item of a category, in order
    pub fn items(&self, category: Category) -> &[String] {
        self.items.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// To obtain the item at `index` of a category
    pub fn item(&self, category: Category, index: usize) -> Result<&str, StockError> {
        self.items(category)
            .get(index)
            .map(String::as_str)
            .ok_or(StockError::Missing { category, index })
    }

    pub fn first(&self, category: Category) -> Result<&str, StockError> {
        self.item(category, 0)
    }
}

impl Default for Stock {
    fn default() -> Self {
        Stock::new([
            (Category::Fruits, vec!["strawberry", "grapes", "banana", "apple"]),
            (Category::Liquid, vec!["water", "ice"]),
            (Category::Holder, vec!["cone", "cup", "stick"]),
            (Category::Toppings, vec!["chocolate", "peanuts"]),
        ])
    }
}
