//! Categories of ingredients kept in stock

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Fruits,
    Liquid,
    Holder,
    Toppings,
}

impl Category {
    /// Returns all the possible values of Category
    pub fn values() -> Vec<Category> {
        vec![
            Category::Fruits,
            Category::Liquid,
            Category::Holder,
            Category::Toppings,
        ]
    }

    /// Key used for this category in the registry
    pub fn key(&self) -> &'static str {
        match self {
            Category::Fruits => "fruits",
            Category::Liquid => "liquid",
            Category::Holder => "holder",
            Category::Toppings => "toppings",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
