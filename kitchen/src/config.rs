//! Settings for a day at the shop

use clap::builder::FalseyValueParser;
use clap::Parser;

/// Whether the shop takes orders today. Closed unless told otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShopConfig {
    pub open: bool,
}

impl ShopConfig {
    pub fn open() -> Self {
        ShopConfig { open: true }
    }

    pub fn closed() -> Self {
        ShopConfig { open: false }
    }
}

#[derive(Debug, Parser)]
#[command(name = "kitchen")]
#[command(about = "Prepares one ice cream order and reports each step")]
pub struct Args {
    /// Open the shop so the order can be prepared.
    /// `SHOP_OPEN` is false only for `false`, `no`, `off`, `0` or empty.
    #[arg(long, env = "SHOP_OPEN", value_parser = FalseyValueParser::new())]
    pub open: bool,
}

impl From<&Args> for ShopConfig {
    fn from(args: &Args) -> Self {
        ShopConfig { open: args.open }
    }
}
