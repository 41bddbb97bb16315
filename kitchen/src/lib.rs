pub mod clock;
pub mod closing_time;
pub mod config;
pub mod gate;
pub mod kitchen;
pub mod kitchen_state;
pub mod recipe;
pub mod shop_error;
pub mod status_board;
pub mod telemetry;
