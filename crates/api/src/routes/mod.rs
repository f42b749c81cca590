mod bot;
mod root;
mod strategies;
mod trades;

pub use bot::bot_router;
pub use root::root_router;
pub use strategies::strategies_router;
pub use trades::trades_router;
