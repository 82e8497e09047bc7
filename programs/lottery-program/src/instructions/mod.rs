pub mod buy_ticket;
pub mod end_game;
pub mod fallback;
pub mod initialize;

pub use buy_ticket::*;
pub use end_game::*;
pub use fallback::*;
pub use initialize::*;
