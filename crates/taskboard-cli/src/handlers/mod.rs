pub mod board;
pub mod card;
pub mod column;
pub mod drag;
pub mod task;
