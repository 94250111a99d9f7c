pub mod ai;
pub mod recipes;
pub mod server;
