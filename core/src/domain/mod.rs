pub mod assistant;
pub mod catalog;
pub mod common;
pub mod contract;
pub mod gateway;
