pub mod entities;
pub mod services;

pub use entities::*;
pub use services::{handle, route_not_found};
