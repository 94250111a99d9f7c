pub mod entities;
pub mod interpreter;
pub mod ports;
pub mod prompts;
pub mod sanitizer;
pub mod schema;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use value_objects::*;
