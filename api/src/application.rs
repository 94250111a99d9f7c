pub mod function;
pub mod http;
pub mod logging;
