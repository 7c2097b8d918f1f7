pub mod assess;
pub mod config;
pub mod inputs;
pub mod share;
