pub mod fields;
pub mod r#match;
pub mod region;
pub mod resolve;
pub mod utils;

#[cfg(test)]
#[path = "../commands_test.rs"]
mod commands_test;
