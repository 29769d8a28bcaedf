pub mod check;
pub mod dump;
pub mod kinds;
pub mod loader;
pub mod roots;

#[cfg(test)]
mod commands_tests;
