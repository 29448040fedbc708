pub mod error;
pub mod types;

#[cfg(test)]
mod types_test;
