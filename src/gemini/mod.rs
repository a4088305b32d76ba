pub mod client;
pub mod enums;
pub mod errors;
#[cfg(test)]
pub mod fake_gateway;
pub mod gateway;
pub mod models;
pub mod structs;
