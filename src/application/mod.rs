//! Application layer: demonstration runners and services
//!
//! This layer wires domain and pattern types together; it performs no I/O.

pub mod composite;
pub mod demos;
pub mod error;

pub use composite::{format_value, price, render, PriceReport};
pub use demos::run_demo;
pub use error::{ApplicationError, ApplicationResult};
