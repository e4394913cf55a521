//! Classic design patterns as runnable Rust demonstrations.
//!
//! The core is [`domain::CompositeTree`], an arena-backed part-whole hierarchy
//! whose composites sum the values of their children. The remaining modules
//! hold the creational and structural demonstrations and the CLI around them.

pub mod application;
pub mod cli;
pub mod config;
pub mod creational;
pub mod domain;
pub mod exitcode;
pub mod structural;
pub mod util;
