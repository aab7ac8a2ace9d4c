// Creational Patterns: Singleton and Factory
// This crate demonstrates two object-creation patterns in a single demo.

//! # Singleton and Factory
//!
//! Runnable examples for two creational patterns:
//!
//! ## Singleton Pattern
//! - One shared instance per process, lazily created (`OnceLock`)
//! - Mutable `message` field, safe to set through any handle
//!
//! ## Factory Pattern
//! - Two product variants behind a shared `Product` trait
//! - Fresh, independently owned value per creation call
//!
//! Run the combined demo with:
//! ```bash
//! cargo run --bin p1_singleton_factory
//! ```

pub mod demo;
pub mod factory;
pub mod singleton;
