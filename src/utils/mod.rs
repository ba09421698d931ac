//! # Utilities Module
//!
//! Random draws and grid arithmetic.

pub mod math;

pub use math::*;
