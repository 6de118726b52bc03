//! Middleware del sistema
//!
//! CORS y trazas HTTP que envuelven al router.

pub mod cors;

pub use cors::*;
