//! Fluent path builder
//!
//! Builds a `Path` level by level instead of from text, with the same
//! defaulting and validation rules the text parser applies.

pub mod core;
pub mod methods;

pub use self::core::PathBuilder;
