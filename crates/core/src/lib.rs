//! `electrovault-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::{ensure_unique_ids, Entity};
pub use error::{DomainError, DomainResult, FieldViolation, ValidationErrors};
pub use id::ItemId;
pub use value_object::ValueObject;
