//! Domain Layer
//!
//! The label tree model and everything derived from a selection, without
//! terminal or network dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Tree nodes, backend label catalog, batch records
//! - `value_objects/` - Backend requests, config warnings
//! - `services/` - Selection arithmetic, tree index, search, request builders

pub mod entities;
pub mod services;
pub mod value_objects;
