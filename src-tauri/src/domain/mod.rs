//! Domain Layer
//!
//! Contains all domain entities and core business rules.
//! This layer has NO external dependencies (except serde for serialization
//! and uuid for id generation).

mod entity;
mod item;
mod list;
mod settings;

pub use entity::{DomainError, DomainResult};
pub use item::{Item, ItemStatus};
pub use list::{ItemList, ItemPatch};
pub use settings::Settings;
