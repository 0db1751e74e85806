//! Minimal physics substrate: one gravity body, one floor, scrolling boxes.

pub mod body;
pub mod items;

pub use body::{Aabb, Edge, Floor, Player};
pub use items::{Item, ItemId, ItemKind, Items};
