//! Static content for the Hall of the Mountain King.
//!
//! This crate houses every definition a campaign needs:
//! - Archetypes, arms, armor and headgear
//! - The premade party and the consumables they may carry
//! - The bestiary and the scenes that field it
//!
//! Content is plain `const` data built from encounter-core types and never
//! carries rules of its own.

pub mod archetypes;
pub mod arms;
pub mod armor;
pub mod bestiary;
pub mod party;
pub mod scenes;

pub use party::{default_inventory, premade_party};
pub use scenes::SceneId;
