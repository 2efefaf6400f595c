//! Inventory domain module: the daily quality update engine.
//!
//! This crate contains the business rules for shop items, implemented purely
//! as deterministic domain logic (no IO, no storage). Callers own the items;
//! every call to [`update_quality`] advances them by exactly one day.

pub mod category;
pub mod engine;
pub mod item;
pub mod rules;

pub use category::{AGED_BRIE, BACKSTAGE_PASSES, ItemCategory, SULFURAS};
pub use engine::{GildedRose, update_quality};
pub use item::Item;
pub use rules::{LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY, QualityChange};
