use serde::{Deserialize, Serialize};

use gilded_rose_core::{DomainError, DomainResult};

use crate::category::ItemCategory;
use crate::rules::{LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY, QualityChange};

/// A shop item.
///
/// Items are owned by the caller and mutated in place by the engine, one
/// simulated day at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub name: String,
    /// Days left to sell the item; negative once past due.
    pub sell_in: i32,
    pub quality: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    pub fn category(&self) -> ItemCategory {
        ItemCategory::from_name(&self.name)
    }

    /// Advance this item by one day.
    ///
    /// Legendary items are left untouched. Everything else loses a day of
    /// `sell_in` and has its quality adjusted by the category rule, evaluated
    /// against the `sell_in` the item had before the decrement.
    pub fn advance_day(&mut self) {
        let Some(change) = QualityChange::for_day(self.category(), self.sell_in) else {
            return;
        };

        self.sell_in = self.sell_in.saturating_sub(1);
        self.quality = change.apply(self.quality);
    }

    /// Check the quality contract without changing anything.
    ///
    /// The engine accepts items that fail this check; their quality is only
    /// brought back into range by the next update.
    pub fn validate(&self) -> DomainResult<()> {
        if self.category().is_legendary() {
            if self.quality != LEGENDARY_QUALITY {
                return Err(DomainError::invariant(format!(
                    "legendary item '{}' must have quality {LEGENDARY_QUALITY}, got {}",
                    self.name, self.quality
                )));
            }
            return Ok(());
        }

        if !(MIN_QUALITY..=MAX_QUALITY).contains(&self.quality) {
            return Err(DomainError::invariant(format!(
                "item '{}' quality {} is outside [{MIN_QUALITY}, {MAX_QUALITY}]",
                self.name, self.quality
            )));
        }
        Ok(())
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}
