use serde::Serialize;

/// Name of the legendary item.
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";

/// Name of the item that improves with age.
pub const AGED_BRIE: &str = "Aged Brie";

/// Name of the concert pass item.
pub const BACKSTAGE_PASSES: &str = "Backstage passes to a TAFKAL80ETC concert";

/// Behavioral class of an item, derived from its name.
///
/// The set of categories is closed: anything that does not match one of the
/// known names exactly (case-sensitive) is [`ItemCategory::Normal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    /// Never sold, never degrades.
    Legendary,
    /// Gains quality as it ages.
    Aged,
    /// Gains quality as the concert approaches, worthless afterwards.
    BackstagePass,
    /// Anything else; degrades with age.
    Normal,
}

impl ItemCategory {
    pub fn from_name(name: &str) -> Self {
        match name {
            SULFURAS => ItemCategory::Legendary,
            AGED_BRIE => ItemCategory::Aged,
            BACKSTAGE_PASSES => ItemCategory::BackstagePass,
            _ => ItemCategory::Normal,
        }
    }

    pub fn is_legendary(self) -> bool {
        matches!(self, ItemCategory::Legendary)
    }
}
