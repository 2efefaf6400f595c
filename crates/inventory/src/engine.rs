//! Quality update engine.

use crate::item::Item;

/// Advance every item by exactly one simulated day, in place.
///
/// Items are independent of each other; the slice order only determines the
/// order in which they are visited.
pub fn update_quality(items: &mut [Item]) {
    tracing::debug!(items = items.len(), "updating quality");

    for item in items.iter_mut() {
        if let Err(err) = item.validate() {
            tracing::warn!(item = %item.name, error = %err, "item outside quality contract");
        }

        let (sell_in, quality) = (item.sell_in, item.quality);
        item.advance_day();

        tracing::trace!(
            item = %item.name,
            from_sell_in = sell_in,
            from_quality = quality,
            to_sell_in = item.sell_in,
            to_quality = item.quality,
            "item advanced"
        );
    }
}

/// The shop: an owned inventory advanced one day at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GildedRose {
    items: Vec<Item>,
}

impl GildedRose {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    pub fn update_quality(&mut self) {
        update_quality(&mut self.items);
    }
}
