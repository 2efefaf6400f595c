use gilded_rose_inventory::{AGED_BRIE, BACKSTAGE_PASSES, Item, SULFURAS};

/// The inventory the shop opens with.
pub fn standard_inventory() -> Vec<Item> {
    vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new(AGED_BRIE, 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new(SULFURAS, 0, 80),
        Item::new(SULFURAS, -1, 80),
        Item::new(BACKSTAGE_PASSES, 15, 20),
        Item::new(BACKSTAGE_PASSES, 10, 49),
        Item::new(BACKSTAGE_PASSES, 5, 49),
        Item::new("Conjured Mana Cake", 3, 6),
    ]
}
