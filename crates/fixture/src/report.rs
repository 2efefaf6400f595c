//! Day-by-day rendering of the shop.

use std::io::Write;

use serde::Serialize;

use gilded_rose_inventory::{GildedRose, Item, ItemCategory};

use crate::config::{FixtureConfig, OutputFormat};
use crate::shop::standard_inventory;

/// One line of JSON output.
#[derive(Debug, Serialize)]
struct DaySnapshot<'a> {
    day: u32,
    items: Vec<ItemView<'a>>,
}

/// An item as reported, with its derived category alongside.
#[derive(Debug, Serialize)]
struct ItemView<'a> {
    #[serde(flatten)]
    item: &'a Item,
    category: ItemCategory,
}

impl<'a> DaySnapshot<'a> {
    fn new(day: u32, items: &'a [Item]) -> Self {
        let items = items
            .iter()
            .map(|item| ItemView {
                item,
                category: item.category(),
            })
            .collect();
        Self { day, items }
    }
}

/// Simulate `config.days` days of the standard inventory, writing the state at
/// the start of each day to `out`.
pub fn run<W: Write>(config: &FixtureConfig, out: &mut W) -> anyhow::Result<()> {
    let mut shop = GildedRose::new(standard_inventory());

    for day in 0..config.days {
        match config.format {
            OutputFormat::Text => write_text_day(out, day, shop.items())?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, &DaySnapshot::new(day, shop.items()))?;
                writeln!(out)?;
            }
        }
        shop.update_quality();
    }

    out.flush()?;
    Ok(())
}

fn write_text_day<W: Write>(out: &mut W, day: u32, items: &[Item]) -> std::io::Result<()> {
    writeln!(out, "-------- day {day} --------")?;
    writeln!(out, "name, sellIn, quality")?;
    for item in items {
        writeln!(out, "{item}")?;
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(config: FixtureConfig) -> String {
        let mut out = Vec::new();
        run(&config, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn text_output_matches_first_two_days() {
        let output = render(FixtureConfig {
            days: 2,
            format: OutputFormat::Text,
        });

        let expected = "\
-------- day 0 --------
name, sellIn, quality
+5 Dexterity Vest, 10, 20
Aged Brie, 2, 0
Elixir of the Mongoose, 5, 7
Sulfuras, Hand of Ragnaros, 0, 80
Sulfuras, Hand of Ragnaros, -1, 80
Backstage passes to a TAFKAL80ETC concert, 15, 20
Backstage passes to a TAFKAL80ETC concert, 10, 49
Backstage passes to a TAFKAL80ETC concert, 5, 49
Conjured Mana Cake, 3, 6

-------- day 1 --------
name, sellIn, quality
+5 Dexterity Vest, 9, 19
Aged Brie, 1, 1
Elixir of the Mongoose, 4, 6
Sulfuras, Hand of Ragnaros, 0, 80
Sulfuras, Hand of Ragnaros, -1, 80
Backstage passes to a TAFKAL80ETC concert, 14, 21
Backstage passes to a TAFKAL80ETC concert, 9, 50
Backstage passes to a TAFKAL80ETC concert, 4, 50
Conjured Mana Cake, 2, 5

";
        assert_eq!(output, expected);
    }

    #[test]
    fn zero_days_prints_nothing() {
        let output = render(FixtureConfig {
            days: 0,
            format: OutputFormat::Text,
        });
        assert!(output.is_empty());
    }

    #[test]
    fn json_output_has_one_snapshot_per_day() {
        let output = render(FixtureConfig {
            days: 3,
            format: OutputFormat::Json,
        });

        let lines: Vec<serde_json::Value> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2]["day"], 2);
        assert_eq!(
            lines[2]["items"][1],
            serde_json::json!({
                "name": "Aged Brie",
                "sellIn": 0,
                "quality": 2,
                "category": "aged"
            })
        );
        assert_eq!(lines[2]["items"][3]["quality"], 80);
        assert_eq!(lines[2]["items"][3]["category"], "legendary");
        assert_eq!(lines[2]["items"][8]["category"], "normal");
    }
}
