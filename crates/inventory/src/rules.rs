//! Per-category daily quality rules.
//!
//! Every rule is keyed on the `sell_in` value the item had at the *start* of
//! the day, before it is decremented.

use crate::category::ItemCategory;

/// Lowest quality a non-legendary item can have after an update.
pub const MIN_QUALITY: i32 = 0;

/// Highest quality a non-legendary item can have after an update.
pub const MAX_QUALITY: i32 = 50;

/// Fixed quality of legendary items.
pub const LEGENDARY_QUALITY: i32 = 80;

/// Quality change produced by one day of aging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityChange {
    /// Add (or subtract) a delta, then clamp into `[MIN_QUALITY, MAX_QUALITY]`.
    Adjust(i32),
    /// Drop quality to `MIN_QUALITY` regardless of its current value.
    Reset,
}

impl QualityChange {
    /// Rule lookup for one day, given the pre-decrement `sell_in`.
    ///
    /// Returns `None` for legendary items, which are never touched.
    pub fn for_day(category: ItemCategory, sell_in: i32) -> Option<Self> {
        let expired = sell_in <= 0;
        let change = match category {
            ItemCategory::Legendary => return None,
            ItemCategory::Normal if expired => QualityChange::Adjust(-2),
            ItemCategory::Normal => QualityChange::Adjust(-1),
            ItemCategory::Aged if expired => QualityChange::Adjust(2),
            ItemCategory::Aged => QualityChange::Adjust(1),
            ItemCategory::BackstagePass => match sell_in {
                11.. => QualityChange::Adjust(1),
                6..=10 => QualityChange::Adjust(2),
                1..=5 => QualityChange::Adjust(3),
                _ => QualityChange::Reset,
            },
        };
        Some(change)
    }

    /// Applies the change to `quality`, clamping the result.
    pub fn apply(self, quality: i32) -> i32 {
        match self {
            QualityChange::Adjust(delta) => quality
                .saturating_add(delta)
                .clamp(MIN_QUALITY, MAX_QUALITY),
            QualityChange::Reset => MIN_QUALITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legendary_has_no_rule() {
        for sell_in in [-5, 0, 1, 5, 11] {
            assert_eq!(QualityChange::for_day(ItemCategory::Legendary, sell_in), None);
        }
    }

    #[test]
    fn normal_degrades_twice_as_fast_from_sell_in_zero() {
        assert_eq!(
            QualityChange::for_day(ItemCategory::Normal, 1),
            Some(QualityChange::Adjust(-1))
        );
        assert_eq!(
            QualityChange::for_day(ItemCategory::Normal, 0),
            Some(QualityChange::Adjust(-2))
        );
        assert_eq!(
            QualityChange::for_day(ItemCategory::Normal, -3),
            Some(QualityChange::Adjust(-2))
        );
    }

    #[test]
    fn aged_improves_twice_as_fast_from_sell_in_zero() {
        assert_eq!(
            QualityChange::for_day(ItemCategory::Aged, 1),
            Some(QualityChange::Adjust(1))
        );
        assert_eq!(
            QualityChange::for_day(ItemCategory::Aged, 0),
            Some(QualityChange::Adjust(2))
        );
    }

    #[test]
    fn backstage_pass_tiers_follow_days_left() {
        let change = |sell_in| QualityChange::for_day(ItemCategory::BackstagePass, sell_in);

        assert_eq!(change(11), Some(QualityChange::Adjust(1)));
        assert_eq!(change(10), Some(QualityChange::Adjust(2)));
        assert_eq!(change(6), Some(QualityChange::Adjust(2)));
        assert_eq!(change(5), Some(QualityChange::Adjust(3)));
        assert_eq!(change(1), Some(QualityChange::Adjust(3)));
        assert_eq!(change(0), Some(QualityChange::Reset));
        assert_eq!(change(-1), Some(QualityChange::Reset));
    }

    #[test]
    fn adjust_clamps_into_bounds() {
        assert_eq!(QualityChange::Adjust(-2).apply(1), MIN_QUALITY);
        assert_eq!(QualityChange::Adjust(3).apply(49), MAX_QUALITY);
        assert_eq!(QualityChange::Adjust(-1).apply(60), MAX_QUALITY);
        assert_eq!(QualityChange::Adjust(1).apply(-10), MIN_QUALITY);
        assert_eq!(QualityChange::Adjust(1).apply(i32::MAX), MAX_QUALITY);
        assert_eq!(QualityChange::Adjust(-2).apply(i32::MIN), MIN_QUALITY);
    }

    #[test]
    fn reset_ignores_current_quality() {
        assert_eq!(QualityChange::Reset.apply(49), 0);
        assert_eq!(QualityChange::Reset.apply(80), 0);
    }
}
