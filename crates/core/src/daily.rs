use chrono::NaiveDate;

use crate::catalog::Catalog;
use crate::model::WordEntry;

/// Fixed reference date for the daily rotation. Every user sees the same
/// word on the same calendar day relative to this anchor.
///
/// # Panics
///
/// Never panics; the anchor is a statically valid date.
#[must_use]
pub fn anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).expect("anchor date is valid")
}

/// Deterministically map a calendar day to one catalog entry.
///
/// The whole-day offset from `anchor` is reduced modulo the catalog length
/// with a Euclidean remainder, so dates before the anchor still land in
/// `[0, len)`. Same day, same anchor, same catalog always yields the same
/// entry, and the rotation repeats after one full catalog cycle.
#[must_use]
pub fn select_for_date<'a>(
    catalog: &'a Catalog,
    today: NaiveDate,
    anchor: NaiveDate,
) -> &'a WordEntry {
    let len = i64::try_from(catalog.len()).unwrap_or(i64::MAX);
    let offset = (today - anchor).num_days().rem_euclid(len);

    // offset is in [0, len) after rem_euclid, so the cast cannot truncate.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let index = offset as usize;

    &catalog.entries()[index]
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn two_days_after_anchor_selects_index_two() {
        let catalog = Catalog::builtin();
        let entry = select_for_date(&catalog, date(2025, 1, 3), anchor());
        assert_eq!(entry.id(), catalog.get(2).unwrap().id());
    }

    #[test]
    fn anchor_day_selects_first_entry() {
        let catalog = Catalog::builtin();
        let entry = select_for_date(&catalog, anchor(), anchor());
        assert_eq!(entry.id(), catalog.get(0).unwrap().id());
    }

    #[test]
    fn selection_is_deterministic() {
        let catalog = Catalog::builtin();
        let today = date(2026, 8, 6);
        let first = select_for_date(&catalog, today, anchor());
        for _ in 0..10 {
            assert_eq!(select_for_date(&catalog, today, anchor()).id(), first.id());
        }
    }

    #[test]
    fn dates_before_the_anchor_stay_in_range() {
        let catalog = Catalog::builtin();
        // One day before the anchor wraps to the last entry.
        let entry = select_for_date(&catalog, date(2024, 12, 31), anchor());
        assert_eq!(entry.id(), catalog.get(9).unwrap().id());
    }

    #[test]
    fn rotation_repeats_after_a_full_cycle() {
        let catalog = Catalog::builtin();
        let today = date(2025, 1, 3);
        let next_cycle = date(2025, 1, 13);
        assert_eq!(
            select_for_date(&catalog, today, anchor()).id(),
            select_for_date(&catalog, next_cycle, anchor()).id()
        );
    }
}
