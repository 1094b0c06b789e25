#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::Category;

use super::*;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
}

fn add(tracker: &mut Tracker, desc: &str, amount: &str, cat: Category) -> Option<u64> {
    tracker.add_transaction(desc, amount, cat, day(15))
}

// ── Overall budget ────────────────────────────────────────────

#[test]
fn test_set_overall_budget_positive() {
    let mut t = Tracker::new();
    assert!(t.set_overall_budget("1000"));
    assert_eq!(t.overall_budget(), dec!(1000));
}

#[test]
fn test_set_overall_budget_trims_whitespace() {
    let mut t = Tracker::new();
    assert!(t.set_overall_budget("  250.50 "));
    assert_eq!(t.overall_budget(), dec!(250.50));
}

#[test]
fn test_set_overall_budget_rejects_invalid() {
    let mut t = Tracker::new();
    assert!(t.set_overall_budget("500"));

    // Rejections are silent no-ops: the prior value survives.
    assert!(!t.set_overall_budget("abc"));
    assert!(!t.set_overall_budget(""));
    assert!(!t.set_overall_budget("0"));
    assert!(!t.set_overall_budget("-100"));
    assert_eq!(t.overall_budget(), dec!(500));
}

#[test]
fn test_overall_budget_defaults_to_zero() {
    assert_eq!(Tracker::new().overall_budget(), Decimal::ZERO);
}

// ── Category budgets ──────────────────────────────────────────

#[test]
fn test_set_category_budget() {
    let mut t = Tracker::new();
    t.set_category_budget(Category::Food, "300");
    assert_eq!(t.category_budget(Category::Food), dec!(300));
    assert_eq!(t.category_budget(Category::Transport), Decimal::ZERO);
}

#[test]
fn test_set_category_budget_parse_failure_stores_zero() {
    // Unlike the overall budget, a bad draft is accepted and stored as 0.
    let mut t = Tracker::new();
    t.set_category_budget(Category::Food, "300");
    t.set_category_budget(Category::Food, "not a number");
    assert_eq!(t.category_budget(Category::Food), Decimal::ZERO);
}

#[test]
fn test_set_category_budget_negative_stores_zero() {
    let mut t = Tracker::new();
    t.set_category_budget(Category::Utilities, "-50");
    assert_eq!(t.category_budget(Category::Utilities), Decimal::ZERO);
}

#[test]
fn test_category_budgets_independent() {
    let mut t = Tracker::new();
    t.set_category_budget(Category::Food, "100");
    t.set_category_budget(Category::Entertainment, "200");
    assert_eq!(t.category_budget(Category::Food), dec!(100));
    assert_eq!(t.category_budget(Category::Entertainment), dec!(200));
}

// ── Adding transactions ───────────────────────────────────────

#[test]
fn test_add_transaction() {
    let mut t = Tracker::new();
    let id = add(&mut t, "Lunch", "250", Category::Food);
    assert!(id.is_some());
    assert_eq!(t.transactions().len(), 1);

    let txn = &t.transactions()[0];
    assert_eq!(txn.description, "Lunch");
    assert_eq!(txn.amount, dec!(250));
    assert_eq!(txn.category, Category::Food);
    assert_eq!(txn.date, day(15));
}

#[test]
fn test_add_n_transactions_gives_ledger_size_n() {
    let mut t = Tracker::new();
    let amounts = ["10", "20.50", "3.99", "400", "0.01"];
    for (i, amt) in amounts.iter().enumerate() {
        assert!(add(&mut t, &format!("txn {i}"), amt, Category::Others).is_some());
    }
    assert_eq!(t.transactions().len(), amounts.len());
    assert_eq!(t.total_spent(), dec!(434.50));
}

#[test]
fn test_add_rejects_empty_description() {
    let mut t = Tracker::new();
    assert!(add(&mut t, "", "100", Category::Food).is_none());
    assert!(t.transactions().is_empty());
}

#[test]
fn test_add_rejects_bad_amount() {
    let mut t = Tracker::new();
    assert!(add(&mut t, "Lunch", "", Category::Food).is_none());
    assert!(add(&mut t, "Lunch", "abc", Category::Food).is_none());
    assert!(add(&mut t, "Lunch", "0", Category::Food).is_none());
    assert!(add(&mut t, "Lunch", "-5", Category::Food).is_none());
    assert!(t.transactions().is_empty());
}

#[test]
fn test_add_does_not_enforce_budgets() {
    // Budgets are informational; entry succeeds even when over budget.
    let mut t = Tracker::new();
    t.set_overall_budget("100");
    t.set_category_budget(Category::Food, "10");
    assert!(add(&mut t, "Feast", "5000", Category::Food).is_some());
    assert_eq!(t.remaining(), dec!(-4900));
}

#[test]
fn test_ids_are_unique_and_monotonic() {
    let mut t = Tracker::new();
    let a = add(&mut t, "a", "1", Category::Food).unwrap();
    let b = add(&mut t, "b", "1", Category::Food).unwrap();
    let c = add(&mut t, "c", "1", Category::Food).unwrap();
    assert!(a < b && b < c);
}

#[test]
fn test_ids_not_reused_after_removal() {
    let mut t = Tracker::new();
    let a = add(&mut t, "a", "1", Category::Food).unwrap();
    assert!(t.remove_transaction(a));
    let b = add(&mut t, "b", "1", Category::Food).unwrap();
    assert_ne!(a, b);
}

// ── Removing transactions ─────────────────────────────────────

#[test]
fn test_remove_transaction() {
    let mut t = Tracker::new();
    let a = add(&mut t, "a", "10", Category::Food).unwrap();
    let b = add(&mut t, "b", "20", Category::Food).unwrap();

    assert!(t.remove_transaction(a));
    assert_eq!(t.transactions().len(), 1);
    let listed = t.list(CategoryFilter::All, SortKey::NewestFirst);
    assert!(listed.iter().all(|txn| txn.id != a));
    assert!(listed.iter().any(|txn| txn.id == b));
}

#[test]
fn test_remove_absent_id_is_noop() {
    let mut t = Tracker::new();
    add(&mut t, "a", "10", Category::Food);
    assert!(!t.remove_transaction(999));
    assert_eq!(t.transactions().len(), 1);
}

// ── Listing: filter ───────────────────────────────────────────

#[test]
fn test_filter_only_matching_category() {
    let mut t = Tracker::new();
    add(&mut t, "Lunch", "10", Category::Food);
    add(&mut t, "Bus", "5", Category::Transport);
    add(&mut t, "Dinner", "20", Category::Food);

    let food = t.list(CategoryFilter::Only(Category::Food), SortKey::OldestFirst);
    assert_eq!(food.len(), 2);
    assert!(food.iter().all(|txn| txn.category == Category::Food));
}

#[test]
fn test_per_category_filters_partition_the_ledger() {
    let mut t = Tracker::new();
    add(&mut t, "a", "1", Category::Food);
    add(&mut t, "b", "2", Category::Entertainment);
    add(&mut t, "c", "3", Category::Transport);
    add(&mut t, "d", "4", Category::Utilities);
    add(&mut t, "e", "5", Category::Others);
    add(&mut t, "f", "6", Category::Food);

    let total: usize = Category::all()
        .iter()
        .map(|c| t.list(CategoryFilter::Only(*c), SortKey::NewestFirst).len())
        .sum();
    assert_eq!(total, t.list(CategoryFilter::All, SortKey::NewestFirst).len());
}

#[test]
fn test_filter_cycle_visits_all_and_returns() {
    let mut filter = CategoryFilter::All;
    let mut seen = vec![filter];
    loop {
        filter = filter.next();
        if filter == CategoryFilter::All {
            break;
        }
        seen.push(filter);
    }
    // All plus one entry per category.
    assert_eq!(seen.len(), 1 + Category::all().len());
}

// ── Listing: sort ─────────────────────────────────────────────

#[test]
fn test_sort_by_amount() {
    let mut t = Tracker::new();
    add(&mut t, "mid", "50", Category::Food);
    add(&mut t, "high", "300", Category::Food);
    add(&mut t, "low", "5", Category::Food);

    let high: Vec<&str> = t
        .list(CategoryFilter::All, SortKey::HighestAmount)
        .iter()
        .map(|txn| txn.description.as_str())
        .collect();
    assert_eq!(high, vec!["high", "mid", "low"]);

    let low: Vec<&str> = t
        .list(CategoryFilter::All, SortKey::LowestAmount)
        .iter()
        .map(|txn| txn.description.as_str())
        .collect();
    assert_eq!(low, vec!["low", "mid", "high"]);
}

#[test]
fn test_amount_sorts_are_reverses_of_each_other() {
    let mut t = Tracker::new();
    for (d, a) in [("a", "7"), ("b", "3"), ("c", "99"), ("d", "42"), ("e", "1")] {
        add(&mut t, d, a, Category::Others);
    }
    let mut high: Vec<u64> = t
        .list(CategoryFilter::All, SortKey::HighestAmount)
        .iter()
        .map(|txn| txn.id)
        .collect();
    let low: Vec<u64> = t
        .list(CategoryFilter::All, SortKey::LowestAmount)
        .iter()
        .map(|txn| txn.id)
        .collect();
    high.reverse();
    assert_eq!(high, low);
}

#[test]
fn test_newest_and_oldest_orderings() {
    let mut t = Tracker::new();
    let a = add(&mut t, "first", "1", Category::Food).unwrap();
    let b = add(&mut t, "second", "2", Category::Food).unwrap();
    let c = add(&mut t, "third", "3", Category::Food).unwrap();

    let newest: Vec<u64> = t
        .list(CategoryFilter::All, SortKey::NewestFirst)
        .iter()
        .map(|txn| txn.id)
        .collect();
    assert_eq!(newest, vec![c, b, a]);

    let oldest: Vec<u64> = t
        .list(CategoryFilter::All, SortKey::OldestFirst)
        .iter()
        .map(|txn| txn.id)
        .collect();
    assert_eq!(oldest, vec![a, b, c]);
}

#[test]
fn test_list_does_not_mutate_the_ledger() {
    let mut t = Tracker::new();
    add(&mut t, "a", "5", Category::Food);
    add(&mut t, "b", "1", Category::Transport);

    let _ = t.list(CategoryFilter::All, SortKey::HighestAmount);
    let _ = t.list(CategoryFilter::Only(Category::Food), SortKey::LowestAmount);

    // Insertion order survives repeated queries.
    assert_eq!(t.transactions()[0].description, "a");
    assert_eq!(t.transactions()[1].description, "b");
}

#[test]
fn test_sort_key_cycle() {
    assert_eq!(SortKey::NewestFirst.next(), SortKey::OldestFirst);
    assert_eq!(SortKey::LowestAmount.next(), SortKey::NewestFirst);
}

// ── Aggregates ────────────────────────────────────────────────

#[test]
fn test_total_spent_ignores_filter() {
    let mut t = Tracker::new();
    add(&mut t, "a", "100", Category::Food);
    add(&mut t, "b", "50", Category::Transport);
    assert_eq!(t.total_spent(), dec!(150));
}

#[test]
fn test_total_spent_empty_ledger() {
    assert_eq!(Tracker::new().total_spent(), Decimal::ZERO);
}

#[test]
fn test_remaining_can_go_negative() {
    let mut t = Tracker::new();
    t.set_overall_budget("100");
    add(&mut t, "a", "250", Category::Food);
    assert_eq!(t.remaining(), dec!(-150));
}

#[test]
fn test_spent_percentage() {
    let mut t = Tracker::new();
    t.set_overall_budget("1000");
    add(&mut t, "a", "200", Category::Food);
    add(&mut t, "b", "300", Category::Food);
    assert_eq!(t.spent_percentage(), dec!(50.0));
    assert_eq!(format!("{:.1}", t.spent_percentage()), "50.0");
}

#[test]
fn test_spent_percentage_rounds_to_one_decimal() {
    let mut t = Tracker::new();
    t.set_overall_budget("300");
    add(&mut t, "a", "100", Category::Food);
    // 100/300 = 33.333…%
    assert_eq!(t.spent_percentage(), dec!(33.3));
}

#[test]
fn test_spent_percentage_zero_budget_guard() {
    let mut t = Tracker::new();
    add(&mut t, "a", "9999", Category::Food);
    assert_eq!(t.spent_percentage(), Decimal::ZERO);
}

#[test]
fn test_avg_per_day_empty_ledger() {
    let mut t = Tracker::new();
    t.set_overall_budget("1000");
    assert_eq!(t.avg_per_day(), Decimal::ZERO);
}

#[test]
fn test_avg_per_day_fixed_30_day_divisor() {
    let mut t = Tracker::new();
    add(&mut t, "a", "300", Category::Food);
    assert_eq!(t.avg_per_day(), dec!(10.00));

    add(&mut t, "b", "1", Category::Food);
    // 301/30 = 10.0333…
    assert_eq!(t.avg_per_day(), dec!(10.03));
}

#[test]
fn test_category_spent() {
    let mut t = Tracker::new();
    add(&mut t, "a", "200", Category::Food);
    add(&mut t, "b", "300", Category::Food);
    add(&mut t, "c", "40", Category::Transport);
    assert_eq!(t.category_spent(Category::Food), dec!(500));
    assert_eq!(t.category_spent(Category::Transport), dec!(40));
    assert_eq!(t.category_spent(Category::Utilities), Decimal::ZERO);
}

#[test]
fn test_category_percentage() {
    let mut t = Tracker::new();
    t.set_category_budget(Category::Food, "400");
    add(&mut t, "a", "100", Category::Food);
    assert_eq!(t.category_percentage(Category::Food), dec!(25));
}

#[test]
fn test_category_percentage_zero_budget_guard() {
    let mut t = Tracker::new();
    add(&mut t, "a", "100", Category::Food);
    assert_eq!(t.category_percentage(Category::Food), Decimal::ZERO);
}

// ── End-to-end scenarios ──────────────────────────────────────

#[test]
fn test_scenario_unset_budget() {
    let mut t = Tracker::new();
    assert!(add(&mut t, "Lunch", "250", Category::Food).is_some());
    assert_eq!(t.transactions().len(), 1);
    assert_eq!(t.total_spent(), dec!(250));
    assert_eq!(t.remaining(), dec!(-250));
    assert_eq!(t.spent_percentage(), Decimal::ZERO);
}

#[test]
fn test_scenario_half_spent() {
    let mut t = Tracker::new();
    t.set_overall_budget("1000");
    add(&mut t, "Groceries", "200", Category::Food);
    add(&mut t, "Dinner out", "300", Category::Food);
    assert_eq!(t.category_spent(Category::Food), dec!(500));
    assert_eq!(format!("{:.1}", t.spent_percentage()), "50.0");
}
