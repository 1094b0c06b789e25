use std::collections::HashMap;
use std::str::FromStr;

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{Category, Transaction};

mod aggregate;

#[cfg(test)]
mod tests;

/// Category filter applied to history listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => *c == category,
        }
    }

    /// Advance to the next filter: All → Food → … → Others → All.
    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Only(Category::all()[0]),
            Self::Only(Category::Others) => Self::All,
            Self::Only(c) => Self::Only(c.next()),
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "All"),
            Self::Only(c) => write!(f, "{c}"),
        }
    }
}

/// Ordering applied to history listings. Display order is entirely a
/// function of this key; the ledger itself keeps insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    NewestFirst,
    OldestFirst,
    HighestAmount,
    LowestAmount,
}

impl SortKey {
    pub fn all() -> &'static [SortKey] {
        &[
            Self::NewestFirst,
            Self::OldestFirst,
            Self::HighestAmount,
            Self::LowestAmount,
        ]
    }

    pub fn next(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|k| *k == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NewestFirst => write!(f, "Newest First"),
            Self::OldestFirst => write!(f, "Oldest First"),
            Self::HighestAmount => write!(f, "Highest Amount"),
            Self::LowestAmount => write!(f, "Lowest Amount"),
        }
    }
}

/// All durable-for-the-session state: the ledger plus budget settings.
/// Mutation happens only through the reducer methods below; everything a
/// screen shows is re-derived from here on each frame.
pub struct Tracker {
    overall_budget: Decimal,
    category_budgets: HashMap<Category, Decimal>,
    transactions: Vec<Transaction>,
    next_id: u64,
}

impl Tracker {
    pub fn new() -> Self {
        let category_budgets = Category::all()
            .iter()
            .map(|c| (*c, Decimal::ZERO))
            .collect();
        Self {
            overall_budget: Decimal::ZERO,
            category_budgets,
            transactions: Vec::new(),
            next_id: 1,
        }
    }

    pub fn overall_budget(&self) -> Decimal {
        self.overall_budget
    }

    pub fn category_budget(&self, category: Category) -> Decimal {
        self.category_budgets
            .get(&category)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Replace the monthly budget from a form draft. Only a draft that
    /// parses to a strictly positive decimal is accepted; anything else is a
    /// silent no-op and the caller keeps the draft. Returns whether the
    /// budget changed.
    pub fn set_overall_budget(&mut self, draft: &str) -> bool {
        match Decimal::from_str(draft.trim()) {
            Ok(value) if value > Decimal::ZERO => {
                self.overall_budget = value;
                true
            }
            _ => false,
        }
    }

    /// Set one category's sub-budget from a form draft. Unlike the overall
    /// budget, this never rejects: a draft that fails to parse (or would go
    /// negative) stores 0 for that category.
    pub fn set_category_budget(&mut self, category: Category, draft: &str) {
        let value = Decimal::from_str(draft.trim())
            .ok()
            .filter(|v| *v >= Decimal::ZERO)
            .unwrap_or(Decimal::ZERO);
        self.category_budgets.insert(category, value);
    }

    /// Append a transaction from form drafts. A no-op (`None`) when the
    /// description is empty or the amount draft does not parse to a strictly
    /// positive decimal. Exceeding a budget is not checked; budgets are
    /// informational only. Returns the new id on success.
    pub fn add_transaction(
        &mut self,
        description: &str,
        amount_draft: &str,
        category: Category,
        date: NaiveDate,
    ) -> Option<u64> {
        if description.is_empty() {
            return None;
        }
        let amount = Decimal::from_str(amount_draft.trim()).ok()?;
        if amount <= Decimal::ZERO {
            return None;
        }

        let id = self.next_id;
        self.next_id += 1;
        self.transactions.push(Transaction {
            id,
            description: description.to_string(),
            amount,
            category,
            date,
            created_at: Local::now(),
        });
        Some(id)
    }

    /// Remove by id. Absent ids are a no-op, not an error.
    pub fn remove_transaction(&mut self, id: u64) -> bool {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id != id);
        self.transactions.len() != before
    }

    /// The filtered, ordered view of the ledger. Recomputed per call and
    /// never cached; the ledger itself is untouched.
    pub fn list(&self, filter: CategoryFilter, sort: SortKey) -> Vec<&Transaction> {
        let mut view: Vec<&Transaction> = self
            .transactions
            .iter()
            .filter(|t| filter.matches(t.category))
            .collect();

        match sort {
            SortKey::NewestFirst => {
                view.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
            }
            SortKey::OldestFirst => {
                view.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
            }
            // Stable sort: equal amounts keep insertion order.
            SortKey::HighestAmount => view.sort_by(|a, b| b.amount.cmp(&a.amount)),
            SortKey::LowestAmount => view.sort_by(|a, b| a.amount.cmp(&b.amount)),
        }

        view
    }
}

impl Default for Tracker {
    fn default() -> Self {
        Self::new()
    }
}
