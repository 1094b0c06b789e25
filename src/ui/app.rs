use chrono::Local;

use crate::models::Category;
use crate::state::{CategoryFilter, SortKey, Tracker};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Entry,
    Budget,
    CategoryBudget,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Entry => write!(f, "ENTRY"),
            Self::Budget => write!(f, "BUDGET"),
            Self::CategoryBudget => write!(f, "CAT BUDGET"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// Field focus within the add-transaction form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EntryField {
    Description,
    Amount,
    Category,
    Date,
}

impl EntryField {
    pub(crate) fn next(self) -> Self {
        match self {
            Self::Description => Self::Amount,
            Self::Amount => Self::Category,
            Self::Category => Self::Date,
            Self::Date => Self::Description,
        }
    }

    pub(crate) fn prev(self) -> Self {
        match self {
            Self::Description => Self::Date,
            Self::Amount => Self::Description,
            Self::Category => Self::Amount,
            Self::Date => Self::Category,
        }
    }
}

/// Draft values of the add-transaction form. Drafts survive leaving the
/// form; a successful submit clears description and amount, resets the date
/// to today, and keeps the category.
#[derive(Debug, Clone)]
pub(crate) struct EntryForm {
    pub(crate) description: String,
    pub(crate) amount: String,
    pub(crate) date: String,
    pub(crate) category: Category,
    pub(crate) field: EntryField,
}

impl EntryForm {
    pub(crate) fn new() -> Self {
        Self {
            description: String::new(),
            amount: String::new(),
            date: today(),
            category: Category::Food,
            field: EntryField::Description,
        }
    }

    pub(crate) fn reset_after_submit(&mut self) {
        self.description.clear();
        self.amount.clear();
        self.date = today();
        self.field = EntryField::Description;
        // category draft is deliberately retained
    }

    /// The draft text under the current focus, for typed input. Category is
    /// cycled with +/- rather than typed.
    pub(crate) fn focused_draft(&mut self) -> Option<&mut String> {
        match self.field {
            EntryField::Description => Some(&mut self.description),
            EntryField::Amount => Some(&mut self.amount),
            EntryField::Date => Some(&mut self.date),
            EntryField::Category => None,
        }
    }
}

fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// View state only: modes, drafts, cursors. Everything durable lives in
/// `state::Tracker`; everything shown is re-derived from it each frame.
pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) input_mode: InputMode,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    pub(crate) entry: EntryForm,
    pub(crate) budget_draft: String,
    pub(crate) category_budget_draft: String,
    /// Index into `Category::all()` for the sidebar row being edited.
    pub(crate) sidebar_index: usize,

    pub(crate) filter: CategoryFilter,
    pub(crate) sort: SortKey,
    pub(crate) history_index: usize,
    pub(crate) history_scroll: usize,

    // Confirmation
    pub(crate) pending_delete: Option<u64>,
    pub(crate) confirm_message: String,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new() -> Self {
        Self {
            running: true,
            input_mode: InputMode::Normal,
            status_message: String::new(),
            show_help: false,

            entry: EntryForm::new(),
            budget_draft: String::new(),
            category_budget_draft: String::new(),
            sidebar_index: 0,

            filter: CategoryFilter::All,
            sort: SortKey::NewestFirst,
            history_index: 0,
            history_scroll: 0,

            pending_delete: None,
            confirm_message: String::new(),

            visible_rows: 20,
        }
    }

    pub(crate) fn sidebar_category(&self) -> Category {
        Category::all()[self.sidebar_index % Category::all().len()]
    }

    /// Keep the history cursor inside the current listing after deletes or
    /// filter changes.
    pub(crate) fn clamp_history(&mut self, tracker: &Tracker) {
        let len = tracker.list(self.filter, self.sort).len();
        if self.history_index >= len {
            self.history_index = len.saturating_sub(1);
        }
        if self.history_scroll > self.history_index {
            self.history_scroll = self.history_index;
        }
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
