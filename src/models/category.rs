/// The fixed set of spending buckets. Not user-extensible; every stored
/// transaction and every sub-budget refers to one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Entertainment,
    Transport,
    Utilities,
    Others,
}

impl Category {
    pub fn all() -> &'static [Category] {
        &[
            Self::Food,
            Self::Entertainment,
            Self::Transport,
            Self::Utilities,
            Self::Others,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Entertainment => "Entertainment",
            Self::Transport => "Transport",
            Self::Utilities => "Utilities",
            Self::Others => "Others",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Food => "🍔",
            Self::Entertainment => "🎮",
            Self::Transport => "🚗",
            Self::Utilities => "💡",
            Self::Others => "📦",
        }
    }

    pub fn next(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|c| *c == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    pub fn prev(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|c| *c == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
