//! Column descriptors and the cell values they produce.

use chrono::{DateTime, Utc};

/// Colour hint for a badge. Front ends map it to their own palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
}

/// A short status label rendered as a pill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub tone: Tone,
    /// Rendered with a leading star (primary role).
    pub starred: bool,
}

impl Badge {
    pub fn new(label: impl Into<String>, tone: Tone) -> Self {
        Self {
            label: label.into(),
            tone,
            starred: false,
        }
    }

    /// Picks the positive or negative label depending on `flag`.
    pub fn flag(flag: bool, on: &str, off: &str) -> Self {
        if flag {
            Self::new(on, Tone::Positive)
        } else {
            Self::new(off, Tone::Negative)
        }
    }

    pub fn starred(mut self) -> Self {
        self.starred = true;
        self
    }

    pub fn display(&self) -> String {
        if self.starred {
            format!("★ {}", self.label)
        } else {
            self.label.clone()
        }
    }
}

/// Body cell content produced by a column for one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    /// De-emphasised text, e.g. a placeholder like "No roles".
    Muted(String),
    /// A primary line with a muted secondary line below it.
    Stacked { primary: String, secondary: String },
    Badges(Vec<Badge>),
    /// Placeholder for the row-actions column; the front end supplies the widgets.
    Actions,
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Text cell that falls back to a muted dash when `value` is empty.
    pub fn or_dash(value: &str) -> Self {
        if value.is_empty() {
            Self::Muted("-".to_owned())
        } else {
            Self::Text(value.to_owned())
        }
    }

    pub fn stacked(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self::Stacked {
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }

    /// Flattened single-line rendering, used by the terminal front end.
    pub fn plain_text(&self) -> String {
        match self {
            Self::Text(s) | Self::Muted(s) => s.clone(),
            Self::Stacked { primary, secondary } => {
                if secondary.is_empty() {
                    primary.clone()
                } else {
                    format!("{primary} ({secondary})")
                }
            }
            Self::Badges(badges) => badges
                .iter()
                .map(Badge::display)
                .collect::<Vec<_>>()
                .join(", "),
            Self::Actions => String::new(),
        }
    }
}

/// The natural ordering value of a sortable column.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortValue {
    Text(String),
    Number(i64),
    Flag(bool),
    Time(DateTime<Utc>),
}

impl SortValue {
    /// Case-insensitive text ordering.
    pub fn text(value: &str) -> Self {
        Self::Text(value.to_lowercase())
    }
}

/// Describes how one field (or computed value) renders as a header and cell.
pub struct ColumnDef<T> {
    pub id: &'static str,
    pub header: &'static str,
    pub cell: fn(&T) -> Cell,
    pub sort_key: Option<fn(&T) -> SortValue>,
    pub can_hide: bool,
}

impl<T> ColumnDef<T> {
    pub fn new(id: &'static str, header: &'static str, cell: fn(&T) -> Cell) -> Self {
        Self {
            id,
            header,
            cell,
            sort_key: None,
            can_hide: true,
        }
    }

    /// The row-actions column. It cannot be hidden.
    pub fn actions() -> Self {
        Self::new("actions", "", |_| Cell::Actions).fixed()
    }

    #[must_use]
    pub fn sortable(mut self, key: fn(&T) -> SortValue) -> Self {
        self.sort_key = Some(key);
        self
    }

    /// Excludes the column from the visibility menu.
    #[must_use]
    pub fn fixed(mut self) -> Self {
        self.can_hide = false;
        self
    }

    pub fn is_sortable(&self) -> bool {
        self.sort_key.is_some()
    }

    pub fn is_actions(&self) -> bool {
        self.id == "actions"
    }

    pub fn render(&self, row: &T) -> Cell {
        (self.cell)(row)
    }
}

impl<T> std::fmt::Debug for ColumnDef<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColumnDef")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("sortable", &self.is_sortable())
            .field("can_hide", &self.can_hide)
            .finish()
    }
}
