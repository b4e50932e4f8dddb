use crate::model::{ArticleStatus, CodedArticleId, CodedArticleRow};

/// Grid columns, in display order.
pub const TABLE_COLUMNS: [&str; 8] = [
    "article_id",
    "title",
    "medium",
    "date",
    "pagenr",
    "length",
    "status",
    "comments",
];

/// Columns that accept a sort request; everything except free-text comments.
pub const SORTABLE_COLUMNS: [&str; 7] = [
    "article_id",
    "title",
    "medium",
    "date",
    "pagenr",
    "length",
    "status",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOrder {
    pub column: String,
    pub direction: SortDirection,
}

impl SortOrder {
    /// Server-side sort key: `-` prefix means descending.
    pub fn order_by(&self) -> String {
        match self.direction {
            SortDirection::Ascending => self.column.clone(),
            SortDirection::Descending => format!("-{}", self.column),
        }
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        Self {
            column: "id".to_string(),
            direction: SortDirection::Ascending,
        }
    }
}

/// State of the coded-article grid: the last good row set plus the sort key
/// and the sequence token of the fetch we are currently interested in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableState {
    rows: Vec<CodedArticleRow>,
    sort: SortOrder,
    fetch_seq: u64,
    in_flight: bool,
}

impl TableState {
    pub fn rows(&self) -> &[CodedArticleRow] {
        &self.rows
    }

    pub fn sort(&self) -> &SortOrder {
        &self.sort
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight
    }

    /// True when `seq` belongs to the fetch we still care about.
    pub(crate) fn is_current(&self, seq: u64) -> bool {
        seq == self.fetch_seq
    }

    pub(crate) fn begin_fetch(&mut self) -> u64 {
        self.fetch_seq += 1;
        self.in_flight = true;
        self.fetch_seq
    }

    /// Flips or replaces the sort key. Returns false for non-sortable columns.
    pub(crate) fn toggle_sort(&mut self, column: &str) -> bool {
        if !SORTABLE_COLUMNS.contains(&column) {
            return false;
        }
        if self.sort.column == column {
            self.sort.direction = match self.sort.direction {
                SortDirection::Ascending => SortDirection::Descending,
                SortDirection::Descending => SortDirection::Ascending,
            };
        } else {
            self.sort = SortOrder {
                column: column.to_string(),
                direction: SortDirection::Ascending,
            };
        }
        true
    }

    pub(crate) fn set_rows(&mut self, rows: Vec<CodedArticleRow>) {
        self.rows = rows;
        self.in_flight = false;
    }

    /// A failed fetch keeps the last good rows.
    pub(crate) fn fetch_failed(&mut self) {
        self.in_flight = false;
    }

    /// Updates a row in place after a successful save, without a refetch.
    pub(crate) fn patch_row(
        &mut self,
        id: CodedArticleId,
        status: Option<ArticleStatus>,
        comments: Option<String>,
    ) {
        if let Some(row) = self.rows.iter_mut().find(|row| row.id == id) {
            row.status = status;
            row.comments = comments;
        }
    }
}
