use crate::model::{
    ArticleBundle, ArticleStatus, CodeId, CodedArticleId, CodedArticleRow, FieldId, SentenceId,
};

/// The user's answer to the unsaved-changes prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardChoice {
    /// Abort the intercepted action, keep all edits.
    Cancel,
    /// Drop the edits, then complete the intercepted action.
    Discard,
    /// Persist the edits, then complete the intercepted action.
    Save,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Re-fetch the coded-article grid with the current sort.
    TableRefreshRequested,
    /// User clicked a column header.
    SortChanged(String),
    /// List response from the REST boundary. Errors arrive pre-rendered.
    ArticleListLoaded {
        seq: u64,
        result: Result<Vec<CodedArticleRow>, String>,
    },
    /// User clicked a grid row.
    RowActivated(CodedArticleId),
    /// Article load response from the REST boundary.
    ArticleLoaded {
        seq: u64,
        result: Result<ArticleBundle, String>,
    },
    /// User picked a status in the editor form.
    StatusEdited(ArticleStatus),
    /// User edited the comment field.
    CommentEdited(String),
    /// User set a schema-field value on unit coding number `unit`.
    CodingValueEdited {
        unit: usize,
        field: FieldId,
        code: Option<CodeId>,
        text: Option<String>,
    },
    /// User added a unit coding row.
    UnitCodingAdded { sentence: Option<SentenceId> },
    /// User removed unit coding number `unit`.
    UnitCodingRemoved { unit: usize },
    /// User clicked save.
    SaveRequested,
    /// Save response from the REST boundary.
    SaveCompleted { result: Result<(), String> },
    /// User clicked discard.
    DiscardRequested,
    /// User closed the editor (or asked to leave the page).
    CloseRequested,
    /// Answer to a previously emitted unsaved-changes prompt.
    GuardResolved(GuardChoice),
    /// Fallback for placeholder wiring.
    NoOp,
}
