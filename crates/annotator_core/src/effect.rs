use crate::model::{CodedArticleId, SavePayload};
use crate::table::SortOrder;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the coded-article list. `seq` comes back with the response so
    /// stale results can be discarded.
    FetchArticleList { seq: u64, sort: SortOrder },
    /// Fetch one article's detail, codings and codebooks.
    LoadArticle { seq: u64, id: CodedArticleId },
    /// Persist the working copy.
    SaveArticle { payload: SavePayload },
    /// Ask the user what to do with unsaved changes; answered via
    /// `Msg::GuardResolved`.
    PromptUnsaved,
    /// Show a toast or inline notification.
    Notify { severity: Severity, message: String },
}
