//! Annotator core: pure editor state machine and view-model helpers.
mod codebook;
mod effect;
mod model;
mod msg;
mod state;
mod table;
mod update;
mod view_model;

pub use codebook::{lost_code_fields, Codebook};
pub use effect::{Effect, Severity};
pub use model::{
    ArticleBundle, ArticleId, ArticleSnapshot, ArticleStatus, CodeId, CodedArticleId,
    CodedArticleRow, CodingValue, FieldId, SavePayload, SentenceId, UnitCoding,
};
pub use msg::{GuardChoice, Msg};
pub use state::{EditorPhase, EditorState, PendingAction};
pub use table::{
    SortDirection, SortOrder, TableState, SORTABLE_COLUMNS, TABLE_COLUMNS,
};
pub use update::update;
pub use view_model::{ArticleRowView, EditorViewModel, OpenArticleView};
