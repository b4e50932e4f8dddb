use crate::model::{ArticleId, ArticleStatus, CodedArticleId, FieldId, UnitCoding};
use crate::state::EditorPhase;
use crate::table::SortOrder;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditorViewModel {
    pub phase: EditorPhase,
    pub sort: SortOrder,
    pub fetching: bool,
    pub rows: Vec<ArticleRowView>,
    pub open: Option<OpenArticleView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRowView {
    pub id: CodedArticleId,
    pub article_id: ArticleId,
    pub title: String,
    pub medium: String,
    pub date: String,
    pub pagenr: Option<u32>,
    pub length: Option<u32>,
    pub status_label: String,
    pub comments: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenArticleView {
    pub id: CodedArticleId,
    pub status: Option<ArticleStatus>,
    pub comment: String,
    pub codings: Vec<UnitCoding>,
    /// Fields referencing codes missing from their bound codebook, for the
    /// warning banner.
    pub lost_fields: Vec<FieldId>,
    pub dirty: bool,
    pub saving: bool,
}
