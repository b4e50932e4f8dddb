use std::collections::BTreeMap;

use crate::codebook::Codebook;

pub type CodedArticleId = u64;
pub type ArticleId = u64;
pub type FieldId = u64;
pub type CodeId = u64;
pub type SentenceId = u64;

/// Workflow status of a coded article. The numeric ids are defined by the
/// server's status table; unknown ids are carried through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleStatus {
    NotStarted,
    InProgress,
    Complete,
    Irrelevant,
    Other(u64),
}

impl ArticleStatus {
    pub fn from_id(id: u64) -> Self {
        match id {
            0 => ArticleStatus::NotStarted,
            1 => ArticleStatus::InProgress,
            2 => ArticleStatus::Complete,
            9 => ArticleStatus::Irrelevant,
            other => ArticleStatus::Other(other),
        }
    }

    pub fn id(self) -> u64 {
        match self {
            ArticleStatus::NotStarted => 0,
            ArticleStatus::InProgress => 1,
            ArticleStatus::Complete => 2,
            ArticleStatus::Irrelevant => 9,
            ArticleStatus::Other(id) => id,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ArticleStatus::NotStarted => "not started",
            ArticleStatus::InProgress => "in progress",
            ArticleStatus::Complete => "complete",
            ArticleStatus::Irrelevant => "irrelevant",
            ArticleStatus::Other(_) => "unknown",
        }
    }
}

/// One row of the coded-article grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodedArticleRow {
    pub id: CodedArticleId,
    pub article_id: ArticleId,
    pub title: String,
    pub medium: String,
    pub date: String,
    pub pagenr: Option<u32>,
    pub length: Option<u32>,
    pub status: Option<ArticleStatus>,
    pub comments: Option<String>,
}

/// A single schema-field value inside a unit coding. Either a code reference
/// or free text, depending on the field type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodingValue {
    pub field: FieldId,
    pub code: Option<CodeId>,
    pub text: Option<String>,
}

/// A coding attached to a sub-document unit (a sentence, or the article
/// itself when `sentence` is `None`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitCoding {
    pub sentence: Option<SentenceId>,
    pub values: Vec<CodingValue>,
}

/// The persisted image of an open article: everything `save` writes back.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArticleSnapshot {
    pub status: Option<ArticleStatus>,
    pub comment: String,
    pub codings: Vec<UnitCoding>,
}

/// Everything a single article load brings back from the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleBundle {
    pub id: CodedArticleId,
    pub snapshot: ArticleSnapshot,
    pub codebooks: BTreeMap<FieldId, Codebook>,
}

/// The body of a save request, built from the working copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavePayload {
    pub id: CodedArticleId,
    pub status: ArticleStatus,
    pub comment: String,
    pub codings: Vec<UnitCoding>,
}
