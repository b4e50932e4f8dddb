use std::collections::{BTreeMap, BTreeSet};

use crate::codebook::{lost_code_fields, Codebook};
use crate::model::{
    ArticleBundle, ArticleSnapshot, ArticleStatus, CodeId, CodedArticleId, CodingValue, FieldId,
    SavePayload, SentenceId, UnitCoding,
};
use crate::table::TableState;
use crate::view_model::{ArticleRowView, EditorViewModel, OpenArticleView};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorPhase {
    /// No article selected.
    #[default]
    Empty,
    /// An article load is in flight.
    Loading,
    /// An article is open for editing (clean or dirty).
    Editing,
    /// A save is in flight; further saves and selections are refused.
    Saving,
}

/// An action intercepted by the unsaved-changes guard, parked until the user
/// answers the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    OpenArticle(CodedArticleId),
    CloseEditor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct OpenArticle {
    id: CodedArticleId,
    snapshot: ArticleSnapshot,
    working: ArticleSnapshot,
    codebooks: BTreeMap<FieldId, Codebook>,
    lost_fields: BTreeSet<FieldId>,
}

/// The single editor context: grid state plus at most one open article.
///
/// All mutation goes through `update`; the host only reads `view()`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditorState {
    phase: EditorPhase,
    open: Option<OpenArticle>,
    table: TableState,
    load_seq: u64,
    pending: Option<PendingAction>,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> EditorPhase {
        self.phase
    }

    /// True iff the working copy differs from the last persisted snapshot.
    pub fn dirty(&self) -> bool {
        self.open
            .as_ref()
            .is_some_and(|open| open.working != open.snapshot)
    }

    pub fn open_id(&self) -> Option<CodedArticleId> {
        self.open.as_ref().map(|open| open.id)
    }

    pub fn table(&self) -> &TableState {
        &self.table
    }

    pub(crate) fn table_mut(&mut self) -> &mut TableState {
        &mut self.table
    }

    // --- selection -------------------------------------------------------

    /// Registers interest in a new article load, invalidating any earlier
    /// in-flight load.
    pub(crate) fn begin_load(&mut self) -> u64 {
        self.phase = EditorPhase::Loading;
        self.load_seq += 1;
        self.load_seq
    }

    pub(crate) fn is_current_load(&self, seq: u64) -> bool {
        seq == self.load_seq
    }

    pub(crate) fn accept_load(&mut self, bundle: ArticleBundle) {
        let lost_fields = lost_code_fields(&bundle.snapshot.codings, &bundle.codebooks);
        self.open = Some(OpenArticle {
            id: bundle.id,
            working: bundle.snapshot.clone(),
            snapshot: bundle.snapshot,
            codebooks: bundle.codebooks,
            lost_fields,
        });
        self.phase = EditorPhase::Editing;
    }

    /// A failed load falls back to the last good state: the previously open
    /// article if there was one, the empty editor otherwise.
    pub(crate) fn fail_load(&mut self) {
        self.phase = if self.open.is_some() {
            EditorPhase::Editing
        } else {
            EditorPhase::Empty
        };
    }

    // --- edits -----------------------------------------------------------

    pub(crate) fn set_status(&mut self, status: ArticleStatus) {
        if let Some(open) = self.open.as_mut() {
            open.working.status = Some(status);
        }
    }

    pub(crate) fn set_comment(&mut self, comment: String) {
        if let Some(open) = self.open.as_mut() {
            open.working.comment = comment;
        }
    }

    /// Sets the value for `field` on unit coding `unit`, replacing an
    /// existing value for that field. Out-of-range units are ignored.
    pub(crate) fn edit_coding_value(
        &mut self,
        unit: usize,
        field: FieldId,
        code: Option<CodeId>,
        text: Option<String>,
    ) {
        let Some(open) = self.open.as_mut() else {
            return;
        };
        let Some(coding) = open.working.codings.get_mut(unit) else {
            return;
        };
        let value = CodingValue { field, code, text };
        match coding.values.iter_mut().find(|v| v.field == field) {
            Some(existing) => *existing = value,
            None => coding.values.push(value),
        }
        self.refresh_lost_fields();
    }

    pub(crate) fn add_unit_coding(&mut self, sentence: Option<SentenceId>) {
        if let Some(open) = self.open.as_mut() {
            open.working.codings.push(UnitCoding {
                sentence,
                values: Vec::new(),
            });
        }
    }

    pub(crate) fn remove_unit_coding(&mut self, unit: usize) {
        let Some(open) = self.open.as_mut() else {
            return;
        };
        if unit < open.working.codings.len() {
            open.working.codings.remove(unit);
            self.refresh_lost_fields();
        }
    }

    fn refresh_lost_fields(&mut self) {
        if let Some(open) = self.open.as_mut() {
            open.lost_fields = lost_code_fields(&open.working.codings, &open.codebooks);
        }
    }

    // --- save / discard / close ------------------------------------------

    /// Builds the save request from the working copy. `None` means the
    /// required status is missing and the save must be refused.
    pub(crate) fn save_payload(&self) -> Option<SavePayload> {
        let open = self.open.as_ref()?;
        let status = open.working.status?;
        Some(SavePayload {
            id: open.id,
            status,
            comment: open.working.comment.clone(),
            codings: open.working.codings.clone(),
        })
    }

    pub(crate) fn begin_save(&mut self) {
        self.phase = EditorPhase::Saving;
    }

    /// A successful save makes the working copy the new snapshot and patches
    /// the grid row in place.
    pub(crate) fn complete_save(&mut self) {
        if let Some(open) = self.open.as_mut() {
            open.snapshot = open.working.clone();
            let (id, status) = (open.id, open.working.status);
            let comments = if open.working.comment.is_empty() {
                None
            } else {
                Some(open.working.comment.clone())
            };
            self.table.patch_row(id, status, comments);
        }
        self.phase = EditorPhase::Editing;
    }

    /// A failed save keeps the working copy (and the dirty flag) intact.
    pub(crate) fn fail_save(&mut self) {
        self.phase = EditorPhase::Editing;
    }

    pub(crate) fn discard(&mut self) {
        if let Some(open) = self.open.as_mut() {
            open.working = open.snapshot.clone();
        }
        self.refresh_lost_fields();
    }

    pub(crate) fn close(&mut self) {
        self.open = None;
        self.phase = EditorPhase::Empty;
        // Abandon interest in any load still in flight.
        self.load_seq += 1;
    }

    // --- unsaved-changes guard -------------------------------------------

    /// Parks an intercepted action; a later interception replaces it.
    pub(crate) fn park(&mut self, action: PendingAction) {
        self.pending = Some(action);
    }

    pub(crate) fn take_pending(&mut self) -> Option<PendingAction> {
        self.pending.take()
    }

    pub(crate) fn drop_pending(&mut self) {
        self.pending = None;
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    // --- view ------------------------------------------------------------

    pub fn view(&self) -> EditorViewModel {
        let rows = self
            .table
            .rows()
            .iter()
            .map(|row| ArticleRowView {
                id: row.id,
                article_id: row.article_id,
                title: row.title.clone(),
                medium: row.medium.clone(),
                date: row.date.clone(),
                pagenr: row.pagenr,
                length: row.length,
                status_label: row
                    .status
                    .map(|status| status.label().to_string())
                    .unwrap_or_default(),
                comments: row.comments.clone().unwrap_or_default(),
            })
            .collect();

        let open = self.open.as_ref().map(|open| OpenArticleView {
            id: open.id,
            status: open.working.status,
            comment: open.working.comment.clone(),
            codings: open.working.codings.clone(),
            lost_fields: open.lost_fields.iter().copied().collect(),
            dirty: open.working != open.snapshot,
            saving: self.phase == EditorPhase::Saving,
        });

        EditorViewModel {
            phase: self.phase,
            sort: self.table.sort().clone(),
            fetching: self.table.is_fetching(),
            rows,
            open,
        }
    }
}
