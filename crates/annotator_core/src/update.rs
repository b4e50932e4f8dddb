use crate::{
    CodedArticleId, EditorPhase, EditorState, Effect, GuardChoice, Msg, PendingAction, Severity,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: EditorState, msg: Msg) -> (EditorState, Vec<Effect>) {
    let effects = match msg {
        Msg::TableRefreshRequested => start_list_fetch(&mut state),
        Msg::SortChanged(column) => {
            if state.table_mut().toggle_sort(&column) {
                start_list_fetch(&mut state)
            } else {
                Vec::new()
            }
        }
        Msg::ArticleListLoaded { seq, result } => {
            if !state.table().is_current(seq) {
                // Response for an abandoned fetch; a newer one is in flight.
                return (state, Vec::new());
            }
            match result {
                Ok(rows) => {
                    state.table_mut().set_rows(rows);
                    Vec::new()
                }
                Err(message) => {
                    // Last good rows stay on screen.
                    state.table_mut().fetch_failed();
                    vec![Effect::Notify {
                        severity: Severity::Error,
                        message: format!("could not fetch article list: {message}"),
                    }]
                }
            }
        }
        Msg::RowActivated(id) => request_open(&mut state, id),
        Msg::ArticleLoaded { seq, result } => {
            if !state.is_current_load(seq) || state.phase() != EditorPhase::Loading {
                // Stale response for a since-abandoned selection.
                return (state, Vec::new());
            }
            match result {
                Ok(bundle) => {
                    state.accept_load(bundle);
                    Vec::new()
                }
                Err(message) => {
                    state.fail_load();
                    vec![Effect::Notify {
                        severity: Severity::Error,
                        message: format!("could not load article: {message}"),
                    }]
                }
            }
        }
        Msg::StatusEdited(status) => {
            if state.phase() == EditorPhase::Editing {
                state.set_status(status);
            }
            Vec::new()
        }
        Msg::CommentEdited(comment) => {
            if state.phase() == EditorPhase::Editing {
                state.set_comment(comment);
            }
            Vec::new()
        }
        Msg::CodingValueEdited {
            unit,
            field,
            code,
            text,
        } => {
            if state.phase() == EditorPhase::Editing {
                state.edit_coding_value(unit, field, code, text);
            }
            Vec::new()
        }
        Msg::UnitCodingAdded { sentence } => {
            if state.phase() == EditorPhase::Editing {
                state.add_unit_coding(sentence);
            }
            Vec::new()
        }
        Msg::UnitCodingRemoved { unit } => {
            if state.phase() == EditorPhase::Editing {
                state.remove_unit_coding(unit);
            }
            Vec::new()
        }
        Msg::SaveRequested => match state.phase() {
            EditorPhase::Editing => start_save(&mut state),
            EditorPhase::Saving => vec![Effect::Notify {
                severity: Severity::Warning,
                message: "a save is already in progress".to_string(),
            }],
            EditorPhase::Empty | EditorPhase::Loading => Vec::new(),
        },
        Msg::SaveCompleted { result } => {
            if state.phase() != EditorPhase::Saving {
                return (state, Vec::new());
            }
            match result {
                Ok(()) => {
                    state.complete_save();
                    let mut effects = vec![Effect::Notify {
                        severity: Severity::Info,
                        message: "article saved".to_string(),
                    }];
                    effects.extend(perform_pending(&mut state));
                    effects
                }
                Err(message) => {
                    // The dirty flag survives; data is never silently dropped.
                    state.fail_save();
                    state.drop_pending();
                    vec![Effect::Notify {
                        severity: Severity::Error,
                        message: format!("could not save article: {message}"),
                    }]
                }
            }
        }
        Msg::DiscardRequested => {
            if state.phase() == EditorPhase::Editing && state.dirty() {
                state.discard();
            }
            Vec::new()
        }
        Msg::CloseRequested => request_close(&mut state),
        Msg::GuardResolved(choice) => resolve_guard(&mut state, choice),
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn start_list_fetch(state: &mut EditorState) -> Vec<Effect> {
    let seq = state.table_mut().begin_fetch();
    let sort = state.table().sort().clone();
    vec![Effect::FetchArticleList { seq, sort }]
}

fn start_load(state: &mut EditorState, id: CodedArticleId) -> Vec<Effect> {
    let seq = state.begin_load();
    vec![Effect::LoadArticle { seq, id }]
}

/// Row activation. Dirty state routes through the guard; a selection during
/// an earlier load simply abandons interest in that load. During a save the
/// working copy is still unconfirmed, so selection is refused outright.
fn request_open(state: &mut EditorState, id: CodedArticleId) -> Vec<Effect> {
    if state.phase() == EditorPhase::Saving {
        return vec![Effect::Notify {
            severity: Severity::Warning,
            message: "a save is in progress".to_string(),
        }];
    }
    if state.dirty() {
        state.park(PendingAction::OpenArticle(id));
        return vec![Effect::PromptUnsaved];
    }
    start_load(state, id)
}

fn request_close(state: &mut EditorState) -> Vec<Effect> {
    if state.phase() == EditorPhase::Saving {
        return vec![Effect::Notify {
            severity: Severity::Warning,
            message: "a save is in progress".to_string(),
        }];
    }
    if state.dirty() {
        state.park(PendingAction::CloseEditor);
        return vec![Effect::PromptUnsaved];
    }
    state.close();
    Vec::new()
}

/// Starts a save, or refuses it when the required status is missing. A
/// refused save also drops any guarded action: the user has to resolve the
/// validation problem first.
fn start_save(state: &mut EditorState) -> Vec<Effect> {
    match state.save_payload() {
        Some(payload) => {
            state.begin_save();
            vec![Effect::SaveArticle { payload }]
        }
        None => {
            state.drop_pending();
            vec![Effect::Notify {
                severity: Severity::Warning,
                message: "cannot save: article status is required".to_string(),
            }]
        }
    }
}

fn resolve_guard(state: &mut EditorState, choice: GuardChoice) -> Vec<Effect> {
    if !state.has_pending() {
        // Prompt answered twice, or never asked.
        return Vec::new();
    }
    match choice {
        GuardChoice::Cancel => {
            state.drop_pending();
            Vec::new()
        }
        GuardChoice::Discard => {
            if state.dirty() {
                state.discard();
            }
            perform_pending(state)
        }
        GuardChoice::Save => {
            if state.phase() == EditorPhase::Editing {
                // The pending action stays parked; a successful save
                // re-issues it, a failed one drops it.
                start_save(state)
            } else {
                state.drop_pending();
                Vec::new()
            }
        }
    }
}

fn perform_pending(state: &mut EditorState) -> Vec<Effect> {
    match state.take_pending() {
        Some(PendingAction::OpenArticle(id)) => start_load(state, id),
        Some(PendingAction::CloseEditor) => {
            state.close();
            Vec::new()
        }
        None => Vec::new(),
    }
}
