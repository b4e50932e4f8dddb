use std::collections::BTreeMap;
use std::sync::Once;

use annotator_core::{
    update, ArticleBundle, ArticleSnapshot, ArticleStatus, CodedArticleId, EditorPhase,
    EditorState, Effect, GuardChoice, Msg, Severity,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(client_logging::initialize_for_tests);
}

fn bundle(id: CodedArticleId) -> ArticleBundle {
    ArticleBundle {
        id,
        snapshot: ArticleSnapshot {
            status: Some(ArticleStatus::InProgress),
            comment: "original comment".to_string(),
            codings: Vec::new(),
        },
        codebooks: BTreeMap::new(),
    }
}

fn load_seq(effects: &[Effect]) -> u64 {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::LoadArticle { seq, .. } => Some(*seq),
            _ => None,
        })
        .expect("load effect")
}

fn open_dirty(id: CodedArticleId) -> EditorState {
    let (state, effects) = update(EditorState::new(), Msg::RowActivated(id));
    let seq = load_seq(&effects);
    let (state, _) = update(
        state,
        Msg::ArticleLoaded {
            seq,
            result: Ok(bundle(id)),
        },
    );
    let (state, _) = update(state, Msg::CommentEdited("unsaved edit".to_string()));
    assert!(state.dirty());
    state
}

#[test]
fn dirty_row_click_is_intercepted() {
    init_logging();
    let state = open_dirty(1);

    let (state, effects) = update(state, Msg::RowActivated(2));

    assert_eq!(effects, vec![Effect::PromptUnsaved]);
    assert!(state.has_pending());
    // No load was started and nothing was lost.
    assert_eq!(state.phase(), EditorPhase::Editing);
    assert_eq!(state.open_id(), Some(1));
    assert!(state.dirty());
}

#[test]
fn dirty_close_is_intercepted() {
    init_logging();
    let state = open_dirty(1);

    let (state, effects) = update(state, Msg::CloseRequested);

    assert_eq!(effects, vec![Effect::PromptUnsaved]);
    assert_eq!(state.open_id(), Some(1));
    assert!(state.dirty());
}

#[test]
fn cancel_aborts_the_action_and_keeps_edits() {
    init_logging();
    let state = open_dirty(1);
    let (state, _) = update(state, Msg::RowActivated(2));

    let (state, effects) = update(state, Msg::GuardResolved(GuardChoice::Cancel));

    assert!(effects.is_empty());
    assert!(!state.has_pending());
    assert_eq!(state.open_id(), Some(1));
    assert!(state.dirty());
}

#[test]
fn discard_restores_the_snapshot_and_completes_the_row_switch() {
    init_logging();
    let state = open_dirty(1);
    let (state, _) = update(state, Msg::RowActivated(2));

    let (state, effects) = update(state, Msg::GuardResolved(GuardChoice::Discard));

    // The edit is gone and the original action is re-issued.
    assert!(!state.dirty());
    let seq = load_seq(&effects);
    assert!(matches!(
        effects.as_slice(),
        [Effect::LoadArticle { id: 2, .. }]
    ));

    let (state, _) = update(
        state,
        Msg::ArticleLoaded {
            seq,
            result: Ok(bundle(2)),
        },
    );
    assert_eq!(state.open_id(), Some(2));
    assert_eq!(
        state.view().open.expect("open view").comment,
        "original comment"
    );
}

#[test]
fn discard_completes_a_parked_close() {
    init_logging();
    let state = open_dirty(1);
    let (state, _) = update(state, Msg::CloseRequested);

    let (state, effects) = update(state, Msg::GuardResolved(GuardChoice::Discard));

    assert!(effects.is_empty());
    assert_eq!(state.phase(), EditorPhase::Empty);
    assert_eq!(state.open_id(), None);
}

#[test]
fn save_choice_persists_then_reissues_the_action() {
    init_logging();
    let state = open_dirty(1);
    let (state, _) = update(state, Msg::RowActivated(2));

    let (state, effects) = update(state, Msg::GuardResolved(GuardChoice::Save));
    assert!(matches!(effects.as_slice(), [Effect::SaveArticle { .. }]));
    assert_eq!(state.phase(), EditorPhase::Saving);

    let (state, effects) = update(state, Msg::SaveCompleted { result: Ok(()) });

    // Saved toast plus the re-issued row switch.
    assert!(matches!(
        effects.as_slice(),
        [
            Effect::Notify {
                severity: Severity::Info,
                ..
            },
            Effect::LoadArticle { id: 2, .. }
        ]
    ));
    assert_eq!(state.phase(), EditorPhase::Loading);
}

#[test]
fn save_choice_failure_drops_the_action_and_keeps_dirty_state() {
    init_logging();
    let state = open_dirty(1);
    let (state, _) = update(state, Msg::RowActivated(2));
    let (state, _) = update(state, Msg::GuardResolved(GuardChoice::Save));

    let (state, effects) = update(
        state,
        Msg::SaveCompleted {
            result: Err("503 service unavailable".to_string()),
        },
    );

    assert!(matches!(
        effects.as_slice(),
        [Effect::Notify {
            severity: Severity::Error,
            ..
        }]
    ));
    assert!(!state.has_pending());
    assert_eq!(state.open_id(), Some(1));
    assert!(state.dirty());
}

#[test]
fn save_choice_with_missing_status_refuses_and_drops_the_action() {
    init_logging();
    let mut incomplete = bundle(1);
    incomplete.snapshot.status = None;
    let (state, effects) = update(EditorState::new(), Msg::RowActivated(1));
    let seq = load_seq(&effects);
    let (state, _) = update(
        state,
        Msg::ArticleLoaded {
            seq,
            result: Ok(incomplete),
        },
    );
    let (state, _) = update(state, Msg::CommentEdited("unsaved edit".to_string()));
    let (state, _) = update(state, Msg::RowActivated(2));

    let (state, effects) = update(state, Msg::GuardResolved(GuardChoice::Save));

    assert!(matches!(
        effects.as_slice(),
        [Effect::Notify {
            severity: Severity::Warning,
            ..
        }]
    ));
    assert!(!state.has_pending());
    assert_eq!(state.open_id(), Some(1));
    assert!(state.dirty());
}

#[test]
fn later_interception_replaces_the_parked_action() {
    init_logging();
    let state = open_dirty(1);
    let (state, _) = update(state, Msg::RowActivated(2));
    let (state, _) = update(state, Msg::RowActivated(3));

    let (_state, effects) = update(state, Msg::GuardResolved(GuardChoice::Discard));

    assert!(matches!(
        effects.as_slice(),
        [Effect::LoadArticle { id: 3, .. }]
    ));
}

#[test]
fn guard_answer_without_a_prompt_is_a_noop() {
    init_logging();
    let state = open_dirty(1);

    let (state, effects) = update(state, Msg::GuardResolved(GuardChoice::Discard));

    assert!(effects.is_empty());
    assert!(state.dirty());
}
