use std::collections::BTreeMap;
use std::sync::Once;

use annotator_core::{
    update, ArticleBundle, ArticleSnapshot, ArticleStatus, Codebook, CodedArticleId, CodingValue,
    EditorPhase, EditorState, Effect, Msg, Severity, UnitCoding,
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
            comment: format!("notes for {id}"),
            codings: vec![UnitCoding {
                sentence: Some(1),
                values: vec![CodingValue {
                    field: 10,
                    code: Some(1),
                    text: None,
                }],
            }],
        },
        codebooks: BTreeMap::from([(
            10,
            Codebook {
                id: 100,
                codes: [1, 2, 3].into_iter().collect(),
            },
        )]),
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

fn open_clean(id: CodedArticleId) -> EditorState {
    let (state, effects) = update(EditorState::new(), Msg::RowActivated(id));
    let seq = load_seq(&effects);
    let (state, _) = update(
        state,
        Msg::ArticleLoaded {
            seq,
            result: Ok(bundle(id)),
        },
    );
    state
}

#[test]
fn row_activation_starts_a_load() {
    init_logging();
    let state = EditorState::new();

    let (state, effects) = update(state, Msg::RowActivated(5));

    assert_eq!(state.phase(), EditorPhase::Loading);
    assert!(matches!(
        effects.as_slice(),
        [Effect::LoadArticle { id: 5, .. }]
    ));
}

#[test]
fn successful_load_opens_the_article_clean() {
    init_logging();
    let state = open_clean(5);

    assert_eq!(state.phase(), EditorPhase::Editing);
    assert!(!state.dirty());
    assert_eq!(state.open_id(), Some(5));

    let open = state.view().open.expect("open article view");
    assert_eq!(open.comment, "notes for 5");
    assert_eq!(open.status, Some(ArticleStatus::InProgress));
    assert!(open.lost_fields.is_empty());
}

#[test]
fn load_flags_codes_missing_from_codebook() {
    init_logging();
    let mut bundle = bundle(5);
    // Status null on the server, and a coding that references code 7 while
    // the bound codebook only contains {1, 2, 3}.
    bundle.snapshot.status = None;
    bundle.snapshot.codings[0].values[0].code = Some(7);

    let (state, effects) = update(EditorState::new(), Msg::RowActivated(5));
    let seq = load_seq(&effects);
    let (state, _) = update(
        state,
        Msg::ArticleLoaded {
            seq,
            result: Ok(bundle),
        },
    );

    let open = state.view().open.expect("open article view");
    assert_eq!(open.status, None);
    assert_eq!(open.lost_fields, vec![10]);
}

#[test]
fn stale_load_response_never_overwrites_newer_selection() {
    init_logging();
    let (state, effects) = update(EditorState::new(), Msg::RowActivated(1));
    let stale_seq = load_seq(&effects);

    // A second selection abandons interest in the first.
    let (state, effects) = update(state, Msg::RowActivated(2));
    let current_seq = load_seq(&effects);
    assert_ne!(stale_seq, current_seq);

    let (state, _) = update(
        state,
        Msg::ArticleLoaded {
            seq: current_seq,
            result: Ok(bundle(2)),
        },
    );
    assert_eq!(state.open_id(), Some(2));

    // The first selection's response arrives late and is silently dropped.
    let (state, effects) = update(
        state,
        Msg::ArticleLoaded {
            seq: stale_seq,
            result: Ok(bundle(1)),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state.open_id(), Some(2));
    assert_eq!(state.phase(), EditorPhase::Editing);
}

#[test]
fn failed_load_with_no_open_article_returns_to_empty() {
    init_logging();
    let (state, effects) = update(EditorState::new(), Msg::RowActivated(5));
    let seq = load_seq(&effects);

    let (state, effects) = update(
        state,
        Msg::ArticleLoaded {
            seq,
            result: Err("gateway timeout".to_string()),
        },
    );

    assert_eq!(state.phase(), EditorPhase::Empty);
    assert!(matches!(
        effects.as_slice(),
        [Effect::Notify {
            severity: Severity::Error,
            ..
        }]
    ));
}

#[test]
fn failed_load_keeps_the_previously_open_article() {
    init_logging();
    let state = open_clean(1);

    let (state, effects) = update(state, Msg::RowActivated(2));
    let seq = load_seq(&effects);
    let (state, _) = update(
        state,
        Msg::ArticleLoaded {
            seq,
            result: Err("gateway timeout".to_string()),
        },
    );

    assert_eq!(state.phase(), EditorPhase::Editing);
    assert_eq!(state.open_id(), Some(1));
}

#[test]
fn close_clears_the_editor() {
    init_logging();
    let state = open_clean(5);

    let (state, effects) = update(state, Msg::CloseRequested);

    assert!(effects.is_empty());
    assert_eq!(state.phase(), EditorPhase::Empty);
    assert_eq!(state.open_id(), None);
}

#[test]
fn close_during_load_abandons_the_load() {
    init_logging();
    let (state, effects) = update(EditorState::new(), Msg::RowActivated(5));
    let seq = load_seq(&effects);

    let (state, _) = update(state, Msg::CloseRequested);
    assert_eq!(state.phase(), EditorPhase::Empty);

    let (state, effects) = update(
        state,
        Msg::ArticleLoaded {
            seq,
            result: Ok(bundle(5)),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state.phase(), EditorPhase::Empty);
}
