use annotator_api::ApiHandle;
use annotator_core::{Effect, GuardChoice, Msg};
use client_logging::client_info;

use super::map::{map_event, map_payload};
use super::presenter::Presenter;

const GUARD_BUTTONS: [&str; 3] = ["Save", "Discard", "Cancel"];

/// Executes core effects: REST work goes to the `ApiHandle`, user-facing
/// effects go to the presenter. Prompt answers come back as messages.
pub(crate) struct EffectRunner {
    api: ApiHandle,
}

impl EffectRunner {
    pub(crate) fn new(api: ApiHandle) -> Self {
        Self { api }
    }

    pub(crate) fn run(
        &self,
        effects: Vec<Effect>,
        presenter: &mut dyn Presenter,
    ) -> Vec<Msg> {
        let mut replies = Vec::new();
        for effect in effects {
            match effect {
                Effect::FetchArticleList { seq, sort } => {
                    client_info!("FetchArticleList seq={} order_by={}", seq, sort.order_by());
                    self.api.fetch_list(seq, sort.order_by());
                }
                Effect::LoadArticle { seq, id } => {
                    client_info!("LoadArticle seq={} id={}", seq, id);
                    self.api.load_article(seq, id);
                }
                Effect::SaveArticle { payload } => {
                    client_info!(
                        "SaveArticle id={} codings={}",
                        payload.id,
                        payload.codings.len()
                    );
                    let (id, wire) = map_payload(&payload);
                    self.api.save_article(id, wire);
                }
                Effect::PromptUnsaved => {
                    let choice = presenter.prompt(
                        "Unsaved changes",
                        "The open article has unsaved changes. Save them first?",
                        &GUARD_BUTTONS,
                    );
                    let choice = match choice {
                        0 => GuardChoice::Save,
                        1 => GuardChoice::Discard,
                        _ => GuardChoice::Cancel,
                    };
                    replies.push(Msg::GuardResolved(choice));
                }
                Effect::Notify { severity, message } => {
                    presenter.toast(severity, &message);
                }
            }
        }
        replies
    }

    /// Drains completed REST calls into core messages.
    pub(crate) fn poll_events(&self) -> Vec<Msg> {
        let mut msgs = Vec::new();
        while let Some(event) = self.api.try_recv() {
            msgs.push(map_event(event));
        }
        msgs
    }
}
