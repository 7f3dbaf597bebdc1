#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

use dioxus::prelude::*;
#[cfg(test)]
use services::PracticeSession;

#[cfg(test)]
use crate::vm::PracticeIntent;
use crate::vm::{
    map_active_questions, map_category_tabs, map_detail_categories, map_passage,
    map_score_breakdown, map_timer, score_label,
};

use super::components::{DetailedAnswers, PassagePanel, QuestionPanel};
use super::state::PracticeController;

#[component]
pub fn PracticeView() -> Element {
    let PracticeController { state, dispatch } = use_context::<PracticeController>();

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<PracticeTestHandles>() {
                handles.register(dispatch, state.session);
            }
        }
    }

    let session = state.session.read();
    let passage = map_passage(&session);
    let timer = map_timer(session.timer());
    let tabs = map_category_tabs(&session);
    let questions = map_active_questions(&session);
    let instructions = session
        .instructions_visible()
        .then(|| session.active_category().instructions().to_string());
    let score = score_label(&session);
    let breakdown = map_score_breakdown(&session);
    let details = map_detail_categories(&session);
    drop(session);

    rsx! {
        div { class: "page practice-page",
            header { class: "practice-header",
                h1 { "Answers for Glaciers Reading Passage" }
                p { class: "practice-header__subtitle",
                    "Read the passage, answer the questions, then check your score."
                }
            }
            div { class: "practice-grid",
                PassagePanel { passage, timer, on_intent: dispatch }
                QuestionPanel {
                    tabs,
                    questions,
                    instructions,
                    score,
                    breakdown,
                    on_intent: dispatch,
                }
            }
            DetailedAnswers { details, on_intent: dispatch }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct PracticeTestHandles {
    dispatch: Rc<RefCell<Option<Callback<PracticeIntent>>>>,
    session: Rc<RefCell<Option<Signal<PracticeSession>>>>,
}

#[cfg(test)]
impl PracticeTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<PracticeIntent>,
        session: Signal<PracticeSession>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.session.borrow_mut() = Some(session);
    }

    pub(crate) fn dispatch(&self) -> Callback<PracticeIntent> {
        (*self.dispatch.borrow()).expect("practice dispatch registered")
    }

    pub(crate) fn session(&self) -> Signal<PracticeSession> {
        (*self.session.borrow()).expect("practice session registered")
    }
}
