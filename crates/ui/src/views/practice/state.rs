use std::sync::Arc;

use dioxus::core::Task;
use dioxus::prelude::*;
use services::{PracticeService, PracticeSession};

use crate::context::AppContext;
use crate::vm::PracticeIntent;

use super::actions::use_practice_dispatcher;

/// Signals backing the practice page.
///
/// The session is the single owned instance every event handler mutates; the
/// two task slots hold the deferred work so it can be cancelled and replaced.
#[derive(Clone, Copy)]
pub struct PracticeState {
    pub session: Signal<PracticeSession>,
    pub timer_task: Signal<Option<Task>>,
    pub navigation_task: Signal<Option<Task>>,
}

pub fn use_practice_state(service: &Arc<PracticeService>) -> PracticeState {
    let service = Arc::clone(service);
    let session = use_signal(move || service.start_session());
    let timer_task = use_signal(|| None::<Task>);
    let navigation_task = use_signal(|| None::<Task>);

    PracticeState {
        session,
        timer_task,
        navigation_task,
    }
}

/// Practice state plus its dispatcher, shared through context.
#[derive(Clone, Copy)]
pub struct PracticeController {
    pub state: PracticeState,
    pub dispatch: Callback<PracticeIntent>,
}

/// Owns the practice session above the router outlet, so it outlives route
/// changes and its tasks keep running while another page is shown.
#[component]
pub fn PracticeProvider(children: Element) -> Element {
    let ctx = use_context::<AppContext>();
    let state = use_practice_state(&ctx.practice_service());
    let dispatch = use_practice_dispatcher(state);
    use_context_provider(|| PracticeController { state, dispatch });

    rsx! { {children} }
}
