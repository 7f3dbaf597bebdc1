use std::time::Duration;

use dioxus::document;
use dioxus::prelude::*;
use quiz_core::model::AnchorId;
use quiz_core::navigator::NavigatorEvent;

use crate::vm::PracticeIntent;

use super::scripts::scroll_into_view_script;
use super::state::PracticeState;

const TICK: Duration = Duration::from_secs(1);

pub fn use_practice_dispatcher(state: PracticeState) -> Callback<PracticeIntent> {
    use_callback(move |intent: PracticeIntent| {
        let mut session = state.session;
        match intent {
            PracticeIntent::SelectKind(kind) => session.write().select_kind(kind),
            PracticeIntent::SetAnswer(id, value) => session.write().set_answer(id, value),
            PracticeIntent::Reveal => {
                session.write().reveal();
            }
            PracticeIntent::TogglePassage => session.write().toggle_passage(),
            PracticeIntent::ToggleInstructions => session.write().toggle_instructions(),
            PracticeIntent::ToggleDetails(kind) => session.write().toggle_details(kind),
            PracticeIntent::NavigateTo(anchor) => navigate(state, anchor),
            PracticeIntent::ToggleTimer => toggle_timer(state),
            PracticeIntent::PreviousMatch => session.write().previous_match(),
            PracticeIntent::NextMatch => session.write().next_match(),
            PracticeIntent::GoToMatch(index) => session.write().go_to_match(index),
            PracticeIntent::ChooseMatch(label) => session.write().choose_match(&label),
        }
    })
}

/// Highlight `anchor` now, scroll to it after the configured delay, then clear
/// the highlight. The delays run on the task's own timer, not the session
/// clock. A newer navigation cancels whatever this one still had pending.
fn navigate(state: PracticeState, anchor: AnchorId) {
    let mut session = state.session;
    let mut navigation_task = state.navigation_task;

    if let Some(task) = navigation_task.take() {
        task.cancel();
    }
    let ticket = session.write().navigate_to(anchor);

    let task = spawn(async move {
        tokio::time::sleep(ticket.scroll_after()).await;
        let scrolled = session.write().fire_scroll(&ticket);
        if let Some(NavigatorEvent::ScrollIntoView(anchor)) = scrolled {
            tracing::trace!(%anchor, "scrolling reference into view");
            let _ = document::eval(&scroll_into_view_script(&anchor));
        }

        tokio::time::sleep(ticket.clear_after_scroll()).await;
        session.write().fire_clear(&ticket);
        navigation_task.set(None);
    });
    navigation_task.set(Some(task));
}

fn toggle_timer(state: PracticeState) {
    let mut session = state.session;
    let mut timer_task = state.timer_task;

    session.write().toggle_timer();
    if let Some(task) = timer_task.take() {
        task.cancel();
    }
    if !session.read().timer().is_running() {
        return;
    }

    let task = spawn(async move {
        loop {
            tokio::time::sleep(TICK).await;
            let mut session = session.write();
            session.tick_timer();
            if session.timer().is_expired() {
                tracing::debug!("countdown task finished");
                break;
            }
        }
        timer_task.set(None);
    });
    timer_task.set(Some(task));
}
