use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::model::{AnchorId, QuestionId, QuestionKind, SessionSettings};
use quiz_core::time::fixed_clock;
use services::PracticeService;

use crate::vm::PracticeIntent;

use super::actions::use_practice_dispatcher;
use super::state::{PracticeState, use_practice_state};

#[derive(Clone, Default)]
struct HarnessHandles {
    dispatch: Rc<RefCell<Option<Callback<PracticeIntent>>>>,
    state: Rc<RefCell<Option<PracticeState>>>,
}

impl HarnessHandles {
    fn dispatch(&self) -> Callback<PracticeIntent> {
        (*self.dispatch.borrow()).expect("dispatch registered")
    }

    fn state(&self) -> PracticeState {
        (*self.state.borrow()).expect("state registered")
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    service: Arc<PracticeService>,
    handles: HarnessHandles,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for HarnessProps {}

#[component]
fn PracticeIntentHarness(props: HarnessProps) -> Element {
    let state = use_practice_state(&props.service);
    let dispatch = use_practice_dispatcher(state);
    let mut registered = use_signal(|| false);
    if !registered() {
        registered.set(true);
        *props.handles.dispatch.borrow_mut() = Some(dispatch);
        *props.handles.state.borrow_mut() = Some(state);
    }
    rsx! { div {} }
}

fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Move the paused tokio clock forward and let woken tasks run.
async fn advance(dom: &mut VirtualDom, millis: u64) {
    tokio::time::advance(Duration::from_millis(millis)).await;
    drive_dom(dom);
}

fn mount() -> (VirtualDom, HarnessHandles) {
    mount_with(SessionSettings::default())
}

fn mount_with(settings: SessionSettings) -> (VirtualDom, HarnessHandles) {
    let service = PracticeService::glaciers(settings, fixed_clock()).expect("glacier catalog");
    let handles = HarnessHandles::default();
    let mut dom = VirtualDom::new_with_props(
        PracticeIntentHarness,
        HarnessProps {
            service: Arc::new(service),
            handles: handles.clone(),
        },
    );
    dom.rebuild_in_place();
    drive_dom(&mut dom);
    (dom, handles)
}

#[tokio::test(flavor = "current_thread")]
async fn practice_intents_smoke_answer_switch_reveal() {
    let (mut dom, handles) = mount();
    let dispatch = handles.dispatch();
    let state = handles.state();

    dispatch.call(PracticeIntent::SetAnswer(QuestionId::new(1), "true".to_string()));
    dispatch.call(PracticeIntent::SelectKind(QuestionKind::FillBlank));
    dispatch.call(PracticeIntent::SetAnswer(QuestionId::new(12), "Snow".to_string()));
    drive_dom(&mut dom);

    {
        let session = state.session.read();
        assert_eq!(session.active_kind(), QuestionKind::FillBlank);
        assert_eq!(session.answer(QuestionId::new(1)), "true");
        assert!(!session.is_revealed());
    }

    dispatch.call(PracticeIntent::Reveal);
    drive_dom(&mut dom);
    let session = state.session.read();
    assert!(session.is_revealed());
    assert_eq!(session.score(), 2);
}

#[tokio::test(flavor = "current_thread")]
async fn practice_intents_smoke_navigation_replaces_pending_task() {
    let (mut dom, handles) = mount();
    let dispatch = handles.dispatch();
    let state = handles.state();

    dispatch.call(PracticeIntent::TogglePassage);
    dispatch.call(PracticeIntent::NavigateTo(AnchorId::new("para-c-1")));
    drive_dom(&mut dom);
    let first = (*state.navigation_task.read()).expect("navigation task");

    dispatch.call(PracticeIntent::NavigateTo(AnchorId::new("para-d-1")));
    drive_dom(&mut dom);
    let second = (*state.navigation_task.read()).expect("navigation task");

    assert_ne!(first, second);
    let session = state.session.read();
    assert!(session.is_passage_expanded());
    assert_eq!(session.highlighted(), Some(&AnchorId::new("para-d-1")));
}

#[tokio::test(flavor = "current_thread")]
async fn practice_intents_smoke_timer_task_follows_toggle() {
    let (mut dom, handles) = mount();
    let dispatch = handles.dispatch();
    let state = handles.state();

    dispatch.call(PracticeIntent::ToggleTimer);
    drive_dom(&mut dom);
    assert!(state.session.read().timer().is_running());
    assert!(state.timer_task.read().is_some());

    dispatch.call(PracticeIntent::ToggleTimer);
    drive_dom(&mut dom);
    assert!(!state.session.read().timer().is_running());
    assert!(state.timer_task.read().is_none());
}

#[tokio::test(flavor = "current_thread")]
async fn practice_intents_smoke_matching_choice_lands_on_cursor_question() {
    let (mut dom, handles) = mount();
    let dispatch = handles.dispatch();
    let state = handles.state();

    dispatch.call(PracticeIntent::SelectKind(QuestionKind::Matching));
    dispatch.call(PracticeIntent::GoToMatch(3));
    dispatch.call(PracticeIntent::ChooseMatch("A".to_string()));
    dispatch.call(PracticeIntent::PreviousMatch);
    drive_dom(&mut dom);

    let session = state.session.read();
    assert_eq!(session.matching_cursor().index(), 2);
    assert_eq!(session.answer(QuestionId::new(11)), "A");
    assert_eq!(session.score(), 1);
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn highlight_clears_two_seconds_after_navigation() {
    let (mut dom, handles) = mount();
    let dispatch = handles.dispatch();
    let state = handles.state();
    let anchor = AnchorId::new("para-c-3");

    dispatch.call(PracticeIntent::NavigateTo(anchor.clone()));
    drive_dom(&mut dom);
    assert_eq!(state.session.read().highlighted(), Some(&anchor));

    advance(&mut dom, 100).await;
    assert_eq!(state.session.read().highlighted(), Some(&anchor));
    assert!(state.navigation_task.read().is_some());

    advance(&mut dom, 1_899).await;
    assert_eq!(state.session.read().highlighted(), Some(&anchor));

    advance(&mut dom, 1).await;
    assert_eq!(state.session.read().highlighted(), None);
    assert!(state.navigation_task.read().is_none());
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn timer_ticks_once_per_second_and_stops_at_zero() {
    let settings = SessionSettings::default()
        .with_timer_start_secs(3)
        .expect("valid timer");
    let (mut dom, handles) = mount_with(settings);
    let dispatch = handles.dispatch();
    let state = handles.state();

    dispatch.call(PracticeIntent::ToggleTimer);
    drive_dom(&mut dom);

    advance(&mut dom, 999).await;
    assert_eq!(state.session.read().timer().remaining(), 3);
    advance(&mut dom, 1).await;
    assert_eq!(state.session.read().timer().remaining(), 2);

    advance(&mut dom, 1_000).await;
    assert_eq!(state.session.read().timer().remaining(), 1);
    assert!(state.timer_task.read().is_some());

    advance(&mut dom, 1_000).await;
    {
        let session = state.session.read();
        assert_eq!(session.timer().remaining(), 0);
        assert_eq!(session.timer().label(), "0:00");
        assert!(session.timer().is_running());
    }
    assert!(state.timer_task.read().is_none());

    for _ in 0..5 {
        advance(&mut dom, 1_000).await;
    }
    assert_eq!(state.session.read().timer().remaining(), 0);
    assert!(state.timer_task.read().is_none());
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn paused_timer_stops_ticking() {
    let (mut dom, handles) = mount();
    let dispatch = handles.dispatch();
    let state = handles.state();

    dispatch.call(PracticeIntent::ToggleTimer);
    drive_dom(&mut dom);
    advance(&mut dom, 1_000).await;
    assert_eq!(state.session.read().timer().remaining(), 1_199);

    dispatch.call(PracticeIntent::ToggleTimer);
    drive_dom(&mut dom);
    for _ in 0..5 {
        advance(&mut dom, 1_000).await;
    }
    assert_eq!(state.session.read().timer().remaining(), 1_199);
    assert!(!state.session.read().timer().is_running());
}
