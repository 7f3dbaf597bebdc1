use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::model::SessionSettings;
use quiz_core::time::fixed_clock;
use services::PracticeService;

use crate::context::{UiApp, build_app_context};
use crate::views::practice::PracticeTestHandles;
use crate::views::{GuideView, PracticeProvider, PracticeView};

#[derive(Clone)]
struct TestApp {
    practice: Arc<PracticeService>,
}

impl UiApp for TestApp {
    fn practice_service(&self) -> Arc<PracticeService> {
        Arc::clone(&self.practice)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Practice,
    Guide,
}

/// Lets a test swap the routed view the way a sidebar link would.
#[derive(Clone, Default)]
struct ViewSwitch(Rc<RefCell<Option<Signal<ViewKind>>>>);

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    switch: ViewSwitch,
    practice_handles: Option<PracticeTestHandles>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    let view = use_signal(|| props.view);
    use_context_provider(|| view);
    *props.switch.0.borrow_mut() = Some(view);
    if let Some(handles) = props.practice_handles.clone() {
        use_context_provider(|| handles);
    }
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<Signal<ViewKind>>();
    rsx! {
        PracticeProvider {
            match view() {
                ViewKind::Practice => rsx! { PracticeView {} },
                ViewKind::Guide => rsx! { GuideView {} },
            }
        }
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub practice_handles: Option<PracticeTestHandles>,
    switch: ViewSwitch,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn drive(&mut self) {
        drive_dom(&mut self.dom);
    }

    /// Route to `view`, keeping everything above the outlet mounted.
    pub fn show(&mut self, view: ViewKind) {
        let mut current = (*self.switch.0.borrow()).expect("view switch registered");
        current.set(view);
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub fn practice(&self) -> &PracticeTestHandles {
        self.practice_handles
            .as_ref()
            .expect("practice handles installed")
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_settings(view, SessionSettings::default())
}

pub fn setup_view_harness_with_settings(view: ViewKind, settings: SessionSettings) -> ViewHarness {
    let practice = PracticeService::glaciers(settings, fixed_clock()).expect("glacier catalog");
    let practice_handles = Some(PracticeTestHandles::default());
    let switch = ViewSwitch::default();

    let app = Arc::new(TestApp {
        practice: Arc::new(practice),
    });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            switch: switch.clone(),
            practice_handles: practice_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        practice_handles,
        switch,
    }
}
