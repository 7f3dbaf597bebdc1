use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::context::AppContext;
use crate::views::{GuideView, PracticeProvider, PracticeView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", PracticeView)] Practice {},
        #[route("/guide", GuideView)] Guide {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        PracticeProvider {
            div { class: "app",
                Sidebar {}
                main { class: "content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    let question_count = use_context::<AppContext>().catalog().len();
    rsx! {
        nav { class: "sidebar",
            h1 { "Glaciers" }
            p { class: "sidebar__meta", "{question_count} questions" }
            ul {
                li { Link { to: Route::Practice {}, "Practice" } }
                li { Link { to: Route::Guide {}, "Study Guide" } }
            }
        }
    }
}
