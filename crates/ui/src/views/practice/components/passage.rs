use dioxus::prelude::*;

use crate::vm::{PassageVm, PracticeIntent, SegmentVm, TimerVm};

#[component]
pub fn PassagePanel(
    passage: PassageVm,
    timer: TimerVm,
    on_intent: Callback<PracticeIntent>,
) -> Element {
    let body_class = if passage.whole_highlighted {
        "passage-body highlight-text"
    } else {
        "passage-body"
    };

    rsx! {
        section { class: "passage-panel",
            div { class: "passage-panel__header",
                h2 { class: "passage-panel__title", "{passage.title}" }
                div { class: "timer",
                    span {
                        id: "timer-label",
                        class: if timer.expired { "timer__label timer__label--expired" } else { "timer__label" },
                        "{timer.label}"
                    }
                    button {
                        id: "timer-toggle",
                        class: "btn btn-secondary timer__toggle",
                        r#type: "button",
                        onclick: move |_| on_intent.call(PracticeIntent::ToggleTimer),
                        "{timer.button_label}"
                    }
                }
            }
            button {
                id: "passage-toggle",
                class: "passage-panel__toggle",
                r#type: "button",
                aria_expanded: "{passage.expanded}",
                onclick: move |_| on_intent.call(PracticeIntent::TogglePassage),
                span { "Reading Passage" }
                span { class: "passage-panel__chevron",
                    if passage.expanded { "▲" } else { "▼" }
                }
            }
            if passage.expanded {
                div { id: "{passage.anchor}", class: "{body_class}", role: "region",
                    for paragraph in passage.paragraphs.clone() {
                        div { key: "{paragraph.label}", class: "passage-paragraph",
                            span { class: "passage-paragraph__label", "{paragraph.label}" }
                            p { class: "passage-paragraph__text",
                                for (index, segment) in paragraph.segments.into_iter().enumerate() {
                                    PassageSegment { key: "{index}", segment }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PassageSegment(segment: SegmentVm) -> Element {
    let Some(anchor) = segment.anchor else {
        return rsx! { span { "{segment.text}" } };
    };
    rsx! {
        span {
            id: "{anchor}",
            class: if segment.highlighted { "passage-anchor highlight-text" } else { "passage-anchor" },
            "{segment.text}"
        }
    }
}
