use dioxus::prelude::*;

use crate::vm::{DetailCategoryVm, DetailItemVm, PracticeIntent};

#[component]
pub fn DetailedAnswers(details: Vec<DetailCategoryVm>, on_intent: Callback<PracticeIntent>) -> Element {
    rsx! {
        section { id: "detailed-answers", class: "detailed-answers",
            h2 { class: "detailed-answers__title", "Detailed Answers and Explanations" }
            for detail in details {
                DetailCategory { key: "{detail.kind}", detail, on_intent }
            }
        }
    }
}

#[component]
fn DetailCategory(detail: DetailCategoryVm, on_intent: Callback<PracticeIntent>) -> Element {
    let DetailCategoryVm {
        kind,
        title,
        glyph,
        open,
        tips,
        items,
    } = detail;
    rsx! {
        div { class: if open { "detail-category detail-category--open" } else { "detail-category" },
            button {
                class: "detail-category__toggle",
                r#type: "button",
                aria_expanded: "{open}",
                onclick: move |_| on_intent.call(PracticeIntent::ToggleDetails(kind)),
                span { class: "detail-category__glyph", "{glyph}" }
                h3 { class: "detail-category__title", "{title}" }
                span { class: "detail-category__chevron",
                    if open { "▲" } else { "▼" }
                }
            }
            if open {
                div { class: "detail-category__body",
                    div { class: "detail-tips",
                        h4 { "Tips for {title}" }
                        ul {
                            for tip in tips {
                                li { "{tip}" }
                            }
                        }
                    }
                    for (index, item) in items.into_iter().enumerate() {
                        DetailItem { key: "{index}", item, on_intent }
                    }
                }
            }
        }
    }
}

#[component]
fn DetailItem(item: DetailItemVm, on_intent: Callback<PracticeIntent>) -> Element {
    let anchor = item.anchor.clone();
    rsx! {
        div { class: "detail-item",
            p { class: "detail-item__heading", "{item.heading}" }
            p { class: "detail-item__answer", "{item.answer_label}" }
            p { class: "detail-item__explanation",
                strong { "Explanation: " }
                "{item.explanation}"
            }
            button {
                class: "detail-item__reference",
                r#type: "button",
                title: "Show in passage",
                onclick: move |_| on_intent.call(PracticeIntent::NavigateTo(anchor.clone())),
                strong { "{item.reference_label} " }
                span { "{item.reference_text}" }
            }
        }
    }
}
