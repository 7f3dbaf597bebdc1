use dioxus::prelude::*;

use crate::content::{FAQS, PREP_TIPS, RELATED_PASSAGES, RelatedBand, TipGroup};

/// Study guide: preparation tips, an FAQ accordion and related passages.
#[component]
pub fn GuideView() -> Element {
    let mut open_faq = use_signal(|| None::<usize>);

    rsx! {
        div { class: "page guide-page",
            section { class: "guide-section",
                h2 { "IELTS Reading Preparation Tips" }
                div { class: "tip-grid",
                    for group in PREP_TIPS.iter().copied() {
                        TipCard { key: "{group.title}", group }
                    }
                }
            }
            section { class: "guide-section",
                h2 { "Frequently Asked Questions" }
                div { class: "faq-list",
                    for (index, faq) in FAQS.iter().enumerate() {
                        div { key: "{index}", class: "faq",
                            button {
                                class: "faq__question",
                                r#type: "button",
                                aria_expanded: "{open_faq() == Some(index)}",
                                onclick: move |_| {
                                    let next = if open_faq() == Some(index) { None } else { Some(index) };
                                    open_faq.set(next);
                                },
                                span { "{faq.question}" }
                                span { class: "faq__chevron",
                                    if open_faq() == Some(index) { "▲" } else { "▼" }
                                }
                            }
                            if open_faq() == Some(index) {
                                p { class: "faq__answer", "{faq.answer}" }
                            }
                        }
                    }
                }
            }
            section { class: "guide-section",
                h2 { "Related Reading Passages" }
                div { class: "band-list",
                    for band in RELATED_PASSAGES.iter().copied() {
                        BandCard { key: "{band.band}", band }
                    }
                }
            }
        }
    }
}

#[component]
fn TipCard(group: TipGroup) -> Element {
    rsx! {
        div { class: "tip-card",
            h3 { class: "tip-card__title",
                span { class: "tip-card__glyph", "{group.icon.glyph()}" }
                "{group.title}"
            }
            ul {
                for tip in group.tips.iter() {
                    li { "{tip}" }
                }
            }
        }
    }
}

#[component]
fn BandCard(band: RelatedBand) -> Element {
    rsx! {
        div { class: "band-card",
            div { class: "band-card__header",
                h3 { "{band.band}" }
                span { class: "band-card__level", "{band.level}" }
                span { class: "band-card__minutes", "{band.minutes} min" }
            }
            ul { class: "band-card__passages",
                for passage in band.passages.iter() {
                    li {
                        h4 { "{passage.title}" }
                        p { "{passage.summary}" }
                    }
                }
            }
        }
    }
}
