use dioxus::prelude::*;
use quiz_core::model::QuestionId;

use crate::vm::{
    AnswerInputVm, CategoryTabVm, ChoiceVm, FeedbackVm, KindScoreVm, MatchingStepVm,
    PracticeIntent, QuestionVm,
};

#[component]
pub fn QuestionPanel(
    tabs: Vec<CategoryTabVm>,
    questions: Vec<QuestionVm>,
    instructions: Option<String>,
    score: Option<String>,
    breakdown: Vec<KindScoreVm>,
    on_intent: Callback<PracticeIntent>,
) -> Element {
    rsx! {
        section { id: "practice-questions", class: "question-panel",
            div { class: "question-panel__header",
                h2 { class: "question-panel__title", "Practice Questions" }
                button {
                    id: "instructions-toggle",
                    class: "icon-btn",
                    r#type: "button",
                    title: "Show instructions",
                    aria_label: "Show instructions",
                    onclick: move |_| on_intent.call(PracticeIntent::ToggleInstructions),
                    "?"
                }
            }
            if let Some(text) = instructions {
                div { class: "question-panel__instructions",
                    p { "{text}" }
                }
            }
            nav { class: "category-tabs", role: "tablist",
                for tab in tabs {
                    CategoryTab { key: "{tab.kind}", tab, on_intent }
                }
            }
            div { class: "question-list",
                for question in questions {
                    QuestionCard { key: "{question.id}", question, on_intent }
                }
            }
            div { class: "question-panel__footer",
                button {
                    id: "check-answers",
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| on_intent.call(PracticeIntent::Reveal),
                    "Check Answers"
                }
                if let Some(score) = score {
                    p { id: "score-label", class: "question-panel__score", "{score}" }
                }
            }
            if !breakdown.is_empty() {
                ul { class: "score-breakdown",
                    for entry in breakdown {
                        li { key: "{entry.label}",
                            span { class: "score-breakdown__label", "{entry.label}" }
                            span { class: "score-breakdown__value", "{entry.score}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CategoryTab(tab: CategoryTabVm, on_intent: Callback<PracticeIntent>) -> Element {
    let kind = tab.kind;
    rsx! {
        button {
            class: if tab.active { "category-tab category-tab--active" } else { "category-tab" },
            r#type: "button",
            role: "tab",
            aria_selected: "{tab.active}",
            onclick: move |_| on_intent.call(PracticeIntent::SelectKind(kind)),
            span { class: "category-tab__glyph", "{tab.glyph}" }
            span { "{tab.label}" }
        }
    }
}

#[component]
fn QuestionCard(question: QuestionVm, on_intent: Callback<PracticeIntent>) -> Element {
    let QuestionVm {
        id,
        prompt,
        input,
        feedback,
    } = question;
    let group = format!("question-{id}");

    rsx! {
        div { class: "question-card",
            p { class: "question-card__prompt", "{prompt}" }
            match input {
                AnswerInputVm::Choices(choices) => rsx! {
                    div { class: "choice-list",
                        for choice in choices {
                            ChoiceOption {
                                key: "{choice.value}",
                                group: group.clone(),
                                choice,
                                on_select: move |value: String| on_intent.call(PracticeIntent::SetAnswer(id, value)),
                            }
                        }
                    }
                },
                AnswerInputVm::Text(value) => rsx! {
                    input {
                        class: "blank-input",
                        r#type: "text",
                        placeholder: "Type your answer here...",
                        value: "{value}",
                        oninput: move |evt| on_intent.call(PracticeIntent::SetAnswer(id, evt.value())),
                    }
                },
                AnswerInputVm::Matching(Some(step)) => rsx! {
                    MatchingStepper { question_id: id, step, on_intent }
                },
                AnswerInputVm::Matching(None) => rsx! {},
            }
            if let Some(feedback) = feedback {
                Feedback { feedback }
            }
        }
    }
}

#[component]
fn ChoiceOption(group: String, choice: ChoiceVm, on_select: Callback<String>) -> Element {
    let value = choice.value.clone();
    rsx! {
        label { class: if choice.selected { "choice choice--selected" } else { "choice" },
            input {
                r#type: "radio",
                name: "{group}",
                value: "{choice.value}",
                checked: choice.selected,
                onchange: move |_| on_select.call(value.clone()),
            }
            span { class: "choice__label", "{choice.label}" }
        }
    }
}

#[component]
fn MatchingStepper(
    question_id: QuestionId,
    step: MatchingStepVm,
    on_intent: Callback<PracticeIntent>,
) -> Element {
    let MatchingStepVm {
        position_label,
        description,
        items,
        dots,
        can_previous,
        can_next,
    } = step;
    let group = format!("matching-{question_id}");
    let dots: Vec<(usize, String, &'static str)> = dots
        .iter()
        .enumerate()
        .map(|(index, active)| {
            let class = if *active { "matching__dot matching__dot--active" } else { "matching__dot" };
            (index, format!("Go to description {}", index + 1), class)
        })
        .collect();

    rsx! {
        div { class: "matching",
            div { class: "matching__instructions",
                h4 { "Instructions:" }
                p { "Match each description with the correct paragraph heading (A-E)." }
            }
            p { id: "matching-position", class: "matching__position", "{position_label}" }
            p { class: "matching__description", "{description}" }
            p { class: "matching__prompt", "Select the matching paragraph:" }
            div { class: "choice-list",
                for item in items {
                    ChoiceOption {
                        key: "{item.value}",
                        group: group.clone(),
                        choice: item,
                        on_select: move |label: String| on_intent.call(PracticeIntent::ChooseMatch(label)),
                    }
                }
            }
            div { class: "matching__nav",
                button {
                    id: "match-previous",
                    class: "btn btn-secondary",
                    r#type: "button",
                    disabled: !can_previous,
                    onclick: move |_| on_intent.call(PracticeIntent::PreviousMatch),
                    "Previous"
                }
                div { class: "matching__dots",
                    for (index, label, class) in dots {
                        button {
                            key: "{index}",
                            class: "{class}",
                            r#type: "button",
                            aria_label: "{label}",
                            onclick: move |_| on_intent.call(PracticeIntent::GoToMatch(index)),
                        }
                    }
                }
                button {
                    id: "match-next",
                    class: "btn btn-secondary",
                    r#type: "button",
                    disabled: !can_next,
                    onclick: move |_| on_intent.call(PracticeIntent::NextMatch),
                    "Next"
                }
            }
        }
    }
}

#[component]
fn Feedback(feedback: FeedbackVm) -> Element {
    rsx! {
        div { class: if feedback.correct { "feedback feedback--correct" } else { "feedback feedback--incorrect" },
            p {
                span { class: "feedback__label", "Correct answer: " }
                span { class: "feedback__answer", "{feedback.answer}" }
            }
            if !feedback.explanation.is_empty() {
                p { class: "feedback__explanation", "{feedback.explanation}" }
            }
        }
    }
}
