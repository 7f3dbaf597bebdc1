use dioxus::prelude::{ReadableExt, WritableExt};
use quiz_core::model::{AnchorId, QuestionId, QuestionKind, SessionSettings};

use crate::vm::PracticeIntent;

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_settings};

#[tokio::test(flavor = "current_thread")]
async fn practice_view_smoke_renders_passage_and_questions() {
    let mut harness = setup_view_harness(ViewKind::Practice);
    harness.rebuild();
    let html = harness.render();

    for expected in [
        "Glaciers Reading Passage",
        "Paragraph A",
        "id=\"para-all\"",
        "id=\"para-a-1\"",
        "True/False",
        "Multiple",
        "Fill",
        "20:00",
        "Start",
        "1. According to paragraph A",
        "Check Answers",
        "Detailed Answers and Explanations",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(!html.contains("Your Score"));
    assert!(!html.contains("highlight-text"));
}

#[tokio::test(flavor = "current_thread")]
async fn practice_view_smoke_reveal_shows_score_and_feedback() {
    let mut harness = setup_view_harness(ViewKind::Practice);
    harness.rebuild();
    let dispatch = harness.practice().dispatch();

    dispatch.call(PracticeIntent::SetAnswer(QuestionId::new(1), "True".to_string()));
    dispatch.call(PracticeIntent::Reveal);
    harness.drive();
    let html = harness.render();

    assert!(html.contains("Your Score: 1 / 16"), "missing score in {html}");
    assert!(html.contains("Correct answer: "));
    assert!(html.contains("feedback--correct"));
    assert!(html.contains("feedback--incorrect"));
    assert!(html.contains("score-breakdown"));
}

#[tokio::test(flavor = "current_thread")]
async fn practice_view_smoke_reference_highlight_appears_and_clears() {
    let mut harness = setup_view_harness(ViewKind::Practice);
    harness.rebuild();
    let dispatch = harness.practice().dispatch();
    let mut session = harness.practice().session();

    dispatch.call(PracticeIntent::ToggleDetails(QuestionKind::TrueFalse));
    harness.drive();
    let html = harness.render();
    assert!(html.contains("Tips for True/False Questions"), "missing tips in {html}");
    assert!(html.contains("Question 1: According to paragraph A"));

    dispatch.call(PracticeIntent::TogglePassage);
    harness.drive();
    assert!(!harness.render().contains("id=\"para-d-2\""));

    dispatch.call(PracticeIntent::NavigateTo(AnchorId::new("para-d-2")));
    harness.drive();
    let html = harness.render();
    assert!(html.contains("id=\"para-d-2\""), "passage not expanded in {html}");
    assert_eq!(html.matches("highlight-text").count(), 1);

    {
        let mut session = session.write();
        session.clock_mut().advance_millis(2_000);
        session.poll_navigation();
        session.poll_navigation();
    }
    harness.drive();
    assert!(!harness.render().contains("highlight-text"));
}

#[tokio::test(flavor = "current_thread")]
async fn practice_view_smoke_matching_stepper_walks_descriptions() {
    let mut harness = setup_view_harness(ViewKind::Practice);
    harness.rebuild();
    let dispatch = harness.practice().dispatch();

    dispatch.call(PracticeIntent::SelectKind(QuestionKind::Matching));
    harness.drive();
    let html = harness.render();
    assert!(html.contains("Description 1 of 5"), "missing stepper in {html}");
    assert!(html.contains("A. Formation Process"));

    dispatch.call(PracticeIntent::NextMatch);
    harness.drive();
    assert!(harness.render().contains("Description 2 of 5"));

    dispatch.call(PracticeIntent::GoToMatch(4));
    harness.drive();
    assert!(harness.render().contains("Description 5 of 5"));
}

#[tokio::test(flavor = "current_thread")]
async fn practice_view_smoke_timer_toggles_and_ticks() {
    let settings = SessionSettings::default()
        .with_timer_start_secs(61)
        .expect("valid timer");
    let mut harness = setup_view_harness_with_settings(ViewKind::Practice, settings);
    harness.rebuild();
    assert!(harness.render().contains("1:01"));

    let dispatch = harness.practice().dispatch();
    let mut session = harness.practice().session();

    dispatch.call(PracticeIntent::ToggleTimer);
    harness.drive();
    assert!(harness.render().contains("Pause"));

    session.write().tick_timer();
    harness.drive();
    assert!(harness.render().contains("1:00"));

    dispatch.call(PracticeIntent::ToggleTimer);
    harness.drive();
    let html = harness.render();
    assert!(html.contains("Start"));
    assert!(html.contains("1:00"));
}

#[tokio::test(flavor = "current_thread")]
async fn practice_view_smoke_instructions_toggle() {
    let mut harness = setup_view_harness(ViewKind::Practice);
    harness.rebuild();
    assert!(!harness.render().contains("Read each statement carefully"));

    harness
        .practice()
        .dispatch()
        .call(PracticeIntent::ToggleInstructions);
    harness.drive();
    assert!(harness.render().contains("Read each statement carefully"));
}

#[tokio::test(flavor = "current_thread")]
async fn guide_view_smoke_renders_sections() {
    let mut harness = setup_view_harness(ViewKind::Guide);
    harness.rebuild();
    let html = harness.render();

    for expected in [
        "IELTS Reading Preparation Tips",
        "Time Management",
        "Frequently Asked Questions",
        "How long is the IELTS Reading test?",
        "Band 8-9",
        "Flying Tortoises",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(!html.contains("lasts for 60 minutes"));
}

#[tokio::test(flavor = "current_thread")]
async fn practice_session_survives_trip_to_guide() {
    let mut harness = setup_view_harness(ViewKind::Practice);
    harness.rebuild();
    let dispatch = harness.practice().dispatch();
    let session = harness.practice().session();

    dispatch.call(PracticeIntent::SetAnswer(QuestionId::new(1), "True".to_string()));
    dispatch.call(PracticeIntent::Reveal);
    harness.drive();

    harness.show(ViewKind::Guide);
    let html = harness.render();
    assert!(html.contains("IELTS Reading Preparation Tips"));
    assert!(!html.contains("Your Score"));

    harness.show(ViewKind::Practice);
    assert_eq!(session.read().answer(QuestionId::new(1)), "True");
    assert!(session.read().is_revealed());
    assert!(harness.practice().session() == session);
    let html = harness.render();
    assert!(html.contains("Your Score: 1 / 16"), "missing score in {html}");
}
