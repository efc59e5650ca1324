use reveal_core::session::Phase;

use super::test_harness::setup_show_harness;
use crate::vm::ShowIntent;

fn phase_of(harness: &super::test_harness::ViewHarness) -> Phase {
    let vm = harness.handles.vm();
    let guard = vm.read();
    guard.as_ref().expect("vm present").phase()
}

#[tokio::test(flavor = "current_thread")]
async fn idle_screen_shows_prompt_hint_and_open_slots() {
    let mut harness = setup_show_harness(&["cat", "dog"]);
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Type cat"), "missing prompt in {html}");
    assert!(
        html.contains("Type the answer to play the video."),
        "missing hint in {html}"
    );
    // One open slot per secret character; the harness prompt has no '?'.
    assert_eq!(html.matches('?').count(), 3, "expected 3 open slots in {html}");
    assert!(html.contains("Slide 1 / 2"), "missing progress in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn typing_fills_slots_and_a_wrong_key_clears_them() {
    let mut harness = setup_show_harness(&["cat"]);
    harness.rebuild();

    harness.type_word("ca").await;
    let html = harness.render();
    assert_eq!(
        html.matches("letter-slot--filled").count(),
        2,
        "expected 2 filled slots in {html}"
    );
    assert_eq!(phase_of(&harness), Phase::Idle);

    harness.dispatch(ShowIntent::Key("x".to_string())).await;
    let html = harness.render();
    assert_eq!(
        html.matches("letter-slot--filled").count(),
        0,
        "expected reset slots in {html}"
    );
    assert_eq!(phase_of(&harness), Phase::Idle);
}

#[tokio::test(flavor = "current_thread")]
async fn completing_the_secret_switches_to_playing_with_a_skip_control() {
    let mut harness = setup_show_harness(&["cat", "dog"]);
    harness.rebuild();

    harness.type_word("cat").await;
    assert_eq!(phase_of(&harness), Phase::Playing);

    let html = harness.render();
    assert!(html.contains("show-skip"), "missing skip control in {html}");
    assert!(!html.contains("Type the answer"), "idle overlay still up in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn skipping_a_non_final_slide_advances_to_the_next_prompt() {
    let mut harness = setup_show_harness(&["cat", "dog"]);
    harness.rebuild();

    harness.type_word("cat").await;
    harness.dispatch(ShowIntent::Skip).await;

    assert_eq!(phase_of(&harness), Phase::Idle);
    let html = harness.render();
    assert!(html.contains("Type dog"), "missing next prompt in {html}");
    assert!(html.contains("Slide 2 / 2"), "missing progress in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn finishing_the_last_slide_shows_the_completed_screen() {
    let mut harness = setup_show_harness(&["cat", "dog"]);
    harness.rebuild();

    harness.type_word("cat").await;
    harness.dispatch(ShowIntent::PlaybackEnded).await;
    harness.type_word("dog").await;
    harness.dispatch(ShowIntent::PlaybackEnded).await;

    assert_eq!(phase_of(&harness), Phase::Completed);
    let html = harness.render();
    assert!(html.contains("all, folks"), "missing completion title in {html}");
    assert!(html.contains("Start Over"), "missing restart control in {html}");
    assert!(
        html.contains("2 slides unlocked with 6 keystrokes"),
        "missing run summary in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn restart_returns_to_the_first_slide() {
    let mut harness = setup_show_harness(&["cat", "dog"]);
    harness.rebuild();

    harness.type_word("cat").await;
    harness.dispatch(ShowIntent::PlaybackEnded).await;
    harness.type_word("dog").await;
    harness.dispatch(ShowIntent::PlaybackEnded).await;
    harness.dispatch(ShowIntent::Restart).await;

    assert_eq!(phase_of(&harness), Phase::Idle);
    let html = harness.render();
    assert!(html.contains("Type cat"), "missing first prompt in {html}");
    assert!(html.contains("Slide 1 / 2"), "missing progress in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn keys_are_ignored_while_playing() {
    let mut harness = setup_show_harness(&["cat", "dog"]);
    harness.rebuild();

    harness.type_word("cat").await;
    harness.type_word("dog").await;

    // Still playing the first slide; the stray keys changed nothing.
    assert_eq!(phase_of(&harness), Phase::Playing);
    let vm = harness.handles.vm();
    let guard = vm.read();
    assert_eq!(guard.as_ref().expect("vm present").slide_index(), 0);
}
