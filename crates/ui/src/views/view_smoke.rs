use std::sync::Arc;

use dioxus::prelude::ReadableExt;

use quiz_core::model::{GameSettings, Question};
use services::GamePhase;
use storage::repository::{QuestionRepository, StorageError};

use super::test_harness::{quick_settings, setup_view_harness, setup_view_harness_with_repo};
use crate::vm::QuizIntent;

#[tokio::test(flavor = "current_thread")]
async fn idle_view_shows_start_button() {
    let harness = setup_view_harness(quick_settings());
    let html = harness.render();
    assert!(html.contains("Good luck!"), "missing greeting in {html}");
    assert!(html.contains("quiz-start"), "missing start button in {html}");
    assert!(!html.contains("quiz-restart"), "unexpected restart in {html}");
    assert!(!html.contains("quiz-question"), "unexpected question in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn start_presents_first_question() {
    let mut harness = setup_view_harness(quick_settings());
    harness.send(QuizIntent::Start);
    let html = harness.drive_until("Question 1 of 2").await;

    assert!(html.contains("Question 1 of 2"), "missing progress in {html}");
    assert!(html.contains("Capital of France?"), "missing question in {html}");
    for option in ["Berlin", "Madrid", "Paris"] {
        assert!(html.contains(option), "missing {option} in {html}");
    }
    assert!(!html.contains("quiz-start"), "start should be hidden in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn answer_shows_feedback_then_advances() {
    let mut harness = setup_view_harness(quick_settings());
    harness.send(QuizIntent::Start);
    harness.drive_until("Question 1 of 2").await;

    harness.send(QuizIntent::Select("Berlin".to_string()));
    let html = harness.render();
    assert!(
        html.contains("Wrong answer 😢 The correct answer was: Paris"),
        "missing feedback in {html}"
    );
    let phase = harness
        .dom
        .in_runtime(|| harness.handles.vm().read().phase());
    assert_eq!(phase, GamePhase::Answered);

    let html = harness.drive_until("Question 2 of 2").await;
    assert!(html.contains("2 + 2 = ?"), "missing second question in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn full_game_reaches_game_over_and_restarts() {
    let mut harness = setup_view_harness(quick_settings());
    harness.send(QuizIntent::Start);
    harness.drive_until("Question 1 of 2").await;
    harness.send(QuizIntent::Select("Paris".to_string()));
    harness.drive_until("Question 2 of 2").await;
    harness.send(QuizIntent::Select("4".to_string()));

    let html = harness
        .drive_until("Game Over! You scored 2 out of 2 questions.")
        .await;
    assert!(
        html.contains("Game Over! You scored 2 out of 2 questions."),
        "missing summary in {html}"
    );
    assert!(html.contains("quiz-restart"), "missing restart in {html}");

    harness.send(QuizIntent::Restart);
    let html = harness.render();
    assert!(html.contains("quiz-start"), "missing start after restart in {html}");
    assert!(!html.contains("quiz-restart"), "restart still shown in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn timed_game_shows_countdown() {
    let mut harness = setup_view_harness(GameSettings::timed());
    harness.send(QuizIntent::Start);
    let html = harness.drive_until("Time left: 10s").await;
    assert!(html.contains("quiz-timer"), "missing timer in {html}");
}

struct FailingRepo;

#[async_trait::async_trait]
impl QuestionRepository for FailingRepo {
    async fn load_questions(&self) -> Result<Vec<Question>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn failed_load_shows_error_and_keeps_start() {
    let mut harness = setup_view_harness_with_repo(quick_settings(), Arc::new(FailingRepo));
    harness.send(QuizIntent::Start);
    let html = harness.drive_until("Failed to load the page").await;

    assert!(
        html.contains("Failed to load the page. Please try again later! 😫"),
        "missing load error in {html}"
    );
    assert!(html.contains("quiz-start"), "start should be available in {html}");
    assert!(!html.contains("quiz-question"), "unexpected question in {html}");
}
