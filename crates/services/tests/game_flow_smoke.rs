use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use quiz_core::model::{GameSettings, Question, TimerSettings};
use services::{GameController, GameLoopService, GamePhase, Outcome, Step, TransitionKind};
use storage::repository::{InMemoryRepository, QuestionRepository, StorageError};

fn build_questions() -> Vec<Question> {
    vec![
        Question::new(
            "Capital of France?",
            ["Berlin", "Madrid", "Rome"].map(String::from),
            "Paris",
        ),
        Question::new("Largest planet?", ["Mars", "Venus"].map(String::from), "Jupiter"),
        Question::new("2 + 2?", ["3", "5"].map(String::from), "4"),
    ]
}

fn wrong_option(controller: &GameController) -> String {
    let current = controller.current().expect("question presented");
    current
        .options()
        .iter()
        .find(|option| !current.is_correct(option))
        .cloned()
        .expect("question has a distractor")
}

fn timed(tick: Duration, countdown_secs: u32) -> GameSettings {
    GameSettings::classic()
        .with_timer(Some(TimerSettings::new(countdown_secs, tick).unwrap()))
        .with_feedback_delay(Duration::from_millis(10))
        .unwrap()
}

/// Sleep through scheduled transitions until the controller waits for input.
async fn run_until_settled(controller: &mut GameController, mut step: Step) {
    while let Some(scheduled) = step.scheduled() {
        tokio::time::sleep(scheduled.delay()).await;
        step = controller.fire(scheduled.token()).unwrap();
    }
}

#[tokio::test]
async fn correct_wrong_and_timeout_scores_one_of_three() {
    let repo = Arc::new(InMemoryRepository::with_questions(build_questions()));
    let loop_svc = GameLoopService::new(timed(Duration::from_secs(1), 10), repo).with_seed(9);
    let mut controller = loop_svc.new_controller();

    let step = loop_svc.start_game(&mut controller).await.unwrap();
    assert_eq!(controller.phase(), GamePhase::Presenting);
    assert_eq!(controller.total(), 3);
    let first_tick = step.scheduled().unwrap().token();
    assert_eq!(first_tick.kind(), TransitionKind::Tick);

    // Q1: correct.
    let advance = controller.select("Paris").unwrap().scheduled().unwrap();
    assert!(!controller.accepts_answers());
    assert!(controller.fire(first_tick).unwrap().is_ignored());
    let step = controller.fire(advance.token()).unwrap();
    assert_eq!(controller.current().unwrap().text(), "Largest planet?");

    // Q2: wrong.
    let wrong = wrong_option(&controller);
    let advance = controller.select(&wrong).unwrap().scheduled().unwrap();
    assert_eq!(controller.resolution().unwrap().outcome, Outcome::Incorrect);
    assert!(controller.fire(step.scheduled().unwrap().token()).unwrap().is_ignored());
    let mut step = controller.fire(advance.token()).unwrap();
    assert_eq!(controller.current().unwrap().text(), "2 + 2?");

    // Q3: let the countdown run out.
    for _ in 0..10 {
        step = controller.fire(step.scheduled().unwrap().token()).unwrap();
    }
    assert_eq!(controller.resolution().unwrap().outcome, Outcome::TimedOut);
    assert!(!controller.accepts_answers());
    let step = controller.fire(step.scheduled().unwrap().token()).unwrap();

    assert_eq!(step, Step::Settled);
    assert_eq!(controller.phase(), GamePhase::GameOver);
    let summary = controller.summary().unwrap();
    assert_eq!((summary.score(), summary.total()), (1, 3));
    assert_eq!(
        controller.message().text(),
        "Game Over! You scored 1 out of 3 questions."
    );
}

#[tokio::test]
async fn questions_are_presented_once_in_order() {
    let repo = Arc::new(InMemoryRepository::with_questions(build_questions()));
    let loop_svc = GameLoopService::new(GameSettings::classic(), repo);
    let mut controller = loop_svc.new_controller();
    loop_svc.start_game(&mut controller).await.unwrap();

    let mut seen = Vec::new();
    while controller.phase() == GamePhase::Presenting {
        let current = controller.current().unwrap();
        seen.push((current.number(), current.text().to_string()));
        let answer = current.answer().to_string();
        let advance = controller.select(&answer).unwrap().scheduled().unwrap();
        controller.fire(advance.token()).unwrap();
    }

    assert_eq!(
        seen,
        vec![
            (1, "Capital of France?".to_string()),
            (2, "Largest planet?".to_string()),
            (3, "2 + 2?".to_string()),
        ]
    );
    assert_eq!(controller.summary().unwrap().score(), 3);
}

#[tokio::test]
async fn restart_reloads_full_question_set() {
    let repo = Arc::new(InMemoryRepository::with_questions(build_questions()));
    let loop_svc = GameLoopService::new(GameSettings::classic(), repo);
    let mut controller = loop_svc.new_controller();
    loop_svc.start_game(&mut controller).await.unwrap();

    let advance = controller.select("Paris").unwrap().scheduled().unwrap();
    controller.fire(advance.token()).unwrap();
    while controller.phase() == GamePhase::Presenting {
        let wrong = wrong_option(&controller);
        let advance = controller.select(&wrong).unwrap().scheduled().unwrap();
        controller.fire(advance.token()).unwrap();
    }
    assert_eq!(controller.summary().unwrap().score(), 1);

    controller.restart().unwrap();
    assert_eq!(controller.phase(), GamePhase::Idle);
    assert_eq!(controller.score(), 0);

    loop_svc.start_game(&mut controller).await.unwrap();
    assert_eq!(controller.total(), 3);
    assert_eq!(controller.score(), 0);
    assert_eq!(controller.current().unwrap().number(), 1);
    assert_eq!(controller.current().unwrap().text(), "Capital of France?");
}

struct FlakyRepo {
    failures_left: AtomicUsize,
    inner: InMemoryRepository,
}

#[async_trait]
impl QuestionRepository for FlakyRepo {
    async fn load_questions(&self) -> Result<Vec<Question>, StorageError> {
        if self.failures_left.load(Ordering::SeqCst) > 0 {
            self.failures_left.fetch_sub(1, Ordering::SeqCst);
            return Err(StorageError::Connection("offline".to_string()));
        }
        self.inner.load_questions().await
    }
}

#[tokio::test]
async fn load_failure_leaves_idle_and_manual_retry_works() {
    let repo = Arc::new(FlakyRepo {
        failures_left: AtomicUsize::new(1),
        inner: InMemoryRepository::with_questions(build_questions()),
    });
    let loop_svc = GameLoopService::new(GameSettings::classic(), repo);
    let mut controller = loop_svc.new_controller();

    let step = loop_svc.start_game(&mut controller).await.unwrap();
    assert_eq!(step, Step::Settled);
    assert_eq!(controller.phase(), GamePhase::Idle);
    assert!(controller.phase().can_start());
    assert_eq!(
        controller.message().text(),
        "Failed to load the page. Please try again later! 😫"
    );

    loop_svc.start_game(&mut controller).await.unwrap();
    assert_eq!(controller.phase(), GamePhase::Presenting);
    assert_eq!(controller.total(), 3);
}

#[tokio::test]
async fn unanswered_timed_game_runs_to_zero_score() {
    let repo = Arc::new(InMemoryRepository::with_questions(build_questions()));
    let loop_svc = GameLoopService::new(timed(Duration::from_millis(10), 2), repo);
    let mut controller = loop_svc.new_controller();

    let mut step = loop_svc.start_game(&mut controller).await.unwrap();
    for number in 1..=3 {
        assert_eq!(controller.current().unwrap().number(), number);
        run_until_settled_or_answered(&mut controller, &mut step).await;
        assert_eq!(controller.resolution().unwrap().outcome, Outcome::TimedOut);
        assert!(controller.resolution().unwrap().selected.is_none());
        let advance = step.scheduled().unwrap();
        tokio::time::sleep(advance.delay()).await;
        step = controller.fire(advance.token()).unwrap();
    }

    assert_eq!(controller.phase(), GamePhase::GameOver);
    assert_eq!(controller.summary().unwrap().score(), 0);
    assert_eq!(controller.summary().unwrap().total(), 3);
}

/// Fire ticks until the current question is resolved, leaving `step` on the
/// pending advance.
async fn run_until_settled_or_answered(controller: &mut GameController, step: &mut Step) {
    while controller.phase() == GamePhase::Presenting {
        let scheduled = step.scheduled().expect("tick scheduled");
        tokio::time::sleep(scheduled.delay()).await;
        *step = controller.fire(scheduled.token()).unwrap();
    }
}

#[tokio::test]
async fn empty_question_set_goes_straight_to_game_over() {
    let repo = Arc::new(InMemoryRepository::new());
    let loop_svc = GameLoopService::new(GameSettings::timed(), repo);
    let mut controller = loop_svc.new_controller();

    let step = loop_svc.start_game(&mut controller).await.unwrap();
    run_until_settled(&mut controller, step).await;
    assert_eq!(controller.phase(), GamePhase::GameOver);
    assert_eq!(controller.summary().unwrap().total(), 0);
}
