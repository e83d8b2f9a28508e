use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::model::{GameSettings, Question};
use services::GameLoopService;
use storage::repository::{InMemoryRepository, QuestionRepository};

use crate::context::{UiApp, build_app_context};
use crate::views::QuizView;
use crate::views::quiz::QuizTestHandles;

struct TestApp {
    game_loop: Arc<GameLoopService>,
}

impl UiApp for TestApp {
    fn title(&self) -> String {
        "Quiz".to_string()
    }

    fn game_loop(&self) -> Arc<GameLoopService> {
        Arc::clone(&self.game_loop)
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: QuizTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn QuizHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { QuizView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: QuizTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drive the dom until the rendered html contains `needle`, up to a
    /// bounded number of rounds.
    pub async fn drive_until(&mut self, needle: &str) -> String {
        for _ in 0..40 {
            let html = self.render();
            if html.contains(needle) {
                return html;
            }
            self.drive_async().await;
        }
        self.render()
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub fn send(&mut self, intent: crate::vm::QuizIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn sample_questions() -> Vec<Question> {
    vec![
        Question::new(
            "Capital of France?",
            ["Berlin", "Madrid"].map(String::from),
            "Paris",
        ),
        Question::new("2 + 2 = ?", ["3", "5"].map(String::from), "4"),
    ]
}

pub fn quick_settings() -> GameSettings {
    GameSettings::classic()
        .with_feedback_delay(Duration::from_millis(10))
        .expect("valid delay")
}

pub fn setup_view_harness(settings: GameSettings) -> ViewHarness {
    let repo = Arc::new(InMemoryRepository::with_questions(sample_questions()));
    setup_view_harness_with_repo(settings, repo)
}

pub fn setup_view_harness_with_repo(
    settings: GameSettings,
    repo: Arc<dyn QuestionRepository>,
) -> ViewHarness {
    let game_loop = Arc::new(GameLoopService::new(settings, repo).with_seed(11));
    let handles = QuizTestHandles::default();
    let dom = VirtualDom::new_with_props(
        QuizHarness,
        ViewHarnessProps {
            app: Arc::new(TestApp { game_loop }),
            handles: handles.clone(),
        },
    );
    let mut harness = ViewHarness { dom, handles };
    harness.rebuild();
    harness
}
