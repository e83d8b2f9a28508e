use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use clap::builder::BoolishValueParser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::{GameSettings, TimerSettings};
use services::GameLoopService;
use storage::repository::Storage;
use ui::{App, UiApp, build_app_context};

const TITLE: &str = "Quiz";

#[derive(Parser, Debug)]
#[command(name = "quiz", about = "Multiple-choice quiz game")]
struct Args {
    /// Path or http(s) URL of the JSON question set.
    #[arg(long, env = "QUIZ_QUESTIONS", default_value = "file.json")]
    questions: String,

    /// Give every question a countdown. The env var accepts 1/0, yes/no,
    /// on/off and true/false.
    #[arg(long, env = "QUIZ_TIMER", value_parser = BoolishValueParser::new())]
    timer: bool,

    /// Countdown length in seconds when the timer is on.
    #[arg(long, env = "QUIZ_COUNTDOWN_SECS", default_value_t = 10)]
    countdown_secs: u32,

    /// Pause after an answer before moving on.
    #[arg(long, env = "QUIZ_FEEDBACK_DELAY_MS", default_value_t = 2000)]
    feedback_delay_ms: u64,
}

impl Args {
    fn settings(&self) -> anyhow::Result<GameSettings> {
        let timer = if self.timer {
            Some(
                TimerSettings::new(self.countdown_secs, Duration::from_secs(1))
                    .context("invalid --countdown-secs")?,
            )
        } else {
            None
        };
        GameSettings::new(timer, Duration::from_millis(self.feedback_delay_ms))
            .context("invalid --feedback-delay-ms")
    }
}

struct DesktopApp {
    game_loop: Arc<GameLoopService>,
}

impl UiApp for DesktopApp {
    fn title(&self) -> String {
        TITLE.to_string()
    }

    fn game_loop(&self) -> Arc<GameLoopService> {
        Arc::clone(&self.game_loop)
    }
}

fn run() -> anyhow::Result<()> {
    let args = Args::parse();
    let settings = args.settings()?;
    log::info!(
        "questions from {} (timer: {}, feedback delay: {:?})",
        args.questions,
        settings.timer_enabled(),
        settings.feedback_delay()
    );

    let storage = Storage::from_location(&args.questions);
    let game_loop = Arc::new(GameLoopService::new(settings, storage.questions));
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { game_loop });
    let context = build_app_context(&app);

    // Some dev setups default tao windows to always-on-top.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(TITLE)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        log::error!("{err:#}");
        eprintln!("{err:#}");
        std::process::exit(2);
    }
}
