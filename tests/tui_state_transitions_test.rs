use std::time::Duration;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};

use voicesite::cli::commands::start::LaunchOptions;
use voicesite::cli::tui::onboarding::app::App;
use voicesite::cli::tui::onboarding::events::AppEvent;
use voicesite::cli::tui::onboarding::state::{Focus, ScreenState};
use voicesite::config::SiteConfig;
use voicesite::onboarding::{BusinessType, FormField, IntakeTab, Language, Step};

fn options(skip_intake: bool, description: Option<&str>) -> LaunchOptions {
    LaunchOptions {
        description: description.map(str::to_string),
        language: Language::English,
        skip_intake,
        config: SiteConfig::default(),
    }
}

fn key(code: KeyCode) -> AppEvent {
    AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle(key(KeyCode::Char(c)));
    }
}

/// Let simulated time pass, then feed every delivered event to the app
async fn settle(app: &mut App, rx: &mut UnboundedReceiver<AppEvent>, millis: u64) {
    tokio::time::sleep(Duration::from_millis(millis)).await;
    tokio::task::yield_now().await;
    while let Ok(event) = rx.try_recv() {
        app.handle(event);
    }
}

fn step(app: &App) -> Step {
    app.screen()
        .as_wizard()
        .expect("wizard screen")
        .wizard
        .current_step()
}

#[tokio::test(start_paused = true)]
async fn test_intake_submit_mounts_wizard_after_delay() {
    let (tx, mut rx) = unbounded_channel();
    let mut app = App::new(options(false, None), tx);
    assert_eq!(app.screen().name(), "Intake");

    app.handle(key(KeyCode::Tab));
    assert_eq!(app.screen().as_intake().unwrap().intake.tab, IntakeTab::Text);
    type_text(&mut app, "Sweet shop");
    app.handle(key(KeyCode::Enter));
    assert!(app.screen().as_intake().unwrap().intake.is_loading);

    settle(&mut app, &mut rx, 500).await;
    assert_eq!(app.screen().name(), "Intake");

    settle(&mut app, &mut rx, 600).await;
    let wizard = &app.screen().as_wizard().unwrap().wizard;
    assert_eq!(wizard.current_step(), Step::Location);
    assert_eq!(wizard.form().business_description, "Sweet shop");
}

#[tokio::test(start_paused = true)]
async fn test_voice_tab_submits_empty_description() {
    let (tx, mut rx) = unbounded_channel();
    let mut app = App::new(options(false, None), tx);

    type_text(&mut app, "ignored");
    app.handle(key(KeyCode::Enter));
    settle(&mut app, &mut rx, 1100).await;

    let wizard = &app.screen().as_wizard().unwrap().wizard;
    assert_eq!(wizard.form().business_description, "");
}

#[tokio::test(start_paused = true)]
async fn test_skip_intake_opens_wizard() {
    let (tx, _rx) = unbounded_channel();
    let app = App::new(options(true, Some("Fruit stall")), tx);

    let wizard = &app.screen().as_wizard().unwrap().wizard;
    assert_eq!(wizard.current_step(), Step::Location);
    assert_eq!(wizard.form().business_description, "Fruit stall");
}

#[tokio::test(start_paused = true)]
async fn test_location_suggestion_selects_and_advances() {
    let (tx, mut rx) = unbounded_channel();
    let mut app = App::new(options(true, None), tx);

    type_text(&mut app, "Hyd");
    assert!(app.screen().as_wizard().unwrap().wizard.state().is_loading);

    settle(&mut app, &mut rx, 350).await;
    let screen = app.screen().as_wizard().unwrap();
    assert!(!screen.wizard.state().is_loading);
    assert_eq!(
        screen.wizard.state().location_suggestions,
        vec!["Hyderabad, Telangana".to_string()]
    );
    assert_eq!(screen.suggestion_index, None);

    app.handle(key(KeyCode::Down));
    assert_eq!(app.screen().as_wizard().unwrap().suggestion_index, Some(0));
    app.handle(key(KeyCode::Enter));
    let screen = app.screen().as_wizard().unwrap();
    assert_eq!(screen.wizard.current_step(), Step::BusinessDetails);
    assert_eq!(screen.wizard.form().location, "Hyderabad, Telangana");
    assert_eq!(screen.focus, Focus::Field(FormField::BusinessName));
}

#[tokio::test(start_paused = true)]
async fn test_enter_keeps_typed_location_over_suggestions() {
    let (tx, mut rx) = unbounded_channel();
    let mut app = App::new(options(true, None), tx);

    type_text(&mut app, "Pune");
    settle(&mut app, &mut rx, 350).await;
    assert_eq!(
        app.screen().as_wizard().unwrap().wizard.state().location_suggestions,
        vec!["Pune, Maharashtra".to_string()]
    );

    app.handle(key(KeyCode::Enter));
    let screen = app.screen().as_wizard().unwrap();
    assert_eq!(screen.wizard.current_step(), Step::BusinessDetails);
    assert_eq!(screen.wizard.form().location, "Pune");
    assert!(screen.wizard.state().location_suggestions.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_moving_up_from_first_suggestion_keeps_typed_location() {
    let (tx, mut rx) = unbounded_channel();
    let mut app = App::new(options(true, None), tx);

    type_text(&mut app, "Hyd");
    settle(&mut app, &mut rx, 350).await;
    app.handle(key(KeyCode::Down));
    app.handle(key(KeyCode::Up));
    app.handle(key(KeyCode::Enter));

    assert_eq!(step(&app), Step::BusinessDetails);
    assert_eq!(app.screen().as_wizard().unwrap().wizard.form().location, "Hyd");
}

#[tokio::test(start_paused = true)]
async fn test_short_query_never_looks_up() {
    let (tx, mut rx) = unbounded_channel();
    let mut app = App::new(options(true, None), tx);

    type_text(&mut app, "Hy");
    settle(&mut app, &mut rx, 1000).await;

    let state = app.screen().as_wizard().unwrap().wizard.state();
    assert!(!state.is_loading);
    assert!(state.location_suggestions.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_shortening_query_discards_pending_lookup() {
    let (tx, mut rx) = unbounded_channel();
    let mut app = App::new(options(true, None), tx);

    type_text(&mut app, "Mum");
    settle(&mut app, &mut rx, 100).await;
    app.handle(key(KeyCode::Backspace));
    settle(&mut app, &mut rx, 1000).await;

    let state = app.screen().as_wizard().unwrap().wizard.state();
    assert!(!state.is_loading);
    assert!(state.location_suggestions.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_latest_query_wins() {
    let (tx, mut rx) = unbounded_channel();
    let mut app = App::new(options(true, None), tx);

    type_text(&mut app, "Che");
    settle(&mut app, &mut rx, 100).await;
    for _ in 0..3 {
        app.handle(key(KeyCode::Backspace));
    }
    type_text(&mut app, "Pun");
    settle(&mut app, &mut rx, 1000).await;

    let state = app.screen().as_wizard().unwrap().wizard.state();
    assert_eq!(state.location_suggestions, vec!["Pune, Maharashtra".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn test_empty_location_blocks_advance() {
    let (tx, _rx) = unbounded_channel();
    let mut app = App::new(options(true, None), tx);

    app.handle(key(KeyCode::Enter));
    assert_eq!(step(&app), Step::Location);
    assert!(app.screen().as_wizard().unwrap().status.is_some());

    app.handle(key(KeyCode::Esc));
    assert_eq!(app.screen().name(), "Intake");
}

#[tokio::test(start_paused = true)]
async fn test_business_details_require_name_and_type() {
    let (tx, _rx) = unbounded_channel();
    let mut app = App::new(options(true, None), tx);

    type_text(&mut app, "X");
    app.handle(key(KeyCode::Enter));
    assert_eq!(step(&app), Step::BusinessDetails);

    type_text(&mut app, "Ramu Fruit Stall");
    app.handle(key(KeyCode::Enter));
    assert_eq!(step(&app), Step::BusinessDetails);

    app.handle(key(KeyCode::Tab));
    app.handle(key(KeyCode::Right));
    app.handle(key(KeyCode::Right));
    assert_eq!(
        app.screen().as_wizard().unwrap().wizard.form().business_type,
        Some(BusinessType::Fruit)
    );
    app.handle(key(KeyCode::Enter));
    assert_eq!(step(&app), Step::Products);

    app.handle(key(KeyCode::Esc));
    assert_eq!(step(&app), Step::BusinessDetails);
}

#[tokio::test(start_paused = true)]
async fn test_full_flow_generates_website() {
    let (tx, mut rx) = unbounded_channel();
    let mut app = App::new(options(true, Some("Fresh fruit every morning")), tx);

    type_text(&mut app, "Hyd");
    settle(&mut app, &mut rx, 350).await;
    app.handle(key(KeyCode::Down));
    app.handle(key(KeyCode::Enter));

    type_text(&mut app, "Ramu Fruit Stall");
    app.handle(key(KeyCode::Tab));
    app.handle(key(KeyCode::Right));
    app.handle(key(KeyCode::Right));
    app.handle(key(KeyCode::Enter));

    type_text(&mut app, "Mangoes, Bananas");
    app.handle(key(KeyCode::Enter));
    assert_eq!(step(&app), Step::ContactInfo);

    type_text(&mut app, "9876543210");
    app.handle(key(KeyCode::Enter));
    assert_eq!(step(&app), Step::ContactInfo);
    assert!(!app.screen().as_wizard().unwrap().wizard.state().is_generating);

    app.handle(key(KeyCode::Tab));
    type_text(&mut app, "ramu@example.com");
    app.handle(key(KeyCode::Enter));
    assert!(app.screen().as_wizard().unwrap().wizard.state().is_generating);

    // Keys are ignored while generating
    app.handle(key(KeyCode::Esc));
    assert_eq!(step(&app), Step::ContactInfo);

    settle(&mut app, &mut rx, 2100).await;
    let state = app.screen().as_wizard().unwrap().wizard.state();
    assert_eq!(
        state.website_url.as_deref(),
        Some("https://voicesite.in/ramu-fruit-stall")
    );
    assert!(state.is_generating);
    assert!(!state.email_sent);

    settle(&mut app, &mut rx, 1600).await;
    let state = app.screen().as_wizard().unwrap().wizard.state();
    assert!(state.email_sent);
    assert!(!state.is_generating);
    assert_eq!(state.current_step, Step::CreateWebsite);

    app.handle(key(KeyCode::Enter));
    assert!(app.should_quit());
}

#[tokio::test(start_paused = true)]
async fn test_leaving_wizard_drops_pending_results() {
    let (tx, mut rx) = unbounded_channel();
    let mut app = App::new(options(true, None), tx);

    type_text(&mut app, "Del");
    app.handle(key(KeyCode::Esc));
    assert_eq!(app.screen().name(), "Intake");

    settle(&mut app, &mut rx, 1000).await;
    assert!(matches!(app.screen(), ScreenState::Intake(_)));
}

#[tokio::test(start_paused = true)]
async fn test_ctrl_b_returns_to_intake_from_middle_step() {
    let (tx, _rx) = unbounded_channel();
    let mut app = App::new(options(true, None), tx);

    type_text(&mut app, "X");
    app.handle(key(KeyCode::Enter));
    assert_eq!(step(&app), Step::BusinessDetails);

    app.handle(AppEvent::Key(KeyEvent::new(KeyCode::Char('b'), KeyModifiers::CONTROL)));
    assert_eq!(app.screen().name(), "Intake");
}

#[tokio::test(start_paused = true)]
async fn test_double_ctrl_c_quits() {
    let (tx, _rx) = unbounded_channel();
    let mut app = App::new(options(true, None), tx);
    let ctrl_c = AppEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));

    app.handle(ctrl_c);
    assert!(!app.should_quit());
    assert_eq!(
        app.screen().as_wizard().unwrap().status.as_deref(),
        Some("Press Ctrl+C again to exit")
    );

    app.handle(AppEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert!(app.should_quit());
}
