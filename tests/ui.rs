mod common;

use common::{dispatcher, FakeRemote};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use dbpanel::console::{self, Shard};
use dbpanel::constants::{MSG_EMPTY_DATABASE_NAME, MSG_NO_BACKUP_SELECTED};
use dbpanel::logger::Logger;
use dbpanel::remote::RemoteResponse;
use dbpanel::ui::components::{FormComponent, LinksComponent};
use dbpanel::ui::core::{Action, AppContext, Component, EventType, Focus};
use dbpanel::ui::AppComponent;
use std::path::PathBuf;
use std::time::Duration;

fn key(code: KeyCode) -> EventType {
    EventType::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        app.handle_event(key(KeyCode::Char(c))).unwrap();
    }
}

fn app_with(remote: &FakeRemote, download_dir: PathBuf) -> AppComponent {
    let context = AppContext {
        dispatcher: dispatcher(remote, "http://localhost:8080/"),
        logger: Logger::new(),
        service_root: "http://localhost:8080/".to_string(),
        download_dir,
        initial_date: "2024-01-01".to_string(),
        mouse_enabled: false,
    };
    AppComponent::new(context)
}

fn message(app: &AppComponent) -> String {
    app.state()
        .current_message()
        .map(|m| m.raw().to_string())
        .unwrap_or_default()
}

/// Wait for background tasks and apply what they sent back
async fn settle(app: &mut AppComponent, expected: usize) {
    let mut applied = 0;
    for _ in 0..200 {
        for action in app.process_background_actions() {
            app.apply_background_action(action);
            applied += 1;
        }
        if applied >= expected {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("background tasks did not complete");
}

#[test]
fn test_focus_cycle() {
    let mut focus = Focus::default();
    for _ in 0..Focus::ORDER.len() {
        focus = focus.next();
    }
    assert_eq!(focus, Focus::CreateName);
    assert_eq!(Focus::CreateName.previous(), Focus::Links);
    assert_eq!(Focus::RestoreDate.next(), Focus::Links);
}

#[test]
fn test_form_builds_actions() {
    let mut form = FormComponent::new("2024-01-01");
    assert_eq!(form.listing_date, "2024-01-01");
    assert_eq!(form.restore_date, "2024-01-01");

    form.focus = Focus::ListingName;
    for c in "acme".chars() {
        form.handle_key_events(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
    }
    form.handle_key_events(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));
    form.handle_key_events(KeyEvent::new(KeyCode::Char('e'), KeyModifiers::NONE));

    match form.handle_key_events(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)) {
        Action::Dispatch(action) => assert_eq!(
            action,
            console::Action::ListBackups {
                name: "acme".to_string(),
                date: "2024-01-01".to_string(),
            }
        ),
        other => panic!("unexpected action: {:?}", other),
    }

    assert_eq!(form.action_for(Focus::Links), None);
}

#[test]
fn test_links_selection() {
    let mut links = LinksComponent::new("http://localhost:8080/");
    assert_eq!(links.selected_shard(), Shard::Shared);

    let up = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
    let down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
    links.handle_key_events(up);
    assert_eq!(links.selected_shard(), Shard::Shared);
    for _ in 0..10 {
        links.handle_key_events(down);
    }
    assert_eq!(links.selected_shard(), Shard::Sales);

    match links.handle_key_events(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)) {
        Action::Download(shard) => assert_eq!(shard, Shard::Sales),
        other => panic!("unexpected action: {:?}", other),
    }
}

#[tokio::test]
async fn test_validation_message_without_network() {
    let remote = FakeRemote::new();
    let mut app = app_with(&remote, PathBuf::from("."));

    app.handle_event(key(KeyCode::Enter)).unwrap();

    assert_eq!(message(&app), MSG_EMPTY_DATABASE_NAME);
    assert_eq!(app.active_task_count(), 0);
    assert!(remote.requests().is_empty());
}

#[tokio::test]
async fn test_function_keys_dispatch_lifecycle_calls() {
    let remote = FakeRemote::new();
    remote.respond(Ok(RemoteResponse::classify(None, "<html><p>TCP server running</p></html>")));
    let mut app = app_with(&remote, PathBuf::from("."));

    app.handle_event(key(KeyCode::F(5))).unwrap();
    settle(&mut app, 1).await;

    assert_eq!(remote.paths(), vec!["database/status"]);
    let shown = app.state().current_message().unwrap();
    assert!(shown.is_markup());
    assert_eq!(shown.lines(), vec!["TCP server running"]);
}

#[tokio::test]
async fn test_list_then_download() {
    let dir = tempfile::tempdir().unwrap();
    let remote = FakeRemote::new();
    remote.respond(Ok(RemoteResponse::text("shared.zip, ")));
    let mut app = app_with(&remote, dir.path().to_path_buf());

    // Downloads are refused before any listing
    app.handle_app_action(Action::Download(Shard::Shared));
    assert_eq!(message(&app), MSG_NO_BACKUP_SELECTED);
    assert!(remote.downloads.lock().unwrap().is_empty());

    app.handle_event(key(KeyCode::Tab)).unwrap();
    app.handle_event(key(KeyCode::Tab)).unwrap();
    type_text(&mut app, "acme");
    app.handle_event(key(KeyCode::Enter)).unwrap();
    settle(&mut app, 1).await;

    assert_eq!(remote.paths(), vec!["backup/load-backup/acme?date=2024-01-01"]);
    assert!(!app.state().links.is_cleared());

    app.handle_event(key(KeyCode::BackTab)).unwrap();
    app.handle_event(key(KeyCode::BackTab)).unwrap();
    app.handle_event(key(KeyCode::BackTab)).unwrap();
    app.handle_event(key(KeyCode::Enter)).unwrap();
    settle(&mut app, 1).await;

    assert_eq!(
        remote.downloads.lock().unwrap().clone(),
        vec!["/backup/download/acme?date=2024-01-01&db=shared"]
    );
    let saved = dir.path().join("acme-shared-2024-01-01.zip");
    assert!(saved.exists());
    assert!(message(&app).starts_with("Saved shared.zip"));
}

#[tokio::test]
async fn test_help_dialog_swallows_keys() {
    let remote = FakeRemote::new();
    let mut app = app_with(&remote, PathBuf::from("."));

    app.handle_event(key(KeyCode::F(1))).unwrap();
    app.handle_event(key(KeyCode::F(5))).unwrap();
    assert!(remote.requests().is_empty());
    assert_eq!(app.active_task_count(), 0);

    app.handle_event(key(KeyCode::Esc)).unwrap();
    assert!(!app.should_quit());

    app.handle_event(key(KeyCode::Esc)).unwrap();
    assert!(app.should_quit());
}
