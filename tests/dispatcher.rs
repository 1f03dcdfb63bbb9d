mod common;

use common::{dispatcher, status_error, FakeRemote};
use dbpanel::console::resolver::PLACEHOLDER_URL;
use dbpanel::console::{Action, BackupListing, PanelState, Rendered, Shard};
use dbpanel::constants::{
    MSG_EMPTY_DATABASE_NAME, MSG_EMPTY_RESTORE_DATABASE, MSG_EMPTY_RESTORE_DATE, PROGRESS_CREATE, PROGRESS_STATUS,
};
use dbpanel::remote::{ExpectedContent, RemoteResponse};

const LOCAL: &str = "http://localhost:8080/";

fn text(state: &PanelState) -> String {
    state.current_message().map(|m| m.raw().to_string()).unwrap_or_default()
}

#[tokio::test]
async fn test_empty_names_never_reach_the_network() {
    let remote = FakeRemote::new();
    let dispatcher = dispatcher(&remote, LOCAL);
    let mut state = PanelState::new();

    for name in ["", "   ", "\t"] {
        let actions = [
            Action::Create { name: name.to_string() },
            Action::CreateBackup { name: name.to_string() },
            Action::ListBackups {
                name: name.to_string(),
                date: "2024-01-01".to_string(),
            },
        ];
        for action in actions {
            dispatcher.dispatch(&action, &mut state).await;
            assert_eq!(text(&state), MSG_EMPTY_DATABASE_NAME);
        }

        dispatcher
            .dispatch(
                &Action::Restore {
                    name: name.to_string(),
                    date: "2024-01-01".to_string(),
                },
                &mut state,
            )
            .await;
        assert_eq!(text(&state), MSG_EMPTY_RESTORE_DATABASE);
    }

    assert!(remote.requests().is_empty());
}

#[tokio::test]
async fn test_restore_requires_a_date() {
    let remote = FakeRemote::new();
    let dispatcher = dispatcher(&remote, LOCAL);
    let mut state = PanelState::new();

    dispatcher
        .dispatch(
            &Action::Restore {
                name: "acme".to_string(),
                date: String::new(),
            },
            &mut state,
        )
        .await;

    assert_eq!(text(&state), MSG_EMPTY_RESTORE_DATE);
    assert!(remote.requests().is_empty());
}

#[tokio::test]
async fn test_each_action_issues_one_get() {
    let remote = FakeRemote::new();
    let dispatcher = dispatcher(&remote, LOCAL);
    let mut state = PanelState::new();

    let actions = [
        Action::Status,
        Action::Start,
        Action::Stop,
        Action::Create { name: " acme ".to_string() },
        Action::CreateBackup { name: "acme".to_string() },
        Action::ListBackups {
            name: "acme".to_string(),
            date: "2024-01-01".to_string(),
        },
        Action::Restore {
            name: "acme".to_string(),
            date: "2024-01-01".to_string(),
        },
    ];
    for action in &actions {
        dispatcher.dispatch(action, &mut state).await;
    }

    assert_eq!(
        remote.paths(),
        vec![
            "database/status",
            "database/start",
            "database/stop",
            "database/create?name=acme",
            "backup/create/acme?type=offline",
            "backup/load-backup/acme?date=2024-01-01",
            "restore/execute/acme?date=2024-01-01",
        ]
    );

    let expected: Vec<_> = remote.requests().into_iter().map(|r| r.expected).collect();
    assert_eq!(&expected[..3], &[ExpectedContent::HtmlText; 3]);
    assert_eq!(expected[6], ExpectedContent::Text);
}

#[tokio::test]
async fn test_success_and_error_render_the_payload() {
    let remote = FakeRemote::new();
    remote
        .respond(Ok(RemoteResponse::classify(None, "<html>Database is running</html>")))
        .respond(Err(status_error(400, "Database is not running")));
    let dispatcher = dispatcher(&remote, LOCAL);
    let mut state = PanelState::new();

    dispatcher.dispatch(&Action::Status, &mut state).await;
    let shown = state.current_message().unwrap();
    assert!(shown.is_markup());
    assert_eq!(shown.lines(), vec!["Database is running"]);

    dispatcher.dispatch(&Action::Stop, &mut state).await;
    assert_eq!(
        state.current_message(),
        Some(&Rendered::Text("Database is not running".to_string()))
    );
}

#[tokio::test]
async fn test_begin_shows_progress_before_the_call() {
    let remote = FakeRemote::new();
    let dispatcher = dispatcher(&remote, LOCAL);
    let mut state = PanelState::new();

    let call = dispatcher.begin(&Action::Status, &mut state).unwrap();
    assert_eq!(text(&state), PROGRESS_STATUS);
    assert!(remote.requests().is_empty());

    let completion = dispatcher.execute(call).await;
    assert_eq!(remote.requests().len(), 1);
    dispatcher.apply(completion, &mut state);
    assert_eq!(text(&state), "");

    dispatcher
        .begin(&Action::Create { name: "acme".to_string() }, &mut state)
        .unwrap();
    assert_eq!(text(&state), PROGRESS_CREATE);

    // Backup calls show no progress line, the previous message stays.
    dispatcher
        .begin(&Action::CreateBackup { name: "acme".to_string() }, &mut state)
        .unwrap();
    assert_eq!(text(&state), PROGRESS_CREATE);
}

#[tokio::test]
async fn test_listing_populates_links() {
    let remote = FakeRemote::new();
    remote.respond(Ok(RemoteResponse::text("shared.zip, sales.zip, ")));
    let dispatcher = dispatcher(&remote, "https://ops.example.com/");
    let mut state = PanelState::new();

    dispatcher
        .dispatch(
            &Action::ListBackups {
                name: "acme".to_string(),
                date: "2024-01-01".to_string(),
            },
            &mut state,
        )
        .await;

    assert_eq!(state.reported_archives(), ["shared.zip", "sales.zip"]);
    assert_eq!(
        state.links.get(Shard::Cashbook).url,
        "/dcapture-h2/backup/download/acme?date=2024-01-01&db=cashbook"
    );
    let target = state.listing_target.as_ref().unwrap();
    assert_eq!(target.app_name, "acme");
    assert_eq!(target.date, "2024-01-01");
    // A successful listing is not rendered.
    assert!(state.current_message().is_none());
}

#[tokio::test]
async fn test_empty_listing_clears_stale_links() {
    let remote = FakeRemote::new();
    remote
        .respond(Ok(RemoteResponse::text("shared.zip, ")))
        .respond(Ok(RemoteResponse::text("")));
    let dispatcher = dispatcher(&remote, LOCAL);
    let mut state = PanelState::new();

    let first = Action::ListBackups {
        name: "acme".to_string(),
        date: "2024-01-01".to_string(),
    };
    dispatcher.dispatch(&first, &mut state).await;
    assert!(!state.links.is_cleared());

    let second = Action::ListBackups {
        name: "acme".to_string(),
        date: "2024-01-02".to_string(),
    };
    dispatcher.dispatch(&second, &mut state).await;
    assert!(state.links.is_cleared());
    assert_eq!(state.listing, Some(BackupListing::Empty));
    assert!(!state.listing_failed());
}

#[tokio::test]
async fn test_listing_error_clears_links_and_renders() {
    let remote = FakeRemote::new();
    remote
        .respond(Ok(RemoteResponse::text("shared.zip")))
        .respond(Err(status_error(400, "Backup folder not found")));
    let dispatcher = dispatcher(&remote, LOCAL);
    let mut state = PanelState::new();

    let action = Action::ListBackups {
        name: "acme".to_string(),
        date: "2024-01-01".to_string(),
    };
    dispatcher.dispatch(&action, &mut state).await;
    dispatcher.dispatch(&action, &mut state).await;

    for link in state.links.iter() {
        assert_eq!(link.label, "");
        assert_eq!(link.url, PLACEHOLDER_URL);
    }
    assert!(state.listing_failed());
    assert_eq!(text(&state), "Backup folder not found");
}

#[tokio::test]
async fn test_last_completion_wins() {
    let remote = FakeRemote::new();
    remote
        .respond(Ok(RemoteResponse::text("shared.zip")))
        .respond(Ok(RemoteResponse::text("")));
    let dispatcher = dispatcher(&remote, LOCAL);
    let mut state = PanelState::new();

    let with_backups = Action::ListBackups {
        name: "acme".to_string(),
        date: "2024-01-01".to_string(),
    };
    let without_backups = Action::ListBackups {
        name: "acme".to_string(),
        date: "2024-01-02".to_string(),
    };

    // Both calls are in flight before either completes.
    let first = dispatcher.begin(&with_backups, &mut state).unwrap();
    let second = dispatcher.begin(&without_backups, &mut state).unwrap();
    let first = dispatcher.execute(first).await;
    let second = dispatcher.execute(second).await;

    // The later-issued call lands first, the earlier one wins the display.
    dispatcher.apply(second, &mut state);
    assert!(state.links.is_cleared());
    dispatcher.apply(first, &mut state);
    assert!(!state.links.is_cleared());
    assert_eq!(state.listing_target.as_ref().unwrap().date, "2024-01-01");
}
