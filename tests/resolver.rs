use dbpanel::console::resolver::{download_file_name, PLACEHOLDER_URL};
use dbpanel::console::{BackupLinks, BackupListing, DeploymentContext, Shard};
use dbpanel::remote::RemoteError;

fn found() -> BackupListing {
    BackupListing::Found(vec!["shared.zip".to_string()])
}

#[test]
fn test_empty_listing_clears_every_link() {
    for (app, date) in [("acme", "2024-01-01"), ("", ""), ("other", "2023-12-31")] {
        let links = BackupLinks::resolve(&BackupListing::Empty, app, date, &DeploymentContext::Local);
        assert!(links.is_cleared());
        assert_eq!(links.iter().count(), 7);
        for link in links.iter() {
            assert_eq!(link.label, "");
            assert_eq!(link.url, PLACEHOLDER_URL);
        }
    }
}

#[test]
fn test_failed_listing_clears_like_empty() {
    let failed = BackupListing::ListingFailed(RemoteError::Transport("connection refused".to_string()));
    let context = DeploymentContext::from_origin("http://localhost:8080/");

    let from_failure = BackupLinks::resolve(&failed, "acme", "2024-01-01", &context);
    let from_empty = BackupLinks::resolve(&BackupListing::Empty, "acme", "2024-01-01", &context);

    assert_eq!(from_failure, from_empty);
    assert_ne!(failed, BackupListing::Empty);
}

#[test]
fn test_local_origin_links() {
    let context = DeploymentContext::from_origin("http://localhost:8080/");
    let links = BackupLinks::resolve(&found(), "acme", "2024-01-01", &context);

    let expected = ["shared", "cashbook", "materials", "project", "inventory", "purchase", "sales"];
    let actual: Vec<_> = links.iter().collect();
    assert_eq!(actual.len(), 7);
    for (link, shard) in actual.iter().zip(expected) {
        assert_eq!(link.shard.name(), shard);
        assert_eq!(link.label, format!("{}.zip", shard));
        assert_eq!(link.url, format!("/backup/download/acme?date=2024-01-01&db={}", shard));
    }
}

#[test]
fn test_deployed_origin_links() {
    let context = DeploymentContext::from_origin("https://ops.example.com/");
    assert_eq!(context, DeploymentContext::Deployed);

    let links = BackupLinks::resolve(&found(), "acme", "2024-01-01", &context);
    for link in links.iter() {
        assert_eq!(
            link.url,
            format!("/dcapture-h2/backup/download/acme?date=2024-01-01&db={}", link.shard)
        );
    }
}

#[test]
fn test_configured_base_path_wins_over_origin() {
    let context = DeploymentContext::resolve(Some("/panel"), "http://localhost:8080/");
    assert_eq!(context.base_path(), "/panel");

    let links = BackupLinks::resolve(&found(), "acme", "2024-01-01", &context);
    assert_eq!(links.get(Shard::Sales).url, "/panel/backup/download/acme?date=2024-01-01&db=sales");

    let unset = DeploymentContext::resolve(None, "http://localhost:8080/");
    assert_eq!(unset, DeploymentContext::Local);
}

#[test]
fn test_resolver_is_idempotent() {
    let context = DeploymentContext::from_origin("https://ops.example.com/");
    let first = BackupLinks::resolve(&found(), "acme", "2024-01-01", &context);
    let second = BackupLinks::resolve(&found(), "acme", "2024-01-01", &context);
    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn test_cardinality_is_the_only_signal() {
    let context = DeploymentContext::Local;
    let one = BackupLinks::resolve(&found(), "acme", "2024-01-01", &context);
    let many = BackupLinks::resolve(
        &BackupListing::Found(vec!["a".to_string(), "b".to_string(), "c".to_string()]),
        "acme",
        "2024-01-01",
        &context,
    );
    assert_eq!(one, many);
}

#[test]
fn test_listing_body_parsing() {
    assert_eq!(
        BackupListing::from_body("shared.zip, sales.zip, "),
        BackupListing::Found(vec!["shared.zip".to_string(), "sales.zip".to_string()])
    );
    assert_eq!(
        BackupListing::from_body(r#"["shared.zip","cashbook.zip"]"#).len(),
        2
    );
    assert_eq!(BackupListing::from_body(""), BackupListing::Empty);
    assert_eq!(BackupListing::from_body(" , ,"), BackupListing::Empty);
    assert_eq!(BackupListing::from_body("[]"), BackupListing::Empty);
}

#[test]
fn test_absolute_urls() {
    let links = BackupLinks::resolve(&found(), "acme", "2024-01-01", &DeploymentContext::Deployed);
    assert_eq!(
        links.get(Shard::Shared).absolute_url("https://ops.example.com/app/").as_deref(),
        Some("https://ops.example.com/dcapture-h2/backup/download/acme?date=2024-01-01&db=shared")
    );

    let cleared = BackupLinks::cleared();
    assert_eq!(cleared.get(Shard::Shared).absolute_url("https://ops.example.com/"), None);
}

#[test]
fn test_populated_matches_nonempty_listing() {
    let context = DeploymentContext::Deployed;
    let populated = BackupLinks::populated("acme", "2024-01-01", &context);
    assert_eq!(populated, BackupLinks::resolve(&found(), "acme", "2024-01-01", &context));
    assert!(populated.iter().all(|link| !link.is_cleared()));
}

#[test]
fn test_download_file_name() {
    assert_eq!(download_file_name("acme", Shard::Inventory, "2024-01-01"), "acme-inventory-2024-01-01.zip");
}
