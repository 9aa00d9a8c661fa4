//! A site deployed, edited and deployed again.

use std::time::Duration;

use deploy_site::domain::value_objects::InvalidationStatus;
use deploy_site::{
    CacheInvalidator, DeltaSyncer, DeployOptions, DeployUseCase, InvalidationOutcome,
};

use crate::common::{write_file, MemoryCdn, MemoryStore};

#[test]
fn only_edited_files_are_uploaded_and_invalidated() {
    let site = tempfile::tempdir().unwrap();
    write_file(site.path(), "index.html", "<h1>Home</h1>");
    write_file(site.path(), "about/index.html", "<h1>About</h1>");
    write_file(site.path(), "assets/app.js", "console.log(1)");

    let store = MemoryStore::default();
    let cdn = MemoryCdn::new(InvalidationStatus::Completed);
    let use_case = DeployUseCase::new(
        DeltaSyncer::new(&store),
        CacheInvalidator::new(&cdn, "E2SITE").with_poll_interval(Duration::from_millis(1)),
    );
    let options = DeployOptions::new(site.path());

    // First deploy uploads everything
    let first = use_case.execute(&options).unwrap();
    assert_eq!(first.sync.uploaded.len(), 3);
    assert_eq!(store.object("about/index.html").unwrap(), b"<h1>About</h1>");

    // Nothing changed: no uploads, no invalidation
    let second = use_case.execute(&options).unwrap();
    assert!(second.sync.uploaded.is_empty());
    assert_eq!(second.invalidation, InvalidationOutcome::NotNeeded);

    // One edit: one upload, one path invalidated
    write_file(site.path(), "assets/app.js", "console.log(2)");
    let third = use_case.execute(&options.clone().with_wait(true)).unwrap();
    assert_eq!(third.sync.uploaded.len(), 1);
    assert_eq!(third.sync.skipped.len(), 2);
    assert!(third.unfinished_waits().is_empty());

    assert_eq!(store.put_count.get(), 4);
    assert_eq!(cdn.batches.borrow().len(), 2);
    assert_eq!(cdn.batches.borrow()[1].paths(), ["/assets/app.js"]);
}

#[test]
fn dry_run_previews_without_touching_remote_state() {
    let site = tempfile::tempdir().unwrap();
    write_file(site.path(), "index.html", "<h1>Home</h1>");

    let store = MemoryStore::default();
    let cdn = MemoryCdn::new(InvalidationStatus::Completed);
    let use_case = DeployUseCase::new(DeltaSyncer::new(&store), CacheInvalidator::new(&cdn, "E2SITE"));

    let summary = use_case
        .execute(&DeployOptions::new(site.path()).with_dry_run(true))
        .unwrap();

    assert_eq!(
        summary.invalidation,
        InvalidationOutcome::DryRun {
            paths: vec!["/index.html".to_string()]
        }
    );
    assert!(store.objects.borrow().is_empty());
    assert!(cdn.batches.borrow().is_empty());

    // A real run afterwards still sees the file as new
    let real = use_case.execute(&DeployOptions::new(site.path())).unwrap();
    assert_eq!(real.sync.uploaded.len(), 1);
}
