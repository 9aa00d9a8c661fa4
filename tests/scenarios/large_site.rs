//! A site with more changed files than one invalidation request allows.

use std::collections::HashSet;

use deploy_site::domain::value_objects::InvalidationStatus;
use deploy_site::{CacheInvalidator, DeltaSyncer, DeployOptions, DeployUseCase};

use crate::common::{write_file, MemoryCdn, MemoryStore};

#[test]
fn changed_paths_are_split_across_requests() {
    let site = tempfile::tempdir().unwrap();
    for i in 0..1200 {
        write_file(site.path(), &format!("posts/{i:04}.html"), &format!("post {i}"));
    }

    let store = MemoryStore::default();
    let cdn = MemoryCdn::new(InvalidationStatus::Completed);
    let use_case = DeployUseCase::new(DeltaSyncer::new(&store), CacheInvalidator::new(&cdn, "E2SITE"));

    let summary = use_case.execute(&DeployOptions::new(site.path())).unwrap();

    assert_eq!(summary.invalidation_ids().len(), 2);
    let sizes: Vec<usize> = cdn.batches.borrow().iter().map(|b| b.len()).collect();
    assert_eq!(sizes, vec![1000, 200]);

    // Every uploaded key invalidated exactly once, in upload order
    let invalidated = cdn.invalidated_paths();
    let expected: Vec<String> = summary.sync.invalidation_paths();
    assert_eq!(invalidated, expected);
    assert_eq!(invalidated.iter().collect::<HashSet<_>>().len(), 1200);
}
