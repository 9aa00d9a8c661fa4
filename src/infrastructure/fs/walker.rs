//! Source directory enumeration
//!
//! Lists every regular file under the sync root in a stable order. Nothing is
//! filtered: hidden files and files named in `.gitignore` are deployed too.
//! Symlinks to files are listed under the link's own path; symlinks to
//! directories are not descended. Directories that cannot be read are skipped.

use std::fs;
use std::io;
use std::path::Path;

use ignore::{DirEntry, WalkBuilder};

use crate::domain::entities::LocalFile;

/// List all regular files under `root`, sorted by path within each directory.
pub fn list_files(root: &Path) -> io::Result<Vec<LocalFile>> {
    if !root.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("not a directory: {}", root.display()),
        ));
    }

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(error = %err, "skipping unreadable path");
                continue;
            }
        };
        if !is_regular_file(&entry) {
            continue;
        }
        if let Some(file) = LocalFile::under_root(root, entry.path()) {
            files.push(file);
        }
    }

    Ok(files)
}

fn is_regular_file(entry: &DirEntry) -> bool {
    if entry.path_is_symlink() {
        // Broken links and links to directories are left out.
        return fs::metadata(entry.path()).is_ok_and(|meta| meta.is_file());
    }
    entry.file_type().is_some_and(|ft| ft.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn keys(files: &[LocalFile]) -> Vec<String> {
        files
            .iter()
            .map(|f| f.key().unwrap().as_str().to_string())
            .collect()
    }

    #[test]
    fn lists_nested_files_in_stable_order() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("css")).unwrap();
        fs::create_dir_all(dir.path().join("js/vendor")).unwrap();
        fs::write(dir.path().join("index.html"), "<h1>hi</h1>").unwrap();
        fs::write(dir.path().join("css/style.css"), "body{}").unwrap();
        fs::write(dir.path().join("js/vendor/lib.js"), "//").unwrap();
        fs::write(dir.path().join("js/app.js"), "//").unwrap();

        let first = keys(&list_files(dir.path()).unwrap());
        let second = keys(&list_files(dir.path()).unwrap());

        assert_eq!(first.len(), 4);
        assert_eq!(first, second);
        assert!(first.contains(&"css/style.css".to_string()));
        assert!(first.contains(&"js/vendor/lib.js".to_string()));
    }

    #[test]
    fn hidden_and_gitignored_files_are_included() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".gitignore"), "*.map\n").unwrap();
        fs::write(dir.path().join("app.js.map"), "{}").unwrap();
        fs::create_dir_all(dir.path().join(".well-known")).unwrap();
        fs::write(dir.path().join(".well-known/security.txt"), "Contact: x").unwrap();

        let listed = keys(&list_files(dir.path()).unwrap());
        assert!(listed.contains(&".gitignore".to_string()));
        assert!(listed.contains(&"app.js.map".to_string()));
        assert!(listed.contains(&".well-known/security.txt".to_string()));
    }

    #[test]
    fn empty_directory_lists_nothing() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("empty/sub")).unwrap();
        assert!(list_files(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_root_is_not_found() {
        let dir = tempdir().unwrap();
        let err = list_files(&dir.path().join("nope")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[cfg(unix)]
    mod symlinks {
        use super::*;
        use std::os::unix::fs::symlink;

        #[test]
        fn link_to_ancestor_is_not_descended() {
            let dir = tempdir().unwrap();
            fs::write(dir.path().join("index.html"), "hi").unwrap();
            symlink(".", dir.path().join("current")).unwrap();

            let listed = keys(&list_files(dir.path()).unwrap());
            assert_eq!(listed, vec!["index.html".to_string()]);
        }

        #[test]
        fn link_to_sibling_directory_is_not_listed_twice() {
            let dir = tempdir().unwrap();
            fs::create_dir_all(dir.path().join("v2")).unwrap();
            fs::write(dir.path().join("v2/app.js"), "//").unwrap();
            symlink("v2", dir.path().join("latest")).unwrap();

            let listed = keys(&list_files(dir.path()).unwrap());
            assert_eq!(listed, vec!["v2/app.js".to_string()]);
        }

        #[test]
        fn link_to_file_is_listed_under_link_name() {
            let dir = tempdir().unwrap();
            let outside = tempdir().unwrap();
            fs::write(outside.path().join("shared.css"), "body{}").unwrap();
            symlink(outside.path().join("shared.css"), dir.path().join("theme.css")).unwrap();

            let files = list_files(dir.path()).unwrap();
            assert_eq!(keys(&files), vec!["theme.css".to_string()]);
            assert_eq!(fs::read(files[0].absolute()).unwrap(), b"body{}");
        }

        #[test]
        fn broken_link_is_skipped() {
            let dir = tempdir().unwrap();
            fs::write(dir.path().join("index.html"), "hi").unwrap();
            symlink("gone.html", dir.path().join("old.html")).unwrap();

            let listed = keys(&list_files(dir.path()).unwrap());
            assert_eq!(listed, vec!["index.html".to_string()]);
        }
    }
}
