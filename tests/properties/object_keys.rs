//! Property tests for object keys and invalidation paths.

use proptest::prelude::*;

use deploy_site::domain::value_objects::normalize_invalidation_path;
use deploy_site::ObjectKey;

fn relative_path(separator: &'static str) -> impl Strategy<Value = (Vec<String>, String)> {
    let segment = proptest::string::string_regex("[A-Za-z0-9._-]{1,16}").unwrap();
    proptest::collection::vec(segment, 1..=5).prop_map(move |segments| {
        let joined = segments.join(separator);
        (segments, joined)
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Keys never contain a backslash, whatever the input.
    #[test]
    fn property_keys_use_forward_slashes(s in "(?s).{0,128}") {
        let key = ObjectKey::new(s);
        prop_assert!(!key.as_str().contains('\\'));
    }

    /// PROPERTY: Windows-style and Unix-style relative paths give the same key.
    #[test]
    fn property_separator_style_does_not_matter(
        (segments, windows) in relative_path("\\")
    ) {
        let unix = segments.join("/");
        prop_assert_eq!(ObjectKey::new(windows), ObjectKey::new(unix));
    }

    /// PROPERTY: Invalidation paths start with exactly the key behind one `/`.
    #[test]
    fn property_invalidation_path_is_rooted_key(
        (_, path) in relative_path("/")
    ) {
        let key = ObjectKey::new(path.clone());
        let invalidation = key.to_invalidation_path();
        prop_assert!(invalidation.starts_with('/'));
        prop_assert_eq!(&invalidation[1..], path.as_str());
    }

    /// PROPERTY: Normalizing twice changes nothing.
    #[test]
    fn property_normalize_is_idempotent(s in "(?s).{0,128}") {
        let once = normalize_invalidation_path(&s);
        prop_assert_eq!(normalize_invalidation_path(&once), once.clone());
        prop_assert!(once.starts_with('/'));
    }
}
