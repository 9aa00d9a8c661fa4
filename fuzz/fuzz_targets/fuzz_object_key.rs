#![no_main]

use deploy_site::domain::value_objects::normalize_invalidation_path;
use deploy_site::{FingerprintToken, InvalidationBatch, ObjectKey};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let key = ObjectKey::new(input);
        assert!(!key.as_str().contains('\\'));

        let path = normalize_invalidation_path(input);
        assert!(path.starts_with('/'));

        let batches = InvalidationBatch::chunked(input.split('\n'), 7);
        assert!(batches.iter().all(|b| b.len() <= 7));

        // Remote ETags arrive in arbitrary shapes
        let token = FingerprintToken::new(input);
        let _ = token.is_multipart();
        let _ = token.hex();
    }
});
