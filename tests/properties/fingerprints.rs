//! Property tests for content fingerprints.

use proptest::prelude::*;

use deploy_site::infrastructure::fs::ContentFingerprinter;
use deploy_site::FingerprintToken;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 48,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Streaming a file gives the same token as hashing it in memory.
    #[test]
    fn property_file_and_memory_tokens_agree(
        content in proptest::collection::vec(any::<u8>(), 0..20_000)
    ) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blob.bin");
        std::fs::write(&path, &content).unwrap();

        let fingerprinter = ContentFingerprinter::new();
        let from_file = fingerprinter.fingerprint(&path).unwrap();
        prop_assert_eq!(&from_file, &FingerprintToken::from_content(&content));
        prop_assert!(fingerprinter.same_content(&path, &from_file).unwrap());
    }

    /// PROPERTY: Tokens are quoted 32-digit lowercase hex.
    #[test]
    fn property_token_shape(content in proptest::collection::vec(any::<u8>(), 0..512)) {
        let token = FingerprintToken::from_content(&content);
        prop_assert_eq!(token.as_str().len(), 34);
        prop_assert!(token.hex().chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        prop_assert!(!token.is_multipart());
    }
}
