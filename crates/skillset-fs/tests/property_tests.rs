use proptest::prelude::*;
use skillset_fs::NormalizedPath;

proptest! {
    #[test]
    fn test_normalization_has_no_backslashes(s in "\\PC*") {
        let path = NormalizedPath::new(&s);
        prop_assert!(!path.as_str().contains('\\'));
    }

    #[test]
    fn test_relative_native_roundtrip(segments in prop::collection::vec("[a-zA-Z0-9_.-]{1,8}", 1..5)) {
        // Only well-formed relative paths survive the trip unchanged
        prop_assume!(segments.iter().all(|s| s != "." && s != ".."));
        let joined = segments.join("/");
        let path = NormalizedPath::new(&joined);
        let roundtripped = NormalizedPath::new(path.to_native());
        prop_assert_eq!(path, roundtripped);
    }

    #[test]
    fn test_ordering_matches_string_ordering(a in "[a-z/]{0,12}", b in "[a-z/]{0,12}") {
        let pa = NormalizedPath::new(&a);
        let pb = NormalizedPath::new(&b);
        prop_assert_eq!(pa.cmp(&pb), a.cmp(&b));
    }
}
