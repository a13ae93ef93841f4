//! Property-based tests for label counts and ordering

mod common;

use common::fixtures::*;
use common::{labels, scan_source};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_one_func_line_per_function(n in 0usize..12) {
        let out = scan_source(&fixture_n_functions(n));
        prop_assert_eq!(labels(&out), vec!["func"; n]);
    }

    #[test]
    fn prop_one_general_line_per_group(n in 0usize..12) {
        let out = scan_source(&fixture_n_groups(n));
        prop_assert_eq!(labels(&out), vec!["general"; n]);
    }

    #[test]
    fn prop_interleaved_kinds_keep_source_order(kinds in prop::collection::vec(any::<bool>(), 0..16)) {
        let mut source = fixture_package("main");
        let mut expected = Vec::new();
        for (i, is_func) in kinds.iter().enumerate() {
            if *is_func {
                source.push_str(&format!("\nfunc f{i}() {{}}\n"));
                expected.push("func");
            } else {
                source.push_str(&format!("\nvar v{i} = {i}\n"));
                expected.push("general");
            }
        }

        let out = scan_source(&source);
        prop_assert_eq!(labels(&out), expected);
    }
}
