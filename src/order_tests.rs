use super::{check_order, find_unordered, reorder, OrderError, Reorder};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

#[test]
fn find_unordered_reports_entry_seen_before_its_predecessor() {
    let current = lines(&["a", "b", "c"]);
    let expected = lines(&["c", "b"]);
    assert_eq!(find_unordered(&current, &expected), ["b"]);
}

#[test]
fn find_unordered_skips_unrelated_lines() {
    let current = lines(&["/x", "/a", "/y", "/z", "/b"]);
    let expected = lines(&["/a", "/b"]);
    assert!(find_unordered(&current, &expected).is_empty());
}

#[test]
fn find_unordered_with_no_expected_entries_is_satisfied() {
    let current = lines(&["a", "b"]);
    assert!(find_unordered(&current, &[]).is_empty());
    assert!(find_unordered(&[], &[]).is_empty());
}

#[test]
fn find_unordered_keeps_everything_after_a_missing_entry() {
    let current = lines(&["a", "c"]);
    let expected = lines(&["a", "b", "c"]);
    assert_eq!(find_unordered(&current, &expected), ["b", "c"]);
}

#[test]
fn find_unordered_does_not_fold_case_or_trim() {
    let current = lines(&["/Repo ", "/other"]);
    let expected = lines(&["/repo", "/other"]);
    assert_eq!(find_unordered(&current, &expected), ["/repo", "/other"]);
}

#[test]
fn find_unordered_matches_greedily_on_repeated_lines() {
    let current = lines(&["b", "a", "b"]);
    let expected = lines(&["a", "b"]);
    assert!(find_unordered(&current, &expected).is_empty());
}

#[test]
fn check_order_accepts_matching_order() {
    assert_eq!(check_order(&lines(&["a", "b"]), &lines(&["a", "b"])), Ok(()));
}

#[test]
fn check_order_reports_unmatched_remainder() {
    let err = check_order(&lines(&["b", "a"]), &lines(&["a", "b"])).unwrap_err();
    assert_eq!(
        err,
        OrderError::Unordered {
            unmatched: lines(&["b"])
        }
    );
}

#[test]
fn reorder_appends_expected_after_unconstrained_lines() {
    let outcome = reorder(&lines(&["x", "y", "z"]), &lines(&["z", "x"])).unwrap();
    assert_eq!(outcome, Reorder::Reordered(lines(&["y", "z", "x"])));
}

#[test]
fn reorder_swaps_pth_fixture_entries() {
    let outcome = reorder(
        &lines(&["broken.pth", "fixed.pth"]),
        &lines(&["fixed.pth", "broken.pth"]),
    )
    .unwrap();
    assert_eq!(outcome, Reorder::Reordered(lines(&["fixed.pth", "broken.pth"])));
}

#[test]
fn reorder_leaves_ordered_lines_alone() {
    let outcome = reorder(&lines(&["a", "x", "b"]), &lines(&["a", "b"])).unwrap();
    assert_eq!(outcome, Reorder::Unchanged);
}

#[test]
fn reorder_names_exactly_the_missing_entries() {
    let err = reorder(&lines(&["b", "a"]), &lines(&["a", "b", "c", "d"])).unwrap_err();
    let missing: BTreeSet<String> = ["c", "d"].iter().map(|s| s.to_string()).collect();
    assert_eq!(err, OrderError::MissingEntries { missing });
}

#[test]
fn reorder_moves_every_occurrence_of_a_duplicated_line() {
    let outcome = reorder(&lines(&["a", "a", "y", "b"]), &lines(&["b", "a"])).unwrap();
    assert_eq!(outcome, Reorder::Reordered(lines(&["y", "b", "a", "a"])));
}

#[test]
fn reorder_rejects_repeated_expected_entries() {
    let current = lines(&["a", "b"]);
    let expected = lines(&["a", "b", "a"]);
    let err = reorder(&current, &expected).unwrap_err();
    let repeated: BTreeSet<String> = ["a"].iter().map(|s| s.to_string()).collect();
    assert_eq!(err, OrderError::RepeatedEntries { repeated });
}

#[test]
fn reorder_reports_missing_before_repeated() {
    let err = reorder(&lines(&["b", "a"]), &lines(&["a", "z", "a"])).unwrap_err();
    assert!(matches!(err, OrderError::MissingEntries { .. }));
}

#[test]
fn reorder_accepts_repeated_expected_entries_already_in_order() {
    let outcome = reorder(&lines(&["a", "b", "a"]), &lines(&["a", "b", "a"])).unwrap();
    assert_eq!(outcome, Reorder::Unchanged);
}

#[test]
fn order_error_messages_name_the_entries() {
    let err = OrderError::Unordered {
        unmatched: lines(&["/src/b"]),
    };
    assert!(err.to_string().contains("\"/src/b\""));
    let err = OrderError::MissingEntries {
        missing: ["/src/c".to_string()].into_iter().collect(),
    };
    assert!(err.to_string().contains("\"/src/c\""));
    let err = OrderError::RepeatedEntries {
        repeated: ["/src/d".to_string()].into_iter().collect(),
    };
    assert!(err.to_string().contains("\"/src/d\""));
}

fn pool() -> Vec<String> {
    (0..8).map(|idx| format!("/site/pkg{idx}")).collect()
}

/// A manifest of distinct lines and a desired subset drawn from it, in random order.
fn manifest_and_subset() -> impl Strategy<Value = (Vec<String>, Vec<String>)> {
    Just(pool())
        .prop_shuffle()
        .prop_flat_map(|manifest| {
            let len = manifest.len();
            (
                Just(manifest),
                proptest::sample::subsequence((0..len).collect::<Vec<_>>(), 0..=len),
            )
        })
        .prop_flat_map(|(manifest, picked)| {
            let desired: Vec<String> = picked.iter().map(|idx| manifest[*idx].clone()).collect();
            (Just(manifest), Just(desired).prop_shuffle())
        })
}

fn position(lines: &[String], value: &str) -> usize {
    lines
        .iter()
        .position(|line| line == value)
        .expect("line present")
}

proptest! {
    #[test]
    fn reorder_output_satisfies_expected_order((manifest, desired) in manifest_and_subset()) {
        match reorder(&manifest, &desired).unwrap() {
            Reorder::Unchanged => {
                prop_assert!(find_unordered(&manifest, &desired).is_empty());
            }
            Reorder::Reordered(new_lines) => {
                prop_assert!(find_unordered(&new_lines, &desired).is_empty());
            }
        }
    }

    #[test]
    fn reorder_preserves_the_multiset((manifest, desired) in manifest_and_subset()) {
        if let Reorder::Reordered(new_lines) = reorder(&manifest, &desired).unwrap() {
            prop_assert_eq!(new_lines.len(), manifest.len());
            let mut before = manifest.clone();
            let mut after = new_lines;
            before.sort();
            after.sort();
            prop_assert_eq!(before, after);
        }
    }

    #[test]
    fn reorder_keeps_unconstrained_lines_stable((manifest, desired) in manifest_and_subset()) {
        if let Reorder::Reordered(new_lines) = reorder(&manifest, &desired).unwrap() {
            let free: Vec<&String> = manifest.iter().filter(|line| !desired.contains(line)).collect();
            for pair in free.windows(2) {
                prop_assert!(position(&new_lines, pair[0]) < position(&new_lines, pair[1]));
            }
        }
    }

    #[test]
    fn reorder_is_idempotent((manifest, desired) in manifest_and_subset()) {
        let once = match reorder(&manifest, &desired).unwrap() {
            Reorder::Unchanged => manifest.clone(),
            Reorder::Reordered(new_lines) => new_lines,
        };
        prop_assert_eq!(reorder(&once, &desired).unwrap(), Reorder::Unchanged);
    }

    #[test]
    fn reorder_never_returns_lines_that_break_the_order(
        (manifest, desired) in manifest_and_subset(),
        repeat in any::<prop::sample::Index>(),
    ) {
        prop_assume!(!desired.is_empty());
        let mut desired = desired;
        let again = repeat.get(&desired).clone();
        desired.push(again);
        match reorder(&manifest, &desired) {
            Ok(Reorder::Unchanged) => {
                prop_assert!(find_unordered(&manifest, &desired).is_empty());
            }
            Ok(Reorder::Reordered(new_lines)) => {
                prop_assert!(new_lines != manifest);
                prop_assert!(find_unordered(&new_lines, &desired).is_empty());
            }
            Err(err) => {
                prop_assert!(matches!(err, OrderError::RepeatedEntries { .. }), "unexpected {err:?}");
            }
        }
    }

    #[test]
    fn reorder_rejects_entries_outside_the_manifest(
        (manifest, desired) in manifest_and_subset(),
        extra in "/elsewhere/[a-z]{1,6}",
    ) {
        let mut desired = desired;
        // Put the foreign entry first so the scan can never be satisfied.
        desired.insert(0, extra.clone());
        let err = reorder(&manifest, &desired).unwrap_err();
        let expected: BTreeSet<String> = [extra].into_iter().collect();
        prop_assert_eq!(err, OrderError::MissingEntries { missing: expected });
    }
}
