use super::*;

fn lits(s: &str) -> Slice {
    s.bytes()
        .map(|b| if b == b'_' { SliceByte::Any } else { SliceByte::Lit(b) })
        .collect()
}

#[test]
fn test_empty_pattern() {
    let plan = PatternPlan::compile(b"");
    assert!(plan.slices.is_empty());
    assert!(!plan.starts_with_percent);
    assert!(!plan.ends_with_percent);
    assert!(!plan.has_percent);
    assert_eq!(plan.min_length, 0);
}

#[test]
fn test_all_percent() {
    let plan = PatternPlan::compile(b"%");
    assert!(plan.slices.is_empty());
    assert!(plan.starts_with_percent);
    assert!(plan.ends_with_percent);
    assert!(plan.has_percent);
}

#[test]
fn test_double_percent_collapses() {
    let a = PatternPlan::compile(b"a%%b");
    let b = PatternPlan::compile(b"a%b");
    assert_eq!(a.slices, b.slices);
    assert_eq!(a.starts_with_percent, b.starts_with_percent);
    assert_eq!(a.ends_with_percent, b.ends_with_percent);
}

#[test]
fn test_prefix_pattern() {
    let plan = PatternPlan::compile(b"ab_%");
    assert_eq!(plan.slices, vec![lits("ab_")]);
    assert!(!plan.starts_with_percent);
    assert!(plan.ends_with_percent);
    assert_eq!(plan.min_length, 3);
    assert!(!plan.is_pure_wildcard());
}

#[test]
fn test_dual_anchor_pattern() {
    let plan = PatternPlan::compile(b"ab%cd");
    assert_eq!(plan.slices, vec![lits("ab"), lits("cd")]);
    assert!(!plan.starts_with_percent);
    assert!(!plan.ends_with_percent);
    assert_eq!(plan.min_length, 4);
}

#[test]
fn test_multi_slice_pattern() {
    let plan = PatternPlan::compile(b"%a%b%c%");
    assert_eq!(plan.slices, vec![lits("a"), lits("b"), lits("c")]);
    assert!(plan.starts_with_percent);
    assert!(plan.ends_with_percent);
    assert_eq!(plan.unique_literal_bytes(), vec![b'a', b'b', b'c']);
}

#[test]
fn test_unique_literal_bytes_dedupes() {
    let plan = PatternPlan::compile(b"%abcabc%");
    assert_eq!(plan.unique_literal_bytes(), vec![b'a', b'b', b'c']);
}

#[test]
fn test_pure_wildcard() {
    let plan = PatternPlan::compile(b"_%_");
    assert!(plan.is_pure_wildcard());
    assert_eq!(plan.min_length, 2);
    assert!(plan.has_percent);

    let plan2 = PatternPlan::compile(b"___");
    assert!(plan2.is_pure_wildcard());
    assert!(!plan2.has_percent);
    assert_eq!(plan2.min_length, 3);
}

#[test]
fn test_slice_matches_at_and_find_slice() {
    let slice = lits("a_c");
    assert!(slice_matches_at(b"xabc", 1, &slice));
    assert!(!slice_matches_at(b"xabd", 1, &slice));
    assert_eq!(find_slice(b"xxxabcxx", 0, &slice), Some(3));
    assert_eq!(find_slice(b"xxxxxx", 0, &slice), None);
}
