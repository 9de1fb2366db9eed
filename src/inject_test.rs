use super::*;

// =============================================================
// EnhanceSummary
// =============================================================

#[test]
fn summary_default_is_empty() {
    let s = EnhanceSummary::default();
    assert_eq!(s.enhanced, 0);
    assert_eq!(s.skipped, 0);
}

#[test]
fn summary_equality() {
    let a = EnhanceSummary { enhanced: 2, skipped: 1 };
    let b = EnhanceSummary { enhanced: 2, skipped: 1 };
    assert_eq!(a, b);
    assert_ne!(a, EnhanceSummary::default());
}

#[test]
fn summary_clone_and_copy() {
    let a = EnhanceSummary { enhanced: 3, skipped: 0 };
    let b = a;
    assert_eq!(a, b);
}

#[test]
fn summary_debug_format() {
    let s = EnhanceSummary { enhanced: 1, skipped: 2 };
    let text = format!("{s:?}");
    assert!(text.contains("enhanced: 1"));
    assert!(text.contains("skipped: 2"));
}
