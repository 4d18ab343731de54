#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use super::*;

const SOURCE: &str = "f := func(x int) int { return g(x) }";

#[test]
fn test_len_and_contains() {
    let span = Span::new(5, 9);
    assert_eq!(span.len(), 4);
    assert!(!span.is_empty());
    assert!(span.contains(5));
    assert!(span.contains(8));
    assert!(!span.contains(9));
    assert!(Span::new(3, 3).is_empty());
}

#[test]
fn test_merge_and_cover() {
    let lit = Span::new(5, 9).merge(Span::new(30, 36));
    assert_eq!(lit, Span::new(5, 36));

    let spans = [Span::new(23, 29), Span::new(10, 11), Span::new(30, 34)];
    assert_eq!(Span::cover(spans), Some(Span::new(10, 34)));
    assert_eq!(Span::cover(std::iter::empty()), None);
}

#[test]
fn test_snippet() {
    assert_eq!(Span::new(5, 9).snippet(SOURCE), Some("func"));
    assert_eq!(Span::new(30, 34).snippet(SOURCE), Some("g(x)"));
    assert_eq!(Span::new(30, 400).snippet(SOURCE), None);
    assert_eq!(Span::new(0, 1).snippet("é"), None);
}

#[test]
fn test_try_from_range() {
    assert_eq!(Span::try_from_range(5..36), Ok(Span::new(5, 36)));
    assert_eq!(
        Span::try_from_range(9..5),
        Err(SpanError::Reversed { start: 9, end: 5 })
    );

    let huge = usize::try_from(u32::MAX).unwrap() + 1;
    assert_eq!(
        Span::try_from_range(0..huge),
        Err(SpanError::OffsetOverflow(huge))
    );
    assert_eq!(
        SpanError::Reversed { start: 9, end: 5 }.to_string(),
        "span starts at 9 but ends at 5"
    );
}

#[test]
fn test_order_follows_source_position() {
    let mut spans = vec![Span::new(30, 34), Span::new(5, 36), Span::new(5, 9)];
    spans.sort();
    assert_eq!(spans, vec![Span::new(5, 9), Span::new(5, 36), Span::new(30, 34)]);
    assert_eq!(format!("{:?}", Span::new(5, 36)), "5..36");
}
