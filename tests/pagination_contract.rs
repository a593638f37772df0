//! Pagination window math: disjoint consecutive pages, stable clamping.

use engagement_service::validators::{clamp_pagination, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

#[test]
fn defaults_apply_when_params_missing() {
    let page = clamp_pagination(None, None);
    assert_eq!(page.page, 1);
    assert_eq!(page.limit, DEFAULT_PAGE_SIZE);
    assert_eq!(page.offset(), 0);
}

#[test]
fn consecutive_pages_tile_the_feed_without_gaps_or_overlap() {
    // Ten comments C1..C10 created in order are served newest-first. With
    // limit=3, page 1 covers indexes 0..3 and page 2 covers 3..6 of that
    // ordering: concatenation is the first six comments, no gaps, no repeats.
    let first = clamp_pagination(Some(1), Some(3));
    let second = clamp_pagination(Some(2), Some(3));

    let first_window = first.offset()..first.offset() + first.limit;
    let second_window = second.offset()..second.offset() + second.limit;

    assert_eq!(first_window, 0..3);
    assert_eq!(second_window, 3..6);
}

#[test]
fn page_past_the_end_is_a_valid_window() {
    // A window past the end of the data yields an empty result, not an
    // error; the offset math must stay well-defined.
    let page = clamp_pagination(Some(1000), Some(10));
    assert_eq!(page.offset(), 9990);
}

#[test]
fn limit_is_bounded() {
    assert_eq!(clamp_pagination(None, Some(0)).limit, 1);
    assert_eq!(clamp_pagination(None, Some(10_000)).limit, MAX_PAGE_SIZE);
}

#[test]
fn negative_page_clamps_to_first() {
    let page = clamp_pagination(Some(-3), Some(5));
    assert_eq!(page.page, 1);
    assert_eq!(page.offset(), 0);
}
