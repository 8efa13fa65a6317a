//! Unit tests for the shared listing primitives.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for assertion clarity"
)]

use super::{ListingError, PageMeta, Pagination, Sort, SortDirection, like_pattern, paginate};
use rstest::rstest;

#[rstest]
#[case::zero_page(0, 10)]
#[case::zero_page_size(3, 0)]
#[case::both_zero(0, 0)]
fn pagination_rejects_zero_values(#[case] page: u32, #[case] page_size: u32) {
    let result = Pagination::new(page, page_size);
    assert_eq!(
        result,
        Err(ListingError::InvalidPagination { page, page_size })
    );
}

#[rstest]
#[case::first_page(1, 10, 0)]
#[case::second_page(2, 10, 10)]
#[case::large_window(3, 25, 50)]
fn pagination_offset_skips_preceding_pages(
    #[case] page: u32,
    #[case] page_size: u32,
    #[case] expected_offset: u64,
) {
    let window = Pagination::new(page, page_size).expect("valid window");
    assert_eq!(window.offset(), expected_offset);
}

#[rstest]
#[case::exact_fit(20, 10, 2)]
#[case::remainder_rounds_up(21, 10, 3)]
#[case::single_partial_page(3, 10, 1)]
#[case::empty(0, 10, 0)]
fn page_meta_total_pages_is_ceiling_division(
    #[case] total: u64,
    #[case] page_size: u32,
    #[case] expected_pages: u64,
) {
    let window = Pagination::new(1, page_size).expect("valid window");
    let meta = PageMeta::new(total, Some(window));
    assert_eq!(meta.total, total);
    assert_eq!(meta.total_pages, expected_pages);
}

#[rstest]
fn page_meta_without_window_reports_single_page() {
    let meta = PageMeta::new(7, None);
    assert_eq!(meta.page, 1);
    assert_eq!(meta.page_size, 7);
    assert_eq!(meta.total_pages, 1);

    let empty = PageMeta::new(0, None);
    assert_eq!(empty.total_pages, 0);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Key {
    #[default]
    CreatedAt,
    Title,
}

#[rstest]
fn sort_resolve_requires_both_parameters() {
    let explicit = Sort::resolve(Some(Key::Title), Some(SortDirection::Asc));
    assert_eq!(explicit.key, Key::Title);
    assert_eq!(explicit.direction, SortDirection::Asc);

    for partial in [
        Sort::<Key>::resolve(Some(Key::Title), None),
        Sort::<Key>::resolve(None, Some(SortDirection::Asc)),
        Sort::<Key>::resolve(None, None),
    ] {
        assert_eq!(partial.key, Key::CreatedAt);
        assert_eq!(partial.direction, SortDirection::Desc);
    }
}

#[rstest]
#[case::ascending("asc", SortDirection::Asc)]
#[case::descending("desc", SortDirection::Desc)]
fn sort_direction_parses_known_values(#[case] raw: &str, #[case] expected: SortDirection) {
    assert_eq!(SortDirection::try_from(raw), Ok(expected));
    assert_eq!(expected.as_str(), raw);
}

#[rstest]
#[case::unknown_word("upward")]
#[case::wrong_case("ASC")]
#[case::empty("")]
fn sort_direction_rejects_unknown_values(#[case] raw: &str) {
    assert_eq!(
        SortDirection::try_from(raw),
        Err(ListingError::UnknownSortDirection(raw.to_owned()))
    );
}

#[rstest]
fn paginate_windows_a_sorted_sequence() {
    let items: Vec<u32> = (1..=9).collect();
    let window = Pagination::new(2, 4).expect("valid window");

    assert_eq!(paginate(items.clone(), Some(window)), vec![5, 6, 7, 8]);
    assert_eq!(paginate(items.clone(), None), items);
}

#[rstest]
fn paginate_past_the_end_is_empty() {
    let items: Vec<u32> = (1..=3).collect();
    let window = Pagination::new(5, 10).expect("valid window");
    assert!(paginate(items, Some(window)).is_empty());
}

#[rstest]
#[case::plain("plan", "%plan%")]
#[case::percent("100%", "%100\\%%")]
#[case::underscore("a_b", "%a\\_b%")]
#[case::backslash("a\\b", "%a\\\\b%")]
fn like_pattern_escapes_metacharacters(#[case] search: &str, #[case] expected: &str) {
    assert_eq!(like_pattern(search), expected);
}
