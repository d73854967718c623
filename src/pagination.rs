//! Page-range calculation for pagination strips.
//!
//! Maps a (current page, total pages) pair to the ordered sequence of labels
//! a pagination control should display, collapsing long runs of page numbers
//! with ellipsis markers so the control stays a bounded width.

/// A single slot in the pagination strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLabel {
    /// A clickable page number (1-indexed).
    Page(u32),
    /// A collapsed run of two or more pages.
    Ellipsis,
}

/// Totals at or below this render every page number with no ellipsis.
const SMALL_TOTAL: u32 = 7;

/// Compute the labels to display for the given pagination state.
///
/// Policy:
/// - `total_pages <= 7`: every page number, no ellipsis.
/// - Otherwise page 1 and `total_pages` are always shown, plus a window of
///   `current_page - 1 ..= current_page + 1` clipped to the valid range.
/// - A gap of exactly one page between two shown numbers displays that page;
///   a gap of two or more collapses to a single ellipsis.
///
/// The output is strictly ascending with no duplicates and never two adjacent
/// ellipses. This function is total: out-of-range `current_page` values are
/// clamped into `[1, total_pages]`, although callers are expected to clamp
/// before navigation is ever attempted.
#[must_use]
pub fn page_range(current_page: u32, total_pages: u32) -> Vec<PageLabel> {
    let total = total_pages.max(1);
    let current = current_page.clamp(1, total);

    if total <= SMALL_TOTAL {
        return (1..=total).map(PageLabel::Page).collect();
    }

    // Pages that must appear: first, last, and the window around current.
    let window_start = current.saturating_sub(1).max(1);
    let window_end = (current + 1).min(total);

    let mut shown: Vec<u32> = vec![1];
    for page in window_start..=window_end {
        if page > 1 && page < total {
            shown.push(page);
        }
    }
    shown.push(total);

    let mut labels = Vec::with_capacity(shown.len() + 2);
    let mut previous: Option<u32> = None;
    for &page in &shown {
        if let Some(prev) = previous {
            match page - prev {
                1 => {}
                // A single hidden page is cheaper to show than to collapse.
                2 => labels.push(PageLabel::Page(page - 1)),
                _ => labels.push(PageLabel::Ellipsis),
            }
        }
        labels.push(PageLabel::Page(page));
        previous = Some(page);
    }
    labels
}

/// Number of pages needed to display `matches` items at `per_page` each.
///
/// Always at least 1 so an empty result set still has a valid current page.
#[must_use]
pub fn page_count(matches: usize, per_page: usize) -> u32 {
    if per_page == 0 {
        return 1;
    }
    let pages = matches.div_ceil(per_page);
    u32::try_from(pages.max(1)).unwrap_or(u32::MAX)
}
