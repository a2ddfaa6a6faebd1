//! Reusable Yew hooks shared across pages and components.

use yew::prelude::*;

/// Client-side pagination over an already-fetched vector.
///
/// Returns the visible slice, the clamped current page, the page count, and
/// a go-to-page callback. When the input shrinks (say, a filter change cuts
/// the result set) the current page clamps back into range instead of
/// pointing past the end.
#[hook]
pub fn use_pagination<T>(
    items: Vec<T>,
    per_page: usize,
) -> (Vec<T>, usize, usize, Callback<usize>)
where
    T: Clone + PartialEq + 'static,
{
    let per_page = per_page.max(1);
    let total_pages = page_count(items.len(), per_page);
    let current_page = use_state(|| 1usize);

    {
        let current_page = current_page.clone();
        use_effect_with(total_pages, move |total| {
            let clamped = clamp_page(*current_page, *total);
            if clamped != *current_page {
                current_page.set(clamped);
            }
            || ()
        });
    }

    let page = clamp_page(*current_page, total_pages);
    let start = per_page * (page - 1);
    let end = usize::min(start + per_page, items.len());
    let visible = if items.is_empty() { Vec::new() } else { items[start..end].to_vec() };

    let go_to_page = {
        let current_page = current_page.clone();
        Callback::from(move |target: usize| {
            let next = clamp_page(target, total_pages);
            if next != *current_page {
                current_page.set(next);
            }
        })
    };

    (visible, page, total_pages, go_to_page)
}

fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

fn page_count(len: usize, per_page: usize) -> usize {
    if len == 0 {
        1
    } else {
        len.div_ceil(per_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(0, 6), 1);
        assert_eq!(page_count(6, 6), 1);
        assert_eq!(page_count(7, 6), 2);
        assert_eq!(page_count(13, 6), 3);
    }

    #[test]
    fn clamp_keeps_pages_in_range() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(9, 3), 3);
        assert_eq!(clamp_page(5, 0), 1);
    }
}
