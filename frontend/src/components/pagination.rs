use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub current_page: usize,
    pub total_pages: usize,
    pub on_page_change: Callback<usize>,
}

enum PageSlot {
    Page(usize),
    Ellipsis(&'static str),
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    if props.total_pages <= 1 {
        return Html::default();
    }

    let total_pages = props.total_pages;
    let current_page = props.current_page.clamp(1, total_pages);
    let on_page_change = props.on_page_change.clone();

    let prev_onclick = {
        let on_page_change = on_page_change.clone();
        Callback::from(move |_| {
            if current_page > 1 {
                on_page_change.emit(current_page - 1);
            }
        })
    };

    let next_onclick = {
        let on_page_change = on_page_change.clone();
        Callback::from(move |_| {
            if current_page < total_pages {
                on_page_change.emit(current_page + 1);
            }
        })
    };

    html! {
        <nav class={classes!("pagination")} aria-label="Pagination">
            <button
                type="button"
                class={classes!("pagination-btn")}
                disabled={current_page <= 1}
                onclick={prev_onclick}
                aria-label="Previous page"
            >
                { "<" }
            </button>
            { for visible_slots(current_page, total_pages).into_iter().map(|slot| match slot {
                PageSlot::Page(page) => {
                    let onclick = {
                        let on_page_change = on_page_change.clone();
                        Callback::from(move |_| on_page_change.emit(page))
                    };
                    let is_current = page == current_page;
                    html! {
                        <button
                            key={format!("page-{page}")}
                            type="button"
                            class={classes!("pagination-btn", is_current.then_some("pagination-current"))}
                            aria-label={format!("Go to page {page}")}
                            aria-current={is_current.then_some(AttrValue::from("page"))}
                            disabled={is_current}
                            onclick={onclick}
                        >
                            { page }
                        </button>
                    }
                }
                PageSlot::Ellipsis(id) => html! {
                    <span
                        key={format!("ellipsis-{id}")}
                        class={classes!("pagination-ellipsis")}
                        aria-hidden="true"
                    >
                        { "..." }
                    </span>
                },
            }) }
            <button
                type="button"
                class={classes!("pagination-btn")}
                disabled={current_page >= total_pages}
                onclick={next_onclick}
                aria-label="Next page"
            >
                { ">" }
            </button>
        </nav>
    }
}

// First and last pages stay visible; a window of two pages rides along with
// the current one, with ellipses covering the gaps.
fn visible_slots(current: usize, total: usize) -> Vec<PageSlot> {
    if total <= 7 {
        return (1..=total).map(PageSlot::Page).collect();
    }

    let mut slots = vec![PageSlot::Page(1)];

    let (start, end) = if current <= 3 {
        (2, 5)
    } else if current + 2 >= total {
        (total - 4, total - 1)
    } else {
        (current - 2, current + 2)
    };

    if start > 2 {
        slots.push(PageSlot::Ellipsis("left"));
    }
    for page in start..=end {
        slots.push(PageSlot::Page(page));
    }
    if end < total - 1 {
        slots.push(PageSlot::Ellipsis("right"));
    }

    slots.push(PageSlot::Page(total));
    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(slots: &[PageSlot]) -> Vec<Option<usize>> {
        slots
            .iter()
            .map(|slot| match slot {
                PageSlot::Page(page) => Some(*page),
                PageSlot::Ellipsis(_) => None,
            })
            .collect()
    }

    #[test]
    fn small_page_counts_show_everything() {
        let slots = visible_slots(3, 7);
        assert_eq!(pages(&slots), (1..=7).map(Some).collect::<Vec<_>>());
    }

    #[test]
    fn middle_pages_get_both_ellipses() {
        let slots = visible_slots(10, 20);
        assert_eq!(
            pages(&slots),
            vec![Some(1), None, Some(8), Some(9), Some(10), Some(11), Some(12), None, Some(20)]
        );
    }

    #[test]
    fn edges_keep_a_five_page_window() {
        assert_eq!(
            pages(&visible_slots(1, 20)),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5), None, Some(20)]
        );
        assert_eq!(
            pages(&visible_slots(20, 20)),
            vec![Some(1), None, Some(16), Some(17), Some(18), Some(19), Some(20)]
        );
    }
}
