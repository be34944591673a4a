//! Pagination Component
//!
//! Windowed page buttons: first and last page always visible, the current
//! page's neighbours in between, ellipses where pages are skipped.

use leptos::prelude::*;

/// One slot in the pagination row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    Num(u32),
    Ellipsis,
}

/// Visible page-button slots for the current position.
pub fn page_window(current: u32, total: u32) -> Vec<PageSlot> {
    let mut slots = vec![PageSlot::Num(1)];
    if total <= 1 {
        return slots;
    }

    if current > 3 {
        slots.push(PageSlot::Ellipsis);
    }
    let lo = current.saturating_sub(1).max(2);
    let hi = (current + 1).min(total - 1);
    for page in lo..=hi {
        slots.push(PageSlot::Num(page));
    }
    if current + 2 < total {
        slots.push(PageSlot::Ellipsis);
    }

    slots.push(PageSlot::Num(total));
    slots
}

#[component]
pub fn Pagination(
    current: Signal<u32>,
    total: Signal<u32>,
    #[prop(into)] on_select: Callback<u32>,
) -> impl IntoView {
    view! {
        <Show when=move || { total.get() > 1 }>
            <div class="admin-pagination">
                <button
                    class="admin-pagination-button"
                    disabled=move || current.get() == 1
                    on:click=move |_| on_select.run(current.get() - 1)
                >
                    <i class="fas fa-chevron-left"></i>
                </button>

                {move || {
                    page_window(current.get(), total.get())
                        .into_iter()
                        .map(|slot| match slot {
                            PageSlot::Ellipsis => view! {
                                <span class="admin-pagination-ellipsis">"..."</span>
                            }
                            .into_any(),
                            PageSlot::Num(page) => {
                                let class = move || {
                                    if current.get() == page {
                                        "admin-pagination-button active"
                                    } else {
                                        "admin-pagination-button"
                                    }
                                };
                                view! {
                                    <button class=class on:click=move |_| on_select.run(page)>
                                        {page}
                                    </button>
                                }
                                .into_any()
                            }
                        })
                        .collect_view()
                }}

                <button
                    class="admin-pagination-button"
                    disabled=move || current.get() >= total.get()
                    on:click=move |_| on_select.run(current.get() + 1)
                >
                    <i class="fas fa-chevron-right"></i>
                </button>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nums(slots: &[PageSlot]) -> Vec<u32> {
        slots
            .iter()
            .filter_map(|s| match s {
                PageSlot::Num(n) => Some(*n),
                PageSlot::Ellipsis => None,
            })
            .collect()
    }

    #[test]
    fn test_single_page() {
        assert_eq!(page_window(1, 1), vec![PageSlot::Num(1)]);
    }

    #[test]
    fn test_small_range_has_no_ellipsis() {
        let slots = page_window(2, 4);
        assert!(!slots.contains(&PageSlot::Ellipsis));
        assert_eq!(nums(&slots), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_middle_of_long_range() {
        let slots = page_window(10, 20);
        assert_eq!(slots.first(), Some(&PageSlot::Num(1)));
        assert_eq!(slots.last(), Some(&PageSlot::Num(20)));
        assert_eq!(
            slots.iter().filter(|s| **s == PageSlot::Ellipsis).count(),
            2
        );
        assert_eq!(nums(&slots), vec![1, 9, 10, 11, 20]);
    }

    #[test]
    fn test_near_start_and_end() {
        assert_eq!(nums(&page_window(1, 10)), vec![1, 2, 10]);
        assert_eq!(nums(&page_window(10, 10)), vec![1, 9, 10]);
        // No duplicate first/last pages at the edges.
        assert_eq!(nums(&page_window(2, 3)), vec![1, 2, 3]);
    }
}
