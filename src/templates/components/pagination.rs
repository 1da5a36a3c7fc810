use crate::domain::pager::PagerState;
use maud::{html, Markup};

/// Prev, one button per page, Next. Disabled controls render as inert
/// buttons so there is nothing to follow.
pub fn pagination<F>(state: &PagerState, href: F) -> Markup
where
    F: Fn(usize) -> String,
{
    html! {
        nav class="pagination-container" aria-label="Pagination" {
            @if state.can_go_prev {
                a class="page-btn" rel="prev" href=(href(state.current_page - 1)) { "Prev" }
            } @else {
                button type="button" class="page-btn" disabled { "Prev" }
            }

            @for page in &state.page_numbers {
                @let active = *page == state.current_page;
                a.page-btn.active[active] aria-current=[active.then_some("page")] href=(href(*page)) {
                    (page)
                }
            }

            @if state.can_go_next {
                a class="page-btn" rel="next" href=(href(state.current_page + 1)) { "Next" }
            } @else {
                button type="button" class="page-btn" disabled { "Next" }
            }
        }
    }
}
