use crate::domain::expansion::ExpansionState;
use crate::domain::listing::ListingViewModel;
use crate::domain::pager::PagerState;
use crate::templates::{box_title, desktop_layout, pagination, property_card, DescriptionToggle};
use maud::{html, Markup};
use url::form_urlencoded;

pub const GRID_PATH: &str = "/sidebar-grid";

pub struct PropertiesVm<'a> {
    /// Only the listings on the current page.
    pub listings: &'a [ListingViewModel],
    pub pager: PagerState,
    pub expansion: &'a ExpansionState,
}

/// Link back to the grid carrying page and expansion state.
pub fn grid_href(page: usize, expansion: &ExpansionState) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair("page", &page.to_string());
    if !expansion.is_empty() {
        query.append_pair("expanded", &expansion.to_query());
    }
    format!("{GRID_PATH}?{}", query.finish())
}

pub fn properties_page(vm: &PropertiesVm) -> Markup {
    desktop_layout(
        "Properties",
        html! {
            section class="flat-section" {
                div class="container" {
                    (box_title("Top Properties", "Best Property Value"))

                    @if vm.listings.is_empty() {
                        p class="text-center" { "No properties available" }
                    } @else {
                        div class="swiper tf-sw-mobile non-swiper-on-767" {
                            div class="tf-layout-mobile-md xl-col-3 md-col-2 swiper-wrapper" {
                                @for listing in vm.listings {
                                    @let toggle = description_toggle(vm, listing);
                                    (property_card(listing, Some(&toggle)))
                                }
                            }
                        }

                        (pagination(&vm.pager, |page| grid_href(page, vm.expansion)))
                    }
                }
            }
        },
    )
}

// Listings without an id have no key to carry in `expanded`, so they
// always show their full description.
fn description_toggle(vm: &PropertiesVm, listing: &ListingViewModel) -> DescriptionToggle {
    if listing.id.as_str().is_empty() {
        return DescriptionToggle {
            expanded: true,
            href: None,
        };
    }

    let next = vm.expansion.toggled(&listing.id);
    DescriptionToggle {
        expanded: vm.expansion.is_expanded(&listing.id),
        href: Some(format!(
            "{}#{}",
            grid_href(vm.pager.current_page, &next),
            listing.anchor_id()
        )),
    }
}
