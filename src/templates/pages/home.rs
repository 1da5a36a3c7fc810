// templates/pages/home.rs

use crate::domain::listing::ListingViewModel;
use crate::templates::{box_title, desktop_layout, property_card};
use maud::{html, Markup};

pub fn home_page(listings: &[ListingViewModel]) -> Markup {
    desktop_layout(
        "Home",
        html! {
            section class="flat-section" {
                div class="container" {
                    (box_title("Top Properties", "Best Property Value"))

                    @if listings.is_empty() {
                        p class="text-center" { "No properties available" }
                    } @else {
                        div class="swiper tf-sw-mobile non-swiper-on-767" {
                            div class="tf-layout-mobile-md xl-col-3 md-col-2 swiper-wrapper" {
                                @for vm in listings {
                                    (property_card(vm, None))
                                }
                            }
                        }
                    }

                    div class="text-center sec-btn" {
                        a href="/sidebar-grid" class="tf-btn btn-view primary size-1 hover-btn-view" {
                            "View All Properties"
                            span class="icon icon-arrow-right2" {}
                        }
                    }
                }
            }
        },
    )
}
