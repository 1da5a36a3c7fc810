use crate::domain::listing::{truncate, ListingViewModel, DESCRIPTION_PREVIEW_LEN};
use maud::{html, Markup};

/// Description block state for one card. `href` is the link that flips it;
/// without one the full description is shown and nothing can be toggled.
pub struct DescriptionToggle {
    pub expanded: bool,
    pub href: Option<String>,
}

pub fn property_card(vm: &ListingViewModel, description: Option<&DescriptionToggle>) -> Markup {
    let detail_href = vm.detail_href();

    html! {
        div class="swiper-slide" id=(vm.anchor_id()) {
            div class="homelengo-box" {
                div class="archive-top" {
                    a href=(detail_href) class="images-group" {
                        div class="images-style" {
                            img
                                class="lazyload"
                                data-src=(vm.image_url)
                                alt=(vm.title)
                                src=(vm.image_url)
                                width="615"
                                height="405";
                        }
                        div class="top" {
                            ul class="d-flex gap-6" {
                                li class="flag-tag primary" { "Featured" }
                                li class="flag-tag style-1" { "For Sale" }
                            }
                        }
                        div class="bottom" { (vm.address) }
                    }
                }
                div class="archive-bottom" {
                    div class="content-top" {
                        h6 class="text-capitalize" {
                            a href=(detail_href) class="link" { (vm.title) }
                        }
                        ul class="meta-list" {
                            (meta_item("icon-bed", "Beds:", html! { (vm.bed_count) }))
                            (meta_item("icon-bath", "Baths:", html! { (vm.bath_count) }))
                            (meta_item("icon-sqft", "Sqft:", html! { (vm.area_sqft) }))
                        }
                    }
                    div class="content-bottom" {
                        div class="d-flex gap-8 align-items-center" {
                            div class="avatar avt-40 round" {
                                img alt="Agent Avatar" src=(vm.agent_avatar_url) width="34" height="34";
                            }
                            span { (vm.agent_name) }
                        }
                        h6 class="price" { (vm.price_label()) }

                        @if let Some(toggle) = description {
                            (description_block(vm, toggle))
                        }
                    }
                }
            }
        }
    }
}

fn meta_item(icon: &str, label: &str, value: Markup) -> Markup {
    html! {
        li class="item" {
            i class=(format!("icon {icon}")) {}
            span class="text-variant-1" { (label) }
            span class="fw-6" { (value) }
        }
    }
}

// Short descriptions are shown whole, without a toggle.
fn description_block(vm: &ListingViewModel, toggle: &DescriptionToggle) -> Markup {
    html! {
        div class="description" {
            @match (&toggle.href, vm.has_long_description()) {
                (Some(href), true) => {
                    @if toggle.expanded {
                        (vm.description)
                        " "
                        a href=(href) class="read-more" { "Read Less" }
                    } @else {
                        (truncate(&vm.description, DESCRIPTION_PREVIEW_LEN))
                        " "
                        a href=(href) class="read-more" { "Read More" }
                    }
                }
                _ => (vm.description),
            }
        }
    }
}
