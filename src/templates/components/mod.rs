use maud::{html, Markup};

pub mod card;
pub mod error;
pub mod pagination;
pub mod register;

pub use card::{property_card, DescriptionToggle};
pub use error::error_page;
pub use pagination::pagination;
pub use register::register_modal;

pub fn box_title(subtitle: &str, title: &str) -> Markup {
    html! {
        div class="box-title" {
            div class="text-center wow fadeInUp" {
                div class="text-subtitle text-primary" { (subtitle) }
                h3 class="title mt-4" { (title) }
            }
        }
    }
}
