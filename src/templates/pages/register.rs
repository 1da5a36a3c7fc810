use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Landing page for `/register`; the dialog itself comes with the layout.
pub fn register_page() -> Markup {
    desktop_layout(
        "Register",
        html! {
            main class="container narrow" {
                h1 { "Create an account" }
                p class="lead" {
                    a href="#modalRegister" data-bs-toggle="modal" class="tf-btn primary" { "Open the registration form" }
                }
            }
        },
    )
}
