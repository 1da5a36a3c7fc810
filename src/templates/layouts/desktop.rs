use crate::templates::components::register_modal;
use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | Homelengo" }
                link rel="icon" href="/static/favicon/favicon.ico";
                link rel="stylesheet" href="/static/main.css";
                script src="/static/bootstrap.bundle.min.js" defer {}
            }
            body {
                header class="main-header" {
                    a href="/" class="logo" { "Homelengo" }
                    nav {
                        ul class="navigation" {
                            li { a href="/" { "Home" } }
                            li { a href="/sidebar-grid" { "Properties" } }
                        }
                    }
                    a href="#modalRegister" data-bs-toggle="modal" class="tf-btn primary" { "Register" }
                }

                (content)

                (register_modal())
            }
        }
    }
}
