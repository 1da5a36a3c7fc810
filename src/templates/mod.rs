pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{box_title, pagination, property_card, register_modal, DescriptionToggle};
pub use layouts::desktop::desktop_layout;
