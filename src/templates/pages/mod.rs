pub mod home;
pub mod properties;
pub mod register;

pub use home::home_page;
pub use properties::{properties_page, PropertiesVm};
pub use register::register_page;
