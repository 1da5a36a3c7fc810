pub mod expansion;
pub mod listing;
pub mod pager;
