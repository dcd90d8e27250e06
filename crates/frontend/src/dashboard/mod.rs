pub mod api;
pub mod load;
pub mod ui;
