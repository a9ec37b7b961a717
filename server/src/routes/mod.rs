pub mod api;
pub mod charts;
