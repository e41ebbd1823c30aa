pub mod construction;
pub mod efficiency;
pub mod ls;
pub mod optimizer;
pub mod strategy;
pub mod time_window_filter;
pub mod tour;
