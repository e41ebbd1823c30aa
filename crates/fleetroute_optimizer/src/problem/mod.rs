pub mod kilometers;
pub mod kmh;
pub mod location;
pub mod priority;
pub mod stop;
pub mod time_window;
