pub mod api;
pub mod feedback;
pub mod logging;
