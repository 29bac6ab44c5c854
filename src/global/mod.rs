pub mod logging;
pub mod middleware;

pub use logging::init_logging;
pub use middleware::request_tracing;
