//! Process-level plumbing shared by the binary and the tests:
//! where files live, where logs go and what happens on panic.

pub mod logging;
pub mod panic;
pub mod paths;

pub use logging::initialize_logging;
pub use panic::initialize_panic_handler;
pub use paths::{get_config_dir, get_data_dir, version};
