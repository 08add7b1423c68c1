pub mod dispatch;
pub mod render;
pub mod status;

pub use dispatch::{dispatch, run_command};
