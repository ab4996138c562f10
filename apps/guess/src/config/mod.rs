pub mod frontend;

pub use frontend::{FrontendConfig, OutputMode};
