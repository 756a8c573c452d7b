mod config_path;
mod decode;

pub use config_path::run_config_path;
pub use decode::run_decode;
