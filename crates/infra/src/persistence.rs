// crates/infra/src/persistence.rs
mod config_loader;
mod file_reader;

pub use config_loader::{ConfigFormat, load_config, parse_config};
pub use file_reader::FileReader;
