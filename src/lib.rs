pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, toml_config::TomlConfig, CliConfig};
pub use core::{
    engine::{DemoSummary, LessonEngine},
    lessons::standard_lessons,
};
pub use domain::{Cents, Point3};
pub use utils::error::{DemoError, Result};
