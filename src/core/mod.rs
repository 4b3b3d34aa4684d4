pub mod engine;
pub mod lessons;

pub use crate::domain::ports::{Artifact, ConfigProvider, Lesson, LessonOutput, Storage};
pub use crate::domain::{Cents, Point3};
pub use crate::utils::error::Result;
