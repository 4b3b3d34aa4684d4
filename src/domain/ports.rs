use crate::domain::{Cents, Point3};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn output_dir(&self) -> &str;
    fn output_file(&self) -> &str;
    fn addends(&self) -> Vec<Cents>;
    fn sort_size(&self) -> usize;
    fn shuffle_seed(&self) -> Option<u64>;
    fn sample_points(&self) -> Vec<Point3>;
    fn read_points(&self) -> usize;
}

/// A file a lesson wants persisted alongside its console output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: String,
    pub contents: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LessonOutput {
    pub console: Vec<String>,
    pub artifacts: Vec<Artifact>,
}

impl LessonOutput {
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.console.push(line.into());
        self
    }

    pub fn artifact(mut self, path: impl Into<String>, contents: impl Into<String>) -> Self {
        self.artifacts.push(Artifact {
            path: path.into(),
            contents: contents.into(),
        });
        self
    }
}

#[async_trait]
pub trait Lesson: Send {
    fn name(&self) -> &str;
    async fn run(&mut self) -> Result<LessonOutput>;
}
