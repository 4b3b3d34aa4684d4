use crate::core::{Lesson, Storage};
use crate::utils::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemoSummary {
    pub lessons_run: usize,
    pub transcript: Vec<String>,
    pub files_written: Vec<String>,
}

pub struct LessonEngine<S: Storage> {
    storage: S,
    lessons: Vec<Box<dyn Lesson>>,
    echo: bool,
}

impl<S: Storage> LessonEngine<S> {
    pub fn new(storage: S, lessons: Vec<Box<dyn Lesson>>) -> Self {
        Self {
            storage,
            lessons,
            echo: false,
        }
    }

    /// Print each console line to stdout as soon as its lesson finishes.
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Runs every lesson in order, stopping at the first failure.
    pub async fn run(&mut self) -> Result<DemoSummary> {
        let mut summary = DemoSummary::default();

        for lesson in self.lessons.iter_mut() {
            tracing::info!("Running lesson '{}'", lesson.name());
            let output = lesson.run().await.inspect_err(|e| {
                tracing::error!("Lesson '{}' failed: {}", lesson.name(), e);
            })?;

            for line in &output.console {
                if self.echo {
                    println!("{}", line);
                }
                tracing::debug!(lesson = lesson.name(), "{}", line);
            }
            summary.transcript.extend(output.console);

            for artifact in output.artifacts {
                let written = self
                    .storage
                    .write_file(&artifact.path, artifact.contents.as_bytes())
                    .await?;
                tracing::info!("Wrote {} bytes to {}", artifact.contents.len(), written);
                summary.files_written.push(written);
            }

            summary.lessons_run += 1;
        }

        Ok(summary)
    }
}
