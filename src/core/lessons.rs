use crate::core::{Cents, ConfigProvider, Lesson, LessonOutput, Point3};
use crate::utils::error::{DemoError, Result};
use crate::utils::scanner::TokenReader;
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::io::BufRead;

/// Boxed line source the point lesson reads from (stdin in the CLI).
pub type LessonInput = Box<dyn BufRead + Send>;

fn join_spaced<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Chains `+` over the configured addends: `6 + 8 + 20 = 34`.
pub struct AdditionLesson {
    addends: Vec<Cents>,
}

impl AdditionLesson {
    pub fn new(addends: Vec<Cents>) -> Self {
        Self { addends }
    }

    pub fn total(&self) -> Cents {
        self.addends.iter().sum()
    }
}

#[async_trait]
impl Lesson for AdditionLesson {
    fn name(&self) -> &str {
        "addition"
    }

    async fn run(&mut self) -> Result<LessonOutput> {
        let expression = self
            .addends
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" + ");
        let total = self.total();

        tracing::debug!("Summed {} addends to {}", self.addends.len(), total);

        Ok(LessonOutput::default().line(format!("{} = {}", expression, total)))
    }
}

pub struct UnaryLesson {
    value: Cents,
}

impl UnaryLesson {
    pub fn new(value: Cents) -> Self {
        Self { value }
    }
}

#[async_trait]
impl Lesson for UnaryLesson {
    fn name(&self) -> &str {
        "unary"
    }

    async fn run(&mut self) -> Result<LessonOutput> {
        let value = self.value;

        Ok(LessonOutput::default()
            .line(format!("-({}) = {}", value, -value))
            .line(format!("is_non_zero({}) = {}", value, value.is_non_zero())))
    }
}

/// Shuffles `0..size` and sorts it back with the `Ord` on `Cents`.
pub struct OrderingLesson {
    size: usize,
    seed: Option<u64>,
}

impl OrderingLesson {
    pub fn new(size: usize, seed: Option<u64>) -> Self {
        Self { size, seed }
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[async_trait]
impl Lesson for OrderingLesson {
    fn name(&self) -> &str {
        "ordering"
    }

    async fn run(&mut self) -> Result<LessonOutput> {
        let mut amounts = vec![Cents::default(); self.size];
        for (i, amount) in amounts.iter_mut().enumerate() {
            amount.set_amount(i as i64);
        }

        amounts.shuffle(&mut self.rng());
        let shuffled = join_spaced(&amounts);

        amounts.sort();
        if let Some(pair) = amounts.windows(2).find(|pair| pair[0] >= pair[1]) {
            return Err(DemoError::ProcessingError {
                message: format!("sorted amounts out of order at {} / {}", pair[0], pair[1]),
            });
        }

        tracing::debug!("Sorted {} shuffled amounts", amounts.len());

        Ok(LessonOutput::default()
            .line(shuffled)
            .line(join_spaced(&amounts)))
    }
}

/// Prints sample points to the console and writes the same line to a text file.
pub struct PointPrintLesson {
    samples: Vec<Point3>,
    output_file: String,
}

impl PointPrintLesson {
    pub fn new(samples: Vec<Point3>, output_file: impl Into<String>) -> Self {
        Self {
            samples,
            output_file: output_file.into(),
        }
    }
}

#[async_trait]
impl Lesson for PointPrintLesson {
    fn name(&self) -> &str {
        "point-print"
    }

    async fn run(&mut self) -> Result<LessonOutput> {
        let printed = join_spaced(&self.samples);

        Ok(LessonOutput::default()
            .line(printed.clone())
            .artifact(self.output_file.clone(), format!("{}\n", printed)))
    }
}

/// Reads `read_count` points from the attached input and prints them.
///
/// The input is blocking (stdin in the CLI), so the read runs on tokio's
/// blocking pool and the reader is handed back afterwards.
pub struct PointReadLesson {
    read_count: usize,
    input: Option<TokenReader<LessonInput>>,
}

impl PointReadLesson {
    pub fn new(read_count: usize) -> Self {
        Self {
            read_count,
            input: None,
        }
    }

    pub fn with_input(mut self, input: LessonInput) -> Self {
        self.input = Some(TokenReader::new(input));
        self
    }
}

fn read_points<R: BufRead>(tokens: &mut TokenReader<R>, count: usize) -> Result<Vec<Point3>> {
    let mut points = vec![Point3::default(); count];
    for point in points.iter_mut() {
        point.read_from(tokens)?;
    }
    Ok(points)
}

#[async_trait]
impl Lesson for PointReadLesson {
    fn name(&self) -> &str {
        "point-read"
    }

    async fn run(&mut self) -> Result<LessonOutput> {
        if self.read_count == 0 {
            return Ok(LessonOutput::default());
        }

        let mut tokens = self.input.take().ok_or_else(|| DemoError::ConfigError {
            message: format!("{} point(s) requested but no input is attached", self.read_count),
        })?;
        let count = self.read_count;

        let (tokens, points) = tokio::task::spawn_blocking(move || {
            let points = read_points(&mut tokens, count);
            (tokens, points)
        })
        .await
        .map_err(|e| DemoError::ProcessingError {
            message: format!("input reader task failed: {}", e),
        })?;
        self.input = Some(tokens);
        let points = points?;

        tracing::debug!("Read {} point(s) from input", points.len());
        Ok(LessonOutput::default().line(join_spaced(&points)))
    }
}

/// The lessons in teaching order. The read lesson is only added when
/// points are requested, and always runs after the print lesson has
/// produced its file.
pub fn standard_lessons<C: ConfigProvider>(
    config: &C,
    input: Option<LessonInput>,
) -> Vec<Box<dyn Lesson>> {
    let addends = config.addends();
    let first = addends.first().copied().unwrap_or_default();

    let mut lessons: Vec<Box<dyn Lesson>> = vec![
        Box::new(AdditionLesson::new(addends)),
        Box::new(UnaryLesson::new(first)),
        Box::new(OrderingLesson::new(config.sort_size(), config.shuffle_seed())),
        Box::new(PointPrintLesson::new(config.sample_points(), config.output_file())),
    ];

    if config.read_points() > 0 {
        let mut read = PointReadLesson::new(config.read_points());
        if let Some(input) = input {
            read = read.with_input(input);
        }
        lessons.push(Box::new(read));
    }

    lessons
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Cursor;

    fn cents(amounts: &[i64]) -> Vec<Cents> {
        amounts.iter().copied().map(Cents::new).collect()
    }

    #[tokio::test]
    async fn test_addition_lesson() {
        let mut lesson = AdditionLesson::new(cents(&[6, 8, 20]));
        assert_eq!(lesson.total().get(), 34);

        let output = lesson.run().await.unwrap();
        assert_eq!(output.console, vec!["6 + 8 + 20 = 34"]);
        assert!(output.artifacts.is_empty());
    }

    #[tokio::test]
    async fn test_unary_lesson() {
        let output = UnaryLesson::new(Cents::new(6)).run().await.unwrap();
        assert_eq!(output.console, vec!["-(6) = -6", "is_non_zero(6) = true"]);

        let output = UnaryLesson::new(Cents::ZERO).run().await.unwrap();
        assert_eq!(output.console[1], "is_non_zero(0) = false");
    }

    #[tokio::test]
    async fn test_ordering_lesson_sorts_shuffled_amounts() {
        let output = OrderingLesson::new(20, Some(7)).run().await.unwrap();
        assert_eq!(output.console.len(), 2);

        let expected = (0..20).map(|i| i.to_string()).collect::<Vec<_>>().join(" ");
        assert_eq!(output.console[1], expected);

        let mut shuffled: Vec<i64> = output.console[0]
            .split(' ')
            .map(|t| t.parse().unwrap())
            .collect();
        shuffled.sort();
        assert_eq!(shuffled, (0..20).collect::<Vec<i64>>());
    }

    #[tokio::test]
    async fn test_ordering_lesson_is_reproducible_with_seed() {
        let a = OrderingLesson::new(20, Some(42)).run().await.unwrap();
        let b = OrderingLesson::new(20, Some(42)).run().await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_point_print_lesson() {
        let samples = vec![Point3::new(2.01, 3.02, 4.04), Point3::new(11.1, 22.2, 33.3)];
        let output = PointPrintLesson::new(samples, "out.txt").run().await.unwrap();

        assert_eq!(output.console, vec!["(2.01, 3.02, 4.04) (11.1, 22.2, 33.3)"]);
        assert_eq!(output.artifacts.len(), 1);
        assert_eq!(output.artifacts[0].path, "out.txt");
        assert_eq!(output.artifacts[0].contents, "(2.01, 3.02, 4.04) (11.1, 22.2, 33.3)\n");
    }

    #[tokio::test]
    async fn test_point_read_lesson_reads_input() {
        let input: LessonInput = Box::new(Cursor::new("1 2 3\n4.5 5.5 6.5\n"));
        let mut lesson = PointReadLesson::new(2).with_input(input);

        let output = lesson.run().await.unwrap();
        assert_eq!(output.console, vec!["(1, 2, 3) (4.5, 5.5, 6.5)"]);
        assert!(output.artifacts.is_empty());
    }

    #[tokio::test]
    async fn test_point_read_lesson_keeps_reader_between_runs() {
        let input: LessonInput = Box::new(Cursor::new("1 2 3 4 5 6"));
        let mut lesson = PointReadLesson::new(1).with_input(input);

        assert_eq!(lesson.run().await.unwrap().console, vec!["(1, 2, 3)"]);
        assert_eq!(lesson.run().await.unwrap().console, vec!["(4, 5, 6)"]);
    }

    #[tokio::test]
    async fn test_point_read_lesson_surfaces_parse_fault() {
        let input: LessonInput = Box::new(Cursor::new("1 2 three"));
        let mut lesson = PointReadLesson::new(1).with_input(input);

        let err = lesson.run().await.unwrap_err();
        assert!(matches!(err, DemoError::InvalidNumber { axis: 'z', .. }));
    }

    #[tokio::test]
    async fn test_point_read_lesson_requires_input() {
        let mut lesson = PointReadLesson::new(1);

        assert!(matches!(lesson.run().await, Err(DemoError::ConfigError { .. })));
    }

    #[tokio::test]
    async fn test_standard_lessons_print_before_read() {
        let config = crate::CliConfig::parse_from(["cents-point", "--read-points", "1"]);
        let input: LessonInput = Box::new(Cursor::new("1 2 3"));

        let names: Vec<String> = standard_lessons(&config, Some(input))
            .iter()
            .map(|lesson| lesson.name().to_string())
            .collect();
        assert_eq!(names, ["addition", "unary", "ordering", "point-print", "point-read"]);

        let config = crate::CliConfig::parse_from(["cents-point"]);
        assert_eq!(standard_lessons(&config, None).len(), 4);
    }
}
