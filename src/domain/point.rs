use crate::utils::error::{DemoError, Result};
use crate::utils::scanner::TokenReader;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{BufRead, Cursor};
use std::str::FromStr;

/// A position in 3D space.
///
/// Displays as `(x, y, z)` but reads back from bare whitespace-separated
/// numbers, so the printed form is not accepted as input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    x: f64,
    y: f64,
    z: f64,
}

impl Point3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub const fn x(&self) -> f64 {
        self.x
    }

    pub const fn y(&self) -> f64 {
        self.y
    }

    pub const fn z(&self) -> f64 {
        self.z
    }

    /// Reads three tokens into x, y and z, in that order.
    ///
    /// Each coordinate is stored as soon as its token parses. When a read
    /// fails, the coordinates before the failing one hold their new values
    /// and the rest keep their previous ones. A malformed token is consumed;
    /// anything after z is left in the reader.
    pub fn read_from<R: BufRead>(&mut self, tokens: &mut TokenReader<R>) -> Result<()> {
        self.x = read_coordinate(tokens, 'x')?;
        self.y = read_coordinate(tokens, 'y')?;
        self.z = read_coordinate(tokens, 'z')?;
        Ok(())
    }
}

fn read_coordinate<R: BufRead>(tokens: &mut TokenReader<R>, axis: char) -> Result<f64> {
    let token = tokens
        .next_token()?
        .ok_or(DemoError::MissingToken { axis })?;

    token
        .parse::<f64>()
        .map_err(|source| DemoError::InvalidNumber { axis, token, source })
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "({:.p$}, {:.p$}, {:.p$})", self.x, self.y, self.z, p = p),
            None => write!(f, "({}, {}, {})", self.x, self.y, self.z),
        }
    }
}

impl FromStr for Point3 {
    type Err = DemoError;

    /// Parses exactly three whitespace-separated numbers.
    fn from_str(s: &str) -> Result<Self> {
        let mut tokens = TokenReader::new(Cursor::new(s.as_bytes()));
        let mut point = Point3::default();
        point.read_from(&mut tokens)?;

        match tokens.next_token()? {
            Some(token) => Err(DemoError::TrailingInput { token }),
            None => Ok(point),
        }
    }
}
