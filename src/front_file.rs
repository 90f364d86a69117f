//! Plain-text Pareto front files.
//!
//! One solution per line, objective values separated by single spaces.
//! Fronts within a file are separated by a blank line:
//!
//! ```text
//! 0.0 1.0
//! 0.5 0.5
//! 1.0 0.0
//!
//! 0.2 0.9
//! 0.9 0.2
//! ```
//!
//! Only objective vectors are stored; variables and metadata are not.

use crate::error::{MoeaError, Result};
use crate::model::{Population, Solution};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Lines, Write};
use std::path::Path;

/// Splits a line on single spaces. Empty tokens (doubled, leading or
/// trailing spaces) and tabs are format errors.
fn parse_line(text: &str, line: usize) -> Result<Vec<f64>> {
    text.strip_suffix('\r')
        .unwrap_or(text)
        .split(' ')
        .map(|token| {
            if token.is_empty() {
                return Err(MoeaError::FrontFormat {
                    line,
                    message: "empty value, values must be separated by single spaces".into(),
                });
            }
            token.parse::<f64>().map_err(|_| MoeaError::FrontFormat {
                line,
                message: format!("malformed number {token:?}"),
            })
        })
        .collect()
}

/// Streams fronts out of a reader, one [`Population`] per front.
///
/// Runs of blank lines count as one separator. Reading stops at end of
/// input; after the first error the iterator is exhausted, while fronts
/// already yielded stay valid.
///
/// ```
/// use u_moea::front_file::FrontReader;
///
/// let text = "1 2\n2 1\n\n3 3\n";
/// let fronts: Vec<_> = FrontReader::new(text.as_bytes())
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(fronts.len(), 2);
/// assert_eq!(fronts[1][0].objectives(), &[3.0, 3.0]);
/// ```
pub struct FrontReader<R> {
    lines: Lines<R>,
    line: usize,
    done: bool,
}

impl<R: BufRead> FrontReader<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
            done: false,
        }
    }

    fn read_front(&mut self) -> Result<Option<Population>> {
        let mut front = Population::new();
        let mut dimension = None;

        for text in self.lines.by_ref() {
            let text = text?;
            self.line += 1;

            if text.trim().is_empty() {
                if front.is_empty() {
                    continue;
                }
                break;
            }

            let objectives = parse_line(&text, self.line)?;
            match dimension {
                None => dimension = Some(objectives.len()),
                Some(d) if d != objectives.len() => {
                    return Err(MoeaError::FrontFormat {
                        line: self.line,
                        message: format!("expected {d} values, found {}", objectives.len()),
                    });
                }
                Some(_) => {}
            }
            front.push(Solution::from_objectives(objectives));
        }

        Ok((!front.is_empty()).then_some(front))
    }
}

impl<R: BufRead> Iterator for FrontReader<R> {
    type Item = Result<Population>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.read_front() {
            Ok(Some(front)) => Some(Ok(front)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Reads every front from `reader`.
pub fn read_fronts<R: BufRead>(reader: R) -> Result<Vec<Population>> {
    FrontReader::new(reader).collect()
}

/// Writes fronts in the plain-text format, a blank line between fronts.
///
/// Values use Rust's shortest round-trip float formatting, so reading the
/// output back yields identical objective vectors.
pub fn write_fronts<W: Write>(mut writer: W, fronts: &[Population]) -> Result<()> {
    for (i, front) in fronts.iter().enumerate() {
        if i > 0 {
            writeln!(writer)?;
        }
        for solution in front.iter() {
            let line: Vec<String> = solution.objectives().iter().map(f64::to_string).collect();
            writeln!(writer, "{}", line.join(" "))?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Reads every front from the file at `path`.
pub fn load_fronts(path: impl AsRef<Path>) -> Result<Vec<Population>> {
    read_fronts(BufReader::new(File::open(path)?))
}

/// Writes fronts to the file at `path`, replacing its contents.
pub fn save_fronts(path: impl AsRef<Path>, fronts: &[Population]) -> Result<()> {
    write_fronts(BufWriter::new(File::create(path)?), fronts)
}
