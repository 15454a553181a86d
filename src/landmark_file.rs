//! Text dumps of detector output.
//!
//! One landmark per line, either `x y` or `index x y`, separated by
//! whitespace or commas. `#` starts a comment and blank lines separate poses;
//! a line holding only a comment does not.

use std::{fs, path::Path};

use anyhow::Context;
use thiserror::Error;

use crate::landmark::{HandPose, PoseError};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("line {line}: expected `x y` or `index x y`, got {count} fields")]
    FieldCount { line: usize, count: usize },

    #[error("line {line}: invalid number `{value}`")]
    InvalidNumber { line: usize, value: String },

    #[error("line {line}: mixes indexed and positional rows")]
    MixedRows { line: usize },

    #[error("pose starting at line {line}: {source}")]
    Pose {
        line: usize,
        #[source]
        source: PoseError,
    },
}

enum Row {
    Positional(f32, f32),
    Indexed(usize, f32, f32),
}

#[derive(Default)]
struct Block {
    start_line: usize,
    positional: Vec<(f32, f32)>,
    indexed: Vec<(usize, f32, f32)>,
}

impl Block {
    fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.indexed.is_empty()
    }

    fn push(&mut self, line: usize, row: Row) -> Result<(), ParseError> {
        if self.is_empty() {
            self.start_line = line;
        }
        match row {
            Row::Positional(x, y) if self.indexed.is_empty() => self.positional.push((x, y)),
            Row::Indexed(i, x, y) if self.positional.is_empty() => self.indexed.push((i, x, y)),
            _ => return Err(ParseError::MixedRows { line }),
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<Option<HandPose>, ParseError> {
        if self.is_empty() {
            return Ok(None);
        }
        let block = std::mem::take(self);
        let pose = if block.indexed.is_empty() {
            HandPose::from_points(&block.positional)
        } else {
            HandPose::from_indexed(&block.indexed)
        };
        pose.map(Some).map_err(|source| ParseError::Pose {
            line: block.start_line,
            source,
        })
    }
}

pub fn parse_landmark_text(text: &str) -> Result<Vec<HandPose>, ParseError> {
    let mut poses = Vec::new();
    let mut block = Block::default();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        if raw.trim().is_empty() {
            poses.extend(block.finish()?);
            continue;
        }

        let content = raw.split('#').next().unwrap_or_default().trim();
        if content.is_empty() {
            continue;
        }

        block.push(line, parse_row(line, content)?)?;
    }
    poses.extend(block.finish()?);

    Ok(poses)
}

pub fn read_landmark_file(path: &Path) -> anyhow::Result<Vec<HandPose>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read landmark file {}", path.display()))?;
    parse_landmark_text(&text)
        .with_context(|| format!("failed to parse landmark file {}", path.display()))
}

fn parse_row(line: usize, content: &str) -> Result<Row, ParseError> {
    let fields: Vec<&str> = content
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|f| !f.is_empty())
        .collect();

    let number = |value: &str| -> Result<f32, ParseError> {
        value.parse::<f32>().map_err(|_| ParseError::InvalidNumber {
            line,
            value: value.to_string(),
        })
    };

    match fields.as_slice() {
        &[x, y] => Ok(Row::Positional(number(x)?, number(y)?)),
        &[index, x, y] => {
            let index = index.parse::<usize>().map_err(|_| ParseError::InvalidNumber {
                line,
                value: index.to_string(),
            })?;
            Ok(Row::Indexed(index, number(x)?, number(y)?))
        }
        _ => Err(ParseError::FieldCount {
            line,
            count: fields.len(),
        }),
    }
}
