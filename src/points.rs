//! Point evidence and the plain-text point list reader.
//!
//! A point list is a whitespace-separated stream of integer `row col` pairs,
//! any number per line. Reading stops at the first token that is not an
//! integer or at a dangling half pair; everything before it is kept.
use crate::error::{Result, TransformError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Integer evidence location in raster coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgePoint {
    pub row: i64,
    pub col: i64,
}

impl EdgePoint {
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }
}

/// Parse `row col` pairs until the first malformed token.
pub fn parse_points(text: &str) -> Vec<EdgePoint> {
    let mut tokens = text.split_ascii_whitespace().map(str::parse::<i64>);
    let mut points = Vec::new();
    while let (Some(Ok(row)), Some(Ok(col))) = (tokens.next(), tokens.next()) {
        points.push(EdgePoint::new(row, col));
    }
    points
}

/// Read and parse a point list file.
pub fn read_points(path: &Path) -> Result<Vec<EdgePoint>> {
    let text = fs::read_to_string(path).map_err(|e| TransformError::io(path, e))?;
    Ok(parse_points(&text))
}

/// Largest `|row|` and `|col|` over the evidence, `(0, 0)` when empty.
pub fn extent(points: &[EdgePoint]) -> (u64, u64) {
    points.iter().fold((0, 0), |(r, c), p| {
        (r.max(p.row.unsigned_abs()), c.max(p.col.unsigned_abs()))
    })
}
