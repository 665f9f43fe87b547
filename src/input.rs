//! Text interfaces the core consumes: a delimited cost matrix and a
//! `start>end` route specifier with single-letter node names.

use crate::errors::{MalformedGraph, MalformedRoute};
use crate::network::Network;
use num_traits::NumAssign;
use std::fs::read_to_string;
use std::path::Path;
use std::str::FromStr;

pub const MATRIX_DELIMITER: char = ',';
pub const ROUTE_SEPARATOR: char = '>';

/// One row per non-blank line, values split on the delimiter. Squareness
/// is checked later by `Network::from_matrix`.
pub fn parse_matrix<Flow>(text: &str) -> Result<Vec<Vec<Flow>>, MalformedGraph>
where
    Flow: FromStr,
{
    let mut matrix = Vec::new();
    for (row, line) in text.lines().filter(|line| !line.trim().is_empty()).enumerate() {
        let mut entries = Vec::new();
        for (column, token) in line.split(MATRIX_DELIMITER).enumerate() {
            let token = token.trim();
            match token.parse() {
                Ok(value) => entries.push(value),
                Err(_) => return Err(MalformedGraph::NonNumeric { row, column, token: token.to_string() }),
            }
        }
        matrix.push(entries);
    }
    Ok(matrix)
}

pub fn read_network<Flow>(path: &Path) -> Result<Network<Flow>, MalformedGraph>
where
    Flow: NumAssign + Ord + Copy + FromStr,
{
    let text = read_to_string(path)?;
    Network::from_matrix(parse_matrix(&text)?)
}

/// Parses `"A>D"` into `(0, 3)`. Whitespace is ignored; exactly one
/// separator and one uppercase letter per side are required. Pure: failure
/// leaves no state behind.
pub fn parse_route(text: &str) -> Result<(usize, usize), MalformedRoute> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let parts: Vec<&str> = compact.split(ROUTE_SEPARATOR).collect();
    if parts.len() != 2 {
        return Err(MalformedRoute::SeparatorCount { found: parts.len() - 1 });
    }
    Ok((node_index(parts[0])?, node_index(parts[1])?))
}

pub fn read_route(path: &Path) -> Result<(usize, usize), MalformedRoute> {
    parse_route(&read_to_string(path)?)
}

// letters map to 0-based indices via their alphabetic position
fn node_index(token: &str) -> Result<usize, MalformedRoute> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c @ 'A'..='Z'), None) => Ok(c as usize - 'A' as usize),
        _ => Err(MalformedRoute::BadNode { token: token.to_string() }),
    }
}

/// Inverse of the route encoding, for report formatting.
#[inline]
pub fn node_letter(id: usize) -> char {
    (b'A' + id as u8) as char
}
