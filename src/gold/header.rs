//! Map header lines: `name <mapName>` followed by `win <totalGold>`.

use crate::error::{GoldError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapHeader {
    pub name: String,
    pub win: i32,
}

impl MapHeader {
    /// Parse the first two lines of a map file. The tile grid after them is ignored.
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text.lines();
        let name_line = lines
            .next()
            .ok_or_else(|| GoldError::InvalidHeader("empty map file".to_string()))?;
        let win_line = lines
            .next()
            .ok_or_else(|| GoldError::InvalidHeader("missing win line".to_string()))?;

        Ok(MapHeader {
            name: parse_name_line(name_line)?,
            win: parse_win_line(win_line)?,
        })
    }
}

pub fn parse_name_line(line: &str) -> Result<String> {
    let rest = line
        .strip_prefix("name ")
        .ok_or_else(|| GoldError::InvalidHeader(format!("expected name line, got {line:?}")))?;

    let name = rest.trim();
    if name.is_empty() {
        return Err(GoldError::InvalidHeader("map name is empty".to_string()));
    }
    Ok(name.to_string())
}

/// The win criterion must be a non-negative integer.
pub fn parse_win_line(line: &str) -> Result<i32> {
    if !line.starts_with("win ") {
        return Err(GoldError::InvalidHeader(format!(
            "expected win line, got {line:?}"
        )));
    }

    // Runs of spaces before the value are accepted.
    let token = line
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| GoldError::InvalidHeader("win line has no value".to_string()))?;

    let win: i32 = token
        .parse()
        .map_err(|_| GoldError::InvalidHeader(format!("win value {token:?} is not a number")))?;

    if win < 0 {
        return Err(GoldError::InvalidHeader(format!(
            "win value must not be negative: {win}"
        )));
    }
    Ok(win)
}
