//! Puzzle text: a seed list followed by stage blocks.
//!
//! ```text
//! seeds: 79 14 55 13
//!
//! seed-to-soil map:
//! 50 98 2
//! 52 50 48
//! ```
//!
//! Blocks are separated by one or more blank lines. Each stage block starts
//! with a `<source>-to-<destination> map:` header followed by
//! `destination_start source_start length` rule lines.

use crate::error::InputError;
use almanac_kernel::{Almanac, Category, Range, Rule, Stage, Unit};
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// Seeds and the stage chain read from one input.
#[derive(Debug, Clone)]
pub struct Puzzle {
    /// Every number on the seed line(s), in order.
    pub seeds: Vec<i64>,
    pub almanac: Almanac,
}

impl Puzzle {
    /// Each seed number as its own seed value.
    pub fn seed_units(&self) -> Vec<Unit> {
        self.seeds
            .iter()
            .map(|&id| Unit::new(Category::Seed, id))
            .collect()
    }

    /// Seed numbers read as consecutive `(start, length)` pairs.
    pub fn seed_ranges(&self) -> Result<Vec<Range>, InputError> {
        if self.seeds.len() % 2 != 0 {
            return Err(InputError::UnpairedSeed {
                count: self.seeds.len(),
            });
        }
        self.seeds
            .chunks_exact(2)
            .map(|pair| Range::new(Category::Seed, pair[0], pair[1]).map_err(InputError::from))
            .collect()
    }
}

/// Read and parse a puzzle file.
pub fn load(path: impl AsRef<Path>) -> Result<Puzzle, InputError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| InputError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    parse(&text)
}

/// Parse puzzle text.
pub fn parse(text: &str) -> Result<Puzzle, InputError> {
    let mut blocks = blocks(text).into_iter();
    let seed_block = blocks.next().ok_or(InputError::MissingSeeds)?;
    let seeds = parse_seeds(&seed_block)?;

    let stages = blocks
        .map(|block| parse_stage(&block))
        .collect::<Result<Vec<_>, _>>()?;
    let almanac = Almanac::new(stages)?;

    tracing::debug!(
        seeds = seeds.len(),
        stages = almanac.len(),
        "parsed puzzle"
    );
    Ok(Puzzle { seeds, almanac })
}

struct Line<'a> {
    number: usize,
    text: &'a str,
}

/// Groups non-blank lines into blank-line separated blocks.
fn blocks(text: &str) -> Vec<Vec<Line<'_>>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
            continue;
        }
        current.push(Line {
            number: index + 1,
            text: trimmed,
        });
    }
    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}

fn stage_header_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([a-z]+)-to-([a-z]+)\s+map:$").expect("stage header regex must compile")
    })
}

fn numbers(line: usize, text: &str) -> Result<Vec<i64>, InputError> {
    text.split_whitespace()
        .map(|token| {
            let invalid = || InputError::InvalidNumber {
                line,
                token: token.to_string(),
            };
            if !token.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            token.parse::<i64>().map_err(|_| invalid())
        })
        .collect()
}

fn parse_seeds(block: &[Line<'_>]) -> Result<Vec<i64>, InputError> {
    let Some((first, rest)) = block.split_first() else {
        return Err(InputError::MissingSeeds);
    };
    let listed = first
        .text
        .strip_prefix("seeds:")
        .ok_or(InputError::MissingSeeds)?;

    let mut seeds = numbers(first.number, listed)?;
    for line in rest {
        seeds.extend(numbers(line.number, line.text)?);
    }
    Ok(seeds)
}

fn parse_category(line: usize, name: &str) -> Result<Category, InputError> {
    name.parse().map_err(|_| InputError::UnknownCategory {
        line,
        name: name.to_string(),
    })
}

fn parse_stage(block: &[Line<'_>]) -> Result<Stage, InputError> {
    let Some((header, lines)) = block.split_first() else {
        unreachable!("blocks are never empty");
    };
    let captures =
        stage_header_re()
            .captures(header.text)
            .ok_or_else(|| InputError::InvalidHeader {
                line: header.number,
                header: header.text.to_string(),
            })?;
    let source = parse_category(header.number, &captures[1])?;
    let destination = parse_category(header.number, &captures[2])?;

    let mut rules = Vec::with_capacity(lines.len());
    for line in lines {
        let values = numbers(line.number, line.text)?;
        let &[destination_start, source_start, length] = values.as_slice() else {
            return Err(InputError::InvalidRule {
                line: line.number,
                reason: format!("expected 3 numbers, found {}", values.len()),
            });
        };
        let rule = Rule::new(destination_start, source_start, length).map_err(|e| {
            InputError::InvalidRule {
                line: line.number,
                reason: e.to_string(),
            }
        })?;
        rules.push(rule);
    }

    Ok(Stage::new(source, destination, rules))
}

#[cfg(test)]
mod tests {
    use super::*;
    use almanac_kernel::AlmanacError;

    #[test]
    fn parses_seed_line_and_one_stage() {
        let puzzle = parse("seeds: 1 2 3 4\n\nseed-to-soil map:\n5 1 2\n").expect("parse");
        assert_eq!(puzzle.seeds, vec![1, 2, 3, 4]);

        let stage = puzzle.almanac.stage(Category::Seed).expect("seed stage");
        assert_eq!(stage.destination, Category::Soil);
        assert_eq!(stage.rules, vec![Rule::new(5, 1, 2).expect("valid rule")]);
    }

    #[test]
    fn tolerates_crlf_and_extra_blank_lines() {
        let text = "seeds: 7 1\r\n\r\n\r\nseed-to-soil map:\r\n10 7 1  \r\n\r\n";
        let puzzle = parse(text).expect("parse");
        assert_eq!(puzzle.seeds, vec![7, 1]);
        assert_eq!(puzzle.almanac.len(), 1);
    }

    #[test]
    fn seed_ranges_pair_up_numbers() {
        let puzzle = parse("seeds: 79 14 55 13").expect("parse");
        assert_eq!(
            puzzle.seed_ranges().expect("pairs"),
            vec![
                Range::new(Category::Seed, 79, 14).expect("valid range"),
                Range::new(Category::Seed, 55, 13).expect("valid range"),
            ]
        );
        assert!(puzzle.almanac.is_empty());
    }

    #[test]
    fn odd_seed_count_only_fails_range_mode() {
        let puzzle = parse("seeds: 1 2 3").expect("parse");
        assert_eq!(puzzle.seed_units().len(), 3);
        assert!(matches!(
            puzzle.seed_ranges(),
            Err(InputError::UnpairedSeed { count: 3 })
        ));
    }

    #[test]
    fn zero_length_seed_range_is_malformed() {
        let puzzle = parse("seeds: 4 0").expect("parse");
        assert!(matches!(
            puzzle.seed_ranges(),
            Err(InputError::Almanac(AlmanacError::MalformedRange {
                start: 4,
                length: 0
            }))
        ));
    }

    #[test]
    fn missing_seed_line() {
        assert!(matches!(parse(""), Err(InputError::MissingSeeds)));
        assert!(matches!(
            parse("seed-to-soil map:\n1 2 3"),
            Err(InputError::MissingSeeds)
        ));
    }

    #[test]
    fn reports_bad_numbers_with_line() {
        let err = parse("seeds: 1 -2").expect_err("negative seed");
        assert!(matches!(err, InputError::InvalidNumber { line: 1, .. }));

        let err = parse("seeds: 1\n\nseed-to-soil map:\n1 x 3").expect_err("bad token");
        assert!(matches!(err, InputError::InvalidNumber { line: 4, ref token } if token == "x"));
    }

    #[test]
    fn reports_bad_headers_and_categories() {
        let err = parse("seeds: 1\n\nseed to soil:\n1 2 3").expect_err("bad header");
        assert!(matches!(err, InputError::InvalidHeader { line: 3, .. }));

        let err = parse("seeds: 1\n\nseed-to-moisture map:\n1 2 3").expect_err("bad category");
        assert!(
            matches!(err, InputError::UnknownCategory { line: 3, ref name } if name == "moisture")
        );
    }

    #[test]
    fn reports_bad_rules() {
        let err = parse("seeds: 1\n\nseed-to-soil map:\n1 2").expect_err("short rule");
        assert!(matches!(err, InputError::InvalidRule { line: 4, .. }));

        let err = parse("seeds: 1\n\nseed-to-soil map:\n1 2 0").expect_err("empty rule");
        assert!(matches!(err, InputError::InvalidRule { line: 4, .. }));
    }

    #[test]
    fn duplicate_stage_source_is_rejected() {
        let text = "seeds: 1\n\nseed-to-soil map:\n1 2 3\n\nseed-to-water map:\n1 2 3";
        assert!(matches!(
            parse(text),
            Err(InputError::Almanac(AlmanacError::DuplicateStage {
                category: Category::Seed
            }))
        ));
    }
}
