// src/filter.rs
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};

use crate::error::FilterError;

/// Configuration for a filter pass
#[derive(Debug, Clone)]
pub struct FilterConfig {
    pub debug: bool,
    pub buffer_size: usize,
    pub max_line_length: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig {
            debug: false,
            buffer_size: 65536,       // 64KB
            max_line_length: 1048576, // 1MB
        }
    }
}

/// Ordered set of suffix patterns.
///
/// A line matches when it ends with at least one pattern (logical OR,
/// short-circuiting on the first hit). Matching is case-sensitive and
/// byte-exact. An empty set matches nothing.
#[derive(Debug, Clone, Default)]
pub struct SuffixSet {
    patterns: Vec<String>,
}

impl SuffixSet {
    pub fn new(patterns: Vec<String>) -> Self {
        SuffixSet { patterns }
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Check a newline-stripped line against the set
    pub fn matches(&self, path: &[u8]) -> bool {
        self.patterns.iter().any(|p| path.ends_with(p.as_bytes()))
    }
}

impl FromIterator<String> for SuffixSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        SuffixSet::new(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for SuffixSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        SuffixSet::new(iter.into_iter().map(|s| s.to_string()).collect())
    }
}

/// Runtime statistics for a single pass
#[derive(Debug, Default, Clone)]
pub struct FilterStats {
    pub lines_read: usize,
    pub lines_matched: usize,
    pub processing_time: Duration,
}

/// Filter a stream of path lines by suffix.
///
/// Lines are handled as raw bytes. Only the trailing `\n` is stripped for
/// the suffix test (a `\r` before it stays, so CRLF input does not match
/// unless the pattern accounts for it). Matching lines are written back
/// unmodified, terminator included; a final line without a terminator is
/// tested and copied as-is.
///
/// Fail-fast: the first I/O error aborts the pass and the output is left
/// at whatever state was reached.
pub fn filter_stream<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    patterns: &SuffixSet,
    config: &FilterConfig,
) -> Result<FilterStats, FilterError> {
    let start_time = Instant::now();
    let mut stats = FilterStats::default();

    let mut line: Vec<u8> = Vec::new();
    loop {
        line.clear();
        let n = input.read_until(b'\n', &mut line)?;
        if n == 0 {
            break;
        }

        stats.lines_read += 1;

        if line.len() > config.max_line_length {
            return Err(FilterError::LineTooLong {
                length: line.len(),
                max_length: config.max_line_length,
            });
        }

        let stripped = match line.last() {
            Some(b'\n') => &line[..line.len() - 1],
            _ => &line[..],
        };

        if patterns.matches(stripped) {
            output.write_all(&line)?;
            stats.lines_matched += 1;
        }
    }

    stats.processing_time = start_time.elapsed();

    if config.debug {
        eprintln!(
            "listsift: {} of {} lines matched",
            stats.lines_matched, stats.lines_read
        );
    }

    Ok(stats)
}

/// Filter one list file into another.
///
/// Opens `input_path` for buffered reading, creates or truncates
/// `output_path`, and runs a single [`filter_stream`] pass. The output file
/// is created even when nothing matches (zero-byte result).
pub fn filter_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input_path: P,
    output_path: Q,
    patterns: &SuffixSet,
    config: &FilterConfig,
) -> Result<FilterStats, FilterError> {
    let input = File::open(input_path)?;
    let mut reader = BufReader::with_capacity(config.buffer_size, input);

    let output = File::create(output_path)?;
    let mut writer = BufWriter::with_capacity(config.buffer_size, output);

    let stats = filter_stream(&mut reader, &mut writer, patterns, config)?;
    writer.flush()?;

    Ok(stats)
}
