use crate::error::SynthesisError;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// A parsed examples file: a description line followed by positive and
/// negative example strings, toggled by bare `++`/`--` lines the way the
/// original benchmark corpus is written.
#[derive(Debug, Clone)]
pub struct Benchmark {
    pub description: String,
    pub positives: HashSet<String>,
    pub negatives: HashSet<String>,
}

enum ActiveSet {
    Positive,
    Negative,
}

impl Benchmark {
    /// Reads and parses the file at `path`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SynthesisError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SynthesisError::UnreadableFile {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&text))
    }

    /// Parses the examples-file text format directly: the first line is the
    /// description, every later line is trimmed and either toggles which
    /// example set subsequent lines feed (`++` for positive, `--` for
    /// negative) or is added to the currently active set — including a
    /// blank line, which is the empty-string example, not a separator.
    /// Examples are collected into sets, so duplicate lines within one
    /// example file have no effect — matching the original corpus this
    /// format is grounded on.
    pub fn parse(text: &str) -> Self {
        let mut lines = text.lines();
        let description = lines.next().unwrap_or("").trim().to_string();

        let mut positives = HashSet::new();
        let mut negatives = HashSet::new();
        let mut active = ActiveSet::Positive;

        for raw in lines {
            let line = raw.trim();
            match line {
                "++" => active = ActiveSet::Positive,
                "--" => active = ActiveSet::Negative,
                _ => match active {
                    ActiveSet::Positive => {
                        positives.insert(line.to_string());
                    }
                    ActiveSet::Negative => {
                        negatives.insert(line.to_string());
                    }
                },
            }
        }

        Self {
            description,
            positives,
            negatives,
        }
    }
}
