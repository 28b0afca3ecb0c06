//! The top-scorer utility: parse `Name:Score, Name:Score, ...` and report
//! who scored highest.

use std::fmt;

/// Scores strictly above this earn the trophy message.
pub const OUTSTANDING_THRESHOLD: i64 = 95;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreEntry {
    pub name: String,
    pub score: i64,
}

/// Why a line of scores was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScoreError {
    /// Blank or whitespace-only input.
    EmptyInput,
    /// An entry did not split into exactly `name` and `score`.
    MalformedEntry { entry: String },
    /// The score half of an entry is not an integer.
    InvalidScore { name: String, token: String },
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Please enter at least one score."),
            Self::MalformedEntry { .. } => {
                write!(f, "Error: Incorrect format. Please use 'Name:Score' format.")
            }
            Self::InvalidScore { name, token } => write!(
                f,
                "Error: invalid score '{token}' for {name}. Please use 'Name:Score' format."
            ),
        }
    }
}

impl std::error::Error for ScoreError {}

/// Parse a comma-separated list of `name:score` pairs.
///
/// Names and scores are trimmed.  A name given twice keeps its first
/// position and takes the later score.
pub fn parse_scores(input: &str) -> Result<Vec<ScoreEntry>, ScoreError> {
    if input.trim().is_empty() {
        return Err(ScoreError::EmptyInput);
    }

    let mut entries: Vec<ScoreEntry> = Vec::new();
    for raw in input.split(',') {
        let parts: Vec<&str> = raw.trim().split(':').collect();
        let [name, token] = parts.as_slice() else {
            return Err(ScoreError::MalformedEntry {
                entry: raw.trim().to_string(),
            });
        };
        let name = name.trim();
        let token = token.trim();
        let score = token.parse::<i64>().map_err(|_| ScoreError::InvalidScore {
            name: name.to_string(),
            token: token.to_string(),
        })?;

        match entries.iter_mut().find(|e| e.name == name) {
            Some(existing) => existing.score = score,
            None => entries.push(ScoreEntry {
                name: name.to_string(),
                score,
            }),
        }
    }
    Ok(entries)
}

/// The first entry holding the highest score.
pub fn top_scorer(entries: &[ScoreEntry]) -> Option<&ScoreEntry> {
    entries.iter().fold(None, |best: Option<&ScoreEntry>, entry| match best {
        Some(b) if b.score >= entry.score => Some(b),
        _ => Some(entry),
    })
}

/// What the utility reports for a valid line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Top score above [`OUTSTANDING_THRESHOLD`].
    Outstanding { name: String, score: i64 },
    Highest { name: String, score: i64 },
}

impl Verdict {
    pub fn is_outstanding(&self) -> bool {
        matches!(self, Verdict::Outstanding { .. })
    }

    pub fn name(&self) -> &str {
        match self {
            Verdict::Outstanding { name, .. } | Verdict::Highest { name, .. } => name,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Outstanding { name, .. } => {
                write!(f, "Highest Score > {OUTSTANDING_THRESHOLD} by {name} 🏆")
            }
            Verdict::Highest { name, score } => write!(f, "Highest Score: {score} by {name}"),
        }
    }
}

/// Parse a line and pick the winner.
pub fn evaluate(input: &str) -> Result<Verdict, ScoreError> {
    let entries = parse_scores(input)?;
    let top = top_scorer(&entries).ok_or(ScoreError::EmptyInput)?;
    let name = top.name.clone();
    let score = top.score;
    Ok(if score > OUTSTANDING_THRESHOLD {
        Verdict::Outstanding { name, score }
    } else {
        Verdict::Highest { name, score }
    })
}

/// Message shown for failures that are not parse errors.
pub fn unexpected_error_message(err: &dyn fmt::Display) -> String {
    format!("An unexpected error occurred: {err}")
}
