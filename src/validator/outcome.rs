//! Immutable result of one validation run.

use std::fmt;

/// What ended the pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopCondition {
    /// Every checklist item was present and matched.
    Completed,
    /// A required or declared file was absent; nothing was deleted and the
    /// rest of the checklist was not inspected.
    MissingFile { file: String },
    /// A file's digest differed from (or could not be resolved against) the
    /// expected value. The file was deleted; `removed` records whether the
    /// delete succeeded.
    CorruptFile { file: String, removed: bool },
}

impl fmt::Display for StopCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopCondition::Completed => write!(f, "all files validated"),
            StopCondition::MissingFile { file } => write!(f, "there is no {}", file),
            StopCondition::CorruptFile { file, removed: true } => {
                write!(f, "invalid {} (removed)", file)
            }
            StopCondition::CorruptFile { file, removed: false } => {
                write!(f, "invalid {} (could not remove)", file)
            }
        }
    }
}

/// Outcome of a single validation run.
///
/// `passed` and `had_errors` are independent facts: a run passes only when
/// every file matched, and records an error as soon as any check fails,
/// whatever later cleanup did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    passed: bool,
    had_errors: bool,
    stop: StopCondition,
}

impl ValidationOutcome {
    pub(crate) fn completed() -> Self {
        Self {
            passed: true,
            had_errors: false,
            stop: StopCondition::Completed,
        }
    }

    pub(crate) fn missing(file: impl Into<String>) -> Self {
        Self {
            passed: false,
            had_errors: true,
            stop: StopCondition::MissingFile { file: file.into() },
        }
    }

    pub(crate) fn corrupt(file: impl Into<String>, removed: bool) -> Self {
        Self {
            passed: false,
            had_errors: true,
            stop: StopCondition::CorruptFile {
                file: file.into(),
                removed,
            },
        }
    }

    /// True when every fixed archive and declared library was present and
    /// digest-matched.
    pub fn is_valid(&self) -> bool {
        self.passed
    }

    /// True when at least one check failed, regardless of cleanup.
    pub fn has_errors(&self) -> bool {
        self.had_errors
    }

    /// Literal deletion result propagated from the stopping point: false only
    /// when a corrupt file could not be removed. A missing file needs no
    /// cleanup and reports true.
    pub fn cleanup_ok(&self) -> bool {
        match &self.stop {
            StopCondition::CorruptFile { removed, .. } => *removed,
            _ => true,
        }
    }

    pub fn stop_condition(&self) -> &StopCondition {
        &self.stop
    }
}
