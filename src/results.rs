use std::time::Duration;

/// The outcome of one completed [`Searcher::search`](crate::Searcher::search).
///
/// Matched paths themselves are not kept here; they went to the notify
/// callback and the result file as they were found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Results {
    /// Number of files that matched, i.e. notifications sent and records written.
    pub matches: usize,

    /// Traversal statistics.
    pub stats: ScanStats,
}

/// Counts and timing for one traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanStats {
    /// File nodes visited, matched or not.
    pub files: usize,

    /// Directory nodes visited, the root included if it is one.
    pub dirs: usize,

    /// Wall-clock time of the traversal.
    pub duration: Duration,

    /// `(files + dirs) / duration`, or 0 for a zero-length run.
    pub entries_per_sec: usize,
}

impl ScanStats {
    pub(crate) fn compute(files: usize, dirs: usize, duration: Duration) -> Self {
        let secs = duration.as_secs_f64();
        let entries_per_sec = if secs > 0.0 {
            ((files + dirs) as f64 / secs) as usize
        } else {
            0
        };
        Self {
            files,
            dirs,
            duration,
            entries_per_sec,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_duration_gives_zero_rate() {
        let stats = ScanStats::compute(3, 2, Duration::ZERO);

        assert_eq!(stats.files, 3);
        assert_eq!(stats.dirs, 2);
        assert_eq!(stats.duration, Duration::ZERO);
        assert_eq!(stats.entries_per_sec, 0);
    }

    #[test]
    fn rate_counts_files_and_dirs() {
        let stats = ScanStats::compute(6, 4, Duration::from_secs(2));
        assert_eq!(stats.entries_per_sec, 5);
    }
}
