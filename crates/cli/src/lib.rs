//! Shared argument parsing for the flowclean binaries.

use clap::Parser;

/// Positional arguments shared by the retention sweeps.
///
/// Both sweeps are invoked the same way: an age threshold in days and a
/// page size. No flags, no config file; everything else comes from the
/// environment.
#[derive(Debug, Parser)]
pub struct SweepArgs {
    /// Age threshold in days; runs that started earlier qualify.
    pub days_to_keep: i64,
    /// Maximum number of runs fetched per page.
    pub batch_size: i64,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_positional_arguments() {
        let args = SweepArgs::parse_from(["clean-old-runs", "30", "100"]);
        assert_eq!(args.days_to_keep, 30);
        assert_eq!(args.batch_size, 100);
    }

    #[test]
    fn rejects_missing_arguments() {
        assert!(SweepArgs::try_parse_from(["clean-old-runs", "30"]).is_err());
        assert!(SweepArgs::try_parse_from(["clean-old-runs"]).is_err());
    }

    #[test]
    fn rejects_non_numeric_arguments() {
        assert!(SweepArgs::try_parse_from(["clean-old-runs", "thirty", "100"]).is_err());
    }
}
