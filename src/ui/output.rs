//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Also show per-repository detail.
    Verbose,
    /// Show header, records, and warnings.
    #[default]
    Normal,
    /// Show records and errors only.
    Quiet,
}

impl OutputMode {
    /// Pick a mode from the `--quiet` and `--verbose` flags. Quiet wins.
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Check if this mode shows status messages and warnings.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }

    /// Check if this mode shows per-repository detail.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }
}
