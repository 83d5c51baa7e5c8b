mod logger;

/// Diagnostic verbosity levels for the search loop's step-by-step trace.
///
/// Adapted from this codebase's existing logging idiom, but deliberately
/// *not* compiled out under `#[cfg(debug_assertions)]`: `--profile` must be
/// able to print timing and step counts in a release build too.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Log<T> {
    None,
    Default(T),
    Success(T),
    Result(T),
    Verbose(T),
}

impl<T> Log<T> {
    /// Ordinal used to compare verbosity levels irrespective of payload.
    pub fn order(&self) -> u8 {
        match self {
            Log::None => 0,
            Log::Default(_) => 1,
            Log::Success(_) => 2,
            Log::Result(_) => 3,
            Log::Verbose(_) => 4,
        }
    }

    /// True iff this level is at least as verbose as `threshold`.
    pub fn at_least(&self, threshold: &Log<()>) -> bool {
        self.order() >= threshold.order()
    }
}
