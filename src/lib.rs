//! A top-down enumerative synthesizer that searches for the simplest regular
//! expression consistent with a set of positive and negative example
//! strings.
//!
//! # Overview
//!
//! Given a set of strings that must match (`P`) and a set that must not
//! (`N`), [search] explores partial regular expressions — trees with typed
//! [Hole](partial_regex::PartialRegex::hole) placeholders standing in for
//! not-yet-decided subexpressions — in order of increasing syntactic cost,
//! until it finds a fully ground tree whose canonical rendering accepts
//! every string in `P` and rejects every string in `N`.
//!
//! The search is kept tractable by three pruning oracles run against every
//! partial tree before it's expanded further: an optimistic
//! [overapproximation](partial_regex) (every hole becomes `.*`) that must
//! still accept all of `P`, a pessimistic
//! [underapproximation](partial_regex) (every hole becomes `∅`) that must
//! not already accept any of `N`, and a one-step
//! [unroll](partial_regex::unroll)-and-[split](partial_regex::split) check
//! that catches some dead stars and unions neither bound alone would reject.
//!
//! # Example
//!
//! ```
//! use rx_synth::{search, SearchOptions};
//! use std::collections::HashSet;
//!
//! let positives: HashSet<String> = ["0", "00", "01"].iter().map(|s| s.to_string()).collect();
//! let negatives: HashSet<String> = ["1", "10"].iter().map(|s| s.to_string()).collect();
//! let alphabet: Vec<char> = vec!['0', '1'];
//!
//! let (pattern, _stats) = search(
//!     &positives,
//!     &negatives,
//!     SearchOptions {
//!         alphabet: &alphabet,
//!         ..Default::default()
//!     },
//! );
//! assert_eq!(pattern, "0.*");
//! ```
pub mod alphabet;
pub mod benchmark;
pub mod error;
mod oracle;
pub mod partial_regex;
mod prune;
pub mod search;
pub mod util;

pub use partial_regex::PartialRegex;
pub use search::{search, SearchOptions, SearchStats};
