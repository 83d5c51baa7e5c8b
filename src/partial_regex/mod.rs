//! The partial-regex algebraic data type: an immutable tree of typed Holes
//! and regex combinators, its canonical renderer and cost function, the
//! algebraic simplifier `opt`, the over/under-approximators and unroll/split
//! pruning oracles, and the expansion operations (`holes`, `fill`,
//! `next_states`) that drive the search loop in [crate::search].

mod approx;
mod expand;
mod node;
mod opt;

pub use node::PartialRegex;
pub(crate) use node::Kind;

pub(crate) use approx::{overapproximation, split, underapproximation, unroll};
pub(crate) use expand::{fill, holes, next_states};
pub(crate) use opt::opt;
