//! Query primitives shared by every content collection.
//!
//! Everything here is a pure function over borrowed data: nothing allocates
//! more than the returned sequence and nothing mutates its input.

pub mod markup;
mod ordering;
mod search;

pub use ordering::{limited, newest_first, sorted_unique};
pub use search::SearchTerm;
