//! Optional values without null checks: a two-variant [`Option`] type and
//! combinators for composing computations over presence and absence.

#![warn(missing_docs)]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod collect;
mod option;

pub use collect::collect;
pub use option::{Option, none, some};
