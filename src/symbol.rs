use std::fmt::Debug;
use std::hash::Hash;

/// A single code unit of the input that the coder assigns a code to.
///
/// Symbols only need equality and hashing; no ordering among them is
/// assumed.
pub trait Symbol: Eq + Hash + Copy + Debug {}

impl Symbol for char {}

impl Symbol for u8 {}

/// UTF-16 code units.
impl Symbol for u16 {}
