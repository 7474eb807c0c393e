//! Internal building blocks.

#[cfg(test)]
#[macro_use]
pub mod test_utils;

pub mod gf2_linalg;
pub mod validate;
