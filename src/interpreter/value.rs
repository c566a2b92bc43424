/// Hash key derivation for hashable values.
///
/// Defines the `HashKey` type used to key hash values. A hash key pairs a
/// type tag with a 64-bit payload so that equal integers, booleans, or
/// strings always produce equal keys while values of different kinds never
/// collide by construction.
pub mod hash_key;

pub mod core;
