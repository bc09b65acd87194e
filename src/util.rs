/// Decimal conversion helpers.
///
/// Parsing of numeric literals into the decimal type, the `f64` round trip
/// used by exponentiation, and the canonical textual form of numbers. Every
/// conversion that can lose information returns a `Result` instead of
/// silently substituting a default.
pub mod num;
