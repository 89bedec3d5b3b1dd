/// Numeric conversion and formatting helpers.
///
/// The language only has integer literals, but division produces fractional
/// values, so runtime numbers are `f64`. These helpers make the conversion
/// from literals lossless and keep number formatting in one place.
pub mod num;
