//! Wire form of monetary amounts.
//!
//! Amounts are kept as `f64`, but whole values go out as JSON integers so a
//! client that sends `100` reads `100` back rather than `100.0`.

use serde::{Serialize, Serializer};

/// Balance or entry amount as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Amount(pub f64);

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize(&self.0, serializer)
    }
}

/// `serialize_with` target for `f64` amount fields.
pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    let value = *value;
    // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound.
    if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 {
        serializer.serialize_i64(value as i64)
    } else {
        serializer.serialize_f64(value)
    }
}
