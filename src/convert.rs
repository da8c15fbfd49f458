//! Conversion of loosely-typed element text into typed values.
//!
//! Every conversion takes an optional string: `None` stands for an element
//! without content and always converts to `None`. The literal text `null` is
//! an explicit null for the integer conversions, but not for [`to_bool`].

use std::num::{IntErrorKind, ParseIntError};

use crate::errors::{Error, Result};

/// Text that stands for an explicit null value.
pub const NULL_SENTINEL: &str = "null";

/// Converts text into a signed 32-bit integer.
///
/// Accepts an optional `+` or `-` sign followed by decimal digits. Values out
/// of range fail with [`Error::Overflow`], anything else malformed (including
/// an empty string) with [`Error::Format`].
///
/// ```
/// # use pretty_assertions::assert_eq;
/// use xmlio::convert::to_i32;
///
/// assert_eq!(to_i32(Some("-2147483648")).unwrap(), Some(i32::MIN));
/// assert_eq!(to_i32(Some("null")).unwrap(), None);
/// assert_eq!(to_i32(None).unwrap(), None);
/// assert!(to_i32(Some("2147483648")).is_err());
/// ```
pub fn to_i32(text: Option<&str>) -> Result<Option<i32>> {
    match text {
        None | Some(NULL_SENTINEL) => Ok(None),
        Some(s) => s
            .parse::<i32>()
            .map(Some)
            .map_err(|e| int_error(e, s, "i32")),
    }
}

/// Converts text into an unsigned 64-bit integer.
///
/// Follows the same rules as [`to_i32`]. A negative number is outside of the
/// range and therefore an [`Error::Overflow`], except for `-0`, which is zero.
pub fn to_u64(text: Option<&str>) -> Result<Option<u64>> {
    match text {
        None | Some(NULL_SENTINEL) => Ok(None),
        Some(s) => match s.parse::<u64>() {
            Ok(v) => Ok(Some(v)),
            Err(e) => match s.strip_prefix('-') {
                Some(digits) if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
                    if digits.bytes().all(|b| b == b'0') {
                        Ok(Some(0))
                    } else {
                        Err(Error::Overflow {
                            value: s.to_owned(),
                            ty: "u64",
                        })
                    }
                }
                _ => Err(int_error(e, s, "u64")),
            },
        },
    }
}

/// Converts text into a boolean.
///
/// Only `0`, `false`, `1` and `true` are recognized, case-sensitively.
/// Everything else, `null` included, fails with [`Error::Format`].
pub fn to_bool(text: Option<&str>) -> Result<Option<bool>> {
    match text {
        None => Ok(None),
        Some("0") | Some("false") => Ok(Some(false)),
        Some("1") | Some("true") => Ok(Some(true)),
        Some(s) => Err(Error::Format {
            value: s.to_owned(),
            ty: "bool",
        }),
    }
}

fn int_error(e: ParseIntError, value: &str, ty: &'static str) -> Error {
    let value = value.to_owned();
    match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Error::Overflow { value, ty },
        _ => Error::Format { value, ty },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use pretty_assertions::assert_eq;

    macro_rules! err {
        ($conv:ident($text:expr) => $kind:ident) => {
            match $conv(Some($text)) {
                Err(e) => assert_eq!(e.kind(), ErrorKind::$kind, "{:?}", $text),
                Ok(v) => panic!("expected {} error for {:?}, got {:?}", stringify!($kind), $text, v),
            }
        };
    }

    #[test]
    fn int32() {
        assert_eq!(to_i32(Some("123")).unwrap(), Some(123));
        assert_eq!(to_i32(Some("-123")).unwrap(), Some(-123));
        assert_eq!(to_i32(Some("0")).unwrap(), Some(0));
        assert_eq!(to_i32(Some("2147483647")).unwrap(), Some(i32::MAX));
        assert_eq!(to_i32(Some("-2147483648")).unwrap(), Some(i32::MIN));
        assert_eq!(to_i32(None).unwrap(), None);
        assert_eq!(to_i32(Some("null")).unwrap(), None);

        err!(to_i32("2147483648") => Overflow);
        err!(to_i32("-2147483649") => Overflow);
        err!(to_i32("") => Format);
        err!(to_i32("a") => Format);
        err!(to_i32("1a") => Format);
        err!(to_i32(" 1") => Format);
        err!(to_i32("Null") => Format);
    }

    #[test]
    fn uint64() {
        assert_eq!(to_u64(Some("123")).unwrap(), Some(123));
        assert_eq!(to_u64(Some("0")).unwrap(), Some(0));
        assert_eq!(to_u64(Some("-0")).unwrap(), Some(0));
        assert_eq!(to_u64(Some("18446744073709551615")).unwrap(), Some(u64::MAX));
        assert_eq!(to_u64(None).unwrap(), None);
        assert_eq!(to_u64(Some("null")).unwrap(), None);

        err!(to_u64("18446744073709551616") => Overflow);
        err!(to_u64("-1") => Overflow);
        err!(to_u64("") => Format);
        err!(to_u64("-") => Format);
        err!(to_u64("a") => Format);
        err!(to_u64("1a") => Format);
        err!(to_u64("-1a") => Format);
    }

    #[test]
    fn boolean() {
        assert_eq!(to_bool(Some("0")).unwrap(), Some(false));
        assert_eq!(to_bool(Some("false")).unwrap(), Some(false));
        assert_eq!(to_bool(Some("1")).unwrap(), Some(true));
        assert_eq!(to_bool(Some("true")).unwrap(), Some(true));
        assert_eq!(to_bool(None).unwrap(), None);

        err!(to_bool("True") => Format);
        err!(to_bool("") => Format);
        err!(to_bool("2") => Format);
        err!(to_bool("1 true") => Format);
        err!(to_bool("null") => Format);
    }
}
