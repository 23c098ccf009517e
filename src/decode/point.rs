use std::borrow::Cow;

use num_bigint::BigInt;
use num_traits::{FromPrimitive, Num};
use serde::{Deserialize, Serialize};
use serde_json::Number;
use thiserror::Error;

pub const MIN_RADIX: u32 = 2;
pub const MAX_RADIX: u32 = 36;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("x-coordinate {0:?} is not a base-10 integer")]
    InvalidKey(String),

    #[error("base {0:?} is not an integer")]
    InvalidBase(String),

    #[error("base {0} is outside 2..=36")]
    BaseOutOfRange(String),

    #[error("value is empty")]
    EmptyValue,

    #[error("{value:?} is not a valid base-{base} number")]
    InvalidDigits { value: String, base: u32 },
}

/// The declared radix of a share value. Documents use either `"base": "16"` or `"base": 16`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Base {
    Number(Number),
    Text(String),
}

impl Base {
    pub fn radix(&self) -> Result<u32, DecodeError> {
        let (text, base) = match self {
            Base::Number(number) => (number.to_string(), integral(number)),
            Base::Text(text) => (text.clone(), text.trim().parse::<BigInt>().ok()),
        };
        let base = base.ok_or_else(|| DecodeError::InvalidBase(text.clone()))?;

        match u32::try_from(&base) {
            Ok(radix) if (MIN_RADIX..=MAX_RADIX).contains(&radix) => Ok(radix),
            _ => Err(DecodeError::BaseOutOfRange(text)),
        }
    }
}

// 16 and 16.0 are the same base, 16.5 is none
fn integral(number: &Number) -> Option<BigInt> {
    if let Some(value) = number.as_i64() {
        return Some(BigInt::from(value));
    }
    if let Some(value) = number.as_u64() {
        return Some(BigInt::from(value));
    }
    number
        .as_f64()
        .filter(|value| value.fract() == 0.0)
        .and_then(BigInt::from_f64)
}

impl From<u32> for Base {
    fn from(radix: u32) -> Self {
        Base::Text(radix.to_string())
    }
}

/// The encoded y. A bare JSON number is read through its decimal text, so
/// `"value": 12` in base 8 is ten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShareValue {
    Text(String),
    Number(Number),
}

impl ShareValue {
    pub fn digits(&self) -> Cow<'_, str> {
        match self {
            ShareValue::Text(text) => Cow::Borrowed(text),
            ShareValue::Number(number) => Cow::Owned(number.to_string()),
        }
    }
}

impl From<String> for ShareValue {
    fn from(text: String) -> Self {
        ShareValue::Text(text)
    }
}

/// A share as it appears in the input document, keyed elsewhere by its x-coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawShare {
    pub base: Base,
    pub value: ShareValue,
}

/// One decoded (x, y) sample of the hidden polynomial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share {
    pub x: i64,
    pub y: BigInt,
}

impl Share {
    pub fn new(x: i64, y: impl Into<BigInt>) -> Self {
        Share { x, y: y.into() }
    }
}

pub fn decode_share(key: &str, raw: &RawShare) -> Result<Share, DecodeError> {
    let x = key
        .parse::<i64>()
        .map_err(|_| DecodeError::InvalidKey(key.to_string()))?;
    let radix = raw.base.radix()?;
    let y = parse_radix(&raw.value.digits(), radix)?;

    Ok(Share { x, y })
}

/// Strict radix parse: optional sign, then one or more digits valid for `radix`.
///
/// `BigInt::from_str_radix` tolerates `_` separators, so the digits are checked
/// here before handing the string over.
pub fn parse_radix(value: &str, radix: u32) -> Result<BigInt, DecodeError> {
    if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
        return Err(DecodeError::BaseOutOfRange(radix.to_string()));
    }

    let digits = value
        .strip_prefix('-')
        .or_else(|| value.strip_prefix('+'))
        .unwrap_or(value);
    if value.is_empty() {
        return Err(DecodeError::EmptyValue);
    }
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(DecodeError::InvalidDigits {
            value: value.to_string(),
            base: radix,
        });
    }

    BigInt::from_str_radix(value, radix).map_err(|_| DecodeError::InvalidDigits {
        value: value.to_string(),
        base: radix,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(base: &str, value: &str) -> RawShare {
        RawShare {
            base: Base::Text(base.to_string()),
            value: ShareValue::Text(value.to_string()),
        }
    }

    #[test]
    fn test_binary_value() {
        let share = decode_share("2", &raw("2", "111")).unwrap();
        assert_eq!(share, Share::new(2, 7));
    }

    #[test]
    fn test_base_four_value() {
        // 2*16 + 1*4 + 3
        let share = decode_share("6", &raw("4", "213")).unwrap();
        assert_eq!(share, Share::new(6, 39));
    }

    #[test]
    fn test_numeric_base_and_letters() {
        let share = RawShare {
            base: Base::Number(Number::from(16u32)),
            value: ShareValue::Text("Ff".to_string()),
        };
        assert_eq!(decode_share("10", &share).unwrap(), Share::new(10, 255));
        assert_eq!(parse_radix("z", 36).unwrap(), BigInt::from(35));
    }

    #[test]
    fn test_value_wider_than_u64() {
        let y = parse_radix("6b6ca3c13d11c9121", 16).unwrap();
        assert_eq!(y.to_string(), "123851870558266102049");
    }

    #[test]
    fn test_signed_values() {
        assert_eq!(parse_radix("-2a", 16).unwrap(), BigInt::from(-42));
        assert_eq!(parse_radix("+17", 10).unwrap(), BigInt::from(17));
        assert!(parse_radix("-", 10).is_err());
    }

    #[test]
    fn test_invalid_digit_for_base() {
        assert_eq!(
            decode_share("1", &raw("2", "102")),
            Err(DecodeError::InvalidDigits {
                value: "102".to_string(),
                base: 2
            })
        );
        assert!(parse_radix("1_000", 10).is_err());
        assert!(parse_radix(" 12", 10).is_err());
        assert_eq!(parse_radix("", 10), Err(DecodeError::EmptyValue));
    }

    #[test]
    fn test_base_out_of_range() {
        assert_eq!(
            decode_share("1", &raw("37", "1")),
            Err(DecodeError::BaseOutOfRange("37".to_string()))
        );
        assert_eq!(
            decode_share("1", &raw("1", "0")),
            Err(DecodeError::BaseOutOfRange("1".to_string()))
        );
        assert_eq!(
            decode_share("1", &raw("ten", "0")),
            Err(DecodeError::InvalidBase("ten".to_string()))
        );
    }

    #[test]
    fn test_bad_key() {
        assert_eq!(
            decode_share("x1", &raw("10", "4")),
            Err(DecodeError::InvalidKey("x1".to_string()))
        );
    }

    fn from_json(value: serde_json::Value) -> RawShare {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_numeric_base_outside_range() {
        let negative = from_json(serde_json::json!({ "base": -2, "value": "1" }));
        assert_eq!(
            decode_share("1", &negative),
            Err(DecodeError::BaseOutOfRange("-2".to_string()))
        );

        let huge = from_json(serde_json::json!({ "base": 1e30, "value": "1" }));
        assert!(matches!(
            decode_share("1", &huge),
            Err(DecodeError::BaseOutOfRange(_))
        ));
    }

    #[test]
    fn test_numeric_base_with_fraction() {
        let whole = from_json(serde_json::json!({ "base": 16.0, "value": "ff" }));
        assert_eq!(decode_share("1", &whole).unwrap(), Share::new(1, 255));

        let fractional = from_json(serde_json::json!({ "base": 16.5, "value": "ff" }));
        assert_eq!(
            decode_share("1", &fractional),
            Err(DecodeError::InvalidBase("16.5".to_string()))
        );
    }

    #[test]
    fn test_numeric_value_read_as_digits() {
        let octal = from_json(serde_json::json!({ "base": "8", "value": 12 }));
        assert_eq!(decode_share("3", &octal).unwrap(), Share::new(3, 10));

        let binary = from_json(serde_json::json!({ "base": "2", "value": 5 }));
        assert_eq!(
            decode_share("3", &binary),
            Err(DecodeError::InvalidDigits {
                value: "5".to_string(),
                base: 2
            })
        );

        let fractional = from_json(serde_json::json!({ "base": "10", "value": 1.5 }));
        assert!(matches!(
            decode_share("3", &fractional),
            Err(DecodeError::InvalidDigits { .. })
        ));
    }
}
