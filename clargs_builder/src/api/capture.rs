use thiserror::Error;

use crate::model::{ArgType, Count, PrintHelp, Value};

/// Behaviour to move an explicit type `T` in and out of the type erased [`Value`] storage.
///
/// We use this at the edges of the registry so the caller keeps each switch's type, while the registry itself works across all types.
/// Implemented for exactly the types listed by [`ArgType`].
pub trait ArgValue: Default + Sized {
    /// The type tag corresponding to `Self`.
    const ARG_TYPE: ArgType;

    /// Erase the type of this value.
    fn into_value(self) -> Value;

    /// Recover a reference to `Self` from the erased value, if the types agree.
    fn from_value(value: &Value) -> Option<&Self>;
}

macro_rules! arg_value {
    ($t:ty, $variant:ident) => {
        impl ArgValue for $t {
            const ARG_TYPE: ArgType = ArgType::$variant;

            fn into_value(self) -> Value {
                Value::$variant(self)
            }

            fn from_value(value: &Value) -> Option<&Self> {
                match value {
                    Value::$variant(v) => Some(v),
                    _ => None,
                }
            }
        }
    };
}

arg_value!(String, String);
arg_value!(i32, I32);
arg_value!(i64, I64);
arg_value!(isize, Isize);
arg_value!(u32, U32);
arg_value!(u64, U64);
arg_value!(usize, Usize);
arg_value!(f32, F32);
arg_value!(f64, F64);
arg_value!(bool, Bool);
arg_value!(Count, Count);
arg_value!(PrintHelp, Help);

#[derive(Debug, Error, PartialEq, Eq)]
#[doc(hidden)]
pub enum InvalidCapture {
    #[error("cannot parse '{token}' as {type_name}.")]
    InvalidConversion {
        token: String,
        type_name: &'static str,
    },
    #[error("{type_name} does not take a value.")]
    NotCapturable { type_name: &'static str },
}

impl ArgType {
    /// Coerce a raw token into a value of this type.
    ///
    /// The whole token must be consumed.
    /// Integers follow `strtol` base detection: `0x`/`0X` prefixes hexadecimal, a leading `0` octal, otherwise decimal.
    /// Out of range integers fail, as they do for [`i32::from_str_radix`] et al.
    /// Toggle types have no textual form, and always fail.
    pub fn coerce(&self, token: &str) -> Result<Value, InvalidCapture> {
        let invalid = || InvalidCapture::InvalidConversion {
            token: token.to_string(),
            type_name: self.name(),
        };

        match self {
            ArgType::String => Ok(Value::String(token.to_string())),
            ArgType::I32 => parse_integer(token, i32::from_str_radix)
                .map(Value::I32)
                .ok_or_else(invalid),
            ArgType::I64 => parse_integer(token, i64::from_str_radix)
                .map(Value::I64)
                .ok_or_else(invalid),
            ArgType::Isize => parse_integer(token, isize::from_str_radix)
                .map(Value::Isize)
                .ok_or_else(invalid),
            ArgType::U32 => parse_integer(token, u32::from_str_radix)
                .map(Value::U32)
                .ok_or_else(invalid),
            ArgType::U64 => parse_integer(token, u64::from_str_radix)
                .map(Value::U64)
                .ok_or_else(invalid),
            ArgType::Usize => parse_integer(token, usize::from_str_radix)
                .map(Value::Usize)
                .ok_or_else(invalid),
            ArgType::F32 => token.parse::<f32>().map(Value::F32).map_err(|_| invalid()),
            ArgType::F64 => token.parse::<f64>().map(Value::F64).map_err(|_| invalid()),
            ArgType::Bool | ArgType::Count | ArgType::Help => Err(InvalidCapture::NotCapturable {
                type_name: self.name(),
            }),
        }
    }
}

fn parse_integer<T, E>(token: &str, from_str_radix: fn(&str, u32) -> Result<T, E>) -> Option<T> {
    let (sign, unsigned) = match token.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", token.strip_prefix('+').unwrap_or(token)),
    };
    let (radix, digits) = if let Some(hex) = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        (16, hex)
    } else if unsigned.len() > 1 && unsigned.starts_with('0') {
        (8, &unsigned[1..])
    } else {
        (10, unsigned)
    };

    // from_str_radix would accept a second sign (ex: "0x-5").
    if digits.is_empty() || digits.starts_with(|c: char| c == '+' || c == '-') {
        return None;
    }

    from_str_radix(&format!("{sign}{digits}"), radix).ok()
}
