use crate::dialect::DialectProfile;
use crate::types::ScalarType;
use crate::{AbiError, Result};

/// Which side of a call a value sits on. Inputs accept the looser
/// "-ish" types, outputs name what the library actually hands back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Input,
    Output,
}

/// Map an elementary ABI type to its TypeScript token for `profile`.
///
/// Every integer width collapses to the dialect's big-number token. Array
/// suffixes are the caller's job.
pub fn map_scalar(
    scalar: &ScalarType,
    profile: &DialectProfile,
    direction: Direction,
) -> Result<&'static str> {
    let token = match (scalar, direction) {
        (ScalarType::Bool, _) => "boolean",
        (ScalarType::Address, _) | (ScalarType::String, _) | (ScalarType::Function, _) => {
            "string"
        }
        (ScalarType::Uint(_) | ScalarType::Int(_), Direction::Input) => profile.integer_input,
        (ScalarType::Uint(_) | ScalarType::Int(_), Direction::Output) => profile.integer_output,
        (ScalarType::Bytes | ScalarType::FixedBytes(_), Direction::Input) => profile.bytes_input,
        (ScalarType::Bytes | ScalarType::FixedBytes(_), Direction::Output) => profile.bytes_output,
        (ScalarType::Fixed { .. }, _) => {
            return Err(AbiError::UnsupportedType {
                type_tag: scalar.to_string(),
                location: None,
            })
        }
    };
    Ok(token)
}
