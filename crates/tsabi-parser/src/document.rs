use serde_json::Value;
use tsabi_core::{AbiError, MemberDescriptor};

/// Decode an interface description: either a bare member list or an artifact
/// envelope exposing the list under `abi`.
pub fn parse_document(input: &str) -> Result<Vec<MemberDescriptor>, AbiError> {
    let value: Value = serde_json::from_str(input).map_err(|e| {
        AbiError::InvalidInputDocument(format!("provided ABI content is not valid JSON: {}", e))
    })?;

    let members = match value {
        Value::Array(_) => value,
        Value::Object(mut envelope) => match envelope.remove("abi") {
            Some(abi @ Value::Array(_)) => abi,
            Some(_) => {
                return Err(AbiError::InvalidInputDocument(
                    "`abi` field is not a list of members".to_string(),
                ))
            }
            None => {
                return Err(AbiError::InvalidInputDocument(
                    "object has no `abi` list of members".to_string(),
                ))
            }
        },
        _ => {
            return Err(AbiError::InvalidInputDocument(
                "expected a list of members or an object with an `abi` list".to_string(),
            ))
        }
    };

    serde_json::from_value(members)
        .map_err(|e| AbiError::InvalidInputDocument(format!("malformed member: {}", e)))
}
