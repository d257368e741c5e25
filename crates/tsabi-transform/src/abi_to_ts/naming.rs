use super::program::{Role, TopLevelNames};
use heck::ToUpperCamelCase;
use tsabi_core::Param;

/// Upper-case the first character and leave the rest alone, so `getERC20`
/// stays recognisable as `GetERC20`.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Candidate name for a composite parameter. A struct name from
/// `internalType` wins; otherwise the enclosing member and the field name.
pub fn declaration_candidate(scope: &str, param: &Param, field_name: &str, role: Role) -> String {
    match param.struct_name() {
        Some(struct_name) => format!("{}{}", capitalize(struct_name), role.suffix()),
        None => format!(
            "{}{}{}",
            capitalize(scope),
            capitalize(field_name),
            role.suffix()
        ),
    }
}

pub fn multi_output_candidate(member: &str) -> String {
    format!("{}{}", capitalize(member), Role::Response.suffix())
}

pub fn event_candidate(event: &str) -> String {
    format!("{}{}", capitalize(event), Role::Event.suffix())
}

/// `uniswap-factory` and `uniswap_factory` both become `UniswapFactory`.
pub fn top_level_names(prefix: Option<&str>) -> TopLevelNames {
    match prefix.map(|p| p.to_upper_camel_case()) {
        Some(prefix) => TopLevelNames::with_prefix(&prefix),
        None => TopLevelNames::default(),
    }
}
