/*! Read contract interface descriptions.
 *
 * Two inputs need parsing before anything can be compiled: the JSON document listing the members,
 * and the type tags inside it (`uint256[3][]`, `tuple[]`, `bytes32`). The document is decoded with
 * serde; the tags go through a small pest grammar so malformed or exotic types are rejected up front.
 */

use pest::Parser;
use pest_derive::Parser;
use tsabi_core::{AbiError, ArrayDim, ScalarType, TypeSpec};

pub mod document;

pub use document::parse_document;

#[derive(Parser)]
#[grammar = "abi_type.pest"]
pub struct AbiTypeParser;

pub type ParseResult<T> = Result<T, Box<pest::error::Error<Rule>>>;

pub fn parse(input: &str) -> ParseResult<pest::iterators::Pairs<'_, Rule>> {
    AbiTypeParser::parse(Rule::abi_type, input).map_err(Box::new)
}

pub fn check(input: &str) -> bool {
    parse(input).is_ok()
}

/// Resolve a type tag into a [`TypeSpec`]. Anything outside the ABI vocabulary,
/// or with an out-of-range width, is `UnsupportedType`.
pub fn parse_type(type_tag: &str) -> Result<TypeSpec, AbiError> {
    let unsupported = || AbiError::UnsupportedType {
        type_tag: type_tag.to_string(),
        location: None,
    };

    let mut pairs = parse(type_tag.trim()).map_err(|_| unsupported())?;
    let root = pairs.next().ok_or_else(unsupported)?;

    let mut spec: Option<TypeSpec> = None;
    for pair in root.into_inner() {
        match pair.as_rule() {
            Rule::dimension => {
                let dim = match pair.into_inner().next() {
                    Some(size) => {
                        let size: usize = size.as_str().parse().map_err(|_| unsupported())?;
                        if size == 0 {
                            return Err(unsupported());
                        }
                        ArrayDim::Fixed(size)
                    }
                    None => ArrayDim::Dynamic,
                };
                spec = Some(spec.ok_or_else(unsupported)?.with_dim(dim));
            }
            Rule::EOI => {}
            Rule::tuple_ty => spec = Some(TypeSpec::tuple()),
            rule => {
                let widths: Vec<&str> = pair.clone().into_inner().map(|w| w.as_str()).collect();
                let scalar = resolve_scalar(rule, &widths).ok_or_else(unsupported)?;
                spec = Some(TypeSpec::scalar(scalar));
            }
        }
    }

    spec.ok_or_else(unsupported)
}

fn resolve_scalar(rule: Rule, widths: &[&str]) -> Option<ScalarType> {
    let width = |index: usize, default: u16| -> Option<u16> {
        match widths.get(index) {
            Some(text) => text.parse().ok(),
            None => Some(default),
        }
    };

    match rule {
        Rule::uint_ty => Some(ScalarType::Uint(integer_width(width(0, 256)?)?)),
        Rule::int_ty => Some(ScalarType::Int(integer_width(width(0, 256)?)?)),
        Rule::ufixed_ty | Rule::fixed_ty => {
            let bits = integer_width(width(0, 128)?)?;
            let decimals = width(1, 18)?;
            if decimals > 80 {
                return None;
            }
            Some(ScalarType::Fixed {
                signed: rule == Rule::fixed_ty,
                bits,
                decimals: decimals as u8,
            })
        }
        Rule::fixed_bytes_ty => {
            let size = width(0, 0)?;
            if (1..=32).contains(&size) {
                Some(ScalarType::FixedBytes(size as u8))
            } else {
                None
            }
        }
        Rule::address_ty => Some(ScalarType::Address),
        Rule::bool_ty => Some(ScalarType::Bool),
        Rule::string_ty => Some(ScalarType::String),
        Rule::bytes_ty => Some(ScalarType::Bytes),
        Rule::function_ty => Some(ScalarType::Function),
        _ => None,
    }
}

fn integer_width(bits: u16) -> Option<u16> {
    if (8..=256).contains(&bits) && bits % 8 == 0 {
        Some(bits)
    } else {
        None
    }
}
