/*! Core model for turning contract ABIs into TypeScript typings.
 *
 * An ABI is a flat list of member descriptors whose parameters nest arbitrarily. This crate holds
 * the descriptor model, the three dialect profiles, and the two pure decisions everything else
 * leans on: which TypeScript token an elementary type becomes, and which call shape a member gets.
 */

pub mod descriptor;
pub mod dialect;
pub mod mapper;
pub mod mutability;
pub mod types;

pub use descriptor::{
    CallFlags, ConstructorDescriptor, EventDescriptor, FunctionDescriptor, MemberDescriptor,
    MemberKind, Param, StateMutability,
};
pub use dialect::{CallWrapper, Dialect, DialectProfile, EventFilterStyle, OverridesProfile};
pub use mapper::{map_scalar, Direction};
pub use mutability::{classify, CallClass};
pub use types::{ArrayDim, BaseType, ScalarType, TypeSpec};

use std::fmt;
use thiserror::Error;

/// Where in the document a failure happened: the member and a path such as
/// `inputs[1].components[0]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub member: String,
    pub path: String,
}

impl Location {
    pub fn new(member: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            member: member.into(),
            path: path.into(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.member, self.path)
    }
}

fn describe(location: &Option<Location>) -> String {
    match location {
        Some(location) => format!(" in {}", location),
        None => String::new(),
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AbiError {
    #[error("Invalid input document: {0}")]
    InvalidInputDocument(String),
    #[error("Unsupported dialect: {0} (expected one of web3, ethers_v5, ethers_v6)")]
    UnsupportedDialect(String),
    #[error("Unsupported type `{type_tag}`{}", describe(.location))]
    UnsupportedType {
        type_tag: String,
        location: Option<Location>,
    },
    #[error("Invalid parameter in {location}: {message}")]
    InvalidParameter { location: Location, message: String },
}

impl AbiError {
    /// Attach a location to an `UnsupportedType` raised without one.
    pub fn at(self, location: Location) -> Self {
        match self {
            AbiError::UnsupportedType {
                type_tag,
                location: None,
            } => AbiError::UnsupportedType {
                type_tag,
                location: Some(location),
            },
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, AbiError>;

#[cfg(test)]
mod tests;
