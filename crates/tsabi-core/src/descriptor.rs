use crate::AbiError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberKind {
    Constructor,
    Function,
    Event,
    Fallback,
    Receive,
    Error,
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            MemberKind::Constructor => "constructor",
            MemberKind::Function => "function",
            MemberKind::Event => "event",
            MemberKind::Fallback => "fallback",
            MemberKind::Receive => "receive",
            MemberKind::Error => "error",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateMutability {
    Pure,
    View,
    NonPayable,
    Payable,
}

impl fmt::Display for StateMutability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            StateMutability::Pure => "pure",
            StateMutability::View => "view",
            StateMutability::NonPayable => "nonpayable",
            StateMutability::Payable => "payable",
        };
        f.write_str(text)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One input or output slot of a member. Composite iff `components` is present;
/// array-ness lives in the type tag and is orthogonal to that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type")]
    pub type_tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<Param>>,
    #[serde(
        default,
        rename = "internalType",
        skip_serializing_if = "Option::is_none"
    )]
    pub internal_type: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub indexed: bool,
}

impl Param {
    pub fn new(name: impl Into<String>, type_tag: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_tag: type_tag.into(),
            components: None,
            internal_type: None,
            indexed: false,
        }
    }

    pub fn tuple(
        name: impl Into<String>,
        type_tag: impl Into<String>,
        components: Vec<Param>,
    ) -> Self {
        Self {
            components: Some(components),
            ..Self::new(name, type_tag)
        }
    }

    pub fn with_internal_type(mut self, internal_type: impl Into<String>) -> Self {
        self.internal_type = Some(internal_type.into());
        self
    }

    pub fn indexed(mut self) -> Self {
        self.indexed = true;
        self
    }

    pub fn is_composite(&self) -> bool {
        self.components.is_some()
    }

    pub fn components(&self) -> &[Param] {
        self.components.as_deref().unwrap_or(&[])
    }

    /// The declared name, or `{placeholder}{index}` when the ABI left it empty.
    pub fn name_or_placeholder(&self, placeholder: &str, index: usize) -> String {
        if self.name.is_empty() {
            format!("{}{}", placeholder, index)
        } else {
            self.name.clone()
        }
    }

    /// `struct Pool.Position[]` yields `Position`.
    pub fn struct_name(&self) -> Option<&str> {
        let internal = self.internal_type.as_deref()?.strip_prefix("struct ")?;
        let without_dims = internal.split('[').next()?;
        let name = without_dims.rsplit('.').next()?.trim();
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }
}

/// Payability and mutability as declared. `constant` is the pre-0.5 spelling
/// of a read-only function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CallFlags {
    pub payable: bool,
    pub state_mutability: Option<StateMutability>,
    pub constant: bool,
}

impl CallFlags {
    pub fn with_mutability(state_mutability: StateMutability) -> Self {
        Self {
            payable: state_mutability == StateMutability::Payable,
            state_mutability: Some(state_mutability),
            constant: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorDescriptor {
    pub inputs: Vec<Param>,
    pub flags: CallFlags,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDescriptor {
    pub name: String,
    pub inputs: Vec<Param>,
    pub outputs: Vec<Param>,
    pub flags: CallFlags,
}

impl FunctionDescriptor {
    pub fn new(name: impl Into<String>, flags: CallFlags) -> Self {
        Self {
            name: name.into(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            flags,
        }
    }

    pub fn input(mut self, param: Param) -> Self {
        self.inputs.push(param);
        self
    }

    pub fn output(mut self, param: Param) -> Self {
        self.outputs.push(param);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDescriptor {
    pub name: String,
    pub inputs: Vec<Param>,
    pub anonymous: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawMember")]
pub enum MemberDescriptor {
    Constructor(ConstructorDescriptor),
    Function(FunctionDescriptor),
    Event(EventDescriptor),
    /// fallback, receive and error entries carry nothing callable.
    NonCallable { kind: MemberKind, name: Option<String> },
}

impl MemberDescriptor {
    pub fn kind(&self) -> MemberKind {
        match self {
            MemberDescriptor::Constructor(_) => MemberKind::Constructor,
            MemberDescriptor::Function(_) => MemberKind::Function,
            MemberDescriptor::Event(_) => MemberKind::Event,
            MemberDescriptor::NonCallable { kind, .. } => *kind,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            MemberDescriptor::Constructor(_) => None,
            MemberDescriptor::Function(f) => Some(&f.name),
            MemberDescriptor::Event(e) => Some(&e.name),
            MemberDescriptor::NonCallable { name, .. } => name.as_deref(),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMember {
    #[serde(rename = "type", default)]
    kind: Option<MemberKind>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    inputs: Vec<Param>,
    #[serde(default, deserialize_with = "null_as_default")]
    outputs: Vec<Param>,
    #[serde(default)]
    state_mutability: Option<StateMutability>,
    #[serde(default, deserialize_with = "null_as_default")]
    payable: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    constant: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    anonymous: bool,
}

impl TryFrom<RawMember> for MemberDescriptor {
    type Error = AbiError;

    fn try_from(raw: RawMember) -> Result<Self, Self::Error> {
        let kind = raw.kind.unwrap_or(MemberKind::Function);
        let name = raw.name.filter(|n| !n.is_empty());
        let flags = CallFlags {
            payable: raw.payable,
            state_mutability: raw.state_mutability,
            constant: raw.constant,
        };

        match kind {
            MemberKind::Constructor => {
                if let Some(name) = name {
                    return Err(AbiError::InvalidInputDocument(format!(
                        "constructor entries must not be named, got `{}`",
                        name
                    )));
                }
                Ok(MemberDescriptor::Constructor(ConstructorDescriptor {
                    inputs: raw.inputs,
                    flags,
                }))
            }
            MemberKind::Function => {
                let name = name.ok_or_else(|| {
                    AbiError::InvalidInputDocument("function entry without a name".to_string())
                })?;
                Ok(MemberDescriptor::Function(FunctionDescriptor {
                    name,
                    inputs: raw.inputs,
                    outputs: raw.outputs,
                    flags,
                }))
            }
            MemberKind::Event => {
                let name = name.ok_or_else(|| {
                    AbiError::InvalidInputDocument("event entry without a name".to_string())
                })?;
                Ok(MemberDescriptor::Event(EventDescriptor {
                    name,
                    inputs: raw.inputs,
                    anonymous: raw.anonymous,
                }))
            }
            kind => Ok(MemberDescriptor::NonCallable { kind, name }),
        }
    }
}
