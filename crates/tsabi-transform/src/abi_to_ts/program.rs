use std::fmt;
use tsabi_core::{
    CallClass, Dialect, Direction, EventFilterStyle, MemberKind, StateMutability,
};

/// What a synthesized declaration is used for. Part of both the candidate
/// name and the dedup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Request,
    Response,
    Event,
}

impl Role {
    pub fn suffix(self) -> &'static str {
        match self {
            Role::Request => "Request",
            Role::Response => "Response",
            Role::Event => "EventEmittedResponse",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Role::Response => "result",
            Role::Request | Role::Event => "param",
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Role::Response => Direction::Output,
            Role::Request | Role::Event => Direction::Input,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    pub key: String,
    pub ty: String,
}

impl Field {
    pub fn new(key: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ty: ty.into(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.ty)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationRecord {
    pub name: String,
    pub role: Role,
    pub fields: Vec<Field>,
}

/// Names of the fixed top-level types, optionally prefixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopLevelNames {
    pub contract: String,
    pub contract_context: String,
    pub method_names: String,
    pub method_name_map: String,
    pub events: String,
    pub events_context: String,
}

impl TopLevelNames {
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            contract: format!("{}Contract", prefix),
            contract_context: format!("{}ContractContext", prefix),
            method_names: format!("{}MethodNames", prefix),
            method_name_map: format!("{}MethodNameMap", prefix),
            events: format!("{}Events", prefix),
            events_context: format!("{}EventsContext", prefix),
        }
    }
}

impl Default for TopLevelNames {
    fn default() -> Self {
        Self::with_prefix("")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamDoc {
    pub name: String,
    pub type_tag: String,
    pub indexed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDocs {
    pub kind: MemberKind,
    pub payable: bool,
    pub constant: bool,
    pub state_mutability: Option<StateMutability>,
    pub params: Vec<ParamDoc>,
}

impl MemberDocs {
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Payable: {}", self.payable),
            format!("Constant: {}", self.constant),
            format!(
                "StateMutability: {}",
                self.state_mutability
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "undefined".to_string())
            ),
            format!("Type: {}", self.kind),
        ];
        for param in &self.params {
            lines.push(format!(
                "@param {} Type: {}, Indexed: {}",
                param.name, param.type_tag, param.indexed
            ));
        }
        lines
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overrides {
    pub name: String,
    pub ty: String,
}

/// One entry of the member interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSignature {
    pub name: String,
    pub is_constructor: bool,
    pub class: CallClass,
    pub params: Vec<Field>,
    pub overrides: Option<Overrides>,
    pub returns: String,
    pub docs: MemberDocs,
}

impl fmt::Display for CallSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut params: Vec<String> = self.params.iter().map(|p| p.to_string()).collect();
        if let Some(overrides) = &self.overrides {
            params.push(format!("{}?: {}", overrides.name, overrides.ty));
        }
        if self.is_constructor {
            write!(f, "'{}'", self.name)?;
        } else {
            write!(f, "{}", self.name)?;
        }
        write!(f, "({}): {}", params.join(", "), self.returns)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventParam {
    pub name: String,
    pub ty: String,
    pub indexed: bool,
}

/// One entry of the event filter interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSignature {
    pub name: String,
    pub params: Vec<EventParam>,
    pub style: EventFilterStyle,
}

impl fmt::Display for EventSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.style {
            EventFilterStyle::Positional { returns } => {
                let params: Vec<String> = self
                    .params
                    .iter()
                    .map(|p| format!("{}: {}", p.name, p.ty))
                    .collect();
                write!(f, "{}({}): {}", self.name, params.join(", "), returns)
            }
            EventFilterStyle::OptionsObject {
                returns,
                event_data,
            } => {
                let filter: Vec<String> = self
                    .params
                    .iter()
                    .filter(|p| p.indexed)
                    .map(|p| {
                        let ty = if p.ty.contains('|') && !p.ty.starts_with('(') {
                            format!("({})", p.ty)
                        } else {
                            p.ty.clone()
                        };
                        format!("{}?: {} | {}[]", p.name, ty, ty)
                    })
                    .collect();
                let filter = if filter.is_empty() {
                    "{}".to_string()
                } else {
                    format!("{{ {} }}", filter.join("; "))
                };
                write!(
                    f,
                    "{}(parameters: {{ filter?: {}; fromBlock?: number; toBlock?: 'latest' | number; topics?: string[] }}, callback?: (error: Error, event: {}) => void): {}",
                    self.name, filter, event_data, returns
                )
            }
        }
    }
}

/// Result of one compile pass, ready for assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub dialect: Dialect,
    pub import_alias: Option<String>,
    pub names: TopLevelNames,
    pub member_names: Vec<String>,
    pub event_names: Vec<String>,
    pub declarations: Vec<DeclarationRecord>,
    pub events: Vec<EventSignature>,
    pub members: Vec<CallSignature>,
}

impl Program {
    pub fn declaration(&self, name: &str) -> Option<&DeclarationRecord> {
        self.declarations.iter().find(|d| d.name == name)
    }

    pub fn member(&self, name: &str) -> Option<&CallSignature> {
        self.members.iter().find(|m| m.name == name)
    }

    /// Member names with overloads collapsed, first occurrence wins.
    pub fn unique_member_names(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        self.member_names
            .iter()
            .filter(|name| seen.insert(name.as_str()))
            .map(|name| name.as_str())
            .collect()
    }
}
