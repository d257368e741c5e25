use crate::descriptor::{CallFlags, StateMutability};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three call shapes every dialect distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CallClass {
    Payable,
    Mutating,
    ReadOnly,
}

impl CallClass {
    pub fn is_read_only(self) -> bool {
        self == CallClass::ReadOnly
    }

    pub fn is_payable(self) -> bool {
        self == CallClass::Payable
    }
}

impl fmt::Display for CallClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            CallClass::Payable => "payable",
            CallClass::Mutating => "mutating",
            CallClass::ReadOnly => "read-only",
        };
        f.write_str(text)
    }
}

/// Payable wins over everything; only an explicit `view` or `pure` makes a call
/// read-only. A missing mutability means the call may write state.
pub fn classify(payable: bool, mutability: Option<StateMutability>) -> CallClass {
    if payable {
        return CallClass::Payable;
    }
    match mutability {
        Some(StateMutability::Payable) => CallClass::Payable,
        Some(StateMutability::View) | Some(StateMutability::Pure) => CallClass::ReadOnly,
        Some(StateMutability::NonPayable) | None => CallClass::Mutating,
    }
}

impl CallFlags {
    /// Legacy `constant: true` stands in for `view` when no mutability is declared.
    pub fn classify(&self) -> CallClass {
        let mutability = match self.state_mutability {
            None if self.constant => Some(StateMutability::View),
            other => other,
        };
        classify(self.payable, mutability)
    }
}
