use crate::AbiError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Client library the typings are generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dialect {
    Web3,
    EthersV5,
    EthersV6,
}

impl Dialect {
    pub const ALL: [Dialect; 3] = [Dialect::Web3, Dialect::EthersV5, Dialect::EthersV6];

    pub fn profile(self) -> &'static DialectProfile {
        match self {
            Dialect::Web3 => &WEB3,
            Dialect::EthersV5 => &ETHERS_V5,
            Dialect::EthersV6 => &ETHERS_V6,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Dialect::Web3 => "web3",
            Dialect::EthersV5 => "ethers_v5",
            Dialect::EthersV6 => "ethers_v6",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = AbiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "web3" => Ok(Dialect::Web3),
            "ethers_v5" => Ok(Dialect::EthersV5),
            "ethers_v6" => Ok(Dialect::EthersV6),
            _ => Err(AbiError::UnsupportedDialect(s.to_string())),
        }
    }
}

/// How a trailing `overrides` parameter is spelled for mutating and read-only calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverridesProfile {
    pub param_name: &'static str,
    pub transaction_type: &'static str,
    pub call_type: &'static str,
}

/// Shape of the value a generated method returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallWrapper {
    /// `Promise<T>` for reads, `Promise<transaction>` for anything that mutates.
    Promise { transaction: &'static str },
    /// web3 method contexts, one per mutability class.
    MethodContext {
        read_only: &'static str,
        mutating: &'static str,
        payable: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventFilterStyle {
    /// `Transfer(from: string, to: string, value: BigNumberish): EventFilter`
    Positional { returns: &'static str },
    /// web3 `parameters: { filter?: {...} }` object with a callback.
    OptionsObject {
        returns: &'static str,
        event_data: &'static str,
    },
}

/// Everything that differs between dialects. Immutable, one static per dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialectProfile {
    pub dialect: Dialect,
    pub integer_input: &'static str,
    pub integer_output: &'static str,
    pub bytes_input: &'static str,
    pub bytes_output: &'static str,
    pub positional_aliases: bool,
    pub overrides: Option<OverridesProfile>,
    pub wrapper: CallWrapper,
    pub event_filter: EventFilterStyle,
    pub context_type: &'static str,
    pub default_library_module: &'static str,
}

const ETHERS_OVERRIDES: OverridesProfile = OverridesProfile {
    param_name: "overrides",
    transaction_type: "ContractTransactionOverrides",
    call_type: "ContractCallOverrides",
};

pub static WEB3: DialectProfile = DialectProfile {
    dialect: Dialect::Web3,
    integer_input: "string",
    integer_output: "string",
    bytes_input: "string | number[]",
    bytes_output: "string",
    positional_aliases: false,
    overrides: None,
    wrapper: CallWrapper::MethodContext {
        read_only: "MethodConstantReturnContext",
        mutating: "MethodReturnContext",
        payable: "MethodPayableReturnContext",
    },
    event_filter: EventFilterStyle::OptionsObject {
        returns: "EventResponse",
        event_data: "EventData",
    },
    context_type: "Web3ContractContext",
    default_library_module: "@abi-toolkit/converter-typescript",
};

pub static ETHERS_V5: DialectProfile = DialectProfile {
    dialect: Dialect::EthersV5,
    integer_input: "BigNumberish",
    integer_output: "BigNumber",
    bytes_input: "BytesLike",
    bytes_output: "string",
    positional_aliases: true,
    overrides: Some(ETHERS_OVERRIDES),
    wrapper: CallWrapper::Promise {
        transaction: "ContractTransaction",
    },
    event_filter: EventFilterStyle::Positional {
        returns: "EventFilter",
    },
    context_type: "EthersContractContextV5",
    default_library_module: "ethers",
};

pub static ETHERS_V6: DialectProfile = DialectProfile {
    dialect: Dialect::EthersV6,
    integer_input: "BigNumberish",
    integer_output: "bigint",
    bytes_input: "BytesLike",
    bytes_output: "string",
    positional_aliases: true,
    overrides: Some(ETHERS_OVERRIDES),
    wrapper: CallWrapper::Promise {
        transaction: "ContractTransactionResponse",
    },
    event_filter: EventFilterStyle::Positional {
        returns: "EventFilter",
    },
    context_type: "EthersContractContextV6",
    default_library_module: "ethers",
};
