//! The companion `common.types.ts` every generated module imports from.

use crate::config::EmitterConfig;
use crate::emitter::{EmitContext, EmitHelper, EmitResult, Emittable};
use anyhow::Result;
use std::io::Write;
use tsabi_core::Dialect;

pub const COMMON_TYPES_FILE: &str = "common.types.ts";

struct Property {
    doc: Option<&'static str>,
    line: String,
}

impl Property {
    fn plain(line: impl Into<String>) -> Self {
        Self {
            doc: None,
            line: line.into(),
        }
    }

    fn documented(doc: &'static str, line: impl Into<String>) -> Self {
        Self {
            doc: Some(doc),
            line: line.into(),
        }
    }
}

struct TypeAlias {
    header: String,
    properties: Vec<Property>,
}

impl TypeAlias {
    fn new(header: impl Into<String>, properties: Vec<Property>) -> Self {
        Self {
            header: header.into(),
            properties,
        }
    }
}

/// Shared support types for one dialect.
pub struct CommonTypes<'a> {
    pub dialect: Dialect,
    pub import_alias: Option<&'a str>,
    pub type_only_imports: bool,
}

impl<'a> CommonTypes<'a> {
    pub fn new(dialect: Dialect, import_alias: Option<&'a str>) -> Self {
        Self {
            dialect,
            import_alias,
            type_only_imports: false,
        }
    }

    fn import_keyword(&self) -> &'static str {
        if self.type_only_imports {
            "import type"
        } else {
            "import"
        }
    }

    fn imports(&self) -> Vec<String> {
        let module = self
            .import_alias
            .unwrap_or(self.dialect.profile().default_library_module);
        match self.dialect {
            Dialect::Web3 => vec![
                format!("{} {{ BigNumber }} from 'bignumber.js';", self.import_keyword()),
                format!("{} BN from 'bn.js';", self.import_keyword()),
                format!(
                    "{} {{ PromiEvent, TransactionReceipt }} from '{}';",
                    self.import_keyword(),
                    module
                ),
            ],
            Dialect::EthersV5 => vec![format!(
                "{} {{ BigNumber }} from '{}';",
                self.import_keyword(),
                module
            )],
            Dialect::EthersV6 => Vec::new(),
        }
    }

    fn aliases(&self) -> Vec<TypeAlias> {
        match self.dialect {
            Dialect::Web3 => web3_aliases(),
            Dialect::EthersV5 => ethers_aliases("BigNumber"),
            Dialect::EthersV6 => ethers_aliases("bigint"),
        }
    }
}

fn ethers_aliases(amount: &str) -> Vec<TypeAlias> {
    vec![
        TypeAlias::new(
            "EventFilter",
            vec![
                Property::plain("address?: string;"),
                Property::plain("topics?: string[];"),
                Property::plain("fromBlock?: string | number;"),
                Property::plain("toBlock?: string | number;"),
            ],
        ),
        TypeAlias::new(
            "ContractTransactionOverrides",
            vec![
                Property::documented(
                    "The maximum units of gas for the transaction to use",
                    "gasLimit?: number;",
                ),
                Property::documented(
                    "The price (in wei) per unit of gas",
                    format!("gasPrice?: {} | string | number | Promise<any>;", amount),
                ),
                Property::documented("The nonce to use in the transaction", "nonce?: number;"),
                Property::documented(
                    "The amount to send with the transaction (i.e. msg.value)",
                    format!("value?: {} | string | number | Promise<any>;", amount),
                ),
                Property::documented("The chain ID (or network ID) to use", "chainId?: number;"),
            ],
        ),
        TypeAlias::new(
            "ContractCallOverrides",
            vec![
                Property::documented("The address to execute the call as", "from?: string;"),
                Property::documented(
                    "The maximum units of gas for the transaction to use",
                    "gasLimit?: number;",
                ),
            ],
        ),
    ]
}

fn web3_aliases() -> Vec<TypeAlias> {
    vec![
        TypeAlias::new(
            "CallOptions",
            vec![
                Property::plain("from?: string;"),
                Property::plain("gasPrice?: string;"),
                Property::plain("gas?: number;"),
            ],
        ),
        TypeAlias::new(
            "SendOptions",
            vec![
                Property::plain("from: string;"),
                Property::plain("value?: number | string | BN | BigNumber;"),
                Property::plain("gasPrice?: string;"),
                Property::plain("gas?: number;"),
            ],
        ),
        TypeAlias::new(
            "EstimateGasOptions",
            vec![
                Property::plain("from?: string;"),
                Property::plain("value?: number | string | BN | BigNumber;"),
                Property::plain("gas?: number;"),
            ],
        ),
        TypeAlias::new(
            "MethodPayableReturnContext",
            vec![
                Property::plain("send(options: SendOptions): PromiEvent<TransactionReceipt>;"),
                Property::plain(
                    "send(options: SendOptions, callback: (error: Error, result: any) => void): PromiEvent<TransactionReceipt>;",
                ),
                Property::plain("estimateGas(options: EstimateGasOptions): Promise<number>;"),
                Property::plain(
                    "estimateGas(options: EstimateGasOptions, callback: (error: Error, result: any) => void): Promise<number>;",
                ),
                Property::plain("encodeABI(): string;"),
            ],
        ),
        TypeAlias::new(
            "MethodConstantReturnContext<TCallReturn>",
            vec![
                Property::plain("call(): Promise<TCallReturn>;"),
                Property::plain("call(options: CallOptions): Promise<TCallReturn>;"),
                Property::plain(
                    "call(options: CallOptions, callback: (error: Error, result: TCallReturn) => void): Promise<TCallReturn>;",
                ),
                Property::plain("encodeABI(): string;"),
            ],
        ),
    ]
}

impl Emittable for CommonTypes<'_> {
    fn emit<W: Write>(&self, writer: &mut W, ctx: &mut EmitContext) -> EmitResult {
        let imports = self.imports();
        for line in &imports {
            EmitHelper::write_line(writer, ctx, line)?;
        }
        if !imports.is_empty() {
            EmitHelper::blank_line(writer)?;
        }

        for (index, alias) in self.aliases().iter().enumerate() {
            if index > 0 {
                EmitHelper::blank_line(writer)?;
            }
            EmitHelper::write_block_with(
                writer,
                ctx,
                &format!("export type {} =", alias.header),
                "};",
                |w, c| {
                    for property in &alias.properties {
                        if let Some(doc) = property.doc {
                            EmitHelper::write_doc_block(w, c, &[doc])?;
                        }
                        EmitHelper::write_line(w, c, &property.line)?;
                    }
                    Ok(())
                },
            )?;
        }

        if self.dialect == Dialect::Web3 {
            EmitHelper::blank_line(writer)?;
            EmitHelper::write_line(
                writer,
                ctx,
                "export type MethodReturnContext = MethodPayableReturnContext;",
            )?;
        }
        Ok(())
    }
}

/// Render `common.types.ts` for `dialect`.
pub fn render_common_types(
    dialect: Dialect,
    import_alias: Option<&str>,
    config: &EmitterConfig,
) -> Result<String> {
    let common = CommonTypes {
        type_only_imports: config.type_only_imports,
        ..CommonTypes::new(dialect, import_alias)
    };
    let mut buffer = Vec::new();
    let mut ctx = EmitContext::from_config(config);
    common.emit(&mut buffer, &mut ctx)?;
    Ok(String::from_utf8(buffer)?)
}
