//! Lays a compiled [`Program`] out as one TypeScript module.

use crate::config::EmitterConfig;
use crate::emitter::{EmitContext, EmitHelper, EmitResult, Emitter};
use std::io::Write;
use tsabi_core::{Dialect, DialectProfile};
use tsabi_transform::{DeclarationRecord, Program};

/// Module every dialect's contract-context helper types are published from.
pub const TOOLKIT_MODULE: &str = "@abi-toolkit/converter-typescript";

pub struct TypingsEmitter {
    config: EmitterConfig,
}

impl TypingsEmitter {
    pub fn new(config: EmitterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    fn library_module<'a>(&self, program: &'a Program, profile: &'static DialectProfile) -> &'a str {
        program
            .import_alias
            .as_deref()
            .unwrap_or(profile.default_library_module)
    }

    fn import_line(&self, names: &[&str], module: &str) -> String {
        format!(
            "{} {{ {} }} from '{}';",
            self.config.import_keyword(),
            names.join(", "),
            module
        )
    }

    fn emit_header<W: Write>(
        &self,
        program: &Program,
        writer: &mut W,
        ctx: &mut EmitContext,
    ) -> EmitResult {
        let profile = program.dialect.profile();
        let library = self.library_module(program, profile);
        let common = self.config.common_types_module.as_str();

        let imports = match program.dialect {
            Dialect::Web3 => vec![
                self.import_line(&["EventData", "EventResponse", profile.context_type], library),
                self.import_line(
                    &[
                        "MethodPayableReturnContext",
                        "MethodConstantReturnContext",
                        "MethodReturnContext",
                    ],
                    common,
                ),
            ],
            Dialect::EthersV5 => vec![
                self.import_line(
                    &["ContractTransaction", "BigNumber", "BigNumberish", "BytesLike"],
                    library,
                ),
                self.import_line(&[profile.context_type], TOOLKIT_MODULE),
                self.import_line(
                    &["EventFilter", "ContractTransactionOverrides", "ContractCallOverrides"],
                    common,
                ),
            ],
            Dialect::EthersV6 => vec![
                self.import_line(
                    &["ContractTransactionResponse", "BigNumberish", "BytesLike"],
                    library,
                ),
                self.import_line(&[profile.context_type], TOOLKIT_MODULE),
                self.import_line(
                    &["EventFilter", "ContractTransactionOverrides", "ContractCallOverrides"],
                    common,
                ),
            ],
        };
        for line in &imports {
            EmitHelper::write_line(writer, ctx, line)?;
        }
        EmitHelper::blank_line(writer)?;

        let names = &program.names;
        EmitHelper::write_line(
            writer,
            ctx,
            &format!(
                "export type {} = {}<{}, {}, {}, {}>;",
                names.contract_context,
                profile.context_type,
                names.contract,
                names.method_names,
                names.events_context,
                names.events
            ),
        )
    }

    fn emit_method_names<W: Write>(
        &self,
        program: &Program,
        writer: &mut W,
        ctx: &mut EmitContext,
    ) -> EmitResult {
        let names = &program.names;
        let union = string_union(program.unique_member_names());
        EmitHelper::write_line(
            writer,
            ctx,
            &format!("export type {} = {};", names.method_names, union),
        )?;
        EmitHelper::write_block_with(
            writer,
            ctx,
            &format!("export type {} =", names.method_name_map),
            "};",
            |w, c| {
                EmitHelper::write_line(w, c, &format!("[key in {}]: string;", names.method_names))
            },
        )
    }

    fn emit_event_names<W: Write>(
        &self,
        program: &Program,
        writer: &mut W,
        ctx: &mut EmitContext,
    ) -> EmitResult {
        let union = string_union(program.event_names.iter().map(String::as_str));
        EmitHelper::write_line(
            writer,
            ctx,
            &format!("export type {} = {};", program.names.events, union),
        )
    }

    fn emit_declaration<W: Write>(
        &self,
        record: &DeclarationRecord,
        writer: &mut W,
        ctx: &mut EmitContext,
    ) -> EmitResult {
        EmitHelper::write_block(
            writer,
            ctx,
            &format!("export interface {}", record.name),
            |w, c| {
                for field in &record.fields {
                    EmitHelper::write_line(w, c, &format!("{};", field))?;
                }
                Ok(())
            },
        )
    }

    fn emit_events_context<W: Write>(
        &self,
        program: &Program,
        writer: &mut W,
        ctx: &mut EmitContext,
    ) -> EmitResult {
        EmitHelper::write_block(
            writer,
            ctx,
            &format!("export interface {}", program.names.events_context),
            |w, c| {
                for event in &program.events {
                    EmitHelper::write_line(w, c, &format!("{};", event))?;
                }
                Ok(())
            },
        )
    }

    fn emit_contract<W: Write>(
        &self,
        program: &Program,
        writer: &mut W,
        ctx: &mut EmitContext,
    ) -> EmitResult {
        let include_docs = self.config.include_docs;
        EmitHelper::write_block(
            writer,
            ctx,
            &format!("export interface {}", program.names.contract),
            |w, c| {
                for member in &program.members {
                    if include_docs {
                        EmitHelper::write_doc_block(w, c, &member.docs.lines())?;
                    }
                    EmitHelper::write_line(w, c, &format!("{};", member))?;
                }
                Ok(())
            },
        )
    }
}

impl Default for TypingsEmitter {
    fn default() -> Self {
        Self::new(EmitterConfig::default())
    }
}

impl Emitter for TypingsEmitter {
    type Item = Program;

    fn context(&self) -> EmitContext {
        EmitContext::from_config(&self.config)
    }

    fn emit<W: Write>(&self, program: &Program, writer: &mut W, ctx: &mut EmitContext) -> EmitResult {
        self.emit_header(program, writer, ctx)?;
        EmitHelper::blank_line(writer)?;

        self.emit_method_names(program, writer, ctx)?;
        EmitHelper::blank_line(writer)?;

        self.emit_event_names(program, writer, ctx)?;

        for record in &program.declarations {
            EmitHelper::blank_line(writer)?;
            self.emit_declaration(record, writer, ctx)?;
        }

        EmitHelper::blank_line(writer)?;
        self.emit_events_context(program, writer, ctx)?;

        EmitHelper::blank_line(writer)?;
        self.emit_contract(program, writer, ctx)
    }
}

/// `'a' | 'b'`, or `never` for an empty set.
fn string_union<'a>(items: impl IntoIterator<Item = &'a str>) -> String {
    let quoted: Vec<String> = items.into_iter().map(|item| format!("'{}'", item)).collect();
    if quoted.is_empty() {
        "never".to_string()
    } else {
        quoted.join(" | ")
    }
}
