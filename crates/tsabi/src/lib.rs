/*! TypeScript typings from contract ABIs.
 *
 * One import for the whole pipeline: decode the ABI document, compile it for a dialect, and render the
 * typings module plus its companion types. Each stage is also re-exported on its own for callers that
 * want to inspect the compiled program before rendering.
 */

pub use tsabi_core as core;
pub use tsabi_emit as emit;
pub use tsabi_parser as parser;
pub use tsabi_transform as transform;

pub use tsabi_core::{AbiError, CallClass, Dialect, MemberDescriptor, Param};
pub use tsabi_emit::{render_common_types, render_typings, EmitterConfig, COMMON_TYPES_FILE};
pub use tsabi_parser::parse_document;
pub use tsabi_transform::{compile, compile_document, CompileOptions, Program};

/// Both files a generation run produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedTypings {
    pub typings: String,
    pub common_types: String,
}

/// Decode, compile and render the typings module for `document`.
pub fn generate_typings(
    document: &str,
    options: &CompileOptions,
    config: &EmitterConfig,
) -> anyhow::Result<String> {
    let program = compile_document(document, options)?;
    render_typings(&program, config)
}

/// Like [`generate_typings`], plus the companion `common.types.ts`.
pub fn generate(
    document: &str,
    options: &CompileOptions,
    config: &EmitterConfig,
) -> anyhow::Result<GeneratedTypings> {
    let program = compile_document(document, options)?;
    Ok(GeneratedTypings {
        typings: render_typings(&program, config)?,
        common_types: render_common_types(
            program.dialect,
            program.import_alias.as_deref(),
            config,
        )?,
    })
}
