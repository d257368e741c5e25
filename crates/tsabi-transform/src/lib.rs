/*! Compile contract interface descriptions into TypeScript declaration programs.
 *
 * A member list says nothing about which shapes repeat, which names clash, or how a call returns in a
 * given client library. This crate settles all of that in one deterministic pass: composite parameters
 * become named, deduplicated declarations, and each member becomes a signature wrapped the way the
 * selected dialect expects.
 */

pub mod abi_to_ts;

pub use abi_to_ts::{
    compile, compile_document, CallSignature, CompilationContext, CompileOptions,
    DeclarationRecord, EventParam, EventSignature, Field, MemberCompiler, Program, Role,
    TopLevelNames,
};
