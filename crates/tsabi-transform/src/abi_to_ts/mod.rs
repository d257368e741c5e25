/*! Compile member descriptors into a declaration program.
 *
 * One pass walks the descriptor list in order. Every composite parameter it meets is flattened into
 * a named declaration, depth first, and every member becomes a call or event signature shaped by its
 * mutability and the selected dialect. The pass owns its context and hands back an immutable
 * `Program` for the emitter.
 */

mod context;
mod flattener;
mod naming;
mod program;
mod signature;

use tracing::{debug, trace};
use tsabi_core::{Dialect, DialectProfile, MemberDescriptor, Result};

pub use context::CompilationContext;
pub use flattener::{flatten, flatten_fields, Slot};
pub use naming::{capitalize, top_level_names};
pub use program::{
    CallSignature, DeclarationRecord, EventParam, EventSignature, Field, MemberDocs, Overrides,
    ParamDoc, Program, Role, TopLevelNames,
};
pub use signature::{
    build_signature, synthesize_constructor, synthesize_event, synthesize_function, wrap_return,
    ReturnShape, CONSTRUCTOR_NAME,
};

/// Values the compile pass is configured with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    pub dialect: Dialect,
    pub prefix: Option<String>,
    pub import_alias: Option<String>,
}

impl CompileOptions {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            prefix: None,
            import_alias: None,
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into()).filter(|p: &String| !p.trim().is_empty());
        self
    }

    pub fn with_import_alias(mut self, alias: impl Into<String>) -> Self {
        self.import_alias = Some(alias.into()).filter(|a: &String| !a.trim().is_empty());
        self
    }

    /// Build options from a dialect selector string.
    pub fn parse(dialect: &str) -> Result<Self> {
        Ok(Self::new(dialect.parse::<Dialect>()?))
    }
}

/// Runs the per-member synthesis over one descriptor list.
pub struct MemberCompiler<'a> {
    options: &'a CompileOptions,
    profile: &'static DialectProfile,
    ctx: CompilationContext,
    events: Vec<EventSignature>,
    members: Vec<CallSignature>,
}

impl<'a> MemberCompiler<'a> {
    pub fn new(options: &'a CompileOptions) -> Self {
        Self {
            options,
            profile: options.dialect.profile(),
            ctx: CompilationContext::new(),
            events: Vec::new(),
            members: Vec::new(),
        }
    }

    pub fn compile_member(&mut self, member: &MemberDescriptor) -> Result<()> {
        match member {
            MemberDescriptor::Constructor(ctor) => {
                let signature = synthesize_constructor(&mut self.ctx, self.profile, ctor)?;
                self.members.push(signature);
            }
            MemberDescriptor::Function(function) => {
                let signature = synthesize_function(&mut self.ctx, self.profile, function)?;
                self.members.push(signature);
            }
            MemberDescriptor::Event(event) => {
                let signature = synthesize_event(&mut self.ctx, self.profile, event)?;
                self.events.push(signature);
            }
            MemberDescriptor::NonCallable { kind, name } => {
                trace!(%kind, name = name.as_deref().unwrap_or(""), "skipping non-callable entry");
            }
        }
        Ok(())
    }

    pub fn finish(self) -> Program {
        let (declarations, member_names, event_names) = self.ctx.into_parts();
        debug!(
            dialect = %self.options.dialect,
            declarations = declarations.len(),
            members = self.members.len(),
            events = self.events.len(),
            "compile pass finished"
        );
        Program {
            dialect: self.options.dialect,
            import_alias: self.options.import_alias.clone(),
            names: top_level_names(self.options.prefix.as_deref()),
            member_names,
            event_names,
            declarations,
            events: self.events,
            members: self.members,
        }
    }
}

/// Compile a descriptor list. The first failing member aborts the whole pass.
pub fn compile(members: &[MemberDescriptor], options: &CompileOptions) -> Result<Program> {
    let mut compiler = MemberCompiler::new(options);
    for member in members {
        compiler.compile_member(member)?;
    }
    Ok(compiler.finish())
}

/// Decode an ABI document and compile it in one step.
pub fn compile_document(document: &str, options: &CompileOptions) -> Result<Program> {
    let members = tsabi_parser::parse_document(document)?;
    compile(&members, options)
}

#[cfg(test)]
mod tests;
