/*! Render compiled declaration programs as TypeScript.
 *
 * The transform crate decides names and shapes; this crate only decides layout. Output order is fixed
 * (imports and context alias, member names, event names, declarations, event filters, the contract
 * interface), so identical programs always produce identical text.
 */

pub mod assembler;
pub mod common_types;
pub mod config;
pub mod emitter;

pub use assembler::{TypingsEmitter, TOOLKIT_MODULE};
pub use common_types::{render_common_types, CommonTypes, COMMON_TYPES_FILE};
pub use config::{EmitterConfig, IndentStyle};
pub use emitter::{EmitContext, EmitHelper, EmitResult, Emittable, Emitter};

use tsabi_transform::Program;

/// Render the typings module for `program`.
pub fn render_typings(program: &Program, config: &EmitterConfig) -> anyhow::Result<String> {
    TypingsEmitter::new(config.clone()).emit_to_string(program)
}
