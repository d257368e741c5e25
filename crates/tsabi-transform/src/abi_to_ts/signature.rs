use super::context::CompilationContext;
use super::flattener::{flatten, flatten_fields, Slot};
use super::naming;
use super::program::{
    CallSignature, EventParam, EventSignature, Field, MemberDocs, Overrides, ParamDoc, Role,
};
use tracing::trace;
use tsabi_core::{
    CallClass, CallFlags, CallWrapper, ConstructorDescriptor, DialectProfile, EventDescriptor,
    FunctionDescriptor, MemberKind, Param, Result,
};

pub const CONSTRUCTOR_NAME: &str = "new";

/// What the call hands back before dialect wrapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnShape {
    Void,
    Value(String),
}

/// Wrap a return shape in the dialect's asynchronous-result convention.
/// Anything that mutates state returns the transaction handle, whatever its outputs.
pub fn wrap_return(profile: &DialectProfile, class: CallClass, shape: &ReturnShape) -> String {
    let value = match shape {
        ReturnShape::Void => "void",
        ReturnShape::Value(ty) => ty.as_str(),
    };
    match (profile.wrapper, class) {
        (CallWrapper::Promise { .. }, CallClass::ReadOnly) => format!("Promise<{}>", value),
        (CallWrapper::Promise { transaction }, _) => format!("Promise<{}>", transaction),
        (CallWrapper::MethodContext { read_only, .. }, CallClass::ReadOnly) => {
            format!("{}<{}>", read_only, value)
        }
        (CallWrapper::MethodContext { mutating, .. }, CallClass::Mutating) => mutating.to_string(),
        (CallWrapper::MethodContext { payable, .. }, CallClass::Payable) => payable.to_string(),
    }
}

fn overrides_for(profile: &DialectProfile, class: CallClass) -> Option<Overrides> {
    profile.overrides.map(|o| Overrides {
        name: o.param_name.to_string(),
        ty: if class.is_read_only() {
            o.call_type.to_string()
        } else {
            o.transaction_type.to_string()
        },
    })
}

fn docs_for(kind: MemberKind, flags: &CallFlags, class: CallClass, inputs: &[Param]) -> MemberDocs {
    MemberDocs {
        kind,
        payable: class.is_payable(),
        constant: class.is_read_only(),
        state_mutability: flags.state_mutability,
        params: inputs
            .iter()
            .enumerate()
            .map(|(index, input)| ParamDoc {
                name: input.name_or_placeholder(Role::Request.placeholder(), index),
                type_tag: input.type_tag.clone(),
                indexed: input.indexed,
            })
            .collect(),
    }
}

fn flatten_inputs(
    ctx: &mut CompilationContext,
    profile: &DialectProfile,
    inputs: &[Param],
    scope: &str,
) -> Result<Vec<Field>> {
    inputs
        .iter()
        .enumerate()
        .map(|(index, input)| {
            let ty = flatten(ctx, profile, input, &Slot::input(index), scope, Role::Request)?;
            Ok(Field::new(
                input.name_or_placeholder(Role::Request.placeholder(), index),
                ty,
            ))
        })
        .collect()
}

/// Assemble a call signature from already-flattened parameters.
pub fn build_signature(
    profile: &DialectProfile,
    name: &str,
    is_constructor: bool,
    class: CallClass,
    params: Vec<Field>,
    returns: &ReturnShape,
    docs: MemberDocs,
) -> CallSignature {
    CallSignature {
        name: name.to_string(),
        is_constructor,
        class,
        params,
        overrides: overrides_for(profile, class),
        returns: wrap_return(profile, class, returns),
        docs,
    }
}

pub fn synthesize_constructor(
    ctx: &mut CompilationContext,
    profile: &DialectProfile,
    ctor: &ConstructorDescriptor,
) -> Result<CallSignature> {
    ctx.record_member(CONSTRUCTOR_NAME);
    let class = match ctor.flags.classify() {
        CallClass::Payable => CallClass::Payable,
        _ => CallClass::Mutating,
    };
    let params = flatten_inputs(ctx, profile, &ctor.inputs, "constructor")?;
    let docs = docs_for(MemberKind::Constructor, &ctor.flags, class, &ctor.inputs);
    trace!(class = %class, "synthesized constructor");
    Ok(build_signature(
        profile,
        CONSTRUCTOR_NAME,
        true,
        class,
        params,
        &ReturnShape::Void,
        docs,
    ))
}

pub fn synthesize_function(
    ctx: &mut CompilationContext,
    profile: &DialectProfile,
    function: &FunctionDescriptor,
) -> Result<CallSignature> {
    ctx.record_member(function.name.as_str());
    let class = function.flags.classify();
    let params = flatten_inputs(ctx, profile, &function.inputs, &function.name)?;

    let returns = match function.outputs.as_slice() {
        [] => ReturnShape::Void,
        [single] => ReturnShape::Value(flatten(
            ctx,
            profile,
            single,
            &Slot::output(0),
            &function.name,
            Role::Response,
        )?),
        // Mutating calls only yield a transaction handle, so their per-field
        // outputs are never synthesized.
        outputs if !class.is_read_only() => {
            trace!(member = %function.name, outputs = outputs.len(), "dropping outputs of mutating call");
            ReturnShape::Void
        }
        outputs => {
            let mut fields = flatten_fields(
                ctx,
                profile,
                outputs,
                Slot::output,
                &function.name,
                Role::Response,
            )?;
            if profile.positional_aliases {
                fields.push(Field::new("length", outputs.len().to_string()));
            }
            let candidate = naming::multi_output_candidate(&function.name);
            ReturnShape::Value(ctx.add_declaration(&candidate, Role::Response, fields))
        }
    };

    let docs = docs_for(MemberKind::Function, &function.flags, class, &function.inputs);
    trace!(member = %function.name, class = %class, "synthesized function");
    Ok(build_signature(
        profile,
        &function.name,
        false,
        class,
        params,
        &returns,
        docs,
    ))
}

/// Event filter entry plus, when the event has fields, its emitted-response record.
pub fn synthesize_event(
    ctx: &mut CompilationContext,
    profile: &DialectProfile,
    event: &EventDescriptor,
) -> Result<EventSignature> {
    ctx.record_event(event.name.as_str());

    let mut params = Vec::with_capacity(event.inputs.len());
    for (index, input) in event.inputs.iter().enumerate() {
        let ty = flatten(
            ctx,
            profile,
            input,
            &Slot::input(index),
            &event.name,
            Role::Event,
        )?;
        params.push(EventParam {
            name: input.name_or_placeholder(Role::Event.placeholder(), index),
            ty,
            indexed: input.indexed,
        });
    }

    if !params.is_empty() {
        let fields = params
            .iter()
            .map(|p| Field::new(p.name.clone(), p.ty.clone()))
            .collect();
        ctx.add_declaration(&naming::event_candidate(&event.name), Role::Event, fields);
    }

    trace!(event = %event.name, "synthesized event");
    Ok(EventSignature {
        name: event.name.clone(),
        params,
        style: profile.event_filter,
    })
}
