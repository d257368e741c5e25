use super::context::CompilationContext;
use super::naming;
use super::program::{Field, Role};
use tsabi_core::{map_scalar, AbiError, BaseType, DialectProfile, Location, Param, Result};
use tsabi_parser::parse_type;

/// Where a parameter sits: its index among its siblings and a readable path
/// used in error locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub index: usize,
    pub path: String,
}

impl Slot {
    pub fn new(index: usize, path: impl Into<String>) -> Self {
        Self {
            index,
            path: path.into(),
        }
    }

    pub fn input(index: usize) -> Self {
        Self::new(index, format!("inputs[{}]", index))
    }

    pub fn output(index: usize) -> Self {
        Self::new(index, format!("outputs[{}]", index))
    }

    pub fn component(&self, index: usize) -> Self {
        Self::new(index, format!("{}.components[{}]", self.path, index))
    }
}

/// Turn one parameter into a TypeScript type token, registering a declaration
/// for every composite shape reached on the way down (children first).
pub fn flatten(
    ctx: &mut CompilationContext,
    profile: &DialectProfile,
    param: &Param,
    slot: &Slot,
    scope: &str,
    role: Role,
) -> Result<String> {
    let location = || Location::new(scope, slot.path.clone());
    let spec = parse_type(&param.type_tag).map_err(|e| e.at(location()))?;

    match (spec.base, param.is_composite()) {
        (BaseType::Scalar(scalar), false) => {
            let token =
                map_scalar(&scalar, profile, role.direction()).map_err(|e| e.at(location()))?;
            // `string | number[]` must be grouped before it takes an array suffix
            if spec.is_array() && token.contains('|') {
                Ok(format!("({}){}", token, spec.array_suffix()))
            } else {
                Ok(format!("{}{}", token, spec.array_suffix()))
            }
        }
        (BaseType::Tuple, true) => {
            let field_name = param.name_or_placeholder(role.placeholder(), slot.index);
            let candidate = naming::declaration_candidate(scope, param, &field_name, role);
            let fields = flatten_fields(
                ctx,
                profile,
                param.components(),
                |index| slot.component(index),
                scope,
                role,
            )?;
            let name = ctx.add_declaration(&candidate, role, fields);
            Ok(format!("{}{}", name, spec.array_suffix()))
        }
        (BaseType::Tuple, false) => Err(AbiError::InvalidParameter {
            location: location(),
            message: format!("`{}` carries no components", param.type_tag),
        }),
        (BaseType::Scalar(_), true) => Err(AbiError::InvalidParameter {
            location: location(),
            message: format!("components given for non-tuple type `{}`", param.type_tag),
        }),
    }
}

/// Field bodies for a list of siblings. Response bodies get an index alias
/// per field in dialects that expose positional access.
pub fn flatten_fields(
    ctx: &mut CompilationContext,
    profile: &DialectProfile,
    components: &[Param],
    slot_of: impl Fn(usize) -> Slot,
    scope: &str,
    role: Role,
) -> Result<Vec<Field>> {
    let aliases = role == Role::Response && profile.positional_aliases;
    let mut fields = Vec::with_capacity(components.len() * if aliases { 2 } else { 1 });

    for (index, component) in components.iter().enumerate() {
        let slot = slot_of(index);
        let ty = flatten(ctx, profile, component, &slot, scope, role)?;
        let key = component.name_or_placeholder(role.placeholder(), index);
        if aliases {
            fields.push(Field::new(key, ty.clone()));
            fields.push(Field::new(index.to_string(), ty));
        } else {
            fields.push(Field::new(key, ty));
        }
    }

    Ok(fields)
}
