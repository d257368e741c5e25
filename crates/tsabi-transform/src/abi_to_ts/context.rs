use super::program::{DeclarationRecord, Field, Role};
use indexmap::IndexSet;
use std::collections::HashMap;
use tracing::debug;

/// Accumulated state for exactly one compile pass. Never shared between passes.
#[derive(Debug, Default)]
pub struct CompilationContext {
    declarations: Vec<DeclarationRecord>,
    names: IndexSet<String>,
    shapes: HashMap<(Role, Vec<Field>), usize>,
    members: Vec<String>,
    events: Vec<String>,
}

impl CompilationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a declaration body and return the name it is reachable under.
    ///
    /// A body already registered for the same role keeps its first name. A
    /// candidate taken by a different body becomes `candidate2`, `candidate3`, ...
    ///
    /// Event records are referenced by name from outside the program, so they
    /// only merge with a record registered under the same candidate.
    pub fn add_declaration(&mut self, candidate: &str, role: Role, fields: Vec<Field>) -> String {
        // names and declarations are pushed together, so positions line up
        if let Some(index) = self.names.get_index_of(candidate) {
            let record = &self.declarations[index];
            if record.role == role && record.fields == fields {
                return record.name.clone();
            }
        }

        let shape = (role, fields);
        if role != Role::Event {
            if let Some(&index) = self.shapes.get(&shape) {
                let existing = &self.declarations[index].name;
                debug!(candidate, existing = %existing, "reusing structurally identical declaration");
                return existing.clone();
            }
        }

        let name = self.free_name(candidate);
        if name != candidate {
            debug!(candidate, renamed = %name, "declaration name collision");
        }

        let index = self.declarations.len();
        let (role, fields) = shape;
        self.declarations.push(DeclarationRecord {
            name: name.clone(),
            role,
            fields: fields.clone(),
        });
        self.names.insert(name.clone());
        self.shapes.entry((role, fields)).or_insert(index);
        debug!(name = %name, ?role, "registered declaration");
        name
    }

    fn free_name(&self, candidate: &str) -> String {
        if !self.names.contains(candidate) {
            return candidate.to_string();
        }
        (2..)
            .map(|n| format!("{}{}", candidate, n))
            .find(|name| !self.names.contains(name))
            .unwrap_or_else(|| candidate.to_string())
    }

    pub fn record_member(&mut self, name: impl Into<String>) {
        self.members.push(name.into());
    }

    pub fn record_event(&mut self, name: impl Into<String>) {
        self.events.push(name.into());
    }

    pub fn snapshot(&self) -> &[DeclarationRecord] {
        &self.declarations
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn member_names(&self) -> &[String] {
        &self.members
    }

    pub fn event_names(&self) -> &[String] {
        &self.events
    }

    pub fn into_parts(self) -> (Vec<DeclarationRecord>, Vec<String>, Vec<String>) {
        (self.declarations, self.members, self.events)
    }
}
