use std::collections::HashMap;

use rj_core::error::{Error, Result};
use rj_core::ir::{FunctionId, GlobalVarId};
use rj_core::span::Span;
use rj_rpg::{DataDefId, ReferenceByName, SubroutineId};

/// Maps front-end declarations to the IR entities created for them.
///
/// Keys are declaration identities, never names. One context lives for exactly
/// one translation and is fully populated before any body is lowered.
#[derive(Debug, Default)]
pub(super) struct CorrespondenceContext {
    globals: HashMap<DataDefId, GlobalVarId>,
    functions: HashMap<SubroutineId, FunctionId>,
}

impl CorrespondenceContext {
    pub(super) fn new() -> Self {
        Self::default()
    }

    pub(super) fn register_global(&mut self, declaration: DataDefId, global: GlobalVarId) {
        self.globals.insert(declaration, global);
    }

    pub(super) fn register_function(&mut self, subroutine: SubroutineId, function: FunctionId) {
        self.functions.insert(subroutine, function);
    }

    pub(super) fn has_global(&self, declaration: DataDefId) -> bool {
        self.globals.contains_key(&declaration)
    }

    pub(super) fn has_function(&self, subroutine: SubroutineId) -> bool {
        self.functions.contains_key(&subroutine)
    }

    pub(super) fn global_for(&self, declaration: DataDefId) -> Option<GlobalVarId> {
        self.globals.get(&declaration).copied()
    }

    pub(super) fn function_for(&self, subroutine: SubroutineId) -> Option<FunctionId> {
        self.functions.get(&subroutine).copied()
    }

    /// Follow a by-name data reference to its global variable.
    pub(super) fn global(
        &self,
        reference: &ReferenceByName<DataDefId>,
        span: Option<Span>,
    ) -> Result<GlobalVarId> {
        reference
            .referred()
            .and_then(|id| self.global_for(id))
            .ok_or_else(|| Error::unresolved(reference.name.as_str(), span))
    }

    /// Follow a by-name subroutine reference to its function.
    pub(super) fn function(
        &self,
        reference: &ReferenceByName<SubroutineId>,
        span: Option<Span>,
    ) -> Result<FunctionId> {
        reference
            .referred()
            .and_then(|id| self.function_for(id))
            .ok_or_else(|| Error::unresolved(reference.name.as_str(), span))
    }
}
