// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Function definitions

use crate::data::names::{Location, TypedName, YulName};
use crate::data::statements::Block;
use std::collections::BTreeSet;

/// A named function with positional parameters and return variables.
///
/// Parameter and return variable names are unique within the function and do not clash
/// with each other. Positions matter: usage masks address slots by index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDefinition {
    pub location: Location,
    pub name: YulName,
    pub parameters: Vec<TypedName>,
    pub return_variables: Vec<TypedName>,
    pub body: Block,
}

impl FunctionDefinition {
    pub fn new(
        location: Location,
        name: YulName,
        parameters: Vec<TypedName>,
        return_variables: Vec<TypedName>,
        body: Block,
    ) -> Self {
        Self {
            location,
            name,
            parameters,
            return_variables,
            body,
        }
    }

    /// Parameter names followed by return variable names
    pub fn slot_names(&self) -> impl Iterator<Item = &YulName> {
        self.parameters
            .iter()
            .chain(self.return_variables.iter())
            .map(|slot| &slot.name)
    }

    /// Check that no name is used twice among parameters and return variables
    pub fn has_distinct_slot_names(&self) -> bool {
        let mut seen = BTreeSet::new();
        self.slot_names().all(|name| seen.insert(name))
    }
}
