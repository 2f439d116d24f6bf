// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Function splitter
//!
//! Turns
//!
//! ```text
//! function f(a, b) -> r, s { body }
//! ```
//!
//! with `b` and `s` unused into a reduced function that owns the body
//!
//! ```text
//! function f'(a) -> r { body }
//! ```
//!
//! while `f` keeps its signature (under fresh slot names) and only forwards:
//!
//! ```text
//! function f(a_1, b_2) -> r_3, s_4 { r_3 := f'(a_1) }
//! ```
//!
//! `s_4` is never assigned and so keeps its zero value, as `s` did in the original body.

use crate::mask::{apply_boolean_mask, UsageMasks};
use crate::name_dispenser::NameSource;
use crate::rename::RenameTable;
use itertools::Itertools;
use log::debug;
use std::mem;
use yul_ir::{
    Assignment, Block, Expression, ExpressionStatement, FunctionCall, FunctionDefinition,
    Identifier, Statement, TypedName,
};

/// Split `original` according to the usage masks.
///
/// The returned function carries `original`'s body and the kept slots; the caller
/// inserts it into the program next to `original`. `original` is rewritten in place into
/// a wrapper with the same number of parameters and return variables, all freshly named,
/// whose body is a single forwarding call.
///
/// Masks are looked up under the name `rename_table` gives for `original`'s current name,
/// which is also the name of the returned function. `name_source` must already treat that
/// name as used; [`crate::SplitProcessor::run`] marks every original name before splitting.
///
/// # Panics
/// Panics if the rename table has no entry for `original`, if a mask length does not match
/// its slot list, or if `original` repeats a slot name.
pub fn split_function(
    original: &mut FunctionDefinition,
    unused_parameters: &UsageMasks,
    unused_return_variables: &UsageMasks,
    name_source: &mut dyn NameSource,
    rename_table: &RenameTable,
) -> FunctionDefinition {
    assert!(
        original.has_distinct_slot_names(),
        "BUG: function `{}` repeats a parameter or return variable name",
        original.name.as_str()
    );

    let location = original.location;
    let new_name = rename_table.original_name(&original.name).clone();

    let renamed_parameters = rename_slots(&original.parameters, name_source);
    let renamed_return_variables = rename_slots(&original.return_variables, name_source);

    let (parameters, reduced_renamed_parameters) = reduce_slots(
        &original.parameters,
        &renamed_parameters,
        unused_parameters.get(&new_name),
    );
    let (return_variables, reduced_renamed_return_variables) = reduce_slots(
        &original.return_variables,
        &renamed_return_variables,
        unused_return_variables.get(&new_name),
    );

    let mut new_function = FunctionDefinition::new(
        location,
        new_name,
        parameters,
        return_variables,
        Block::empty(location),
    );

    mem::swap(&mut new_function.body, &mut original.body);
    original.parameters = renamed_parameters;
    original.return_variables = renamed_return_variables;

    let call = Expression::FunctionCall(FunctionCall::new(
        location,
        Identifier::new(location, new_function.name.clone()),
        reduced_renamed_parameters
            .iter()
            .map(|p| Expression::Identifier(p.to_identifier(location)))
            .collect(),
    ));

    let forward = if new_function.return_variables.is_empty() {
        Statement::ExpressionStatement(ExpressionStatement {
            location,
            expression: call,
        })
    } else {
        Statement::Assignment(Assignment {
            location,
            variable_names: reduced_renamed_return_variables
                .iter()
                .map(|r| r.to_identifier(location))
                .collect(),
            value: Box::new(call),
        })
    };
    original.body.statements.push(forward);

    debug!(
        "split `{}` into `{}({})` -> ({})",
        original.name.as_str(),
        new_function.name.as_str(),
        new_function.parameters.iter().join(", "),
        new_function.return_variables.iter().join(", ")
    );

    new_function
}

/// Fresh copies of `slots`, keeping locations and types
fn rename_slots(slots: &[TypedName], name_source: &mut dyn NameSource) -> Vec<TypedName> {
    slots
        .iter()
        .map(|slot| {
            TypedName::new(slot.location, name_source.new_name(&slot.name), slot.ty.clone())
        })
        .collect()
}

/// Kept original slots and kept renamed slots, filtered with the same mask so positions
/// stay aligned
fn reduce_slots(
    slots: &[TypedName],
    renamed: &[TypedName],
    mask: Option<&Vec<bool>>,
) -> (Vec<TypedName>, Vec<TypedName>) {
    match mask {
        Some(mask) => (apply_boolean_mask(slots, mask), apply_boolean_mask(renamed, mask)),
        None => (slots.to_vec(), renamed.to_vec()),
    }
}
