// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Check that slots dropped by a split are really dead
//!
//! The splitter trusts its masks. If the analysis marked a slot unused while the body
//! still reads or assigns it, the split-off function would mention a name it no longer
//! declares. This check turns that silent miscompilation into an abort.

use crate::mask::{apply_boolean_mask, invert_mask, UsageMasks};
use crate::rename::RenameTable;
use itertools::Itertools;
use yul_ir::{FunctionDefinition, YulName};

/// Names of the parameters and return variables of `original` that splitting it with
/// these masks will drop. Must be called before the split.
pub fn dropped_slot_names(
    original: &FunctionDefinition,
    unused_parameters: &UsageMasks,
    unused_return_variables: &UsageMasks,
    rename_table: &RenameTable,
) -> Vec<YulName> {
    let target = rename_table.original_name(&original.name);
    let mut dropped = Vec::new();
    if let Some(mask) = unused_parameters.get(target) {
        dropped.extend(
            apply_boolean_mask(&original.parameters, &invert_mask(mask))
                .into_iter()
                .map(|p| p.name),
        );
    }
    if let Some(mask) = unused_return_variables.get(target) {
        dropped.extend(
            apply_boolean_mask(&original.return_variables, &invert_mask(mask))
                .into_iter()
                .map(|r| r.name),
        );
    }
    dropped
}

/// Abort if any of `dropped` is still referenced in the body of the split-off function.
pub fn assert_dropped_unreferenced(new_function: &FunctionDefinition, dropped: &[YulName]) {
    let referenced = new_function.body.referenced_names();
    let offending = dropped
        .iter()
        .filter(|name| referenced.contains(*name))
        .map(|name| name.as_str())
        .collect::<Vec<_>>();
    assert!(
        offending.is_empty(),
        "BUG: split of `{}` dropped slots still referenced in its body: {}",
        new_function.name.as_str(),
        offending.iter().join(", ")
    );
}
