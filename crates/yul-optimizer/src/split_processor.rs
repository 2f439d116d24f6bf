// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Split step over a program block
//!
//! Walks the function definitions at the top level of a block (functions are expected to
//! be hoisted there), splits every function whose masks drop a slot, and inserts each
//! split-off function right after its wrapper. Computing the masks, renaming functions
//! and iterating to a fixpoint are left to the caller.

use crate::function_split::split_function;
use crate::mask::{drops_any, UsageMasks};
use crate::name_dispenser::NameSource;
use crate::options::SplitOptions;
use crate::pruning::was_pruned;
use crate::reference_check::{assert_dropped_unreferenced, dropped_slot_names};
use crate::rename::RenameTable;
use log::{debug, info};
use std::mem;
use yul_ir::{Block, Dialect, FunctionDefinition, Statement};

/// Counts of what a run did
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SplitStats {
    /// Functions split into a wrapper and a reduced function
    pub split: usize,
    /// Functions with unused slots left alone because they only forward to another call
    pub skipped_trivial: usize,
}

pub struct SplitProcessor<'a> {
    dialect: &'a dyn Dialect,
    unused_parameters: &'a UsageMasks,
    unused_return_variables: &'a UsageMasks,
    rename_table: &'a RenameTable,
    options: SplitOptions,
}

impl<'a> SplitProcessor<'a> {
    pub fn new(
        dialect: &'a dyn Dialect,
        unused_parameters: &'a UsageMasks,
        unused_return_variables: &'a UsageMasks,
        rename_table: &'a RenameTable,
    ) -> Self {
        Self {
            dialect,
            unused_parameters,
            unused_return_variables,
            rename_table,
            options: SplitOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SplitOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns a name for this processor, used in log output.
    pub fn name(&self) -> String {
        "unused_slot_split".to_string()
    }

    /// Split the eligible top-level functions of `program` in place.
    ///
    /// Split-off functions take their names from the rename table. Those names may no
    /// longer occur in `program`, so they are marked used in `name_source` first.
    pub fn run(&self, program: &mut Block, name_source: &mut dyn NameSource) -> SplitStats {
        for original in self.rename_table.original_names() {
            name_source.mark_used(original.clone());
        }

        let mut stats = SplitStats::default();
        let statements = mem::take(&mut program.statements);
        let mut processed = Vec::with_capacity(statements.len());

        for statement in statements {
            match statement {
                Statement::FunctionDefinition(function) => {
                    processed.extend(self.process(function, name_source, &mut stats))
                }
                other => processed.push(other),
            }
        }
        program.statements = processed;

        info!(
            "{}: split {} function(s), skipped {} trivial forwarder(s)",
            self.name(),
            stats.split,
            stats.skipped_trivial
        );
        stats
    }

    /// The statements replacing `function`: itself, or the wrapper followed by the
    /// split-off function.
    fn process(
        &self,
        mut function: FunctionDefinition,
        name_source: &mut dyn NameSource,
        stats: &mut SplitStats,
    ) -> Vec<Statement> {
        if !self.should_split(&function, stats) {
            return vec![Statement::FunctionDefinition(function)];
        }

        let dropped = if self.options.verify_dropped_unreferenced {
            dropped_slot_names(
                &function,
                self.unused_parameters,
                self.unused_return_variables,
                self.rename_table,
            )
        } else {
            Vec::new()
        };

        let new_function = split_function(
            &mut function,
            self.unused_parameters,
            self.unused_return_variables,
            name_source,
            self.rename_table,
        );
        assert_dropped_unreferenced(&new_function, &dropped);
        stats.split += 1;

        vec![
            Statement::FunctionDefinition(function),
            Statement::FunctionDefinition(new_function),
        ]
    }

    fn should_split(&self, function: &FunctionDefinition, stats: &mut SplitStats) -> bool {
        let Some(target) = self.rename_table.get(&function.name) else {
            return false;
        };
        let drops_slot =
            |masks: &UsageMasks| masks.get(target).is_some_and(|mask| drops_any(mask));
        if !drops_slot(self.unused_parameters) && !drops_slot(self.unused_return_variables) {
            return false;
        }
        if self.options.skip_trivial_forwarders && was_pruned(&function.body, self.dialect) {
            debug!(
                "{}: `{}` only forwards to another call, not splitting",
                self.name(),
                function.name.as_str()
            );
            stats.skipped_trivial += 1;
            return false;
        }
        true
    }
}
