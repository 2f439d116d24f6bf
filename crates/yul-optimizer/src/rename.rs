// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

use bimap::{BiBTreeMap, Overwritten};
use yul_ir::YulName;

/// Bijection between a function's current name and the name it had before splitting
/// began.
///
/// The pipeline may rename a function before it reaches the splitter; usage masks stay
/// keyed by the name before renaming, which is also the name the split-off function
/// takes.
#[derive(Debug, Clone)]
pub struct RenameTable {
    names: BiBTreeMap<YulName, YulName>,
}

impl Default for RenameTable {
    fn default() -> Self {
        Self::new()
    }
}

impl RenameTable {
    pub fn new() -> Self {
        Self {
            names: BiBTreeMap::new(),
        }
    }

    /// Table mapping every name to itself
    pub fn identity<I: IntoIterator<Item = YulName>>(names: I) -> Self {
        let mut table = Self::new();
        for name in names {
            table.insert(name.clone(), name);
        }
        table
    }

    /// Record that the function now called `current` was called `original`. Recording the
    /// same pair twice is allowed.
    ///
    /// # Panics
    /// Panics if either name is already mapped to a different name; renames are
    /// one-to-one.
    pub fn insert(&mut self, current: YulName, original: YulName) {
        let overwritten = self.names.insert(current.clone(), original.clone());
        let consistent = match &overwritten {
            Overwritten::Neither => true,
            Overwritten::Pair(c, o) => *c == current && *o == original,
            _ => false,
        };
        assert!(
            consistent,
            "BUG: conflicting rename table entry {:?}",
            overwritten
        );
    }

    pub fn get(&self, current: &YulName) -> Option<&YulName> {
        self.names.get_by_left(current)
    }

    /// Name before renaming of the function now called `current`
    ///
    /// # Panics
    /// Panics if `current` has no entry; every function reaching the splitter must be
    /// covered by the table.
    pub fn original_name(&self, current: &YulName) -> &YulName {
        self.get(current).unwrap_or_else(|| {
            panic!(
                "BUG: function `{}` is missing from the rename table",
                current.as_str()
            )
        })
    }

    /// Names the functions had before renaming. Split-off functions take these names.
    pub fn original_names(&self) -> impl Iterator<Item = &YulName> {
        self.names.right_values()
    }
}

impl FromIterator<(YulName, YulName)> for RenameTable {
    fn from_iter<T: IntoIterator<Item = (YulName, YulName)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (current, original) in iter {
            table.insert(current, original);
        }
        table
    }
}
