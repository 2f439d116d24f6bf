// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Fresh name generation
//!
//! Uniqueness is a property of the whole compilation unit, so a single name source is
//! threaded through every split. When functions are split from several threads the
//! source is shared through [`SharedNameSource`], which serializes generation.

use std::collections::BTreeSet;
use std::sync::Mutex;
use yul_ir::{yul_name, Block, Dialect, YulName};

/// Producer of names not used anywhere else in the compilation unit
pub trait NameSource {
    /// Return a fresh name derived from `hint`
    fn new_name(&mut self, hint: &YulName) -> YulName;

    /// Record a name created outside this source so it is never handed out
    fn mark_used(&mut self, name: YulName);
}

/// Name source seeded with every name of a program.
///
/// A candidate is rejected when it is already used or reserved by the dialect; rejected
/// hints get a `_<n>` suffix from a counter shared by all hints.
pub struct NameDispenser<'d> {
    dialect: &'d dyn Dialect,
    used_names: BTreeSet<YulName>,
    counter: usize,
}

impl<'d> NameDispenser<'d> {
    /// Create a dispenser that avoids every name declared or referenced in `program`, plus
    /// the `reserved` names.
    pub fn new(dialect: &'d dyn Dialect, program: &Block, reserved: BTreeSet<YulName>) -> Self {
        let mut used_names = reserved;
        used_names.extend(program.declared_names());
        used_names.extend(program.referenced_names());
        Self {
            dialect,
            used_names,
            counter: 0,
        }
    }

    pub fn is_used(&self, name: &YulName) -> bool {
        self.used_names.contains(name)
    }

    fn is_illegal(&self, name: &YulName) -> bool {
        self.dialect.is_reserved_identifier(name) || self.used_names.contains(name)
    }
}

impl NameSource for NameDispenser<'_> {
    fn new_name(&mut self, hint: &YulName) -> YulName {
        let mut name = hint.clone();
        while self.is_illegal(&name) {
            self.counter += 1;
            name = yul_name(&format!("{}_{}", hint.as_str(), self.counter));
        }
        self.used_names.insert(name.clone());
        name
    }

    fn mark_used(&mut self, name: YulName) {
        self.used_names.insert(name);
    }
}

/// Name source usable from several threads at once
pub struct SharedNameSource<N> {
    inner: Mutex<N>,
}

impl<N: NameSource> SharedNameSource<N> {
    pub fn new(source: N) -> Self {
        Self {
            inner: Mutex::new(source),
        }
    }

    pub fn into_inner(self) -> N {
        self.inner
            .into_inner()
            .expect("BUG: name source poisoned by a panicking split")
    }
}

impl<N: NameSource> NameSource for &SharedNameSource<N> {
    fn new_name(&mut self, hint: &YulName) -> YulName {
        self.inner
            .lock()
            .expect("BUG: name source poisoned by a panicking split")
            .new_name(hint)
    }

    fn mark_used(&mut self, name: YulName) {
        self.inner
            .lock()
            .expect("BUG: name source poisoned by a panicking split")
            .mark_used(name)
    }
}
