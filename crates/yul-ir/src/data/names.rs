// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Names and source locations

use codespan::Span;
use internment::ArcIntern;
use std::hash::{Hash, Hasher};

/// Interned identifier text. Cheap to clone and shareable across threads.
pub type YulName = ArcIntern<String>;

/// Byte range of a node in its source.
pub type Location = Span;

/// Intern a name.
pub fn yul_name(name: &str) -> YulName {
    ArcIntern::new(name.to_string())
}

/// Reference to a variable or function by name.
///
/// Equality and hashing look at the name only; two identifiers at different locations
/// naming the same variable are the same identifier.
#[derive(Debug, Clone)]
pub struct Identifier {
    pub location: Location,
    pub name: YulName,
}

impl Identifier {
    pub fn new(location: Location, name: YulName) -> Self {
        Self { location, name }
    }
}

impl PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Identifier {}

impl Hash for Identifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// Name paired with an optional type tag.
///
/// Used for function parameters, return variables and `let` variables. A missing type
/// stands for the default type of the dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedName {
    pub location: Location,
    pub name: YulName,
    pub ty: Option<YulName>,
}

impl TypedName {
    pub fn new(location: Location, name: YulName, ty: Option<YulName>) -> Self {
        Self { location, name, ty }
    }

    /// Untyped name at the given location
    pub fn untyped(location: Location, name: YulName) -> Self {
        Self::new(location, name, None)
    }

    /// Identifier referring to this name, placed at `location`
    pub fn to_identifier(&self, location: Location) -> Identifier {
        Identifier::new(location, self.name.clone())
    }
}
