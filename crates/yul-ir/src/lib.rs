// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Yul IR
//!
//! Function-tree intermediate representation consumed by the optimizer passes in
//! `yul-optimizer`. Parsing and full pretty-printing live elsewhere; this crate only
//! holds the data model, read-only traversal helpers, the builtin registry of the
//! target dialect and a `Display` rendering used for logging and tests.

mod data;
mod display;

// Names and locations (from data/names.rs)
pub use data::names::{yul_name, Identifier, Location, TypedName, YulName};

// Expression definitions (from data/expressions.rs)
pub use data::expressions::{Expression, FunctionCall, Literal, LiteralKind};

// Statement definitions (from data/statements.rs)
pub use data::statements::{
    Assignment, Block, Case, ExpressionIter, ExpressionStatement, ForLoop, If, Statement,
    StatementIter, Switch, VariableDeclaration,
};

// Function definitions (from data/functions.rs)
pub use data::functions::FunctionDefinition;

// Builtin registry (from data/dialect.rs)
pub use data::dialect::{BuiltinDialect, Dialect};
