// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

use crate::data::names::{Identifier, Location, YulName};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    Number,
    Boolean,
    String,
}

/// Constant value, kept in its source spelling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    pub location: Location,
    pub kind: LiteralKind,
    pub value: YulName,
    pub ty: Option<YulName>,
}

impl Literal {
    pub fn number(location: Location, value: YulName) -> Self {
        Self {
            location,
            kind: LiteralKind::Number,
            value,
            ty: None,
        }
    }
}

/// Call of a builtin or user-defined function
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionCall {
    pub location: Location,
    pub function_name: Identifier,
    pub arguments: Vec<Expression>,
}

impl FunctionCall {
    pub fn new(location: Location, function_name: Identifier, arguments: Vec<Expression>) -> Self {
        Self {
            location,
            function_name,
            arguments,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// Read of a variable
    Identifier(Identifier),

    Literal(Literal),

    FunctionCall(FunctionCall),
}

impl Expression {
    /// The call, if this expression is a function call at its root
    pub fn as_function_call(&self) -> Option<&FunctionCall> {
        match self {
            Expression::FunctionCall(call) => Some(call),
            Expression::Identifier(_) | Expression::Literal(_) => None,
        }
    }

    /// Direct sub-expressions (call arguments)
    pub fn children(&self) -> &[Expression] {
        match self {
            Expression::FunctionCall(call) => &call.arguments,
            Expression::Identifier(_) | Expression::Literal(_) => &[],
        }
    }
}
