// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Yul-like rendering of the IR
//!
//! Nested blocks are indented by four spaces; an empty block renders as `{ }`.

use crate::{
    Block, Expression, FunctionDefinition, Identifier, Literal, LiteralKind, Statement,
    TypedName,
};
use itertools::Itertools;
use std::fmt::{self, Display, Formatter};

const INDENT: &str = "    ";

fn write_indent(f: &mut Formatter<'_>, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        f.write_str(INDENT)?;
    }
    Ok(())
}

fn write_block(f: &mut Formatter<'_>, block: &Block, depth: usize) -> fmt::Result {
    if block.statements.is_empty() {
        return f.write_str("{ }");
    }
    f.write_str("{\n")?;
    for statement in &block.statements {
        write_indent(f, depth + 1)?;
        write_statement(f, statement, depth + 1)?;
        f.write_str("\n")?;
    }
    write_indent(f, depth)?;
    f.write_str("}")
}

fn write_function(f: &mut Formatter<'_>, function: &FunctionDefinition, depth: usize) -> fmt::Result {
    write!(
        f,
        "function {}({})",
        function.name.as_str(),
        function.parameters.iter().join(", ")
    )?;
    if !function.return_variables.is_empty() {
        write!(f, " -> {}", function.return_variables.iter().join(", "))?;
    }
    f.write_str(" ")?;
    write_block(f, &function.body, depth)
}

fn write_statement(f: &mut Formatter<'_>, statement: &Statement, depth: usize) -> fmt::Result {
    match statement {
        Statement::ExpressionStatement(s) => write!(f, "{}", s.expression),
        Statement::Assignment(s) => {
            write!(f, "{} := {}", s.variable_names.iter().join(", "), s.value)
        }
        Statement::VariableDeclaration(s) => {
            write!(f, "let {}", s.variables.iter().join(", "))?;
            if let Some(value) = &s.value {
                write!(f, " := {}", value)?;
            }
            Ok(())
        }
        Statement::If(s) => {
            write!(f, "if {} ", s.condition)?;
            write_block(f, &s.body, depth)
        }
        Statement::Switch(s) => {
            write!(f, "switch {}", s.expression)?;
            for case in &s.cases {
                f.write_str("\n")?;
                write_indent(f, depth)?;
                match &case.value {
                    Some(value) => write!(f, "case {} ", value)?,
                    None => f.write_str("default ")?,
                }
                write_block(f, &case.body, depth)?;
            }
            Ok(())
        }
        Statement::ForLoop(s) => {
            f.write_str("for ")?;
            write_block(f, &s.pre, depth)?;
            write!(f, " {} ", s.condition)?;
            write_block(f, &s.post, depth)?;
            f.write_str(" ")?;
            write_block(f, &s.body, depth)
        }
        Statement::Break(_) => f.write_str("break"),
        Statement::Continue(_) => f.write_str("continue"),
        Statement::Leave(_) => f.write_str("leave"),
        Statement::FunctionDefinition(function) => write_function(f, function, depth),
        Statement::Block(block) => write_block(f, block, depth),
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name.as_str())
    }
}

impl Display for TypedName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name.as_str())?;
        if let Some(ty) = &self.ty {
            write!(f, ":{}", ty.as_str())?;
        }
        Ok(())
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.kind {
            LiteralKind::String => write!(f, "\"{}\"", self.value.as_str())?,
            LiteralKind::Number | LiteralKind::Boolean => f.write_str(self.value.as_str())?,
        }
        if let Some(ty) = &self.ty {
            write!(f, ":{}", ty.as_str())?;
        }
        Ok(())
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(identifier) => write!(f, "{}", identifier),
            Expression::Literal(literal) => write!(f, "{}", literal),
            Expression::FunctionCall(call) => write!(
                f,
                "{}({})",
                call.function_name,
                call.arguments.iter().join(", ")
            ),
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_statement(f, self, 0)
    }
}

impl Display for Block {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_block(f, self, 0)
    }
}

impl Display for FunctionDefinition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_function(f, self, 0)
    }
}
