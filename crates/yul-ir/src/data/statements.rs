// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

use crate::data::expressions::{Expression, Literal};
use crate::data::functions::FunctionDefinition;
use crate::data::names::{Identifier, Location, TypedName, YulName};
use std::collections::BTreeSet;

/// Ordered sequence of statements, executed in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub location: Location,
    pub statements: Vec<Statement>,
}

/// Expression evaluated for its side effects; any results are discarded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionStatement {
    pub location: Location,
    pub expression: Expression,
}

/// `a, b := value` binding the results of `value` to existing variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub location: Location,
    pub variable_names: Vec<Identifier>,
    pub value: Box<Expression>,
}

/// `let a, b := value`, or `let a` for a zero-initialised variable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDeclaration {
    pub location: Location,
    pub variables: Vec<TypedName>,
    pub value: Option<Box<Expression>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct If {
    pub location: Location,
    pub condition: Box<Expression>,
    pub body: Block,
}

/// One arm of a switch. A missing value marks the `default` arm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
    pub location: Location,
    pub value: Option<Literal>,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Switch {
    pub location: Location,
    pub expression: Box<Expression>,
    pub cases: Vec<Case>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForLoop {
    pub location: Location,
    pub pre: Block,
    pub condition: Box<Expression>,
    pub post: Block,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    ExpressionStatement(ExpressionStatement),
    Assignment(Assignment),
    VariableDeclaration(VariableDeclaration),
    If(If),
    Switch(Switch),
    ForLoop(ForLoop),
    Break(Location),
    Continue(Location),
    /// Early exit from the enclosing function
    Leave(Location),
    FunctionDefinition(FunctionDefinition),
    Block(Block),
}

impl Block {
    pub fn new(location: Location, statements: Vec<Statement>) -> Self {
        Self {
            location,
            statements,
        }
    }

    /// Block without statements
    pub fn empty(location: Location) -> Self {
        Self::new(location, Vec::new())
    }

    /// Iterate over all statements in the block, depth-first, including the statements of
    /// nested blocks and nested function bodies
    pub fn iter(&self) -> StatementIter<'_> {
        StatementIter {
            stack: self.statements.iter().rev().collect(),
        }
    }

    /// Iterate over every expression in the block, including call arguments
    pub fn iter_expressions(&self) -> ExpressionIter<'_> {
        ExpressionIter {
            stmt_iter: self.iter(),
            expressions: Vec::new(),
        }
    }

    /// Names read, assigned or called anywhere in the block
    pub fn referenced_names(&self) -> BTreeSet<YulName> {
        let mut names: BTreeSet<YulName> = self
            .iter_expressions()
            .filter_map(|expr| match expr {
                Expression::Identifier(identifier) => Some(identifier.name.clone()),
                Expression::FunctionCall(call) => Some(call.function_name.name.clone()),
                Expression::Literal(_) => None,
            })
            .collect();
        for statement in self.iter() {
            if let Statement::Assignment(assignment) = statement {
                names.extend(assignment.variable_names.iter().map(|v| v.name.clone()));
            }
        }
        names
    }

    /// Names introduced anywhere in the block: functions, their parameters and return
    /// variables, and `let` variables
    pub fn declared_names(&self) -> BTreeSet<YulName> {
        let mut names = BTreeSet::new();
        for statement in self.iter() {
            match statement {
                Statement::FunctionDefinition(function) => {
                    names.insert(function.name.clone());
                    names.extend(function.slot_names().cloned());
                }
                Statement::VariableDeclaration(declaration) => {
                    names.extend(declaration.variables.iter().map(|v| v.name.clone()));
                }
                _ => {}
            }
        }
        names
    }
}

impl Statement {
    /// Blocks directly nested in this statement, in source order
    pub fn child_blocks(&self) -> Vec<&Block> {
        match self {
            Statement::If(s) => vec![&s.body],
            Statement::Switch(s) => s.cases.iter().map(|case| &case.body).collect(),
            Statement::ForLoop(s) => vec![&s.pre, &s.body, &s.post],
            Statement::FunctionDefinition(f) => vec![&f.body],
            Statement::Block(b) => vec![b],
            Statement::ExpressionStatement(_)
            | Statement::Assignment(_)
            | Statement::VariableDeclaration(_)
            | Statement::Break(_)
            | Statement::Continue(_)
            | Statement::Leave(_) => vec![],
        }
    }

    /// Expressions held directly by this statement (not by nested blocks)
    pub fn expressions(&self) -> Vec<&Expression> {
        match self {
            Statement::ExpressionStatement(s) => vec![&s.expression],
            Statement::Assignment(s) => vec![s.value.as_ref()],
            Statement::VariableDeclaration(s) => s.value.iter().map(|v| v.as_ref()).collect(),
            Statement::If(s) => vec![s.condition.as_ref()],
            Statement::Switch(s) => vec![s.expression.as_ref()],
            Statement::ForLoop(s) => vec![s.condition.as_ref()],
            Statement::Break(_)
            | Statement::Continue(_)
            | Statement::Leave(_)
            | Statement::FunctionDefinition(_)
            | Statement::Block(_) => vec![],
        }
    }
}

pub struct StatementIter<'a> {
    stack: Vec<&'a Statement>,
}

impl<'a> Iterator for StatementIter<'a> {
    type Item = &'a Statement;

    fn next(&mut self) -> Option<Self::Item> {
        let statement = self.stack.pop()?;

        for block in statement.child_blocks().into_iter().rev() {
            self.stack.extend(block.statements.iter().rev());
        }

        Some(statement)
    }
}

pub struct ExpressionIter<'a> {
    stmt_iter: StatementIter<'a>,
    expressions: Vec<&'a Expression>,
}

impl<'a> Iterator for ExpressionIter<'a> {
    type Item = &'a Expression;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(expression) = self.expressions.pop() {
                self.expressions.extend(expression.children().iter().rev());
                return Some(expression);
            }

            let stmt = self.stmt_iter.next()?;
            self.expressions.extend(stmt.expressions().into_iter().rev());
        }
    }
}
