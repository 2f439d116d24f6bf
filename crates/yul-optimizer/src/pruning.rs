// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Split-worthiness heuristic
//!
//! A function whose body is empty, or is a single call to a user-defined function
//! (either as an expression statement or as the value of an assignment), already
//! forwards to its callee. Dropping its unused arguments at the call sites is enough
//! there, so splitting it would be wasted work.

use yul_ir::{Assignment, Block, Dialect, Expression, ExpressionStatement, Statement};

/// Whether splitting the function with this body is unnecessary
pub fn was_pruned(body: &Block, dialect: &dyn Dialect) -> bool {
    match body.statements.as_slice() {
        [] => true,
        [Statement::Assignment(Assignment { value, .. })] => is_user_call(value, dialect),
        [Statement::ExpressionStatement(ExpressionStatement { expression, .. })] => {
            is_user_call(expression, dialect)
        }
        _ => false,
    }
}

fn is_user_call(expression: &Expression, dialect: &dyn Dialect) -> bool {
    matches!(
        expression,
        Expression::FunctionCall(call) if !dialect.is_builtin(&call.function_name.name)
    )
}
