// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Builtin registry of the target dialect

use crate::data::names::{yul_name, YulName};
use once_cell::sync::Lazy;
use std::collections::BTreeSet;

/// Builtins of the EVM dialect
static EVM_BUILTINS: Lazy<BTreeSet<YulName>> = Lazy::new(|| {
    [
        "stop", "add", "sub", "mul", "div", "sdiv", "mod", "smod", "exp", "not", "lt", "gt",
        "slt", "sgt", "eq", "iszero", "and", "or", "xor", "byte", "shl", "shr", "sar",
        "addmod", "mulmod", "signextend", "keccak256", "pop", "mload", "mstore", "mstore8",
        "sload", "sstore", "tload", "tstore", "mcopy", "msize", "gas", "address", "balance",
        "selfbalance", "caller", "callvalue", "calldataload", "calldatasize", "calldatacopy",
        "codesize", "codecopy", "extcodesize", "extcodecopy", "returndatasize",
        "returndatacopy", "extcodehash", "create", "create2", "call", "callcode",
        "delegatecall", "staticcall", "return", "revert", "selfdestruct", "invalid", "log0",
        "log1", "log2", "log3", "log4", "chainid", "basefee", "blobbasefee", "blobhash",
        "origin", "gasprice", "blockhash", "coinbase", "timestamp", "number", "prevrandao",
        "gaslimit", "datasize", "dataoffset", "datacopy", "setimmutable", "loadimmutable",
        "linkersymbol", "memoryguard",
    ]
    .into_iter()
    .map(yul_name)
    .collect()
});

/// Queries the optimizer makes about the dialect a program is written in
pub trait Dialect: Send + Sync {
    /// Whether `name` is a dialect-provided primitive rather than a user-defined function
    fn is_builtin(&self, name: &YulName) -> bool;

    /// Whether `name` may not be used for a new variable or function
    fn is_reserved_identifier(&self, name: &YulName) -> bool {
        self.is_builtin(name)
    }
}

/// Dialect whose builtins are a fixed set of names
#[derive(Debug, Clone, Default)]
pub struct BuiltinDialect {
    builtins: BTreeSet<YulName>,
}

impl BuiltinDialect {
    pub fn new<I: IntoIterator<Item = YulName>>(builtins: I) -> Self {
        Self {
            builtins: builtins.into_iter().collect(),
        }
    }

    pub fn evm() -> Self {
        Self {
            builtins: EVM_BUILTINS.clone(),
        }
    }
}

impl Dialect for BuiltinDialect {
    fn is_builtin(&self, name: &YulName) -> bool {
        self.builtins.contains(name)
    }
}
