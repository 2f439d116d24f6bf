// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

pub mod dialect;
pub mod expressions;
pub mod functions;
pub mod names;
pub mod statements;
