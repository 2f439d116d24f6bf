// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Splitting of functions with unused parameters or return variables
//!
//! Given usage masks computed by an external analysis, a function is split into a
//! reduced-signature function holding the original body and a wrapper that keeps the old
//! signature and forwards only the live slots. The masks, the rename table and the
//! name source come from the surrounding pipeline; nothing here decides which slots are
//! unused.

pub mod function_split;
pub mod mask;
pub mod name_dispenser;
pub mod options;
pub mod pruning;
pub mod reference_check;
pub mod rename;
pub mod split_processor;

pub use function_split::split_function;
pub use mask::{apply_boolean_mask, UsageMasks};
pub use name_dispenser::{NameDispenser, NameSource, SharedNameSource};
pub use options::SplitOptions;
pub use pruning::was_pruned;
pub use reference_check::{assert_dropped_unreferenced, dropped_slot_names};
pub use rename::RenameTable;
pub use split_processor::{SplitProcessor, SplitStats};
