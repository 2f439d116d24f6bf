// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Positional filtering by usage masks

use std::collections::BTreeMap;
use yul_ir::YulName;

/// Per-function usage masks, keyed by the function name the masks were computed for.
/// `true` keeps a slot, `false` marks it unused. A missing entry keeps every slot.
pub type UsageMasks = BTreeMap<YulName, Vec<bool>>;

/// Keep the items whose mask position is `true`, in their original order.
///
/// # Panics
/// Panics if the lengths differ: the analysis and the IR have drifted apart.
pub fn apply_boolean_mask<T: Clone>(items: &[T], mask: &[bool]) -> Vec<T> {
    assert_eq!(
        items.len(),
        mask.len(),
        "BUG: usage mask covers {} slots but the function has {}",
        mask.len(),
        items.len()
    );

    items
        .iter()
        .zip(mask)
        .filter(|(_, keep)| **keep)
        .map(|(item, _)| item.clone())
        .collect()
}

/// Mask selecting exactly the slots `mask` drops
pub fn invert_mask(mask: &[bool]) -> Vec<bool> {
    mask.iter().map(|keep| !keep).collect()
}

/// Whether the mask drops at least one slot
pub fn drops_any(mask: &[bool]) -> bool {
    mask.contains(&false)
}
