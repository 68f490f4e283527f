//! Sample pools.

use gemforge_core::{Category, CoreGrade, CoreKind, Gem, SlotRequest};

use crate::gems::{chaos_gem, order_gem};
use crate::slots::slot;

/// Four order gems with willpower {3, 4, 5, 6} and core points {2, 3, 2, 4}.
pub fn small_order_pool() -> Vec<Gem> {
    vec![
        order_gem(1, 3, 2, 1),
        order_gem(2, 4, 3, 2),
        order_gem(3, 5, 2, 3),
        order_gem(4, 6, 4, 4),
    ]
}

/// Two order slots: legend (budget 12, target 14) at priority 1 and hero
/// (budget 9, target 10) at priority 2.
pub fn two_order_slots() -> Vec<SlotRequest> {
    vec![
        slot(Category::Order, CoreKind::Sun, CoreGrade::Legend, 14, 1),
        slot(Category::Order, CoreKind::Moon, CoreGrade::Hero, 10, 2),
    ]
}

/// Eight order gems that fully satisfy three relic slots at target 10.
pub fn rich_order_pool() -> Vec<Gem> {
    vec![
        order_gem(1, 4, 5, 5),
        order_gem(2, 4, 5, 4),
        order_gem(3, 5, 5, 3),
        order_gem(4, 5, 5, 2),
        order_gem(5, 3, 5, 1),
        order_gem(6, 6, 5, 1),
        order_gem(7, 3, 4, 2),
        order_gem(8, 9, 3, 5),
    ]
}

/// A mixed pool with gems of both categories.
pub fn mixed_pool() -> Vec<Gem> {
    let mut pool = rich_order_pool();
    pool.extend([
        chaos_gem(101, 4, 5, 3),
        chaos_gem(102, 5, 5, 2),
        chaos_gem(103, 3, 4, 1),
    ]);
    pool
}
