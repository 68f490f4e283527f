//! Slot request helpers.

use gemforge_core::{
    AllocationRequest, Category, CoreGrade, CoreKind, SlotKey, SlotRequest, SlotSelection,
    TargetChoice,
};

/// A normalized slot request with registration order equal to `priority`.
pub fn slot(
    category: Category,
    kind: CoreKind,
    grade: CoreGrade,
    target_point: u32,
    priority: u32,
) -> SlotRequest {
    SlotRequest::new(
        SlotKey::new(category, kind),
        grade,
        TargetChoice {
            point: target_point,
            priority,
            registered_at: u64::from(priority),
        },
    )
}

/// Builds an allocation request holding exactly the given slots.
pub fn request_for(slots: &[SlotRequest]) -> AllocationRequest {
    slots.iter().fold(AllocationRequest::new(), |request, slot| {
        request.with_slot(
            slot.key,
            SlotSelection::new(slot.grade, slot.target_point, slot.priority, slot.registered_at),
        )
    })
}
