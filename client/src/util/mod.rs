//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser APIs from page and component logic so the
//! board state machine stays testable natively.

pub mod intersection;
