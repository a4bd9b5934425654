use std::sync::atomic::{AtomicI32, Ordering};

static NEXT_ID: AtomicI32 = AtomicI32::new(1);

/// Returns a process-unique incrementing id for factory defaults.
///
/// Keeps generated emails and names unique within a test run so factories can
/// be called repeatedly without violating unique constraints.
pub fn next_id() -> i32 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}
