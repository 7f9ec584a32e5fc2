//! Provider capacity check.

/// Return `true` if a provider with `active` running services may take
/// on another one under `limit`.
///
/// A zero limit never has capacity.
#[must_use]
pub const fn has_capacity(active: u32, limit: u32) -> bool {
    active < limit
}
