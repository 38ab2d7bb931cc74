use super::types::ContactId;
use rand::Rng;

/// Lowest id handed out by [`generate_id`].
pub const MIN_GENERATED_ID: u64 = 100;
/// Upper bound (exclusive) of ids handed out by [`generate_id`].
pub const MAX_GENERATED_ID: u64 = 100_000;

/// Draws a random id in `[MIN_GENERATED_ID, MAX_GENERATED_ID)`.
///
/// There is no collision check against existing contacts: uniqueness is
/// best-effort only.
pub fn generate_id() -> ContactId {
    ContactId(rand::thread_rng().gen_range(MIN_GENERATED_ID..MAX_GENERATED_ID))
}
