//! Records with a comparable risk-factor burden

use crate::models::HealthRecord;

/// Risk-factor count difference used when linking related records
pub const DEFAULT_NEIGHBOR_TOLERANCE: u8 = 1;

/// Records whose risk-factor count is within `tolerance` of the target's
///
/// The target itself (matched by id) is never part of the result.
#[must_use]
pub fn risk_factor_neighbors<'a>(
    records: &'a [HealthRecord],
    target: &HealthRecord,
    tolerance: u8,
) -> Vec<&'a HealthRecord> {
    records
        .iter()
        .filter(|r| r.id() != target.id())
        .filter(|r| r.risk_factor_count().abs_diff(target.risk_factor_count()) <= tolerance)
        .collect()
}
