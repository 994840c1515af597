// MPU6050 Step Counter — Step Detection Rule
//
// Reproduces the deployed heuristic exactly, quirks included: it only fires
// while the instantaneous axis sum is non-positive, and only on *increases*
// beyond the threshold — a negative delta of any magnitude never counts.
// Compatibility with the existing behavior is part of the contract, so do not
// "fix" the asymmetry here.

use crate::config::STEP_THRESHOLD;
use crate::store::Sample;

/// One detection pass over a `(current, previous)` sample pair.
///
/// Returns the updated crossing counter: incremented by one when the sum of
/// the current axis readings is `<= 0` and at least one axis rose by more
/// than [`STEP_THRESHOLD`], unchanged otherwise.
pub fn detect(current: Sample, previous: Sample, steps: u32) -> u32 {
    let sum = current.x as i32 + current.y as i32 + current.z as i32;
    if sum <= 0 {
        let rose = |c: i16, p: i16| (c as i32 - p as i32) > STEP_THRESHOLD;
        if rose(current.x, previous.x) || rose(current.y, previous.y) || rose(current.z, previous.z)
        {
            return steps.saturating_add(1);
        }
    }
    steps
}
