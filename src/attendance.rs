use crate::models::{AttendanceInput, AttendanceResult, Direction, EngineError, StatusTier};

/// Projects attendance against a target percentage: how many classes can
/// still be skipped (surplus) or how many future classes must all be attended
/// (deficit). Both counts come from the closed-form bound, with a fix-up
/// against the exact predicate so float rounding at the boundary can never
/// leave the count off by one.
pub fn project(input: &AttendanceInput) -> Result<AttendanceResult, EngineError> {
    let total = input.total_classes;
    let attended = input.attended_classes;
    let desired = input.desired_percentage;

    if total == 0 {
        return Err(EngineError::InvalidInput("total classes must be positive"));
    }
    if attended > total {
        return Err(EngineError::InvalidInput(
            "attended classes cannot exceed total classes",
        ));
    }
    if !desired.is_finite() || desired <= 0.0 || desired > 100.0 {
        return Err(EngineError::InvalidInput(
            "desired percentage must be in (0, 100]",
        ));
    }

    let current_percentage = attended as f64 / total as f64 * 100.0;

    if meets_target(attended, total, desired) {
        let status = if current_percentage >= 80.0 {
            StatusTier::Good
        } else {
            StatusTier::Warning
        };
        Ok(AttendanceResult {
            current_percentage,
            direction: Direction::Surplus,
            count: max_skippable(attended, total, desired),
            status,
        })
    } else {
        // Attending every remaining class moves the ratio towards 100% but
        // never reaches it, so a 100% target with any absence is a dead end.
        if desired >= 100.0 {
            return Err(EngineError::Unreachable);
        }
        Ok(AttendanceResult {
            current_percentage,
            direction: Direction::Deficit,
            count: min_to_attend(attended, total, desired),
            status: StatusTier::Danger,
        })
    }
}

/// `attended / held * 100 >= desired`, rearranged to a single multiply so the
/// comparison has one rounding site.
fn meets_target(attended: u32, held: u32, desired: f64) -> bool {
    attended as f64 * 100.0 >= desired * held as f64
}

/// Largest k with `attended / (total + k) >= desired / 100`. The ratio only
/// falls as k grows, so `k = floor(attended * 100 / desired) - total` is the
/// candidate and the fix-up walks to the true boundary from there.
fn max_skippable(attended: u32, total: u32, desired: f64) -> u32 {
    // Saturate at the largest count whose class total still fits a u32, so a
    // near-zero target cannot overflow the arithmetic below.
    let cap = (u32::MAX - total - 1) as i64;
    let candidate = (attended as f64 * 100.0 / desired).floor() as i64 - total as i64;
    let mut k = candidate.clamp(0, cap) as u32;

    while (k as i64) < cap && meets_target(attended, total + k + 1, desired) {
        k += 1;
    }
    while k > 0 && !meets_target(attended, total + k, desired) {
        k -= 1;
    }
    k
}

/// Smallest m >= 1 with `(attended + m) / (total + m) >= desired / 100`,
/// modeling full attendance of every future class. Requires desired < 100.
fn min_to_attend(attended: u32, total: u32, desired: f64) -> u32 {
    // Same saturation as the surplus side: attended <= total, so class
    // totals of total + m stay within u32 for every m up to the cap.
    let cap = (u32::MAX - total) as i64;
    let needed = (desired * total as f64 - 100.0 * attended as f64) / (100.0 - desired);
    let mut m = (needed.ceil() as i64).clamp(1, cap) as u32;

    while (m as i64) < cap && !meets_target(attended + m, total + m, desired) {
        m += 1;
    }
    while m > 1 && meets_target(attended + m - 1, total + m - 1, desired) {
        m -= 1;
    }
    m
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project_ok(total: u32, attended: u32, desired: f64) -> AttendanceResult {
        project(&AttendanceInput {
            total_classes: total,
            attended_classes: attended,
            desired_percentage: desired,
        })
        .unwrap()
    }

    #[test]
    fn surplus_scenario_matches_hand_computation() {
        let result = project_ok(60, 54, 80.0);
        assert!((result.current_percentage - 90.0).abs() < 1e-9);
        assert_eq!(result.direction, Direction::Surplus);
        assert_eq!(result.count, 7);
        assert_eq!(result.status, StatusTier::Good);
    }

    #[test]
    fn deficit_scenario_matches_hand_computation() {
        let result = project_ok(50, 35, 75.0);
        assert!((result.current_percentage - 70.0).abs() < 1e-9);
        assert_eq!(result.direction, Direction::Deficit);
        assert_eq!(result.count, 10);
        assert_eq!(result.status, StatusTier::Danger);
    }

    #[test]
    fn surplus_count_is_maximal() {
        for (total, attended, desired) in [(60, 54, 80.0), (40, 40, 75.0), (10, 9, 85.0)] {
            let result = project_ok(total, attended, desired);
            assert_eq!(result.direction, Direction::Surplus);
            let k = result.count;
            assert!(meets_target(attended, total + k, desired));
            assert!(!meets_target(attended, total + k + 1, desired));
        }
    }

    #[test]
    fn deficit_count_is_minimal() {
        for (total, attended, desired) in [(50, 35, 75.0), (45, 20, 85.0), (100, 60, 61.0)] {
            let result = project_ok(total, attended, desired);
            assert_eq!(result.direction, Direction::Deficit);
            let m = result.count;
            assert!(m >= 1);
            assert!(meets_target(attended + m, total + m, desired));
            assert!(!meets_target(attended + m - 1, total + m - 1, desired));
        }
    }

    #[test]
    fn raising_the_target_never_raises_surplus_or_lowers_deficit() {
        let (total, attended) = (80, 60);
        let mut last_surplus = u32::MAX;
        let mut last_deficit = 0u32;
        for desired in [40.0, 50.0, 60.0, 70.0, 74.9, 76.0, 85.0, 95.0, 99.0] {
            let result = project_ok(total, attended, desired);
            match result.direction {
                Direction::Surplus => {
                    assert!(result.count <= last_surplus);
                    last_surplus = result.count;
                }
                Direction::Deficit => {
                    assert!(result.count >= last_deficit);
                    last_deficit = result.count;
                }
            }
        }
    }

    #[test]
    fn perfect_attendance_terminates_past_the_old_scan_cap() {
        // 1000/1000 at a 50% target allows exactly 1000 skips; a scan capped
        // at 100 iterations would have truncated this.
        let result = project_ok(1000, 1000, 50.0);
        assert_eq!(result.direction, Direction::Surplus);
        assert_eq!(result.count, 1000);
    }

    #[test]
    fn extreme_targets_saturate_instead_of_overflowing() {
        // A near-zero target allows more skips than a u32 class total can
        // hold; the count stops at the ceiling rather than wrapping or
        // spinning through the fix-up loop.
        let result = project_ok(10, 10, 1e-7);
        assert_eq!(result.direction, Direction::Surplus);
        assert_eq!(result.count, u32::MAX - 11);

        // A target a hair under 100% needs more make-up classes than fit;
        // the deficit count saturates the same way.
        let result = project_ok(10, 5, 99.9999999);
        assert_eq!(result.direction, Direction::Deficit);
        assert_eq!(result.count, u32::MAX - 10);
    }

    #[test]
    fn full_target_with_full_attendance_allows_zero_skips() {
        let result = project_ok(30, 30, 100.0);
        assert_eq!(result.direction, Direction::Surplus);
        assert_eq!(result.count, 0);
    }

    #[test]
    fn full_target_with_any_absence_is_unreachable() {
        let err = project(&AttendanceInput {
            total_classes: 30,
            attended_classes: 29,
            desired_percentage: 100.0,
        })
        .unwrap_err();
        assert_eq!(err, EngineError::Unreachable);
    }

    #[test]
    fn status_tiers_follow_current_percentage() {
        assert_eq!(project_ok(100, 95, 80.0).status, StatusTier::Good);
        assert_eq!(project_ok(100, 85, 80.0).status, StatusTier::Good);
        assert_eq!(project_ok(100, 76, 75.0).status, StatusTier::Warning);
        assert_eq!(project_ok(100, 50, 75.0).status, StatusTier::Danger);
    }

    #[test]
    fn rejects_out_of_domain_input() {
        let invalid = [
            AttendanceInput {
                total_classes: 0,
                attended_classes: 0,
                desired_percentage: 75.0,
            },
            AttendanceInput {
                total_classes: 10,
                attended_classes: 11,
                desired_percentage: 75.0,
            },
            AttendanceInput {
                total_classes: 10,
                attended_classes: 5,
                desired_percentage: 0.0,
            },
            AttendanceInput {
                total_classes: 10,
                attended_classes: 5,
                desired_percentage: 100.5,
            },
            AttendanceInput {
                total_classes: 10,
                attended_classes: 5,
                desired_percentage: f64::NAN,
            },
        ];
        for input in invalid {
            assert!(matches!(
                project(&input),
                Err(EngineError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn exact_boundary_targets_stay_exact() {
        // 45/60 is exactly 75%; the surplus side must hold at k = 0.
        let result = project_ok(60, 45, 75.0);
        assert_eq!(result.direction, Direction::Surplus);
        assert_eq!(result.count, 0);
    }
}
