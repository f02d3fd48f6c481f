//! Tests for the pure domain rules: rematch detection, durations, costs.

use badminton_session_web::{
    active_court_count, has_played_before, match_duration_minutes, split_cost, CourtMatch,
    HistoryRecord, PlayerId,
};
use chrono::{Duration, TimeZone, Utc};
use uuid::Uuid;

fn ids(n: usize) -> Vec<PlayerId> {
    (0..n).map(|_| Uuid::new_v4()).collect()
}

#[test]
fn rematch_detected_regardless_of_team_assignment() {
    let p = ids(4);
    let history = vec![HistoryRecord::new([p[0], p[1]], [p[2], p[3]])];

    // Same assignment
    assert!(has_played_before(&[p[0], p[1]], &[p[2], p[3]], &history));
    // Swapped assignment: B-vs-A still counts
    assert!(has_played_before(&[p[2], p[3]], &[p[0], p[1]], &history));
    // Member order within a team is irrelevant
    assert!(has_played_before(&[p[1], p[0]], &[p[3], p[2]], &history));
}

#[test]
fn rematch_symmetry_over_assignment_order() {
    let p = ids(4);
    let history = vec![HistoryRecord::new([p[0], p[2]], [p[1], p[3]])];
    let a = [p[0], p[2]];
    let b = [p[1], p[3]];
    assert_eq!(
        has_played_before(&a, &b, &history),
        has_played_before(&b, &a, &history)
    );
}

#[test]
fn different_pairing_is_not_a_rematch() {
    let p = ids(4);
    let history = vec![HistoryRecord::new([p[0], p[1]], [p[2], p[3]])];
    // Same four players, different team split
    assert!(!has_played_before(&[p[0], p[2]], &[p[1], p[3]], &history));
    assert!(!has_played_before(&[p[0], p[3]], &[p[1], p[2]], &history));
}

#[test]
fn no_history_means_no_rematch() {
    let p = ids(4);
    assert!(!has_played_before(&[p[0], p[1]], &[p[2], p[3]], &[]));
}

#[test]
fn duration_is_floored_whole_minutes() {
    let start = Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap();
    // 12m30s elapsed floors to 12, never rounds to 13
    let now = start + Duration::minutes(12) + Duration::seconds(30);
    assert_eq!(match_duration_minutes(start, now), 12);
    // 59 seconds is still 0 minutes
    assert_eq!(match_duration_minutes(start, start + Duration::seconds(59)), 0);
}

#[test]
fn split_cost_shares_sum_to_total() {
    let total = 1234.0;
    for n in 1..=10usize {
        let share = split_cost(total, n);
        let sum: f64 = (0..n).map(|_| share).sum();
        assert!((sum - total).abs() < 1e-9, "n={} sum={}", n, sum);
    }
}

#[test]
fn split_cost_with_no_players_is_zero() {
    assert_eq!(split_cost(500.0, 0), 0.0);
}

#[test]
fn active_court_count_ignores_ended_matches() {
    let p = ids(8);
    let now = Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap();
    let mut m1 = CourtMatch::new(1, [p[0], p[1]], [p[2], p[3]], now);
    let m2 = CourtMatch::new(2, [p[4], p[5]], [p[6], p[7]], now);
    assert_eq!(active_court_count(&[m1.clone(), m2.clone()]), 2);
    m1.end_time = Some(now + Duration::minutes(20));
    assert_eq!(active_court_count(&[m1, m2]), 1);
}
