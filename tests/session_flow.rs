//! Integration tests for the club-system session flow: players, matches, costs.

use badminton_session_web::{
    active_court_count, add_player, create_match, end_match, recalculate_split_costs,
    remove_player, CostSystem, PlayerId, Session, SessionError, Settings, SkillTier,
};
use chrono::{DateTime, Duration, TimeZone, Utc};

fn club_settings(courts: u32) -> Settings {
    Settings {
        courts,
        cost_system: CostSystem::Club,
        fixed_cost: 50.0,
        shuttle_cost: 5.0,
        total_cost: 0.0,
        hourly_rate: false,
    }
}

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 18, 0, 0).unwrap()
}

fn session_with_players(courts: u32, n: usize) -> (Session, Vec<PlayerId>) {
    let mut s = Session::with_settings(club_settings(courts));
    let ids = (0..n)
        .map(|i| add_player(&mut s, format!("P{i}"), SkillTier::Novice, t0()).unwrap())
        .collect();
    (s, ids)
}

#[test]
fn add_player_requires_configured_settings() {
    let mut s = Session::new();
    assert_eq!(
        add_player(&mut s, "A", SkillTier::Novice, t0()),
        Err(SessionError::NotConfigured)
    );
    assert!(s.players.is_empty());
}

#[test]
fn add_player_charges_club_fixed_fee() {
    let (s, _) = session_with_players(2, 1);
    assert_eq!(s.players[0].cost, 50.0);
    assert_eq!(s.players[0].games_played, 0);
    assert!(!s.players[0].is_playing);
}

#[test]
fn add_player_rejects_blank_name() {
    let mut s = Session::with_settings(club_settings(2));
    assert_eq!(
        add_player(&mut s, "   ", SkillTier::Novice, t0()),
        Err(SessionError::EmptyPlayerName)
    );
}

#[test]
fn create_match_marks_players_and_records_history() {
    let (mut s, p) = session_with_players(2, 4);
    create_match(&mut s, [p[0], p[1]], [p[2], p[3]], false, t0()).unwrap();

    assert_eq!(s.matches.len(), 1);
    assert_eq!(s.match_history.len(), 1);
    assert_eq!(s.matches[0].court, 1);
    assert!(s.matches[0].is_active());
    for id in p {
        let player = s.get_player(id).unwrap();
        assert!(player.is_playing);
        assert_eq!(player.games_played, 1);
    }
}

#[test]
fn end_match_charges_shuttles_and_frees_players() {
    // Spec'd example: courts 2, club, fixed 50, shuttle 5; 3 shuttles = +15 each.
    let (mut s, p) = session_with_players(2, 4);
    let start = t0();
    let match_id = create_match(&mut s, [p[0], p[1]], [p[2], p[3]], false, start).unwrap();
    let end = start + Duration::minutes(25);
    end_match(&mut s, match_id, 3, end).unwrap();

    let m = s.get_match(match_id).unwrap();
    assert_eq!(m.end_time, Some(end));
    assert_eq!(m.shuttles_used, 3);
    for id in p {
        let player = s.get_player(id).unwrap();
        assert_eq!(player.cost, 50.0 + 15.0);
        assert!(!player.is_playing);
        assert_eq!(player.wait_time, 0);
        assert_eq!(player.last_play_time, Some(end));
    }
}

#[test]
fn end_match_twice_is_rejected() {
    let (mut s, p) = session_with_players(2, 4);
    let match_id = create_match(&mut s, [p[0], p[1]], [p[2], p[3]], false, t0()).unwrap();
    end_match(&mut s, match_id, 2, t0() + Duration::minutes(20)).unwrap();
    assert_eq!(
        end_match(&mut s, match_id, 5, t0() + Duration::minutes(30)),
        Err(SessionError::MatchAlreadyEnded(match_id))
    );
    // First end stands
    assert_eq!(s.get_match(match_id).unwrap().shuttles_used, 2);
}

#[test]
fn match_creation_rejected_when_courts_full() {
    let (mut s, p) = session_with_players(1, 8);
    create_match(&mut s, [p[0], p[1]], [p[2], p[3]], false, t0()).unwrap();
    let before = s.clone();

    let err = create_match(&mut s, [p[4], p[5]], [p[6], p[7]], false, t0());
    assert_eq!(err, Err(SessionError::NoCourtAvailable));
    // Rejected action mutates nothing
    assert_eq!(s, before);
}

#[test]
fn ending_a_match_frees_exactly_one_court() {
    let (mut s, p) = session_with_players(2, 8);
    let m1 = create_match(&mut s, [p[0], p[1]], [p[2], p[3]], false, t0()).unwrap();
    create_match(&mut s, [p[4], p[5]], [p[6], p[7]], false, t0()).unwrap();
    assert_eq!(active_court_count(&s.matches), 2);

    end_match(&mut s, m1, 1, t0() + Duration::minutes(15)).unwrap();
    assert_eq!(active_court_count(&s.matches), 1);
}

#[test]
fn rematch_requires_confirmation() {
    let (mut s, p) = session_with_players(2, 4);
    let m1 = create_match(&mut s, [p[0], p[1]], [p[2], p[3]], false, t0()).unwrap();
    end_match(&mut s, m1, 2, t0() + Duration::minutes(20)).unwrap();

    // Same pairing with teams swapped still counts as a rematch
    assert_eq!(
        create_match(&mut s, [p[2], p[3]], [p[0], p[1]], false, t0() + Duration::minutes(21)),
        Err(SessionError::RematchNeedsConfirmation)
    );
    assert_eq!(s.matches.len(), 1);

    // Explicit confirmation goes through
    create_match(&mut s, [p[2], p[3]], [p[0], p[1]], true, t0() + Duration::minutes(21)).unwrap();
    assert_eq!(s.matches.len(), 2);
    assert_eq!(s.match_history.len(), 2);
}

#[test]
fn playing_player_cannot_join_another_match() {
    let (mut s, p) = session_with_players(2, 5);
    create_match(&mut s, [p[0], p[1]], [p[2], p[3]], false, t0()).unwrap();
    assert_eq!(
        create_match(&mut s, [p[0], p[4]], [p[2], p[3]], false, t0()),
        Err(SessionError::PlayerIsPlaying(p[0]))
    );
}

#[test]
fn duplicate_selection_is_rejected() {
    let (mut s, p) = session_with_players(2, 4);
    assert_eq!(
        create_match(&mut s, [p[0], p[1]], [p[1], p[2]], false, t0()),
        Err(SessionError::WrongNumberOfPlayers { selected: 3 })
    );
}

#[test]
fn remove_player_is_a_soft_delete() {
    let (mut s, p) = session_with_players(2, 4);
    remove_player(&mut s, p[0]).unwrap();
    assert_eq!(s.players.len(), 3);
    assert_eq!(s.deleted_players.len(), 1);
    assert_eq!(s.deleted_players[0].id, p[0]);
    // Accrued cost survives the delete
    assert_eq!(s.deleted_players[0].cost, 50.0);
}

#[test]
fn remove_playing_player_is_rejected() {
    let (mut s, p) = session_with_players(2, 4);
    create_match(&mut s, [p[0], p[1]], [p[2], p[3]], false, t0()).unwrap();
    assert_eq!(
        remove_player(&mut s, p[0]),
        Err(SessionError::PlayerIsPlaying(p[0]))
    );
    assert_eq!(s.players.len(), 4);
}

#[test]
fn split_recalculation_overwrites_costs() {
    let mut s = Session::with_settings(Settings {
        courts: 1,
        cost_system: CostSystem::Split,
        fixed_cost: 0.0,
        shuttle_cost: 0.0,
        total_cost: 600.0,
        hourly_rate: false,
    });
    for i in 0..4 {
        add_player(&mut s, format!("P{i}"), SkillTier::Strong, t0()).unwrap();
    }
    // Pretend someone already had a stale figure; recalculation overwrites it
    s.players[0].cost = 999.0;

    recalculate_split_costs(&mut s).unwrap();
    for p in &s.players {
        assert_eq!(p.cost, 150.0);
    }
}

#[test]
fn split_recalculation_rejected_in_club_mode() {
    let (mut s, _) = session_with_players(2, 4);
    assert_eq!(
        recalculate_split_costs(&mut s),
        Err(SessionError::WrongCostSystem)
    );
}
