//! Integration tests for the match/clear/compact/inject cycle, driven through
//! the public engine API with seeded deals.

use tui_sumstack::core::{GameSnapshot, GameState, SelectOutcome};
use tui_sumstack::types::{
    BlockId, GameMode, GameStatus, GRID_COLS, GRID_ROWS, INITIAL_ROWS, TARGET_MAX, TARGET_MIN,
};

/// Find a subset of board blocks summing exactly to the current target.
///
/// Every proper prefix of such a subset sums strictly below the target
/// (values are positive), so toggling it in order is Pending until the final
/// toggle, which matches.
fn exact_subset(state: &GameState) -> Option<Vec<BlockId>> {
    fn dfs(
        values: &[(BlockId, u32)],
        i: usize,
        remaining: u32,
        picked: &mut Vec<BlockId>,
    ) -> bool {
        if remaining == 0 {
            return true;
        }
        if i == values.len() {
            return false;
        }
        let (id, v) = values[i];
        if v <= remaining {
            picked.push(id);
            if dfs(values, i + 1, remaining - v, picked) {
                return true;
            }
            picked.pop();
        }
        dfs(values, i + 1, remaining, picked)
    }

    let values: Vec<(BlockId, u32)> = state
        .grid()
        .blocks()
        .iter()
        .map(|b| (b.id, b.value as u32))
        .collect();
    let mut picked = Vec::new();
    if dfs(&values, 0, state.target_sum(), &mut picked) {
        Some(picked)
    } else {
        None
    }
}

/// Start a game at the first seed whose deal contains an exact match.
fn seeded_game_with_match(mode: GameMode) -> (GameState, Vec<BlockId>) {
    for seed in 1..=50 {
        let mut state = GameState::new(seed);
        state.new_game(mode);
        if let Some(subset) = exact_subset(&state) {
            return (state, subset);
        }
    }
    panic!("no seed in 1..=50 deals a matchable board");
}

fn assert_columns_contiguous(snap: &GameSnapshot) {
    for col in 0..GRID_COLS {
        let mut seen_empty = false;
        for row in 0..GRID_ROWS {
            match snap.block_at(row, col) {
                Some(_) => assert!(!seen_empty, "gap below a block in column {col}"),
                None => seen_empty = true,
            }
        }
    }
}

#[test]
fn test_current_sum_tracks_toggles_exactly() {
    let mut state = GameState::new(3);
    state.new_game(GameMode::Classic);

    let blocks = state.grid().blocks().to_vec();
    let a = blocks[0];
    let b = blocks[1];
    // Two single-digit values can overshoot only if both are near 9 and the
    // target is minimal; skip that corner rather than special-case it.
    if (a.value as u32 + b.value as u32) >= state.target_sum() {
        return;
    }

    assert_eq!(state.select_block(a.id), SelectOutcome::Pending);
    assert_eq!(state.current_sum(), a.value as u32);
    assert_eq!(state.select_block(b.id), SelectOutcome::Pending);
    assert_eq!(state.current_sum(), (a.value + b.value) as u32);

    assert_eq!(state.select_block(a.id), SelectOutcome::Pending);
    assert_eq!(state.current_sum(), b.value as u32);
    assert_eq!(state.select_block(b.id), SelectOutcome::Pending);
    assert_eq!(state.current_sum(), 0);
}

#[test]
fn test_classic_match_scores_clears_and_injects() {
    let (mut state, subset) = seeded_game_with_match(GameMode::Classic);
    let target = state.target_sum();
    let initial_len = (INITIAL_ROWS as usize) * (GRID_COLS as usize);

    let (last, prefix) = subset.split_last().unwrap();
    for id in prefix {
        assert_eq!(state.select_block(*id), SelectOutcome::Pending);
    }
    let outcome = state.select_block(*last);

    let event = match outcome {
        SelectOutcome::Matched(event) => event,
        other => panic!("expected match, got {:?}", other),
    };
    assert_eq!(event.target, target);
    assert_eq!(event.blocks_cleared, subset.len() as u32);
    assert_eq!(event.score_awarded, target * subset.len() as u32);
    assert_eq!(state.score(), event.score_awarded);

    // Cleared ids are gone, selection is reset, a fresh target is rolled.
    for id in &subset {
        assert!(state.grid().get(*id).is_none());
    }
    assert!(state.selection().is_empty());
    assert!((TARGET_MIN..=TARGET_MAX).contains(&state.target_sum()));

    // Classic policy: one injected row per match.
    assert_eq!(
        state.grid().len(),
        initial_len - subset.len() + GRID_COLS as usize
    );
    for col in 0..GRID_COLS {
        assert!(state.grid().occupied(0, col));
    }

    let snap = state.snapshot();
    assert_columns_contiguous(&snap);
}

#[test]
fn test_timed_match_leaves_block_count_reduced() {
    let (mut state, subset) = seeded_game_with_match(GameMode::Timed);
    let initial_len = state.grid().len();

    for id in &subset {
        state.select_block(*id);
    }

    assert_eq!(state.status(), GameStatus::Playing);
    assert_eq!(state.grid().len(), initial_len - subset.len());
    assert_columns_contiguous(&state.snapshot());
}

#[test]
fn test_overshoot_resets_selection_and_nothing_else() {
    // Build an overshoot from an exact subset: toggle all but its last
    // member, then a non-member valued above that member.
    for seed in 1..=50 {
        let mut state = GameState::new(seed);
        state.new_game(GameMode::Timed);
        let Some(subset) = exact_subset(&state) else {
            continue;
        };
        let (last, prefix) = subset.split_last().unwrap();
        let last_value = state.grid().get(*last).unwrap().value;
        let Some(bigger) = state
            .grid()
            .blocks()
            .iter()
            .find(|b| !subset.contains(&b.id) && b.value > last_value)
            .map(|b| b.id)
        else {
            continue;
        };

        for id in prefix {
            assert_eq!(state.select_block(*id), SelectOutcome::Pending);
        }
        let target = state.target_sum();
        let len = state.grid().len();
        assert_eq!(state.select_block(bigger), SelectOutcome::Overshoot);

        assert!(state.selection().is_empty());
        assert_eq!(state.current_sum(), 0);
        assert_eq!(state.score(), 0);
        // Overshoot rolls nothing and removes nothing.
        assert_eq!(state.target_sum(), target);
        assert_eq!(state.grid().len(), len);
        return;
    }
    panic!("no seed in 1..=50 admits an overshoot construction");
}

#[test]
fn test_cleared_ids_stay_stale() {
    let (mut state, subset) = seeded_game_with_match(GameMode::Timed);
    for id in &subset {
        state.select_block(*id);
    }

    for id in &subset {
        assert_eq!(state.select_block(*id), SelectOutcome::Ignored);
    }
    assert!(state.selection().is_empty());
    assert_eq!(state.current_sum(), 0);
}

#[test]
fn test_abandon_and_restart_gives_fresh_run() {
    let mut state = GameState::new(9);
    state.new_game(GameMode::Classic);
    let id = state.grid().blocks()[0].id;
    state.select_block(id);

    state.abandon();
    assert_eq!(state.status(), GameStatus::Menu);

    state.new_game(GameMode::Timed);
    assert_eq!(state.status(), GameStatus::Playing);
    assert_eq!(state.score(), 0);
    assert!(state.selection().is_empty());
    assert_eq!(
        state.grid().len(),
        (INITIAL_ROWS as usize) * (GRID_COLS as usize)
    );
}
