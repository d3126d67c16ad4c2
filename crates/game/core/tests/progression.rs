//! End-to-end runs of the progression engine over whole category grids.

use mash_core::{
    Category, CategoryOption, CategoryStore, GameState, OptionState, Pointer, ProgressionEngine,
    StepOutcome, all_categories_complete,
};

use OptionState::{Chosen as C, Discarded as D};

/// Builds `Test {row}` categories with `Test {row} {col}` options.
fn session(sizes: &[usize]) -> GameState {
    GameState::new(CategoryStore::from_categories(sizes.iter().enumerate().map(
        |(row, size)| {
            Category::from_titles(
                format!("Test {row}"),
                (0..*size).map(|col| format!("Test {row} {col}")),
            )
        },
    )))
}

fn grid(state: &GameState) -> Vec<Vec<OptionState>> {
    state
        .categories
        .iter()
        .map(|category| category.options().iter().map(CategoryOption::state).collect())
        .collect()
}

/// Taps until `Finished`, returning every outcome.
fn play(state: &mut GameState, mash_number: u32) -> Vec<StepOutcome> {
    let mut engine = ProgressionEngine::new(state);
    engine.set_mash_number(mash_number).unwrap();

    let mut outcomes = Vec::new();
    while outcomes.last() != Some(&StepOutcome::Finished) {
        outcomes.push(engine.advance().unwrap());
        assert!(outcomes.len() < 100_000, "game did not terminate");
    }
    outcomes
}

struct Scenario {
    mash_number: u32,
    sizes: &'static [usize],
    expected: &'static [&'static [OptionState]],
}

const SCENARIOS: &[Scenario] = &[
    Scenario {
        mash_number: 2,
        sizes: &[3, 3],
        expected: &[&[D, C, D], &[C, D, D]],
    },
    Scenario {
        mash_number: 6,
        sizes: &[5, 3],
        expected: &[&[C, D, D, D, D], &[D, D, C]],
    },
];

#[test]
fn correctly_progresses_the_game_state() {
    for scenario in SCENARIOS {
        let mut state = session(scenario.sizes);
        play(&mut state, scenario.mash_number);

        let expected: Vec<Vec<OptionState>> =
            scenario.expected.iter().map(|row| row.to_vec()).collect();
        assert_eq!(
            grid(&state),
            expected,
            "mash number {} over {:?}",
            scenario.mash_number,
            scenario.sizes
        );
    }
}

#[test]
fn titles_survive_a_full_run() {
    let mut state = session(&[3, 3]);
    play(&mut state, 2);

    let category = &state.categories.as_slice()[0];
    assert_eq!(category.title(), "Test 0");
    assert_eq!(category.options()[1].title(), "Test 0 1");
    assert_eq!(category.chosen(), Some(1));
}

#[test]
fn twelve_taps_end_in_finished() {
    let mut state = session(&[3, 3]);
    let mut engine = ProgressionEngine::new(&mut state);
    engine.set_mash_number(2).unwrap();

    let outcomes: Vec<_> = (0..12).map(|_| engine.advance().unwrap()).collect();

    assert_eq!(outcomes.last(), Some(&StepOutcome::Finished));
    assert_eq!(
        outcomes.iter().filter(|o| **o == StepOutcome::Strike).count(),
        4
    );
    assert_eq!(grid(engine.state()), vec![vec![D, C, D], vec![C, D, D]]);
}

#[test]
fn every_run_terminates_with_one_winner_per_category() {
    let layouts: &[&[usize]] = &[&[1], &[2], &[4, 4, 4, 4], &[1, 2, 3], &[7, 1, 5], &[3; 6]];

    for sizes in layouts {
        for mash_number in 1..=9 {
            let mut state = session(sizes);
            play(&mut state, mash_number);

            assert!(all_categories_complete(state.categories.as_slice()));
            assert_eq!(state.progress().pointer(), None);
            assert_eq!(Pointer::as_signed(state.progress().pointer()), (-1, -1));
            for row in grid(&state) {
                assert_eq!(
                    row.iter().filter(|s| **s == C).count(),
                    1,
                    "sizes {sizes:?}, mash number {mash_number}: {row:?}"
                );
                assert!(row.iter().all(|s| *s == C || *s == D));
            }
        }
    }
}

#[test]
fn pointer_only_rests_on_waiting_cells() {
    let mut state = session(&[4, 2, 5]);
    let mut engine = ProgressionEngine::new(&mut state);
    engine.set_mash_number(3).unwrap();

    loop {
        let before = grid(engine.state());
        let report = engine.advance_with_report().unwrap();
        let Some(pointer) = report.pointer else {
            assert_eq!(report.outcome, StepOutcome::Finished);
            break;
        };
        assert_eq!(
            before[pointer.row][pointer.col],
            OptionState::Waiting,
            "landed on a resolved cell at {pointer}"
        );
        if report.outcome == StepOutcome::Step {
            assert_eq!(grid(engine.state()), before);
        }
    }
}

#[test]
fn finished_runs_are_not_mutated_by_further_taps() {
    let mut state = session(&[5, 3]);
    play(&mut state, 6);
    let resolved = state.clone();

    let mut engine = ProgressionEngine::new(&mut state);
    for _ in 0..10 {
        assert_eq!(engine.advance().unwrap(), StepOutcome::Finished);
    }
    assert_eq!(engine.state(), &resolved);
}

#[test]
fn reset_then_replay_is_deterministic() {
    let mut state = session(&[5, 3]);
    let first = play(&mut state, 6);
    let first_grid = grid(&state);

    ProgressionEngine::new(&mut state).reset();
    let second = play(&mut state, 6);

    assert_eq!(first, second);
    assert_eq!(grid(&state), first_grid);
}

#[test]
fn categories_edited_between_games_are_traversed_in_order() {
    let mut state = session(&[3]);
    let first = state.categories.as_slice()[0].id();
    state.categories.remove_option_from_category(first, 0);
    state.categories.remove_option_from_category(first, 0);
    state.categories.remove_option_from_category(first, 0);
    assert_eq!(
        state.categories.as_slice()[0].options(),
        &[CategoryOption::blank()]
    );

    let added = state
        .categories
        .add_category(Category::from_titles("Pet", ["Cat", "Dog"]))
        .id();
    state
        .categories
        .add_option_to_category(added, CategoryOption::new("Fish"));

    play(&mut state, 2);

    assert_eq!(grid(&state), vec![vec![C], vec![D, D, C]]);
}
