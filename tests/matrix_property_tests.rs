use matchup_matrix::matrix::{ConflictLevel, Matrix, classify_games};
use matchup_matrix::testing_utils::TestDataBuilder;

/// For n teams the matrix always has n*(n-1)/2 cells, empty ones included.
#[test]
fn test_cell_count_formula() {
    for n in [2usize, 3, 6, 10] {
        let ids: Vec<String> = (0..n).map(|i| format!("team{i:02}")).collect();
        let id_refs: Vec<&str> = ids.iter().map(String::as_str).collect();
        let teams = TestDataBuilder::create_teams(&id_refs);

        let matrix = Matrix::build(&[], &teams);
        assert_eq!(matrix.cell_count(), n * (n - 1) / 2, "n = {n}");
    }
}

/// getCell(A,B) and getCell(B,A) return the same cell for every pair.
#[test]
fn test_cell_lookup_symmetry_across_all_pairs() {
    let ids = ["kansas", "baylor", "tcu", "osu", "isu"];
    let teams = TestDataBuilder::create_teams(&ids);
    let games = TestDataBuilder::create_round_robin(&ids, "2024-09-01");
    let matrix = Matrix::build(&games, &teams);

    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            let ab = matrix.get_cell(a, b).unwrap();
            let ba = matrix.get_cell(b, a).unwrap();
            assert_eq!(ab, ba);
        }
    }
}

/// Every game lands in exactly one cell: cell game counts sum to the
/// number of games in scope.
#[test]
fn test_each_game_in_exactly_one_cell() {
    let ids = ["kansas", "baylor", "tcu", "osu"];
    let teams = TestDataBuilder::create_teams(&ids);
    let games = TestDataBuilder::create_round_robin(&ids, "2024-09-01");
    let matrix = Matrix::build(&games, &teams);

    let total: usize = matrix.cells().map(|c| c.game_count()).sum();
    assert_eq!(total, games.len());
}

/// Building twice from the same inputs yields deep-equal matrices.
#[test]
fn test_build_is_idempotent() {
    let ids = ["kansas", "baylor", "tcu"];
    let teams = TestDataBuilder::create_teams(&ids);
    let mut games = TestDataBuilder::create_round_robin(&ids, "2024-09-01");
    games.push(TestDataBuilder::create_game_at_venue(
        "extra", "kansas", "baylor", "2024-09-01", "V1",
    ));

    let first = Matrix::build(&games, &teams);
    let second = Matrix::build(&games, &teams);

    assert_eq!(first.cell_count(), second.cell_count());
    for (a, b) in first.cells().zip(second.cells()) {
        assert_eq!(a, b);
        assert_eq!(a.conflict_level(), b.conflict_level());
    }
    assert_eq!(first.conflicts().len(), second.conflicts().len());
}

/// classify([]) is always none; classify([g]) is always single.
#[test]
fn test_classifier_base_cases() {
    assert_eq!(classify_games(&[]), ConflictLevel::None);

    let singles = [
        TestDataBuilder::create_game("g1", "kansas", "baylor", "2024-09-01"),
        TestDataBuilder::create_game_at_venue("g2", "tcu", "osu", "2024-12-31", "V9"),
        TestDataBuilder::create_game_for_sport("g3", "baylor", "tcu", "2025-01-01", "soccer"),
    ];
    for game in singles {
        assert_eq!(classify_games(std::slice::from_ref(&game)), ConflictLevel::Single);
    }
}

/// Filtering is pure: deriving a filtered matrix never mutates the source,
/// and re-deriving gives the same result.
#[test]
fn test_filtering_is_pure_and_repeatable() {
    let ids = ["kansas", "baylor", "tcu"];
    let teams = TestDataBuilder::create_teams(&ids);
    let games = vec![
        TestDataBuilder::create_game_for_sport("g1", "kansas", "baylor", "2024-09-01", "basketball"),
        TestDataBuilder::create_game_for_sport("g2", "kansas", "tcu", "2024-09-02", "volleyball"),
        TestDataBuilder::create_game_for_sport("g3", "baylor", "tcu", "2024-09-03", "basketball"),
    ];
    let matrix = Matrix::build(&games, &teams);

    let once = matrix.filter_by_sport("basketball");
    let twice = matrix.filter_by_sport("basketball");
    assert_eq!(once.games(), twice.games());
    assert_eq!(once.cell_count(), matrix.cell_count());

    // Source still holds all three games
    assert_eq!(matrix.games().len(), 3);
}

/// Chained filters compose: sport then date range narrows in both steps.
#[test]
fn test_chained_filters() {
    let ids = ["kansas", "baylor", "tcu"];
    let teams = TestDataBuilder::create_teams(&ids);
    let games = vec![
        TestDataBuilder::create_game_for_sport("g1", "kansas", "baylor", "2024-09-01", "basketball"),
        TestDataBuilder::create_game_for_sport("g2", "kansas", "tcu", "2024-09-20", "basketball"),
        TestDataBuilder::create_game_for_sport("g3", "baylor", "tcu", "2024-09-02", "volleyball"),
    ];
    let matrix = Matrix::build(&games, &teams);

    let narrowed = matrix
        .filter_by_sport("basketball")
        .filter_by_date_range(
            chrono::NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
            chrono::NaiveDate::from_ymd_opt(2024, 9, 10).unwrap(),
        )
        .unwrap();

    let ids: Vec<&str> = narrowed.games().iter().map(|g| g.id.as_str()).collect();
    assert_eq!(ids, vec!["g1"]);
}
