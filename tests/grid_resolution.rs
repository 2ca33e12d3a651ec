use kana_air::{Cell, DEFAULT_INTERVAL, GridSelector, KanaGrid, Vec3};

const IV: f32 = DEFAULT_INTERVAL;

fn resolve(x: f32, z: f32, yaw: f32) -> Cell {
    let grid = KanaGrid::standard();
    let sel = GridSelector::default();
    sel.resolve(&grid, Vec3::new(x, 0.0, z), yaw, Cell::CENTER).cell
}

#[test]
fn origin_resolves_to_center() {
    assert_eq!(resolve(0.0, 0.0, 0.0), Cell::new(5, 0));
    let grid = KanaGrid::standard();
    assert_eq!(grid.char_at(Cell::new(5, 0)), 'あ');
}

#[test]
fn column_sweep_maps_x_to_decreasing_columns() {
    // Cell centers: x' = k * interval selects column 5 - k.
    for k in -4i32..=5 {
        let cell = resolve(k as f32 * IV, 0.0, 0.0);
        assert_eq!(cell.col as i32, 5 - k, "x' = {k} * interval");
        assert_eq!(cell.row, 0);
    }
}

#[test]
fn column_boundary_groups_with_higher_index() {
    // A value exactly on a cell boundary rounds toward the higher column
    // (ceil semantics): interval/2 still belongs to column 5, the first
    // nudge past it drops to column 4.
    assert_eq!(resolve(IV / 2.0, 0.0, 0.0).col, 5);
    assert_eq!(resolve(IV / 2.0 + 0.0001, 0.0, 0.0).col, 4);

    // Mirrored at the next boundary over.
    assert_eq!(resolve(IV + IV / 2.0, 0.0, 0.0).col, 4);
    assert_eq!(resolve(IV + IV / 2.0 + 0.0001, 0.0, 0.0).col, 3);

    // And on the negative side.
    assert_eq!(resolve(-IV / 2.0, 0.0, 0.0).col, 6);
    assert_eq!(resolve(-IV / 2.0 + 0.0001, 0.0, 0.0).col, 5);
}

#[test]
fn row_fold() {
    // z' = 0 folds onto the shared center row regardless of column.
    assert_eq!(resolve(0.0, 0.0, 0.0).row, 0);
    assert_eq!(resolve(2.0 * IV, 0.0, 0.0), Cell::new(3, 0));

    // Negative z' walks rows 1 and 2, positive z' rows 3 and 4.
    assert_eq!(resolve(0.0, -IV, 0.0).row, 1);
    assert_eq!(resolve(0.0, -2.0 * IV, 0.0).row, 2);
    assert_eq!(resolve(0.0, IV, 0.0).row, 3);
    assert_eq!(resolve(0.0, 2.0 * IV, 0.0).row, 4);
}

#[test]
fn row_fold_matches_folded_value() {
    // Any z' whose raw row lands at or below 2 selects the same row as
    // the folded 2 - raw. raw = 2 (z' near zero) and raw = 0 (z' near
    // -2iv) both fold back into the 0..=2 range.
    let near_zero = resolve(0.0, -IV * 0.3, 0.0);
    assert_eq!(near_zero.row, 0);
    let far_negative = resolve(0.0, -1.8 * IV, 0.0);
    assert_eq!(far_negative.row, 2);
}

#[test]
fn clamping_is_idempotent_at_the_limits() {
    // Twice as far out as the clamp limit resolves like the limit itself.
    assert_eq!(resolve(10.0 * IV, 0.0, 0.0), resolve(5.0 * IV, 0.0, 0.0));
    assert_eq!(resolve(10.0 * IV, 0.0, 0.0).col, 0);

    assert_eq!(resolve(-8.0 * IV, 0.0, 0.0), resolve(-4.0 * IV, 0.0, 0.0));
    assert_eq!(resolve(-8.0 * IV, 0.0, 0.0).col, 9);

    assert_eq!(resolve(0.0, 4.0 * IV, 0.0), resolve(0.0, 2.0 * IV, 0.0));
    assert_eq!(resolve(0.0, 4.0 * IV, 0.0).row, 4);

    assert_eq!(resolve(0.0, -4.0 * IV, 0.0), resolve(0.0, -2.0 * IV, 0.0));
    assert_eq!(resolve(0.0, -4.0 * IV, 0.0).row, 2);
}

#[test]
fn clamped_offsets_are_reported() {
    let grid = KanaGrid::standard();
    let sel = GridSelector::default();
    let res = sel.resolve(&grid, Vec3::new(10.0 * IV, 0.0, -4.0 * IV), 0.0, Cell::CENTER);
    assert_eq!(res.clamped_x, 5.0 * IV);
    assert_eq!(res.clamped_z, -2.0 * IV);
}

#[test]
fn yaw_rotation_compensates_board_orientation() {
    // With the board yawed 90°, a world-space push along -z reads as +x
    // in the board frame.
    assert_eq!(resolve(0.0, -IV, 90.0).col, 4);
    assert_eq!(resolve(0.0, IV, 90.0).col, 6);
    // World +x becomes board +z.
    assert_eq!(resolve(IV, 0.0, 90.0).row, 3);

    // A 180° yaw inverts both axes.
    assert_eq!(resolve(IV, 0.0, 180.0).col, 6);
    assert_eq!(resolve(0.0, IV, 180.0).row, 1);
}

#[test]
fn y_component_is_ignored() {
    let grid = KanaGrid::standard();
    let sel = GridSelector::default();
    let flat = sel.resolve(&grid, Vec3::new(IV, 0.0, IV), 0.0, Cell::CENTER);
    let lifted = sel.resolve(&grid, Vec3::new(IV, 3.0, IV), 0.0, Cell::CENTER);
    assert_eq!(flat, lifted);
}

#[test]
fn changed_flag_tracks_characters() {
    let grid = KanaGrid::standard();
    let sel = GridSelector::default();

    // Same cell as previous: unchanged.
    let res = sel.resolve(&grid, Vec3::ZERO, 0.0, Cell::CENTER);
    assert!(!res.changed);

    // Different character: changed.
    let res = sel.resolve(&grid, Vec3::new(-IV, 0.0, 0.0), 0.0, Cell::CENTER);
    assert_eq!(res.cell, Cell::new(6, 0));
    assert!(res.changed);

    // Re-entering the previous character from elsewhere: changed relative
    // to that cell only.
    let res = sel.resolve(&grid, Vec3::ZERO, 0.0, Cell::new(6, 0));
    assert!(res.changed);
    let res = sel.resolve(&grid, Vec3::ZERO, 0.0, Cell::new(5, 0));
    assert!(!res.changed);
}

#[test]
fn custom_interval_scales_the_board() {
    let grid = KanaGrid::standard();
    let sel = GridSelector::new(0.09);
    let res = sel.resolve(&grid, Vec3::new(0.09, 0.0, 0.0), 0.0, Cell::CENTER);
    assert_eq!(res.cell, Cell::new(4, 0));
    // The old spacing's cell-width step is now inside the center cell.
    let res = sel.resolve(&grid, Vec3::new(IV, 0.0, 0.0), 0.0, Cell::CENTER);
    assert_eq!(res.cell, Cell::new(5, 0));
}
