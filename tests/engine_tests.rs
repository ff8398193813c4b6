//! Rule-level tests walking whole lines of play through the engine.

use muggins::{
    apply, legal_play, parse_ends, score, total_value, End, EndKind, Layout, Tile,
};

fn ends(list: &[(u8, EndKind)]) -> Layout {
    list.iter().map(|&(s, k)| End::new(s, k)).collect()
}

#[test]
fn test_walk_of_the_reference_line() {
    // Play the five-chip line for rack 62,01,40,61,24 against `2,44,1`
    // one step at a time, checking the layout and the chips after each
    // placement.
    let layout = parse_ends("2,44,1").unwrap();
    assert_eq!(total_value(&layout), 3);

    // [4|2] on the 2: count 5, one chip.
    let play = legal_play(Tile::new(4, 2), End::new(2, EndKind::Normal)).unwrap();
    let layout = apply(&layout, &play);
    assert_eq!(
        layout,
        ends(&[
            (4, EndKind::Normal),
            (4, EndKind::Side),
            (4, EndKind::Side),
            (1, EndKind::Normal),
        ])
    );
    assert_eq!(score(&layout), 1);

    // [6|1] on the 1: count 10, two chips.
    let play = legal_play(Tile::new(6, 1), End::new(1, EndKind::Normal)).unwrap();
    let layout = apply(&layout, &play);
    assert_eq!(total_value(&layout), 10);
    assert_eq!(score(&layout), 2);

    // [4|0] into the first stub: count stays 10, two more chips.
    let play = legal_play(Tile::new(4, 0), End::new(4, EndKind::Side)).unwrap();
    let layout = apply(&layout, &play);
    assert_eq!(
        layout,
        ends(&[
            (4, EndKind::Normal),
            (0, EndKind::Normal),
            (4, EndKind::Side),
            (6, EndKind::Normal),
        ])
    );
    assert_eq!(score(&layout), 2);

    // [1|0] on the 0: count 11, nothing.
    let play = legal_play(Tile::new(1, 0), End::new(0, EndKind::Normal)).unwrap();
    let layout = apply(&layout, &play);
    assert_eq!(total_value(&layout), 11);
    assert_eq!(score(&layout), 0);
}

#[test]
fn test_double_crossing_and_consumption() {
    // Lay [6|6] across an open 6, then play onto the unattached double:
    // the double end disappears and its two stubs open up.
    let layout = ends(&[(6, EndKind::Normal), (1, EndKind::Normal)]);

    let cross = legal_play(Tile::new(6, 6), End::new(6, EndKind::Normal)).unwrap();
    let layout = apply(&layout, &cross);
    assert_eq!(layout, ends(&[(6, EndKind::Double), (1, EndKind::Normal)]));
    assert_eq!(total_value(&layout), 13);

    let onto = legal_play(Tile::new(6, 4), End::new(6, EndKind::Double)).unwrap();
    let layout = apply(&layout, &onto);
    assert_eq!(
        layout,
        ends(&[
            (4, EndKind::Normal),
            (6, EndKind::Side),
            (6, EndKind::Side),
            (1, EndKind::Normal),
        ])
    );
    assert_eq!(score(&layout), 1);
}
