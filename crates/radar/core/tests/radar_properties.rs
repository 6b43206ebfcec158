use radar_core::{
    ActionId, ActionQueue, GridMap, MapDimensions, MatchOutcome, Neighborhood, Position, Query,
    Radar, RadarDefaults, RadarEnv, ResolveError, SearchKind, VariableSlot, VariableTable, scan,
};

fn center_at(x: i32, y: i32) -> VariableTable {
    [(VariableSlot(15), x), (VariableSlot(16), y)]
        .into_iter()
        .collect()
}

#[test]
fn neighborhood_covers_the_full_square_including_center() {
    for radius in 0..=6u32 {
        for center in [Position::ORIGIN, Position::new(21, 10), Position::new(-4, 7)] {
            let cells: Vec<_> = Neighborhood::new(center, radius).collect();
            let side = 2 * radius as usize + 1;
            assert_eq!(cells.len(), side * side);
            assert!(cells.contains(&center));

            let mut unique = cells.clone();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), cells.len());

            let r = radius as i32;
            assert_eq!(cells.first(), Some(&Position::new(center.x - r, center.y - r)));
            assert_eq!(cells.last(), Some(&Position::new(center.x + r, center.y + r)));
        }
    }
}

#[test]
fn two_matches_trigger_one_action_for_the_earlier_cell() {
    let defaults = RadarDefaults::default();
    let radar = Radar::new(&defaults);
    let variables = center_at(2, 2);
    let mut map = GridMap::new(MapDimensions::new(5, 5), 1);
    map.set_event(Position::new(4, 0), 1);
    map.set_event(Position::new(0, 4), 1);
    let mut actions = ActionQueue::new();

    let outcome = radar
        .execute::<&str>(
            SearchKind::EventEquals,
            &[],
            &mut RadarEnv::new(&variables, &map, &mut actions),
        )
        .unwrap();

    assert_eq!(
        outcome,
        MatchOutcome::Match {
            position: Position::new(0, 4),
            observed: 1,
        }
    );
    assert_eq!(actions.reserved(), &[ActionId(11)]);
}

#[test]
fn explicit_center_matches_event_at_center() {
    let defaults = RadarDefaults::default();
    let radar = Radar::new(&defaults);
    let variables = center_at(21, 10);
    let mut map = GridMap::new(MapDimensions::new(30, 20), 1);
    map.set_event(Position::new(21, 10), 13);
    let mut actions = ActionQueue::new();

    let outcome = radar
        .dispatch(
            "eventIDMatch",
            &["13", "21", "10", "2"],
            &mut RadarEnv::new(&variables, &map, &mut actions),
        )
        .unwrap();

    assert_eq!(
        outcome,
        Some((
            SearchKind::EventEquals,
            MatchOutcome::Match {
                position: Position::new(21, 10),
                observed: 13,
            }
        ))
    );
    assert_eq!(actions.reserved(), &[defaults.action_for(SearchKind::EventEquals)]);
}

#[test]
fn terrain_search_without_arguments_finds_nothing() {
    let defaults = RadarDefaults::default();
    let radar = Radar::new(&defaults);
    let variables = center_at(2, 2);
    let mut map = GridMap::new(MapDimensions::new(5, 5), 1);
    for x in 0..5 {
        for y in 0..5 {
            map.set_terrain_tag(Position::new(x, y), 3);
        }
    }
    let mut actions = ActionQueue::new();

    let outcome = radar
        .dispatch::<&str>(
            "terrainTag",
            &[],
            &mut RadarEnv::new(&variables, &map, &mut actions),
        )
        .unwrap();

    assert_eq!(outcome, Some((SearchKind::TerrainTagEquals, MatchOutcome::NoMatch)));
    assert!(actions.is_empty());
}

#[test]
fn partial_coordinate_override_is_rejected() {
    let defaults = RadarDefaults::default();
    let radar = Radar::new(&defaults);
    let variables = center_at(10, 10);
    let mut map = GridMap::new(MapDimensions::new(20, 20), 1);
    map.set_event(Position::new(10, 10), 5);
    let mut actions = ActionQueue::new();

    let result = radar.dispatch(
        "eventIDMatch",
        &["5", "10", "x", "3"],
        &mut RadarEnv::new(&variables, &map, &mut actions),
    );

    assert!(matches!(result, Err(ResolveError::PartialCoordinate { .. })));
    assert!(actions.is_empty());
}

#[test]
fn kinds_never_fall_through_to_each_other() {
    let mut map = GridMap::new(MapDimensions::new(3, 3), 1);
    // Every attribute of the center cell is 5 except the one under test.
    let center = Position::new(1, 1);
    map.set_terrain_tag(center, 5);
    map.set_tile(center, 0, 5);
    map.set_region(center, 5);

    let event = Query::new(SearchKind::EventEquals, 5, center, 1);
    assert_eq!(scan(&event, &map), MatchOutcome::NoMatch);

    let greater = Query::new(SearchKind::EventGreaterThan, 4, center, 1);
    assert_eq!(scan(&greater, &map), MatchOutcome::NoMatch);

    map.set_event(center, 5);
    map.set_terrain_tag(center, 0);
    let terrain = Query::new(SearchKind::TerrainTagEquals, 5, center, 1);
    assert_eq!(scan(&terrain, &map), MatchOutcome::NoMatch);
    assert!(scan(&greater, &map).is_match());
}

#[test]
fn scanning_is_idempotent() {
    let mut map = GridMap::new(MapDimensions::new(8, 8), 2);
    map.set_tile(Position::new(5, 6), 1, 3);
    map.set_tile(Position::new(6, 5), 1, 3);
    let query = Query::new(SearchKind::TileIdEquals, 3, Position::new(5, 5), 1).with_layer(1);

    let first = scan(&query, &map);
    let second = scan(&query, &map);
    assert_eq!(first, second);
    assert_eq!(first.position(), Some(Position::new(5, 6)));
}

#[test]
fn less_than_matches_cells_without_events() {
    let defaults = RadarDefaults::default();
    let radar = Radar::new(&defaults);
    let variables = center_at(0, 0);
    let map = GridMap::new(MapDimensions::new(4, 4), 1);
    let mut actions = ActionQueue::new();

    // Default target is 1; empty cells carry event id 0. Cells left of and
    // above the origin are off the map and must be skipped.
    let outcome = radar
        .dispatch::<&str>(
            "eventIDLess",
            &[],
            &mut RadarEnv::new(&variables, &map, &mut actions),
        )
        .unwrap();

    assert_eq!(
        outcome,
        Some((
            SearchKind::EventLessThan,
            MatchOutcome::Match {
                position: Position::ORIGIN,
                observed: 0,
            }
        ))
    );
    assert_eq!(actions.reserved(), &[ActionId(13)]);
}
