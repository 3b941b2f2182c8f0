use crate::line::{CircularLine, Line, LineError, LineKind, LineVariant, LinearLine};

use std::error::Error;
use std::str::FromStr;

fn names<'a>(stations: impl Iterator<Item = &'a crate::line::Station>) -> Vec<&'a str> {
    stations.map(|station| station.name()).collect()
}

fn red() -> Result<LinearLine, LineError> {
    let mut line = LinearLine::new("Red");
    line.add_stations(["A1", "A2", "A3", "A4", "A5", "A6"])?;
    Ok(line)
}

fn ring(count: usize) -> Result<CircularLine, LineError> {
    let mut line = CircularLine::new("Loop");
    line.add_stations((1..=count).map(|i| format!("C{i}")))?;
    Ok(line)
}

#[test_log::test]
fn linear_forward_from_first_yields_insertion_order() -> Result<(), Box<dyn Error>> {
    let line = red()?;

    assert_eq!(line.first(), Some("A1"));
    assert_eq!(line.last(), Some("A6"));
    assert_eq!(
        names(line.iter_forward("A1")?),
        vec!["A1", "A2", "A3", "A4", "A5", "A6"]
    );
    assert_eq!(names(line.stations()), names(line.iter_forward("A1")?));

    Ok(())
}

#[test_log::test]
fn linear_backward_from_last_is_exact_reverse() -> Result<(), Box<dyn Error>> {
    let line = red()?;

    assert_eq!(
        names(line.iter_backward("A6")?),
        vec!["A6", "A5", "A4", "A3", "A2", "A1"]
    );

    Ok(())
}

#[test_log::test]
fn linear_traversal_stops_at_the_ends() -> Result<(), Box<dyn Error>> {
    let line = red()?;

    assert_eq!(names(line.iter_forward("A4")?), vec!["A4", "A5", "A6"]);
    assert_eq!(names(line.iter_backward("A3")?), vec!["A3", "A2", "A1"]);
    assert_eq!(names(line.iter_forward("A6")?), vec!["A6"]);

    Ok(())
}

#[test_log::test]
fn traversal_is_restartable() -> Result<(), Box<dyn Error>> {
    let line = red()?;

    let first = names(line.iter_forward("A2")?);
    let second = names(line.iter_forward("A2")?);
    assert_eq!(first, second);

    let mut exhausted = line.iter_forward("A5")?;
    assert_eq!(exhausted.by_ref().count(), 2);
    assert!(exhausted.next().is_none());

    Ok(())
}

#[test_log::test]
fn missing_station_is_not_found() -> Result<(), Box<dyn Error>> {
    let mut line = red()?;

    assert!(!line.has_station("Z9"));
    assert_eq!(line.get("Z9"), Err(LineError::NotFound("Z9".into())));
    assert!(matches!(line.iter_forward("Z9"), Err(LineError::NotFound(_))));
    assert!(matches!(line.iter_backward("Z9"), Err(LineError::NotFound(_))));
    assert_eq!(
        line.mark_negative("Z9", true),
        Err(LineError::NotFound("Z9".into()))
    );
    assert_eq!(
        line.remove_station("Z9"),
        Err(LineError::NotFound("Z9".into()))
    );

    Ok(())
}

#[test_log::test]
fn duplicate_insert_is_rejected_and_line_unchanged() -> Result<(), Box<dyn Error>> {
    let mut linear = red()?;
    assert_eq!(
        linear.add_station("A3"),
        Err(LineError::DuplicateName("A3".into()))
    );
    assert_eq!(linear.len(), 6);
    assert_eq!(names(linear.stations()).len(), 6);

    let mut circular = ring(4)?;
    assert_eq!(
        circular.add_station("C1"),
        Err(LineError::DuplicateName("C1".into()))
    );
    assert_eq!(names(circular.stations()), vec!["C1", "C2", "C3", "C4"]);

    Ok(())
}

#[test_log::test]
fn add_stations_stops_at_first_failure() {
    let mut line = LinearLine::new("Blue");
    let result = line.add_stations(["B1", "B2", "B1", "B3"]);

    assert_eq!(result, Err(LineError::DuplicateName("B1".into())));
    assert_eq!(names(line.stations()), vec!["B1", "B2"]);
}

#[test_log::test]
fn linear_remove_relinks_neighbours_and_ends() -> Result<(), Box<dyn Error>> {
    let mut line = red()?;

    line.remove_station("A3")?;
    assert_eq!(names(line.stations()), vec!["A1", "A2", "A4", "A5", "A6"]);
    assert_eq!(
        names(line.iter_backward("A6")?),
        vec!["A6", "A5", "A4", "A2", "A1"]
    );

    line.remove_station("A1")?;
    line.remove_station("A6")?;
    assert_eq!(line.first(), Some("A2"));
    assert_eq!(line.last(), Some("A5"));
    assert_eq!(names(line.iter_backward("A5")?), vec!["A5", "A4", "A2"]);

    for name in ["A2", "A4", "A5"] {
        line.remove_station(name)?;
    }
    assert!(line.is_empty());
    assert_eq!(line.first(), None);
    assert_eq!(line.stations().count(), 0);

    Ok(())
}

#[test_log::test]
fn add_then_remove_restores_prior_order() -> Result<(), Box<dyn Error>> {
    let mut linear = red()?;
    let before = names(linear.stations())
        .into_iter()
        .map(String::from)
        .collect::<Vec<_>>();

    linear.add_station("A7")?;
    linear.remove_station("A7")?;
    assert_eq!(names(linear.stations()), before);
    assert_eq!(linear.last(), Some("A6"));

    let mut circular = ring(5)?;
    circular.add_station("CX")?;
    circular.remove_station("CX")?;
    assert_eq!(
        names(circular.iter_backward("C1")?),
        vec!["C1", "C5", "C4", "C3", "C2"]
    );

    Ok(())
}

#[test_log::test]
fn removed_slots_are_recycled() -> Result<(), Box<dyn Error>> {
    let mut line = red()?;
    let freed = line.registry().index_of("A3")?;

    line.remove_station("A3")?;
    line.add_station("A7")?;

    assert_eq!(line.registry().index_of("A7")?, freed);
    assert_eq!(
        names(line.stations()),
        vec!["A1", "A2", "A4", "A5", "A6", "A7"]
    );

    Ok(())
}

#[test_log::test]
fn circular_visits_every_station_once_from_any_start() -> Result<(), Box<dyn Error>> {
    let line = ring(6)?;
    assert_eq!(line.len(), 6);

    for start in line.stations().map(|station| station.name()) {
        let forward = names(line.iter_forward(start)?);
        let backward = names(line.iter_backward(start)?);

        assert_eq!(forward.len(), 6);
        assert_eq!(backward.len(), 6);
        assert_eq!(forward[0], start);
        assert_eq!(backward[0], start);
        assert_eq!(forward.iter().filter(|name| **name == start).count(), 1);

        let mut reversed = forward[1..].to_vec();
        reversed.reverse();
        assert_eq!(&backward[1..], reversed.as_slice());
    }

    assert_eq!(
        names(line.iter_forward("C4")?),
        vec!["C4", "C5", "C6", "C1", "C2", "C3"]
    );

    Ok(())
}

#[test_log::test]
fn circular_insert_closes_the_ring_before_head() -> Result<(), Box<dyn Error>> {
    let mut line = CircularLine::new("Loop");
    assert_eq!(line.head(), None);

    line.add_station("C1")?;
    assert_eq!(names(line.iter_forward("C1")?), vec!["C1"]);
    assert_eq!(names(line.iter_backward("C1")?), vec!["C1"]);

    line.add_stations(["C2", "C3"])?;
    assert_eq!(line.head(), Some("C1"));
    assert_eq!(names(line.iter_backward("C1")?), vec!["C1", "C3", "C2"]);

    Ok(())
}

#[test_log::test]
fn circular_remove_moves_head_and_empties() -> Result<(), Box<dyn Error>> {
    let mut line = ring(3)?;

    line.remove_station("C1")?;
    assert_eq!(line.head(), Some("C2"));
    assert_eq!(names(line.iter_forward("C3")?), vec!["C3", "C2"]);

    line.remove_station("C3")?;
    assert_eq!(names(line.iter_forward("C2")?), vec!["C2"]);
    assert_eq!(names(line.iter_backward("C2")?), vec!["C2"]);

    line.remove_station("C2")?;
    assert!(line.is_empty());
    assert_eq!(line.head(), None);
    assert_eq!(line.stations().count(), 0);

    line.add_station("C9")?;
    assert_eq!(line.head(), Some("C9"));
    assert_eq!(names(line.stations()), vec!["C9"]);

    Ok(())
}

#[test_log::test]
fn negative_flag_does_not_touch_topology() -> Result<(), Box<dyn Error>> {
    let mut line = red()?;

    line.mark_negative("A4", true)?;
    assert!(line.get("A4")?.is_negative());
    assert_eq!(line.get("A4")?.to_string(), "A4(NEG)");
    assert_eq!(names(line.stations()).len(), 6);

    line.mark_negative("A4", false)?;
    assert!(!line.get("A4")?.is_negative());
    assert_eq!(line.get("A4")?.to_string(), "A4");

    Ok(())
}

#[test_log::test]
fn variant_delegates_to_its_topology() -> Result<(), Box<dyn Error>> {
    let kind = LineKind::from_str("circular")?;
    assert_eq!(kind, LineKind::Circular);
    assert_eq!(LineKind::Linear.to_string(), "linear");

    let mut line = LineVariant::new(kind, "Loop");
    line.add_stations(["C1", "C2", "C3"])?;

    assert_eq!(line.kind(), LineKind::Circular);
    assert_eq!(line.name(), "Loop");
    assert_eq!(names(line.iter_forward("C3")?), vec!["C3", "C1", "C2"]);

    line.mark_negative("C2", true)?;
    assert!(line.get("C2")?.is_negative());

    let linear = LineVariant::from(red()?);
    assert_eq!(linear.kind(), LineKind::Linear);
    assert_eq!(names(linear.iter_backward("A2")?), vec!["A2", "A1"]);

    Ok(())
}

#[test_log::test]
fn traversal_size_hint_is_bounded_by_line_size() -> Result<(), Box<dyn Error>> {
    let line = ring(4)?;
    let traversal = line.iter_forward("C2")?;

    assert_eq!(traversal.size_hint(), (1, Some(4)));
    assert_eq!(traversal.count(), 4);

    Ok(())
}
