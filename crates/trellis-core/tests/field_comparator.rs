use trellis_core::field::*;
use trellis_core::mapper::IdentityMapper;

use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq)]
struct Player {
    name: &'static str,
    score: Option<i32>,
}

fn player(name: &'static str, score: Option<i32>) -> Player {
    Player { name, score }
}

fn score_field() -> ComparableField<Player, i32, i32> {
    ComparableField::new(
        FieldIdentifier::new("game", "player", "score"),
        |player: &Player| player.score,
        |player: &mut Player, value| player.score = Some(value),
        IdentityMapper::<i32>::new(),
        false,
    )
    .unwrap()
}

fn players() -> Vec<Player> {
    vec![
        player("a", Some(3)),
        player("b", None),
        player("c", Some(1)),
        player("d", Some(2)),
    ]
}

fn names(players: &[Player]) -> Vec<&'static str> {
    players.iter().map(|player| player.name).collect()
}

#[test]
fn nulls_first() {
    let comparator = score_field().comparator_nulls_first();
    let mut players = players();
    players.sort_by(|a, b| comparator.compare(a, b));

    assert_eq!(names(&players), ["b", "c", "d", "a"]);
}

#[test]
fn nulls_last() {
    let comparator = score_field().comparator_nulls_last();
    let mut players = players();
    players.sort_by(|a, b| comparator.compare(a, b));

    assert_eq!(names(&players), ["c", "d", "a", "b"]);
}

#[test]
fn null_against_non_null() {
    let field = score_field();
    let null = player("n", None);

    for value in [i32::MIN, 0, i32::MAX] {
        let non_null = player("v", Some(value));

        let first = field.comparator_nulls_first();
        assert_eq!(first.compare(&null, &non_null), Ordering::Less);
        assert_eq!(first.compare(&non_null, &null), Ordering::Greater);

        let last = field.comparator_nulls_last();
        assert_eq!(last.compare(&null, &non_null), Ordering::Greater);
        assert_eq!(last.compare(&non_null, &null), Ordering::Less);
    }
}

#[test]
fn reversed_keeps_nulls_in_place() {
    let comparator = score_field().comparator_nulls_last().reversed();
    let mut players = players();
    players.sort_by(|a, b| comparator.compare(a, b));

    assert_eq!(names(&players), ["a", "d", "c", "b"]);
    assert!(comparator.is_reversed());
    assert_eq!(comparator.null_order(), NullOrder::Last);
}

#[test]
fn reversed_natural_order_keeps_nulls_first() {
    let comparator = score_field().comparator().reversed();
    let mut players = players();
    players.sort_by(|a, b| comparator.compare(a, b));

    assert_eq!(names(&players), ["b", "a", "d", "c"]);
    assert_eq!(comparator.null_order(), NullOrder::Natural);
}

#[test]
fn natural_order_of_non_null_values() {
    let comparator = score_field().comparator();
    let mut players: Vec<_> = players()
        .into_iter()
        .filter(|player| player.score.is_some())
        .collect();
    players.sort_by(|a, b| comparator.compare(a, b));

    assert_eq!(names(&players), ["c", "d", "a"]);
}

// Two nulls compare equal. Their relative order after sorting is not part of
// the contract, so only the partition is checked.
#[test]
fn nulls_tie() {
    let comparator = score_field().comparator_nulls_first();
    let mut players = players();
    players.push(player("e", None));
    players.sort_by(|a, b| comparator.compare(a, b));

    let mut leading = names(&players[..2]);
    leading.sort();
    assert_eq!(leading, ["b", "e"]);
    assert_eq!(names(&players[2..]), ["c", "d", "a"]);
}
