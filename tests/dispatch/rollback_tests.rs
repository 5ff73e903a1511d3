//! Transactional rollback tests.
//!
//! A failing handler must leave every plurality stack exactly as it was,
//! whatever the handler did to the replicas before failing.

use greymoor_parser::{TurnStatus, dispatch};
use greymoor_world::{
    Action, ActionTable, ContainerState, Entity, EntityId, Error, Outcome, Transcript, World,
};

struct Fixture {
    world: World,
    actor: EntityId,
    hall: EntityId,
}

fn fixture() -> Fixture {
    let mut world = World::new();
    let hall = world.insert(Entity::new("hall", "hall").with_container(ContainerState::room()));
    let actor = world
        .spawn_in(
            Entity::new("scott", "scott").with_container(ContainerState::new(10_000, 100)),
            &hall,
        )
        .unwrap();
    Fixture { world, actor, hall }
}

#[test]
fn failed_handler_restores_every_stack() {
    let mut f = fixture();
    let mut smashable = ActionTable::new();
    smashable.bind(
        "smash",
        Action::transitive(|world, invocation, _| {
            // Mangle the replica, then fail.
            if let Some(direct) = &invocation.direct {
                world.get_mut(direct)?.short_desc = "shattered crate".to_string();
            }
            Err(Error::handler_failed(
                invocation.verb.as_str(),
                &invocation.this,
                "the hammer broke",
            ))
        }),
    );
    let crates = f
        .world
        .spawn_in(
            Entity::new("crate", "crate")
                .with_plurality(4)
                .with_actions(smashable),
            &f.hall,
        )
        .unwrap();
    let before = f.world.len();
    let mut out = Transcript::new();

    let status = dispatch(&mut f.world, &f.actor, "smash crate", &mut out).unwrap();
    assert_eq!(status, TurnStatus::Handled);
    assert!(out.saw("An error has occurred."));

    // The stack is whole again and the mangled replica is gone.
    assert_eq!(f.world.get(&crates).unwrap().plurality, 4);
    assert_eq!(f.world.get(&crates).unwrap().short_desc, "crate");
    assert_eq!(f.world.len(), before);
}

#[test]
fn failure_rolls_back_splits_in_other_roles() {
    let mut f = fixture();
    let mut throwable = ActionTable::new();
    throwable.bind(
        "throw",
        Action::transitive(|_, invocation, _| {
            Err(Error::handler_failed(
                invocation.verb.as_str(),
                &invocation.this,
                "arm cramp",
            ))
        }),
    );
    let rocks = f
        .world
        .spawn_in(
            Entity::new("rock", "rock")
                .with_plurality(3)
                .with_actions(throwable),
            &f.hall,
        )
        .unwrap();
    let bottles = f
        .world
        .spawn_in(Entity::new("bottle", "bottle").with_plurality(5), &f.hall)
        .unwrap();
    let mut out = Transcript::new();

    dispatch(&mut f.world, &f.actor, "throw rock at bottle", &mut out).unwrap();

    assert_eq!(f.world.get(&rocks).unwrap().plurality, 3);
    assert_eq!(f.world.get(&bottles).unwrap().plurality, 5);
    let replicas: Vec<_> = f
        .world
        .ids()
        .filter(|id| id.as_str().contains('~'))
        .collect();
    assert!(replicas.is_empty());
}

#[test]
fn untouched_replicas_merge_back_after_success() {
    let mut f = fixture();
    let mut pokeable = ActionTable::new();
    pokeable.bind(
        "poke",
        Action::transitive(|_, _, console| {
            console.write("It wobbles.");
            Ok(Outcome::Handled)
        }),
    );
    let jellies = f
        .world
        .spawn_in(
            Entity::new("jelly", "jelly")
                .with_plurality(6)
                .with_actions(pokeable),
            &f.hall,
        )
        .unwrap();
    let before = f.world.len();
    let mut out = Transcript::new();

    dispatch(&mut f.world, &f.actor, "poke jelly", &mut out).unwrap();

    assert!(out.saw("It wobbles."));
    assert_eq!(f.world.get(&jellies).unwrap().plurality, 6);
    assert_eq!(f.world.len(), before);
}

#[test]
fn changed_replica_stays_as_an_independent_entity() {
    let mut f = fixture();
    let mut takeable = ActionTable::new();
    takeable.bind(
        "take",
        Action::transitive(|world, invocation, console| {
            if let Some(direct) = invocation.direct.clone() {
                world.move_to(&direct, &invocation.actor)?;
            }
            console.write("Taken.");
            Ok(Outcome::Handled)
        }),
    );
    let coins = f
        .world
        .spawn_in(
            Entity::new("coin", "coin")
                .with_size(10, 1)
                .with_plurality(10)
                .with_actions(takeable),
            &f.hall,
        )
        .unwrap();
    let mut out = Transcript::new();

    dispatch(&mut f.world, &f.actor, "take coin", &mut out).unwrap();

    // One unit moved to the actor; nine stayed behind.
    assert_eq!(f.world.get(&coins).unwrap().plurality, 9);
    let carried = f.world.contents_of(&f.actor).unwrap().to_vec();
    assert_eq!(carried.len(), 1);
    assert_eq!(f.world.get(&carried[0]).unwrap().plurality, 1);
    assert!(f.world.get(&carried[0]).unwrap().answers_to("coin"));
}

#[test]
fn declined_replica_merges_back_too() {
    let mut f = fixture();
    let mut picky = ActionTable::new();
    picky.bind(
        "eat",
        Action::transitive(|_, _, _| Ok(Outcome::Decline("It looks stale.".to_string()))),
    );
    let loaves = f
        .world
        .spawn_in(
            Entity::new("loaf", "loaf")
                .with_plurality(3)
                .with_actions(picky),
            &f.hall,
        )
        .unwrap();
    let before = f.world.len();
    let mut out = Transcript::new();

    dispatch(&mut f.world, &f.actor, "eat loaf", &mut out).unwrap();

    assert!(out.saw("It looks stale."));
    assert_eq!(f.world.get(&loaves).unwrap().plurality, 3);
    assert_eq!(f.world.len(), before);
}
