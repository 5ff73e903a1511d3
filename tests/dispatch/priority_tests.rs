//! Candidate priority tests.
//!
//! Every candidate here declines with its own identity, so the first
//! message written reveals who was offered the verb first.

use greymoor_parser::dispatch;
use greymoor_world::{
    Action, ActionTable, ContainerState, Entity, EntityId, Outcome, Transcript, World,
};

fn tattling(verb: &str) -> ActionTable {
    let mut table = ActionTable::new();
    table.bind(
        verb,
        Action::both(|_, invocation, _| {
            Ok(Outcome::Decline(format!("declined by {}", invocation.this)))
        }),
    );
    table
}

struct Fixture {
    world: World,
    actor: EntityId,
}

/// A hall with three rub-aware objects in scope order: statue, lamp, urn.
fn hall_of_three() -> Fixture {
    let mut world = World::new();
    let hall = world.insert(Entity::new("hall", "hall").with_container(ContainerState::room()));
    let actor = world
        .spawn_in(
            Entity::new("scott", "scott").with_container(ContainerState::new(10_000, 100)),
            &hall,
        )
        .unwrap();
    for id in ["statue", "lamp", "urn"] {
        world
            .spawn_in(Entity::new(id, id).with_actions(tattling("rub")), &hall)
            .unwrap();
    }
    Fixture { world, actor }
}

#[test]
fn scope_order_decides_without_objects() {
    let mut f = hall_of_three();
    let mut out = Transcript::new();

    dispatch(&mut f.world, &f.actor, "rub", &mut out).unwrap();
    assert_eq!(out.lines(), ["declined by statue"]);
}

#[test]
fn direct_object_is_offered_first() {
    let mut f = hall_of_three();
    let mut out = Transcript::new();

    dispatch(&mut f.world, &f.actor, "rub urn", &mut out).unwrap();
    assert_eq!(out.lines(), ["declined by urn"]);
}

#[test]
fn indirect_object_outranks_the_rest_of_scope() {
    let mut f = hall_of_three();
    let mut out = Transcript::new();

    // "cloth" matches nothing, so no direct object resolves; the urn is
    // promoted as the indirect object and goes first.
    dispatch(&mut f.world, &f.actor, "rub cloth on urn", &mut out).unwrap();
    assert_eq!(out.lines(), ["declined by urn"]);
}

#[test]
fn direct_object_outranks_indirect_object() {
    let mut f = hall_of_three();
    let mut out = Transcript::new();

    dispatch(&mut f.world, &f.actor, "rub lamp with urn", &mut out).unwrap();
    assert_eq!(out.lines(), ["declined by lamp"]);
}

#[test]
fn handling_stops_the_candidate_loop() {
    let mut f = hall_of_three();
    let mut grabby = ActionTable::new();
    grabby.bind(
        "rub",
        Action::both(|_, _, console| {
            console.write("The genie appears.");
            Ok(Outcome::Handled)
        }),
    );
    f.world.get_mut(&EntityId::new("lamp")).unwrap().actions = grabby;
    let mut out = Transcript::new();

    dispatch(&mut f.world, &f.actor, "rub lamp", &mut out).unwrap();
    assert_eq!(out.lines(), ["The genie appears."]);
}

#[test]
fn all_declines_report_the_first_message_only() {
    let mut f = hall_of_three();
    let mut out = Transcript::new();

    dispatch(&mut f.world, &f.actor, "rub", &mut out).unwrap();
    assert_eq!(out.lines().len(), 1);
}
