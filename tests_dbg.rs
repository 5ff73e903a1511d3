use greymoor_parser::dispatch;
use greymoor_world::{
    Action, ActionTable, ContainerState, Entity, EntityId, Outcome, Transcript, World,
};

fn world_with(table: ActionTable) -> (World, EntityId) {
    let mut world = World::new();
    let hall = world.insert(Entity::new("hall", "hall").with_container(ContainerState::room()));
    let actor = world
        .spawn_in(
            Entity::new("scott", "scott").with_container(ContainerState::new(10_000, 100)),
            &hall,
        )
        .unwrap();
    world
        .spawn_in(Entity::new("lever", "lever").with_actions(table), &hall)
        .unwrap();
    (world, actor)
}

#[test]
fn dbg_pull() {
    let mut table = ActionTable::new();
    table.bind("pull", Action::transitive(|_, _, _| Ok(Outcome::Handled)));
    let (mut world, actor) = world_with(table);
    let mut out = Transcript::new();
    dispatch(&mut world, &actor, "pull", &mut out).unwrap();
    panic!("lines = {:?}", out.lines());
}
