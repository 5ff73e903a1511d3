//! Scope building: which entities a command may refer to.
//!
//! Scope order matters — it is the scan order for noun resolution and the
//! baseline priority order for dispatch.

use greymoor_world::{EntityId, Error, World};

/// Enumerates the entities visible to an actor, in scan order:
///
/// 1. the actor's location itself, always;
/// 2. everything in the actor's own inventory, regardless of darkness;
/// 3. everything directly in the location, unless the location is dark;
/// 4. inline after each entity from (2) and (3): the contents of any
///    see-inside container other than the actor, one level deep only.
///
/// Darkness suppresses only the location's contents; carried items stay
/// reachable in the dark.
pub fn scope_for(world: &World, actor: &EntityId) -> Result<Vec<EntityId>, Error> {
    let location = world
        .get(actor)?
        .location
        .clone()
        .ok_or_else(|| Error::Nowhere(actor.clone()))?;
    let dark = world
        .get(&location)?
        .container()
        .is_some_and(|state| state.dark);

    let mut scope = vec![location.clone()];

    let inventory: Vec<EntityId> = world.contents_of(actor).unwrap_or(&[]).to_vec();
    for id in &inventory {
        push_with_visible_contents(world, actor, id, &mut scope);
    }

    if !dark {
        let room_contents: Vec<EntityId> = world.contents_of(&location)?.to_vec();
        for id in &room_contents {
            push_with_visible_contents(world, actor, id, &mut scope);
        }
    }

    tracing::debug!(actor = %actor, count = scope.len(), "built command scope");
    Ok(scope)
}

/// Adds an entity and, when it is a see-inside container other than the
/// actor, its direct contents.
fn push_with_visible_contents(
    world: &World,
    actor: &EntityId,
    id: &EntityId,
    scope: &mut Vec<EntityId>,
) {
    scope.push(id.clone());
    if id == actor {
        return;
    }
    let Ok(entity) = world.get(id) else {
        return;
    };
    if let Some(state) = entity.container() {
        if state.see_inside {
            scope.extend(state.contents.iter().cloned());
        }
    }
}
