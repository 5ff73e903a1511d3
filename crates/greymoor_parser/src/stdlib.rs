//! Standard verbs for adventure worlds.
//!
//! World content composes these into entity action tables as defaults:
//! rooms get `look`, portable items get `look`/`take`/`drop`, players get
//! `inventory` and the speech verbs. Content overrides any of them by
//! rebinding the verb on its own table.

use greymoor_world::{Action, ActionTable, Error, Outcome, World};

/// The `look` action: describe the location (intransitive) or a specific
/// object (transitive). Visible container contents are listed.
#[must_use]
pub fn look() -> Action {
    Action::both(|world, invocation, console| {
        let target = match &invocation.direct {
            Some(direct) => direct.clone(),
            None => world
                .get(&invocation.actor)?
                .location
                .clone()
                .ok_or_else(|| Error::Nowhere(invocation.actor.clone()))?,
        };
        if target != invocation.this {
            return Ok(Outcome::Decline("What do you want to look at?".to_string()));
        }

        let entity = world.get(&invocation.this)?;
        console.write(&format!("You see the {}.", entity.short_desc));
        if let Some(state) = entity.container() {
            if state.see_inside {
                let held: Vec<String> = state
                    .contents
                    .iter()
                    .filter(|id| **id != invocation.actor)
                    .filter_map(|id| world.get(id).ok())
                    .map(|held| held.short_desc.clone())
                    .collect();
                if held.is_empty() {
                    console.write("It is empty.");
                } else {
                    console.write("Inside there is:");
                    for desc in held {
                        console.write(&desc);
                    }
                }
            }
        }
        Ok(Outcome::Handled)
    })
}

/// The `take` action: move the direct object into the actor, declining
/// when it is already carried or will not fit.
#[must_use]
pub fn take() -> Action {
    Action::transitive(|world, invocation, console| {
        let Some(direct) = invocation.direct.clone() else {
            return Ok(Outcome::Decline("What do you want to take?".to_string()));
        };
        if direct != invocation.this {
            return Ok(Outcome::Decline("You can't take that.".to_string()));
        }
        let desc = world.get(&invocation.this)?.short_desc.clone();
        if world.get(&invocation.this)?.location.as_ref() == Some(&invocation.actor) {
            return Ok(Outcome::Decline(format!(
                "You are already carrying the {desc}."
            )));
        }
        match world.move_to(&invocation.this, &invocation.actor) {
            Ok(()) => {
                console.write(&format!("You take the {desc}."));
                Ok(Outcome::Handled)
            }
            Err(err @ Error::WouldExceedCapacity { .. }) => Ok(Outcome::Decline(err.to_string())),
            Err(err) => Err(err),
        }
    })
}

/// The `drop` action: move the direct object from the actor into the
/// actor's location.
#[must_use]
pub fn drop() -> Action {
    Action::transitive(|world, invocation, console| {
        let Some(direct) = invocation.direct.clone() else {
            return Ok(Outcome::Decline("What do you want to drop?".to_string()));
        };
        if direct != invocation.this {
            return Ok(Outcome::Decline("You can't drop that.".to_string()));
        }
        if world.get(&invocation.this)?.location.as_ref() != Some(&invocation.actor) {
            return Ok(Outcome::Decline("You aren't carrying that.".to_string()));
        }
        let destination = world
            .get(&invocation.actor)?
            .location
            .clone()
            .ok_or_else(|| Error::Nowhere(invocation.actor.clone()))?;
        let desc = world.get(&invocation.this)?.short_desc.clone();
        match world.move_to(&invocation.this, &destination) {
            Ok(()) => {
                console.write(&format!("You drop the {desc}."));
                Ok(Outcome::Handled)
            }
            Err(err @ Error::WouldExceedCapacity { .. }) => Ok(Outcome::Decline(err.to_string())),
            Err(err) => Err(err),
        }
    })
}

/// The `inventory` action: list what the actor carries. Declines when
/// the candidate is not the acting player.
#[must_use]
pub fn inventory() -> Action {
    Action::intransitive(|world, invocation, console| {
        if invocation.this != invocation.actor {
            return Ok(Outcome::Decline(
                "You can't look at another player's inventory!".to_string(),
            ));
        }
        console.write("You are carrying:");
        let carried: Vec<String> = world
            .contents_of(&invocation.actor)
            .unwrap_or(&[])
            .iter()
            .filter_map(|id| world.get(id).ok())
            .map(|held| format!("\ta {}", held.short_desc))
            .collect();
        if carried.is_empty() {
            console.write("\tnothing");
        } else {
            for line in carried {
                console.write(&line);
            }
        }
        Ok(Outcome::Handled)
    })
}

/// The speech action, bound under `say`, `shout`, `mutter`, and
/// `whisper`. Echoes the text after the verb as typed; room-wide
/// emission is the front end's concern.
#[must_use]
pub fn speech() -> Action {
    Action::both(|_world: &mut World, invocation, console| {
        if invocation.this != invocation.actor {
            return Ok(Outcome::Decline(
                "I don't quite get what you are trying to say.".to_string(),
            ));
        }
        let text = invocation.text_after_verb();
        if text.is_empty() {
            return Ok(Outcome::Decline("What do you want to say?".to_string()));
        }
        console.write(&format!("You {}: {}", invocation.verb, text));
        Ok(Outcome::Handled)
    })
}

/// Default table for players: inventory plus the speech verbs.
#[must_use]
pub fn player_actions() -> ActionTable {
    let mut table = ActionTable::new();
    table.bind("inventory", inventory());
    let speak = speech();
    table.bind_all(["say", "shout", "mutter", "whisper"], &speak);
    table
}

/// Default table for portable items: look, take, drop.
#[must_use]
pub fn portable_actions() -> ActionTable {
    let mut table = ActionTable::new();
    table.bind("look", look());
    table.bind("take", take());
    table.bind("drop", drop());
    table
}

/// Default table for rooms: look.
#[must_use]
pub fn room_actions() -> ActionTable {
    let mut table = ActionTable::new();
    table.bind("look", look());
    table
}
