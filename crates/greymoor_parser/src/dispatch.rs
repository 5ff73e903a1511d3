//! Verb dispatch: candidate filtering, priority ordering, and the
//! transactional invocation loop.
//!
//! One call to [`dispatch`] takes a command line through the whole
//! pipeline — tokenize, diagram, scope, resolve, invoke — and runs to a
//! terminal state synchronously. Plurality stacks touched by the command
//! are split into one-unit replicas first and merged back or kept
//! afterwards, so a failing handler can never leave a stack partially
//! mutated.

use std::collections::BTreeMap;

use greymoor_world::{Console, EntityId, Invocation, Outcome, PendingSplit, Result, World};

use crate::diagram::{Command, diagram};
use crate::resolve::{Resolution, clarification, resolve};
use crate::scope::scope_for;
use crate::tokenize::{only_articles, tokenize};

/// The terminal status of one command-resolution cycle.
///
/// This is the whole scheduler-facing contract: the scheduler hands the
/// core one line per actor per tick and acts on the status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnStatus {
    /// The command reached a terminal state; keep scheduling this actor.
    Handled,
    /// The actor asked to leave the game. Persisting them is the front
    /// end's job.
    Quit,
}

/// Resolves and dispatches one command line for one actor.
///
/// Everything the actor should see goes through `console`; the returned
/// error is the fatal path (broken world references), not user error —
/// bad input is reported on the console and comes back as `Handled`.
pub fn dispatch(
    world: &mut World,
    actor: &EntityId,
    line: &str,
    console: &mut dyn Console,
) -> Result<TurnStatus> {
    let words = tokenize(line);
    if words.is_empty() {
        if only_articles(line) {
            console.write("Please specify more than just articles!");
        }
        return Ok(TurnStatus::Handled);
    }
    if words.len() == 1 && words[0] == "quit" {
        return Ok(TurnStatus::Quit);
    }

    let command = diagram(&words);
    let scope = scope_for(world, actor)?;

    let direct = match resolve_fragment(world, command.direct_text.as_deref(), &scope, console) {
        Fragment::Resolved(id) => id,
        Fragment::Abort => return Ok(TurnStatus::Handled),
    };
    let indirect = match resolve_fragment(world, command.indirect_text.as_deref(), &scope, console)
    {
        Fragment::Resolved(id) => id,
        Fragment::Abort => return Ok(TurnStatus::Handled),
    };

    let candidates = supporting_candidates(world, &command, &scope, direct.as_ref(), indirect.as_ref());
    if candidates.is_empty() {
        let expectation = if command.has_direct_text() {
            "transitive"
        } else {
            "intransitive"
        };
        console.write(&format!(
            "Parse error: can't find any object supporting {expectation} verb {}!",
            command.verb
        ));
        return Ok(TurnStatus::Handled);
    }
    tracing::debug!(verb = %command.verb, candidates = ?candidates, "dispatch candidates in priority order");

    enact(world, actor, &command, &words, candidates, direct, indirect, console)
}

/// Outcome of resolving one object fragment.
enum Fragment {
    /// Resolved (or absent/unmatched, which the dispatcher tolerates).
    Resolved(Option<EntityId>),
    /// Ambiguity or a hard ordinal error was reported; stop the command.
    Abort,
}

fn resolve_fragment(
    world: &World,
    text: Option<&str>,
    scope: &[EntityId],
    console: &mut dyn Console,
) -> Fragment {
    let Some(text) = text else {
        return Fragment::Resolved(None);
    };
    match resolve(world, text, scope) {
        Ok(Resolution::Found(id)) => Fragment::Resolved(Some(id)),
        Ok(Resolution::NotFound) => Fragment::Resolved(None),
        Ok(Resolution::Ambiguous(matched)) => {
            console.write(&clarification(world, text, &matched));
            Fragment::Abort
        }
        Err(err) => {
            console.write(&err.to_string());
            Fragment::Abort
        }
    }
}

/// Filters scope to verb-supporting candidates and orders them by
/// priority.
///
/// A candidate supports the verb when its table binds it and the binding
/// allows this transitivity. Priority starts from scope-scan order; the
/// resolved indirect object is promoted to the front, then the resolved
/// direct object, so the direct object ends up first, ahead of the
/// indirect object, ahead of everything else.
fn supporting_candidates(
    world: &World,
    command: &Command,
    scope: &[EntityId],
    direct: Option<&EntityId>,
    indirect: Option<&EntityId>,
) -> Vec<EntityId> {
    let has_direct_text = command.has_direct_text();
    let mut candidates: Vec<EntityId> = scope
        .iter()
        .filter(|id| {
            world.get(id).is_ok_and(|entity| {
                entity
                    .actions
                    .get(&command.verb)
                    .is_some_and(|action| action.supports(has_direct_text))
            })
        })
        .cloned()
        .collect();

    if let Some(indirect) = indirect {
        promote(&mut candidates, indirect);
    }
    if let Some(direct) = direct {
        promote(&mut candidates, direct);
    }
    candidates
}

/// Moves an entity to the front of the candidate list, if present.
fn promote(candidates: &mut Vec<EntityId>, id: &EntityId) {
    if let Some(at) = candidates.iter().position(|candidate| candidate == id) {
        let entity = candidates.remove(at);
        candidates.insert(0, entity);
    }
}

/// The transactional invocation loop.
#[allow(clippy::too_many_arguments)]
fn enact(
    world: &mut World,
    actor: &EntityId,
    command: &Command,
    words: &[String],
    candidates: Vec<EntityId>,
    direct: Option<EntityId>,
    indirect: Option<EntityId>,
    console: &mut dyn Console,
) -> Result<TurnStatus> {
    let mut first_decline: Option<String> = None;

    for candidate in candidates {
        // Fetch the binding before splitting; the replica shares it.
        let Some(action) = world.get(&candidate)?.actions.get(&command.verb).cloned() else {
            continue;
        };

        // Peel one unit off every stacked entity this invocation touches.
        // Splitting is sequential over (candidate, direct, indirect), so
        // an entity playing two roles is split exactly once.
        let mut splits: Vec<PendingSplit> = Vec::new();
        let mut replica_of: BTreeMap<EntityId, EntityId> = BTreeMap::new();
        let mut roles = vec![candidate.clone()];
        roles.extend(direct.iter().cloned());
        roles.extend(indirect.iter().cloned());
        for id in roles {
            if replica_of.contains_key(&id) {
                continue;
            }
            if world.get(&id)?.plurality > 1 {
                let split = world.split_replica(&id)?;
                replica_of.insert(id, split.replica.clone());
                splits.push(split);
            }
        }
        let substitute =
            |id: &EntityId| replica_of.get(id).cloned().unwrap_or_else(|| id.clone());

        let invocation = Invocation {
            actor: actor.clone(),
            this: substitute(&candidate),
            direct: direct.as_ref().map(&substitute),
            indirect: indirect.as_ref().map(&substitute),
            verb: command.verb.clone(),
            preposition: command.preposition.clone(),
            words: words.to_vec(),
        };

        match action.invoke(world, &invocation, console) {
            Err(failure) => {
                // Unconditional rollback: every replica merges back,
                // whatever state the handler left it in.
                for split in &splits {
                    world.merge_replica(split)?;
                }
                tracing::error!(
                    verb = %command.verb,
                    entity = %candidate,
                    error = %failure,
                    "handler failed; command aborted and splits rolled back"
                );
                console.write(
                    "An error has occurred. Please try a different action until the problem is resolved.",
                );
                return Ok(TurnStatus::Handled);
            }
            Ok(outcome) => {
                commit_splits(world, &splits)?;
                match outcome {
                    Outcome::Handled => return Ok(TurnStatus::Handled),
                    Outcome::Decline(message) => {
                        if first_decline.is_none() {
                            first_decline = Some(message);
                        }
                    }
                }
            }
        }
    }

    // Every candidate declined; report the first message recorded.
    console.write(
        first_decline
            .as_deref()
            .unwrap_or("No objects handled verb, but no error message defined!"),
    );
    Ok(TurnStatus::Handled)
}

/// Merge-or-keep for every split made for one invocation: a replica
/// still interchangeable with its stack merges back; a changed replica
/// stays registered as an independent entity.
fn commit_splits(world: &mut World, splits: &[PendingSplit]) -> Result<()> {
    for split in splits {
        let unchanged = {
            let original = world.get(&split.original)?;
            let replica = world.get(&split.replica)?;
            original.stack_equivalent(replica)
        };
        if unchanged {
            world.merge_replica(split)?;
        } else {
            world.keep_replica(split)?;
        }
    }
    Ok(())
}
