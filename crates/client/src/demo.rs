//! Scripted demo run: place both factions, then play random moves until the
//! game ends.

use std::io::Write;

use anyhow::{Context, Result};
use rand::Rng;
use skirmish_core::{Faction, GameSnapshot, MoveDelta, PlayerId};
use skirmish_runtime::{Session, SnapshotRepository};

use crate::config::DemoConfig;
use crate::render::render_game;

/// Sight distance given to every demo player.
const SIGHT_DISTANCE: u32 = 2;

/// Places `wolves` wolves named `a`, `b`, ... and `villagers` villagers named
/// `A`, `B`, ...
pub fn populate<R: SnapshotRepository>(
    session: &mut Session<R>,
    wolves: u32,
    villagers: u32,
) -> Result<Vec<PlayerId>> {
    let roster = pseudos(b'a', wolves)
        .map(|pseudo| (pseudo, Faction::Wolf))
        .chain(pseudos(b'A', villagers).map(|pseudo| (pseudo, Faction::Villager)));

    let mut ids = Vec::new();
    for (pseudo, faction) in roster {
        let id = session
            .place(&pseudo.to_string(), faction, SIGHT_DISTANCE)
            .with_context(|| format!("placing {faction} {pseudo}"))?;
        ids.push(id);
    }
    Ok(ids)
}

fn pseudos(first: u8, count: u32) -> impl Iterator<Item = char> {
    (0..count.min(26) as u8).map(move |offset| char::from(first + offset))
}

/// Uniform delta in `{-1, 0, 1}²`.
pub fn random_delta(rng: &mut impl Rng) -> MoveDelta {
    MoveDelta::new(rng.gen_range(-1..=1), rng.gen_range(-1..=1))
}

/// Plays a whole game and returns its final snapshot.
///
/// Every turn each living player registers a random delta; the board is
/// printed to `out` after placement and after every turn.
pub fn run<R, G, W>(
    session: &mut Session<R>,
    config: &DemoConfig,
    rng: &mut G,
    out: &mut W,
) -> Result<GameSnapshot>
where
    R: SnapshotRepository,
    G: Rng,
    W: Write,
{
    populate(session, config.wolves, config.villagers)?;
    session.start()?;
    writeln!(out, "{}", render_game(session.game()))?;

    while session.game().is_started() {
        let living: Vec<PlayerId> = session
            .game()
            .players()
            .iter()
            .filter(|player| player.is_active())
            .map(|player| player.id)
            .collect();
        for player in living {
            session.register_action(player, random_delta(rng))?;
        }

        let report = session.process_actions()?;
        let defeated = report
            .resolutions
            .iter()
            .filter(|resolution| resolution.defeated.is_some())
            .count();
        tracing::debug!(turn = report.turn, defeated, "turn finished");

        writeln!(out, "{}", render_game(session.game()))?;
    }

    let game = session.game();
    tracing::info!(
        turns = game.current_turn(),
        wolves = game.living(Faction::Wolf),
        villagers = game.living(Faction::Villager),
        "demo finished"
    );
    Ok(session.snapshot())
}
