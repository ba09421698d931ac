//! # Narrative Text
//!
//! Turns game events into the lines printed for the players.

use crate::{GameEvent, ItemTally, PlayerResult};

/// Appends an `s` for counts above one.
pub fn pluralize(name: &str, count: u64) -> String {
    if count > 1 {
        format!("{}s", name)
    } else {
        name.to_string()
    }
}

/// The lines shown for an event, in order.
///
/// # Examples
///
/// ```
/// use treasure_hunt::{describe_event, GameEvent};
///
/// let lines = describe_event(&GameEvent::RoundEnded { remaining: 2 });
/// assert_eq!(lines, vec!["There are 2 guesses left."]);
/// ```
pub fn describe_event(event: &GameEvent) -> Vec<String> {
    match event {
        GameEvent::GameStarted { guesses, .. } => vec![format!(
            "Welcome to the treasure hunting game. You have {} {} to find as much treasure as possible.",
            guesses,
            if *guesses == 1 { "guess" } else { "guesses" }
        )],
        GameEvent::TurnStarted { player } => vec![format!("{}'s turn.", player)],
        GameEvent::MonsterEncounter { stolen, .. } => describe_theft(stolen),
        GameEvent::TreasureFound { item, .. } => vec![format!(
            "You found a {} worth {} gold coins.",
            item.name, item.value
        )],
        GameEvent::NothingFound { .. } => vec!["No treasure at this position.".to_string()],
        GameEvent::RoundEnded { remaining } => vec![format!(
            "There {} {} {} left.",
            if *remaining == 1 { "is" } else { "are" },
            remaining,
            if *remaining == 1 { "guess" } else { "guesses" }
        )],
        GameEvent::PlayerSummary {
            result,
            multiplayer,
        } => describe_result(result, *multiplayer),
    }
}

fn describe_theft(stolen: &[ItemTally]) -> Vec<String> {
    if stolen.is_empty() {
        return vec!["You landed on a monster! They don't take anything from beggars.".to_string()];
    }

    let mut lines = vec!["You landed on a monster! They took the following items:".to_string()];
    lines.extend(stolen.iter().map(|tally| {
        format!(
            "- {} {}",
            tally.count,
            pluralize(&tally.item.name, tally.count as u64)
        )
    }));
    lines
}

/// Final summary for one player.
///
/// Addresses the player as "you" in a solo game and by name otherwise.
pub fn describe_result(result: &PlayerResult, multiplayer: bool) -> Vec<String> {
    let (subject, pronoun) = if multiplayer {
        (result.name.as_str(), "They")
    } else {
        ("you", "You")
    };

    let mut headline = format!(
        "Overall, {} got {} gold coins worth of treasure.",
        subject, result.total
    );
    if !result.items.is_empty() {
        headline.push_str(&format!(" {} found the following items:", pronoun));
    }

    let mut lines = vec![headline];
    lines.extend(result.items.iter().map(|tally| {
        format!(
            "- {} {} worth {} gold coins each, and {} in total.",
            tally.count,
            pluralize(&tally.item.name, tally.count as u64),
            tally.unit_value(),
            tally.extended_value()
        )
    }));
    lines
}
