//! Plays one narrated hand.
//!
//! Set `BRIDGERS_SEED` to replay a hand and `RUST_LOG` to see engine logs.

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use bridgers::{Game, GameEvent, GameOptions};

fn seed() -> Result<u64> {
    match env::var("BRIDGERS_SEED") {
        Ok(value) => value
            .trim()
            .parse()
            .with_context(|| format!("Invalid BRIDGERS_SEED: {value}")),
        Err(_) => Ok(SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()),
    }
}

fn narration(event: &GameEvent) -> Option<String> {
    let line = match *event {
        GameEvent::DealerChosen { dealer } => {
            format!("{dealer} will shuffle and deal the cards.\n\n\n")
        }
        GameEvent::CardTaken { seat, card } => format!("{seat} has taken {card}"),
        GameEvent::TrickStarted { number, leader } => {
            format!("\n\nTrick {number}: {leader} leads...\n\n")
        }
        GameEvent::CardLed { seat, card } => format!("{seat} has led with {card}"),
        GameEvent::CardPlayed { seat, card } => format!("{seat} has played {card}"),
        GameEvent::TrickWon { winner, card, .. } => {
            format!("\n\n\n{winner} won the trick with the {card}")
        }
        GameEvent::HandFinished => return None,
    };
    Some(line)
}

fn narrate(event: &GameEvent) {
    if let Some(line) = narration(event) {
        println!("{line}");
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let seed = seed()?;
    log::info!("Playing hand with seed {seed}");

    let mut game = Game::new(GameOptions::default(), seed);
    game.play_hand(&mut narrate)
        .context("Hand aborted on an engine invariant violation")?;

    log::info!("Hand finished after {} tricks", game.tricks_played());
    Ok(())
}

#[cfg(test)]
mod tests {
    use bridgers::{Card, GameEvent, Seat, Suit};

    use super::narration;

    #[test]
    fn narration_lines() {
        assert_eq!(
            narration(&GameEvent::DealerChosen { dealer: Seat::North }).unwrap(),
            "North will shuffle and deal the cards.\n\n\n"
        );
        assert_eq!(
            narration(&GameEvent::TrickStarted {
                number: 3,
                leader: Seat::South
            })
            .unwrap(),
            "\n\nTrick 3: South leads...\n\n"
        );
        assert_eq!(
            narration(&GameEvent::CardPlayed {
                seat: Seat::West,
                card: Card::new(Suit::Spades, 13)
            })
            .unwrap(),
            "West has played King of Spades"
        );
        assert_eq!(
            narration(&GameEvent::TrickWon {
                number: 3,
                winner: Seat::East,
                card: Card::new(Suit::Hearts, 1)
            })
            .unwrap(),
            "\n\n\nEast won the trick with the Ace of Hearts"
        );
        assert_eq!(narration(&GameEvent::HandFinished), None);
    }
}
