use crate::config::Rules;
use crate::dictionary::Dictionary;
use crate::error::SessionError;
use crate::game_state::{GameReporter, GameState, Session, play_game};
use rand::Rng;
use rand::seq::SliceRandom;

/// Tally of a batch of games.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EvaluationReport {
    pub games: usize,
    pub wins: usize,
    pub losses: usize,
    /// Games abandoned because the guess engine ran out of letters.
    pub engine_failures: usize,
    /// Draws skipped because the word could not be used as a secret.
    pub invalid_secrets: usize,
}

impl EvaluationReport {
    /// Fraction of games won, `0.0` for an empty batch.
    pub fn accuracy(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64
        }
    }
}

/// Plays `games` games, each against a secret word drawn from `dictionary`
/// with `rng`.
pub fn evaluate<R, I>(
    dictionary: &Dictionary,
    rules: &Rules,
    games: usize,
    rng: &mut R,
    interface: &mut I,
) -> Result<EvaluationReport, SessionError>
where
    R: Rng + ?Sized,
    I: GameReporter + ?Sized,
{
    let mut report = EvaluationReport::default();
    for game in 0..games {
        let secret = dictionary
            .words()
            .choose(rng)
            .ok_or(SessionError::InvalidDictionary)?;
        log::info!(
            "game {}/{games}: secret word has {} letters",
            game + 1,
            secret.chars().count()
        );

        let mut session = match Session::new(secret, dictionary, rules) {
            Ok(session) => session,
            Err(SessionError::InvalidSecret(word)) => {
                log::warn!("skipping unusable secret word '{word}'");
                report.invalid_secrets += 1;
                continue;
            }
            Err(e) => return Err(e),
        };
        report.games += 1;
        match play_game(&mut session, interface) {
            Ok(GameState::Won) => report.wins += 1,
            Ok(_) => report.losses += 1,
            Err(SessionError::EngineExhausted { pattern }) => {
                log::error!("engine exhausted on '{secret}' at '{pattern}'");
                report.engine_failures += 1;
            }
            Err(e) => return Err(e),
        }
    }
    Ok(report)
}
