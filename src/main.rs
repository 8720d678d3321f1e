use hangman_solver::cli::{CliReporter, display_report, parse_cli};
use hangman_solver::dictionary::resolve_dictionary;
use hangman_solver::evaluation::evaluate;
use hangman_solver::game_state::{Session, play_game};
use hangman_solver::logging;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = parse_cli();
    logging::init(cli.verbose, cli.quiet);

    let Some(rules) = cli.rules() else {
        log::error!("invalid alphabet '{}'", cli.alphabet);
        return ExitCode::FAILURE;
    };
    let dictionary = match resolve_dictionary(cli.dictionary_path.as_deref(), &rules.alphabet) {
        Ok(dictionary) => dictionary,
        Err(e) => {
            log::error!("failed to load dictionary: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(word) = &cli.word {
        let mut reporter = CliReporter::single_game(cli.quiet);
        let word = word.trim().to_lowercase();
        let result = Session::new(&word, &dictionary, &rules)
            .and_then(|mut session| play_game(&mut session, &mut reporter));
        return match result {
            Ok(_) => ExitCode::SUCCESS,
            Err(e) => {
                log::error!("{e}");
                ExitCode::FAILURE
            }
        };
    }

    let seed = cli
        .seed
        .unwrap_or_else(|| chrono::Utc::now().timestamp_millis().unsigned_abs());
    log::info!("evaluating {} games with seed {seed}", cli.games);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut reporter = CliReporter::new(cli.quiet);

    match evaluate(&dictionary, &rules, cli.games, &mut rng, &mut reporter) {
        Ok(report) => {
            display_report(&report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("evaluation stopped: {e}");
            ExitCode::FAILURE
        }
    }
}
