use anyhow::{bail, Context};
use pokerun_core::{
    Action, DeckError, Event, EventBus, RngState, RoundError, RoundStats, RunError, RunState,
    ScoreBreakdown,
};
use pokerun_data::load_game_config_or_standard;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const BAR_WIDTH: usize = 30;

#[derive(Debug, Clone)]
struct CliOptions {
    assets: PathBuf,
    seed: Option<u64>,
    debug: bool,
}

fn parse_cli_options(args: &[String]) -> anyhow::Result<CliOptions> {
    let mut assets = PathBuf::from("assets");
    let mut seed = None;
    let mut debug = false;
    let mut idx = 0;
    while idx < args.len() {
        match args[idx].as_str() {
            "--debug" | "-d" => debug = true,
            "--assets" => {
                let Some(value) = args.get(idx + 1) else {
                    bail!("--assets needs a directory");
                };
                assets = PathBuf::from(value);
                idx += 1;
            }
            "--seed" => {
                let Some(value) = args.get(idx + 1) else {
                    bail!("--seed needs a number");
                };
                let parsed = value
                    .parse::<u64>()
                    .with_context(|| format!("invalid --seed value {value:?}"))?;
                seed = Some(parsed);
                idx += 1;
            }
            _ => {}
        }
        idx += 1;
    }
    Ok(CliOptions {
        assets,
        seed,
        debug,
    })
}

fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_cli_options(&args) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("error: {err:#}");
            eprintln!("usage: pokerun [--assets <dir>] [--seed <n>] [--debug]");
            std::process::exit(2);
        }
    };
    init_logging(options.debug);
    if let Err(err) = run_game(&options) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

/// Line reader over stdin. End of input ends the session on the spot.
struct Prompt {
    stdin: io::StdinLock<'static>,
}

impl Prompt {
    fn new() -> Self {
        Self {
            stdin: io::stdin().lock(),
        }
    }

    fn read_line(&mut self, prompt: &str) -> String {
        print!("{prompt} ");
        let _ = io::stdout().flush();
        let mut line = String::new();
        match self.stdin.read_line(&mut line) {
            Ok(0) | Err(_) => {
                println!();
                println!("interrupted");
                std::process::exit(0);
            }
            Ok(_) => line.trim().to_string(),
        }
    }
}

fn run_game(options: &CliOptions) -> anyhow::Result<()> {
    let config = load_game_config_or_standard(&options.assets)
        .with_context(|| format!("load config from {}", options.assets.display()))?;
    let rng = match options.seed {
        Some(seed) => RngState::from_seed(seed),
        None => RngState::secure(),
    };
    log::debug!("starting run, seed {:?}", options.seed);
    let mut run = RunState::new(config, rng);
    let mut events = EventBus::default();
    let mut prompt = Prompt::new();

    println!("*********************");
    println!("* Welcome to Poker! *");
    println!("*********************");
    println!();

    loop {
        if run.is_round_start() {
            print_box(
                &format!("ROUND {} START", run.round_count()),
                &format!(
                    "Ante {}/{}: {}  |  Blind: {:.1}",
                    run.ante_index() + 1,
                    run.config.max_ante().map_or(0, |ante| ante + 1),
                    run.current_ante_amount(),
                    run.current_blind_multiplier()
                ),
            );
            println!();
            run.start_round(&mut events).context("start round")?;
        }

        print_stats(&run.round_stats());

        let count = run.next_draw_count();
        let drawn = match run.draw(count, &mut events) {
            Ok(drawn) => drawn,
            Err(RunError::Round(RoundError::Deck(err @ DeckError::InsufficientCards { .. }))) => {
                println!("GAME OVER: {err}");
                print_stats(&run.round_stats());
                return Ok(());
            }
            Err(err) => return Err(err).context("draw cards"),
        };
        if count > 0 {
            println!("Draw {count} cards");
        }
        if options.debug && !drawn.is_empty() {
            println!("---------- Drawn Cards ----------");
            for card in &drawn {
                println!("  * {card}");
            }
            println!();
        }

        let labels = run.hand_card_labels();
        let selection = read_selection(&mut prompt, &labels, run.config.rules.max_selected);
        println!("Selected cards:");
        if selection.is_empty() {
            println!("  (no cards selected)");
        } else {
            for label in &selection {
                println!("  {label}");
            }
        }
        println!();

        let action = read_action(&mut prompt, &run.enabled_actions());
        if let Err(err) = run.select_cards(&selection, &mut events) {
            match err {
                RunError::Round(err) => {
                    println!("{err}");
                    run.cancel_hand(&mut events).context("reset selection")?;
                    continue;
                }
                other => return Err(other).context("select cards"),
            }
        }
        let outcome = match action {
            Action::Play => run.play_hand(&mut events).map(|breakdown| {
                print_hand_result(&breakdown);
            }),
            Action::Discard => run.discard_hand(&mut events),
            Action::Cancel => run.cancel_hand(&mut events),
        };
        if let Err(err) = outcome {
            match err {
                RunError::Round(err) => {
                    println!("{err}");
                    run.cancel_hand(&mut events).context("reset selection")?;
                }
                other => return Err(other).context("resolve action"),
            }
        }

        if options.debug && action != Action::Cancel {
            println!("---------- Remaining Cards ----------");
            let remain = run.remain_card_labels();
            if remain.is_empty() {
                println!("  (no remaining cards)");
            }
            for label in remain {
                println!("  * {label}");
            }
            println!();
        }
        report_events(&mut events);

        if run.is_round_won() {
            println!("ROUND CLEAR!");
            print_stats(&run.round_stats());
            prompt.read_line("You win this round! Press enter for the next one.");
            match run.next_round(&mut events) {
                Ok(()) => {}
                Err(RunError::MissingAnteRule(_)) => {
                    println!("Every ante cleared. You beat the run!");
                    return Ok(());
                }
                Err(err) => return Err(err).context("next round"),
            }
            report_events(&mut events);
            continue;
        }
        if run.is_round_lost() {
            println!("GAME OVER");
            print_stats(&run.round_stats());
            println!("Better luck next time!");
            return Ok(());
        }
    }
}

fn read_selection(prompt: &mut Prompt, labels: &[String], max: usize) -> Vec<String> {
    for (idx, label) in labels.iter().enumerate() {
        println!("  [{}] {}", idx + 1, label);
    }
    loop {
        let line = prompt.read_line("Select cards (numbers, blank for none):");
        match parse_selection(&line, labels.len(), max) {
            Ok(indices) => {
                return indices.into_iter().map(|idx| labels[idx].clone()).collect();
            }
            Err(message) => println!("{message}"),
        }
        println!();
    }
}

fn parse_selection(line: &str, len: usize, max: usize) -> Result<Vec<usize>, String> {
    match parse_indices(line, len) {
        Some(indices) if indices.len() <= max => Ok(indices),
        Some(_) => Err(format!("Please select at most {max} cards")),
        None => Err(format!("Please enter card numbers between 1 and {len}")),
    }
}

fn read_action(prompt: &mut Prompt, actions: &[Action]) -> Action {
    let names: Vec<String> = actions
        .iter()
        .enumerate()
        .map(|(idx, action)| format!("[{}] {}", idx + 1, action))
        .collect();
    loop {
        let line = prompt.read_line(&format!("Select action {}:", names.join(" ")));
        if let Ok(number) = line.parse::<usize>() {
            if let Some(action) = number.checked_sub(1).and_then(|idx| actions.get(idx)) {
                return *action;
            }
        } else if let Ok(action) = line.parse::<Action>() {
            if actions.contains(&action) {
                return action;
            }
        }
        println!("Unknown action: {line}");
    }
}

/// 1-based card numbers separated by spaces or commas, deduplicated in input order.
fn parse_indices(line: &str, len: usize) -> Option<Vec<usize>> {
    let mut indices = Vec::new();
    for token in line
        .split(|ch: char| ch == ',' || ch.is_whitespace())
        .filter(|token| !token.is_empty())
    {
        let number: usize = token.parse().ok()?;
        if number == 0 || number > len {
            return None;
        }
        if !indices.contains(&(number - 1)) {
            indices.push(number - 1);
        }
    }
    Some(indices)
}

fn report_events(events: &mut EventBus) {
    for event in events.drain() {
        if let Event::AnteAdvanced { ante } = event {
            println!("Ante up! Now on ante {}", ante + 1);
        }
    }
}

fn print_box(title: &str, content: &str) {
    println!("+-----------------------------------------+");
    println!("| {title:<39} |");
    println!("+-----------------------------------------+");
    println!("| {content:<39} |");
    println!("+-----------------------------------------+");
}

fn print_stats(stats: &RoundStats) {
    println!(
        "Score Progress: {}",
        progress_bar(stats.total_score, stats.score_target)
    );
    println!(
        "Hands: {}  |  Discards: {}",
        stats.hands_left, stats.discards_left
    );
    println!();
}

fn print_hand_result(breakdown: &ScoreBreakdown) {
    println!("+-----------------------------------------+");
    println!("| HAND RESULT: {:<26} |", breakdown.hand.to_string());
    println!("+-----------------------------------------+");
    println!(
        "| Chip: {:<8} |  Mult: {:<15} |",
        breakdown.chips(),
        breakdown.mult()
    );
    println!("| Score: {:<32} |", breakdown.score());
    println!("+-----------------------------------------+");
    for step in &breakdown.trace {
        println!("  {}: {}", step.source, step.effect);
    }
    println!();
}

fn progress_bar(current: i64, target: i64) -> String {
    let progress = if target > 0 {
        (current as f64 / target as f64).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (progress * BAR_WIDTH as f64) as usize;
    let bar: String = (0..BAR_WIDTH)
        .map(|idx| if idx < filled { '#' } else { '.' })
        .collect();
    format!(
        "[{bar}] {}% ({current}/{target})",
        (progress * 100.0) as u32
    )
}
