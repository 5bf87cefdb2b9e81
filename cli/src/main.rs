mod config;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use tictactoe_engine::config::EngineConfig;
use tictactoe_engine::tictactoe::{
    Board, Bot, GameState, Mark, MinimaxStrategy, Player, Players, Position, Round,
    ScriptedMoves, Seat,
};
use tictactoe_engine::{Logger, SessionRng, log_info};

#[derive(Parser)]
#[command(name = "tictactoe_bot", about = "Exhaustive minimax tic-tac-toe bot")]
struct Args {
    /// YAML config, defaults to tictactoe_bot_config.yaml next to the executable
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the move the minimax bot picks for a board like "X.O/.X./..O"
    BestMove {
        board: Board,
        /// Side to move, inferred from the mark counts when omitted
        #[arg(long, value_parser = parse_mark)]
        to_move: Option<Mark>,
    },
    /// Pit the minimax bot against an opponent, alternating who starts
    SelfPlay {
        #[arg(long, default_value_t = 10)]
        games: u32,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value_t = Opponent::Random)]
        opponent: Opponent,
    },
    /// Play the configured players, human moves given as "r,c r,c ..."
    Play {
        #[arg(value_parser = parse_moves)]
        moves: Vec<MoveList>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Opponent {
    Random,
    Minimax,
}

#[derive(Clone, Debug, PartialEq)]
struct MoveList(Vec<Position>);

fn parse_mark(value: &str) -> Result<Mark, String> {
    let mut chars = value.chars();
    match (chars.next().and_then(Mark::from_symbol), chars.next()) {
        (Some(mark), None) if mark != Mark::Empty => Ok(mark),
        _ => Err(format!("expected X or O, got '{}'", value)),
    }
}

fn parse_position(value: &str) -> Result<Position, String> {
    let (row, col) = value
        .split_once(',')
        .ok_or_else(|| format!("expected row,col, got '{}'", value))?;
    let row = row
        .trim()
        .parse()
        .map_err(|e| format!("bad row in '{}': {}", value, e))?;
    let col = col
        .trim()
        .parse()
        .map_err(|e| format!("bad column in '{}': {}", value, e))?;
    Ok(Position::new(row, col))
}

fn parse_moves(value: &str) -> Result<MoveList, String> {
    value
        .split_whitespace()
        .map(parse_position)
        .collect::<Result<Vec<_>, _>>()
        .map(MoveList)
}

/// X moves first, so X is to move whenever the counts are level.
fn infer_to_move(board: &Board) -> Mark {
    if board.count(Mark::X) <= board.count(Mark::O) {
        Mark::X
    } else {
        Mark::O
    }
}

fn bot_players() -> tictactoe_engine::Result<Players> {
    Players::new(
        Player::new("X bot", Mark::X, true)?,
        Player::new("O bot", Mark::O, true)?,
    )
}

fn best_move(
    config: &EngineConfig,
    logger: &Logger,
    board: Board,
    to_move: Option<Mark>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mark = to_move.unwrap_or_else(|| infer_to_move(&board));
    let seat = if mark == Mark::X {
        Seat::First
    } else {
        Seat::Second
    };
    let state = GameState::from_board(board, Arc::new(bot_players()?), seat);
    let strategy = MinimaxStrategy::new(config.minimax_settings(), logger.clone());

    let outcome = strategy.search(&state)?;
    let next = state.apply_move(outcome.position.row, outcome.position.col)?;

    println!(
        "{} plays {} (score {}, {} nodes{})",
        mark,
        outcome.position,
        outcome.score,
        outcome.nodes,
        match outcome.shortcut {
            Some(shortcut) => format!(", shortcut {:?}", shortcut),
            None => String::new(),
        }
    );
    println!("{}", next.board());
    Ok(())
}

fn self_play(
    config: &EngineConfig,
    logger: &Logger,
    games: u32,
    seed: Option<u64>,
    opponent: Opponent,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = seed.map(SessionRng::new).unwrap_or_else(SessionRng::from_random);
    log_info!(logger, "Self-play with seed {}", rng.seed());

    let minimax = Bot::Minimax(MinimaxStrategy::new(
        config.minimax_settings(),
        logger.clone(),
    ));
    let rival = match opponent {
        Opponent::Random => Bot::Random,
        Opponent::Minimax => minimax.clone(),
    };

    let (mut wins, mut losses, mut draws) = (0u32, 0u32, 0u32);
    for game in 0..games {
        let minimax_seat = if game % 2 == 0 {
            Seat::First
        } else {
            Seat::Second
        };
        let mut bots = [rival.clone(), rival.clone()];
        bots[minimax_seat.index()] = minimax.clone();

        let state = GameState::new(config.board_size, bot_players()?, Seat::First)?;
        let outcome =
            Round::new(state, bots).play(&mut ScriptedMoves::default(), &mut rng, logger)?;

        match outcome.winner {
            Some(seat) if seat == minimax_seat => wins += 1,
            Some(_) => losses += 1,
            None => draws += 1,
        }
    }

    println!(
        "seed {}: minimax won {}, lost {}, drew {} of {} games",
        rng.seed(),
        wins,
        losses,
        draws,
        games
    );
    Ok(())
}

fn play(
    config: &EngineConfig,
    logger: &Logger,
    moves: Vec<Position>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = SessionRng::from_random();
    let round = config.round(&mut rng, logger)?;
    let outcome = round.play(&mut ScriptedMoves::new(moves), &mut rng, logger)?;

    println!("{}", outcome.final_state.board());
    match outcome.winner {
        Some(seat) => println!(
            "{} wins with score {}",
            outcome.final_state.players().get(seat).name(),
            outcome.final_state.score().score
        ),
        None => println!("draw"),
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = config::get_config_manager(args.config).get_config()?;
    if args.verbose {
        config.logging.verbose = true;
    }
    let logger = config.logger();

    match args.command {
        Command::BestMove { board, to_move } => best_move(&config, &logger, board, to_move),
        Command::SelfPlay {
            games,
            seed,
            opponent,
        } => self_play(&config, &logger, games, seed, opponent),
        Command::Play { moves } => play(
            &config,
            &logger,
            moves.into_iter().flat_map(|list| list.0).collect(),
        ),
    }
}
