use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use std::cmp::Ordering;
use std::io::{stdin, stdout, Write};
use std::time::Duration;

use connect4_minimax::*;

mod display;
use display::*;

#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
enum Controller {
    Human,
    Ai,
}

/// Play Connect 4 against a depth-limited minimax agent
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Grid height in cells
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: usize,

    /// Grid width in cells
    #[arg(long, default_value_t = DEFAULT_COLUMNS)]
    columns: usize,

    /// Number of plies the agent looks ahead
    #[arg(long, default_value_t = MAX_DEPTH)]
    depth: usize,

    /// Who controls player 1 (red)
    #[arg(long, value_enum, default_value_t = Controller::Human)]
    player_one: Controller,

    /// Who controls player 2 (yellow)
    #[arg(long, value_enum, default_value_t = Controller::Ai)]
    player_two: Controller,

    /// Moves to start from, as 1-indexed column digits (e.g. "4453"); only
    /// usable with at most 9 columns
    #[arg(long, default_value = "")]
    moves: String,

    /// Score the agent's candidate moves in parallel
    #[arg(long)]
    parallel: bool,

    /// Pause between moves when both players are AI controlled
    #[arg(long, default_value_t = 1000)]
    delay_ms: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let agent = MinimaxAgent::new(SearchConfig {
        max_depth: args.depth,
        parallel: args.parallel,
    })?;
    let mut game = Game::from_moves(args.rows, args.columns, &args.moves)?;
    let ai_players = (args.player_one == Controller::Ai, args.player_two == Controller::Ai);

    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    // game loop
    loop {
        display(game.grid())?;

        match game.state() {
            GameState::Playing => {
                let player = game.to_move();
                let next_move =
                    // AI player
                    if (player == Player::One && ai_players.0) || (player == Player::Two && ai_players.1) {
                        println!("AI is thinking...");
                        stdout().flush()?;

                        // slow down play if both players are AI
                        if ai_players == (true, true) {
                            std::thread::sleep(Duration::from_millis(args.delay_ms));
                        }

                        let mut searcher = agent.search(&game)?;
                        let (score, best_move) = searcher.choose_move()?;

                        match score.cmp(&0) {
                            Ordering::Greater => println!(
                                "Player {} can force a win within {} moves.",
                                player.number(),
                                args.depth
                            ),
                            Ordering::Less => println!(
                                "Player {} can force a win within {} moves.",
                                player.opponent().number(),
                                args.depth
                            ),
                            Ordering::Equal => println!(
                                "No forced result within {} moves",
                                args.depth
                            ),
                        }

                        println!("Best move: {} ({} positions searched)", best_move + 1, searcher.node_count);
                        best_move + 1

                    // human player
                    } else {
                        print!("Move input > ");
                        stdout().flush()?;
                        let mut input_str = String::new();
                        if stdin.read_line(&mut input_str)? == 0 {
                            // end of input
                            break;
                        }

                        match input_str.trim().parse::<usize>() {
                            Ok(column) if (1..=game.columns()).contains(&column) => column,
                            _ => {
                                println!("Invalid number: {}", input_str.trim());
                                continue;
                            }
                        }
                    };

                match game.play(next_move - 1) {
                    Err(GameError::FullColumn { .. }) => {
                        println!("Invalid move, column {} full", next_move);
                        // try the move again
                        continue;
                    }
                    Err(err) => return Err(err.into()),
                    Ok(_) => {}
                }
            }

            // end states
            GameState::Won(player) => {
                println!("Player {} wins!", player.number());
                break;
            }
            GameState::Draw => {
                println!("Draw!");
                break;
            }
        }
    }
    Ok(())
}
