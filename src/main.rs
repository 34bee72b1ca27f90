mod game;

use std::io::{self, BufRead, Write};
use std::{thread, time::Duration};

use colored::{Color, Colorize};
use game::{Board, Cell, MoveError, Player, BOARD_SIZE};
use rand::Rng;

fn main() {
    let human = Box::new(Keyboard::new());
    let computer = Box::new(RandomAgent::new());

    let mut game = Game::new(human, computer);
    game.play();
}

// ##############################
// # Rendering
// ##############################

fn player_color(player: Player) -> Color {
    match player {
        Player::X => Color::Red,
        Player::O => Color::Green,
    }
}

fn colorize(text: &str, color: Color) -> String {
    text.color(color).to_string()
}

fn label(player: Player) -> String {
    colorize(player.name(), player_color(player))
}

// Same grid as the board's plain Display, with the marks colorized.
fn render_colored(board: &Board) -> String {
    let mut out = String::new();
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let idx = row * BOARD_SIZE + col;
            if col > 0 {
                out.push(' ');
            }
            match board.cell(idx) {
                Cell::Taken(player) => out.push_str(&label(player)),
                Cell::Empty => out.push_str(&(idx + 1).to_string()),
            }
        }
        out.push('\n');
    }
    out
}

// ##############################
// # MoveSource
// ##############################

trait MoveSource {
    /// Produces and applies exactly one legal move for `player`,
    /// returning the 1-based position that was played.
    fn make_move(&mut self, player: Player, board: &mut Board) -> usize;
}

struct Keyboard;

impl Keyboard {
    fn new() -> Self {
        Keyboard {}
    }
}

impl MoveSource for Keyboard {
    fn make_move(&mut self, player: Player, board: &mut Board) -> usize {
        let mut input = String::new();
        let stdin = io::stdin();

        loop {
            print!("{}'s turn. Enter move: ", label(player));
            io::stdout().flush().unwrap();

            input.clear();
            stdin.lock().read_line(&mut input).unwrap();
            let input = input.trim();

            // Garbage parses to 0, which the board rejects as out of range.
            let position = input.parse::<usize>().unwrap_or(0);

            match board.make_move(player, position) {
                Ok(()) => {
                    println!();
                    return position;
                }
                Err(MoveError::InvalidMove) => {
                    println!();
                    println!("`{}' is not a valid move. Please try again.", input);
                    println!();
                }
                Err(MoveError::AlreadyTaken) => {
                    println!();
                    println!("{} is already taken. Please pick another space.", position);
                    println!();
                }
            }
        }
    }
}

struct RandomAgent {
    delay: Duration,
}

impl RandomAgent {
    fn new() -> Self {
        RandomAgent {
            delay: Duration::from_millis(500),
        }
    }
}

impl MoveSource for RandomAgent {
    fn make_move(&mut self, player: Player, board: &mut Board) -> usize {
        thread::sleep(self.delay);

        let moves = board.valid_moves();
        assert!(!moves.is_empty(), "no moves left on the board");

        let mut rng = rand::thread_rng();
        let position = moves[rng.gen_range(0..moves.len())];
        board.make_move(player, position).unwrap();

        println!("{} (computer) marks {}.", label(player), position);
        println!();
        position
    }
}

// ##############################
// # Game
// ##############################

struct Game {
    player_x: Box<dyn MoveSource>,
    player_o: Box<dyn MoveSource>,
    board: Board,
    current_player: Player,
}

impl Game {
    fn new(player_x: Box<dyn MoveSource>, player_o: Box<dyn MoveSource>) -> Self {
        Game {
            player_x,
            player_o,
            board: Board::new(),
            current_player: Player::X,
        }
    }

    fn play(&mut self) {
        while !self.board.is_game_over() {
            println!("{}", render_colored(&self.board));

            let source = match self.current_player {
                Player::X => &mut self.player_x,
                Player::O => &mut self.player_o,
            };
            source.make_move(self.current_player, &mut self.board);

            self.current_player = self.current_player.other();
        }

        println!("{}", render_colored(&self.board));

        match self.board.winner() {
            Some(winner) => println!("{} won!", label(winner)),
            None => println!("It's a tie."),
        }
    }
}
