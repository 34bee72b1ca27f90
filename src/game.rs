use std::{error::Error, fmt};

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

// 3 rows, 3 columns, 2 diagonals, 0-based cell indices.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8],
    [0, 3, 6], [1, 4, 7], [2, 5, 8],
    [0, 4, 8], [2, 4, 6],
];

// #############################
// #                           #
// #          Player           #
// #                           #
// #############################

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn name(&self) -> &'static str {
        match self {
            Player::X => "X",
            Player::O => "O",
        }
    }

    pub fn other(&self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

// #############################
// #                           #
// #           Cell            #
// #                           #
// #############################

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Empty,
    Taken(Player),
}

impl Cell {
    // Encoding used by the line sums: a line of three equal marks
    // reaches +3 (X) or -3 (O), anything mixed stays in between.
    fn score(&self) -> i8 {
        match self {
            Cell::Empty => 0,
            Cell::Taken(Player::X) => 1,
            Cell::Taken(Player::O) => -1,
        }
    }
}

// #############################
// #                           #
// #         MoveError         #
// #                           #
// #############################

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveError {
    InvalidMove,
    AlreadyTaken,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InvalidMove => write!(f, "position is outside the board"),
            MoveError::AlreadyTaken => write!(f, "position is already taken"),
        }
    }
}

impl Error for MoveError {}

// #############################
// #                           #
// #           Board           #
// #                           #
// #############################

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    pub fn cell(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// Applies `player`'s mark at the 1-based `position`. The board is
    /// left untouched when the move is rejected.
    pub fn make_move(&mut self, player: Player, position: usize) -> Result<(), MoveError> {
        if position < 1 || position > CELL_COUNT {
            return Err(MoveError::InvalidMove);
        }

        let idx = position - 1;
        if self.cells[idx] != Cell::Empty {
            return Err(MoveError::AlreadyTaken);
        }

        self.cells[idx] = Cell::Taken(player);
        Ok(())
    }

    pub fn winner(&self) -> Option<Player> {
        for line in LINES.iter() {
            let sum: i8 = line.iter().map(|&idx| self.cells[idx].score()).sum();

            if sum == 3 {
                return Some(Player::X);
            } else if sum == -3 {
                return Some(Player::O);
            }
        }

        None
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    pub fn is_game_over(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// 1-based positions of the empty cells, in board order.
    pub fn valid_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &cell)| cell == Cell::Empty)
            .map(|(idx, _)| idx + 1)
            .collect()
    }
}

// #############################
// #                           #
// #          Display          #
// #                           #
// #############################

// Plain, colorless render: marks where played, 1-based position
// numbers where empty. Color is layered on top in main.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let idx = row * BOARD_SIZE + col;
                if col > 0 {
                    write!(f, " ")?;
                }
                match self.cells[idx] {
                    Cell::Taken(player) => write!(f, "{}", player.name())?,
                    Cell::Empty => write!(f, "{}", idx + 1)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
