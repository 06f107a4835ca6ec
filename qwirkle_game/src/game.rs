use std::cmp::Ordering;
use std::io::{BufRead, Write};

use qwirkle::{
    execute_command, execute_computer_turn, render_board, render_rack, Bag, Board, Command,
    Tile, TurnOutcome, FINISHING_BONUS, RACK_SIZE,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{debug, info};

use crate::player::{Player, PlayerKind};

/// After this many rounds in which nobody placed a tile, the game is given up.
pub const MAX_ROUNDS_WITHOUT_PLACEMENT: usize = 5;

/// Why the game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEnd {
    /// The bag was exhausted and this player used up their last tile.
    RackEmptied { player_idx: usize },
    /// Nobody can place a tile anymore.
    Stalled,
    /// The input was closed while waiting for a human player's command.
    InputClosed,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlayerSummary {
    pub name: String,
    pub kind: PlayerKind,
    pub score: u32,
}

/// The result of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    pub seed: u64,
    pub turns: usize,
    pub end: GameEnd,
    pub players: Vec<PlayerSummary>,
    /// The name of the player with the highest score, or `None` for a tie.
    pub winner: Option<String>,
    /// The final board as `(x, y, tile)`, row by row.
    pub board: Vec<(i32, i32, Tile)>,
}

/// All state of one game.
pub struct Game {
    seed: u64,
    board: Board,
    bag: Bag,
    players: [Player; 2],
    current_player_idx: usize,
    turns: usize,
}

impl Game {
    /// Starts a game with a full bag shuffled according to `seed`.
    pub fn new(players: [Player; 2], seed: u64) -> Self {
        Self::with_bag(players, Bag::full(StdRng::seed_from_u64(seed)), seed)
    }

    /// Starts a game with the given bag. Players draw their racks in order.
    pub fn with_bag(mut players: [Player; 2], mut bag: Bag, seed: u64) -> Self {
        for player in players.iter_mut() {
            player.rack.refill(&mut bag);
        }
        Self {
            seed,
            board: Board::default(),
            bag,
            players,
            current_player_idx: 0,
            turns: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn bag(&self) -> &Bag {
        &self.bag
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// The first move is the one placing a tile on the empty board.
    pub fn is_first_move(&self) -> bool {
        self.board.is_empty()
    }

    /// Plays until the game ends.
    ///
    /// Commands for human players are read from `input`, everything a human
    /// needs to see is written to `output`. Returns an error only on I/O
    /// failure, not when an illegal move is entered.
    pub fn play<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> anyhow::Result<GameSummary> {
        let mut turns_without_placement = 0;

        let end = loop {
            self.write_status(output)?;

            let player_idx = self.current_player_idx;
            let outcome = match self.players[player_idx].kind {
                PlayerKind::Human => match self.human_turn(player_idx, input, output)? {
                    Some(outcome) => outcome,
                    None => break GameEnd::InputClosed,
                },
                PlayerKind::Computer => self.computer_turn(player_idx),
            };
            self.turns += 1;

            let player = &mut self.players[player_idx];
            match outcome {
                TurnOutcome::Placed {
                    score,
                    tiles_placed,
                } => {
                    player.score += score;
                    turns_without_placement = 0;
                    info!(player = player.name, score, tiles_placed, "Tiles placed");
                    writeln!(output, "{} Move Score={}", player.name, score)?;
                }
                TurnOutcome::Exchanged { tiles_returned } => {
                    turns_without_placement += 1;
                    info!(player = player.name, tiles_returned, "Tiles exchanged");
                    writeln!(output, "{} exchanged {} tiles", player.name, tiles_returned)?;
                }
            }

            if player.rack.is_empty() {
                player.score += FINISHING_BONUS;
                break GameEnd::RackEmptied { player_idx };
            }
            let full_rounds_without_placement = turns_without_placement / self.players.len();
            if (full_rounds_without_placement >= 1 && self.bag.is_empty())
                || full_rounds_without_placement >= MAX_ROUNDS_WITHOUT_PLACEMENT
            {
                break GameEnd::Stalled;
            }

            self.current_player_idx = (player_idx + 1) % self.players.len();
        };

        let summary = self.summary(end);
        info!(turns = summary.turns, winner = ?summary.winner, "Game over");
        writeln!(output, "*** GAME OVER ***")?;
        self.write_scores(output)?;
        writeln!(output, "{}", render_board(&self.board))?;
        Ok(summary)
    }

    // Returns `None` if the input was closed before a legal command was entered.
    fn human_turn<R: BufRead, W: Write>(
        &mut self,
        player_idx: usize,
        input: &mut R,
        output: &mut W,
    ) -> anyhow::Result<Option<TurnOutcome>> {
        let mut buf = String::new();
        loop {
            writeln!(output, "{}", render_rack(&self.players[player_idx].rack))?;
            write!(output, "> ")?;
            output.flush()?;

            buf.clear(); // because read_line() appends to the buffer
            if input.read_line(&mut buf)? == 0 {
                return Ok(None);
            }
            let command = match buf.parse::<Command>() {
                Ok(command) => command,
                Err(err) => {
                    writeln!(output, "{}", err)?;
                    continue;
                }
            };
            debug!(?command, "Command entered");

            let first_move = self.is_first_move();
            let rack = &mut self.players[player_idx].rack;
            match execute_command(&mut self.board, rack, &mut self.bag, &command, first_move) {
                Ok(outcome) => return Ok(Some(outcome)),
                Err(err) => {
                    writeln!(output, "INVALID MOVE: {}", err)?;
                }
            }
        }
    }

    fn computer_turn(&mut self, player_idx: usize) -> TurnOutcome {
        let rack = &mut self.players[player_idx].rack;
        execute_computer_turn(&mut self.board, rack, &mut self.bag)
    }

    fn write_status<W: Write>(&self, output: &mut W) -> std::io::Result<()> {
        writeln!(output)?;
        self.write_scores(output)?;
        writeln!(output, "Tiles left: {}", self.bag.tiles_left())?;
        writeln!(output, "{}", render_board(&self.board))?;
        for player in &self.players {
            if player.kind == PlayerKind::Computer && player.rack.len() < RACK_SIZE {
                writeln!(output, "{} HAS {} TILES LEFT.", player.name, player.rack.len())?;
            }
        }
        Ok(())
    }

    fn write_scores<W: Write>(&self, output: &mut W) -> std::io::Result<()> {
        let scores: Vec<String> = self
            .players
            .iter()
            .map(|p| format!("{} score: {}", p.name, p.score))
            .collect();
        writeln!(output, "{}", scores.join("    "))
    }

    pub fn summary(&self, end: GameEnd) -> GameSummary {
        let [p0, p1] = &self.players;
        let winner = match p0.score.cmp(&p1.score) {
            Ordering::Less => Some(p1.name.clone()),
            Ordering::Equal => None,
            Ordering::Greater => Some(p0.name.clone()),
        };
        let mut board: Vec<_> = self.board.iter().collect();
        board.sort_unstable_by_key(|&(x, y, _)| (y, x));
        GameSummary {
            seed: self.seed,
            turns: self.turns,
            end,
            players: self
                .players
                .iter()
                .map(|p| PlayerSummary {
                    name: p.name.clone(),
                    kind: p.kind,
                    score: p.score,
                })
                .collect(),
            winner,
            board,
        }
    }
}
