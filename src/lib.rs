mod property;
mod board;
mod player;
mod strategy;
mod money;

use std::fmt::{Display, Formatter};
use itertools::Itertools;
use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;
use tracing::{debug, trace};

pub use board::{Board, BOARD_SIZE};
pub use money::PurchaseError;
pub use player::Player;
pub use property::Property;
pub use strategy::{Strategy, STRATEGY_ARRAY};

#[derive(Error, Debug)]
pub enum GameError {
    #[error("a match needs at least {required} players, got {actual}")]
    NotEnoughPlayers { required: usize, actual: usize },
    #[error("too many players: {0}")]
    TooManyPlayers(usize),
    #[error("a board must have exactly 20 properties, got {0}")]
    InvalidBoardSize(usize),
    #[error("a die roll must be between 1 and 6, got {0}")]
    InvalidRoll(u8),
    #[error("the match is already finished")]
    GameFinished,
    #[error("the match was aborted by an earlier error")]
    GameAborted,
    #[error("property #{position} is owned by unknown player {owner}")]
    UnknownOwner { position: usize, owner: u8 },
    #[error("property #{position} is owned by eliminated player {owner}")]
    OwnerEliminated { position: usize, owner: u8 },
    #[error("every player has been eliminated")]
    NoSurvivors,
    #[error(transparent)]
    Purchase(#[from] PurchaseError),
}

#[derive(Clone, Debug)]
pub struct Options {
    pub starting_money: i32,
    pub lap_bonus: i32,
    pub max_rounds: u32,
    pub min_players: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            starting_money: 300,
            lap_bonus: 100,
            max_rounds: 1000,
            min_players: 2,
        }
    }
}

/// Index into the match's turn order.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct PlayerId(pub u8);

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MatchResult {
    pub winner: PlayerId,
    pub strategy: Strategy,
    pub rounds: u32,
    pub turns: u32,
    pub timed_out: bool,
}

impl Display for MatchResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let how = if self.timed_out { "on timeout" } else { "as last survivor" };
        f.write_fmt(format_args!(
            "Player {} ({}) wins {} after {} rounds / {} turns",
            self.winner.0, self.strategy, how, self.rounds, self.turns
        ))
    }
}

#[derive(Clone, Debug)]
enum Phase {
    Running,
    Finished(MatchResult),
    /// A fatal error interrupted a turn; the state is no longer trustworthy.
    Aborted,
}

/// A single match. Owns its RNG, so matches never share random state.
#[derive(Clone)]
pub struct Banco<R: Rng> {
    phase: Phase,
    players: Vec<Player>,
    board: Board,
    rng: R,
    options: Options,
    current: usize,
    round: u32,
    turn: u32,
}

impl<R: Rng> Banco<R> {
    /// Shuffles `strategies` into turn order, one player per entry.
    pub fn new(mut rng: R, board: Board, strategies: &[Strategy], options: &Options) -> Result<Self, GameError> {
        let mut order = strategies.to_vec();
        order.shuffle(&mut rng);

        Self::with_turn_order(rng, board, &order, options)
    }

    /// Like `new`, but `strategies` is already in turn order.
    pub fn with_turn_order(rng: R, board: Board, strategies: &[Strategy], options: &Options) -> Result<Self, GameError> {
        let required = options.min_players.max(2);
        if strategies.len() < required {
            return Err(GameError::NotEnoughPlayers { required, actual: strategies.len() });
        }

        if strategies.len() > u8::MAX as usize {
            return Err(GameError::TooManyPlayers(strategies.len()));
        }

        if board.len() != BOARD_SIZE {
            return Err(GameError::InvalidBoardSize(board.len()));
        }

        let players = strategies
            .iter()
            .enumerate()
            .map(|(id, strategy)| Player::new(PlayerId(id as u8), *strategy, options.starting_money))
            .collect();

        Ok(Self {
            phase: Phase::Running,
            players,
            board,
            rng,
            options: options.clone(),
            current: 0,
            round: 0,
            turn: 0,
        })
    }

    /// Plays until the match is decided. Once finished, the held result is
    /// returned again on every call.
    pub fn run(&mut self) -> Result<MatchResult, GameError> {
        loop {
            if let Phase::Finished(result) = &self.phase {
                return Ok(result.clone());
            }

            self.take_turn()?;
        }
    }

    pub fn take_turn(&mut self) -> Result<(), GameError> {
        self.ensure_running()?;

        let roll = self.rng.gen_range(1..=6u8);
        self.play_roll(roll)
    }

    /// Plays the current player's turn with the given die value.
    pub fn play_roll(&mut self, roll: u8) -> Result<(), GameError> {
        self.ensure_running()?;

        if !(1..=6).contains(&roll) {
            return Err(GameError::InvalidRoll(roll));
        }

        let result = self.resolve_turn(roll);
        if let Err(err) = &result {
            debug!(turn = self.turn, player = self.players[self.current].id.0, error = %err, "match aborted");
            self.phase = Phase::Aborted;
        }

        result
    }

    fn ensure_running(&self) -> Result<(), GameError> {
        match self.phase {
            Phase::Running => Ok(()),
            Phase::Finished(_) => Err(GameError::GameFinished),
            Phase::Aborted => Err(GameError::GameAborted),
        }
    }

    fn resolve_turn(&mut self, roll: u8) -> Result<(), GameError> {
        let current = self.current;
        self.turn += 1;

        let board_len = self.board.len();
        let lap_bonus = self.options.lap_bonus;
        let player = &mut self.players[current];

        trace!(turn = self.turn, player = player.id.0, roll, "roll");

        let laps = player.advance(roll, board_len);
        if laps > 0 {
            player.receive(lap_bonus * laps as i32);
            debug!(player = player.id.0, laps, money = player.money, "lap bonus");
        }

        self.resolve_property(current)?;

        if self.players[current].is_bankrupt() {
            self.eliminate(current);
        }

        self.move_to_next_living_player();
        self.check_termination()
    }

    fn resolve_property(&mut self, current: usize) -> Result<(), GameError> {
        let position = self.players[current].position;
        let property = self.board.get(position);

        match property.owner() {
            None => {
                let player = &self.players[current];

                // the strategy is only asked when the player could actually pay
                if player.can_afford(property) && player.strategy.should_buy(player.money, property, &mut self.rng) {
                    let price = property.price();
                    let player = &mut self.players[current];
                    player.buy(self.board.get_mut(position))?;
                    debug!(player = player.id.0, strategy = %player.strategy, position, price, money = player.money, "bought property");
                }
            }

            Some(owner) if owner == self.players[current].id => {}

            Some(owner) => {
                let owner_idx = owner.0 as usize;
                match self.players.get(owner_idx) {
                    None => return Err(GameError::UnknownOwner { position, owner: owner.0 }),
                    Some(p) if !p.is_alive() => return Err(GameError::OwnerEliminated { position, owner: owner.0 }),
                    Some(_) => {}
                }

                let rent = self.players[current].pay_rent(property);
                self.players[owner_idx].receive(rent);
                debug!(player = self.players[current].id.0, owner = owner.0, position, rent, money = self.players[current].money, "paid rent");
            }
        }

        Ok(())
    }

    fn eliminate(&mut self, idx: usize) {
        let player = &mut self.players[idx];
        player.eliminate();

        let released = self.board.release_all(player.id);
        debug!(player = player.id.0, strategy = %player.strategy, money = player.money, released, "player eliminated");
    }

    /// Cycles past eliminated players. Wrapping to the front of the turn
    /// order completes a round.
    fn move_to_next_living_player(&mut self) {
        let len = self.players.len();
        for step in 1..=len {
            let next = (self.current + step) % len;
            if self.players[next].is_alive() {
                if next <= self.current {
                    self.round += 1;
                }
                self.current = next;
                return;
            }
        }
    }

    fn check_termination(&mut self) -> Result<(), GameError> {
        let survivors = self.players.iter().filter(|p| p.is_alive()).count();

        match survivors {
            0 => Err(GameError::NoSurvivors),
            1 => {
                let winner = self.players.iter().find(|p| p.is_alive()).ok_or(GameError::NoSurvivors)?.id;
                self.finish(winner, false);
                Ok(())
            }
            _ if self.round >= self.options.max_rounds => {
                let winner = self.leader().ok_or(GameError::NoSurvivors)?;
                self.finish(winner, true);
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Richest living player, ties going to whoever comes first in turn order.
    pub fn leader(&self) -> Option<PlayerId> {
        self.players
            .iter()
            .filter(|p| p.is_alive())
            .max_set_by_key(|p| p.money)
            .first()
            .map(|p| p.id)
    }

    fn finish(&mut self, winner: PlayerId, timed_out: bool) {
        let result = MatchResult {
            winner,
            strategy: self.get_player_by_id(winner).strategy,
            rounds: self.round,
            turns: self.turn,
            timed_out,
        };

        debug!(winner = winner.0, strategy = %result.strategy, rounds = result.rounds, turns = result.turns, timed_out, "match finished");

        self.phase = Phase::Finished(result);
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished(_))
    }

    pub fn is_aborted(&self) -> bool {
        matches!(self.phase, Phase::Aborted)
    }

    pub fn outcome(&self) -> Option<&MatchResult> {
        match &self.phase {
            Phase::Finished(result) => Some(result),
            Phase::Running | Phase::Aborted => None,
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn get_player_by_id(&self, player_id: PlayerId) -> &Player {
        &self.players[player_id.0 as usize]
    }

    pub fn current_player_id(&self) -> PlayerId {
        self.players[self.current].id
    }

    pub fn rounds(&self) -> u32 {
        self.round
    }

    pub fn turns(&self) -> u32 {
        self.turn
    }
}

impl<R: Rng> Display for Banco<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Round {}, turn {}", self.round, self.turn)?;

        for property in self.board.properties() {
            writeln!(f, "  {}", property)?;
        }

        for player in &self.players {
            let status = if player.is_alive() { "" } else { " (eliminated)" };
            writeln!(f, "  P{} {:<9} ${:<5} @{}{}", player.id.0, player.strategy, player.money, player.position, status)?;
        }

        if let Phase::Finished(result) = &self.phase {
            writeln!(f, "{}", result)?;
        }

        Ok(())
    }
}

/// One match on the reference board with every strategy seated once, in
/// shuffled order.
pub fn play_match<R: Rng>(rng: R) -> Result<MatchResult, GameError> {
    Banco::new(rng, Board::reference(), &STRATEGY_ARRAY, &Options::default())?.run()
}
