use crate::PlayerId;
use crate::strategy::Strategy;

#[derive(Clone, Debug)]
pub struct Player {
    pub id: PlayerId,
    pub strategy: Strategy,
    pub money: i32,
    pub position: usize,
    eliminated: bool,
}

impl Player {
    pub fn new(id: PlayerId, strategy: Strategy, starting_money: i32) -> Self {
        Self {
            id,
            strategy,
            money: starting_money,
            position: 0,
            eliminated: false,
        }
    }

    /// Moves forward `roll` spaces and returns how many times the start was
    /// reached or passed.
    pub fn advance(&mut self, roll: u8, board_len: usize) -> u32 {
        let raw_position = self.position + roll as usize;
        let laps = raw_position / board_len - self.position / board_len;
        self.position = raw_position % board_len;

        laps as u32
    }

    pub fn is_alive(&self) -> bool {
        !self.eliminated
    }

    pub fn is_bankrupt(&self) -> bool {
        self.money < 0
    }

    pub fn eliminate(&mut self) {
        self.eliminated = true;
    }
}
