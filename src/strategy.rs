use std::fmt::{Display, Formatter};
use rand::Rng;
use crate::property::Property;

const DEMANDING_MIN_RENT: i32 = 50;
const CAUTIOUS_RESERVE: i32 = 80;

/// How a player decides whether to buy an unowned property it lands on.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Strategy {
    /// Buys everything.
    Impulsive,
    /// Buys only when the rent is above 50.
    Demanding,
    /// Buys only when at least 80 is left over afterwards.
    Cautious,
    /// Flips a coin.
    Random,
}

pub const STRATEGY_ARRAY: [Strategy; 4] = [
    Strategy::Impulsive,
    Strategy::Demanding,
    Strategy::Cautious,
    Strategy::Random,
];

impl Strategy {
    pub const ALL: [Strategy; 4] = STRATEGY_ARRAY;

    /// Never mutates anything; affordability is the game's concern, not the strategy's.
    pub fn should_buy<R: Rng>(&self, balance: i32, property: &Property, rng: &mut R) -> bool {
        match self {
            Strategy::Impulsive => true,
            Strategy::Demanding => property.rent() > DEMANDING_MIN_RENT,
            Strategy::Cautious => balance - property.price() >= CAUTIOUS_RESERVE,
            Strategy::Random => rng.gen_bool(0.5),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Strategy::Impulsive => "impulsive",
            Strategy::Demanding => "demanding",
            Strategy::Cautious => "cautious",
            Strategy::Random => "random",
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
