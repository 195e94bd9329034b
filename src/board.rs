use ahash::HashMap;
use lazy_static::lazy_static;
use rand::Rng;
use crate::{GameError, PlayerId};
use crate::property::Property;

pub const BOARD_SIZE: usize = 20;

const MIN_RANDOM_PRICE: i32 = 100;
const MAX_RANDOM_PRICE: i32 = 250;

// (price, rent) in walking order
const REFERENCE_SPACES: [(i32, i32); BOARD_SIZE] = [
    (60, 6),
    (80, 10),
    (100, 15),
    (120, 20),
    (140, 25),
    (160, 30),
    (180, 35),
    (200, 40),
    (220, 45),
    (240, 50),
    (260, 55),
    (280, 60),
    (300, 65),
    (110, 12),
    (130, 18),
    (150, 22),
    (170, 28),
    (190, 32),
    (210, 48),
    (230, 70),
];

lazy_static! {
    static ref REFERENCE_BOARD: Board = Board {
        properties: REFERENCE_SPACES
            .iter()
            .enumerate()
            .map(|(position, (price, rent))| Property::new(position, *price, *rent))
            .collect(),
    };
}

#[derive(Clone, Debug)]
pub struct Board {
    properties: Vec<Property>,
}

impl Board {
    /// Builds a board from properties given in walking order. Positions are
    /// reassigned from that order.
    pub fn new(properties: Vec<Property>) -> Result<Self, GameError> {
        if properties.len() != BOARD_SIZE {
            return Err(GameError::InvalidBoardSize(properties.len()));
        }

        let properties = properties
            .into_iter()
            .enumerate()
            .map(|(position, p)| Property::new(position, p.price(), p.rent()))
            .collect();

        Ok(Self { properties })
    }

    /// The fixed board used for reproducible matches.
    pub fn reference() -> Self {
        REFERENCE_BOARD.clone()
    }

    pub fn uniform(price: i32, rent: i32) -> Self {
        Self {
            properties: (0..BOARD_SIZE).map(|position| Property::new(position, price, rent)).collect(),
        }
    }

    /// Prices drawn from 100..=250, rent is a tenth of the price.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            properties: (0..BOARD_SIZE)
                .map(|position| {
                    let price = rng.gen_range(MIN_RANDOM_PRICE..=MAX_RANDOM_PRICE);
                    Property::new(position, price, price / 10)
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn get(&self, position: usize) -> &Property {
        &self.properties[position % self.properties.len()]
    }

    pub fn get_mut(&mut self, position: usize) -> &mut Property {
        let len = self.properties.len();
        &mut self.properties[position % len]
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn owned_by(&self, owner: PlayerId) -> impl Iterator<Item = &Property> {
        self.properties.iter().filter(move |p| p.owner() == Some(owner))
    }

    /// Returns every property held by `owner` to the bank.
    pub fn release_all(&mut self, owner: PlayerId) -> usize {
        let mut released = 0;
        for property in self.properties.iter_mut().filter(|p| p.owner() == Some(owner)) {
            property.clear_owner();
            released += 1;
        }

        released
    }

    pub fn holdings(&self) -> HashMap<PlayerId, usize> {
        let mut holdings = HashMap::default();
        for owner in self.properties.iter().filter_map(|p| p.owner()) {
            *holdings.entry(owner).or_insert(0) += 1;
        }

        holdings
    }
}
