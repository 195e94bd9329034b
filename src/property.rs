use std::fmt::{Display, Formatter};
use crate::PlayerId;

/// A single space on the board. Only the owner slot ever changes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Property {
    position: usize,
    price: i32,
    rent: i32,
    owner: Option<PlayerId>,
}

impl Property {
    pub fn new(position: usize, price: i32, rent: i32) -> Self {
        Self {
            position,
            price,
            rent,
            owner: None,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn price(&self) -> i32 {
        self.price
    }

    pub fn rent(&self) -> i32 {
        self.rent
    }

    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    pub fn is_available(&self) -> bool {
        self.owner.is_none()
    }

    pub fn set_owner(&mut self, owner: PlayerId) {
        self.owner = Some(owner);
    }

    pub fn clear_owner(&mut self) {
        self.owner = None;
    }
}

impl Display for Property {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.owner {
            Some(owner) => f.write_fmt(format_args!("#{:<2} ${:<4} rent {:<3} P{}", self.position, self.price, self.rent, owner.0)),
            None => f.write_fmt(format_args!("#{:<2} ${:<4} rent {:<3} --", self.position, self.price, self.rent)),
        }
    }
}
