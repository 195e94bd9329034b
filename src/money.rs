use thiserror::Error;
use crate::player::Player;
use crate::property::Property;

#[derive(Error, Debug, Eq, PartialEq)]
pub enum PurchaseError {
    #[error("property #{0} already has an owner")]
    Unavailable(usize),
    #[error("player cannot pay {price} with {money} in hand")]
    InsufficientFunds { price: i32, money: i32 },
}

impl Player {
    /// A purchase may never leave the buyer below zero.
    pub fn can_afford(&self, property: &Property) -> bool {
        self.money >= property.price()
    }

    pub fn buy(&mut self, property: &mut Property) -> Result<(), PurchaseError> {
        if !property.is_available() {
            return Err(PurchaseError::Unavailable(property.position()));
        }

        if !self.can_afford(property) {
            return Err(PurchaseError::InsufficientFunds {
                price: property.price(),
                money: self.money,
            });
        }

        self.money -= property.price();
        property.set_owner(self.id);

        Ok(())
    }

    /// Rent has no affordability gate; the payer may go negative. Returns the
    /// amount the owner should be credited with.
    pub fn pay_rent(&mut self, property: &Property) -> i32 {
        self.money -= property.rent();
        property.rent()
    }

    pub fn receive(&mut self, amount: i32) {
        self.money += amount;
    }
}
