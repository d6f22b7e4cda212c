/// A borrower's position.
#[account]
pub struct Obligation {
    pub owner: Pubkey,
    pub reserves: [ObligationReserve; 10],
}

impl Obligation {
    pub fn is_healthy(&self, threshold: Decimal) -> bool {
        self.borrowed_value() <= threshold
    }

    fn borrowed_value(&self) -> Decimal {
        Decimal::zero()
    }
}
