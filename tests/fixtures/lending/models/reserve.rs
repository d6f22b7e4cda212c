use crate::prelude::*;

/// Lending reserve state, read in place.
#[account(zero_copy)]
pub struct Reserve {
    /// Market this reserve belongs to
    pub lending_market: Pubkey,
    pub liquidity: ReserveLiquidity,
    pub config: ReserveConfig,
}

impl ZeroCopyAccount for Reserve {
    fn space() -> usize {
        8 + std::mem::size_of::<Reserve>()
    }
}

/// Tunable reserve parameters.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReserveConfig {
    /// Optimal utilization rate, as a percentage
    pub optimal_utilization_rate: u8,
    pub fees: ReserveFees,
}

/// Periodic cap snapshot.
pub struct ReserveCapSnapshot {
    pub available_amount: u64,
    pub borrowed_amount: u64,
}

pub struct ReserveFees {
    pub borrow_fee: u64,
}
