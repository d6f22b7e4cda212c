//! Borrow-lending program entrypoints.

pub mod endpoints;
pub mod models;

/// Refresh a reserve's accrued interest.
pub fn refresh_reserve(ctx: Context<RefreshReserve>) -> Result<()> {
    endpoints::refresh::handle(ctx)
}

/// Deposit liquidity into a reserve.
pub fn deposit(ctx: Context<Deposit>, liquidity_amount: u64) -> Result<()> {
    endpoints::deposit::handle(ctx, liquidity_amount)
}
