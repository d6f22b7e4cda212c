use crate::prelude::*;

#[derive(Accounts)]
pub struct RefreshReserve<'info> {
    #[account(mut)]
    pub reserve: AccountLoader<'info, Reserve>,
    pub clock: Sysvar<'info, Clock>,
}

/// Accrue interest on the reserve.
pub fn handle(ctx: Context<RefreshReserve>) -> Result<()> {
    let mut reserve = ctx.accounts.reserve.load_mut()?;
    accrue(&mut reserve, ctx.accounts.clock.slot)
}

fn accrue(reserve: &mut Reserve, slot: u64) -> Result<()> {
    Ok(())
}
