use anchor_lang::prelude::*;

use crate::{
    constants::{
        DEFAULT_MAX_TICKETS, DEFAULT_TICKET_COST, LOTTERY_SEED, MAX_TICKETS_LIMIT, TREASURY_SEED,
    },
    state::{lottery_account_size, Lottery, Treasury, TREASURY_ACCOUNT_SIZE},
};

/// Event emitted when the lottery is created
#[event]
pub struct LotteryInitialized {
    /// The pubkey of the lottery
    pub lottery: Pubkey,
    /// The only account allowed to end a game
    pub admin: Pubkey,
    /// Price per ticket in lamports
    pub ticket_cost: u64,
    /// Tickets sold per round
    pub max_tickets: u64,
}

/// Instruction to create the lottery and its treasury.
/// This should be called once; the signer becomes the admin for good.
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `ticket_cost` - Price per ticket in lamports, defaults to 1 SOL
/// * `max_tickets` - Tickets per round, defaults to 4
///
/// # Account Validations
/// * Lottery - New PDA with seed ["lottery"], sized for `max_tickets` players
/// * Treasury - New PDA with seeds ["treasury", lottery_key]
/// * Admin - Signer paying for both accounts
pub fn initialize(
    ctx: Context<Initialize>,
    ticket_cost: Option<u64>,
    max_tickets: Option<u64>,
) -> Result<()> {
    let ticket_cost = ticket_cost.unwrap_or(DEFAULT_TICKET_COST);
    let max_tickets = max_tickets.unwrap_or(DEFAULT_MAX_TICKETS);

    let lottery_key = ctx.accounts.lottery.key();
    let treasury_key = ctx.accounts.treasury.key();
    let admin = ctx.accounts.admin.key();

    ctx.accounts.lottery.open(
        admin,
        treasury_key,
        ticket_cost,
        max_tickets,
        ctx.bumps.lottery,
    )?;
    ctx.accounts.treasury.lottery = lottery_key;
    ctx.accounts.treasury.bump = ctx.bumps.treasury;

    emit!(LotteryInitialized {
        lottery: lottery_key,
        admin,
        ticket_cost,
        max_tickets,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(ticket_cost: Option<u64>, max_tickets: Option<u64>)]
pub struct Initialize<'info> {
    // Clamped here, out of range caps are rejected by the handler
    #[account(
        init,
        payer = admin,
        space = lottery_account_size(
            max_tickets.unwrap_or(DEFAULT_MAX_TICKETS).min(MAX_TICKETS_LIMIT)
        ),
        seeds = [LOTTERY_SEED],
        bump
    )]
    pub lottery: Account<'info, Lottery>,

    #[account(
        init,
        payer = admin,
        space = TREASURY_ACCOUNT_SIZE,
        seeds = [
            TREASURY_SEED,
            lottery.key().as_ref(),
        ],
        bump,
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}
