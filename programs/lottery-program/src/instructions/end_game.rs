use anchor_lang::prelude::*;

use crate::{
    constants::{LOTTERY_SEED, TREASURY_SEED},
    error::LotteryError,
    state::{prize_amount, Lottery, Treasury, TREASURY_ACCOUNT_SIZE},
};

/// Event emitted when a round is drawn and paid out
#[event]
pub struct GameEnded {
    /// The pubkey of the lottery
    pub lottery: Pubkey,
    /// The winner's address
    pub winner: Pubkey,
    /// Index of the winning ticket
    pub winning_ticket: u64,
    /// Lamports paid to the winner
    pub prize: u64,
}

/// Draws the winner of a sold-out round, pays out the treasury and resets
/// the lottery for the next round.
///
/// This instruction can only be executed when:
/// 1. The signer is the lottery admin
/// 2. Every ticket of the round has been sold
/// 3. The winner account matches the owner of ticket
///    `random_number % max_tickets`
///
/// `random_number` is taken as given. The draw is only as fair as the admin's
/// source for it.
///
/// The prize is the full treasury balance above its rent-exempt reserve.
pub fn end_game(ctx: Context<EndGame>, random_number: u64) -> Result<()> {
    let treasury_account = ctx.accounts.treasury.to_account_info();
    let rent_lamports = Rent::get()?.minimum_balance(TREASURY_ACCOUNT_SIZE);
    let balance = prize_amount(treasury_account.lamports(), rent_lamports);

    let winning_ticket = ctx.accounts.lottery.winner_index(random_number);
    let payout = ctx
        .accounts
        .lottery
        .end_game(random_number, ctx.accounts.admin.key(), balance)?;

    payout.check_recipient(ctx.accounts.winner.key())?;

    treasury_account.sub_lamports(payout.amount)?;
    ctx.accounts
        .winner
        .to_account_info()
        .add_lamports(payout.amount)?;

    emit!(GameEnded {
        lottery: ctx.accounts.lottery.key(),
        winner: payout.recipient,
        winning_ticket,
        prize: payout.amount,
    });

    Ok(())
}

/// Accounts required for the end_game instruction
#[derive(Accounts)]
pub struct EndGame<'info> {
    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump,
        has_one = treasury @ LotteryError::InvalidTreasury,
    )]
    pub lottery: Account<'info, Lottery>,

    #[account(
        mut,
        seeds = [
            TREASURY_SEED,
            lottery.key().as_ref(),
        ],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,

    /// Checked against the lottery admin by the ledger
    pub admin: Signer<'info>,

    /// Receives the prize, must own the drawn ticket
    #[account(mut)]
    pub winner: SystemAccount<'info>,
}
