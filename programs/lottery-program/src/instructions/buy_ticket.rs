use anchor_lang::{prelude::*, system_program};

use crate::{
    constants::{LOTTERY_SEED, TREASURY_SEED},
    error::LotteryError,
    state::{Lottery, Treasury},
};

/// Event emitted when tickets are purchased
#[event]
pub struct TicketsPurchased {
    /// The pubkey of the lottery
    pub lottery: Pubkey,
    /// The buyer's address
    pub buyer: Pubkey,
    /// Number of tickets purchased
    pub ticket_count: u64,
    /// Amount attached by the buyer in lamports
    pub payment_amount: u64,
    /// Overpayment sent back to the buyer in lamports
    pub change: u64,
    /// Index of the first ticket in this purchase
    pub ticket_start_index: u64,
    /// Tickets left in the round after this purchase
    pub tickets_available: u64,
}

/// Instruction to purchase tickets in the current round
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `ticket_count` - The number of tickets to purchase
/// * `payment_amount` - Lamports attached to the purchase
///
/// The ledger is updated first and rejects the whole purchase if tickets are
/// sold out, the count is zero, the payment is short or the round cannot fit
/// the request. The attached amount then moves into the treasury and any
/// overpayment goes straight back to the buyer.
///
/// # Account Validations
/// * Lottery - The lottery PDA, must reference the given treasury
/// * Treasury - PDA with seeds ["treasury", lottery_key]
/// * Buyer - Signer funding the purchase
pub fn buy_ticket(ctx: Context<BuyTicket>, ticket_count: u64, payment_amount: u64) -> Result<()> {
    let buyer = ctx.accounts.buyer.key();
    let ticket_start_index = ctx.accounts.lottery.tickets_sold();

    let change = ctx
        .accounts
        .lottery
        .buy_ticket(ticket_count, payment_amount, buyer)?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.buyer.to_account_info(),
                to: ctx.accounts.treasury.to_account_info(),
            },
        ),
        payment_amount,
    )?;

    // The treasury is owned by this program, so lamports can be moved directly.
    let change_amount = match change {
        Some(payout) => {
            ctx.accounts
                .treasury
                .to_account_info()
                .sub_lamports(payout.amount)?;
            ctx.accounts
                .buyer
                .to_account_info()
                .add_lamports(payout.amount)?;
            payout.amount
        }
        None => 0,
    };

    emit!(TicketsPurchased {
        lottery: ctx.accounts.lottery.key(),
        buyer,
        ticket_count,
        payment_amount,
        change: change_amount,
        ticket_start_index,
        tickets_available: ctx.accounts.lottery.tickets_available,
    });

    Ok(())
}

/// Accounts required for the buy_ticket instruction
#[derive(Accounts)]
pub struct BuyTicket<'info> {
    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump,
        has_one = treasury @ LotteryError::InvalidTreasury,
    )]
    pub lottery: Account<'info, Lottery>,

    /// Treasury account that receives payment for tickets
    #[account(
        mut,
        seeds = [
            TREASURY_SEED,
            lottery.key().as_ref(),
        ],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(mut)]
    pub buyer: Signer<'info>,

    pub system_program: Program<'info, System>,
}
