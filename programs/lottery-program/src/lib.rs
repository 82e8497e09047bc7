use anchor_lang::prelude::*;
use instructions::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;

declare_id!("LoTTeRyTkt5Xm1Lq9fD4vWbN3cEh8uJ2ZpAsKgHr7Yi");

#[program]
pub mod lottery_program {
    use super::*;

    pub fn initialize(
        ctx: Context<Initialize>,
        ticket_cost: Option<u64>,
        max_tickets: Option<u64>,
    ) -> Result<()> {
        instructions::initialize::initialize(ctx, ticket_cost, max_tickets)
    }

    pub fn buy_ticket(ctx: Context<BuyTicket>, ticket_count: u64, payment_amount: u64) -> Result<()> {
        instructions::buy_ticket::buy_ticket(ctx, ticket_count, payment_amount)
    }

    pub fn end_game(ctx: Context<EndGame>, random_number: u64) -> Result<()> {
        instructions::end_game::end_game(ctx, random_number)
    }

    pub fn fallback<'info>(
        _program_id: &Pubkey,
        _accounts: &'info [AccountInfo<'info>],
        data: &[u8],
    ) -> Result<()> {
        instructions::fallback::reject_unknown_instruction(data)
    }
}
