use anchor_lang::prelude::*;

use crate::{constants::MAX_TICKETS_LIMIT, error::LotteryError};

// Space calculation:
// 8 (discriminator) +
// 32 (admin) +
// 32 (treasury) +
// 8 (ticket_cost) +
// 8 (tickets_available) +
// 8 (max_tickets) +
// 4 (length of players) +
// 32 * max_tickets (players) +
// 1 (bump)
pub const fn lottery_account_size(max_tickets: u64) -> usize {
    8 + 32 + 32 + 8 + 8 + 8 + 4 + 32 * max_tickets as usize + 1
}

/// A lamport transfer the host has to carry out after a successful call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Payout {
    pub recipient: Pubkey,
    pub amount: u64,
}

/// Ticket ledger for the current round.
///
/// The position of an entry in `players` is its ticket index, so indices are
/// dense and assigned in purchase order. Between calls
/// `players.len() + tickets_available == max_tickets` holds.
#[account]
pub struct Lottery {
    pub admin: Pubkey,
    pub treasury: Pubkey,
    pub ticket_cost: u64,
    pub tickets_available: u64,
    pub max_tickets: u64,
    pub players: Vec<Pubkey>,
    pub bump: u8,
}

impl Payout {
    /// Fails with `WinnerMismatch` unless `account` is the payout's recipient.
    pub fn check_recipient(&self, account: Pubkey) -> Result<()> {
        require_keys_eq!(self.recipient, account, LotteryError::WinnerMismatch);
        Ok(())
    }
}

impl Lottery {
    /// Sets up a fresh ledger with no tickets sold.
    pub fn open(
        &mut self,
        admin: Pubkey,
        treasury: Pubkey,
        ticket_cost: u64,
        max_tickets: u64,
        bump: u8,
    ) -> Result<()> {
        require!(ticket_cost > 0, LotteryError::InvalidTicketCost);
        require!(
            max_tickets > 0 && max_tickets <= MAX_TICKETS_LIMIT,
            LotteryError::InvalidMaxTickets
        );

        self.admin = admin;
        self.treasury = treasury;
        self.ticket_cost = ticket_cost;
        self.max_tickets = max_tickets;
        self.tickets_available = max_tickets;
        self.players = Vec::new();
        self.bump = bump;
        Ok(())
    }

    pub fn tickets_sold(&self) -> u64 {
        self.players.len() as u64
    }

    /// Sells `ticket_count` tickets to `buyer` for `payment_amount` lamports.
    ///
    /// Every check runs before the ledger is touched, so a rejected purchase
    /// leaves it exactly as it was. Returns the change owed to the buyer, if
    /// the payment exceeded the price of the tickets.
    ///
    /// # Errors
    /// - `SoldOut` if no tickets remain
    /// - `InvalidTicketCount` if `ticket_count` is zero
    /// - `InsufficientPayment` if the payment does not cover the tickets
    /// - `Oversold` if more tickets are requested than remain
    pub fn buy_ticket(
        &mut self,
        ticket_count: u64,
        payment_amount: u64,
        buyer: Pubkey,
    ) -> Result<Option<Payout>> {
        require!(self.tickets_available > 0, LotteryError::SoldOut);
        require!(ticket_count > 0, LotteryError::InvalidTicketCount);

        // A price beyond u64 is more than any payment can cover
        let price = self
            .ticket_cost
            .checked_mul(ticket_count)
            .ok_or(LotteryError::InsufficientPayment)?;
        require!(payment_amount >= price, LotteryError::InsufficientPayment);
        require!(
            ticket_count <= self.tickets_available,
            LotteryError::Oversold
        );

        self.players
            .extend(std::iter::repeat(buyer).take(ticket_count as usize));
        self.tickets_available -= ticket_count;

        let change = payment_amount - price;
        Ok((change > 0).then_some(Payout {
            recipient: buyer,
            amount: change,
        }))
    }

    /// Index of the ticket that wins for `random_number`.
    pub fn winner_index(&self, random_number: u64) -> u64 {
        random_number % self.max_tickets
    }

    /// Draws the winner of a sold-out round and resets the ledger.
    ///
    /// `balance` is everything the treasury can pay out; all of it goes to
    /// the winner. The draw is only as fair as `random_number`.
    ///
    /// # Errors
    /// - `Unauthorized` if `caller` is not the admin
    /// - `RoundNotFinished` if tickets remain unsold
    pub fn end_game(
        &mut self,
        random_number: u64,
        caller: Pubkey,
        balance: u64,
    ) -> Result<Payout> {
        require_keys_eq!(caller, self.admin, LotteryError::Unauthorized);
        require!(self.tickets_available == 0, LotteryError::RoundNotFinished);

        let winner = self
            .players
            .get(self.winner_index(random_number) as usize)
            .copied()
            .ok_or(LotteryError::RoundNotFinished)?;

        self.players.clear();
        self.tickets_available = self.max_tickets;

        Ok(Payout {
            recipient: winner,
            amount: balance,
        })
    }
}
