use anchor_lang::solana_program::native_token::LAMPORTS_PER_SOL;

pub const LOTTERY_SEED: &[u8] = b"lottery";
pub const TREASURY_SEED: &[u8] = b"treasury";

/// Ticket price used when `initialize` is not given one: 1 SOL.
pub const DEFAULT_TICKET_COST: u64 = LAMPORTS_PER_SOL;
pub const DEFAULT_MAX_TICKETS: u64 = 4;

// Keeps the players vector inside a single account allocation.
pub const MAX_TICKETS_LIMIT: u64 = 256;
