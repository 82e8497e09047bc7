use anchor_lang::prelude::*;

// 8 discriminator, 32 pubkey, 1 bump
pub const TREASURY_ACCOUNT_SIZE: usize = 8 + 32 + 1;

/// Vault holding the lamports collected for the current round.
#[account]
pub struct Treasury {
    pub lottery: Pubkey,
    pub bump: u8,
}

/// Lamports the treasury can pay out while keeping its rent-exempt reserve.
pub fn prize_amount(lamports: u64, rent_exempt_minimum: u64) -> u64 {
    lamports.saturating_sub(rent_exempt_minimum)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RENT: u64 = 1_176_240;

    #[test]
    fn test_prize_keeps_rent_reserve() {
        assert_eq!(prize_amount(RENT + 4_000_000_000, RENT), 4_000_000_000);
        assert_eq!(prize_amount(RENT, RENT), 0);
    }

    #[test]
    fn test_prize_of_underfunded_treasury_is_zero() {
        assert_eq!(prize_amount(RENT - 1, RENT), 0);
        assert_eq!(prize_amount(0, RENT), 0);
    }
}
