use anchor_lang::error_code;

#[error_code]
pub enum LotteryError {
    #[msg("No tickets available")]
    SoldOut,
    #[msg("Attached payment does not cover the requested tickets")]
    InsufficientPayment,
    #[msg("Requested more tickets than remain in this round")]
    Oversold,
    #[msg("Only the lottery admin can end the game")]
    Unauthorized,
    #[msg("The game is yet to end")]
    RoundNotFinished,
    #[msg("Not allowed")]
    NotAllowed,
    #[msg("Ticket count must be greater than zero")]
    InvalidTicketCount,
    #[msg("Winner account does not match the drawn ticket")]
    WinnerMismatch,
    #[msg("Ticket cost must be greater than zero")]
    InvalidTicketCost,
    #[msg("Max tickets must be between 1 and the program limit")]
    InvalidMaxTickets,
    InvalidTreasury,
}
