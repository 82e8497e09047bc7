use anchor_lang::prelude::*;

use crate::error::LotteryError;

/// Rejects any call that does not match a known instruction, including bare
/// payments. Nothing is read or written and no lamports are accepted.
pub fn reject_unknown_instruction(data: &[u8]) -> Result<()> {
    msg!("Rejecting unknown instruction ({} bytes of data)", data.len());
    err!(LotteryError::NotAllowed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    #[test]
    fn test_unknown_instruction_is_not_allowed() {
        for data in [&b""[..], &[7u8; 8][..]] {
            match reject_unknown_instruction(data).unwrap_err() {
                Error::AnchorError(e) => {
                    assert_eq!(e.error_code_number, u32::from(LotteryError::NotAllowed))
                }
                Error::ProgramError(e) => panic!("unexpected program error: {e:?}"),
            }
        }
    }
}
