use anyhow::Result;

use lunchpick_core::LunchError;

use super::load_usecase;

/// Resets every pick counter to zero. Allowed once per session; a repeat
/// is informational, not an error.
pub async fn run() -> Result<()> {
    let usecase = load_usecase().await?;

    match usecase.reset_all().await {
        Ok(()) => {
            println!("All pick counters reset to zero.");
            Ok(())
        }
        Err(LunchError::ResetAlreadyUsed) => {
            println!("Pick counters were already reset this session.");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
