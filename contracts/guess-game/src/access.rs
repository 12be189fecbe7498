use soroban_sdk::Address;

use crate::{types::Game, Error};

/// `caller` must sign and must be the game's host.
pub fn require_host(game: &Game, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    if *caller != game.host {
        return Err(Error::Unauthorized);
    }
    Ok(())
}
