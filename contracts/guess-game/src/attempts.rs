use soroban_sdk::{Address, Env};

use crate::{storage, Error};

/// Counts one guess for `player` and returns its 0-based index.
pub fn record(env: &Env, game_id: u32, player: &Address) -> Result<u32, Error> {
    let game = storage::get_game(env, game_id).ok_or(Error::GameNotFound)?;
    if !game.state.is_active() {
        return Err(Error::GameNotActive);
    }

    let used = storage::get_attempts(env, game_id, player);
    if used >= game.max_attempts {
        return Err(Error::MaxAttemptsReached);
    }

    storage::set_attempts(env, game_id, player, used + 1);
    Ok(used)
}

pub fn count(env: &Env, game_id: u32, player: &Address) -> Result<u32, Error> {
    if storage::get_game(env, game_id).is_none() {
        return Err(Error::GameNotFound);
    }
    Ok(storage::get_attempts(env, game_id, player))
}
