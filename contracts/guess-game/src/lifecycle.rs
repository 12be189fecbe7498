use soroban_sdk::{log, Address, Env};

use crate::{
    escrow, events, storage,
    types::{Game, GameState},
    Error,
};

/// Active -> Won(winner), paying the prize to the winner.
pub fn win(env: &Env, game: &mut Game, winner: &Address) -> Result<(), Error> {
    settle(env, game, GameState::Won(winner.clone()), winner)?;
    events::emit_game_won(env, game.id, winner);
    Ok(())
}

/// Active -> Ended(host), returning the prize to the host.
pub fn end(env: &Env, game: &mut Game) -> Result<(), Error> {
    let host = game.host.clone();
    settle(env, game, GameState::Ended(host.clone()), &host)?;
    events::emit_game_ended(env, game.id, &host);
    Ok(())
}

// Terminal states are final, so escrow can be released at most once per game.
fn settle(
    env: &Env,
    game: &mut Game,
    terminal: GameState,
    recipient: &Address,
) -> Result<(), Error> {
    if !game.state.is_active() {
        return Err(Error::GameNotActive);
    }

    game.state = terminal;
    storage::set_game(env, game.id, game);
    escrow::release(env, game.id, recipient)?;

    log!(env, "game {} settled, prize to {}", game.id, recipient.clone());
    Ok(())
}
