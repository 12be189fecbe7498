use soroban_sdk::{log, token, Address, Env};

use crate::{events, storage, types::EscrowAccount, Error};

/// Moves `amount` of the prize token from `from` into the contract and
/// opens the game's escrow account. Only ever called by `create_game`.
pub fn fund(env: &Env, game_id: u32, from: &Address, amount: i128) -> Result<(), Error> {
    if storage::has_escrow(env, game_id) {
        return Err(Error::AlreadyFunded);
    }

    let token_addr = storage::get_config(env).token;
    token::TokenClient::new(env, &token_addr).transfer(
        from,
        &env.current_contract_address(),
        &amount,
    );

    storage::set_escrow(
        env,
        game_id,
        &EscrowAccount {
            balance: amount,
            released: false,
            recipient: None,
        },
    );
    log!(env, "escrow funded: game={}, amount={}", game_id, amount);

    Ok(())
}

/// Pays the whole balance to `recipient` and freezes the account.
/// This is the only path by which funds leave escrow.
pub fn release(env: &Env, game_id: u32, recipient: &Address) -> Result<i128, Error> {
    let mut account = storage::get_escrow(env, game_id).ok_or(Error::GameNotFound)?;
    if account.released {
        return Err(Error::DoubleRelease);
    }

    let amount = account.balance;
    account.balance = 0;
    account.released = true;
    account.recipient = Some(recipient.clone());
    storage::set_escrow(env, game_id, &account);

    let token_addr = storage::get_config(env).token;
    token::TokenClient::new(env, &token_addr).transfer(
        &env.current_contract_address(),
        recipient,
        &amount,
    );

    log!(
        env,
        "escrow released: game={}, to={}, amount={}",
        game_id,
        recipient.clone(),
        amount
    );
    events::emit_prize_released(env, game_id, recipient, amount);

    Ok(amount)
}
