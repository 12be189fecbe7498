use soroban_sdk::{Address, BytesN, Env};

use crate::{
    types::{EncryptedInput, Outcome},
    EncryptionProviderClient, Error,
};

fn provider(env: &Env) -> EncryptionProviderClient<'_> {
    let config = crate::storage::get_config(env);
    EncryptionProviderClient::new(env, &config.provider)
}

/// Accepts `input` only if the provider confirms it was encrypted by `owner`.
/// On success the contract may compute on the handle.
pub fn validate_input(env: &Env, input: &EncryptedInput, owner: &Address) -> Result<(), Error> {
    let valid = provider(env).validate(
        &env.current_contract_address(),
        &input.handle,
        &input.proof,
        owner,
    );
    if !valid {
        return Err(Error::InvalidCiphertext);
    }
    Ok(())
}

/// Encrypted tri-state of `guess` against `secret`. The result is
/// decryptable by the contract, `player` and `viewer`, nobody else.
/// Resubmitting the secret handle itself is rejected.
pub fn compare(
    env: &Env,
    secret: &BytesN<32>,
    guess: &EncryptedInput,
    player: &Address,
    viewer: &Option<Address>,
) -> Result<BytesN<32>, Error> {
    if guess.handle == *secret {
        return Err(Error::InvalidCiphertext);
    }
    validate_input(env, guess, player)?;

    let fhe = provider(env);
    let this = env.current_contract_address();
    let result = fhe.compare(&this, secret, &guess.handle);

    fhe.allow(&this, &result, player);
    if let Some(viewer) = viewer {
        fhe.allow(&this, &result, viewer);
    }

    Ok(result)
}

/// Decrypts `result` for `requester`, subject to the provider's ACL.
pub fn decrypt_outcome(
    env: &Env,
    result: &BytesN<32>,
    requester: &Address,
) -> Result<Outcome, Error> {
    let code = provider(env)
        .decrypt_for(result, requester)
        .ok_or(Error::Unauthorized)?;
    Outcome::from_code(code).ok_or(Error::InvalidCiphertext)
}
