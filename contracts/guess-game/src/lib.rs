#![no_std]

//! Number-guessing game over encrypted values.
//!
//! A host stakes a prize in a token and commits to an encrypted secret.
//! Players submit encrypted guesses and get back an encrypted
//! Equal/Lower/Higher result that only they can decrypt. Revealing an Equal
//! result pays the escrowed prize to that player; otherwise the host can end
//! the game and take the prize back.

mod access;
mod attempts;
mod comparison;
mod escrow;
mod events;
mod lifecycle;
mod storage;
pub mod types;


use soroban_sdk::{
    contract, contractclient, contracterror, contractimpl, log, Address, Bytes, BytesN, Env,
};

use types::{
    Config, EncryptedInput, EscrowAccount, Game, GameConfig, GameInfo, GameState, GuessReceipt,
    GuessRecord, Outcome,
};

/// Smallest accepted prize: 0.01 of a 7-decimal asset.
pub const MIN_PRIZE: i128 = 100_000;
pub const MAX_ATTEMPTS_CAP: u32 = 20;
pub const GUESS_MIN: u32 = 1;
pub const GUESS_MAX: u32 = 100;
pub const CIPHERTEXT_BITS: u32 = 8;

/// Encryption provider interface. The `#[contractclient]` macro generates
/// `EncryptionProviderClient` for cross-contract calls.
///
/// Rights on a handle are per account: `validate` grants them to the
/// consumer of a proven input, `compare` to the requester of the result and
/// `allow` lets a holder pass them on.
#[contractclient(name = "EncryptionProviderClient")]
pub trait EncryptionProvider {
    fn validate(
        env: Env,
        consumer: Address,
        handle: BytesN<32>,
        proof: Bytes,
        owner: Address,
    ) -> bool;

    /// Encrypted 0/1/2: `rhs` equal to, below or above `lhs`.
    fn compare(env: Env, requester: Address, lhs: BytesN<32>, rhs: BytesN<32>) -> BytesN<32>;

    fn allow(env: Env, grantor: Address, handle: BytesN<32>, account: Address);

    fn decrypt_for(env: Env, handle: BytesN<32>, requester: Address) -> Option<u32>;
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // Validation
    InvalidCiphertext = 1,
    InvalidMaxAttempts = 2,
    // State
    GameNotFound = 10,
    GameNotActive = 11,
    DoubleRelease = 12,
    AlreadyFunded = 13,
    GuessNotFound = 14,
    AlreadyRevealed = 15,
    NotWinning = 16,
    // Authorization
    Unauthorized = 20,
    // Limits
    MaxAttemptsReached = 30,
    // Funding
    InsufficientPrize = 40,
}

#[contract]
pub struct GuessGameContract;

fn load_game(env: &Env, game_id: u32) -> Result<Game, Error> {
    storage::get_game(env, game_id).ok_or(Error::GameNotFound)
}

#[contractimpl]
impl GuessGameContract {
    /// Deploy: store the encryption provider and the prize token.
    pub fn __constructor(env: Env, provider: Address, token: Address) {
        storage::set_config(&env, &Config { provider, token });
    }

    /// Host opens a game: commits the encrypted secret and stakes `prize`.
    /// Returns the new game id.
    pub fn create_game(
        env: Env,
        host: Address,
        secret: EncryptedInput,
        max_attempts: u32,
        prize: i128,
    ) -> Result<u32, Error> {
        host.require_auth();

        if max_attempts == 0 || max_attempts > MAX_ATTEMPTS_CAP {
            return Err(Error::InvalidMaxAttempts);
        }
        if prize < MIN_PRIZE {
            return Err(Error::InsufficientPrize);
        }
        comparison::validate_input(&env, &secret, &host)?;

        let game_id = storage::next_game_id(&env);
        escrow::fund(&env, game_id, &host, prize)?;

        let game = Game {
            id: game_id,
            host: host.clone(),
            secret: secret.handle,
            secret_proof: secret.proof,
            start_time: env.ledger().timestamp(),
            max_attempts,
            state: GameState::Active,
            prize,
        };
        storage::set_game(&env, game_id, &game);
        storage::set_next_game_id(&env, game_id + 1);
        events::emit_game_created(&env, game_id, &host);

        Ok(game_id)
    }

    /// Player submits an encrypted guess. The returned result handle is
    /// decryptable by the player and, if given, `viewer`.
    pub fn make_guess(
        env: Env,
        game_id: u32,
        player: Address,
        guess: EncryptedInput,
        viewer: Option<Address>,
    ) -> Result<GuessReceipt, Error> {
        player.require_auth();

        let attempt_index = attempts::record(&env, game_id, &player)?;
        let game = load_game(&env, game_id)?;
        let result = comparison::compare(&env, &game.secret, &guess, &player, &viewer)?;

        storage::set_guess(
            &env,
            game_id,
            &player,
            attempt_index,
            &GuessRecord {
                result: result.clone(),
                viewer,
                revealed: false,
            },
        );
        events::emit_guess_made(&env, game_id, &player, attempt_index);

        Ok(GuessReceipt {
            attempt_index,
            result,
        })
    }

    /// Claims a win with a pending guess. Only the player who made it can
    /// claim, and only an Equal result is accepted: anything else fails with
    /// `NotWinning` and leaves no trace in storage. An Equal result on a
    /// still-active game makes that player the winner.
    pub fn reveal_guess(
        env: Env,
        game_id: u32,
        player: Address,
        attempt_index: u32,
    ) -> Result<(), Error> {
        player.require_auth();

        let mut record = storage::get_guess(&env, game_id, &player, attempt_index)
            .ok_or(Error::GuessNotFound)?;
        if record.revealed {
            return Err(Error::AlreadyRevealed);
        }

        let outcome = comparison::decrypt_outcome(&env, &record.result, &player)?;
        if outcome != Outcome::Equal {
            return Err(Error::NotWinning);
        }

        record.revealed = true;
        storage::set_guess(&env, game_id, &player, attempt_index, &record);
        events::emit_guess_revealed(&env, game_id, &player, attempt_index);

        let mut game = load_game(&env, game_id)?;
        if game.state.is_active() {
            lifecycle::win(&env, &mut game, &player)?;
        } else {
            log!(&env, "late winning guess: game={}, player={}", game_id, player);
        }

        Ok(())
    }

    /// Host closes the game and takes the prize back.
    pub fn end_game(env: Env, game_id: u32, caller: Address) -> Result<(), Error> {
        let mut game = load_game(&env, game_id)?;
        access::require_host(&game, &caller)?;
        lifecycle::end(&env, &mut game)
    }

    pub fn get_game_info(env: Env, game_id: u32) -> Result<GameInfo, Error> {
        let game = load_game(&env, game_id)?;
        Ok(GameInfo::from(&game))
    }

    pub fn get_player_attempts(env: Env, game_id: u32, player: Address) -> Result<u32, Error> {
        attempts::count(&env, game_id, &player)
    }

    pub fn get_guess(
        env: Env,
        game_id: u32,
        player: Address,
        attempt_index: u32,
    ) -> Option<GuessRecord> {
        storage::get_guess(&env, game_id, &player, attempt_index)
    }

    pub fn get_escrow(env: Env, game_id: u32) -> Option<EscrowAccount> {
        storage::get_escrow(&env, game_id)
    }

    /// Number of games created so far, which is also the next game id.
    pub fn game_count(env: Env) -> u32 {
        storage::next_game_id(&env)
    }

    pub fn config(env: Env) -> GameConfig {
        let config = storage::get_config(&env);
        GameConfig {
            provider: config.provider,
            token: config.token,
            min_prize: MIN_PRIZE,
            max_attempts_cap: MAX_ATTEMPTS_CAP,
            guess_min: GUESS_MIN,
            guess_max: GUESS_MAX,
            ciphertext_bits: CIPHERTEXT_BITS,
        }
    }
}
