use soroban_sdk::{contracttype, Address, Env};

use crate::types::{Config, EscrowAccount, Game, GuessRecord};

const GAME_TTL_LEDGERS: u32 = 535_680; // ~30 days at 5s/ledger

#[contracttype]
pub enum DataKey {
    Config,
    NextGameId,
    Game(u32),
    Escrow(u32),
    Attempts(u32, Address),
    Guess(u32, Address, u32),
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(GAME_TTL_LEDGERS, GAME_TTL_LEDGERS);
}

fn bump(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, GAME_TTL_LEDGERS, GAME_TTL_LEDGERS);
}

// --- Config ---

pub fn get_config(env: &Env) -> Config {
    env.storage().instance().get(&DataKey::Config).unwrap()
}

pub fn set_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

// --- Game ids ---

pub fn next_game_id(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::NextGameId)
        .unwrap_or(0)
}

pub fn set_next_game_id(env: &Env, id: u32) {
    env.storage().instance().set(&DataKey::NextGameId, &id);
    bump_instance(env);
}

// --- Games ---

pub fn get_game(env: &Env, game_id: u32) -> Option<Game> {
    env.storage().persistent().get(&DataKey::Game(game_id))
}

pub fn set_game(env: &Env, game_id: u32, game: &Game) {
    let key = DataKey::Game(game_id);
    env.storage().persistent().set(&key, game);
    bump(env, &key);
}

// --- Escrow ---

pub fn get_escrow(env: &Env, game_id: u32) -> Option<EscrowAccount> {
    env.storage().persistent().get(&DataKey::Escrow(game_id))
}

pub fn has_escrow(env: &Env, game_id: u32) -> bool {
    env.storage().persistent().has(&DataKey::Escrow(game_id))
}

pub fn set_escrow(env: &Env, game_id: u32, account: &EscrowAccount) {
    let key = DataKey::Escrow(game_id);
    env.storage().persistent().set(&key, account);
    bump(env, &key);
}

// --- Attempts ---

pub fn get_attempts(env: &Env, game_id: u32, player: &Address) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::Attempts(game_id, player.clone()))
        .unwrap_or(0)
}

pub fn set_attempts(env: &Env, game_id: u32, player: &Address, attempts: u32) {
    let key = DataKey::Attempts(game_id, player.clone());
    env.storage().persistent().set(&key, &attempts);
    bump(env, &key);
}

// --- Guesses ---

pub fn get_guess(
    env: &Env,
    game_id: u32,
    player: &Address,
    attempt_index: u32,
) -> Option<GuessRecord> {
    env.storage()
        .persistent()
        .get(&DataKey::Guess(game_id, player.clone(), attempt_index))
}

pub fn set_guess(
    env: &Env,
    game_id: u32,
    player: &Address,
    attempt_index: u32,
    record: &GuessRecord,
) {
    let key = DataKey::Guess(game_id, player.clone(), attempt_index);
    env.storage().persistent().set(&key, record);
    bump(env, &key);
}
