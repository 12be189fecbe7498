use soroban_sdk::{contractevent, Address, Env};

#[contractevent]
pub struct GameCreated {
    pub game_id: u32,
    pub host: Address,
}

#[contractevent]
pub struct GuessMade {
    pub game_id: u32,
    pub player: Address,
    pub attempt_index: u32,
}

/// Carries no outcome: the plaintext stays with the player.
#[contractevent]
pub struct GuessRevealed {
    pub game_id: u32,
    pub player: Address,
    pub attempt_index: u32,
}

#[contractevent]
pub struct GameWon {
    pub game_id: u32,
    pub winner: Address,
}

#[contractevent]
pub struct GameEnded {
    pub game_id: u32,
    pub host: Address,
}

#[contractevent]
pub struct PrizeReleased {
    pub game_id: u32,
    pub recipient: Address,
    pub amount: i128,
}

pub fn emit_game_created(env: &Env, game_id: u32, host: &Address) {
    GameCreated {
        game_id,
        host: host.clone(),
    }
    .publish(env);
}

pub fn emit_guess_made(env: &Env, game_id: u32, player: &Address, attempt_index: u32) {
    GuessMade {
        game_id,
        player: player.clone(),
        attempt_index,
    }
    .publish(env);
}

pub fn emit_guess_revealed(env: &Env, game_id: u32, player: &Address, attempt_index: u32) {
    GuessRevealed {
        game_id,
        player: player.clone(),
        attempt_index,
    }
    .publish(env);
}

pub fn emit_game_won(env: &Env, game_id: u32, winner: &Address) {
    GameWon {
        game_id,
        winner: winner.clone(),
    }
    .publish(env);
}

pub fn emit_game_ended(env: &Env, game_id: u32, host: &Address) {
    GameEnded {
        game_id,
        host: host.clone(),
    }
    .publish(env);
}

pub fn emit_prize_released(env: &Env, game_id: u32, recipient: &Address, amount: i128) {
    PrizeReleased {
        game_id,
        recipient: recipient.clone(),
        amount,
    }
    .publish(env);
}
