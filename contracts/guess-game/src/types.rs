use soroban_sdk::{contracttype, Address, Bytes, BytesN};

/// Ciphertext handle issued by the encryption provider, with the proof that
/// it is a well-formed encryption made by the submitting account.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EncryptedInput {
    pub handle: BytesN<32>,
    pub proof: Bytes,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GameState {
    Active,
    Won(Address),
    Ended(Address),
}

impl GameState {
    pub fn is_active(&self) -> bool {
        matches!(self, GameState::Active)
    }
}

/// Game record in persistent storage. `secret` and `secret_proof` never
/// leave the contract except as operands handed to the provider.
#[contracttype]
#[derive(Clone, Debug)]
pub struct Game {
    pub id: u32,
    pub host: Address,
    pub secret: BytesN<32>,
    pub secret_proof: Bytes,
    pub start_time: u64,
    pub max_attempts: u32,
    pub state: GameState,
    pub prize: i128,
}

/// Public view of a game.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GameInfo {
    pub id: u32,
    pub host: Address,
    pub start_time: u64,
    pub max_attempts: u32,
    pub state: GameState,
    pub winner: Option<Address>,
    pub prize: i128,
}

impl From<&Game> for GameInfo {
    fn from(game: &Game) -> Self {
        let winner = match &game.state {
            GameState::Won(winner) => Some(winner.clone()),
            _ => None,
        };
        GameInfo {
            id: game.id,
            host: game.host.clone(),
            start_time: game.start_time,
            max_attempts: game.max_attempts,
            state: game.state.clone(),
            winner,
            prize: game.prize,
        }
    }
}

/// Plaintext of a comparison result.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Outcome {
    Equal = 0,
    /// Guess is below the secret.
    Lower = 1,
    /// Guess is above the secret.
    Higher = 2,
}

impl Outcome {
    pub fn from_code(code: u32) -> Option<Outcome> {
        match code {
            0 => Some(Outcome::Equal),
            1 => Some(Outcome::Lower),
            2 => Some(Outcome::Higher),
            _ => None,
        }
    }
}

/// One accepted guess. Only a winning result is ever marked `revealed`;
/// misses stay pending forever, so their direction never reaches storage.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GuessRecord {
    pub result: BytesN<32>,
    pub viewer: Option<Address>,
    pub revealed: bool,
}

/// Returned to the player by `make_guess`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GuessReceipt {
    pub attempt_index: u32,
    pub result: BytesN<32>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EscrowAccount {
    pub balance: i128,
    pub released: bool,
    pub recipient: Option<Address>,
}

/// Deployment configuration, written once by the constructor.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub provider: Address,
    pub token: Address,
}

/// Everything a client needs to build valid calls.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GameConfig {
    pub provider: Address,
    pub token: Address,
    pub min_prize: i128,
    pub max_attempts_cap: u32,
    pub guess_min: u32,
    pub guess_max: u32,
    pub ciphertext_bits: u32,
}
