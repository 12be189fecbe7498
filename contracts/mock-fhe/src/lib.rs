#![no_std]

//! In-memory stand-in for a homomorphic encryption provider.
//!
//! Plaintexts live in contract storage behind sha256 handles, so nothing here
//! is confidential. What the mock does reproduce is the provider's access
//! model: a handle can only be computed on or decrypted by accounts on its
//! ACL, and input proofs bind a handle to the account that encrypted it.

use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, log, panic_with_error, xdr::ToXdr,
    Address, Bytes, BytesN, Env,
};


const HANDLE_TTL_LEDGERS: u32 = 535_680;

/// Ciphertext handle plus the proof that it was encrypted by its owner.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EncryptedInput {
    pub handle: BytesN<32>,
    pub proof: Bytes,
}

#[contracttype]
enum DataKey {
    Nonce,
    Plaintext(BytesN<32>),
    Owner(BytesN<32>),
    Allowed(BytesN<32>, Address),
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum MockFheError {
    ValueTooWide = 1,
    UnknownHandle = 2,
    NotAllowed = 3,
}

#[contract]
pub struct MockFhe;

#[contractimpl]
impl MockFhe {
    /// Client-side encryption of an 8-bit value for `owner`.
    pub fn encrypt(env: Env, owner: Address, value: u32) -> EncryptedInput {
        if value > u8::MAX as u32 {
            panic_with_error!(&env, MockFheError::ValueTooWide);
        }
        let handle = next_handle(&env);
        set_plaintext(&env, &handle, value);
        set_owner(&env, &handle, &owner);
        grant(&env, &handle, &owner);
        log!(&env, "mock encrypt: owner={}", owner);

        EncryptedInput {
            proof: input_proof(&env, &handle, &owner),
            handle,
        }
    }

    /// Checks that `handle` was encrypted by `owner` and that `proof` was
    /// issued for that pair. A valid input also lets `consumer` compute on
    /// the handle. Computed handles have no owner and never validate.
    pub fn validate(
        env: Env,
        consumer: Address,
        handle: BytesN<32>,
        proof: Bytes,
        owner: Address,
    ) -> bool {
        consumer.require_auth();

        let encrypted_by: Option<Address> = env
            .storage()
            .persistent()
            .get(&DataKey::Owner(handle.clone()));
        if encrypted_by != Some(owner.clone()) {
            return false;
        }
        if proof != input_proof(&env, &handle, &owner) {
            return false;
        }

        grant(&env, &handle, &consumer);
        true
    }

    /// Encrypted position of `rhs` relative to `lhs`: 0 equal, 1 below, 2 above.
    pub fn compare(env: Env, requester: Address, lhs: BytesN<32>, rhs: BytesN<32>) -> BytesN<32> {
        requester.require_auth();
        if !has_access(&env, &lhs, &requester) || !has_access(&env, &rhs, &requester) {
            panic_with_error!(&env, MockFheError::NotAllowed);
        }

        let a = plaintext(&env, &lhs);
        let b = plaintext(&env, &rhs);
        let code = if b == a {
            0
        } else if b < a {
            1
        } else {
            2
        };

        let handle = next_handle(&env);
        set_plaintext(&env, &handle, code);
        grant(&env, &handle, &requester);
        handle
    }

    pub fn allow(env: Env, grantor: Address, handle: BytesN<32>, account: Address) {
        grantor.require_auth();
        if !has_access(&env, &handle, &grantor) {
            panic_with_error!(&env, MockFheError::NotAllowed);
        }
        grant(&env, &handle, &account);
    }

    /// Selective decryption: `None` unless `requester` is on the handle's ACL.
    pub fn decrypt_for(env: Env, handle: BytesN<32>, requester: Address) -> Option<u32> {
        requester.require_auth();
        if !has_access(&env, &handle, &requester) {
            return None;
        }
        env.storage().persistent().get(&DataKey::Plaintext(handle))
    }

    pub fn is_allowed(env: Env, handle: BytesN<32>, account: Address) -> bool {
        has_access(&env, &handle, &account)
    }
}

fn next_handle(env: &Env) -> BytesN<32> {
    let nonce: u64 = env
        .storage()
        .instance()
        .get(&DataKey::Nonce)
        .unwrap_or(0);
    env.storage().instance().set(&DataKey::Nonce, &(nonce + 1));

    let mut seed = Bytes::from_array(env, &nonce.to_be_bytes());
    seed.append(&env.current_contract_address().to_xdr(env));
    env.crypto().sha256(&seed).into()
}

fn input_proof(env: &Env, handle: &BytesN<32>, owner: &Address) -> Bytes {
    let mut preimage = Bytes::from_array(env, &handle.to_array());
    preimage.append(&owner.clone().to_xdr(env));
    let digest: BytesN<32> = env.crypto().sha256(&preimage).into();
    Bytes::from(digest)
}

fn plaintext(env: &Env, handle: &BytesN<32>) -> u32 {
    match env
        .storage()
        .persistent()
        .get(&DataKey::Plaintext(handle.clone()))
    {
        Some(value) => value,
        None => panic_with_error!(env, MockFheError::UnknownHandle),
    }
}

fn set_plaintext(env: &Env, handle: &BytesN<32>, value: u32) {
    let key = DataKey::Plaintext(handle.clone());
    env.storage().persistent().set(&key, &value);
    env.storage()
        .persistent()
        .extend_ttl(&key, HANDLE_TTL_LEDGERS, HANDLE_TTL_LEDGERS);
}

fn set_owner(env: &Env, handle: &BytesN<32>, owner: &Address) {
    let key = DataKey::Owner(handle.clone());
    env.storage().persistent().set(&key, owner);
    env.storage()
        .persistent()
        .extend_ttl(&key, HANDLE_TTL_LEDGERS, HANDLE_TTL_LEDGERS);
}

fn grant(env: &Env, handle: &BytesN<32>, account: &Address) {
    let key = DataKey::Allowed(handle.clone(), account.clone());
    env.storage().persistent().set(&key, &true);
    env.storage()
        .persistent()
        .extend_ttl(&key, HANDLE_TTL_LEDGERS, HANDLE_TTL_LEDGERS);
}

fn has_access(env: &Env, handle: &BytesN<32>, account: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Allowed(handle.clone(), account.clone()))
        .unwrap_or(false)
}
