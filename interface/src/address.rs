//! Recipe address derivation

use {
    crate::{
        encoding::{encode_u64, Salt},
        error::RecipeError,
        get_metadata_address_with_seed_for_program, get_recipe_address_with_seed_for_program,
        seed::SeedSet,
    },
    sha2::{Digest, Sha256},
    solana_pubkey::Pubkey,
};

/// Length of the recipe digest
pub const DIGEST_LEN: usize = 32;

/// A recipe address together with the data it was derived from
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct DerivedAddress {
    /// Program-owned recipe address
    pub address: Pubkey,
    /// Bump seed that moved the address off the curve
    pub bump: u8,
    /// SHA-256 digest over the canonical seeds and salt
    pub digest: [u8; DIGEST_LEN],
}

/// Computes the recipe digest:
/// `sha256(mint_0 || qty_0 || ... || mint_n || qty_n || salt)`, with every
/// quantity encoded by [`encode_u64`] and the salt as its 32-byte field.
pub fn recipe_digest(seeds: &SeedSet, salt: &Salt) -> Result<[u8; DIGEST_LEN], RecipeError> {
    let mut hasher = Sha256::new();
    for seed in seeds.iter() {
        hasher.update(seed.mint.as_ref());
        hasher.update(encode_u64(seed.quantity)?);
    }
    hasher.update(salt.as_bytes());
    Ok(hasher.finalize().into())
}

/// Derives the recipe address for a normalized seed set and salt under
/// `program_id`.
pub fn derive(
    seeds: &SeedSet,
    salt: &Salt,
    program_id: &Pubkey,
) -> Result<DerivedAddress, RecipeError> {
    let digest = recipe_digest(seeds, salt)?;
    let (address, bump) = get_recipe_address_with_seed_for_program(&digest, program_id)
        .ok_or(RecipeError::Derivation {
            seed_kind: "recipe digest",
        })?;

    log::debug!(
        "derived recipe address {} (bump {}) from {} seeds",
        address,
        bump,
        seeds.len()
    );

    Ok(DerivedAddress {
        address,
        bump,
        digest,
    })
}

/// Derives the token metadata account of a recipe's index mint.
pub fn derive_metadata_address(
    recipe_address: &Pubkey,
    metadata_program_id: &Pubkey,
) -> Result<Pubkey, RecipeError> {
    get_metadata_address_with_seed_for_program(recipe_address, metadata_program_id)
        .map(|(address, _)| address)
        .ok_or(RecipeError::Derivation {
            seed_kind: "recipe metadata",
        })
}
