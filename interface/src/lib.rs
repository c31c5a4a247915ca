//! Recipe program client interface
//!
//! Derives recipe addresses and builds the `Create`, `Cook` and `Uncook`
//! instructions understood by the on-chain Recipe program.
#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub mod address;
pub mod config;
pub mod descriptor;
pub mod encoding;
pub mod error;
pub mod instruction;
pub mod offchain;
pub mod seed;

use solana_pubkey::Pubkey;

solana_pubkey::declare_id!("RcpE6zDzeUCv6mauTpBNtKUSrRvgu7ifjKpf38vEUXv");

pub(crate) fn get_recipe_address_seeds(digest: &[u8; 32]) -> [&[u8]; 1] {
    [&digest[..]]
}

/// Searches for the recipe address and bump seed of a recipe digest under a
/// specific Recipe program deployment. Returns `None` if every bump lands on
/// the curve.
pub fn get_recipe_address_with_seed_for_program(
    digest: &[u8; 32],
    program_id: &Pubkey,
) -> Option<(Pubkey, u8)> {
    Pubkey::try_find_program_address(&get_recipe_address_seeds(digest), program_id)
}

/// Derive the recipe address of a recipe digest under the default deployment
/// ([`id()`]). Other deployments go through
/// [`get_recipe_address_with_seed_for_program`] or
/// [`address::derive`] with their own program id.
pub fn get_recipe_address(digest: &[u8; 32]) -> Option<Pubkey> {
    get_recipe_address_with_seed_for_program(digest, &id()).map(|(address, _)| address)
}

const METADATA_SEED: &[u8] = br"metadata";

pub(crate) fn get_metadata_address_seeds<'a>(
    recipe_address: &'a Pubkey,
    metadata_program_id: &'a Pubkey,
) -> [&'a [u8]; 3] {
    [
        METADATA_SEED,
        metadata_program_id.as_ref(),
        recipe_address.as_ref(),
    ]
}

/// Searches for the token metadata address and bump seed of a recipe's index
/// mint under a specific metadata program.
pub fn get_metadata_address_with_seed_for_program(
    recipe_address: &Pubkey,
    metadata_program_id: &Pubkey,
) -> Option<(Pubkey, u8)> {
    Pubkey::try_find_program_address(
        &get_metadata_address_seeds(recipe_address, metadata_program_id),
        metadata_program_id,
    )
}

/// Derive the token metadata address of a recipe's index mint under the
/// default metadata program ([`config::METADATA_PROGRAM_ID`]). Other
/// deployments go through [`get_metadata_address_with_seed_for_program`] or
/// [`address::derive_metadata_address`].
pub fn get_metadata_address(recipe_address: &Pubkey) -> Option<Pubkey> {
    get_metadata_address_with_seed_for_program(recipe_address, &config::METADATA_PROGRAM_ID)
        .map(|(address, _)| address)
}
