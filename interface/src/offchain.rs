//! Instruction builders

use {
    crate::{
        address::{derive, derive_metadata_address, DerivedAddress},
        config::RecipeConfig,
        descriptor::{ui_amount_to_base_units, CookRequest, RecipeDescriptor},
        encoding::Salt,
        error::RecipeError,
        instruction::{CookMode, RecipeInstruction},
        seed::{normalize, Seed},
    },
    solana_instruction::{AccountMeta, Instruction},
    solana_pubkey::Pubkey,
};

/// Normalizes `seeds` and derives the recipe address for them and `salt`.
pub fn find_recipe_address(
    config: &RecipeConfig,
    seeds: &[Seed],
    salt: &str,
) -> Result<DerivedAddress, RecipeError> {
    derive(&normalize(seeds)?, &Salt::new(salt), &config.program_id)
}

/// Number of token accounts a `Cook` or `Uncook` instruction expects for a
/// recipe with `seed_count` seeds: one recipe-owned and one requester-owned
/// account per seed, plus two for the index token.
pub fn expected_token_account_count(seed_count: usize) -> Option<usize> {
    seed_count.checked_mul(2)?.checked_add(2)
}

/// Creates `Create` instruction.
pub fn create_recipe_instruction(
    config: &RecipeConfig,
    payer_address: &Pubkey,
    descriptor: &RecipeDescriptor,
) -> Result<Instruction, RecipeError> {
    descriptor.validate()?;
    let seeds = normalize(&descriptor.seeds)?;
    let salt = Salt::new(&descriptor.salt);
    let recipe = derive(&seeds, &salt, &config.program_id)?;
    let metadata_address = derive_metadata_address(&recipe.address, &config.metadata_program_id)?;

    let mut accounts = vec![
        AccountMeta::new(*payer_address, true),
        AccountMeta::new(config.fee_collector, false),
        AccountMeta::new_readonly(config.config, false),
        AccountMeta::new(recipe.address, false),
        AccountMeta::new(metadata_address, false),
        AccountMeta::new_readonly(solana_system_interface::program::id(), false),
        AccountMeta::new_readonly(config.token_program_id, false),
        AccountMeta::new_readonly(solana_sdk_ids::sysvar::rent::id(), false),
        AccountMeta::new_readonly(config.metadata_program_id, false),
    ];
    accounts.extend(
        seeds
            .mints()
            .map(|mint| AccountMeta::new_readonly(*mint, false)),
    );

    let data = RecipeInstruction::Create {
        quantities: seeds.quantities().collect(),
        salt,
        name: descriptor.name.clone(),
        symbol: descriptor.symbol.clone(),
        uri: config.metadata_uri(&descriptor.metadata_reference),
    }
    .pack()?;

    log::debug!(
        "built create instruction for recipe {} ({} accounts, {} bytes)",
        recipe.address,
        accounts.len(),
        data.len()
    );
    Ok(Instruction::new_with_bytes(config.program_id, &data, accounts))
}

/// Creates `Cook` or `Uncook` instruction, depending on `mode`.
///
/// `token_accounts` must hold exactly `2 * seeds + 2` addresses and is passed
/// through in the given order.
pub fn use_recipe_instruction(
    config: &RecipeConfig,
    payer_address: &Pubkey,
    request: &CookRequest,
    token_accounts: &[Pubkey],
    mode: CookMode,
) -> Result<Instruction, RecipeError> {
    let seeds = normalize(&request.seeds)?;

    let expected = expected_token_account_count(seeds.len()).ok_or_else(|| {
        RecipeError::validation("seeds", format!("{} seeds is too many", seeds.len()))
    })?;
    if token_accounts.len() != expected {
        return Err(RecipeError::validation(
            "token_accounts",
            format!(
                "expected {} token accounts for {} seeds, found {}",
                expected,
                seeds.len(),
                token_accounts.len()
            ),
        ));
    }

    let amount = ui_amount_to_base_units(&request.requested_quantity, config.decimals)?;

    let salt = Salt::new(&request.salt);
    let recipe = derive(&seeds, &salt, &config.program_id)?;
    if recipe.address != request.address {
        return Err(RecipeError::validation(
            "address",
            format!(
                "expected recipe address {} for the given seeds and salt, found {}",
                recipe.address, request.address
            ),
        ));
    }

    let mut accounts = vec![
        AccountMeta::new(*payer_address, true),
        AccountMeta::new(config.fee_collector, false),
        AccountMeta::new_readonly(config.config, false),
        AccountMeta::new(request.address, false),
        AccountMeta::new_readonly(solana_system_interface::program::id(), false),
        AccountMeta::new_readonly(config.token_program_id, false),
        AccountMeta::new_readonly(solana_sdk_ids::sysvar::rent::id(), false),
    ];
    accounts.extend(
        seeds
            .mints()
            .map(|mint| AccountMeta::new_readonly(*mint, false)),
    );
    for token_account in token_accounts {
        accounts.push(AccountMeta::new(*token_account, false));
    }

    let data = mode
        .instruction(seeds.quantities().collect(), salt, amount)
        .pack()?;

    log::debug!(
        "built {} instruction for recipe {}: {} base units",
        mode,
        request.address,
        amount
    );
    Ok(Instruction::new_with_bytes(config.program_id, &data, accounts))
}
