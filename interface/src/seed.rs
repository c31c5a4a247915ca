//! Recipe seeds and their canonical ordering

use {crate::error::RecipeError, solana_pubkey::Pubkey, std::ops::Deref};

/// One `(mint, quantity)` pair contributing to a recipe
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Seed {
    /// Mint of the seed token
    pub mint: Pubkey,
    /// Quantity of the seed token in base units
    pub quantity: u64,
}

impl Seed {
    /// Creates a new seed
    pub const fn new(mint: Pubkey, quantity: u64) -> Self {
        Self { mint, quantity }
    }
}

/// Non-empty sequence of seeds in canonical order: ascending by the raw
/// bytes of each mint address.
///
/// The remote program recomputes the recipe digest over the same order, so a
/// `SeedSet` can only be obtained through [`normalize`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SeedSet(Vec<Seed>);

impl SeedSet {
    /// Seeds in canonical order
    pub fn seeds(&self) -> &[Seed] {
        &self.0
    }

    /// Seed quantities in canonical order
    pub fn quantities(&self) -> impl Iterator<Item = u64> + '_ {
        self.0.iter().map(|seed| seed.quantity)
    }

    /// Seed mints in canonical order
    pub fn mints(&self) -> impl Iterator<Item = &Pubkey> + '_ {
        self.0.iter().map(|seed| &seed.mint)
    }
}

impl Deref for SeedSet {
    type Target = [Seed];

    fn deref(&self) -> &[Seed] {
        &self.0
    }
}

impl IntoIterator for SeedSet {
    type Item = Seed;
    type IntoIter = std::vec::IntoIter<Seed>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Validates `seeds` and returns a new, canonically ordered [`SeedSet`].
///
/// The caller's slice is left untouched. Fails when `seeds` is empty or when
/// the same mint appears twice.
pub fn normalize(seeds: &[Seed]) -> Result<SeedSet, RecipeError> {
    if seeds.is_empty() {
        return Err(RecipeError::no_seeds());
    }

    let mut sorted = seeds.to_vec();
    sorted.sort_by(|a, b| a.mint.as_ref().cmp(b.mint.as_ref()));

    if let Some(pair) = sorted.windows(2).find(|pair| pair[0].mint == pair[1].mint) {
        return Err(RecipeError::validation(
            "seeds",
            format!("mint {} appears more than once", pair[0].mint),
        ));
    }

    Ok(SeedSet(sorted))
}
