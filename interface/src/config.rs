//! Deployment configuration

use {
    crate::error::RecipeError,
    serde::{Deserialize, Serialize},
    serde_with::{serde_as, DisplayFromStr},
    solana_pubkey::Pubkey,
};

/// Account collecting recipe program fees on the default deployment
pub const FEE_COLLECTOR_ADDRESS: Pubkey =
    solana_pubkey::pubkey!("FeeCjHDipTwxus6AgHp5CgJz8PKUgeZ4yeehoescaVmD");

/// Recipe program configuration account on the default deployment
pub const CONFIG_ADDRESS: Pubkey =
    solana_pubkey::pubkey!("CfgEcNANFMFgp2WLH6dj5LW4gJwPLxhwT1UspLiXz7jW");

/// `Metaplex` token metadata program
pub const METADATA_PROGRAM_ID: Pubkey =
    solana_pubkey::pubkey!("metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s");

/// Gateway prepended to metadata references to form the token URI
pub const DEFAULT_GATEWAY_PREFIX: &str = "https://ipfs.io/ipfs/";

/// Decimal places of the recipe index token
pub const DEFAULT_DECIMALS: u8 = 6;

/// Addresses and constants of a recipe program deployment.
///
/// Every builder takes the configuration explicitly so that alternate
/// deployments (local validators, devnet) can be targeted without touching
/// globals.
#[serde_as]
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeConfig {
    /// Recipe program
    #[serde_as(as = "DisplayFromStr")]
    pub program_id: Pubkey,
    /// Fee collector account
    #[serde_as(as = "DisplayFromStr")]
    pub fee_collector: Pubkey,
    /// Program configuration account
    #[serde_as(as = "DisplayFromStr")]
    pub config: Pubkey,
    /// Token metadata program
    #[serde_as(as = "DisplayFromStr")]
    pub metadata_program_id: Pubkey,
    /// Token program owning the seed and index mints
    #[serde_as(as = "DisplayFromStr")]
    #[serde(default = "spl_token::id")]
    pub token_program_id: Pubkey,
    /// Prefix joined with a metadata reference to form the metadata URI
    #[serde(default = "default_gateway_prefix")]
    pub gateway_prefix: String,
    /// Decimal places used to convert human quantities into base units
    #[serde(default = "default_decimals")]
    pub decimals: u8,
}

fn default_gateway_prefix() -> String {
    DEFAULT_GATEWAY_PREFIX.to_string()
}

fn default_decimals() -> u8 {
    DEFAULT_DECIMALS
}

impl Default for RecipeConfig {
    fn default() -> Self {
        Self {
            program_id: crate::id(),
            fee_collector: FEE_COLLECTOR_ADDRESS,
            config: CONFIG_ADDRESS,
            metadata_program_id: METADATA_PROGRAM_ID,
            token_program_id: spl_token::id(),
            gateway_prefix: default_gateway_prefix(),
            decimals: DEFAULT_DECIMALS,
        }
    }
}

impl RecipeConfig {
    /// Loads a deployment description from JSON. Addresses are base58
    /// strings; `tokenProgramId`, `gatewayPrefix` and `decimals` fall back to
    /// their defaults when absent.
    pub fn from_json(json: &str) -> Result<Self, RecipeError> {
        serde_json::from_str(json)
            .map_err(|e| RecipeError::validation("config", e.to_string()))
    }

    /// Full metadata URI for a metadata reference
    pub fn metadata_uri(&self, metadata_reference: &str) -> String {
        format!("{}{}", self.gateway_prefix, metadata_reference)
    }
}
