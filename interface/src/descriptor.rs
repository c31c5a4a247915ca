//! Recipe descriptors
//!
//! Callers usually hold recipes as loosely-typed JSON objects. The `*Input`
//! types mirror those objects field for field, and their `TryFrom`
//! conversions are the single place where raw input is checked. Everything
//! downstream works on [`RecipeDescriptor`] and [`CookRequest`].

use {
    crate::{error::RecipeError, seed::Seed},
    serde::{Deserialize, Serialize},
    serde_json::Value,
    solana_pubkey::Pubkey,
    std::str::FromStr,
};

/// Everything needed to create a recipe
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecipeDescriptor {
    /// Seeds in any order
    pub seeds: Vec<Seed>,
    /// Salt string, may be empty
    pub salt: String,
    /// Reference to the off-chain metadata, joined with the gateway prefix
    pub metadata_reference: String,
    /// Display name of the index token
    pub name: String,
    /// Symbol of the index token
    pub symbol: String,
}

impl RecipeDescriptor {
    /// Checks that the metadata fields are filled in
    pub fn validate(&self) -> Result<(), RecipeError> {
        for (field, value) in [
            ("metadata_reference", &self.metadata_reference),
            ("name", &self.name),
            ("symbol", &self.symbol),
        ] {
            if value.is_empty() {
                return Err(RecipeError::validation(field, "must not be empty"));
            }
        }
        Ok(())
    }

    /// Parses and validates a JSON recipe description
    pub fn from_json(json: &str) -> Result<Self, RecipeError> {
        let input: RecipeInput = serde_json::from_str(json)
            .map_err(|e| RecipeError::validation("recipe", e.to_string()))?;
        Self::try_from(input)
    }
}

/// A request to cook or uncook an existing recipe
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CookRequest {
    /// Previously derived recipe address
    pub address: Pubkey,
    /// Seeds in any order
    pub seeds: Vec<Seed>,
    /// Salt string used when the recipe was created
    pub salt: String,
    /// Decimal quantity of index tokens, in human units
    pub requested_quantity: String,
}

impl CookRequest {
    /// Parses and validates a JSON cook request
    pub fn from_json(json: &str) -> Result<Self, RecipeError> {
        let input: CookInput = serde_json::from_str(json)
            .map_err(|e| RecipeError::validation("request", e.to_string()))?;
        Self::try_from(input)
    }
}

/// Raw seed as supplied by a caller
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct SeedInput {
    /// Base58 mint address
    pub mint: Option<String>,
    /// Base-unit quantity as a JSON number or a decimal integer string
    pub quantity: Option<Value>,
}

/// Raw recipe description as supplied by a caller
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeInput {
    /// Seeds in any order
    pub seeds: Option<Vec<SeedInput>>,
    /// Salt string, may be empty but must be present
    pub salt: Option<String>,
    /// Off-chain metadata reference, e.g. an IPFS content id
    pub metadata_reference: Option<String>,
    /// Display name of the index token
    pub name: Option<String>,
    /// Symbol of the index token
    pub symbol: Option<String>,
}

/// Raw cook request as supplied by a caller
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CookInput {
    /// Base58 recipe address
    pub address: Option<String>,
    /// Seeds in any order
    pub seeds: Option<Vec<SeedInput>>,
    /// Salt string used when the recipe was created
    pub salt: Option<String>,
    /// Decimal quantity as a JSON number or string
    pub requested_quantity: Option<Value>,
}

impl TryFrom<RecipeInput> for RecipeDescriptor {
    type Error = RecipeError;

    fn try_from(input: RecipeInput) -> Result<Self, Self::Error> {
        let descriptor = Self {
            seeds: parse_seeds(input.seeds)?,
            salt: input.salt.ok_or_else(|| RecipeError::missing("salt"))?,
            metadata_reference: input
                .metadata_reference
                .ok_or_else(|| RecipeError::missing("metadata_reference"))?,
            name: input.name.ok_or_else(|| RecipeError::missing("name"))?,
            symbol: input.symbol.ok_or_else(|| RecipeError::missing("symbol"))?,
        };
        descriptor.validate()?;
        Ok(descriptor)
    }
}

impl TryFrom<CookInput> for CookRequest {
    type Error = RecipeError;

    fn try_from(input: CookInput) -> Result<Self, Self::Error> {
        let address = input.address.ok_or_else(|| RecipeError::missing("address"))?;
        let address = parse_address("address", &address)?;
        let requested_quantity = match input.requested_quantity {
            Some(Value::String(text)) => text,
            Some(Value::Number(number)) => number.to_string(),
            Some(other) => {
                return Err(RecipeError::validation(
                    "requested_quantity",
                    format!("expected a decimal number, found {}", other),
                ))
            }
            None => return Err(RecipeError::missing("requested_quantity")),
        };

        Ok(Self {
            address,
            seeds: parse_seeds(input.seeds)?,
            salt: input.salt.ok_or_else(|| RecipeError::missing("salt"))?,
            requested_quantity,
        })
    }
}

fn parse_address(field: &str, value: &str) -> Result<Pubkey, RecipeError> {
    Pubkey::from_str(value).map_err(|_| {
        RecipeError::validation(field, format!("`{}` is not a valid address", value))
    })
}

fn parse_seeds(seeds: Option<Vec<SeedInput>>) -> Result<Vec<Seed>, RecipeError> {
    let seeds = seeds.ok_or_else(|| RecipeError::missing("seeds"))?;
    if seeds.is_empty() {
        return Err(RecipeError::no_seeds());
    }

    seeds
        .into_iter()
        .enumerate()
        .map(|(i, seed)| {
            let mint_field = format!("seeds[{}].mint", i);
            let quantity_field = format!("seeds[{}].quantity", i);

            let mint = seed
                .mint
                .ok_or_else(|| RecipeError::missing(mint_field.as_str()))?;
            let mint = parse_address(&mint_field, &mint)?;

            let quantity = match seed.quantity {
                Some(Value::Number(number)) => number.as_u64(),
                Some(Value::String(text)) => text.trim().parse::<u64>().ok(),
                Some(_) => None,
                None => return Err(RecipeError::missing(quantity_field.as_str())),
            }
            .ok_or_else(|| {
                RecipeError::validation(
                    quantity_field.as_str(),
                    "expected an integer between 0 and 2^64 - 1",
                )
            })?;

            Ok(Seed::new(mint, quantity))
        })
        .collect()
}

/// Converts a decimal amount in human units into base units, scaling by
/// `10^decimals` and truncating toward zero.
///
/// Accepts an optional leading `+`, a fractional part and an exponent
/// (`"2.5"`, `"0.0000019"`, `"1e3"`). The conversion is exact; no floating
/// point is involved.
pub fn ui_amount_to_base_units(amount: &str, decimals: u8) -> Result<u64, RecipeError> {
    const FIELD: &str = "requested_quantity";
    let invalid = || {
        RecipeError::validation(
            FIELD,
            format!("`{}` is not a finite non-negative decimal number", amount),
        )
    };
    let overflow = || RecipeError::Encoding {
        width: u64::BITS,
        value: amount.to_string(),
    };

    let text = amount.trim();
    let text = text.strip_prefix('+').unwrap_or(text);
    if text.starts_with('-') {
        return Err(RecipeError::validation(
            FIELD,
            format!("`{}` must not be negative", amount),
        ));
    }

    let (mantissa, exponent) = match text.split_once(|c: char| c == 'e' || c == 'E') {
        Some((mantissa, exponent)) => (mantissa, parse_exponent(exponent).ok_or_else(invalid)?),
        None => (text, 0),
    };

    let (integer, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (integer.is_empty() && fraction.is_empty())
        || !all_digits(integer)
        || !all_digits(fraction)
    {
        return Err(invalid());
    }

    let digits = format!("{}{}", integer, fraction);
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return Ok(0);
    }

    // Number of decimal places the digit string must move to the left
    // (negative) or right (positive) to land in base units.
    let shift = i64::from(decimals)
        .saturating_add(exponent)
        .saturating_sub(i64::try_from(fraction.len()).unwrap_or(i64::MAX));

    let scaled = if shift >= 0 {
        let zeros = usize::try_from(shift).unwrap_or(usize::MAX);
        if digits.len().saturating_add(zeros) > 20 {
            return Err(overflow());
        }
        format!("{}{}", digits, "0".repeat(zeros))
    } else {
        let drop = usize::try_from(shift.unsigned_abs()).unwrap_or(usize::MAX);
        if drop >= digits.len() {
            return Ok(0);
        }
        digits[..digits.len().saturating_sub(drop)].to_string()
    };

    if scaled.len() > 20 {
        return Err(overflow());
    }
    let value = scaled.parse::<u128>().map_err(|_| invalid())?;
    u64::try_from(value).map_err(|_| overflow())
}

/// Parses a signed decimal exponent of any length, saturating at the `i64`
/// bounds. Returns `None` unless `text` is an optional sign followed by one or
/// more ASCII digits.
fn parse_exponent(text: &str) -> Option<i64> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Only overflow can fail once the digits are checked
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}
