//! Program instructions

use {
    crate::{
        encoding::{encode_length_prefixed_string, encode_u32, encode_u64, Salt, SALT_LEN},
        error::RecipeError,
    },
    solana_program_error::ProgramError,
    std::{fmt, str::FromStr},
};

/// Tag of the `Create` instruction
pub const CREATE_OPCODE: u8 = 1;
/// Tag of the `Cook` instruction
pub const COOK_OPCODE: u8 = 2;
/// Tag of the `Uncook` instruction
pub const UNCOOK_OPCODE: u8 = 3;

/// Instructions supported by the Recipe program
#[derive(Clone, Debug, PartialEq)]
#[repr(u8)]
pub enum RecipeInstruction {
    /// Create a recipe and the metadata of its index mint.
    ///
    /// Accounts expected by this instruction:
    ///
    /// 0. `[ws]` Payer
    /// 1. `[w]` Fee collector
    /// 2. `[]` Program configuration
    /// 3. `[w]` Recipe, address must be derived from the seeds and salt
    /// 4. `[w]` Index mint metadata
    /// 5. `[]` System program
    /// 6. `[]` SPL Token program
    /// 7. `[]` Rent sysvar
    /// 8. `[]` Token metadata program
    /// 9. `..9+N` `[]` Seed mints, in canonical order
    Create {
        /// Base-unit quantity of every seed, in canonical order
        quantities: Vec<u64>,
        /// Salt field
        salt: Salt,
        /// Index token name
        name: String,
        /// Index token symbol
        symbol: String,
        /// Index token metadata URI
        uri: String,
    },

    /// Cook index tokens: deposit seed tokens into the recipe and mint the
    /// index token to the payer.
    ///
    /// Accounts expected by this instruction:
    ///
    /// 0. `[ws]` Payer
    /// 1. `[w]` Fee collector
    /// 2. `[]` Program configuration
    /// 3. `[w]` Recipe
    /// 4. `[]` System program
    /// 5. `[]` SPL Token program
    /// 6. `[]` Rent sysvar
    /// 7. `..7+N` `[]` Seed mints, in canonical order
    /// 8. `..7+N+2N+2` `[w]` Token accounts: two per seed plus two for the
    ///    index token
    Cook {
        /// Base-unit quantity of every seed, in canonical order
        quantities: Vec<u64>,
        /// Salt field
        salt: Salt,
        /// little-endian `u64` base-unit amount of index tokens to cook
        amount: u64,
    },

    /// Uncook index tokens: burn index tokens and release the seed tokens
    /// held by the recipe.
    ///
    /// Accounts expected by this instruction are the same as for
    /// [`Cook`](enum.RecipeInstruction.html#variant.Cook).
    Uncook {
        /// Base-unit quantity of every seed, in canonical order
        quantities: Vec<u64>,
        /// Salt field
        salt: Salt,
        /// little-endian `u64` base-unit amount of index tokens to uncook
        amount: u64,
    },
}

impl RecipeInstruction {
    /// Tag byte leading the packed instruction
    pub fn opcode(&self) -> u8 {
        match self {
            RecipeInstruction::Create { .. } => CREATE_OPCODE,
            RecipeInstruction::Cook { .. } => COOK_OPCODE,
            RecipeInstruction::Uncook { .. } => UNCOOK_OPCODE,
        }
    }

    /// Packs a [`RecipeInstruction`](enum.RecipeInstruction.html) into a byte
    /// array.
    pub fn pack(&self) -> Result<Vec<u8>, RecipeError> {
        let mut buf = vec![self.opcode()];
        match self {
            RecipeInstruction::Create {
                quantities,
                salt,
                name,
                symbol,
                uri,
            } => {
                pack_quantities_and_salt(&mut buf, quantities, salt)?;
                buf.extend_from_slice(&encode_length_prefixed_string(name)?);
                buf.extend_from_slice(&encode_length_prefixed_string(symbol)?);
                buf.extend_from_slice(&encode_length_prefixed_string(uri)?);
            }
            RecipeInstruction::Cook {
                quantities,
                salt,
                amount,
            }
            | RecipeInstruction::Uncook {
                quantities,
                salt,
                amount,
            } => {
                pack_quantities_and_salt(&mut buf, quantities, salt)?;
                buf.extend_from_slice(&encode_u64(*amount)?);
            }
        }
        Ok(buf)
    }

    /// Unpacks a byte array into a
    /// [`RecipeInstruction`](enum.RecipeInstruction.html).
    pub fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let (&opcode, mut rest) = input
            .split_first()
            .ok_or(ProgramError::InvalidInstructionData)?;

        let instruction = match opcode {
            CREATE_OPCODE => {
                let (quantities, salt) = unpack_quantities_and_salt(&mut rest)?;
                RecipeInstruction::Create {
                    quantities,
                    salt,
                    name: unpack_string(&mut rest)?,
                    symbol: unpack_string(&mut rest)?,
                    uri: unpack_string(&mut rest)?,
                }
            }
            COOK_OPCODE | UNCOOK_OPCODE => {
                let (quantities, salt) = unpack_quantities_and_salt(&mut rest)?;
                let amount = unpack_u64(&mut rest)?;
                if opcode == COOK_OPCODE {
                    RecipeInstruction::Cook {
                        quantities,
                        salt,
                        amount,
                    }
                } else {
                    RecipeInstruction::Uncook {
                        quantities,
                        salt,
                        amount,
                    }
                }
            }
            _ => return Err(ProgramError::InvalidInstructionData),
        };

        if !rest.is_empty() {
            return Err(ProgramError::InvalidInstructionData);
        }
        Ok(instruction)
    }
}

fn pack_quantities_and_salt(
    buf: &mut Vec<u8>,
    quantities: &[u64],
    salt: &Salt,
) -> Result<(), RecipeError> {
    buf.extend_from_slice(&encode_u32(quantities.len())?);
    for quantity in quantities {
        buf.extend_from_slice(&encode_u64(*quantity)?);
    }
    buf.extend_from_slice(salt.as_bytes());
    Ok(())
}

fn take<'a>(input: &mut &'a [u8], len: usize) -> Result<&'a [u8], ProgramError> {
    if input.len() < len {
        return Err(ProgramError::InvalidInstructionData);
    }
    let (head, tail) = input.split_at(len);
    *input = tail;
    Ok(head)
}

fn unpack_u32(input: &mut &[u8]) -> Result<u32, ProgramError> {
    let bytes = take(input, 4)?;
    Ok(u32::from_le_bytes(
        bytes.try_into().map_err(|_| ProgramError::InvalidInstructionData)?,
    ))
}

fn unpack_u64(input: &mut &[u8]) -> Result<u64, ProgramError> {
    let bytes = take(input, 8)?;
    Ok(u64::from_le_bytes(
        bytes.try_into().map_err(|_| ProgramError::InvalidInstructionData)?,
    ))
}

fn unpack_string(input: &mut &[u8]) -> Result<String, ProgramError> {
    let len = unpack_u32(input)? as usize;
    let bytes = take(input, len)?;
    String::from_utf8(bytes.to_vec()).map_err(|_| ProgramError::InvalidInstructionData)
}

fn unpack_quantities_and_salt(input: &mut &[u8]) -> Result<(Vec<u64>, Salt), ProgramError> {
    let count = unpack_u32(input)? as usize;
    // Never trust the count for the allocation size
    let mut quantities = Vec::with_capacity(count.min(input.len() / 8));
    for _ in 0..count {
        quantities.push(unpack_u64(input)?);
    }
    let salt: [u8; SALT_LEN] = take(input, SALT_LEN)?
        .try_into()
        .map_err(|_| ProgramError::InvalidInstructionData)?;
    Ok((quantities, Salt::from_bytes(salt)))
}

/// Direction of a recipe use
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CookMode {
    /// Turn seed tokens into index tokens
    Cook,
    /// Turn index tokens back into seed tokens
    Uncook,
}

impl CookMode {
    /// Instruction tag for this mode
    pub const fn opcode(self) -> u8 {
        match self {
            CookMode::Cook => COOK_OPCODE,
            CookMode::Uncook => UNCOOK_OPCODE,
        }
    }

    /// Builds the instruction for this mode
    pub fn instruction(self, quantities: Vec<u64>, salt: Salt, amount: u64) -> RecipeInstruction {
        match self {
            CookMode::Cook => RecipeInstruction::Cook {
                quantities,
                salt,
                amount,
            },
            CookMode::Uncook => RecipeInstruction::Uncook {
                quantities,
                salt,
                amount,
            },
        }
    }
}

impl FromStr for CookMode {
    type Err = RecipeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cook" => Ok(CookMode::Cook),
            "uncook" => Ok(CookMode::Uncook),
            other => Err(RecipeError::validation(
                "mode",
                format!("expected `cook` or `uncook`, found `{}`", other),
            )),
        }
    }
}

impl fmt::Display for CookMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CookMode::Cook => f.write_str("cook"),
            CookMode::Uncook => f.write_str("uncook"),
        }
    }
}
