use {
    borsh::BorshSerialize,
    recipe_interface::{
        encoding::{encode_u64, Salt},
        error::RecipeError,
        instruction::{CookMode, RecipeInstruction, COOK_OPCODE, CREATE_OPCODE, UNCOOK_OPCODE},
    },
    std::str::FromStr,
};

fn salt_bytes(salt: &str) -> Vec<u8> {
    Salt::new(salt).as_bytes().to_vec()
}

#[test]
fn test_pack_unpack_create() {
    let instruction = RecipeInstruction::Create {
        quantities: vec![1, 2],
        salt: Salt::new("s"),
        name: "Index".to_string(),
        symbol: "IDX".to_string(),
        uri: "u".to_string(),
    };
    let packed = instruction.pack().unwrap();

    let mut expected = vec![CREATE_OPCODE, 2, 0, 0, 0];
    expected.extend_from_slice(&[1, 0, 0, 0, 0, 0, 0, 0]);
    expected.extend_from_slice(&[2, 0, 0, 0, 0, 0, 0, 0]);
    expected.extend_from_slice(&salt_bytes("s"));
    expected.extend_from_slice(&[5, 0, 0, 0]);
    expected.extend_from_slice(b"Index");
    expected.extend_from_slice(&[3, 0, 0, 0]);
    expected.extend_from_slice(b"IDX");
    expected.extend_from_slice(&[1, 0, 0, 0]);
    expected.extend_from_slice(b"u");
    assert_eq!(packed, expected);

    let unpacked = RecipeInstruction::unpack(&packed).unwrap();
    assert_eq!(unpacked, instruction);
}

#[test]
fn test_pack_unpack_cook() {
    let instruction = RecipeInstruction::Cook {
        quantities: vec![42],
        salt: Salt::new(""),
        amount: 2_500_000,
    };
    let packed = instruction.pack().unwrap();

    let mut expected = vec![COOK_OPCODE, 1, 0, 0, 0, 42, 0, 0, 0, 0, 0, 0, 0];
    expected.extend_from_slice(&[0u8; 32]);
    expected.extend_from_slice(&2_500_000u64.to_le_bytes());
    assert_eq!(packed, expected);
    assert_eq!(packed.len(), 1 + 4 + 8 + 32 + 8);

    let unpacked = RecipeInstruction::unpack(&packed).unwrap();
    assert_eq!(unpacked, instruction);
}

#[test]
fn test_pack_unpack_uncook() {
    let instruction = RecipeInstruction::Uncook {
        quantities: vec![7, 8, 9],
        salt: Salt::new("uncook-salt"),
        amount: 100,
    };
    let packed = instruction.pack().unwrap();
    assert_eq!(packed[0], UNCOOK_OPCODE);
    assert_eq!(&packed[1..5], &[3, 0, 0, 0]);
    assert_eq!(&packed[29..61], salt_bytes("uncook-salt").as_slice());
    assert_eq!(&packed[61..], &[100, 0, 0, 0, 0, 0, 0, 0]);

    let unpacked = RecipeInstruction::unpack(&packed).unwrap();
    assert_eq!(unpacked, instruction);
}

#[derive(BorshSerialize)]
struct CreateLayout {
    opcode: u8,
    quantities: Vec<u64>,
    salt: [u8; 32],
    name: String,
    symbol: String,
    uri: String,
}

#[derive(BorshSerialize)]
struct UseLayout {
    opcode: u8,
    quantities: Vec<u64>,
    salt: [u8; 32],
    amount: u64,
}

#[test]
fn test_pack_matches_borsh_layout() {
    let salt = Salt::new("layout");
    let quantities = vec![0, 1, 500_000, u64::MAX];

    let create = RecipeInstruction::Create {
        quantities: quantities.clone(),
        salt,
        name: "Breakfast".to_string(),
        symbol: "BRKF".to_string(),
        uri: "https://ipfs.io/ipfs/QmHash".to_string(),
    };
    let layout = CreateLayout {
        opcode: CREATE_OPCODE,
        quantities: quantities.clone(),
        salt: *salt.as_bytes(),
        name: "Breakfast".to_string(),
        symbol: "BRKF".to_string(),
        uri: "https://ipfs.io/ipfs/QmHash".to_string(),
    };
    assert_eq!(create.pack().unwrap(), borsh::to_vec(&layout).unwrap());

    for mode in [CookMode::Cook, CookMode::Uncook] {
        let instruction = mode.instruction(quantities.clone(), salt, u64::MAX - 1);
        let layout = UseLayout {
            opcode: mode.opcode(),
            quantities: quantities.clone(),
            salt: *salt.as_bytes(),
            amount: u64::MAX - 1,
        };
        assert_eq!(instruction.pack().unwrap(), borsh::to_vec(&layout).unwrap());
    }
}

#[test]
fn test_pack_writes_encoded_integers() {
    let quantities = [3, u64::MAX, 1 << 40];
    let packed = RecipeInstruction::Cook {
        quantities: quantities.to_vec(),
        salt: Salt::default(),
        amount: 1 << 63,
    }
    .pack()
    .unwrap();

    for (i, quantity) in quantities.iter().enumerate() {
        let start = 5 + i * 8;
        assert_eq!(packed[start..start + 8], encode_u64(*quantity).unwrap());
    }
    assert_eq!(packed[packed.len() - 8..], encode_u64(1u64 << 63).unwrap());
}

#[test]
fn test_opcode() {
    let salt = Salt::default();
    assert_eq!(
        CookMode::Cook.instruction(vec![], salt, 0).opcode(),
        COOK_OPCODE
    );
    assert_eq!(
        CookMode::Uncook.instruction(vec![], salt, 0).opcode(),
        UNCOOK_OPCODE
    );
    assert_eq!(CookMode::Cook.opcode(), 2);
    assert_eq!(CookMode::Uncook.opcode(), 3);
}

#[test]
fn test_unpack_invalid_data() {
    assert!(RecipeInstruction::unpack(&[]).is_err());
    assert!(RecipeInstruction::unpack(&[0]).is_err());
    assert!(RecipeInstruction::unpack(&[4]).is_err());
    assert!(RecipeInstruction::unpack(&[COOK_OPCODE]).is_err());
    assert!(RecipeInstruction::unpack(&[COOK_OPCODE, 1, 0, 0, 0]).is_err());

    // Count claims more quantities than present
    let mut data = vec![UNCOOK_OPCODE, 0xff, 0xff, 0xff, 0xff];
    data.extend_from_slice(&[0u8; 48]);
    assert!(RecipeInstruction::unpack(&data).is_err());

    // Trailing bytes
    let mut packed = RecipeInstruction::Cook {
        quantities: vec![1],
        salt: Salt::default(),
        amount: 1,
    }
    .pack()
    .unwrap();
    packed.push(0);
    assert!(RecipeInstruction::unpack(&packed).is_err());

    // Invalid UTF-8 in a string field
    let mut packed = RecipeInstruction::Create {
        quantities: vec![1],
        salt: Salt::default(),
        name: "a".to_string(),
        symbol: "b".to_string(),
        uri: "c".to_string(),
    }
    .pack()
    .unwrap();
    let last = packed.len() - 1;
    packed[last] = 0xff;
    assert!(RecipeInstruction::unpack(&packed).is_err());
}

#[test]
fn test_cook_mode_from_str() {
    assert_eq!(CookMode::from_str("cook").unwrap(), CookMode::Cook);
    assert_eq!(CookMode::from_str("uncook").unwrap(), CookMode::Uncook);
    assert_eq!(CookMode::Uncook.to_string(), "uncook");

    let err = CookMode::from_str("bake").unwrap_err();
    assert!(matches!(err, RecipeError::Validation { ref field, .. } if field == "mode"));
}
