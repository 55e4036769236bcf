// Mainnet vectors shared by the unit tests

/// Coinbase transaction of the genesis block
pub const GENESIS_COINBASE_HEX: &str = "01000000010000000000000000000000000000000000000000000000000000000000000000ffffffff4d04ffff001d0104455468652054696d65732030332f4a616e2f32303039204368616e63656c6c6f72206f6e206272696e6b206f66207365636f6e64206261696c6f757420666f722062616e6b73ffffffff0100f2052a01000000434104678afdb0fe5548271967f1a67130b7105cd6a828e03909a67962e0ea1f61deb649f6bc3f4cef38c4f35504e51ec112de5c384df7ba0b8d578a4c702b6bf11d5fac00000000";
pub const GENESIS_COINBASE_TXID: &str = "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b";

pub const GENESIS_HASH: &str = "000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f";
pub const GENESIS_TIME: u32 = 1231006505;
pub const GENESIS_BITS: u32 = 0x1d00ffff;
pub const GENESIS_NONCE: u32 = 2083236893;

pub const BLOCK_100000_HASH: &str = "000000000003ba27aa200b1cecaad478d2b00432346c3f1f3986da1afd33e506";
pub const BLOCK_100000_PREV: &str = "000000000002d01c1fccc21636b607dfd930d31d01c3a62104612a1719011250";
pub const BLOCK_100000_MERKLE: &str = "f3e94742aca4b5ef85488dc37c06c3282295ffec960994b2c0d5ac2a25a95766";
pub const BLOCK_100000_TIME: u32 = 1293623863;
pub const BLOCK_100000_BITS: u32 = 0x1b04864c;
pub const BLOCK_100000_NONCE: u32 = 274148111;
pub const BLOCK_100000_TXIDS: [&str; 4] = [
    "8c14f0db3df150123e6f3dbbf30f8b955a8249b62ac1d1ff16284aefa3d06d87",
    "fff2525b8931402dd09222c50775608f75787bd2b87e56995a7bdd30f79702c4",
    "6359f0868171b1d194cbee1af2f16ea598ae8fad666d9b012c8ed2b79a236ec4",
    "e9a66845e05d5abc0ad04ec80f774a7e585c6e8db975962d069a522137b80c1d",
];

/// Address paid by the genesis coinbase and its hash160
pub const GENESIS_ADDRESS: &str = "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa";
pub const GENESIS_ADDRESS_HASH160: &str = "62e907b15cbf27d5425399ebf6f0fb50ebb88f18";

/// Uncompressed mainnet WIF and the secret it encodes
pub const MAINNET_WIF: &str = "5HueCGU8rMjxEXxiPuD5BDku4MkFqeZyd4dZ1jvhTVqvbTLvyTJ";
pub const MAINNET_WIF_SECRET: &str = "0c28fca386c7a227600b2fe50b7cae11ec86d3bf1fbe471be89827e19d72aa1d";

/// P2SH-wrapped P2WPKH spend with one input and one output
pub const SEGWIT_TX_HEX: &str = "0200000000010166c3d39490dc827a2594c7b17b7d37445e1f4b372179649cd2ce4475e3641bbb0100000017160014e69aa750e9bff1aca1e32e57328b641b611fc817fdffffff01e87c5d010000000017a914f3890da1b99e44cd3d52f7bcea6a1351658ea7be87024830450221009eb97597953dc288de30060ba02d4e91b2bde1af2ecf679c7f5ab5989549aa8002202a98f8c3bd1a5a31c0d72950dd6e2e3870c6c5819a6c3db740e91ebbbc5ef4800121023f3d3b8e74b807e32217dea2c75c8d0bd46b8665b3a2d9b3cb310959de52a09bc9d20700";
pub const SEGWIT_TXID: &str = "fc35789b03e5b160c189a9d68d81e78b1de276fc653fe4f0b3355e4f48226247";
