// Network-specific version bytes

use std::fmt;

/// Bitcoin network an address or key belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
}

impl Network {
    /// Map the loosely-typed testnet flag used by callers
    pub fn from_testnet(testnet: bool) -> Self {
        if testnet { Network::Testnet } else { Network::Mainnet }
    }

    pub fn is_testnet(self) -> bool {
        self == Network::Testnet
    }

    /// Version byte of pay-to-pubkey-hash addresses
    pub fn pubkey_hash_prefix(self) -> u8 {
        match self {
            Network::Mainnet => 0x00,
            Network::Testnet => 0x6f,
        }
    }

    /// Version byte of pay-to-script-hash addresses
    pub fn script_hash_prefix(self) -> u8 {
        match self {
            Network::Mainnet => 0x05,
            Network::Testnet => 0xc4,
        }
    }

    /// Version byte of Wallet Import Format secrets
    pub fn wif_prefix(self) -> u8 {
        match self {
            Network::Mainnet => 0x80,
            Network::Testnet => 0xef,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Network::Mainnet => write!(f, "mainnet"),
            Network::Testnet => write!(f, "testnet"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_testnet_flag() {
        assert_eq!(Network::from_testnet(true), Network::Testnet);
        assert_eq!(Network::from_testnet(false), Network::Mainnet);
        assert!(Network::Testnet.is_testnet());
    }

    #[test]
    fn test_prefixes_differ_between_networks() {
        assert_ne!(Network::Mainnet.pubkey_hash_prefix(), Network::Testnet.pubkey_hash_prefix());
        assert_ne!(Network::Mainnet.script_hash_prefix(), Network::Testnet.script_hash_prefix());
        assert_ne!(Network::Mainnet.wif_prefix(), Network::Testnet.wif_prefix());
    }
}
