// Networks, addresses and keys

mod address;
mod key;
mod network;

pub use address::{Address, AddressError, AddressKind};
pub use key::{decode_wif, encode_wif, Key, KeyError};
pub use network::Network;
