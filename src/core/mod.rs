// Core protocol data structures

mod types;
mod transaction;
mod block;
mod serialize;
mod hash;
mod amount;
mod spendable;
pub mod script;

pub use types::*;
pub use transaction::*;
pub use block::*;
pub use serialize::*;
pub use hash::*;
pub use amount::*;
pub use spendable::*;
pub use script::Script;
