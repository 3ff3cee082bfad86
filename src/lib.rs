//! Client-side transaction construction, fee calculation and signing
//! for Neo N3.
//!
//! This facade re-exports the workspace crates:
//!
//! - [`io`] — the binary reader/writer pair and the `Serializable`
//!   trait behind every wire format;
//! - [`crypto`] — P-256 key pairs, Neo-format signatures, hashes and
//!   WIF;
//! - [`core`] — script assembly, transactions, the builder with its
//!   fee model, wallets, tokens and the NEF codec.
//!
//! ```no_run
//! use neotx::core::{NetworkConfig, H160};
//! use neotx::core::contract::FungibleToken;
//! use neotx::core::wallet::{Account, Wallet};
//! # use neotx::core::rpc::NeoClient;
//! # fn example(client: &impl NeoClient) -> Result<(), Box<dyn std::error::Error>> {
//! let config = NetworkConfig::main_net();
//! let wallet = Wallet::with_accounts(vec![
//!     Account::from_wif("L25kgAQJXNHnhc7Sx9bomxxwVSMsZdkaNQ3m2VfHrnLzKWMLP13A")?,
//! ])?;
//!
//! let gas = FungibleToken::new(H160::from_hex(
//!     "d2a4cff31913016155e38e474a2c06d08be276cf",
//! )?);
//! let to = H160::from_address("NZNos2WqTbu5oCgyfss9kUJgBXJqhuYAaj", &config)?;
//! let tx = gas
//!     .transfer(client, config, &wallet, to, "1.5".parse()?)?
//!     .build_unsigned(client)?
//!     .sign(&wallet)?;
//! tx.send(client)?;
//! # Ok(())
//! # }
//! ```

pub use neotx_core as core;
pub use neotx_crypto as crypto;
pub use neotx_io as io;
