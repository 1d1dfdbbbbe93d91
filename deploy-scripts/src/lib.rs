//! Scripts for deploying the Uniswap V3 limit order contract.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod cli;
mod commands;
pub mod constants;
pub mod errors;
pub mod fees;
mod solidity;
pub mod utils;
