//! Contract bindings for the Index protocol suite.
//!
//! This crate consolidates the typed interfaces for every contract used
//! across the protocol's tests and deployment scripts:
//! - Managers (BaseManager, ICManager)
//! - Issuance periphery and hooks (ExchangeIssuance, supply cap hooks)
//! - Manager extensions (fee splits, leverage strategy, governance)
//! - Staking rewards contracts
//! - Token distribution (MerkleDistributor, Vesting)
//! - Tokens (IndexToken, WETH9) and test mocks
//!
//! All bindings are generated using alloy's `sol!` macro. Every interface is
//! re-exported at the crate root under its canonical name, so consumers
//! depend only on this crate and the names below; the module grouping is an
//! internal detail that may change. Each canonical name maps to exactly one
//! interface and there are no aliases. A duplicate canonical name, or a name
//! whose interface was removed without updating this list, is a compile
//! error.

pub mod distribution;
pub mod extension;
pub mod issuance;
pub mod manager;
pub mod mocks;
pub mod name;
pub mod staking;
pub mod token;

pub use distribution::{MerkleDistributor, Vesting};
pub use extension::{
    FeeSplitAdapter, FlexibleLeverageStrategyExtension, GIMExtension, GovernanceAdapter,
    StreamingFeeSplitExtension,
};
pub use issuance::{
    ExchangeIssuance, ExchangeIssuanceV2, SupplyCapAllowedCallerIssuanceHook,
    SupplyCapIssuanceHook,
};
pub use manager::{BaseManager, ICManager};
pub use mocks::{
    BaseAdapterMock, ChainlinkAggregatorV3Mock, GovernanceAdapterMock, MasterChefMock,
    MutualUpgradeMock, StandardTokenMock, StringArrayUtilsMock, TradeAdapterMock,
};
pub use name::{ContractName, UnknownContractError};
pub use staking::{RewardsDistributionRecipient, StakingRewards, StakingRewardsV2};
pub use token::{IndexToken, WETH9};
