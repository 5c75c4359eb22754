//! Manager extension contract bindings.
//!
//! Extensions are adapters installed on a manager; each one exposes a slice of
//! module functionality under the manager's access control:
//! - FeeSplitAdapter and StreamingFeeSplitExtension (fee accrual and splitting)
//! - FlexibleLeverageStrategyExtension (leverage rebalancing strategy)
//! - GIMExtension (general index module rebalances)
//! - GovernanceAdapter (voting with component tokens)

use alloy_sol_types::sol;

sol! {
    /// Adapter that accrues streaming and issuance fees and splits them
    /// between operator and methodologist
    #[sol(rpc)]
    interface FeeSplitAdapter {
        /// Emitted when accrued fees are split and distributed
        event FeesDistributed(
            address indexed operatorFeeRecipient,
            address indexed methodologist,
            uint256 operatorTake,
            uint256 methodologistTake
        );

        /// Accrue all fees and distribute the split
        function accrueFeesAndDistribute() external;

        /// Update the streaming fee (mutual upgrade)
        function updateStreamingFee(uint256 newFee) external;

        /// Update the issue fee (mutual upgrade)
        function updateIssueFee(uint256 newFee) external;

        /// Update the redeem fee (mutual upgrade)
        function updateRedeemFee(uint256 newFee) external;

        /// Update the recipient of the operator's share (operator only)
        function updateFeeRecipient(address newFeeRecipient) external;

        /// Get the operator share of accrued fees, in precise units
        function operatorFeeSplit() external view returns (uint256);
    }

    /// Extension that accrues streaming fees and splits them between
    /// operator and methodologist
    #[sol(rpc)]
    interface StreamingFeeSplitExtension {
        /// Emitted when accrued fees are split and distributed
        event FeesDistributed(
            address indexed operatorFeeRecipient,
            address indexed methodologist,
            uint256 operatorTake,
            uint256 methodologistTake
        );

        /// Accrue streaming fees and distribute the split
        function accrueFeesAndDistribute() external;

        /// Update the streaming fee (mutual upgrade)
        function updateStreamingFee(uint256 newFee) external;

        /// Update the recipient of the operator's share (operator only)
        function updateFeeRecipient(address newFeeRecipient) external;

        /// Update the operator/methodologist fee split (mutual upgrade)
        function updateFeeSplit(uint256 newFeeSplit) external;

        /// Get the operator share of accrued fees, in precise units
        function operatorFeeSplit() external view returns (uint256);
    }

    /// Rebalance action recommended by the leverage strategy
    enum ShouldRebalance {
        NONE,
        REBALANCE,
        ITERATE_REBALANCE,
        RIPCORD
    }

    /// Strategy extension maintaining a target leverage ratio through
    /// incremental rebalances and an emergency ripcord
    #[sol(rpc)]
    interface FlexibleLeverageStrategyExtension {
        /// Emitted when the strategy takes on its initial leverage
        event Engaged(
            uint256 currentLeverageRatio,
            uint256 newLeverageRatio,
            uint256 chunkRebalanceNotional,
            uint256 totalRebalanceNotional
        );

        /// Emitted on a normal rebalance toward the target ratio
        event Rebalanced(
            uint256 currentLeverageRatio,
            uint256 newLeverageRatio,
            uint256 chunkRebalanceNotional,
            uint256 totalRebalanceNotional
        );

        /// Emitted when a rebalance continues across multiple chunks
        event RebalanceIterated(
            uint256 currentLeverageRatio,
            uint256 newLeverageRatio,
            uint256 chunkRebalanceNotional,
            uint256 totalRebalanceNotional
        );

        /// Emitted when the ripcord is pulled to delever below the incentivized ratio
        event RipcordCalled(
            uint256 currentLeverageRatio,
            uint256 newLeverageRatio,
            uint256 rebalanceNotional,
            uint256 etherIncentive
        );

        /// Emitted when the strategy unwinds to 1x
        event Disengaged(
            uint256 currentLeverageRatio,
            uint256 newLeverageRatio,
            uint256 chunkRebalanceNotional,
            uint256 totalRebalanceNotional
        );

        /// Lever from 1x to the target ratio (operator only)
        function engage(string memory exchangeName) external;

        /// Rebalance toward the target ratio
        function rebalance(string memory exchangeName) external;

        /// Continue a chunked rebalance
        function iterateRebalance(string memory exchangeName) external;

        /// Emergency delever when above the incentivized leverage ratio;
        /// pays the caller an ether incentive
        function ripcord(string memory exchangeName) external;

        /// Unwind to 1x (operator only)
        function disengage(string memory exchangeName) external;

        /// Get the current leverage ratio, in precise units
        function getCurrentLeverageRatio() external view returns (uint256);

        /// Get the ether incentive currently claimable via ripcord
        function getCurrentEtherIncentive() external view returns (uint256);

        /// Get the recommended action for each enabled exchange
        function shouldRebalance()
            external view returns (string[] memory, ShouldRebalance[] memory);

        /// Same as shouldRebalance with custom leverage ratio bounds
        function shouldRebalanceWithBounds(
            uint256 customMinLeverageRatio,
            uint256 customMaxLeverageRatio
        ) external view returns (string[] memory, ShouldRebalance[] memory);
    }

    /// Extension exposing general index module rebalances to the operator
    #[sol(rpc)]
    interface GIMExtension {
        /// Emitted when a rebalance is started with explicit target units
        event RebalanceStarted(address indexed setToken);

        /// Start a rebalance with target units per component (operator only);
        /// components must be sorted and include all current positions
        function startRebalanceWithUnits(
            address[] calldata components,
            uint256[] calldata targetUnitsUnderlying,
            uint256 positionMultiplier
        ) external;

        /// Pause or unpause trading for a rebalance (operator only)
        function setTradesPaused(bool paused) external;

        /// Get the general index module this extension targets
        function generalIndexModule() external view returns (address);
    }

    /// Adapter for voting, delegating, and proposing with component tokens
    #[sol(rpc)]
    interface GovernanceAdapter {
        /// Emitted when a vote is cast through the governance module
        event VoteCast(string governanceName, uint256 indexed proposalId, bool support);

        /// Cast a vote on a proposal
        function vote(
            string memory governanceName,
            uint256 proposalId,
            bool support,
            bytes memory data
        ) external;

        /// Delegate component token votes to another address
        function delegate(string memory governanceName, address delegatee) external;

        /// Create a governance proposal
        function propose(string memory governanceName, bytes memory proposalData) external;

        /// Register the set token with a governance system
        function register(string memory governanceName) external;

        /// Revoke the set token's registration with a governance system
        function revoke(string memory governanceName) external;
    }
}
