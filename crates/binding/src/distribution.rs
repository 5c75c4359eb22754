//! Token distribution contract bindings.
//!
//! Contracts that hand out the governance token:
//! - MerkleDistributor (one-shot airdrop claims against a merkle root)
//! - Vesting (linear vesting with a cliff for a single recipient)

use alloy_sol_types::sol;

sol! {
    /// Airdrop distributor; each leaf is (index, account, amount)
    #[sol(rpc)]
    interface MerkleDistributor {
        /// Emitted when a claim is paid out
        event Claimed(uint256 index, address account, uint256 amount);

        /// Get the token being distributed
        function token() external view returns (address);

        /// Get the merkle root of the distribution
        function merkleRoot() external view returns (bytes32);

        /// Check whether a leaf index has already been claimed
        function isClaimed(uint256 index) external view returns (bool);

        /// Claim an airdrop leaf; reverts on an invalid proof or a repeat claim
        function claim(
            uint256 index,
            address account,
            uint256 amount,
            bytes32[] calldata merkleProof
        ) external;
    }

    /// Linear vesting contract paying out to a single recipient after a cliff
    #[sol(rpc)]
    interface Vesting {
        /// Get the token being vested
        function index() external view returns (address);

        /// Get the current recipient
        function recipient() external view returns (address);

        /// Get the total amount vesting over the full period
        function vestingAmount() external view returns (uint256);

        /// Get the timestamp vesting begins
        function vestingBegin() external view returns (uint256);

        /// Get the cliff timestamp before which nothing is claimable
        function vestingCliff() external view returns (uint256);

        /// Get the timestamp the full amount is vested
        function vestingEnd() external view returns (uint256);

        /// Get the timestamp of the last claim
        function lastUpdate() external view returns (uint256);

        /// Change the recipient (recipient only)
        function setRecipient(address newRecipient) external;

        /// Pay out everything vested since the last claim
        function claim() external;
    }
}
