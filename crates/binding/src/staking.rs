//! Staking contract bindings.
//!
//! Synthetix-style staking rewards contracts used for liquidity mining:
//! - StakingRewards and StakingRewardsV2
//! - RewardsDistributionRecipient (base for reward notification)

use alloy_sol_types::sol;

sol! {
    /// Stake a token, earn a reward token at a fixed rate over a period
    #[sol(rpc)]
    interface StakingRewards {
        /// Emitted when a reward period is funded
        event RewardAdded(uint256 reward);

        /// Emitted when tokens are staked
        event Staked(address indexed user, uint256 amount);

        /// Emitted when staked tokens are withdrawn
        event Withdrawn(address indexed user, uint256 amount);

        /// Emitted when earned rewards are paid out
        event RewardPaid(address indexed user, uint256 reward);

        /// Get the reward token
        function rewardsToken() external view returns (address);

        /// Get the staking token
        function stakingToken() external view returns (address);

        /// Get the timestamp the current reward period ends
        function periodFinish() external view returns (uint256);

        /// Get the reward rate per second
        function rewardRate() external view returns (uint256);

        /// Get the total staked amount
        function totalSupply() external view returns (uint256);

        /// Get an account's staked balance
        function balanceOf(address account) external view returns (uint256);

        /// Get the last timestamp rewards apply to (min of now and periodFinish)
        function lastTimeRewardApplicable() external view returns (uint256);

        /// Get the accumulated reward per staked token
        function rewardPerToken() external view returns (uint256);

        /// Get an account's earned, unclaimed rewards
        function earned(address account) external view returns (uint256);

        /// Get the total reward for the full duration
        function getRewardForDuration() external view returns (uint256);

        /// Stake tokens
        function stake(uint256 amount) external;

        /// Withdraw staked tokens
        function withdraw(uint256 amount) external;

        /// Claim earned rewards
        function getReward() external;

        /// Withdraw the full stake and claim rewards
        function exit() external;

        /// Fund a reward period (rewards distribution only)
        function notifyRewardAmount(uint256 reward) external;
    }

    /// StakingRewards with an adjustable duration and token recovery
    #[sol(rpc)]
    interface StakingRewardsV2 {
        /// Emitted when a reward period is funded
        event RewardAdded(uint256 reward);

        /// Emitted when tokens are staked
        event Staked(address indexed user, uint256 amount);

        /// Emitted when staked tokens are withdrawn
        event Withdrawn(address indexed user, uint256 amount);

        /// Emitted when earned rewards are paid out
        event RewardPaid(address indexed user, uint256 reward);

        /// Emitted when the rewards duration changes
        event RewardsDurationUpdated(uint256 newDuration);

        /// Emitted when a stray token is recovered by the owner
        event Recovered(address token, uint256 amount);

        /// Get the reward token
        function rewardsToken() external view returns (address);

        /// Get the staking token
        function stakingToken() external view returns (address);

        /// Get the timestamp the current reward period ends
        function periodFinish() external view returns (uint256);

        /// Get the reward rate per second
        function rewardRate() external view returns (uint256);

        /// Get the reward period duration in seconds
        function rewardsDuration() external view returns (uint256);

        /// Get the total staked amount
        function totalSupply() external view returns (uint256);

        /// Get an account's staked balance
        function balanceOf(address account) external view returns (uint256);

        /// Get the last timestamp rewards apply to (min of now and periodFinish)
        function lastTimeRewardApplicable() external view returns (uint256);

        /// Get the accumulated reward per staked token
        function rewardPerToken() external view returns (uint256);

        /// Get an account's earned, unclaimed rewards
        function earned(address account) external view returns (uint256);

        /// Get the total reward for the full duration
        function getRewardForDuration() external view returns (uint256);

        /// Stake tokens
        function stake(uint256 amount) external;

        /// Withdraw staked tokens
        function withdraw(uint256 amount) external;

        /// Claim earned rewards
        function getReward() external;

        /// Withdraw the full stake and claim rewards
        function exit() external;

        /// Fund a reward period (rewards distribution only)
        function notifyRewardAmount(uint256 reward) external;

        /// Change the reward period duration (owner only, outside a live period)
        function setRewardsDuration(uint256 newDuration) external;

        /// Recover a stray token sent to the contract (owner only, not the staking token)
        function recoverERC20(address tokenAddress, uint256 tokenAmount) external;
    }

    /// Base contract gating reward notification to a distribution address
    #[sol(rpc)]
    interface RewardsDistributionRecipient {
        /// Get the address allowed to notify rewards
        function rewardsDistribution() external view returns (address);

        /// Fund a reward period (rewards distribution only)
        function notifyRewardAmount(uint256 reward) external;

        /// Change the rewards distribution address (owner only)
        function setRewardsDistribution(address newRewardsDistribution) external;
    }
}
