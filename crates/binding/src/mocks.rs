//! Mock contract bindings used by integration tests and deployment dry runs.
//!
//! These mirror the mock contracts deployed alongside the protocol in test
//! environments. They are part of the registry because test code resolves
//! them through the same surface as production contracts.

use alloy_sol_types::sol;

sol! {
    /// Minimal adapter for exercising manager access control paths
    #[sol(rpc)]
    interface BaseAdapterMock {
        /// Callable only by the manager's operator
        function testOnlyOperator() external;

        /// Callable only by the manager's methodologist
        function testOnlyMethodologist() external;

        /// Callable only by an externally owned account
        function testOnlyEOA() external;

        /// Callable only by operator or methodologist
        function testOnlyAllowedCaller(address caller) external;

        /// Forward a call through the manager to a module
        function interactManager(address module, bytes calldata data) external;

        /// Get the manager this adapter is installed on
        function manager() external view returns (address);
    }

    /// Chainlink V3 aggregator mock with a settable answer
    #[sol(rpc)]
    interface ChainlinkAggregatorV3Mock {
        /// Get the latest round data; only the answer field is meaningful
        function latestRoundData()
            external
            view
            returns (
                uint80 roundId,
                int256 answer,
                uint256 startedAt,
                uint256 updatedAt,
                uint80 answeredInRound
            );

        /// Set the answer returned by latestRoundData
        function setPrice(int256 price) external;

        /// Get the answer's decimal precision
        function decimals() external view returns (uint8);
    }

    /// Governance system mock recording the last delegate/vote/proposal
    #[sol(rpc)]
    interface GovernanceAdapterMock {
        /// Get calldata for casting a vote in the mock governance system
        function getVoteCalldata(uint256 proposalId, bool support, bytes memory data)
            external view returns (address, uint256, bytes memory);

        /// Get calldata for delegating votes
        function getDelegateCalldata(address delegatee)
            external view returns (address, uint256, bytes memory);

        /// Get calldata for creating a proposal
        function getProposeCalldata(bytes memory proposalData)
            external view returns (address, uint256, bytes memory);

        /// Get calldata for registering with the governance system
        function getRegisterCalldata(address setToken)
            external view returns (address, uint256, bytes memory);

        /// Get calldata for revoking registration
        function getRevokeCalldata()
            external view returns (address, uint256, bytes memory);
    }

    /// MasterChef staking mock paying rewards per pool
    #[sol(rpc)]
    interface MasterChefMock {
        /// Stake LP tokens into a pool
        function deposit(uint256 pid, uint256 amount) external;

        /// Withdraw LP tokens from a pool
        function withdraw(uint256 pid, uint256 amount) external;

        /// Get a user's staked amount and reward debt for a pool
        function userInfo(uint256 pid, address user)
            external view returns (uint256 amount, uint256 rewardDebt);

        /// Get a user's pending reward for a pool
        function pendingRewards(uint256 pid, address user) external view returns (uint256);
    }

    /// Mock exercising the two-party mutual upgrade modifier
    #[sol(rpc)]
    interface MutualUpgradeMock {
        /// Succeeds only after both parties have called with identical calldata
        function testMutualUpgrade(uint256 testValue) external;

        /// Get the value set by the last completed mutual upgrade
        function testUint() external view returns (uint256);
    }

    /// ERC20 mock with open minting for test balances
    #[sol(rpc)]
    interface StandardTokenMock {
        /// Emitted when tokens are transferred
        event Transfer(address indexed from, address indexed to, uint256 value);

        /// Emitted when an allowance is set
        event Approval(address indexed owner, address indexed spender, uint256 value);

        /// Get token name
        function name() external view returns (string memory);

        /// Get token symbol
        function symbol() external view returns (string memory);

        /// Get token decimals
        function decimals() external view returns (uint8);

        /// Get total supply
        function totalSupply() external view returns (uint256);

        /// Get token balance of an account
        function balanceOf(address account) external view returns (uint256);

        /// Get allowance granted by owner to spender
        function allowance(address owner, address spender) external view returns (uint256);

        /// Approve spender to spend tokens
        function approve(address spender, uint256 amount) external returns (bool);

        /// Transfer tokens to recipient
        function transfer(address recipient, uint256 amount) external returns (bool);

        /// Transfer tokens from sender to recipient (requires allowance)
        function transferFrom(address sender, address recipient, uint256 amount)
            external returns (bool);

        /// Mint tokens to an account (unrestricted)
        function mint(address to, uint256 amount) external;
    }

    /// Harness exposing the string array utility library
    #[sol(rpc)]
    interface StringArrayUtilsMock {
        /// Find the first occurrence of a string; returns (position, found)
        function indexOf(string[] memory array, string memory searchValue)
            external pure returns (uint256, bool);

        /// Remove the first occurrence from the stored array; reverts if absent
        function removeStorage(string memory value) external;

        /// Get the stored array
        function getStoredArray() external view returns (string[] memory);
    }

    /// Trade adapter mock returning canned swap calldata
    #[sol(rpc)]
    interface TradeAdapterMock {
        /// Get calldata to execute a swap on the mock exchange
        function getTradeCalldata(
            address sourceToken,
            address destinationToken,
            address destinationAddress,
            uint256 sourceQuantity,
            uint256 minDestinationQuantity,
            bytes memory data
        ) external view returns (address, uint256, bytes memory);

        /// Get the address to approve source tokens to
        function getSpender() external view returns (address);
    }
}
