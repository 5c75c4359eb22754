//! Token contract bindings.
//!
//! Includes the protocol's ERC20 tokens:
//! - IndexToken (governance token with checkpointed vote delegation)
//! - WETH9 (canonical wrapped ether)

use alloy_sol_types::sol;

sol! {
    /// Governance token with Compound-style vote delegation
    #[sol(rpc)]
    #[allow(clippy::too_many_arguments)]
    interface IndexToken {
        /// Emitted when tokens are transferred
        event Transfer(address indexed from, address indexed to, uint256 amount);

        /// Emitted when an allowance is set
        event Approval(address indexed owner, address indexed spender, uint256 amount);

        /// Emitted when an account changes its delegate
        event DelegateChanged(
            address indexed delegator,
            address indexed fromDelegate,
            address indexed toDelegate
        );

        /// Emitted when a delegate's vote balance changes
        event DelegateVotesChanged(
            address indexed delegate,
            uint256 previousBalance,
            uint256 newBalance
        );

        /// Emitted when the minter address is changed
        event MinterChanged(address minter, address newMinter);

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
        function allowance(address account, address spender) external view returns (uint256);

        /// Approve spender to spend tokens
        function approve(address spender, uint256 rawAmount) external returns (bool);

        /// Approve via signature (EIP-2612)
        function permit(
            address owner,
            address spender,
            uint256 rawAmount,
            uint256 deadline,
            uint8 v,
            bytes32 r,
            bytes32 s
        ) external;

        /// Transfer tokens to recipient
        function transfer(address dst, uint256 rawAmount) external returns (bool);

        /// Transfer tokens from src to dst (requires allowance)
        function transferFrom(address src, address dst, uint256 rawAmount) external returns (bool);

        /// Mint new tokens (minter only, capped per mint window)
        function mint(address dst, uint256 rawAmount) external;

        /// Change the minter address
        function setMinter(address newMinter) external;

        /// Get the current minter
        function minter() external view returns (address);

        /// Delegate votes to another account
        function delegate(address delegatee) external;

        /// Delegate votes via signature
        function delegateBySig(
            address delegatee,
            uint256 nonce,
            uint256 expiry,
            uint8 v,
            bytes32 r,
            bytes32 s
        ) external;

        /// Get the current vote balance for an account
        function getCurrentVotes(address account) external view returns (uint96);

        /// Get the vote balance for an account as of a past block
        function getPriorVotes(address account, uint256 blockNumber)
            external view returns (uint96);
    }

    /// Canonical wrapped ether contract
    #[sol(rpc)]
    interface WETH9 {
        /// Emitted when ether is wrapped
        event Deposit(address indexed dst, uint256 wad);

        /// Emitted when ether is unwrapped
        event Withdrawal(address indexed src, uint256 wad);

        /// Emitted when tokens are transferred
        event Transfer(address indexed src, address indexed dst, uint256 wad);

        /// Emitted when an allowance is set
        event Approval(address indexed src, address indexed guy, uint256 wad);

        /// Wrap sent ether
        function deposit() external payable;

        /// Unwrap ether
        function withdraw(uint256 wad) external;

        /// Get token name
        function name() external view returns (string memory);

        /// Get token symbol
        function symbol() external view returns (string memory);

        /// Get token decimals
        function decimals() external view returns (uint8);

        /// Get total supply (ether held by the contract)
        function totalSupply() external view returns (uint256);

        /// Get token balance of an account
        function balanceOf(address account) external view returns (uint256);

        /// Get allowance granted by owner to spender
        function allowance(address owner, address spender) external view returns (uint256);

        /// Approve spender to spend tokens
        function approve(address guy, uint256 wad) external returns (bool);

        /// Transfer tokens to recipient
        function transfer(address dst, uint256 wad) external returns (bool);

        /// Transfer tokens from src to dst (requires allowance)
        function transferFrom(address src, address dst, uint256 wad) external returns (bool);
    }
}
