//! Issuance contract bindings.
//!
//! Includes contracts on the issue/redeem path:
//! - ExchangeIssuance and ExchangeIssuanceV2 (swap-and-issue periphery)
//! - SupplyCapIssuanceHook and SupplyCapAllowedCallerIssuanceHook
//!   (pre-issue hooks enforcing supply caps)

use alloy_sol_types::sol;

sol! {
    /// Periphery contract that swaps an input token for set components and issues in one call
    #[sol(rpc)]
    interface ExchangeIssuance {
        /// Emitted when a set token is issued from an ERC20 or ether
        event ExchangeIssue(
            address indexed recipient,
            address indexed setToken,
            address indexed inputToken,
            uint256 amountInputToken,
            uint256 amountSetIssued
        );

        /// Emitted when a set token is redeemed into an ERC20 or ether
        event ExchangeRedeem(
            address indexed recipient,
            address indexed setToken,
            address indexed outputToken,
            uint256 amountSetRedeemed,
            uint256 amountOutputToken
        );

        /// Approve a set token's components to the issuance module (one-time setup)
        function approveSetToken(address setToken) external;

        /// Spend an exact ERC20 amount, issuing at least minSetReceive set tokens
        function issueSetForExactToken(
            address setToken,
            address inputToken,
            uint256 amountInput,
            uint256 minSetReceive
        ) external returns (uint256);

        /// Spend exactly the sent ether, issuing at least minSetReceive set tokens
        function issueSetForExactETH(address setToken, uint256 minSetReceive)
            external payable returns (uint256);

        /// Issue an exact set amount, spending at most maxAmountInputToken of an ERC20
        function issueExactSetFromToken(
            address setToken,
            address inputToken,
            uint256 amountSetToken,
            uint256 maxAmountInputToken
        ) external returns (uint256);

        /// Issue an exact set amount from the sent ether, refunding the excess
        function issueExactSetFromETH(address setToken, uint256 amountSetToken)
            external payable returns (uint256);

        /// Redeem an exact set amount for at least minOutputReceive of an ERC20
        function redeemExactSetForToken(
            address setToken,
            address outputToken,
            uint256 amountSetToken,
            uint256 minOutputReceive
        ) external returns (uint256);

        /// Redeem an exact set amount for at least minEthOut ether
        function redeemExactSetForETH(address setToken, uint256 amountSetToken, uint256 minEthOut)
            external returns (uint256);

        /// Estimate set tokens issued for a given input amount
        function getEstimatedIssueSetAmount(
            address setToken,
            address inputToken,
            uint256 amountInput
        ) external view returns (uint256);

        /// Estimate the input amount needed to issue an exact set amount
        function getAmountInToIssueExactSet(
            address setToken,
            address inputToken,
            uint256 amountSetToken
        ) external view returns (uint256);
    }

    /// Second revision of the swap-and-issue periphery with debt-issuance support
    #[sol(rpc)]
    interface ExchangeIssuanceV2 {
        /// Emitted when a set token is issued from an ERC20 or ether
        event ExchangeIssue(
            address indexed recipient,
            address indexed setToken,
            address indexed inputToken,
            uint256 amountInputToken,
            uint256 amountSetIssued
        );

        /// Emitted when a set token is redeemed into an ERC20 or ether
        event ExchangeRedeem(
            address indexed recipient,
            address indexed setToken,
            address indexed outputToken,
            uint256 amountSetRedeemed,
            uint256 amountOutputToken
        );

        /// Approve a set token's components to a chosen issuance module
        function approveSetToken(address setToken, address issuanceModule) external;

        /// Issue an exact set amount, spending at most maxAmountInputToken of an ERC20
        function issueExactSetFromToken(
            address setToken,
            address inputToken,
            uint256 amountSetToken,
            uint256 maxAmountInputToken,
            address issuanceModule,
            bool isDebtIssuance
        ) external returns (uint256);

        /// Redeem an exact set amount for at least minOutputReceive of an ERC20
        function redeemExactSetForToken(
            address setToken,
            address outputToken,
            uint256 amountSetToken,
            uint256 minOutputReceive,
            address issuanceModule,
            bool isDebtIssuance
        ) external returns (uint256);

        /// Get the component tokens and amounts required to issue a set amount
        function getRequiredIssuanceComponents(
            address issuanceModule,
            bool isDebtIssuance,
            address setToken,
            uint256 amountSetToken
        ) external view returns (address[] memory components, uint256[] memory positions);

        /// Get the component tokens and amounts released by redeeming a set amount
        function getRequiredRedemptionComponents(
            address issuanceModule,
            bool isDebtIssuance,
            address setToken,
            uint256 amountSetToken
        ) external view returns (address[] memory components, uint256[] memory positions);
    }

    /// Pre-issue hook that reverts issuance pushing supply above a cap
    #[sol(rpc)]
    interface SupplyCapIssuanceHook {
        /// Emitted when the owner updates the supply cap
        event SupplyCapUpdated(uint256 newCap);

        /// Called by the issuance module before minting; reverts above the cap
        function invokePreIssueHook(
            address setToken,
            uint256 issueQuantity,
            address sender,
            address to
        ) external;

        /// Update the supply cap (owner only)
        function updateSupplyCap(uint256 newCap) external;

        /// Get the current supply cap
        function supplyCap() external view returns (uint256);
    }

    /// Supply cap hook that additionally restricts issuance to allowed callers
    #[sol(rpc)]
    interface SupplyCapAllowedCallerIssuanceHook {
        /// Emitted when the owner updates the supply cap
        event SupplyCapUpdated(uint256 newCap);

        /// Emitted when a caller's allowlist status changes
        event CallerStatusUpdated(address indexed caller, bool status);

        /// Emitted when the anyone-callable switch is flipped
        event AnyoneCallableUpdated(bool status);

        /// Called by the issuance module before minting; reverts above the cap
        /// or when the sender is not allowlisted
        function invokePreIssueHook(
            address setToken,
            uint256 issueQuantity,
            address sender,
            address to
        ) external;

        /// Update the supply cap (owner only)
        function updateSupplyCap(uint256 newCap) external;

        /// Batch-update caller allowlist statuses (owner only)
        function updateCallerStatus(address[] calldata callers, bool[] calldata statuses) external;

        /// Allow or disallow issuance by any caller (owner only)
        function updateAnyoneCallable(bool status) external;

        /// Get the current supply cap
        function supplyCap() external view returns (uint256);

        /// Check whether a caller is allowlisted
        function callAllowList(address caller) external view returns (bool);
    }
}
