//! Manager contract bindings.
//!
//! Manager contracts own a set token and mediate all module interactions:
//! - BaseManager (current generation, adapter-based)
//! - ICManager (first generation, operator/methodologist fee split)

use alloy_sol_types::sol;

sol! {
    /// Adapter-based manager holding operator and methodologist roles
    #[sol(rpc)]
    interface BaseManager {
        /// Emitted when an adapter is authorized
        event AdapterAdded(address adapter);

        /// Emitted when an adapter is deauthorized
        event AdapterRemoved(address adapter);

        /// Emitted when the methodologist role is transferred
        event MethodologistChanged(address oldMethodologist, address newMethodologist);

        /// Emitted when the operator role is transferred
        event OperatorChanged(address oldOperator, address newOperator);

        /// Authorize an adapter to call interactManager
        function addAdapter(address adapter) external;

        /// Deauthorize an adapter
        function removeAdapter(address adapter) external;

        /// Forward an arbitrary call from an authorized adapter to a module
        function interactManager(address module, bytes calldata data) external;

        /// Add a module to the managed set token
        function addModule(address module) external;

        /// Remove a module from the managed set token
        function removeModule(address module) external;

        /// Transfer the methodologist role (methodologist only)
        function setMethodologist(address newMethodologist) external;

        /// Transfer the operator role (operator only)
        function setOperator(address newOperator) external;

        /// Check whether an address is an authorized adapter
        function isAdapter(address adapter) external view returns (bool);

        /// Get the full adapter list
        function getAdapters() external view returns (address[] memory);

        /// Get the managed set token
        function setToken() external view returns (address);

        /// Get the current operator
        function operator() external view returns (address);

        /// Get the current methodologist
        function methodologist() external view returns (address);
    }

    /// First-generation manager with built-in streaming fee accrual
    #[sol(rpc)]
    interface ICManager {
        /// Emitted when accrued streaming fees are split and distributed
        event FeesAccrued(
            uint256 totalFees,
            uint256 operatorTake,
            uint256 methodologistTake
        );

        /// Forward an arbitrary call to a module (operator only)
        function interactModule(address module, bytes calldata data) external;

        /// Add a module to the managed index token
        function addModule(address module) external;

        /// Remove a module from the managed index token
        function removeModule(address module) external;

        /// Accrue streaming fees and distribute the operator/methodologist split
        function accrueFeeAndDistribute() external;

        /// Update the streaming fee (mutual upgrade)
        function updateStreamingFee(uint256 newFee) external;

        /// Update the fee recipient (mutual upgrade)
        function updateFeeRecipient(address newFeeRecipient) external;

        /// Update the operator/methodologist fee split (mutual upgrade)
        function updateFeeSplit(uint256 newFeeSplit) external;

        /// Update the index module used for fee accrual
        function updateIndexModule(address newIndexModule) external;

        /// Transfer the operator role
        function updateOperator(address newOperator) external;

        /// Transfer the methodologist role
        function updateMethodologist(address newMethodologist) external;

        /// Get the managed index token
        function indexToken() external view returns (address);

        /// Get the current operator
        function operator() external view returns (address);

        /// Get the current methodologist
        function methodologist() external view returns (address);

        /// Get the operator share of accrued fees, in precise units
        function operatorFeeSplit() external view returns (uint256);
    }
}
