//! Consumer-side checks of the binding registry surface.
//!
//! These tests import contracts through the crate root exactly the way
//! downstream scripts do, and verify that the typed call and event shapes
//! match the on-chain ABIs they were declared from.

use alloy_primitives::{address, B256, U256};
use alloy_sol_types::{SolCall, SolEvent};
use index_binding::{
    ContractName, IndexToken, MerkleDistributor, StakingRewards, Vesting, WETH9,
};

#[test]
fn test_token_transfer_shape() {
    // The canonical IndexToken export carries the full typed transfer call.
    let call = IndexToken::transferCall {
        dst: address!("0x1111111111111111111111111111111111111111"),
        rawAmount: U256::from(1_000u64),
    };

    assert_eq!(IndexToken::transferCall::SIGNATURE, "transfer(address,uint256)");

    let encoded = call.abi_encode();
    assert_eq!(&encoded[..4], IndexToken::transferCall::SELECTOR);
    assert_eq!(encoded.len(), 4 + 32 + 32);
}

#[test]
fn test_token_event_shapes() {
    assert_eq!(IndexToken::Transfer::SIGNATURE, "Transfer(address,address,uint256)");
    assert_eq!(
        IndexToken::DelegateVotesChanged::SIGNATURE,
        "DelegateVotesChanged(address,uint256,uint256)"
    );
    assert_eq!(WETH9::Deposit::SIGNATURE, "Deposit(address,uint256)");
}

#[test]
fn test_distributor_claim_shape() {
    let call = MerkleDistributor::claimCall {
        index: U256::from(7u64),
        account: address!("0x2222222222222222222222222222222222222222"),
        amount: U256::from(500u64),
        merkleProof: vec![B256::ZERO, B256::repeat_byte(0xab)],
    };

    assert_eq!(
        MerkleDistributor::claimCall::SIGNATURE,
        "claim(uint256,address,uint256,bytes32[])"
    );
    assert_eq!(&call.abi_encode()[..4], MerkleDistributor::claimCall::SELECTOR);
    assert_eq!(
        MerkleDistributor::Claimed::SIGNATURE,
        "Claimed(uint256,address,uint256)"
    );
}

#[test]
fn test_staking_call_shapes() {
    assert_eq!(StakingRewards::stakeCall::SIGNATURE, "stake(uint256)");
    assert_eq!(StakingRewards::exitCall::SIGNATURE, "exit()");
    assert_eq!(StakingRewards::Staked::SIGNATURE, "Staked(address,uint256)");

    // Zero-argument calls encode to the bare selector.
    let encoded = StakingRewards::getRewardCall {}.abi_encode();
    assert_eq!(encoded.len(), 4);
}

#[test]
fn test_vesting_claim_shape() {
    assert_eq!(Vesting::claimCall::SIGNATURE, "claim()");
    assert_eq!(Vesting::setRecipientCall::SIGNATURE, "setRecipient(address)");
}

// Resolving a name through the crate root and through its defining module
// must yield the same type. This compiles only if the re-export preserves
// the generated type unchanged.
#[test]
fn test_root_export_is_defining_type() {
    fn assert_same(call: index_binding::token::IndexToken::transferCall) -> IndexToken::transferCall {
        call
    }

    let call = IndexToken::transferCall {
        dst: address!("0x3333333333333333333333333333333333333333"),
        rawAmount: U256::ZERO,
    };
    let _ = assert_same(call);
}

#[test]
fn test_every_canonical_name_parses() {
    for name in ContractName::ALL {
        assert_eq!(name.as_str().parse::<ContractName>().unwrap(), name);
    }
    assert!("Token".parse::<ContractName>().is_err());
}
