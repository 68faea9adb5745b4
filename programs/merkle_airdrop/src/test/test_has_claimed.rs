use anchor_lang::prelude::*;

use crate::state::ClaimStatus;

fn claimed_for(data: &mut [u8], lamports: u64) -> Result<bool> {
    let key = Pubkey::new_from_array([0xc1; 32]);
    let owner = crate::ID;
    let mut lamports = lamports;
    let info = AccountInfo::new(&key, false, false, &mut lamports, data, &owner, false, 0);
    ClaimStatus::claimed_in(&info)
}

fn serialized(status: &ClaimStatus) -> Vec<u8> {
    let mut data = Vec::new();
    status.try_serialize(&mut data).unwrap();
    data
}

#[test]
fn test_missing_claim_status_reads_unclaimed() {
    assert!(!claimed_for(&mut [], 0).unwrap());
    // Lamports sent to the PDA address do not make it a claim status
    assert!(!claimed_for(&mut [], 1_000_000).unwrap());
}

#[test]
fn test_claimed_status_reads_claimed() {
    let mut status = ClaimStatus::default();
    status.record_claim(100, 1_700_000_000);
    let mut data = serialized(&status);

    assert!(claimed_for(&mut data, 1_000_000).unwrap());
}

#[test]
fn test_unclaimed_status_reads_unclaimed() {
    // A freshly initialized claim status
    let mut data = serialized(&ClaimStatus::default());

    assert!(!claimed_for(&mut data, 1_000_000).unwrap());
}

#[test]
fn test_foreign_data_is_rejected() {
    let mut data = vec![0xab; ClaimStatus::LEN];

    assert!(claimed_for(&mut data, 1_000_000).is_err());
}
