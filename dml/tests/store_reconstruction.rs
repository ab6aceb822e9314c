//! End-to-end reconstruction of masternode lists from a base diff plus
//! stored diffs, the way a light client builds its view of the chain.

use assert_matches::assert_matches;

use dash_dml::prelude::*;

#[test]
fn base_plus_one_diff_yields_the_full_picture() {
    // Base list at height 1000 with three masternodes.
    let a = MasternodeListEntry::dummy(0xA);
    let b = MasternodeListEntry::dummy(0xB);
    let c = MasternodeListEntry::dummy(0xC);
    let base_diff = MnListDiff::dummy_base(
        1000,
        BlockHash::dummy(1000),
        vec![a.clone(), b.clone(), c.clone()],
    );
    let store = MasternodeListStore::from_base_diff(base_diff, Network::Dash).expect("base");

    // Height 1001 adds a fourth masternode and a three-member test quorum.
    let d = MasternodeListEntry::dummy(0xD);
    let quorum = QuorumEntry::dummy(LLMQType::LlmqtypeTest, 1);
    let mut diff = MnListDiff::dummy(BlockHash::dummy(1000), BlockHash::dummy(1001), 1001);
    diff.new_masternodes = vec![d.clone()];
    diff.new_quorums = vec![quorum.clone()];
    store.add_diff(diff).expect("stored");

    let list = store.masternode_list_at_height(1001).expect("reconstructs");
    assert_eq!(list.known_height, 1001);
    assert_eq!(list.masternode_count(), 4);
    for entry in [&a, &b, &c, &d] {
        assert!(list.masternodes.contains_key(&entry.pro_reg_tx_hash));
    }

    let stored_quorum = list
        .quorum_entry_of_type_for_quorum_hash(LLMQType::LlmqtypeTest, quorum.quorum_hash)
        .expect("quorum present");
    assert_eq!(stored_quorum.quorum_entry.llmq_type.size(), 3);
    assert_eq!(stored_quorum.quorum_entry.llmq_type.threshold(), 2);
    assert_eq!(stored_quorum.commitment_hash, quorum.calculate_commitment_hash());

    // Member selection runs straight off the reconstructed list.
    let members: Vec<QualifiedMasternodeListEntry> = stored_quorum.quorum_entry.select_members(&list);
    assert_eq!(members.len(), 3);
}

#[test]
fn shuffled_arrival_reconstructs_identically() {
    let build_store = || {
        MasternodeListStore::from_base_diff(
            MnListDiff::dummy_base(
                1000,
                BlockHash::dummy(1000),
                vec![MasternodeListEntry::dummy(1), MasternodeListEntry::dummy(2)],
            ),
            Network::Dash,
        )
        .expect("base")
    };

    // A five-diff chain with churn on both the masternode and quorum sets.
    let diffs: Vec<MnListDiff> = (1001u32..=1005)
        .map(|height| {
            let mut diff = MnListDiff::dummy(
                BlockHash::dummy(height as usize - 1),
                BlockHash::dummy(height as usize),
                height,
            );
            diff.new_masternodes = vec![MasternodeListEntry::dummy(height as usize)];
            if height == 1002 {
                diff.new_quorums = vec![QuorumEntry::dummy(LLMQType::LlmqtypeDevnet, 9)];
            }
            if height == 1004 {
                diff.deleted_masternodes = vec![MasternodeListEntry::dummy(1).pro_reg_tx_hash];
                diff.deleted_quorums = vec![DeletedQuorum {
                    llmq_type: LLMQType::LlmqtypeDevnet,
                    quorum_hash: QuorumEntry::dummy(LLMQType::LlmqtypeDevnet, 9).quorum_hash,
                }];
            }
            diff
        })
        .collect();

    let in_order = build_store();
    for diff in &diffs {
        in_order.add_diff(diff.clone()).expect("stored");
    }

    let shuffled = build_store();
    for index in [3usize, 0, 4, 2, 1] {
        shuffled.add_diff(diffs[index].clone()).expect("stored");
    }

    for height in 1000u32..=1005 {
        assert_eq!(
            shuffled.masternode_list_at_height(height).expect("shuffled"),
            in_order.masternode_list_at_height(height).expect("in order"),
            "height {height} diverged",
        );
    }

    let tip = in_order.masternode_list_at_height(1005).expect("tip");
    // Two base nodes plus five added, minus the one removed at 1004.
    assert_eq!(tip.masternode_count(), 6);
    // The quorum added at 1002 was removed again at 1004.
    assert_eq!(tip.quorums_count(), 0);
    // But it is still visible at the heights in between.
    let mid = in_order.masternode_list_at_height(1003).expect("mid");
    assert_eq!(mid.quorums_count(), 1);
}

#[test]
fn reconstruction_is_pure_and_repeatable() {
    let store = MasternodeListStore::from_base_diff(
        MnListDiff::dummy_base(1000, BlockHash::dummy(1000), vec![MasternodeListEntry::dummy(1)]),
        Network::Dash,
    )
    .expect("base");
    let mut diff = MnListDiff::dummy(BlockHash::dummy(1000), BlockHash::dummy(1001), 1001);
    diff.new_masternodes = vec![MasternodeListEntry::dummy(2)];
    store.add_diff(diff).expect("stored");

    let first = store.masternode_list_at_height(1001).expect("first pass");
    let second = store.masternode_list_at_height(1001).expect("second pass");
    assert_eq!(first, second);

    // Later appends do not disturb already-reconstructible heights.
    let mut later = MnListDiff::dummy(BlockHash::dummy(1001), BlockHash::dummy(1002), 1002);
    later.new_masternodes = vec![MasternodeListEntry::dummy(3)];
    store.add_diff(later).expect("stored");
    assert_eq!(store.masternode_list_at_height(1001).expect("third pass"), first);
}

#[test]
fn wire_decoded_diffs_feed_the_store() {
    use dash_dml::consensus::{deserialize, serialize};

    let mut diff = MnListDiff::dummy(BlockHash::dummy(1000), BlockHash::dummy(1001), 1001);
    diff.new_masternodes = vec![MasternodeListEntry::dummy(4)];
    diff.new_quorums = vec![QuorumEntry::dummy(LLMQType::Llmqtype50_60, 2)];

    // Over the wire and back, byte for byte.
    let bytes = serialize(&diff);
    let decoded: MnListDiff = deserialize(&bytes).expect("round trip");
    assert_eq!(decoded, diff);

    let store = MasternodeListStore::from_base_diff(
        MnListDiff::dummy_base(1000, BlockHash::dummy(1000), vec![MasternodeListEntry::dummy(1)]),
        Network::Dash,
    )
    .expect("base");
    store.add_diff(decoded).expect("stored");

    let list = store.masternode_list_at_height(1001).expect("reconstructs");
    assert_eq!(list.masternode_count(), 2);
    assert_eq!(list.quorums_count(), 1);
}

#[test]
fn queries_between_stored_heights_see_the_latest_prior_state() {
    let store = MasternodeListStore::from_base_diff(
        MnListDiff::dummy_base(1000, BlockHash::dummy(1000), vec![MasternodeListEntry::dummy(1)]),
        Network::Dash,
    )
    .expect("base");
    let mut diff = MnListDiff::dummy(BlockHash::dummy(1000), BlockHash::dummy(1002), 1002);
    diff.new_masternodes = vec![MasternodeListEntry::dummy(2)];
    store.add_diff(diff).expect("stored");

    // Height 1001 has no diff of its own: the base state still applies.
    let list = store.masternode_list_at_height(1001).expect("gap height");
    assert_eq!(list.masternode_count(), 1);
    assert_eq!(list.known_height, 1000);

    let list = store.masternode_list_at_height(1002).expect("stored height");
    assert_eq!(list.masternode_count(), 2);
}

#[test]
fn floor_violations_and_uninitialized_queries_fail() {
    let store = MasternodeListStore::from_base_diff(
        MnListDiff::dummy_base(1000, BlockHash::dummy(1000), vec![MasternodeListEntry::dummy(1)]),
        Network::Dash,
    )
    .expect("base");
    assert_matches!(
        store.masternode_list_at_height(999),
        Err(SmlError::HeightBeforeBase { height: 999, base_height: 1000 })
    );

    let empty = MasternodeListStore::new(Network::Dash);
    assert_matches!(empty.masternode_list_at_height(1000), Err(SmlError::StoreNotInitialized));
}
