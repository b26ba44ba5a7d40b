// tests/probe_protocol.rs
use blockgrid_turtle::{BlockKind, GridWorld, classify, classify_with};

/// A scripted membership predicate that answers true for exactly one kind
/// and records every probe it receives.
fn scripted(target: BlockKind, log: &mut Vec<BlockKind>) -> impl FnMut(BlockKind) -> bool + '_ {
    move |kind| {
        log.push(kind);
        kind == target
    }
}

#[test]
fn each_probed_kind_classifies_to_itself() {
    for (idx, target) in BlockKind::PROBED.iter().copied().enumerate() {
        let mut log = Vec::new();
        let result = classify_with(scripted(target, &mut log));

        assert_eq!(result, target);

        // Short-circuit: the i-th kind (0-indexed) costs exactly i+1 probes,
        // and the probes seen are the prefix of the protocol order.
        assert_eq!(log.len(), idx + 1, "probe count for {target}");
        assert_eq!(log, BlockKind::PROBED[..=idx].to_vec());
    }
}

#[test]
fn exhausted_probes_fall_back_to_redstone() {
    let mut log = Vec::new();
    let result = classify_with(|kind| {
        log.push(kind);
        false
    });

    assert_eq!(result, BlockKind::RedstoneBlock);

    // The fallback is reported by elimination after exactly nine probes;
    // the last kind is never itself probed.
    assert_eq!(log.len(), 9);
    assert!(!log.contains(&BlockKind::RedstoneBlock));
    assert_eq!(log, BlockKind::PROBED.to_vec());
}

#[test]
fn earlier_kind_wins_when_predicates_overlap() {
    // If two membership tests could both answer true, probe order decides.
    let result = classify_with(|kind| {
        kind == BlockKind::Granite || kind == BlockKind::GoldBlock
    });
    assert_eq!(result, BlockKind::Granite);
}

#[test]
fn classify_is_idempotent_at_a_fixed_position() {
    let mut world = GridWorld::new();
    world = world.with_block(glam::IVec3::ZERO, BlockKind::Diorite);

    let first = classify(&mut world);
    let second = classify(&mut world);

    assert_eq!(first, BlockKind::Diorite);
    assert_eq!(first, second);
}

#[test]
fn probe_order_matches_protocol_ids() {
    // The declaration order is the wire contract: ids are 0..=9 in probe
    // order, and PROBED is ALL minus the fallback.
    for (idx, kind) in BlockKind::ALL.iter().copied().enumerate() {
        assert_eq!(kind.id(), idx as i32);
        assert_eq!(BlockKind::from_id(idx as i32), Some(kind));
    }
    assert_eq!(BlockKind::from_id(10), None);
    assert_eq!(BlockKind::from_id(-1), None);
    assert_eq!(BlockKind::ALL[..9], BlockKind::PROBED);
    assert_eq!(BlockKind::ALL[9], BlockKind::FALLBACK);
}

#[test]
fn resource_names_round_trip() {
    assert_eq!(BlockKind::LapisBlock.to_string(), "minecraft:lapis_block");
    assert_eq!(
        BlockKind::from_resource_name("minecraft:diamond_block"),
        Some(BlockKind::DiamondBlock)
    );
    assert_eq!(
        BlockKind::from_resource_name("granite"),
        Some(BlockKind::Granite)
    );
    assert_eq!(BlockKind::from_resource_name("minecraft:obsidian"), None);
}
