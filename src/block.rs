//! The closed block enumeration shared between the turtle core and its environment.

use serde::{Deserialize, Serialize};

/// A block kind recognized by the turtle protocol.
///
/// This is a closed, ordered set shared verbatim with the environment: the
/// declaration order defines probe priority for [`classify`](crate::probe::classify)
/// and the discriminants are the integer ids used at the call boundary. Adding,
/// removing, or reordering members is a breaking protocol change.
#[repr(i32)]
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum BlockKind {
    #[default]
    Air,
    Cobblestone,
    Granite,
    Andesite,
    Diorite,
    LapisBlock,
    IronBlock,
    GoldBlock,
    DiamondBlock,
    RedstoneBlock,
}

impl BlockKind {
    /// Every kind, in protocol order.
    pub const ALL: [BlockKind; 10] = [
        BlockKind::Air,
        BlockKind::Cobblestone,
        BlockKind::Granite,
        BlockKind::Andesite,
        BlockKind::Diorite,
        BlockKind::LapisBlock,
        BlockKind::IronBlock,
        BlockKind::GoldBlock,
        BlockKind::DiamondBlock,
        BlockKind::RedstoneBlock,
    ];

    /// The kinds tested explicitly by the prober, in probe order.
    ///
    /// [`FALLBACK`](Self::FALLBACK) is excluded: it is reported by elimination
    /// and never probed.
    pub const PROBED: [BlockKind; 9] = [
        BlockKind::Air,
        BlockKind::Cobblestone,
        BlockKind::Granite,
        BlockKind::Andesite,
        BlockKind::Diorite,
        BlockKind::LapisBlock,
        BlockKind::IronBlock,
        BlockKind::GoldBlock,
        BlockKind::DiamondBlock,
    ];

    /// The kind the prober reports when no explicit probe matches.
    pub const FALLBACK: BlockKind = BlockKind::RedstoneBlock;

    /// The integer id used for this kind at the environment call boundary.
    pub fn id(self) -> i32 {
        self as i32
    }

    /// Inverse of [`id`](Self::id). `None` for ids outside the protocol set.
    pub fn from_id(id: i32) -> Option<Self> {
        Self::ALL.get(usize::try_from(id).ok()?).copied()
    }

    /// Inverse of the `Display` rendering. Accepts the name with or without
    /// the `minecraft:` namespace prefix.
    pub fn from_resource_name(name: &str) -> Option<Self> {
        let bare = name.strip_prefix("minecraft:").unwrap_or(name);
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.resource_name() == bare)
    }

    fn resource_name(self) -> &'static str {
        match self {
            BlockKind::Air => "air",
            BlockKind::Cobblestone => "cobblestone",
            BlockKind::Granite => "granite",
            BlockKind::Andesite => "andesite",
            BlockKind::Diorite => "diorite",
            BlockKind::LapisBlock => "lapis_block",
            BlockKind::IronBlock => "iron_block",
            BlockKind::GoldBlock => "gold_block",
            BlockKind::DiamondBlock => "diamond_block",
            BlockKind::RedstoneBlock => "redstone_block",
        }
    }
}

impl core::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "minecraft:{}", self.resource_name())
    }
}
