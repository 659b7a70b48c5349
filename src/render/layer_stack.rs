use serde::{Deserialize, Serialize};

/// Paint layer of a frame primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameLayer {
    Background,
    Grid,
    Data,
    Spines,
    Labels,
}

impl FrameLayer {
    /// Back-to-front paint order.
    pub const CANONICAL_ORDER: [Self; 5] = [
        Self::Background,
        Self::Grid,
        Self::Data,
        Self::Spines,
        Self::Labels,
    ];

    /// Layers clipped to the background patch.
    #[must_use]
    pub fn is_clipped(self) -> bool {
        matches!(self, Self::Grid | Self::Data)
    }
}
