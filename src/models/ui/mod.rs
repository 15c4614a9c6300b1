// UI models module
// View-layer settings shared by the week-grid chip code

use serde::{Deserialize, Serialize};

/// Padding subtracted from the drawing area handed to a chip.
///
/// The layout engine passes these values into
/// `EventChip::did_available_area_change` before recomputing a chip's
/// rectangle. Stored with the host's other view settings, hence the serde
/// derives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChipInsets {
    pub horizontal: i32,
    pub vertical: i32,
}

impl Default for ChipInsets {
    fn default() -> Self {
        Self {
            horizontal: 2,
            vertical: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_insets() {
        let insets = ChipInsets::default();
        assert_eq!(insets.horizontal, 2);
        assert_eq!(insets.vertical, 2);
    }

    #[test]
    fn test_insets_roundtrip_through_serde() {
        let insets = ChipInsets {
            horizontal: 6,
            vertical: 1,
        };
        let json = serde_json::to_string(&insets).unwrap();
        let back: ChipInsets = serde_json::from_str(&json).unwrap();
        assert_eq!(back, insets);
    }
}
