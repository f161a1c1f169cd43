//! Display density classes.

use serde::{Deserialize, Serialize};

/// A display density class.
///
/// Ordering follows the numeric code, so `VeryLow < Low < ... < FourK`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DensityTag {
    VeryLow,
    Low,
    #[default]
    Medium,
    High,
    VeryHigh,
    #[serde(rename = "hd")]
    Hd,
    #[serde(rename = "560")]
    D560,
    #[serde(rename = "2hd")]
    TwoHd,
    #[serde(rename = "4k")]
    FourK,
}

impl DensityTag {
    /// All densities in ascending order.
    pub const ALL: [DensityTag; 9] = [
        DensityTag::VeryLow,
        DensityTag::Low,
        DensityTag::Medium,
        DensityTag::High,
        DensityTag::VeryHigh,
        DensityTag::Hd,
        DensityTag::D560,
        DensityTag::TwoHd,
        DensityTag::FourK,
    ];

    /// Returns the numeric code stored in resource files.
    pub fn code(self) -> u8 {
        match self {
            DensityTag::VeryLow => 10,
            DensityTag::Low => 20,
            DensityTag::Medium => 30,
            DensityTag::High => 40,
            DensityTag::VeryHigh => 50,
            DensityTag::Hd => 60,
            DensityTag::D560 => 65,
            DensityTag::TwoHd => 70,
            DensityTag::FourK => 80,
        }
    }

    pub fn from_code(code: u8) -> Option<DensityTag> {
        Self::ALL.into_iter().find(|d| d.code() == code)
    }

    /// Screen width in pixels a design at this density is drawn for.
    pub fn reference_width(self) -> u32 {
        match self {
            DensityTag::VeryLow => 176,
            DensityTag::Low => 240,
            DensityTag::Medium => 360,
            DensityTag::High => 480,
            DensityTag::VeryHigh => 640,
            DensityTag::Hd => 1024,
            DensityTag::D560 => 1500,
            DensityTag::TwoHd => 2000,
            DensityTag::FourK => 2500,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DensityTag::VeryLow => "Very Low",
            DensityTag::Low => "Low",
            DensityTag::Medium => "Medium",
            DensityTag::High => "High",
            DensityTag::VeryHigh => "Very High",
            DensityTag::Hd => "HD",
            DensityTag::D560 => "560",
            DensityTag::TwoHd => "2HD",
            DensityTag::FourK => "4K",
        }
    }
}

impl std::fmt::Display for DensityTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Scales `size` drawn for density `from` to density `to`.
///
/// Each dimension is multiplied by the ratio of reference widths and
/// truncated, with a floor of one pixel.
pub fn scaled_size(from: DensityTag, to: DensityTag, size: (u32, u32)) -> (u32, u32) {
    let num = u64::from(to.reference_width());
    let den = u64::from(from.reference_width());
    let scale = |v: u32| -> u32 {
        let scaled = u64::from(v) * num / den;
        u32::try_from(scaled).unwrap_or(u32::MAX).max(1)
    };
    (scale(size.0), scale(size.1))
}

/// Target sizes for every other density when generating variants from one
/// source image.
pub fn variant_sizes(from: DensityTag, size: (u32, u32)) -> Vec<(DensityTag, (u32, u32))> {
    DensityTag::ALL
        .into_iter()
        .filter(|d| *d != from)
        .map(|d| (d, scaled_size(from, d, size)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_follows_codes() {
        for pair in DensityTag::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].code() < pair[1].code());
        }
    }

    #[test]
    fn test_from_code() {
        assert_eq!(DensityTag::from_code(65), Some(DensityTag::D560));
        assert_eq!(DensityTag::from_code(30), Some(DensityTag::Medium));
        assert_eq!(DensityTag::from_code(35), None);
        for d in DensityTag::ALL {
            assert_eq!(DensityTag::from_code(d.code()), Some(d));
        }
    }

    #[test]
    fn test_scaled_size_up_and_down() {
        assert_eq!(
            scaled_size(DensityTag::Medium, DensityTag::High, (36, 18)),
            (48, 24)
        );
        assert_eq!(
            scaled_size(DensityTag::High, DensityTag::Medium, (48, 24)),
            (36, 18)
        );
        assert_eq!(
            scaled_size(DensityTag::Medium, DensityTag::Medium, (7, 9)),
            (7, 9)
        );
    }

    #[test]
    fn test_scaled_size_never_zero() {
        assert_eq!(
            scaled_size(DensityTag::FourK, DensityTag::VeryLow, (1, 1)),
            (1, 1)
        );
    }

    #[test]
    fn test_variant_sizes_skip_source() {
        let sizes = variant_sizes(DensityTag::Hd, (1024, 512));
        assert_eq!(sizes.len(), DensityTag::ALL.len() - 1);
        assert!(sizes.iter().all(|(d, _)| *d != DensityTag::Hd));
        assert!(sizes.contains(&(DensityTag::TwoHd, (2000, 1000))));
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&DensityTag::FourK).unwrap(), "\"4k\"");
        let d: DensityTag = serde_json::from_str("\"very_high\"").unwrap();
        assert_eq!(d, DensityTag::VeryHigh);
    }
}
