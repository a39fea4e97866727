//! Alignment modes shared by the configuration and rendering crates.

use serde::{Deserialize, Serialize};

/// Where body content sits when it is shorter than the viewport.
///
/// # Examples
///
/// ```
/// use scaffold_protocol::VerticalAlign;
///
/// assert_eq!(VerticalAlign::default(), VerticalAlign::Top);
/// assert_eq!(VerticalAlign::Center.leading_padding(6), 3);
/// assert_eq!(VerticalAlign::Bottom.leading_padding(6), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalAlign {
    /// Content is flush with the top; spare rows fall below it.
    #[default]
    Top,
    /// Spare rows are split, with the odd row going below the content.
    Center,
    /// Content is flush with the bottom; spare rows go above it.
    Bottom,
}

impl VerticalAlign {
    /// Returns how many of `spare` blank rows go above the content.
    #[must_use]
    pub fn leading_padding(self, spare: usize) -> usize {
        match self {
            Self::Top => 0,
            Self::Center => spare / 2,
            Self::Bottom => spare,
        }
    }
}

/// Horizontal placement of header and footer text inside their band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HorizontalAlign {
    /// Text starts at the left edge.
    Left,
    /// Text is centered; an odd spare column goes to the right.
    #[default]
    Center,
    /// Text ends at the right edge.
    Right,
}

impl HorizontalAlign {
    /// Returns how many of `spare` columns go to the left of the text.
    #[must_use]
    pub fn leading_padding(self, spare: usize) -> usize {
        match self {
            Self::Left => 0,
            Self::Center => spare / 2,
            Self::Right => spare,
        }
    }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    impl Arbitrary for VerticalAlign {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            prop_oneof![
                Just(VerticalAlign::Top),
                Just(VerticalAlign::Center),
                Just(VerticalAlign::Bottom),
            ]
            .boxed()
        }
    }

    proptest! {
        /// Leading padding never exceeds the spare rows available.
        #[test]
        fn leading_padding_is_bounded(mode in any::<VerticalAlign>(), spare in 0usize..10_000) {
            prop_assert!(mode.leading_padding(spare) <= spare);
        }

        /// Alignment modes roundtrip through JSON.
        #[test]
        fn vertical_align_roundtrip(mode in any::<VerticalAlign>()) {
            let json = serde_json::to_string(&mode).expect("serialize");
            let parsed: VerticalAlign = serde_json::from_str(&json).expect("deserialize");
            prop_assert_eq!(mode, parsed);
        }
    }
}
