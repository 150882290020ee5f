// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design tokens of the banner overlay, following the W3C Design Tokens naming.

## Organization

- **Palette**: Base colors, also reachable by name through [`named`]
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Banner and control sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_banner::ui::design_tokens::{named, palette, spacing};

assert_eq!(named("success-500"), Some(palette::SUCCESS_500));
assert_eq!(named("no-such-token"), None);

let padding = spacing::MD; // 16px
```
"#]

use crate::domain::banner::{BannerKind, Rgba};
use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (blue scale)
    pub const PRIMARY_100: Color = Color::from_rgb(0.85, 0.92, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_700: Color = Color::from_rgb(0.15, 0.4, 0.7);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Banner background
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;

    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const INPUT_HEIGHT: f32 = 40.0;

    /// Widest a banner gets on large windows.
    pub const BANNER_MAX_WIDTH: f32 = 560.0;
    /// Height of a single-line banner.
    pub const BANNER_MIN_HEIGHT: f32 = 64.0;
    /// Extra height taken by a title line.
    pub const TITLE_LINE: f32 = 20.0;
    /// Reply area height once fully expanded, unless the window is smaller.
    pub const REPLY_EXPANDED_HEIGHT: f32 = 240.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Banner title
    pub const TITLE_SM: f32 = 16.0;

    /// Banner message, reply input
    pub const BODY: f32 = 14.0;

    /// Reply button label
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Reply input
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Banner accents
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Named tokens
// ============================================================================

/// Resolves a palette token such as `"success-500"` or `"gray-100"`.
#[must_use]
pub fn named(token: &str) -> Option<Color> {
    let color = match token.trim().to_ascii_lowercase().as_str() {
        "black" => palette::BLACK,
        "white" => palette::WHITE,
        "gray-900" => palette::GRAY_900,
        "gray-700" => palette::GRAY_700,
        "gray-400" => palette::GRAY_400,
        "gray-200" => palette::GRAY_200,
        "gray-100" => palette::GRAY_100,
        "primary-100" => palette::PRIMARY_100,
        "primary-500" => palette::PRIMARY_500,
        "primary-700" => palette::PRIMARY_700,
        "error-500" => palette::ERROR_500,
        "warning-500" => palette::WARNING_500,
        "success-500" => palette::SUCCESS_500,
        "info-500" => palette::INFO_500,
        _ => return None,
    };
    Some(color)
}

/// Accent color of a banner kind. `Custom` has none.
#[must_use]
pub fn kind_accent(kind: BannerKind) -> Option<Color> {
    match kind {
        BannerKind::Success => Some(palette::SUCCESS_500),
        BannerKind::Info => Some(palette::INFO_500),
        BannerKind::Warning => Some(palette::WARNING_500),
        BannerKind::Error => Some(palette::ERROR_500),
        BannerKind::Custom => None,
    }
}

#[must_use]
pub fn from_rgba(color: Rgba) -> Color {
    Color::from_rgba(color.r, color.g, color.b, color.a)
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Sizing validation
    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::BANNER_MIN_HEIGHT > sizing::ICON_LG);
    assert!(sizing::REPLY_EXPANDED_HEIGHT > sizing::INPUT_HEIGHT);

    // Typography validation
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn named_tokens_ignore_case_and_padding() {
        assert_eq!(named(" Warning-500 "), Some(palette::WARNING_500));
        assert_eq!(named("warning"), None);
    }

    #[test]
    fn custom_kind_has_no_accent() {
        assert_eq!(kind_accent(BannerKind::Error), Some(palette::ERROR_500));
        assert_eq!(kind_accent(BannerKind::Custom), None);
    }
}
