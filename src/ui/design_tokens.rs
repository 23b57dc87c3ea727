// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens: palette, opacity, spacing, sizing, typography,
//! radii and shadows. Components never hard-code raw values; they pull from
//! here so the scales stay consistent.

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

    // Brand colors (the rainbow gradient endpoints)
    pub const BRAND_PURPLE: Color = Color::from_rgb(0.66, 0.33, 0.97);
    pub const BRAND_PINK: Color = Color::from_rgb(0.93, 0.28, 0.6);
    pub const BRAND_ORANGE: Color = Color::from_rgb(0.98, 0.45, 0.09);

    // Accent colors for interaction toggles
    pub const LIKE_PINK: Color = Color::from_rgb(0.93, 0.28, 0.6);
    pub const SAVE_PURPLE: Color = Color::from_rgb(0.66, 0.33, 0.97);

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
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_PRESSED: f32 = 0.9;

    /// Surface background for semi-transparent panels.
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 48.0;
    pub const ICON_XXL: f32 = 64.0;

    // Controls
    pub const BUTTON_HEIGHT: f32 = 32.0;

    // Avatars
    pub const AVATAR_SM: f32 = 32.0;
    pub const AVATAR_MD: f32 = 48.0;
    pub const AVATAR_LG: f32 = 128.0;

    // Feed cards (9:16 thumbnails)
    pub const CARD_WIDTH: f32 = 240.0;
    pub const CARD_THUMB_HEIGHT: f32 = 320.0;

    // Video screen
    pub const PLAYER_HEIGHT: f32 = 420.0;
    pub const SIDE_PANEL_WIDTH: f32 = 320.0;

    // Dialogs and toasts
    pub const DIALOG_WIDTH: f32 = 440.0;
    pub const TOAST_WIDTH: f32 = 320.0;

    // Profile banner
    pub const BANNER_HEIGHT: f32 = 160.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const CAPTION: f32 = 12.0;
    pub const BODY: f32 = 14.0;
    pub const TITLE_SM: f32 = 16.0;
    pub const TITLE_MD: f32 = 20.0;
    pub const TITLE_LG: f32 = 24.0;
    pub const DISPLAY: f32 = 32.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    /// Effectively circular for square widgets.
    pub const FULL: f32 = 10_000.0;
}

// ============================================================================
// Border Widths
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Shadows
// ============================================================================

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::new(0.0, 0.0),
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color {
            a: 0.2,
            ..Color::BLACK
        },
        offset: Vector::new(0.0, 1.0),
        blur_radius: 3.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color {
            a: 0.3,
            ..Color::BLACK
        },
        offset: Vector::new(0.0, 2.0),
        blur_radius: 8.0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_monotonic() {
        assert!(spacing::XXS < spacing::XS);
        assert!(spacing::XS < spacing::SM);
        assert!(spacing::SM < spacing::MD);
        assert!(spacing::MD < spacing::LG);
        assert!(spacing::LG < spacing::XL);
        assert!(spacing::XL < spacing::XXL);
    }

    #[test]
    fn brand_colors_are_distinct() {
        assert_ne!(palette::BRAND_PURPLE, palette::BRAND_PINK);
        assert_ne!(palette::BRAND_PINK, palette::BRAND_ORANGE);
    }

    #[test]
    fn card_thumbnail_is_portrait() {
        assert!(sizing::CARD_THUMB_HEIGHT > sizing::CARD_WIDTH);
    }
}
