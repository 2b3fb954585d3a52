// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Colors, spacing, sizes and radii shared by every section view.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_folio::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let backdrop = Color {
    a: opacity::OVERLAY_BACKDROP,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.93, 0.93, 0.95);

    // Navy scale (page surfaces)
    pub const NAVY_900: Color = Color::from_rgb(0.176, 0.196, 0.314); // #2D3250
    pub const NAVY_800: Color = Color::from_rgb(0.208, 0.231, 0.365);
    pub const NAVY_700: Color = Color::from_rgb(0.259, 0.278, 0.412); // #424769
    pub const NAVY_600: Color = Color::from_rgb(0.439, 0.467, 0.631); // #7077A1

    // Accent (amber scale)
    pub const AMBER_200: Color = Color::from_rgb(0.988, 0.871, 0.765);
    pub const AMBER_500: Color = Color::from_rgb(0.965, 0.694, 0.478); // #F6B17A
    pub const AMBER_600: Color = Color::from_rgb(0.851, 0.553, 0.318);

    // Semantic
    pub const SUCCESS_500: Color = Color::from_rgb(0.298, 0.686, 0.314);
    pub const INFO_500: Color = Color::from_rgb(0.129, 0.588, 0.953);
    pub const WARNING_500: Color = Color::from_rgb(1.0, 0.596, 0.0);
    pub const ERROR_500: Color = Color::from_rgb(0.957, 0.263, 0.212);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    /// Full-window image viewer backdrop
    pub const OVERLAY_BACKDROP: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;

    /// Inactive position indicator dot
    pub const INDICATOR_IDLE: f32 = 0.3;

    /// Surface background - Semi-transparent cards
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
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const CONTENT_MAX_WIDTH: f32 = 1200.0;

    /// Height of the main gallery image area.
    pub const GALLERY_HEIGHT: f32 = 460.0;
    pub const GALLERY_ARROW: f32 = 50.0;
    pub const GALLERY_EXPAND: f32 = 45.0;
    pub const INDICATOR_DOT: f32 = 8.0;
    pub const INDICATOR_DOT_ACTIVE: f32 = 10.0;

    pub const PROJECT_CARD_WIDTH: f32 = 280.0;
    pub const PROJECT_THUMBNAIL_HEIGHT: f32 = 180.0;

    pub const SKILL_BAR_HEIGHT: f32 = 8.0;
    pub const NAVBAR_HEIGHT: f32 = 56.0;
    pub const TOAST_WIDTH: f32 = 340.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Page-level section headings
    pub const TITLE_LG: f32 = 32.0;

    /// Card headings, gallery caption title
    pub const TITLE_MD: f32 = 22.0;

    /// Small title - Category headers
    pub const TITLE_SM: f32 = 18.0;

    pub const BODY_LG: f32 = 16.0;

    pub const BODY: f32 = 14.0;

    /// Caption - Tags, percentages, small info
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const XL: f32 = 16.0;
    pub const FULL: f32 = 9999.0; // Pill shape
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

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 32.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_BACKDROP > opacity::OVERLAY_STRONG);
    assert!(opacity::INDICATOR_IDLE > 0.0 && opacity::INDICATOR_IDLE < 1.0);

    assert!(sizing::INDICATOR_DOT_ACTIVE > sizing::INDICATOR_DOT);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);
};
