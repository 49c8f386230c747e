//! Built-in design-system presets.
//!
//! A preset is a named `{radius, padding, dimension}` configuration drawn
//! from published platform guidelines. The catalog is static data grouped by
//! category; applying one goes through [`crate::model::RadiusStore::apply_preset`].

// =============================================================================
// Types
// =============================================================================

/// Catalog grouping for a preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Ios,
    Material,
    Web,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 3] = [Category::Ios, Category::Material, Category::Web];

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Category::Ios => "iOS",
            Category::Material => "Material",
            Category::Web => "Web",
        }
    }
}

/// A named radius/padding/dimension configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetConfig {
    pub name: &'static str,
    pub outer_radius: u16,
    pub padding: u16,
    pub dimension: u16,
    pub description: &'static str,
    pub category: Category,
}

// =============================================================================
// Catalog
// =============================================================================

/// The built-in catalog.
pub const DESIGN_PRESETS: &[PresetConfig] = &[
    // iOS Human Interface Guidelines
    PresetConfig {
        name: "iOS Button",
        outer_radius: 8,
        padding: 12,
        dimension: 180,
        description: "Standard iOS button",
        category: Category::Ios,
    },
    PresetConfig {
        name: "iOS Card",
        outer_radius: 12,
        padding: 16,
        dimension: 180,
        description: "iOS card component",
        category: Category::Ios,
    },
    PresetConfig {
        name: "iOS Modal",
        outer_radius: 16,
        padding: 24,
        dimension: 180,
        description: "iOS modal/sheet",
        category: Category::Ios,
    },
    PresetConfig {
        name: "iOS Large Card",
        outer_radius: 20,
        padding: 32,
        dimension: 180,
        description: "Large iOS card",
        category: Category::Ios,
    },
    // Material Design
    PresetConfig {
        name: "Material Button",
        outer_radius: 4,
        padding: 8,
        dimension: 180,
        description: "Material Design button",
        category: Category::Material,
    },
    PresetConfig {
        name: "Material Card",
        outer_radius: 8,
        padding: 16,
        dimension: 180,
        description: "Material Design card",
        category: Category::Material,
    },
    PresetConfig {
        name: "Material FAB",
        outer_radius: 28,
        padding: 16,
        dimension: 180,
        description: "Floating Action Button",
        category: Category::Material,
    },
    PresetConfig {
        name: "Material Sheet",
        outer_radius: 16,
        padding: 24,
        dimension: 180,
        description: "Bottom sheet",
        category: Category::Material,
    },
    // Modern Web
    PresetConfig {
        name: "Subtle Button",
        outer_radius: 6,
        padding: 12,
        dimension: 180,
        description: "Modern subtle button",
        category: Category::Web,
    },
    PresetConfig {
        name: "Dashboard Card",
        outer_radius: 12,
        padding: 20,
        dimension: 180,
        description: "Dashboard component",
        category: Category::Web,
    },
    PresetConfig {
        name: "Hero Section",
        outer_radius: 24,
        padding: 48,
        dimension: 180,
        description: "Large hero container",
        category: Category::Web,
    },
];

/// Presets belonging to one category, in catalog order.
pub fn in_category(category: Category) -> impl Iterator<Item = &'static PresetConfig> {
    DESIGN_PRESETS.iter().filter(move |p| p.category == category)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::max_padding;
    use crate::types::{DIMENSION_MAX, DIMENSION_MIN, RADIUS_MAX};

    #[test]
    fn test_catalog_is_nonempty_per_category() {
        for category in Category::ALL {
            assert!(
                in_category(category).count() > 0,
                "empty category {:?}",
                category
            );
        }
    }

    #[test]
    fn test_every_preset_is_within_bounds() {
        for preset in DESIGN_PRESETS {
            assert!(preset.outer_radius <= RADIUS_MAX, "{}", preset.name);
            assert!(
                (DIMENSION_MIN..=DIMENSION_MAX).contains(&preset.dimension),
                "{}",
                preset.name
            );
            assert!(
                preset.padding <= max_padding(preset.dimension),
                "{} padding exceeds ceiling",
                preset.name
            );
        }
    }

    #[test]
    fn test_names_are_unique() {
        for (i, a) in DESIGN_PRESETS.iter().enumerate() {
            for b in &DESIGN_PRESETS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_categories_partition_the_catalog() {
        let total: usize = Category::ALL.iter().map(|&c| in_category(c).count()).sum();
        assert_eq!(total, DESIGN_PRESETS.len());
    }
}
