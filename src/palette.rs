use std::collections::HashSet;

/// Color for stations whose organization has no assigned color
pub const NEUTRAL_COLOR: &str = "gray";

/// Tableau 10 followed by the CSS4 named colors in alphabetical order
pub const DEFAULT_PALETTE: &[&str] = &[
    // Tableau
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd",
    "#8c564b", "#e377c2", "#7f7f7f", "#bcbd22", "#17becf",
    // CSS4
    "#F0F8FF", "#FAEBD7", "#00FFFF", "#7FFFD4", "#F0FFFF", "#F5F5DC", "#FFE4C4", "#000000",
    "#FFEBCD", "#0000FF", "#8A2BE2", "#A52A2A", "#DEB887", "#5F9EA0", "#7FFF00", "#D2691E",
    "#FF7F50", "#6495ED", "#FFF8DC", "#DC143C", "#00FFFF", "#00008B", "#008B8B", "#B8860B",
    "#A9A9A9", "#006400", "#A9A9A9", "#BDB76B", "#8B008B", "#556B2F", "#FF8C00", "#9932CC",
    "#8B0000", "#E9967A", "#8FBC8F", "#483D8B", "#2F4F4F", "#2F4F4F", "#00CED1", "#9400D3",
    "#FF1493", "#00BFFF", "#696969", "#696969", "#1E90FF", "#B22222", "#FFFAF0", "#228B22",
    "#FF00FF", "#DCDCDC", "#F8F8FF", "#FFD700", "#DAA520", "#808080", "#008000", "#ADFF2F",
    "#808080", "#F0FFF0", "#FF69B4", "#CD5C5C", "#4B0082", "#FFFFF0", "#F0E68C", "#E6E6FA",
    "#FFF0F5", "#7CFC00", "#FFFACD", "#ADD8E6", "#F08080", "#E0FFFF", "#FAFAD2", "#D3D3D3",
    "#90EE90", "#D3D3D3", "#FFB6C1", "#FFA07A", "#20B2AA", "#87CEFA", "#778899", "#778899",
    "#B0C4DE", "#FFFFE0", "#00FF00", "#32CD32", "#FAF0E6", "#FF00FF", "#800000", "#66CDAA",
    "#0000CD", "#BA55D3", "#9370DB", "#3CB371", "#7B68EE", "#00FA9A", "#48D1CC", "#C71585",
    "#191970", "#F5FFFA", "#FFE4E1", "#FFE4B5", "#FFDEAD", "#000080", "#FDF5E6", "#808000",
    "#6B8E23", "#FFA500", "#FF4500", "#DA70D6", "#EEE8AA", "#98FB98", "#AFEEEE", "#DB7093",
    "#FFEFD5", "#FFDAB9", "#CD853F", "#FFC0CB", "#DDA0DD", "#B0E0E6", "#800080", "#663399",
    "#FF0000", "#BC8F8F", "#4169E1", "#8B4513", "#FA8072", "#F4A460", "#2E8B57", "#FFF5EE",
    "#A0522D", "#C0C0C0", "#87CEEB", "#6A5ACD", "#708090", "#708090", "#FFFAFA", "#00FF7F",
    "#4682B4", "#D2B48C", "#008080", "#D8BFD8", "#FF6347", "#40E0D0", "#EE82EE", "#F5DEB3",
    "#FFFFFF", "#F5F5F5", "#FFFF00", "#9ACD32",
];

/// Organization → color mapping, in organization discovery order
///
/// The i-th distinct organization gets `palette[i % palette.len()]`, so the
/// mapping depends only on the order organizations are first seen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrganizationColors {
    entries: Vec<(String, String)>,
}

impl OrganizationColors {
    /// Assign colors from `DEFAULT_PALETTE`
    pub fn assign<'a>(organizations: impl IntoIterator<Item = &'a str>) -> Self {
        Self::assign_with_palette(organizations, DEFAULT_PALETTE)
    }

    /// Assign colors from a caller-supplied palette
    ///
    /// Duplicate names keep the color of their first occurrence. An empty
    /// palette leaves every organization on `NEUTRAL_COLOR`.
    pub fn assign_with_palette<'a>(
        organizations: impl IntoIterator<Item = &'a str>,
        palette: &[&str],
    ) -> Self {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();

        for org in organizations {
            if !seen.insert(org) {
                continue;
            }
            let color = if palette.is_empty() {
                NEUTRAL_COLOR
            } else {
                palette[entries.len() % palette.len()]
            };
            entries.push((org.to_string(), color.to_string()));
        }

        Self { entries }
    }

    /// Color for an organization, `NEUTRAL_COLOR` when it was never assigned
    pub fn color_for(&self, organization: &str) -> &str {
        self.entries
            .iter()
            .find(|(org, _)| org == organization)
            .map(|(_, color)| color.as_str())
            .unwrap_or(NEUTRAL_COLOR)
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette_size() {
        assert_eq!(DEFAULT_PALETTE.len(), 158);
        assert_eq!(DEFAULT_PALETTE[0], "#1f77b4");
        assert_eq!(DEFAULT_PALETTE[10], "#F0F8FF");
    }

    #[test]
    fn test_assign_cycles_through_palette() {
        let colors = OrganizationColors::assign_with_palette(["A", "B", "C"], &["red", "blue"]);

        assert_eq!(colors.color_for("A"), "red");
        assert_eq!(colors.color_for("B"), "blue");
        assert_eq!(colors.color_for("C"), "red");
    }

    #[test]
    fn test_assign_is_deterministic_for_same_order() {
        let first = OrganizationColors::assign(["USGS", "TCEQ", "LCRA"]);
        let second = OrganizationColors::assign(["USGS", "TCEQ", "LCRA"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_assign_depends_on_discovery_order() {
        let first = OrganizationColors::assign(["USGS", "TCEQ"]);
        let second = OrganizationColors::assign(["TCEQ", "USGS"]);
        assert_ne!(first.color_for("USGS"), second.color_for("USGS"));
    }

    #[test]
    fn test_assign_skips_duplicates() {
        let colors = OrganizationColors::assign_with_palette(["A", "A", "B"], &["red", "blue"]);

        assert_eq!(colors.len(), 2);
        assert_eq!(colors.color_for("B"), "blue");
    }

    #[test]
    fn test_unknown_organization_is_neutral() {
        let colors = OrganizationColors::assign(["USGS"]);
        assert_eq!(colors.color_for("Unknown"), NEUTRAL_COLOR);
    }

    #[test]
    fn test_empty_palette_is_neutral() {
        let colors = OrganizationColors::assign_with_palette(["A"], &[]);
        assert_eq!(colors.color_for("A"), NEUTRAL_COLOR);
    }
}
