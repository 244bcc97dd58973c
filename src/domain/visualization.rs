// Visualization naming - display labels and icon files from type names

const VISUALIZATION_SUFFIX: &str = "Visualization";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualizationName {
    pub display_name: String,
    pub image_url: String,
}

impl VisualizationName {
    pub fn from_type_name(type_name: &str) -> Self {
        let base = Self::strip_suffix(type_name);
        Self {
            display_name: Self::format_display_name(base),
            image_url: format!("{}.png", base),
        }
    }

    fn strip_suffix(type_name: &str) -> &str {
        // Convert "BarChartVisualization" to "BarChart"
        let split = type_name.len().checked_sub(VISUALIZATION_SUFFIX.len());
        match split {
            Some(idx)
                if type_name.is_char_boundary(idx)
                    && type_name[idx..].eq_ignore_ascii_case(VISUALIZATION_SUFFIX) =>
            {
                type_name[..idx].trim_end()
            }
            _ => type_name,
        }
    }

    fn format_display_name(base: &str) -> String {
        // Convert "BarChart" to "Bar Chart"
        let mut name = String::with_capacity(base.len() + 4);
        for c in base.chars() {
            if !name.is_empty() && c.is_ascii_uppercase() {
                name.push(' ');
            }
            name.push(c);
        }
        name.trim().to_string()
    }
}
