//! Single-line rendering of emission results.

use crate::style::emit::EmissionResult;

/// Render an [`EmissionResult`] as `classes | style`.
///
/// Classes keep their emission order; style entries are in key order and
/// written as `name: value` pairs separated by `; `. An empty side renders
/// as `-`.
///
/// # Examples
///
/// ```
/// use strata::style::{Emission, EmissionResult};
/// use strata::testing::render_emission;
///
/// let result: EmissionResult = [
///     Emission::class("p-md".into()),
///     Emission::style("width".into(), "50%".into()),
/// ]
/// .into_iter()
/// .collect();
/// assert_eq!(render_emission(&result), "p-md | width: 50%");
/// ```
pub fn render_emission(result: &EmissionResult) -> String {
    let classes = if result.classes.is_empty() {
        "-".to_string()
    } else {
        result.class_name()
    };
    let style = if result.style.is_empty() {
        "-".to_string()
    } else {
        result
            .style
            .iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect::<Vec<_>>()
            .join("; ")
    };
    format!("{classes} | {style}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::emit::Emission;

    #[test]
    fn test_render_empty() {
        assert_eq!(render_emission(&EmissionResult::new()), "- | -");
    }

    #[test]
    fn test_render_style_sorted() {
        let result: EmissionResult = [
            Emission::style("width".into(), "10px".into()),
            Emission::style("height".into(), "5px".into()),
        ]
        .into_iter()
        .collect();
        assert_eq!(render_emission(&result), "- | height: 5px; width: 10px");
    }
}
