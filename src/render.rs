//! Text rendering of the view state.
//!
//! Rendering is a pure function: the same [`ViewState`] always yields
//! the same frame, and nothing here mutates state or performs I/O.

use crate::app::ViewState;

/// Render the complete frame for the given state.
pub fn render(state: &ViewState) -> String {
    let mut out = String::new();
    out.push_str("Recipe Ideas\n");
    out.push_str("Find meals based on ingredients you have at home.\n\n");

    if state.loading {
        out.push_str("Loading recipes...\n");
    }
    if !state.error.is_empty() {
        out.push_str(&format!("! {}\n", state.error));
    }

    if !state.results.is_empty() {
        for (i, meal) in state.results.iter().enumerate() {
            out.push_str(&format!("{:>3}. {}  [{}]\n", i + 1, meal.name, meal.thumbnail));
        }
    }

    if let Some(detail) = &state.selected {
        out.push('\n');
        out.push_str(&format!("=== {} ===\n", detail.name));
        out.push_str(&format!("Category: {}\n", detail.category));
        out.push_str(&format!("Area: {}\n", detail.area));

        out.push_str("\nIngredients:\n");
        for line in &detail.ingredients {
            // measure first, matching the source listing order
            if line.measure.is_empty() {
                out.push_str(&format!("  - {}\n", line.name));
            } else {
                out.push_str(&format!("  - {} {}\n", line.measure, line.name));
            }
        }

        out.push_str("\nInstructions:\n");
        out.push_str(detail.instructions.trim_end());
        out.push('\n');

        if let Some(url) = &detail.youtube {
            out.push_str(&format!("\nWatch on YouTube: {}\n", url));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{IngredientLine, MealDetail, MealSummary};

    fn base_state() -> ViewState {
        ViewState {
            query: "chicken".to_string(),
            ..ViewState::default()
        }
    }

    #[test]
    fn test_loading_and_error_lines() {
        let mut state = base_state();
        state.loading = true;
        state.error = "Error fetching recipes. Please try again.".to_string();

        let frame = render(&state);
        assert!(frame.contains("Loading recipes..."));
        assert!(frame.contains("! Error fetching recipes. Please try again."));
    }

    #[test]
    fn test_result_list_is_numbered_in_order() {
        let mut state = base_state();
        state.results = vec![
            MealSummary {
                id: "1".to_string(),
                name: "Chicken Dish".to_string(),
                thumbnail: "u".to_string(),
            },
            MealSummary {
                id: "2".to_string(),
                name: "Chicken Soup".to_string(),
                thumbnail: "v".to_string(),
            },
        ];

        let frame = render(&state);
        let first = frame.find("1. Chicken Dish").unwrap();
        let second = frame.find("2. Chicken Soup").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_detail_overlay() {
        let mut state = base_state();
        state.selected = Some(MealDetail {
            id: "52940".to_string(),
            name: "Brown Stew Chicken".to_string(),
            thumbnail: "t".to_string(),
            category: "Chicken".to_string(),
            area: "Jamaican".to_string(),
            ingredients: vec![
                IngredientLine {
                    name: "Chicken".to_string(),
                    measure: "1 whole".to_string(),
                },
                IngredientLine {
                    name: "Salt".to_string(),
                    measure: String::new(),
                },
            ],
            instructions: "Brown the chicken.\nStew it.".to_string(),
            youtube: Some("https://youtu.be/x".to_string()),
        });

        let frame = render(&state);
        assert!(frame.contains("=== Brown Stew Chicken ==="));
        assert!(frame.contains("Category: Chicken"));
        assert!(frame.contains("Area: Jamaican"));
        assert!(frame.contains("  - 1 whole Chicken"));
        assert!(frame.contains("  - Salt"));
        assert!(frame.contains("Brown the chicken.\nStew it."));
        assert!(frame.contains("Watch on YouTube: https://youtu.be/x"));
    }

    #[test]
    fn test_youtube_link_omitted_when_absent() {
        let mut state = base_state();
        state.selected = Some(MealDetail {
            id: "1".to_string(),
            name: "Plain".to_string(),
            thumbnail: String::new(),
            category: String::new(),
            area: String::new(),
            ingredients: vec![],
            instructions: String::new(),
            youtube: None,
        });

        let frame = render(&state);
        assert!(!frame.contains("YouTube"));
    }
}
