//! Text rendering of the form for the terminal.

use serde::Serialize;

use crate::api::{Field, FilteredResponse};
use crate::form::FormState;
use crate::options::{DisplayOption, OptionSelector};

fn to_pretty<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "null".to_string())
}

fn render_field<T: Serialize>(field: &Field<T>) -> String {
    match field {
        Field::Missing => "undefined".to_string(),
        Field::Null => "null".to_string(),
        Field::Present(value) => to_pretty(value),
    }
}

/// The checkbox list, one line per option.
pub fn render_options<S: OptionSelector>(selector: &S) -> String {
    let chosen = selector.chosen();
    selector
        .items()
        .iter()
        .map(|item| {
            let checked = item
                .value
                .parse::<DisplayOption>()
                .map(|option| chosen.is_selected(option))
                .unwrap_or(false);
            let mark = if checked { "x" } else { " " };
            format!("  [{}] {} ({})", mark, item.label, item.value)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The selected optional fields, in the order the form displays them.
///
/// Selected fields missing upstream are shown as `undefined`, fields the
/// upstream sent as `null` as `null`.
pub fn render_filtered(response: &FilteredResponse) -> String {
    let selection = response.selection;
    let mut lines = vec!["Filtered Response".to_string()];

    if selection.numbers() {
        lines.push(format!("Numbers: {}", render_field(&response.numbers)));
    }
    if selection.alphabets() {
        lines.push(format!("Alphabets: {}", render_field(&response.alphabets)));
    }
    if selection.highest_alphabet() {
        lines.push(format!(
            "Highest Alphabet: {}",
            render_field(&response.highest_alphabet)
        ));
    }

    lines.join("\n")
}

/// The whole form: input, hint, options, submit control, error and response.
pub fn render_form<S: OptionSelector>(state: &FormState, selector: &S) -> String {
    let mut lines = vec![format!("Data (comma-separated): {}", state.raw_input())];

    if let Some(hint) = state.input_hint() {
        lines.push(format!("  ! {}", hint));
    }

    if state.options_visible() {
        lines.push("Select Options to Display".to_string());
        lines.push(render_options(selector));
    }

    let control = if state.can_submit() || state.is_submitting() {
        format!("[{}]", state.submit_label())
    } else {
        format!("[{}] (disabled)", state.submit_label())
    };
    lines.push(control);

    if let Some(error) = state.error() {
        lines.push(format!("Error: {}", error));
    }

    if let Some(response) = state.response() {
        lines.push(render_filtered(response));
        lines.push(to_pretty(response));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiResponse, project};
    use crate::form::{FormEvent, reduce};
    use crate::options::{CheckboxSelector, OptionSet};
    use serde_json::json;

    #[test]
    fn renders_only_selected_fields() {
        let response = ApiResponse {
            numbers: vec!["1".to_string()].into(),
            alphabets: vec!["A".to_string()].into(),
            highest_alphabet: json!(["A"]).into(),
            ..ApiResponse::default()
        };
        let text = render_filtered(&project(&response, OptionSet::new(false, true, true)));

        assert!(text.starts_with("Filtered Response"));
        assert!(text.contains("Numbers: ["));
        assert!(text.contains("Highest Alphabet: ["));
        assert!(!text.contains("Alphabets:"));
    }

    #[test]
    fn selected_but_missing_field_is_undefined() {
        let text = render_filtered(&project(
            &ApiResponse::default(),
            OptionSet::new(true, false, false),
        ));
        assert!(text.contains("Alphabets: undefined"));
    }

    #[test]
    fn selected_null_field_renders_as_null() {
        let response: ApiResponse = serde_json::from_value(json!({
            "is_success": true,
            "numbers": null
        }))
        .unwrap();
        let text = render_filtered(&project(&response, OptionSet::new(true, true, false)));

        assert!(text.contains("Numbers: null"));
        assert!(text.contains("Alphabets: undefined"));
    }

    #[test]
    fn invalid_input_hides_options_and_disables_submit() {
        let state = reduce(&FormState::default(), FormEvent::InputChanged("AB".into()));
        let text = render_form(&state, &CheckboxSelector::default());

        assert!(text.contains("! Data must be valid: single alphabets or numbers."));
        assert!(!text.contains("Select Options to Display"));
        assert!(text.contains("[Submit] (disabled)"));
    }

    #[test]
    fn valid_input_shows_checkboxes() {
        let state = reduce(&FormState::default(), FormEvent::InputChanged("A,1".into()));
        let mut selector = CheckboxSelector::default();
        selector.set_checked(DisplayOption::Numbers, true);

        let text = render_form(&state, &selector);
        assert!(text.contains("[x] Numbers (numbers)"));
        assert!(text.contains("[ ] Alphabets (alphabets)"));
        assert!(text.ends_with("[Submit]"));
    }
}
