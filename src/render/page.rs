use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::Write;

use crate::core::questions::QUESTIONS;
use crate::core::validation::{field_mark, FieldMark, FormField, ValidationFailure};
use crate::models::{AssessmentForm, Gender};
use crate::render::regions::{ResultRegions, RESULT_CONTAINER_ID};

const TEMPLATE: &str = include_str!("templates/index.html");

/// Everything needed to render the quiz page
#[derive(Debug, Clone, Copy)]
pub struct PageView<'a> {
    /// Values to re-populate the form with
    pub form: &'a AssessmentForm,
    /// Outcome of the last validation, `None` on a fresh page
    pub failure: Option<&'a ValidationFailure>,
    /// Results panel, present only after a successful submission
    pub result: Option<&'a ResultRegions>,
    /// Keywords offered as "find nearby" buttons
    pub place_types: &'a [String],
}

/// Render the full quiz page
pub fn render_page(view: &PageView<'_>) -> String {
    TEMPLATE
        .replace("{{{ALERT}}}", &alert(view.failure))
        .replace("{{{PERSONAL_FIELDS}}}", &personal_fields(view.form, view.failure))
        .replace("{{{QUESTIONS}}}", &questions(view.form, view.failure))
        .replace("{{{NEARBY_BUTTONS}}}", &nearby_buttons(view.place_types))
        .replace("{{{RESULT}}}", &result_panel(view.result))
}

fn input_style(mark: FieldMark) -> &'static str {
    match mark {
        FieldMark::Untouched => "",
        FieldMark::Cleared => r#" style="border-color: #ddd""#,
        FieldMark::Marked => r#" style="border-color: red""#,
    }
}

fn group_style(mark: FieldMark) -> &'static str {
    match mark {
        FieldMark::Untouched => "",
        FieldMark::Cleared => r#" style="border: none""#,
        FieldMark::Marked => r#" style="border: 2px solid red""#,
    }
}

fn alert(failure: Option<&ValidationFailure>) -> String {
    let Some(failure) = failure else {
        return String::new();
    };

    let message = failure.to_string();
    // serde_json yields a valid JS string literal
    let literal = serde_json::to_string(&message).unwrap_or_default();

    format!(
        r#"<div class="form-alert" role="alert">{}</div>
    <script>alert({});</script>"#,
        encode_text(&message),
        literal
    )
}

fn text_input(
    out: &mut String,
    field: FormField,
    label: &str,
    kind: &str,
    value: Option<String>,
    failure: Option<&ValidationFailure>,
) {
    let id = field.id();
    let value = value.unwrap_or_default();
    let _ = write!(
        out,
        r#"<label class="field" for="{id}">{label}</label>
            <input type="{kind}" id="{id}" name="{id}" required value="{value}"{style}>
            "#,
        id = id,
        label = label,
        kind = kind,
        value = encode_double_quoted_attribute(&value),
        style = input_style(field_mark(failure, field)),
    );
}

fn personal_fields(form: &AssessmentForm, failure: Option<&ValidationFailure>) -> String {
    let mut out = String::new();

    text_input(&mut out, FormField::Name, "Name", "text", form.name.clone(), failure);
    text_input(
        &mut out,
        FormField::Age,
        "Age",
        "number",
        form.age.map(|age| age.to_string()),
        failure,
    );

    let _ = write!(
        out,
        r#"<label class="field" for="gender">Gender</label>
            <select id="gender" name="gender" required{}>
                <option value="">Select...</option>"#,
        input_style(field_mark(failure, FormField::Gender))
    );
    for gender in Gender::ALL {
        let selected = if form.gender == Some(gender) { " selected" } else { "" };
        let _ = write!(
            out,
            r#"
                <option value="{}"{}>{}</option>"#,
            gender.as_str(),
            selected,
            gender
        );
    }
    out.push_str(
        r#"
            </select>
            "#,
    );

    text_input(
        &mut out,
        FormField::Height,
        "Height (cm)",
        "number",
        form.height.map(|h| h.to_string()),
        failure,
    );
    text_input(
        &mut out,
        FormField::Weight,
        "Weight (kg)",
        "number",
        form.weight.map(|w| w.to_string()),
        failure,
    );

    out
}

fn questions(form: &AssessmentForm, failure: Option<&ValidationFailure>) -> String {
    let answers = form.answers();
    let mut out = String::new();

    for (index, question) in QUESTIONS.iter().enumerate() {
        let style = group_style(field_mark(failure, FormField::Question(index)));
        let _ = write!(
            out,
            r#"<div class="question-container" id="{id}-container"{style}>
                <p>{number}. {prompt}</p>"#,
            id = question.id,
            style = style,
            number = index + 1,
            prompt = encode_text(question.prompt),
        );

        for (value, option) in question.options.iter().enumerate() {
            let checked = if answers[index] == Some(value as u8) { " checked" } else { "" };
            let _ = write!(
                out,
                r#"
                <label><input type="radio" name="{}" value="{}"{}> {}</label>"#,
                question.id,
                value,
                checked,
                encode_text(option)
            );
        }

        out.push_str(
            r#"
            </div>
            "#,
        );
    }

    out
}

fn nearby_buttons(place_types: &[String]) -> String {
    place_types
        .iter()
        .map(|place| {
            format!(
                r#"<button type="button" class="nearby" data-place="{}">Find nearby {}</button>"#,
                encode_double_quoted_attribute(place),
                encode_text(place)
            )
        })
        .collect::<Vec<_>>()
        .join("\n        ")
}

fn result_panel(result: Option<&ResultRegions>) -> String {
    let Some(regions) = result else {
        return format!(r#"<div id="{}" style="display: none;"></div>"#, RESULT_CONTAINER_ID);
    };

    let mut out = format!(
        r#"<div id="{}" style="display: block; background-color: {};">"#,
        RESULT_CONTAINER_ID, regions.background
    );
    for (id, markup) in regions.iter() {
        let _ = write!(out, "\n        <div id=\"{}\">{}</div>", id, markup);
    }
    let _ = write!(
        out,
        r#"
    </div>
    <script>document.getElementById("{}").scrollIntoView({{ behavior: "smooth" }});</script>"#,
        RESULT_CONTAINER_ID
    );

    out
}
