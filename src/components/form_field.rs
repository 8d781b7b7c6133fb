use crate::validation::ValidationErrors;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub max_length: Option<u32>,
    #[prop_or_default]
    pub disabled: bool,
}

/// Mensaje de error de un campo, listo para `FormField`
pub fn field_error(errors: &ValidationErrors, field: &str) -> Option<AttrValue> {
    errors.get(field).map(|message| AttrValue::from(message.to_string()))
}

#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    let maxlength = props
        .max_length
        .map(|max| AttrValue::from(max.to_string()));

    html! {
        <div class="form-group">
            <label for={props.id.clone()}>{ props.label.clone() }</label>
            <input
                id={props.id.clone()}
                name={props.id.clone()}
                type={props.input_type.clone()}
                class={classes!("form-input", props.error.is_some().then_some("input-error"))}
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                disabled={props.disabled}
                {maxlength}
                {oninput}
            />
            if let Some(error) = props.error.clone() {
                <p class="field-error">{ error }</p>
            }
        </div>
    }
}
