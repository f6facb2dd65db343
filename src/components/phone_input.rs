use yew::prelude::*;
use crate::components::country_code_select::CountryCodeSelect;
use crate::models::CountryCode;

#[derive(Properties, PartialEq)]
pub struct PhoneInputProps {
    pub phone_number: String,
    pub country_code: CountryCode,
    pub on_phone_number_change: Callback<InputEvent>,
    pub on_country_code_change: Callback<CountryCode>,
    pub country_codes: &'static [CountryCode],
}

/// Calling code dropdown plus the local number. The number is passed through
/// untouched; the pattern attribute is only a browser hint.
#[function_component(PhoneInput)]
pub fn phone_input(props: &PhoneInputProps) -> Html {
    html! {
        <div class="phone-input">
            <CountryCodeSelect
                value={props.country_code}
                on_change={props.on_country_code_change.clone()}
                country_codes={props.country_codes}
            />
            <input
                type="tel"
                id="phoneNumber"
                name="phoneNumber"
                value={props.phone_number.clone()}
                oninput={props.on_phone_number_change.clone()}
                placeholder="9876543210"
                required=true
                pattern="[0-9]{10}"
                title="Please enter a valid 10-digit phone number"
            />
        </div>
    }
}
