use yew::prelude::*;
use web_sys::MouseEvent;
use crate::models::CountryCode;

#[derive(Properties, PartialEq)]
pub struct CountryCodeSelectProps {
    pub value: CountryCode,
    pub on_change: Callback<CountryCode>,
    pub country_codes: &'static [CountryCode],
}

#[function_component(CountryCodeSelect)]
pub fn country_code_select(props: &CountryCodeSelectProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class="country-code-select">
            <button type="button" class="country-code-button" onclick={toggle}>
                <span class="country-flag">{props.value.flag}</span>
                {props.value.code}
                <span class="chevron">{"▾"}</span>
            </button>
            if *is_open {
                <ul class="country-code-list">
                    { for props.country_codes.iter().map(|country| {
                        let country = *country;
                        let on_change = props.on_change.clone();
                        let is_open = is_open.clone();
                        let onclick = Callback::from(move |_: MouseEvent| {
                            on_change.emit(country);
                            is_open.set(false);
                        });
                        html! {
                            <li key={country.code} class="country-code-option" onclick={onclick}>
                                <span class="country-flag">{country.flag}</span>
                                <span>{country.code}</span>
                            </li>
                        }
                    }) }
                </ul>
            }
        </div>
    }
}
