use yew::prelude::*;

#[function_component(InvalidAssessment)]
pub fn invalid_assessment() -> Html {
    html! {
        <div class="invalid-assessment">{"Invalid assessment type"}</div>
    }
}
