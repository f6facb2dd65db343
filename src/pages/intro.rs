use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::MouseEvent;
use log::warn;
use crate::Route;
use crate::components::invalid_assessment::InvalidAssessment;
use crate::content::Offering;

#[derive(Properties, PartialEq)]
pub struct IntroductionProps {
    pub id: String,
}

#[function_component(Introduction)]
pub fn introduction(props: &IntroductionProps) -> Html {
    let navigator = use_navigator();

    let Some(offering) = Offering::from_id(&props.id) else {
        warn!("Unknown assessment type: {}", props.id);
        return html! { <InvalidAssessment /> };
    };
    let content = offering.content();

    let on_back = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Landing);
            }
        })
    };

    let on_continue = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::PreCall { id: offering.id().to_string() });
        }
    });

    html! {
        <div class="assessment-page">
            <button class="back-button" onclick={on_back}>
                {"← Back to assessments"}
            </button>

            <h1>{content.title}</h1>
            <div class="assessment-panel">
                { for offering.intro_paragraphs().map(|paragraph| html! { <p class="intro-text">{paragraph}</p> }) }
            </div>
            <button class="primary-button" onclick={on_continue}>
                {"Continue →"}
            </button>
        </div>
    }
}
