use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::MouseEvent;
use crate::Route;
use crate::content::{Offering, OfferingContent};

#[derive(Properties, PartialEq)]
struct AssessmentCardProps {
    title: &'static str,
    description: &'static str,
    image: &'static str,
    onclick: Callback<MouseEvent>,
}

#[function_component(AssessmentCard)]
fn assessment_card(props: &AssessmentCardProps) -> Html {
    html! {
        <div class="assessment-card" onclick={props.onclick.clone()}>
            <div class="assessment-card-image">
                <img src={props.image} alt={props.title} loading="lazy" />
            </div>
            <div class="assessment-card-body">
                <h3>{props.title}</h3>
                <p>{props.description}</p>
            </div>
        </div>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let navigator = use_navigator();

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let cards = Offering::ALL.iter().map(|offering| {
        let offering = *offering;
        let OfferingContent { title, summary, image, .. } = offering.content();
        let onclick = {
            let navigator = navigator.clone();
            Callback::from(move |_: MouseEvent| {
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::Intro { id: offering.id().to_string() });
                }
            })
        };
        html! {
            <AssessmentCard
                key={offering.id()}
                title={*title}
                description={*summary}
                image={*image}
                onclick={onclick}
            />
        }
    });

    html! {
        <div class="landing-page">
            <style>
                {r#"
                .landing-page { text-align: center; }
                .landing-page h1 { font-size: 3.5rem; color: #111827; margin-bottom: 1rem; }
                .landing-page .subtitle { font-size: 1.25rem; color: #4b5563; margin-bottom: 3rem; }
                .assessment-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                }
                .assessment-card {
                    background: #fff;
                    border: 1px solid #f3f4f6;
                    border-radius: 12px;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                    overflow: hidden;
                    cursor: pointer;
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }
                .assessment-card:hover { transform: scale(1.05); box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1); }
                .assessment-card-image { height: 16rem; overflow: hidden; }
                .assessment-card-image img { width: 100%; height: 100%; object-fit: cover; }
                .assessment-card-body { padding: 1.5rem; text-align: left; }
                .assessment-card-body h3 { font-size: 1.125rem; color: #111827; margin-bottom: 0.5rem; }
                .assessment-card-body p { color: #4b5563; }
                @media (max-width: 768px) {
                    .assessment-grid { grid-template-columns: 1fr; }
                    .landing-page h1 { font-size: 2.25rem; }
                }
                "#}
            </style>
            <h1>{"AI Assistants that can talk to your patients"}</h1>
            <p class="subtitle">{"Choose your journey"}</p>
            <div class="assessment-grid">
                { for cards }
            </div>
        </div>
    }
}
