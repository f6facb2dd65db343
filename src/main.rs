use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod api;
mod config;
mod content;
mod error;
mod models;
mod components {
    pub mod country_code_select;
    pub mod invalid_assessment;
    pub mod phone_input;
}
mod pages {
    pub mod intro;
    pub mod landing;
    pub mod not_found;
    pub mod pre_call;
}

use pages::{
    intro::Introduction,
    landing::Landing,
    not_found::NotFound,
    pre_call::PreCall,
};

const LOGO_URL: &str = "https://cdn.prod.website-files.com/66d8df543029dd65661ce227/66e987ef0f6d0151f4c8d610_loghana-p-500.png";

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Landing,
    #[at("/intro/:id")]
    Intro { id: String },
    #[at("/pre-call/:id")]
    PreCall { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Landing => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::Intro { id } => {
            info!("Rendering Introduction page for {}", id);
            html! { <Introduction id={id} /> }
        },
        Route::PreCall { id } => {
            info!("Rendering Pre-call page for {}", id);
            // Keyed so switching assessments starts from a fresh form.
            html! { <PreCall key={id.clone()} id={id.clone()} /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component(Header)]
fn header() -> Html {
    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <Link<Route> to={Route::Landing} classes="nav-logo">
                    <img src={LOGO_URL} alt="Hana Logo" />
                </Link<Route>>
            </div>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <style>
                {r#"
                body { margin: 0; background: #f9fafb; font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif; }
                .top-nav { background: #fff; box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05); }
                .nav-content { max-width: 80rem; margin: 0 auto; padding: 0 2rem; height: 4rem; display: flex; align-items: center; }
                .nav-logo img { height: 4rem; }
                main { max-width: 80rem; margin: 0 auto; padding: 2rem; }
                .assessment-page { max-width: 42rem; margin: 0 auto; }
                .assessment-page h1 { font-size: 1.875rem; color: #111827; margin-bottom: 1.5rem; }
                .assessment-panel { background: #fff; border-radius: 12px; box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1); padding: 2rem; margin-bottom: 2rem; }
                .intro-text { color: #4b5563; line-height: 1.6; }
                .back-button { background: none; border: none; color: #4b5563; cursor: pointer; margin-bottom: 1.5rem; font-size: 1rem; }
                .back-button:hover { color: #111827; }
                .primary-button {
                    display: block; width: 100%; background: #2563eb; color: #fff; border: none;
                    border-radius: 8px; padding: 0.75rem 1.5rem; font-size: 1rem; cursor: pointer;
                    text-align: center; text-decoration: none;
                }
                .primary-button:hover { background: #1d4ed8; }
                .primary-button:disabled { opacity: 0.6; cursor: not-allowed; }
                .experience-list { list-style: none; padding: 0; margin-bottom: 2rem; }
                .experience-list li { color: #4b5563; margin-bottom: 0.75rem; }
                .check-icon { color: #22c55e; margin-right: 0.75rem; }
                .form-field { margin-bottom: 1.5rem; }
                .form-field label { display: block; font-size: 0.875rem; color: #374151; margin-bottom: 0.5rem; }
                .form-field > input { width: 100%; padding: 0.5rem 0.75rem; border: 1px solid #d1d5db; border-radius: 6px; box-sizing: border-box; }
                .call-type-display { display: flex; justify-content: space-between; padding: 0.75rem; background: #f9fafb; border-radius: 8px; color: #4b5563; }
                .phone-input { display: flex; }
                .phone-input input { flex: 1; padding: 0.5rem 0.75rem; border: 1px solid #d1d5db; border-radius: 0 6px 6px 0; }
                .country-code-select { position: relative; }
                .country-code-button { padding: 0.5rem 1rem; border: 1px solid #d1d5db; border-right: none; border-radius: 6px 0 0 6px; background: #f9fafb; color: #6b7280; cursor: pointer; }
                .country-flag { margin-right: 0.5rem; }
                .chevron { margin-left: 0.5rem; }
                .country-code-list { position: absolute; z-index: 10; width: 100%; margin: 0.25rem 0 0; padding: 0.25rem 0; list-style: none; background: #fff; border: 1px solid #e5e7eb; border-radius: 6px; box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1); max-height: 14rem; overflow: auto; }
                .country-code-option { padding: 0.5rem 0.75rem; cursor: pointer; display: flex; align-items: center; }
                .country-code-option:hover { background: #f3f4f6; }
                .field-help, .privacy-note { font-size: 0.875rem; color: #6b7280; }
                .privacy-note { text-align: center; }
                .success-message { color: #15803d; margin-top: 1rem; }
                .error-message { color: #b91c1c; margin-top: 1rem; }
                .loading-spinner {
                    display: inline-block; width: 16px; height: 16px;
                    border: 3px solid rgba(255,255,255,.3); border-radius: 50%; border-top-color: #fff;
                    animation: spin 1s ease-in-out infinite; vertical-align: middle;
                }
                @keyframes spin { to { transform: rotate(360deg); } }
                "#}
            </style>
            <Header />
            <main>
                <Switch<Route> render={switch} />
            </main>
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_map_to_pages() {
        assert_eq!(Route::recognize("/"), Some(Route::Landing));
        assert_eq!(
            Route::recognize("/intro/depression"),
            Some(Route::Intro { id: "depression".to_string() })
        );
        assert_eq!(
            Route::recognize("/pre-call/medication"),
            Some(Route::PreCall { id: "medication".to_string() })
        );
    }

    #[test]
    fn unknown_ids_still_reach_the_page() {
        assert_eq!(
            Route::recognize("/intro/anxiety"),
            Some(Route::Intro { id: "anxiety".to_string() })
        );
    }

    #[test]
    fn unmatched_paths_fall_back_to_not_found() {
        assert_eq!(Route::recognize("/pricing"), Some(Route::NotFound));
        assert_eq!(Route::recognize("/intro"), Some(Route::NotFound));
        assert_eq!(Route::recognize("/intro/depression/extra"), Some(Route::NotFound));
    }

    #[test]
    fn routes_render_back_to_paths() {
        assert_eq!(Route::Landing.to_path(), "/");
        assert_eq!(Route::Intro { id: "treatment".to_string() }.to_path(), "/intro/treatment");
        assert_eq!(Route::PreCall { id: "depression".to_string() }.to_path(), "/pre-call/depression");
    }

    #[test]
    fn switch_builds_every_page() {
        let routes = [
            Route::Landing,
            Route::Intro { id: "depression".to_string() },
            Route::PreCall { id: "depression".to_string() },
            Route::PreCall { id: "anxiety".to_string() },
            Route::NotFound,
        ];
        for route in routes {
            let _page: Html = switch(route);
        }
    }
}
