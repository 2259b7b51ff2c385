/// Reusable UI components

use crate::bridge::JsBackend;
use crate::error::LoadFailure;
use crate::loader::{NavigationToken, ProxyLoader};
use crate::settings::SearchEngine;
use crate::tab_data::{Tab, TabId};
use crate::theme::{BANNER_PLACEHOLDER, SPIN_DURATION_MS, Theme};
use crate::ui::dom;
use gloo_timers::callback::Timeout;
use patternfly_yew::prelude::*;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// Shared loader handle; equal when both point at the same loader
#[derive(Clone)]
pub struct LoaderHandle(pub Rc<ProxyLoader<JsBackend>>);

impl PartialEq for LoaderHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

// === Tab strip ===

#[derive(Properties, PartialEq)]
pub struct TabStripProps {
    pub tabs: Vec<Tab>,
    pub active: Option<TabId>,
    pub vertical: bool,
    pub on_switch: Callback<TabId>,
    pub on_close: Callback<TabId>,
    pub on_new: Callback<()>,
}

#[function_component(TabStrip)]
pub fn tab_strip(props: &TabStripProps) -> Html {
    let on_new = {
        let on_new = props.on_new.clone();
        Callback::from(move |_: MouseEvent| on_new.emit(()))
    };

    html! {
        <nav id="tab-bar" class={classes!("tab-bar", props.vertical.then_some("vertical"))}>
            {for props.tabs.iter().map(|tab| {
                let id = tab.id;
                let on_switch = {
                    let on_switch = props.on_switch.clone();
                    Callback::from(move |_: MouseEvent| on_switch.emit(id))
                };
                let on_close = {
                    let on_close = props.on_close.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.stop_propagation();
                        on_close.emit(id);
                    })
                };

                html! {
                    <div
                        key={id.to_string()}
                        class={classes!("tab", (props.active == Some(id)).then_some("active"))}
                        data-id={id.to_string()}
                        title={tab.url.clone().unwrap_or_default()}
                        onclick={on_switch}
                    >
                        <span class="tab-label">{&tab.label}</span>
                        <span class="tab-close" onclick={on_close}>{"✕"}</span>
                    </div>
                }
            })}
            <Button onclick={on_new} variant={ButtonVariant::Plain}>
                {"+"}
            </Button>
        </nav>
    }
}

// === Address bar ===

#[derive(Properties, PartialEq)]
pub struct AddressBarProps {
    pub search_template: String,
    /// Configured custom template, offered next to the presets
    #[prop_or_default]
    pub custom_template: Option<String>,
    pub on_submit: Callback<String>,
    pub on_engine_change: Callback<String>,
    pub submit_label: String,
}

#[function_component(AddressBar)]
pub fn address_bar(props: &AddressBarProps) -> Html {
    let address = use_state(String::new);

    let on_input = {
        let address = address.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                address.set(input.value());
            }
        })
    };

    let on_engine = {
        let on_engine_change = props.on_engine_change.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                on_engine_change.emit(select.value());
            }
        })
    };

    let on_submit = {
        let address = address.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let input = address.trim();
            if input.is_empty() {
                return;
            }
            on_submit.emit(input.to_string());
        })
    };

    let mut engines: Vec<(String, String)> = SearchEngine::ALL
        .iter()
        .map(|engine| (engine.name().to_string(), engine.template().to_string()))
        .collect();
    if let Some(custom) = &props.custom_template {
        engines.push(("Custom".to_string(), custom.clone()));
    }

    html! {
        <form id="uv-form" class="address-form" onsubmit={on_submit}>
            <input
                id="uv-address"
                type="text"
                placeholder="Search the web freely"
                value={(*address).clone()}
                oninput={on_input}
            />
            <select id="uv-search-engine" onchange={on_engine}>
                {for engines.into_iter().map(|(name, template)| {
                    let selected = template == props.search_template;
                    html! { <option value={template} {selected}>{name}</option> }
                })}
            </select>
            <button type="submit" class="address-submit">{&props.submit_label}</button>
        </form>
    }
}

// === Tab frame ===

#[derive(Properties, PartialEq)]
pub struct TabFrameProps {
    pub tab: Tab,
    pub active: bool,
    pub loader: LoaderHandle,
    pub search_template: String,
    pub on_error: Callback<LoadFailure>,
}

/// Embedded browsing surface of one tab. Loads the tab's URL through the
/// proxy whenever a new navigation is requested.
#[function_component(TabFrame)]
pub fn tab_frame(props: &TabFrameProps) -> Html {
    let src = use_state(|| None::<String>);
    let loading = use_state(|| false);

    {
        let src = src.clone();
        let loading = loading.clone();
        let loader = props.loader.clone();
        let template = props.search_template.clone();
        let on_error = props.on_error.clone();

        use_effect_with((props.tab.url.clone(), props.tab.revision), move |(url, _)| {
            // Cancelled when a newer navigation replaces this one or the tab closes
            let token = NavigationToken::new();
            if let Some(input) = url.clone() {
                loading.set(true);
                let token = token.clone();
                spawn_local(async move {
                    match loader.0.navigate(&input, &template, &token).await {
                        Some(Ok(target)) => src.set(Some(target)),
                        Some(Err(e)) => {
                            log::error!("Failed to load {}: {}", input, e);
                            on_error.emit(LoadFailure::from(&e));
                        }
                        None => return,
                    }
                    loading.set(false);
                });
            }
            move || token.cancel()
        });
    }

    html! {
        <div class={classes!("tab-pane", props.active.then_some("active"))}>
            if *loading {
                <div class="loading-text-center">
                    <Spinner />
                </div>
            }
            <iframe
                class={classes!("tab-frame", props.active.then_some("active"))}
                data-id={props.tab.id.to_string()}
                loading="lazy"
                title="Proxy Tab"
                src={(*src).clone()}
            />
        </div>
    }
}

// === Error region ===

#[derive(Properties, PartialEq)]
pub struct ErrorPanelProps {
    pub failure: Option<LoadFailure>,
}

#[function_component(ErrorPanel)]
pub fn error_panel(props: &ErrorPanelProps) -> Html {
    let Some(failure) = &props.failure else {
        return html! {};
    };

    html! {
        <div class="message-top-margin">
            <Alert r#type={AlertType::Danger} title={failure.message.clone()} inline={true}>
                <pre id="uv-error-code">{&failure.detail}</pre>
            </Alert>
        </div>
    }
}

// === Header: banner and theme toggle ===

/// Banner plus the dark/light toggle. The theme is resolved once, after mount.
#[function_component(Header)]
pub fn header() -> Html {
    let theme = use_state(|| None::<Theme>);
    let banner = use_state(|| BANNER_PLACEHOLDER.to_string());
    let spinning = use_state(|| false);

    let show = {
        let banner = banner.clone();
        move |next: Theme| {
            dom::apply_theme_class(next);
            dom::store_theme(next);

            let banner = banner.clone();
            spawn_local(async move {
                match dom::decode_image(next.banner()).await {
                    Ok(src) => banner.set(src),
                    Err(e) => log::warn!("Failed to decode banner: {:?}", e),
                }
            });
        }
    };

    {
        let theme = theme.clone();
        let show = show.clone();
        use_effect_with((), move |_| {
            let initial = Theme::resolve(dom::stored_theme().as_deref(), dom::document_is_dark());
            log::debug!("initial theme {:?}", initial);
            show(initial);
            theme.set(Some(initial));
            || ()
        });
    }

    let on_toggle = {
        let theme = theme.clone();
        let spinning = spinning.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(current) = *theme else {
                return;
            };

            spinning.set(true);
            let spinning = spinning.clone();
            Timeout::new(SPIN_DURATION_MS, move || spinning.set(false)).forget();

            let next = current.toggled();
            show(next);
            theme.set(Some(next));
        })
    };

    let icon = (*theme).map(Theme::icon).unwrap_or_default();

    html! {
        <header class="app-header">
            <img id="banner-img" class="banner" alt="banner" src={(*banner).clone()} />
            <button id="theme-toggle" class="theme-toggle" onclick={on_toggle} disabled={theme.is_none()}>
                <span class={classes!("theme-icon", (*spinning).then_some("spin"))}>{icon}</span>
            </button>
        </header>
    }
}
