/// Root component: tab strip, address bar, frames and error region

use crate::bridge::JsBackend;
use crate::error::LoadFailure;
use crate::loader::ProxyLoader;
use crate::registry::{TabAction, TabRegistry};
use crate::settings::{AppConfig, Layout};
use crate::tab_data::TabId;
use crate::ui::components::{AddressBar, ErrorPanel, Header, LoaderHandle, TabFrame, TabStrip};
use crate::ui::dom;
use patternfly_yew::prelude::*;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    #[prop_or_default]
    pub config: AppConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let config = &props.config;
    let layout = config.layout;

    // Start with one tab
    let registry = use_reducer(|| {
        let mut registry = TabRegistry::new();
        registry.create_tab(None);
        registry
    });
    let failure = use_state(|| None::<LoadFailure>);
    let search_template = use_state(|| config.initial_search_template());

    let loader = {
        let transport = config.transport.clone();
        use_memo((), move |_| {
            let endpoint = dom::tunnel_endpoint(&transport);
            let backend = JsBackend::connect(&transport.worker);
            LoaderHandle(Rc::new(ProxyLoader::new(backend, transport, endpoint)))
        })
    };

    let on_new = {
        let registry = registry.clone();
        Callback::from(move |_: ()| registry.dispatch(TabAction::Create(None)))
    };

    let on_switch = {
        let registry = registry.clone();
        Callback::from(move |id: TabId| registry.dispatch(TabAction::Switch(id)))
    };

    let on_close = {
        let registry = registry.clone();
        Callback::from(move |id: TabId| registry.dispatch(TabAction::Close(id)))
    };

    // Submitting navigates the active tab, or opens one when none exists
    let on_submit = {
        let registry = registry.clone();
        let failure = failure.clone();
        Callback::from(move |input: String| {
            failure.set(None);
            match registry.active_id() {
                Some(id) => registry.dispatch(TabAction::Navigate(id, input)),
                None => registry.dispatch(TabAction::Create(Some(input))),
            }
        })
    };

    let on_engine_change = {
        let search_template = search_template.clone();
        Callback::from(move |template: String| search_template.set(template))
    };

    let on_error = {
        let failure = failure.clone();
        Callback::from(move |f: LoadFailure| failure.set(Some(f)))
    };

    let active_id = registry.active_id();
    let active_has_url = registry.active().map(|t| t.url.is_some());
    let custom_template = config.search_template.clone().filter(|t| t.contains("%s"));

    let address_bar = |submit_label: &str| {
        html! {
            <AddressBar
                search_template={(*search_template).clone()}
                custom_template={custom_template.clone()}
                on_submit={on_submit.clone()}
                on_engine_change={on_engine_change.clone()}
                submit_label={submit_label.to_string()}
            />
        }
    };

    let frames = html! {
        <div id="tab-content" class="tab-content">
            {for registry.tabs().iter().map(|tab| html! {
                <TabFrame
                    key={tab.id.to_string()}
                    tab={tab.clone()}
                    active={active_id == Some(tab.id)}
                    loader={(*loader).clone()}
                    search_template={(*search_template).clone()}
                    on_error={on_error.clone()}
                />
            })}
        </div>
    };

    let tab_strip = html! {
        <TabStrip
            tabs={registry.tabs().to_vec()}
            active={active_id}
            vertical={layout == Layout::Sidebar}
            on_switch={on_switch}
            on_close={on_close}
            on_new={on_new.clone()}
        />
    };

    let home = html! {
        <div class="home">
            <p class="home-text">{"No tabs open"}</p>
            <Button onclick={Callback::from(move |_: MouseEvent| on_new.emit(()))} variant={ButtonVariant::Primary}>
                {"Start"}
            </Button>
        </div>
    };

    let show_address_bar = layout.shows_address_bar(active_has_url);

    match layout {
        Layout::Sidebar => html! {
            <div class="app sidebar-layout">
                {tab_strip}
                <main class="main-pane">
                    <Header />
                    if show_address_bar {
                        {address_bar("Go")}
                    }
                    <ErrorPanel failure={(*failure).clone()} />
                    if registry.is_empty() {
                        {home}
                    } else {
                        {frames}
                    }
                </main>
            </div>
        },
        Layout::Homepage => html! {
            <div class="app homepage-layout">
                <Header />
                {tab_strip}
                if show_address_bar {
                    <section class="start-page">
                        {address_bar("Start")}
                    </section>
                }
                <ErrorPanel failure={(*failure).clone()} />
                {frames}
            </div>
        },
    }
}
