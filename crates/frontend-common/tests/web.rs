#![cfg(target_arch = "wasm32")]

use beta_frontend_common::components::BETA_NOTICE_HEADING;
use beta_frontend_common::testing::{ManualScheduler, RecordingNavigator};
use beta_frontend_common::{
    ApiConfig, Environment, GoogleLoginButton, LoginContext, LoginProvider,
};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, EventInit, HtmlElement};
use yew::prelude::*;

wasm_bindgen_test_configure!(run_in_browser);

const BUTTON: &str = "[data-testid=\"GoogleLogin\"]";
const LOGIN_URL: &str = "https://api.example.com/login";

#[derive(Properties, PartialEq)]
struct HarnessProps {
    context: LoginContext,
    show_tooltip: Option<bool>,
    #[prop_or_default]
    class: Classes,
}

#[function_component(Harness)]
fn harness(props: &HarnessProps) -> Html {
    let button = match props.show_tooltip {
        Some(show_tooltip) => html! {
            <GoogleLoginButton {show_tooltip} class={props.class.clone()} />
        },
        None => html! { <GoogleLoginButton class={props.class.clone()} /> },
    };
    html! {
        <LoginProvider context={props.context.clone()}>
            {button}
        </LoginProvider>
    }
}

struct Mounted {
    app: yew::AppHandle<Harness>,
    root: Element,
    navigator: RecordingNavigator,
    scheduler: ManualScheduler,
}

impl Mounted {
    fn button(&self) -> Element {
        self.root
            .query_selector(BUTTON)
            .unwrap()
            .expect("login button rendered")
    }

    fn tooltip(&self) -> Option<Element> {
        self.root.query_selector("[role=\"tooltip\"]").unwrap()
    }

    fn tooltip_anchor(&self) -> Element {
        self.tooltip()
            .expect("tooltip rendered")
            .parent_element()
            .unwrap()
    }

    fn tooltip_hidden(&self) -> bool {
        let tooltip = self.tooltip().expect("tooltip rendered");
        tooltip.get_attribute("aria-hidden").as_deref() == Some("true")
    }

    async fn fire(&self, event: &str) {
        let init = EventInit::new();
        init.set_bubbles(true);
        let event = Event::new_with_event_init_dict(event, &init).unwrap();
        self.tooltip_anchor().dispatch_event(&event).unwrap();
        settle().await;
    }

    async fn advance(&self, ms: u64) {
        self.scheduler.advance(ms);
        settle().await;
    }
}

async fn settle() {
    yew::platform::time::sleep(Duration::ZERO).await;
}

async fn mount(environment: Environment, show_tooltip: Option<bool>, class: Classes) -> Mounted {
    let document = gloo::utils::document();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();

    let navigator = RecordingNavigator::new();
    let scheduler = ManualScheduler::new();
    let context = LoginContext::new(
        ApiConfig::new("https://api.example.com").unwrap(),
        environment,
        Rc::new(navigator.clone()),
        Rc::new(scheduler.clone()),
    );

    let app = yew::Renderer::<Harness>::with_root_and_props(
        root.clone(),
        HarnessProps {
            context,
            show_tooltip,
            class,
        },
    )
    .render();
    settle().await;

    Mounted {
        app,
        root,
        navigator,
        scheduler,
    }
}

#[wasm_bindgen_test]
async fn renders_bare_button_without_tooltip() {
    let mounted = mount(Environment::Server, Some(false), classes!("w-full")).await;

    let button = mounted.button();
    assert_eq!(button.tag_name(), "BUTTON");
    assert!(button.text_content().unwrap().contains("Login with Google"));
    assert!(mounted.tooltip().is_none());
    assert_eq!(mounted.root.query_selector_all(BUTTON).unwrap().length(), 1);
}

#[wasm_bindgen_test]
async fn wraps_button_in_beta_tooltip_by_default() {
    let mounted = mount(Environment::Server, None, Classes::new()).await;

    let tooltip = mounted.tooltip().expect("tooltip rendered");
    assert!(tooltip.text_content().unwrap().contains(BETA_NOTICE_HEADING));
    assert!(tooltip.text_content().unwrap().contains("waitlist"));
    assert_eq!(tooltip.get_attribute("data-placement").as_deref(), Some("bottom"));
    assert_eq!(tooltip.get_attribute("aria-hidden").as_deref(), Some("true"));

    let anchor = tooltip.parent_element().unwrap();
    let button = mounted.button();
    assert!(anchor.contains(Some(&*button)));
}

#[wasm_bindgen_test]
async fn click_navigates_to_login_once() {
    let mounted = mount(Environment::browser("example.com"), None, Classes::new()).await;

    mounted.button().dyn_into::<HtmlElement>().unwrap().click();
    assert_eq!(mounted.navigator.visits(), vec![LOGIN_URL.to_string()]);
}

#[wasm_bindgen_test]
async fn localhost_auto_login_fires_after_three_seconds() {
    let mounted = mount(Environment::browser("localhost"), None, Classes::new()).await;

    mounted.scheduler.advance(2_999);
    assert_eq!(mounted.navigator.count(), 0);

    mounted.scheduler.advance(1);
    assert_eq!(mounted.navigator.visits(), vec![LOGIN_URL.to_string()]);

    mounted.scheduler.advance(10_000);
    assert_eq!(mounted.navigator.count(), 1);
}

#[wasm_bindgen_test]
async fn other_hosts_never_auto_login() {
    for host in ["example.com", "127.0.0.1"] {
        let mounted = mount(Environment::browser(host), None, Classes::new()).await;
        assert_eq!(mounted.scheduler.pending(), 0, "{host}");

        mounted.scheduler.advance(3_600_000);
        assert_eq!(mounted.navigator.count(), 0, "{host}");
        mounted.app.destroy();
    }
}

#[wasm_bindgen_test]
async fn unmount_cancels_pending_auto_login() {
    let mounted = mount(Environment::browser("localhost"), None, Classes::new()).await;
    mounted.scheduler.advance(1_000);
    assert_eq!(mounted.scheduler.pending(), 1);

    let Mounted {
        app,
        navigator,
        scheduler,
        ..
    } = mounted;
    app.destroy();
    settle().await;

    assert_eq!(scheduler.pending(), 0);
    scheduler.advance(10_000);
    assert_eq!(navigator.count(), 0);
}

#[wasm_bindgen_test]
async fn caller_class_joins_default_classes() {
    let extra = classes!("w-full", "my-login");
    let mounted = mount(Environment::Server, Some(false), extra).await;

    let class_list = mounted.button().class_list();
    let expected = [
        "w-full",
        "my-login",
        "text-sm",
        "font-normal",
        "text-default-600",
        "bg-default-100",
    ];
    for class in expected {
        assert!(class_list.contains(class), "missing {class}");
    }
}

#[wasm_bindgen_test]
async fn tooltip_shows_after_hover_delay() {
    let mounted = mount(Environment::Server, None, Classes::new()).await;

    mounted.fire("mouseenter").await;
    mounted.advance(199).await;
    assert!(mounted.tooltip_hidden());

    mounted.advance(1).await;
    assert!(!mounted.tooltip_hidden());
}

#[wasm_bindgen_test]
async fn tooltip_hides_immediately_on_mouseleave() {
    let mounted = mount(Environment::Server, None, Classes::new()).await;

    mounted.fire("mouseenter").await;
    mounted.advance(200).await;
    assert!(!mounted.tooltip_hidden());

    mounted.fire("mouseleave").await;
    assert!(mounted.tooltip_hidden());
    assert_eq!(mounted.scheduler.pending(), 0);
}

#[wasm_bindgen_test]
async fn brief_hover_never_shows_tooltip() {
    let mounted = mount(Environment::Server, None, Classes::new()).await;

    mounted.fire("mouseenter").await;
    mounted.advance(150).await;
    mounted.fire("mouseleave").await;
    assert_eq!(mounted.scheduler.pending(), 0);

    mounted.advance(1_000).await;
    assert!(mounted.tooltip_hidden());
}

#[wasm_bindgen_test]
async fn tooltip_shows_on_keyboard_focus() {
    let mounted = mount(Environment::Server, None, Classes::new()).await;

    mounted.fire("focusin").await;
    mounted.advance(200).await;
    assert!(!mounted.tooltip_hidden());

    mounted.fire("focusout").await;
    assert!(mounted.tooltip_hidden());
}

#[wasm_bindgen_test]
async fn mouseleave_keeps_tooltip_while_focused() {
    let mounted = mount(Environment::Server, None, Classes::new()).await;

    mounted.fire("focusin").await;
    mounted.advance(200).await;
    mounted.fire("mouseenter").await;
    mounted.fire("mouseleave").await;
    assert!(!mounted.tooltip_hidden());

    mounted.fire("focusout").await;
    assert!(mounted.tooltip_hidden());
}

#[wasm_bindgen_test]
async fn unmount_cancels_pending_tooltip_show() {
    let mounted = mount(Environment::Server, None, Classes::new()).await;

    mounted.fire("mouseenter").await;
    assert_eq!(mounted.scheduler.pending(), 1);

    let Mounted { app, scheduler, .. } = mounted;
    app.destroy();
    settle().await;
    assert_eq!(scheduler.pending(), 0);
}
