//! Login context and provider

use crate::config::ApiConfig;
use crate::environment::Environment;
use crate::navigation::{BrowserNavigator, Navigator};
use crate::scheduler::{BrowserScheduler, Scheduler};
use std::rc::Rc;
use yew::prelude::*;

/// Everything the login controls need from the outside world
#[derive(Clone)]
pub struct LoginContext {
    pub api: ApiConfig,
    pub environment: Environment,
    pub navigator: Rc<dyn Navigator>,
    pub scheduler: Rc<dyn Scheduler>,
}

impl LoginContext {
    pub fn new(
        api: ApiConfig,
        environment: Environment,
        navigator: Rc<dyn Navigator>,
        scheduler: Rc<dyn Scheduler>,
    ) -> Self {
        Self {
            api,
            environment,
            navigator,
            scheduler,
        }
    }

    /// Real browser location, clock and hostname
    pub fn browser(api: ApiConfig) -> Self {
        Self::new(
            api,
            Environment::detect(),
            Rc::new(BrowserNavigator),
            Rc::new(BrowserScheduler),
        )
    }
}

impl PartialEq for LoginContext {
    fn eq(&self, other: &Self) -> bool {
        self.api == other.api
            && self.environment == other.environment
            && std::ptr::addr_eq(Rc::as_ptr(&self.navigator), Rc::as_ptr(&other.navigator))
            && std::ptr::addr_eq(Rc::as_ptr(&self.scheduler), Rc::as_ptr(&other.scheduler))
    }
}

impl std::fmt::Debug for LoginContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginContext")
            .field("api", &self.api)
            .field("environment", &self.environment)
            .finish_non_exhaustive()
    }
}

/// Login provider props
#[derive(Properties, PartialEq)]
pub struct LoginProviderProps {
    pub context: LoginContext,
    pub children: Children,
}

/// Login provider component
#[function_component(LoginProvider)]
pub fn login_provider(props: &LoginProviderProps) -> Html {
    html! {
        <ContextProvider<LoginContext> context={props.context.clone()}>
            {props.children.clone()}
        </ContextProvider<LoginContext>>
    }
}

/// Hook to use the login context
#[hook]
pub fn use_login() -> LoginContext {
    use_context::<LoginContext>()
        .expect("LoginContext not found. Make sure to wrap your component with LoginProvider")
}
