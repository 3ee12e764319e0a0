use beta_frontend_common::{GoogleLoginButton, LoginContext, LoginProvider};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub context: LoginContext,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <LoginProvider context={props.context.clone()}>
            <Landing />
        </LoginProvider>
    }
}

#[function_component(Landing)]
fn landing() -> Html {
    html! {
        <div class="min-h-screen bg-gradient-to-br from-gray-50 to-gray-100 dark:from-gray-900 dark:to-gray-800 flex items-center justify-center px-4">
            <div class="max-w-md w-full">
                <div class="text-center mb-8">
                    <h1 class="text-3xl font-bold bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">
                        {"Welcome back"}
                    </h1>
                    <p class="mt-2 text-gray-600 dark:text-gray-400">{"Sign in to continue"}</p>
                </div>
                <div class="bg-white dark:bg-gray-800 rounded-lg shadow-lg p-8 flex justify-center">
                    <GoogleLoginButton class="w-full" />
                </div>
                <section id="waitlist" class="mt-8 text-center">
                    <h2 class="text-lg font-semibold text-gray-900 dark:text-gray-100">
                        {"Not a beta user yet?"}
                    </h2>
                    <p class="mt-1 text-sm text-gray-600 dark:text-gray-400">
                        {"Join the waitlist and we'll let you know when a spot opens up."}
                    </p>
                </section>
            </div>
        </div>
    }
}
