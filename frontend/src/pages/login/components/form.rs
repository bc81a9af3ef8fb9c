use leptos::{ev::SubmitEvent, *};

const INPUT_CLASS: &str = "h-[50px] w-full rounded-lg border border-form-control-border bg-form-control-bg px-3 text-lg text-form-control-text focus:outline-none focus:ring-2 focus:ring-action-primary-focus";

#[component]
pub fn LoginForm(
    email: RwSignal<String>,
    password: RwSignal<String>,
    #[prop(into)] submitting: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <div class="flex min-h-screen flex-col items-center justify-center bg-surface p-4">
            <main class="w-full max-w-md rounded-lg bg-surface p-6">
                <h1 class="mb-6 text-center text-2xl font-semibold text-fg">"Login"</h1>
                <form class="flex flex-col gap-4" on:submit=move |ev| on_submit.call(ev)>
                    <div class="mb-4 flex flex-col">
                        <label for="email" class="mb-1 text-sm font-semibold text-fg">
                            "Enter VIT Mail"
                        </label>
                        <input
                            id="email"
                            name="email"
                            type="email"
                            autocomplete="email"
                            required
                            class=INPUT_CLASS
                            placeholder="VIT email ID"
                            prop:value=email
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="mb-4 flex flex-col">
                        <label for="password" class="mb-1 text-sm font-semibold text-fg">
                            "Enter Password"
                        </label>
                        <input
                            id="password"
                            name="password"
                            type="password"
                            autocomplete="current-password"
                            required
                            class=INPUT_CLASS
                            placeholder="Password"
                            prop:value=password
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </div>
                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="h-[50px] w-full rounded-lg bg-action-primary-bg px-3 text-lg font-semibold text-action-primary-text hover:bg-action-primary-bg_hover focus:outline-none focus:ring-2 focus:ring-action-primary-focus disabled:opacity-50"
                    >
                        {move || if submitting.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>
            </main>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    fn render(submitting: bool) -> String {
        render_to_string(move || {
            let email = create_rw_signal("a@b.com".to_string());
            let password = create_rw_signal(String::new());
            view! {
                <LoginForm
                    email=email
                    password=password
                    submitting=Signal::derive(move || submitting)
                    on_submit=Callback::new(|_: SubmitEvent| {})
                />
            }
        })
    }

    #[test]
    fn renders_labels_and_placeholders() {
        let html = render(false);
        assert!(html.contains("Enter VIT Mail"));
        assert!(html.contains("VIT email ID"));
        assert!(html.contains("Enter Password"));
        assert!(html.contains("type=\"password\""));
        assert!(html.contains(">Login<"));
    }

    /// Attribute names on the `<button>` opening tag, quoted values dropped.
    fn button_attributes(html: &str) -> Vec<String> {
        let start = html.find("<button").expect("button rendered");
        let tag = &html[start + "<button".len()..];
        let tag = &tag[..tag.find('>').expect("button tag closed")];
        let unquoted: String = tag.split('"').step_by(2).collect();
        unquoted
            .split(|c: char| c.is_whitespace() || c == '=')
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn button_is_disabled_while_submitting() {
        let idle = render(false);
        assert!(!button_attributes(&idle).iter().any(|a| a == "disabled"));

        let busy = render(true);
        assert!(button_attributes(&busy).iter().any(|a| a == "disabled"));
        assert!(busy.contains("Logging in..."));
    }
}
