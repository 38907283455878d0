use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;
use qrng::config::AppConfig;
use qrng::controller::{Controller, ResultsView, Scheduler};
use qrng::particles::FLOAT_KEYFRAMES;
use qrng::prng::Prng;
use qrng::request::FormInput;
use wasm_bindgen::prelude::*;

use crate::ui_model::{
    format_options, particle_field, stat_cards, NumberField, APP_SUBTITLE, APP_TITLE,
    GENERATE_LABEL, INIT_LOG, LOADING_TEXT,
};

const PAGE_CSS: &str = "
body { margin: 0; background: #0a0a1f; color: #e8e8ff; font-family: system-ui, -apple-system, Segoe UI, Roboto, sans-serif; }
.particles { position: fixed; inset: 0; overflow: hidden; pointer-events: none; z-index: 0; }
.container { position: relative; z-index: 1; max-width: 880px; margin: 0 auto; padding: 24px; }
.controls { display: flex; gap: 12px; flex-wrap: wrap; align-items: end; margin-bottom: 16px; }
.controls label { display: flex; flex-direction: column; gap: 4px; font-size: 0.9em; }
.controls button { padding: 8px 16px; background: #8338ec; color: #fff; border: 0; border-radius: 6px; cursor: pointer; }
.controls button:disabled { opacity: 0.5; cursor: wait; }
.loading { color: #00d4ff; margin-bottom: 12px; }
.results { display: flex; flex-wrap: wrap; gap: 8px; min-height: 2em; }
.number { font-family: ui-monospace, monospace; padding: 4px 8px; border: 1px solid #00d4ff; border-radius: 4px; }
.error { color: #ff006e; text-align: center; width: 100%; }
.stats { display: grid; grid-template-columns: repeat(4, 1fr); gap: 12px; margin-top: 16px; }
.stat { background: rgba(131, 56, 236, 0.15); border-radius: 6px; padding: 8px; text-align: center; }
.stat-label { font-size: 0.8em; opacity: 0.8; }
.stat-value { font-size: 1.3em; font-family: ui-monospace, monospace; }
";

/// `setTimeout` wrapped in a promise.
struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        let ms = duration.as_millis().min(i32::MAX as u128) as i32;
        let promise = js_sys::Promise::new(&mut |resolve, _reject| {
            let scheduled = web_sys::window()
                .map(|w| {
                    w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
                        .is_ok()
                })
                .unwrap_or(false);
            if !scheduled {
                let _ = resolve.call0(&JsValue::NULL);
            }
        });
        async move {
            let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
        }
    }
}

fn browser_seed() -> u64 {
    let r = (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64;
    r ^ (js_sys::Date::now() as u64).rotate_left(32)
}

pub fn start() {
    web_sys::console::log_1(&INIT_LOG.into());
    mount_to_body(|| view! { <App /> });
}

#[component]
fn App() -> impl IntoView {
    let cfg = AppConfig::default();
    let seed = cfg.seed.unwrap_or_else(browser_seed);
    let controller = StoredValue::new_local(Rc::new(
        Controller::new(BrowserScheduler, Prng::new(seed)).with_delay(cfg.delay()),
    ));

    let bits_field = NumberField::bit_width();
    let count_field = NumberField::count();

    let (bits, set_bits) = signal(bits_field.default.to_string());
    let (count, set_count) = signal(count_field.default.to_string());
    let (format, set_format) = signal(cfg.format.label().to_string());
    let (busy, set_busy) = signal(false);
    let (results, set_results) = signal(ResultsView::default());

    let particles = particle_field(&cfg, browser_seed());

    let do_generate = move || {
        // The controller only marks itself busy once the task is polled.
        if busy.get_untracked() {
            return;
        }
        let ctl = controller.get_value();
        let input = FormInput::new(
            bits.get_untracked(),
            count.get_untracked(),
            format.get_untracked(),
        );
        set_busy.set(true);
        spawn_local(async move {
            if let Some(view) = ctl.generate(&input).await {
                set_results.set(view);
                set_busy.set(false);
            }
        });
    };

    view! {
        <style>{FLOAT_KEYFRAMES}{PAGE_CSS}</style>

        <div id="particles" class="particles">
            {particles
                .into_iter()
                .map(|p| view! { <div style=p.style()></div> })
                .collect_view()}
        </div>

        <main class="container">
            <h1>{APP_TITLE}</h1>
            <p>{APP_SUBTITLE}</p>

            <section class="controls">
                <label>
                    {bits_field.label}
                    <input
                        id=bits_field.id
                        type="number"
                        min=bits_field.min.to_string()
                        max=bits_field.max.to_string()
                        prop:value=bits
                        on:input=move |ev| set_bits.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    {count_field.label}
                    <input
                        id=count_field.id
                        type="number"
                        min=count_field.min.to_string()
                        max=count_field.max.to_string()
                        prop:value=count
                        on:input=move |ev| set_count.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Format"
                    <select
                        id="format"
                        prop:value=format
                        on:change=move |ev| set_format.set(event_target_value(&ev))
                    >
                        {format_options()
                            .into_iter()
                            .map(|(value, label)| view! { <option value=value>{label}</option> })
                            .collect_view()}
                    </select>
                </label>
                <button id="generate" disabled=move || busy.get() on:click=move |_| do_generate()>
                    {GENERATE_LABEL}
                </button>
            </section>

            <Show when=move || busy.get()>
                <div id="loading" class="loading">{LOADING_TEXT}</div>
            </Show>

            <section id="results" class="results">
                {move || {
                    let view_state = results.get();
                    match view_state.error {
                        Some(msg) => view! { <p class="error">{msg}</p> }.into_any(),
                        None => view_state
                            .entries
                            .into_iter()
                            .map(|e| view! { <span class="number">{e}</span> })
                            .collect_view()
                            .into_any(),
                    }
                }}
            </section>

            <Show when=move || results.with(|r| r.stats_visible())>
                <section id="stats" class="stats">
                    {move || {
                        results
                            .with(|r| r.statistics.as_ref().map(stat_cards))
                            .map(|cards| {
                                cards
                                    .into_iter()
                                    .map(|(label, value)| {
                                        view! {
                                            <div class="stat">
                                                <div class="stat-label">{label}</div>
                                                <div class="stat-value">{value}</div>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                            })
                    }}
                </section>
            </Show>
        </main>
    }
}
