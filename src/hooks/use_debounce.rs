use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Devuelve `value` recién cuando deja de cambiar durante `millis`
#[hook]
pub fn use_debounce<T>(value: T, millis: u32) -> T
where
    T: Clone + PartialEq + 'static,
{
    let debounced = use_state_eq(|| value.clone());
    {
        let debounced = debounced.clone();
        use_effect_with(value, move |value| {
            let value = value.clone();
            let timeout = Timeout::new(millis, move || debounced.set(value));
            // Al cambiar otra vez antes del plazo, el drop cancela el timer
            move || drop(timeout)
        });
    }
    (*debounced).clone()
}
