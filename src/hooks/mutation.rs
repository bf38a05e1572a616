use std::future::Future;

use yew::Callback;

use crate::components::toast::{ToastHandle, ToastKind};
use crate::services::ApiError;

/// Mensajes de una operación create/update/delete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MutationMessages {
    pub loading: &'static str,
    pub success: &'static str,
    /// Fallback cuando el backend no manda `detail`
    pub failure: &'static str,
}

/// Callback de éxito estándar: cierra el modal (si lo hay) y recarga la lista
/// completa. Nunca se actualiza la lista localmente.
pub fn refresh_on_success<T: 'static>(close: Option<Callback<()>>, reload: Callback<()>) -> Callback<T> {
    Callback::from(move |_: T| {
        if let Some(close) = &close {
            close.emit(());
        }
        reload.emit(());
    })
}

/// Toast de carga -> request -> toast de éxito/error. En éxito se emite
/// `on_success`, que la vista usa para recargar la lista completa.
pub fn spawn_mutation<T, Fut>(
    toast: ToastHandle,
    messages: MutationMessages,
    future: Fut,
    on_success: Callback<T>,
) where
    T: 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    spawn_mutation_with(toast, messages, future, move |_| None, on_success);
}

/// Igual que `spawn_mutation`, pero el texto de éxito puede salir de la respuesta
pub fn spawn_mutation_with<T, Fut, S>(
    toast: ToastHandle,
    messages: MutationMessages,
    future: Fut,
    success_text: S,
    on_success: Callback<T>,
) where
    T: 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
    S: FnOnce(&T) -> Option<String> + 'static,
{
    let id = toast.loading(messages.loading);
    wasm_bindgen_futures::spawn_local(async move {
        match future.await {
            Ok(value) => {
                let text = success_text(&value).unwrap_or_else(|| messages.success.to_string());
                toast.resolve(id, ToastKind::Success, text);
                on_success.emit(value);
            }
            Err(e) => {
                log::error!("❌ {} ({})", messages.failure, e);
                toast.resolve(id, ToastKind::Error, e.user_message(messages.failure));
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn recorder(log: &Rc<RefCell<Vec<&'static str>>>, name: &'static str) -> Callback<()> {
        let log = log.clone();
        Callback::from(move |_| log.borrow_mut().push(name))
    }

    #[test]
    fn success_closes_the_modal_then_reloads() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let on_success: Callback<u64> =
            refresh_on_success(Some(recorder(&log, "close")), recorder(&log, "reload"));
        on_success.emit(7);
        assert_eq!(*log.borrow(), ["close", "reload"]);
    }

    #[test]
    fn delete_without_modal_only_reloads() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let on_success: Callback<()> = refresh_on_success(None, recorder(&log, "reload"));
        on_success.emit(());
        on_success.emit(());
        assert_eq!(*log.borrow(), ["reload", "reload"]);
    }
}
