//! Notificaciones transitorias (loading -> éxito/error), compartidas vía contexto.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Loading,
    Success,
    Error,
}

impl ToastKind {
    fn icon(&self) -> &'static str {
        match self {
            ToastKind::Loading => "⏳",
            ToastKind::Success => "✓",
            ToastKind::Error => "✕",
        }
    }

    fn class(&self) -> &'static str {
        match self {
            ToastKind::Loading => "toast loading",
            ToastKind::Success => "toast success",
            ToastKind::Error => "toast error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}

pub enum ToastAction {
    Show(Toast),
    /// Reemplaza en el lugar un toast de carga; si ya no existe se muestra nuevo
    Resolve(Toast),
    Dismiss(u64),
}

impl ToastState {
    pub fn apply(&self, action: ToastAction) -> Self {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Show(toast) => toasts.push(toast),
            ToastAction::Resolve(toast) => match toasts.iter_mut().find(|t| t.id == toast.id) {
                Some(existing) => *existing = toast,
                None => toasts.push(toast),
            },
            ToastAction::Dismiss(id) => toasts.retain(|t| t.id != id),
        }
        Self { toasts }
    }
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

/// Handle que usan vistas y hooks. Sin provider (tests, montaje aislado)
/// solo deja el mensaje en el log.
#[derive(Clone, Default)]
pub struct ToastHandle {
    dispatcher: Option<UseReducerDispatcher<ToastState>>,
    next_id: Rc<Cell<u64>>,
    duration_ms: u32,
}

impl PartialEq for ToastHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.next_id, &other.next_id) && self.dispatcher == other.dispatcher
    }
}

impl ToastHandle {
    fn next_id(&self) -> u64 {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        id
    }

    fn push(&self, action: ToastAction) {
        if let Some(dispatcher) = &self.dispatcher {
            dispatcher.dispatch(action);
        }
    }

    fn schedule_dismiss(&self, id: u64) {
        if let Some(dispatcher) = self.dispatcher.clone() {
            Timeout::new(self.duration_ms, move || dispatcher.dispatch(ToastAction::Dismiss(id))).forget();
        }
    }

    fn show(&self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id();
        let message = message.into();
        log::info!("{} {}", kind.icon(), message);
        self.push(ToastAction::Show(Toast { id, kind, message }));
        if kind != ToastKind::Loading {
            self.schedule_dismiss(id);
        }
        id
    }

    pub fn loading(&self, message: impl Into<String>) -> u64 {
        self.show(ToastKind::Loading, message)
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.show(ToastKind::Error, message)
    }

    pub fn resolve(&self, id: u64, kind: ToastKind, message: impl Into<String>) {
        let message = message.into();
        log::info!("{} {}", kind.icon(), message);
        self.push(ToastAction::Resolve(Toast { id, kind, message }));
        self.schedule_dismiss(id);
    }

    pub fn dismiss(&self, id: u64) {
        self.push(ToastAction::Dismiss(id));
    }
}

#[hook]
pub fn use_toast() -> ToastHandle {
    use_context::<ToastHandle>().unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub duration_ms: u32,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let state = use_reducer(ToastState::default);
    let next_id = use_state(|| Rc::new(Cell::new(0u64)));

    let handle = ToastHandle {
        dispatcher: Some(state.dispatcher()),
        next_id: (*next_id).clone(),
        duration_ms: props.duration_ms,
    };

    html! {
        <ContextProvider<ToastHandle> context={handle.clone()}>
            { props.children.clone() }
            <div class="toast-stack">
                { for state.toasts.iter().map(|toast| {
                    let id = toast.id;
                    let handle = handle.clone();
                    html! {
                        <div key={id.to_string()} class={toast.kind.class()} role="status">
                            <span class="toast-icon">{ toast.kind.icon() }</span>
                            <span class="toast-message">{ &toast.message }</span>
                            <button class="btn-close" onclick={Callback::from(move |_| handle.dismiss(id))}>
                                {"✕"}
                            </button>
                        </div>
                    }
                }) }
            </div>
        </ContextProvider<ToastHandle>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: u64, kind: ToastKind, message: &str) -> Toast {
        Toast { id, kind, message: message.into() }
    }

    #[test]
    fn loading_toast_resolves_in_place() {
        let state = ToastState::default()
            .apply(ToastAction::Show(toast(1, ToastKind::Loading, "Registrando pago...")))
            .apply(ToastAction::Show(toast(2, ToastKind::Error, "otro")))
            .apply(ToastAction::Resolve(toast(1, ToastKind::Success, "Pago registrado correctamente.")));
        assert_eq!(state.toasts.len(), 2);
        assert_eq!(state.toasts[0], toast(1, ToastKind::Success, "Pago registrado correctamente."));
    }

    #[test]
    fn resolving_a_dismissed_toast_shows_it_again() {
        let state = ToastState::default().apply(ToastAction::Resolve(toast(5, ToastKind::Error, "x")));
        assert_eq!(state.toasts, vec![toast(5, ToastKind::Error, "x")]);
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let state = ToastState::default()
            .apply(ToastAction::Show(toast(1, ToastKind::Success, "a")))
            .apply(ToastAction::Show(toast(2, ToastKind::Success, "b")))
            .apply(ToastAction::Dismiss(1));
        assert_eq!(state.toasts, vec![toast(2, ToastKind::Success, "b")]);
    }

    #[test]
    fn detached_handle_still_hands_out_ids() {
        let handle = ToastHandle::default();
        let first = handle.loading("Guardando...");
        let second = handle.error("No se pudo eliminar.");
        assert_eq!((first, second), (1, 2));
        handle.resolve(first, ToastKind::Success, "Unidad creada.");
    }
}
