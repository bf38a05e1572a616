// ============================================================================
// USE RESOURCE - patrón de carga de cada vista
// ============================================================================
// Montaje / cambio de dependencias -> Begin(gen) -> fetch -> Loaded | Failed.
// Cada carga lleva un número de generación: solo se aplica la respuesta de la
// última carga emitida, así una respuesta vieja nunca pisa una nueva.
// Invalidate sube `reload`, que es dependencia del efecto -> recarga completa.
// ============================================================================

use std::future::Future;
use std::rc::Rc;

use yew::prelude::*;

use crate::components::toast::use_toast;
use crate::services::ApiError;

/// Qué pasa con los datos previos si la carga falla
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    KeepPrevious,
    Clear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    pub policy: FailurePolicy,
    pub error_message: &'static str,
    /// Toast de error (si no, la vista muestra `error` inline)
    pub notify: bool,
}

impl LoadOptions {
    pub const fn keep(error_message: &'static str) -> Self {
        Self {
            policy: FailurePolicy::KeepPrevious,
            error_message,
            notify: true,
        }
    }

    pub const fn clear_inline(error_message: &'static str) -> Self {
        Self {
            policy: FailurePolicy::Clear,
            error_message,
            notify: false,
        }
    }

    pub const fn keep_inline(error_message: &'static str) -> Self {
        Self {
            policy: FailurePolicy::KeepPrevious,
            error_message,
            notify: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
    pub reload: u32,
    policy: FailurePolicy,
    generation: u64,
}

pub enum ResourceAction<T> {
    Begin(u64),
    Loaded(u64, T),
    Failed(u64, String),
    Invalidate,
}

impl<T: Clone> ResourceState<T> {
    pub fn new(policy: FailurePolicy) -> Self {
        Self {
            data: None,
            loading: true,
            error: None,
            reload: 0,
            policy,
            generation: 0,
        }
    }

    /// Transición pura; None = acción descartada (respuesta de una carga vieja)
    pub fn apply(&self, action: ResourceAction<T>) -> Option<Self> {
        let mut next = self.clone();
        match action {
            ResourceAction::Begin(generation) => {
                if generation < self.generation {
                    return None;
                }
                next.generation = generation;
                next.loading = true;
                next.error = None;
            }
            ResourceAction::Loaded(generation, value) => {
                if generation != self.generation {
                    return None;
                }
                next.data = Some(value);
                next.loading = false;
            }
            ResourceAction::Failed(generation, message) => {
                if generation != self.generation {
                    return None;
                }
                if self.policy == FailurePolicy::Clear {
                    next.data = None;
                }
                next.error = Some(message);
                next.loading = false;
            }
            ResourceAction::Invalidate => {
                next.reload = self.reload.wrapping_add(1);
            }
        }
        Some(next)
    }
}

impl<T: Clone + 'static> Reducible for ResourceState<T> {
    type Action = ResourceAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match self.apply(action) {
            Some(next) => Rc::new(next),
            None => {
                log::debug!("⏭️ Respuesta descartada (generación {} ya no es la actual)", self.generation);
                self
            }
        }
    }
}

pub struct ResourceHandle<T: Clone + 'static> {
    pub state: UseReducerHandle<ResourceState<T>>,
    /// Fuerza una recarga completa con las mismas dependencias
    pub reload: Callback<()>,
}

impl<T: Clone + 'static> ResourceHandle<T> {
    pub fn data(&self) -> Option<&T> {
        self.state.data.as_ref()
    }

    pub fn loading(&self) -> bool {
        self.state.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }
}

/// `deps == None` significa que faltan prerequisitos (ej. identidad sin
/// resolver): no se hace request y el recurso sigue en estado de carga.
#[hook]
pub fn use_resource<T, D, F, Fut>(options: LoadOptions, deps: Option<D>, fetch: F) -> ResourceHandle<T>
where
    T: Clone + PartialEq + 'static,
    D: Clone + PartialEq + 'static,
    F: FnOnce(D) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let state = use_reducer(move || ResourceState::<T>::new(options.policy));
    let issued = use_mut_ref(|| 0u64);
    let toast = use_toast();

    {
        let dispatcher = state.dispatcher();
        let reload = state.reload;
        use_effect_with((deps, reload), move |(deps, _)| {
            if let Some(deps) = deps.clone() {
                let generation = {
                    let mut issued = issued.borrow_mut();
                    *issued += 1;
                    *issued
                };
                dispatcher.dispatch(ResourceAction::Begin(generation));

                let future = fetch(deps);
                wasm_bindgen_futures::spawn_local(async move {
                    let result = future.await;
                    let is_current = *issued.borrow() == generation;
                    match result {
                        Ok(value) => dispatcher.dispatch(ResourceAction::Loaded(generation, value)),
                        Err(e) => {
                            log::error!("❌ {} ({})", options.error_message, e);
                            if options.notify && is_current {
                                toast.error(options.error_message);
                            }
                            dispatcher.dispatch(ResourceAction::Failed(
                                generation,
                                options.error_message.to_string(),
                            ));
                        }
                    }
                });
            }
            || ()
        });
    }

    let reload = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(ResourceAction::Invalidate))
    };

    ResourceHandle { state, reload }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(policy: FailurePolicy, value: &str) -> ResourceState<String> {
        let s = ResourceState::new(policy);
        let s = s.apply(ResourceAction::Begin(1)).unwrap();
        s.apply(ResourceAction::Loaded(1, value.to_string())).unwrap()
    }

    #[test]
    fn starts_in_loading_state() {
        let s = ResourceState::<u8>::new(FailurePolicy::KeepPrevious);
        assert!(s.loading);
        assert_eq!(s.data, None);
    }

    #[test]
    fn success_replaces_data() {
        let s = loaded(FailurePolicy::KeepPrevious, "a");
        let s = s.apply(ResourceAction::Begin(2)).unwrap();
        assert!(s.loading);
        assert_eq!(s.data.as_deref(), Some("a"));
        let s = s.apply(ResourceAction::Loaded(2, "b".into())).unwrap();
        assert!(!s.loading);
        assert_eq!(s.data.as_deref(), Some("b"));
    }

    #[test]
    fn failure_keeps_previous_data_for_lists() {
        let s = loaded(FailurePolicy::KeepPrevious, "a")
            .apply(ResourceAction::Begin(2))
            .unwrap()
            .apply(ResourceAction::Failed(2, "Error al cargar los datos.".into()))
            .unwrap();
        assert_eq!(s.data.as_deref(), Some("a"));
        assert_eq!(s.error.as_deref(), Some("Error al cargar los datos."));
        assert!(!s.loading);
    }

    #[test]
    fn failure_clears_data_for_reports() {
        let s = loaded(FailurePolicy::Clear, "a")
            .apply(ResourceAction::Begin(2))
            .unwrap()
            .apply(ResourceAction::Failed(2, "x".into()))
            .unwrap();
        assert_eq!(s.data, None);
    }

    #[test]
    fn stale_responses_are_discarded() {
        // Dos cargas en vuelo: la 1 responde después de la 2
        let s = ResourceState::<String>::new(FailurePolicy::KeepPrevious)
            .apply(ResourceAction::Begin(1))
            .unwrap()
            .apply(ResourceAction::Begin(2))
            .unwrap();
        let s = s.apply(ResourceAction::Loaded(2, "nuevo".into())).unwrap();
        assert!(s.apply(ResourceAction::Loaded(1, "viejo".into())).is_none());
        assert!(s.apply(ResourceAction::Failed(1, "x".into())).is_none());
        assert!(s.apply(ResourceAction::Begin(1)).is_none());
        assert_eq!(s.data.as_deref(), Some("nuevo"));
        assert_eq!(s.generation, 2);
    }

    #[test]
    fn invalidate_bumps_reload_to_refetch() {
        let s = loaded(FailurePolicy::KeepPrevious, "a");
        let s = s.apply(ResourceAction::Invalidate).unwrap();
        assert_eq!(s.reload, 1);
        assert_eq!(s.data.as_deref(), Some("a"));
        let mut wrapped = s.clone();
        wrapped.reload = u32::MAX;
        assert_eq!(wrapped.apply(ResourceAction::Invalidate).unwrap().reload, 0);
    }
}
