use std::future::Future;

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        model::{cache::UnitCache, error::ApiError},
        route::services::controller::{OnSuccess, ServiceMutations},
        store::toast::{use_toasts, Toasts},
    },
    model::service::{ServiceDto, ServicePayloadDto},
};

#[cfg(feature = "web")]
use crate::client::api;

/// An asynchronous write against the API, with its pending state.
///
/// Any number of calls may be in flight; the mutation is pending while at least one is.
pub struct Mutation<A: 'static> {
    in_flight: Signal<u32>,
    action: Callback<(A, Option<OnSuccess>)>,
}

impl<A: 'static> Clone for Mutation<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: 'static> Copy for Mutation<A> {}

impl<A: 'static> Mutation<A> {
    pub fn mutate(&self, args: A, on_success: Option<OnSuccess>) {
        self.action.call((args, on_success));
    }

    pub fn is_pending(&self) -> bool {
        *self.in_flight.read() > 0
    }
}

/// Spawns `run` for each call. Success bumps `refetch` then runs the caller's
/// callback; failure is logged and surfaced as a toast.
fn use_mutation<A, F, Fut>(
    failure_message: &'static str,
    mut refetch: Signal<u32>,
    mut toasts: Signal<Toasts>,
    run: F,
) -> Mutation<A>
where
    A: 'static,
    F: Fn(A) -> Fut + 'static,
    Fut: Future<Output = Result<(), ApiError>> + 'static,
{
    let mut in_flight = use_signal(|| 0u32);

    let action = use_callback(move |(args, on_success): (A, Option<OnSuccess>)| {
        let request = run(args);
        *in_flight.write() += 1;

        spawn(async move {
            let result = request.await;
            *in_flight.write() -= 1;

            match result {
                Ok(()) => {
                    *refetch.write() += 1;
                    if let Some(on_success) = on_success {
                        on_success();
                    }
                }
                Err(err) => {
                    tracing::error!("{}: {}", failure_message, err);
                    toasts.write().push(format!("{}: {}", failure_message, err));
                }
            }
        });
    });

    Mutation { in_flight, action }
}

#[cfg_attr(not(feature = "web"), allow(dead_code))]
enum ServiceRequest {
    Create(ServicePayloadDto),
    Update(i32, ServicePayloadDto),
    Delete(i32),
}

async fn send(unit_id: Option<i32>, request: ServiceRequest) -> Result<(), ApiError> {
    let unit_id = unit_id.ok_or_else(ApiError::no_unit)?;
    dispatch(unit_id, request).await
}

#[cfg(feature = "web")]
async fn dispatch(unit_id: i32, request: ServiceRequest) -> Result<(), ApiError> {
    match request {
        ServiceRequest::Create(payload) => api::create_service(unit_id, &payload).await.map(|_| ()),
        ServiceRequest::Update(service_id, payload) => {
            api::update_service(unit_id, service_id, &payload)
                .await
                .map(|_| ())
        }
        ServiceRequest::Delete(service_id) => api::delete_service(unit_id, service_id).await,
    }
}

#[cfg(not(feature = "web"))]
async fn dispatch(_unit_id: i32, _request: ServiceRequest) -> Result<(), ApiError> {
    Err(ApiError {
        status: 503,
        message: "Requests are only sent from the browser".to_string(),
    })
}

/// Busy state of the form modal: a create or an update is in flight.
fn is_saving<C: 'static, U: 'static>(create: &Mutation<C>, update: &Mutation<U>) -> bool {
    create.is_pending() || update.is_pending()
}

/// The service catalog of one unit plus its mutations.
#[derive(Clone, Copy)]
pub struct ServicesHandle {
    unit_id: Memo<Option<i32>>,
    cache: Signal<UnitCache<Vec<ServiceDto>>>,
    pub create: Mutation<ServicePayloadDto>,
    pub update: Mutation<(i32, ServicePayloadDto)>,
    pub delete: Mutation<i32>,
}

impl ServicesHandle {
    /// Services of the current unit in creation order; empty while none are known.
    pub fn services(&self) -> Vec<ServiceDto> {
        let unit_id = (self.unit_id)();
        let cache = self.cache.read();

        match (unit_id, cache.data()) {
            (Some(id), Some(services)) if cache.unit_id() == Some(id) => services.clone(),
            _ => Vec::new(),
        }
    }

    /// Loading only covers the first fetch for a unit; refetches keep showing the old list.
    pub fn is_loading(&self) -> bool {
        match (self.unit_id)() {
            Some(unit_id) => self.cache.read().is_loading_for(unit_id),
            None => false,
        }
    }

    pub fn is_saving(&self) -> bool {
        is_saving(&self.create, &self.update)
    }
}

impl ServiceMutations for ServicesHandle {
    fn create(&self, payload: ServicePayloadDto, on_success: Option<OnSuccess>) {
        self.create.mutate(payload, on_success);
    }

    fn update(&self, service_id: i32, payload: ServicePayloadDto, on_success: Option<OnSuccess>) {
        self.update.mutate((service_id, payload), on_success);
    }

    fn delete(&self, service_id: i32) {
        self.delete.mutate(service_id, None);
    }
}

/// Loads the services of `unit_id` and refetches after every successful mutation.
pub fn use_services(unit_id: Memo<Option<i32>>) -> ServicesHandle {
    let cache = use_signal(UnitCache::<Vec<ServiceDto>>::default);
    let refetch = use_signal(|| 0u32);
    let toasts = use_toasts();

    #[cfg(feature = "web")]
    {
        let mut cache = cache;
        let mut toasts = toasts;

        let future = use_resource(move || async move {
            let _ = refetch();
            let unit_id = unit_id()?;
            if cache.peek().unit_id() != Some(unit_id) {
                cache.set(UnitCache::Loading { unit_id });
            }
            Some((unit_id, api::get_services(unit_id).await))
        });

        use_effect(move || {
            if let Some(Some((unit_id, result))) = &*future.read_unchecked() {
                let unit_id = *unit_id;
                match result {
                    Ok(services) => cache.set(UnitCache::Fetched {
                        unit_id,
                        data: services.clone(),
                    }),
                    Err(err) => {
                        tracing::error!("Failed to fetch services: {}", err);
                        toasts
                            .write()
                            .push(format!("Não foi possível carregar os serviços: {}", err));
                        cache.set(UnitCache::Error {
                            unit_id,
                            error: err.clone(),
                        });
                    }
                }
            }
        });
    }

    let create = use_mutation(
        "Não foi possível criar o serviço",
        refetch,
        toasts,
        move |payload: ServicePayloadDto| send(unit_id(), ServiceRequest::Create(payload)),
    );
    let update = use_mutation(
        "Não foi possível atualizar o serviço",
        refetch,
        toasts,
        move |(service_id, payload): (i32, ServicePayloadDto)| {
            send(unit_id(), ServiceRequest::Update(service_id, payload))
        },
    );
    let delete = use_mutation(
        "Não foi possível excluir o serviço",
        refetch,
        toasts,
        move |service_id: i32| send(unit_id(), ServiceRequest::Delete(service_id)),
    );

    ServicesHandle {
        unit_id,
        cache,
        create,
        update,
        delete,
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, future::pending, rc::Rc, time::Duration};

    use dioxus::dioxus_core::{NoOpMutations, VirtualDom};

    use super::*;

    const FAILURE: &str = "Não foi possível criar o serviço";

    /// What the harness component saw on its latest render.
    #[derive(Debug, Default)]
    struct Observed {
        renders: u32,
        pending: bool,
        saving: bool,
        successes: u32,
        refetch: u32,
        toasts: Vec<String>,
    }

    /// `None` means the request never settles.
    type Outcome = Option<Result<(), ApiError>>;

    #[derive(Props, Clone)]
    struct HarnessProps {
        outcome: Outcome,
        observed: Rc<RefCell<Observed>>,
    }

    impl PartialEq for HarnessProps {
        fn eq(&self, other: &Self) -> bool {
            Rc::ptr_eq(&self.observed, &other.observed)
        }
    }

    /// Fires one create on mount; the update mutation stays idle.
    #[allow(non_snake_case)]
    fn Harness(props: HarnessProps) -> Element {
        let refetch = use_signal(|| 0u32);
        let toasts = use_signal(Toasts::default);

        let outcome = props.outcome.clone();
        let create = use_mutation(FAILURE, refetch, toasts, move |_: ()| {
            let outcome = outcome.clone();
            async move {
                match outcome {
                    Some(result) => result,
                    None => pending().await,
                }
            }
        });
        let update = use_mutation(
            "Não foi possível atualizar o serviço",
            refetch,
            toasts,
            |_: ()| async { Ok(()) },
        );

        let observed = props.observed.clone();
        use_hook(move || {
            let on_success: OnSuccess = Box::new(move || observed.borrow_mut().successes += 1);
            create.mutate((), Some(on_success));
        });

        let mut observed = props.observed.borrow_mut();
        observed.renders += 1;
        observed.pending = create.is_pending();
        observed.saving = is_saving(&create, &update);
        observed.refetch = *refetch.read();
        observed.toasts = toasts
            .read()
            .items()
            .iter()
            .map(|toast| toast.message.clone())
            .collect();

        rsx! {}
    }

    fn mount(outcome: Outcome) -> (VirtualDom, Rc<RefCell<Observed>>) {
        let observed = Rc::new(RefCell::new(Observed::default()));
        let mut dom = VirtualDom::new_with_props(
            Harness,
            HarnessProps {
                outcome,
                observed: observed.clone(),
            },
        );
        dom.rebuild_in_place();

        (dom, observed)
    }

    /// Polls spawned tasks and re-renders until nothing is left to do.
    async fn settle(dom: &mut VirtualDom) {
        for _ in 0..5 {
            if tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work())
                .await
                .is_err()
            {
                break;
            }
            dom.render_immediate(&mut NoOpMutations);
        }
    }

    #[tokio::test]
    async fn pending_while_request_in_flight() {
        let (mut dom, observed) = mount(None);

        assert!(observed.borrow().pending);
        assert!(observed.borrow().saving);

        settle(&mut dom).await;

        let observed = observed.borrow();
        assert!(observed.pending);
        assert!(observed.saving);
        assert_eq!(observed.successes, 0);
        assert_eq!(observed.refetch, 0);
    }

    #[tokio::test]
    async fn success_runs_callback_and_refetches() {
        let (mut dom, observed) = mount(Some(Ok(())));

        assert!(observed.borrow().pending);

        settle(&mut dom).await;

        let observed = observed.borrow();
        assert!(observed.renders > 1);
        assert!(!observed.pending);
        assert!(!observed.saving);
        assert_eq!(observed.successes, 1);
        assert_eq!(observed.refetch, 1);
        assert!(observed.toasts.is_empty());
    }

    #[tokio::test]
    async fn failure_shows_toast_without_callback() {
        let error = ApiError {
            status: 400,
            message: "O nome do serviço é obrigatório".to_string(),
        };
        let (mut dom, observed) = mount(Some(Err(error)));

        settle(&mut dom).await;

        let observed = observed.borrow();
        assert!(!observed.pending);
        assert!(!observed.saving);
        assert_eq!(observed.successes, 0);
        assert_eq!(observed.refetch, 0);
        assert_eq!(
            observed.toasts,
            vec![format!("{}: O nome do serviço é obrigatório", FAILURE)]
        );
    }
}
