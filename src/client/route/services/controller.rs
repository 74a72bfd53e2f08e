use dioxus::prelude::*;

use crate::model::service::{ServiceDto, ServicePayloadDto};

use super::examples::ExampleService;

/// Callback run once a mutation has been accepted by the server.
pub type OnSuccess = Box<dyn FnOnce()>;

/// Mutations the page can request on the current unit's catalog.
///
/// Implementations report failures themselves; `on_success` is only run on success.
pub trait ServiceMutations {
    fn create(&self, payload: ServicePayloadDto, on_success: Option<OnSuccess>);
    fn update(&self, service_id: i32, payload: ServicePayloadDto, on_success: Option<OnSuccess>);
    fn delete(&self, service_id: i32);
}

/// Page-local modal state.
///
/// The modal is shown iff `open`; `editing` decides between create and edit mode.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditState {
    editing: Option<ServiceDto>,
    open: bool,
}

impl EditState {
    pub fn open_for_create(&mut self) {
        self.editing = None;
        self.open = true;
    }

    pub fn open_for_edit(&mut self, service: ServiceDto) {
        self.editing = Some(service);
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.editing = None;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn editing(&self) -> Option<&ServiceDto> {
        self.editing.as_ref()
    }
}

/// Shared handle to the edit state, so success callbacks can close the modal later.
pub trait EditStateHandle: Clone + 'static {
    fn snapshot(&self) -> EditState;
    fn update(&self, f: impl FnOnce(&mut EditState));
}

impl EditStateHandle for Signal<EditState> {
    fn snapshot(&self) -> EditState {
        self.read().clone()
    }

    fn update(&self, f: impl FnOnce(&mut EditState)) {
        let mut signal = *self;
        f(&mut signal.write());
    }
}

/// Wires user actions on the services page to the edit state and the catalog mutations.
#[derive(Clone, Copy)]
pub struct PageController<S, M> {
    state: S,
    mutations: M,
}

impl<S: EditStateHandle, M: ServiceMutations> PageController<S, M> {
    pub fn new(state: S, mutations: M) -> Self {
        Self { state, mutations }
    }

    pub fn open_for_create(&self) {
        self.state.update(EditState::open_for_create);
    }

    pub fn open_for_edit(&self, service: ServiceDto) {
        self.state.update(|state| state.open_for_edit(service));
    }

    pub fn close(&self) {
        self.state.update(EditState::close);
    }

    /// Updates the service being edited, or creates a new one in create mode.
    ///
    /// The modal closes only once the mutation succeeds.
    pub fn submit(&self, payload: ServicePayloadDto) {
        let editing_id = self.state.snapshot().editing().map(|service| service.id);
        let state = self.state.clone();
        let close: OnSuccess = Box::new(move || state.update(EditState::close));

        match editing_id {
            Some(service_id) => self.mutations.update(service_id, payload, Some(close)),
            None => self.mutations.create(payload, Some(close)),
        }
    }

    /// Confirmation happens in the card before this is called.
    pub fn delete(&self, service_id: i32) {
        self.mutations.delete(service_id);
    }

    pub fn add_example(&self, example: &ExampleService) {
        self.mutations.create(example.payload(), None);
    }
}

/// What the services page shows, in order of precedence.
#[derive(Clone, Debug, PartialEq)]
pub enum PageView {
    UnitLoading,
    ServicesLoading,
    Examples,
    Catalog(Vec<ServiceDto>),
}

impl PageView {
    pub fn derive(unit_loading: bool, services_loading: bool, services: Vec<ServiceDto>) -> Self {
        if unit_loading {
            PageView::UnitLoading
        } else if services_loading {
            PageView::ServicesLoading
        } else if services.is_empty() {
            PageView::Examples
        } else {
            PageView::Catalog(services)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use chrono::Utc;

    use super::*;
    use crate::client::route::services::examples::EXAMPLE_SERVICES;

    type SharedState = Rc<RefCell<EditState>>;

    impl EditStateHandle for SharedState {
        fn snapshot(&self) -> EditState {
            self.borrow().clone()
        }

        fn update(&self, f: impl FnOnce(&mut EditState)) {
            f(&mut self.borrow_mut());
        }
    }

    #[derive(Debug, PartialEq)]
    enum Call {
        Create(ServicePayloadDto),
        Update(i32, ServicePayloadDto),
        Delete(i32),
    }

    #[derive(Clone)]
    struct RecordingMutations {
        calls: Rc<RefCell<Vec<Call>>>,
        succeed: bool,
    }

    impl RecordingMutations {
        fn new(succeed: bool) -> Self {
            Self {
                calls: Rc::new(RefCell::new(Vec::new())),
                succeed,
            }
        }

        fn finish(&self, on_success: Option<OnSuccess>) {
            if let (true, Some(on_success)) = (self.succeed, on_success) {
                on_success();
            }
        }
    }

    impl ServiceMutations for RecordingMutations {
        fn create(&self, payload: ServicePayloadDto, on_success: Option<OnSuccess>) {
            self.calls.borrow_mut().push(Call::Create(payload));
            self.finish(on_success);
        }

        fn update(&self, service_id: i32, payload: ServicePayloadDto, on_success: Option<OnSuccess>) {
            self.calls
                .borrow_mut()
                .push(Call::Update(service_id, payload));
            self.finish(on_success);
        }

        fn delete(&self, service_id: i32) {
            self.calls.borrow_mut().push(Call::Delete(service_id));
        }
    }

    fn controller(
        succeed: bool,
    ) -> (
        PageController<SharedState, RecordingMutations>,
        SharedState,
        RecordingMutations,
    ) {
        let state = SharedState::default();
        let mutations = RecordingMutations::new(succeed);
        (
            PageController::new(state.clone(), mutations.clone()),
            state,
            mutations,
        )
    }

    fn service(id: i32, name: &str) -> ServiceDto {
        let now = Utc::now();
        ServiceDto {
            id,
            unit_id: 1,
            name: name.to_string(),
            price: 45.0,
            duration_minutes: 30,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    fn payload(name: &str) -> ServicePayloadDto {
        ServicePayloadDto {
            name: name.to_string(),
            price: 50.0,
            duration_minutes: 35,
            is_active: false,
        }
    }

    #[test]
    fn open_for_create_clears_edit_reference() {
        let (controller, state, _) = controller(true);

        controller.open_for_edit(service(1, "Barba"));
        controller.open_for_create();

        assert!(state.borrow().is_open());
        assert_eq!(state.borrow().editing(), None);
    }

    #[test]
    fn close_resets_state() {
        let (controller, state, _) = controller(true);

        controller.open_for_edit(service(1, "Barba"));
        controller.close();

        assert_eq!(*state.borrow(), EditState::default());
    }

    #[test]
    fn submit_in_edit_mode_updates_edited_service() {
        let (controller, _, mutations) = controller(true);

        controller.open_for_edit(service(7, "Barba"));
        controller.submit(payload("Barba Completa"));

        assert_eq!(
            *mutations.calls.borrow(),
            vec![Call::Update(7, payload("Barba Completa"))]
        );
    }

    #[test]
    fn submit_in_create_mode_creates() {
        let (controller, _, mutations) = controller(true);

        controller.open_for_create();
        controller.submit(payload("Luzes"));

        assert_eq!(*mutations.calls.borrow(), vec![Call::Create(payload("Luzes"))]);
    }

    #[test]
    fn successful_submit_closes_modal() {
        let (controller, state, _) = controller(true);

        controller.open_for_edit(service(7, "Barba"));
        controller.submit(payload("Barba"));

        assert!(!state.borrow().is_open());
        assert_eq!(state.borrow().editing(), None);
    }

    #[test]
    fn failed_submit_keeps_modal_open() {
        let (controller, state, _) = controller(false);

        controller.open_for_edit(service(7, "Barba"));
        controller.submit(payload("Barba"));

        assert!(state.borrow().is_open());
        assert_eq!(state.borrow().editing().map(|s| s.id), Some(7));
    }

    #[test]
    fn delete_goes_straight_to_mutation() {
        let (controller, state, mutations) = controller(true);

        controller.delete(3);

        assert_eq!(*mutations.calls.borrow(), vec![Call::Delete(3)]);
        assert!(!state.borrow().is_open());
    }

    #[test]
    fn add_example_creates_active_service_without_opening_modal() {
        let (controller, state, mutations) = controller(true);
        let barba = EXAMPLE_SERVICES
            .iter()
            .find(|e| e.name == "Barba")
            .expect("Barba example");

        controller.add_example(barba);

        assert_eq!(
            *mutations.calls.borrow(),
            vec![Call::Create(ServicePayloadDto {
                name: "Barba".to_string(),
                price: 30.0,
                duration_minutes: 20,
                is_active: true,
            })]
        );
        assert!(!state.borrow().is_open());
    }

    #[test]
    fn unit_loading_shows_only_spinner() {
        assert_eq!(
            PageView::derive(true, false, vec![service(1, "Barba")]),
            PageView::UnitLoading
        );
        assert_eq!(PageView::derive(true, true, vec![]), PageView::UnitLoading);
    }

    #[test]
    fn services_loading_precedes_content() {
        assert_eq!(
            PageView::derive(false, true, vec![service(1, "Barba")]),
            PageView::ServicesLoading
        );
    }

    #[test]
    fn empty_catalog_shows_examples() {
        assert_eq!(PageView::derive(false, false, vec![]), PageView::Examples);
        assert_eq!(EXAMPLE_SERVICES.len(), 8);
    }

    #[test]
    fn catalog_keeps_accessor_order() {
        let services = vec![service(2, "Barba"), service(1, "Corte")];

        match PageView::derive(false, false, services.clone()) {
            PageView::Catalog(shown) => assert_eq!(shown, services),
            other => panic!("expected catalog, got {:?}", other),
        }
    }
}
