//! Session state and the reducer that owns every transition.

use svcfind_core::{Coordinate, Service};

/// Navigation/session state for one client session.
///
/// All fields start empty; screens fill them in as the user moves through the
/// flow. Nothing here survives the session.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub postcode: Option<String>,
    pub location: Option<Coordinate>,
    pub service_type_id: Option<String>,
    pub age_filter: Option<u8>,
    pub current_service: Option<Service>,
    pub selected_services: Vec<Service>,
}

/// The closed set of session transitions. Every state change goes through one
/// of these; there is no other way to mutate a session.
#[derive(Debug, Clone)]
pub enum Action {
    SetPostcode(String),
    SetLocation(Coordinate),
    SetServiceType(String),
    SetAgeFilter(Option<u8>),
    SetCurrentService(Option<Service>),
    /// Appends without deduplication; confirming the same provider twice
    /// records it twice.
    AddSelectedService(Service),
    ResetSelectedServices,
}

/// Applies one transition to a state. Pure: no I/O, no shared state, the
/// result depends only on the arguments.
#[must_use]
pub fn reduce(mut state: SessionState, action: Action) -> SessionState {
    match action {
        Action::SetPostcode(postcode) => state.postcode = Some(postcode),
        Action::SetLocation(location) => state.location = Some(location),
        Action::SetServiceType(id) => state.service_type_id = Some(id),
        Action::SetAgeFilter(age) => state.age_filter = age,
        Action::SetCurrentService(service) => state.current_service = service,
        Action::AddSelectedService(service) => state.selected_services.push(service),
        Action::ResetSelectedServices => state.selected_services.clear(),
    }
    state
}

/// Owns one session's state and applies dispatched actions in order.
///
/// The `&mut self` receiver is the single-writer rule: two writers cannot
/// hold the store at once, so transitions commit strictly in dispatch order
/// and reads always see the latest committed state.
#[derive(Debug, Default)]
pub struct SessionStore {
    state: SessionState,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatch(&mut self, action: Action) {
        self.state = reduce(std::mem::take(&mut self.state), action);
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_service(id: &str) -> Service {
        Service {
            id: id.to_owned(),
            name: format!("Provider {id}"),
            address: "1 Example Street".to_owned(),
            telephone: "+998 71 000 0000".to_owned(),
            latitude: Some(41.31),
            longitude: Some(69.28),
            service_type_id: "type-gp".to_owned(),
            postcode: "100115".to_owned(),
        }
    }

    #[test]
    fn starts_empty() {
        let store = SessionStore::new();
        let state = store.state();
        assert!(state.postcode.is_none());
        assert!(state.location.is_none());
        assert!(state.service_type_id.is_none());
        assert!(state.age_filter.is_none());
        assert!(state.current_service.is_none());
        assert!(state.selected_services.is_empty());
    }

    #[test]
    fn each_action_touches_only_its_field() {
        let mut store = SessionStore::new();
        store.dispatch(Action::SetPostcode("100115".to_owned()));
        store.dispatch(Action::SetServiceType("type-gp".to_owned()));

        let state = store.state();
        assert_eq!(state.postcode.as_deref(), Some("100115"));
        assert_eq!(state.service_type_id.as_deref(), Some("type-gp"));
        assert!(state.location.is_none());
        assert!(state.current_service.is_none());
    }

    #[test]
    fn transitions_apply_in_dispatch_order() {
        let mut store = SessionStore::new();
        store.dispatch(Action::SetPostcode("100115".to_owned()));
        store.dispatch(Action::SetPostcode("100084".to_owned()));
        assert_eq!(store.state().postcode.as_deref(), Some("100084"));
    }

    #[test]
    fn age_filter_can_be_cleared() {
        let mut store = SessionStore::new();
        store.dispatch(Action::SetAgeFilter(Some(34)));
        assert_eq!(store.state().age_filter, Some(34));
        store.dispatch(Action::SetAgeFilter(None));
        assert!(store.state().age_filter.is_none());
    }

    #[test]
    fn selected_services_append_without_deduplication() {
        let mut store = SessionStore::new();
        store.dispatch(Action::AddSelectedService(sample_service("svc-1")));
        store.dispatch(Action::AddSelectedService(sample_service("svc-1")));
        assert_eq!(store.state().selected_services.len(), 2);
    }

    #[test]
    fn reset_clears_selected_services_only() {
        let mut store = SessionStore::new();
        store.dispatch(Action::SetPostcode("100115".to_owned()));
        store.dispatch(Action::AddSelectedService(sample_service("svc-1")));
        store.dispatch(Action::ResetSelectedServices);

        let state = store.state();
        assert!(state.selected_services.is_empty());
        assert_eq!(state.postcode.as_deref(), Some("100115"));
    }

    #[test]
    fn current_service_can_be_set_and_cleared() {
        let mut store = SessionStore::new();
        store.dispatch(Action::SetCurrentService(Some(sample_service("svc-1"))));
        assert!(store.state().current_service.is_some());
        store.dispatch(Action::SetCurrentService(None));
        assert!(store.state().current_service.is_none());
    }

    #[test]
    fn reduce_leaves_the_input_value_semantics_intact() {
        let before = SessionState::default();
        let after = reduce(before.clone(), Action::SetPostcode("100115".to_owned()));
        assert!(before.postcode.is_none());
        assert_eq!(after.postcode.as_deref(), Some("100115"));
    }
}
