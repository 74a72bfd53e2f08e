use dioxus::prelude::*;

use crate::{client::model::cache::Cache, model::unit::UnitDto};

#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::api::get_units;

/// The unit the page is scoped to, as seen by consumers of the tenant context.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurrentUnit {
    pub unit_id: Option<i32>,
    pub is_loading: bool,
}

#[derive(Clone, Default, PartialEq)]
pub struct UnitState {
    pub units: Cache<Vec<UnitDto>>,
    selected: Option<i32>,
}

impl UnitState {
    /// Resolves the active unit.
    ///
    /// An explicit selection wins while it still exists; otherwise the first
    /// unit is used.
    pub fn current(&self) -> CurrentUnit {
        let units = self.units();
        let unit_id = self
            .selected
            .filter(|id| units.iter().any(|unit| unit.id == *id))
            .or_else(|| units.first().map(|unit| unit.id));

        CurrentUnit {
            unit_id,
            is_loading: self.units.is_pending(),
        }
    }

    pub fn select(&mut self, unit_id: i32) {
        self.selected = Some(unit_id);
    }

    pub fn units(&self) -> &[UnitDto] {
        self.units.data().map(Vec::as_slice).unwrap_or_default()
    }
}

/// Provides the tenant context and loads the unit list on the web.
pub fn use_unit_provider() -> Signal<UnitState> {
    let state = use_context_provider(|| Signal::new(UnitState::default()));

    #[cfg(feature = "web")]
    {
        let mut state = state;
        let future = use_resource(get_units);

        use_effect(move || {
            if let Some(result) = &*future.read_unchecked() {
                state.write().units = match result {
                    Ok(units) => Cache::Fetched(units.clone()),
                    Err(err) => {
                        tracing::error!("Failed to fetch units: {}", err);
                        Cache::Error(err.clone())
                    }
                };
            }
        });
    }

    state
}

pub fn use_unit_state() -> Signal<UnitState> {
    use_context::<Signal<UnitState>>()
}

pub fn use_current_unit() -> CurrentUnit {
    use_unit_state().read().current()
}
