use dioxus::prelude::*;

/// How long a toast stays on screen before hiding itself.
pub const TOAST_TIMEOUT_MS: u32 = 5_000;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
}

/// Error notifications waiting to be shown, oldest first
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Toasts {
    items: Vec<Toast>,
    next_id: u32,
}

impl Toasts {
    pub fn push(&mut self, message: impl Into<String>) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.items.push(Toast {
            id,
            message: message.into(),
        });
        id
    }

    /// Removes a toast; unknown ids are ignored since the timer and the close button may race.
    pub fn dismiss(&mut self, id: u32) {
        self.items.retain(|toast| toast.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

pub fn use_toast_provider() -> Signal<Toasts> {
    use_context_provider(|| Signal::new(Toasts::default()))
}

pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}
