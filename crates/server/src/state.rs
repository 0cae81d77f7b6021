use burnpin_storage::Clipboard;

/// Estado compartilhado entre os handlers.
#[derive(Clone)]
pub struct AppState {
    pub clipboard: Clipboard,
}

impl AppState {
    pub fn new(clipboard: Clipboard) -> Self {
        Self { clipboard }
    }
}
