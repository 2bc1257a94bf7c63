pub mod mocks;

use crate::utils::{ ThemeControls, ThemePreferenceController };
use mocks::{ MemoryStore, RecordingScope };

pub fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn controller(store: MemoryStore) -> ThemePreferenceController<MemoryStore, RecordingScope> {
    setup();
    ThemePreferenceController::new(ThemeControls::default(), store, RecordingScope::default())
}
