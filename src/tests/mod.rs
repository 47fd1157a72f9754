// Make common test utilities available
pub mod common;
#[cfg(not(target_arch = "wasm32"))]
mod storage;
mod ui_state;
