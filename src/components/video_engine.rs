//! Video Engine - drives the embedded playback engine outside of the
//! component render cycle and keeps the control-surface signals in sync.

// Shared imports, state types, and browser-only utility helpers.
include!("video_engine/shared_types_and_engine_helpers.rs");
// wasm-bindgen surface of the embedded player object.
include!("video_engine/engine_bindings.rs");
// Ready-guarded engine handle shared with UI components via context.
include!("video_engine/engine_handle.rs");
// Web (wasm) video controller component.
include!("video_engine/controller_web.rs");
// Native (non-wasm) video controller stub.
include!("video_engine/controller_native.rs");
