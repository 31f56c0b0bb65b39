// Composition root of the kiosk service.
//
// Responsibilities:
// - Assemble stores, the sync engine, the session controller and the
//   employee view from configuration.
// - Expose them through one axum router.
// - Spawn the connectivity observer.

pub mod http;
pub mod state;
pub mod workers;
