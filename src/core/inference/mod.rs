//! ONNX Runtime session loading utilities.

mod session;

pub(crate) use session::load_session_with;
