use serde::Serialize;

/// Output of the hello-world task wrapped by `POST /api/v1/hello`.
#[derive(Debug, Serialize)]
pub struct HelloOutput {
    pub message: &'static str,
    pub status: &'static str,
}

/// The single piece of wrapped logic. Deterministic and side-effect-free.
pub fn hello_world() -> HelloOutput {
    HelloOutput {
        message: "Hello, World!",
        status: "success",
    }
}
