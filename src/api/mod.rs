pub mod call;
pub mod envelope;
mod handlers;
pub mod route;
pub mod simulator;

pub use call::{ApiCall, FormData, Payload, UploadedFile, Verb};
pub use envelope::{Envelope, ErrorBody};
pub use simulator::{Simulator, SimulatorSettings, UnknownRoutePolicy, WriteMode};
