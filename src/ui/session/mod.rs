mod controller;
mod intent;
mod reducer;
mod state;

pub use controller::{FetchTicket, Session, EMPTY_BATCH_MESSAGE};
pub use intent::SessionIntent;
pub use reducer::SessionReducer;
pub use state::{Phase, SessionState};
