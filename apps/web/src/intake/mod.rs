// Intake: everything between the user's inputs and a started analysis flow.
// Gate checks are duplicated by design — the enable/disable affordance is an
// optimization; the analyze handler's validation is authoritative.

pub mod description;
pub mod gate;
pub mod handlers;
pub mod preview;
