//! Session gating and abuse shielding for incoming requests.
//!
//! The middleware here intercepts every matched request, checks for a valid
//! session, and then consults the shield. Both the session provider and the
//! shield sit behind traits so the gating flow stays independent of any
//! particular backend.

pub mod middleware;
pub mod session;
pub mod shield;

pub use middleware::{is_excluded, require_session, MaybeUser, SESSION_COOKIE};
pub use session::{generate_session_token, MemorySessionStore, Session, SessionStore};
pub use shield::{HeuristicShield, Shield, ShieldDecision, ShieldMode};
