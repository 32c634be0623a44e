//! Command handlers with boundary logging.

pub mod failover_history;
pub mod record;
pub mod types;

pub use failover_history::FailoverHistory;
pub use record::{record_domain_mutation, DomainMutation};
pub use types::{
    FailoverEvent, GetFailoverEventRequest, GetFailoverEventResponse,
    ListFailoverHistoryRequest, ListFailoverHistoryResponse,
};
