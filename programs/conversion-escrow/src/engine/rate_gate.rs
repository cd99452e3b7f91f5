use crate::state::DepositorRecord;

/// A pending amount may only be converted at a rate published after its
/// most recent deposit
pub fn is_eligible(request_time: i64, rate_last_update_time: i64) -> bool {
    rate_last_update_time > request_time
}

/// Eligibility of a depositor who may have no record account
/// Without a record there is nothing to convert
pub fn record_is_eligible(record: Option<&DepositorRecord>, rate_last_update_time: i64) -> bool {
    record.is_some_and(|record| is_eligible(record.request_time, rate_last_update_time))
}
