use soroban_sdk::Env;

/// Current ledger timestamp, in seconds. Monotonically non-decreasing across
/// invocations, so window checks never observe time moving backwards.
pub fn now(env: &Env) -> u64 {
    env.ledger().timestamp()
}

pub fn is_before(env: &Env, instant: u64) -> bool {
    now(env) < instant
}

pub fn has_reached(env: &Env, instant: u64) -> bool {
    now(env) >= instant
}

/// True while `start <= now < end`. The end bound is exclusive: an operation
/// gated on a window is rejected at the exact end timestamp.
pub fn in_window(env: &Env, start: u64, end: u64) -> bool {
    let n = now(env);
    n >= start && n < end
}
