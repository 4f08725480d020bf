pub fn config_read_error(path: &str) -> String {
    format!("Failed to read {path}")
}

pub const CONFIG_PARSE_ERROR: &str = "Failed to parse YAML";

pub const STARTING: &str = "Starting Forbes bot...";

pub fn logged_in(user: &str) -> String {
    format!("Logged in as {user}")
}

pub fn fetch_failed(endpoint: &str, err: &str) -> String {
    format!("Error fetching data from {endpoint}: {err}")
}

pub fn fetched_records(endpoint: &str, count: usize) -> String {
    format!("Fetched {count} ranking records from {endpoint}")
}

pub fn received_message(sender: &str, body: &str) -> String {
    format!("Received message from {sender}: {body}")
}

pub fn route_failed(err: &str) -> String {
    format!("Failed to route message: {err}")
}

pub fn sync_loop_fail(err: &str) -> String {
    format!("Sync loop failed: {err}")
}

pub fn join_invite_fail(err: &str) -> String {
    format!("Failed to join room after invite: {err}")
}

pub fn record_skipped(index: usize, err: &str) -> String {
    format!("Skipping ranking record #{index}: {err}")
}
