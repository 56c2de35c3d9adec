use ql_session::GameSession;

pub fn run(seed: Option<u64>, sample: bool) -> Result<(), String> {
    let seed = seed.unwrap_or_else(rand::random);
    let session = if sample {
        GameSession::with_samples(seed)
    } else {
        GameSession::new(seed)
    };
    crate::tui::run(session)
}
