//! Core of the taskline interactive task list: command parsing and the in-memory store.

pub mod command;
pub mod config;
pub mod dispatch;
pub mod render;
pub mod store;
pub mod task;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::version;

    #[test]
    fn version_is_not_empty() {
        assert!(!version().is_empty());
    }
}
