use crate::PlayerId;
use anyhow::Context;

/// Page-level settings, read from `<body data-…>` attributes.
///
/// | attribute          | field       | default     |
/// |--------------------|-------------|-------------|
/// | `data-player-id`   | `player_id` | required    |
/// | `data-socket-url`  | `socket`    | same origin |
/// | `data-log-level`   | `level`     | `info`      |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub player_id: PlayerId,
    pub socket: Option<String>,
    pub level: log::LevelFilter,
}

impl Config {
    pub fn parse(
        player_id: Option<String>,
        socket: Option<String>,
        level: Option<String>,
    ) -> anyhow::Result<Self> {
        let player_id = player_id
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .context("page has no data-player-id")?;
        let socket = socket
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        let level = match level {
            Some(s) => s
                .trim()
                .parse::<log::LevelFilter>()
                .with_context(|| format!("invalid data-log-level {:?}", s))?,
            None => log::LevelFilter::Info,
        };
        Ok(Self {
            player_id,
            socket,
            level,
        })
    }
}
