//! Composition of services and the interactive command loop.

use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::application::services::{CharacterService, GameService};
use crate::application::Api;
use crate::config::PlayerConfig;
use crate::ports::outbound::{RandomPort, RawApiPort};
use crate::ui::{Command, PlayerController};

const PROMPT: &str = "delve> ";

pub struct RunnerDeps {
    pub raw_api: Arc<dyn RawApiPort>,
    pub rng: Arc<dyn RandomPort>,
    pub config: PlayerConfig,
}

impl RunnerDeps {
    pub fn into_controller(self) -> PlayerController {
        let RunnerDeps {
            raw_api,
            rng,
            config,
        } = self;

        let api = Api::new(raw_api);
        PlayerController::new(
            GameService::new(api.clone()),
            CharacterService::new(api),
            rng,
            config.rules,
            config.save_slot,
        )
    }
}

/// Reads commands line by line until `quit` or end of input.
pub async fn run<R, W>(
    controller: &mut PlayerController,
    input: R,
    mut output: W,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();

    output
        .write_all(b"Welcome to Delve. Type 'new' to begin or 'help' for commands.\n")
        .await?;
    output.write_all(PROMPT.as_bytes()).await?;
    output.flush().await?;

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            output.write_all(PROMPT.as_bytes()).await?;
            output.flush().await?;
            continue;
        }

        let quit = match line.parse::<Command>() {
            Ok(command) => {
                let reply = controller.handle(command).await;
                output
                    .write_all(crate::ui::terminal::render_reply(&reply).as_bytes())
                    .await?;
                reply.quit
            }
            Err(e) => {
                tracing::debug!(%line, error = %e, "unparseable command");
                output.write_all(format!("> {e}\n").as_bytes()).await?;
                false
            }
        };

        if quit {
            break;
        }
        output.write_all(PROMPT.as_bytes()).await?;
        output.flush().await?;
    }

    tracing::info!("session ended");
    output.write_all(b"Farewell.\n").await?;
    output.flush().await
}
