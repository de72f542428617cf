//! The invocation wrapper.
//!
//! Every handler call goes through [`invoke`], which checks the declared
//! arity, runs the handler and turns the four recovered failure kinds into
//! an ordinary reply. Only `HandlerError::Fatal` escapes.

use tracing::{debug, warn};

use super::definitions::CommandDef;
use super::handlers::Params;
use super::output::CommandOutput;
use crate::error::{AssistantError, HandlerError, HandlerResult};
use crate::session::Session;

/// Runs `def` with `params` and normalises its outcome.
pub async fn invoke(
    def: &CommandDef,
    session: &mut Session,
    params: Vec<String>,
) -> Result<CommandOutput, AssistantError> {
    debug!("Invoking {} with {:?}", def.name, params);
    let outcome = call(def, session, params).await;
    normalize(def.name, outcome)
}

async fn call(
    def: &CommandDef,
    session: &mut Session,
    params: Vec<String>,
) -> HandlerResult<CommandOutput> {
    def.arity.check(def.name, params.len())?;
    let params = Params::new(def.name, params);
    def.handler.call(session, &params).await
}

/// Maps a handler outcome to a reply, or passes a fatal error on.
pub fn normalize(
    command: &str,
    outcome: HandlerResult<CommandOutput>,
) -> Result<CommandOutput, AssistantError> {
    match outcome {
        Ok(output) => Ok(output),
        Err(HandlerError::Fatal(e)) => {
            warn!("{command} failed: {e}");
            Err(e)
        }
        Err(e) => {
            debug!("{command} recovered: {e}");
            Ok(CommandOutput::Info(e.to_string()))
        }
    }
}
